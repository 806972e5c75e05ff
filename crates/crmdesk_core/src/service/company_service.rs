//! Company use-case service.

use crate::model::company::{Company, CompanyDraft, CompanyPatch};
use crate::model::{EntityKind, RecordId};
use crate::query::CompanyQuery;
use crate::service::{found, ServiceResult};
use crate::store::CompanyStore;

/// Validated company CRUD plus the companies list view.
///
/// Not-found follows the same contract as every other kind: `get` yields
/// `None`, `delete` yields `false`, `update` yields `ServiceError::NotFound`.
#[derive(Clone)]
pub struct CompanyService {
    companies: CompanyStore,
}

impl CompanyService {
    pub fn new(companies: CompanyStore) -> Self {
        Self { companies }
    }

    pub async fn create(&self, draft: CompanyDraft) -> ServiceResult<Company> {
        draft.validate()?;
        Ok(self.companies.create(draft).await?)
    }

    pub async fn update(&self, id: RecordId, patch: CompanyPatch) -> ServiceResult<Company> {
        patch.validate()?;
        let updated = self.companies.update(id, patch).await?;
        found(updated, EntityKind::Company, id)
    }

    pub async fn get(&self, id: RecordId) -> ServiceResult<Option<Company>> {
        Ok(self.companies.get_by_id(id).await?)
    }

    pub async fn delete(&self, id: RecordId) -> ServiceResult<bool> {
        Ok(self.companies.delete(id).await?)
    }

    pub async fn list(&self, query: &CompanyQuery) -> ServiceResult<Vec<Company>> {
        Ok(self.companies.query(query).await?)
    }
}
