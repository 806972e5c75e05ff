//! Contact use-case service.

use crate::model::contact::{Contact, ContactDraft, ContactPatch};
use crate::model::{EntityKind, RecordId};
use crate::query::ContactQuery;
use crate::service::{found, ServiceResult};
use crate::store::ContactStore;

/// Validated contact CRUD plus the contacts list view.
#[derive(Clone)]
pub struct ContactService {
    contacts: ContactStore,
}

impl ContactService {
    pub fn new(contacts: ContactStore) -> Self {
        Self { contacts }
    }

    pub async fn create(&self, draft: ContactDraft) -> ServiceResult<Contact> {
        draft.validate()?;
        Ok(self.contacts.create(draft).await?)
    }

    pub async fn update(&self, id: RecordId, patch: ContactPatch) -> ServiceResult<Contact> {
        patch.validate()?;
        let updated = self.contacts.update(id, patch).await?;
        found(updated, EntityKind::Contact, id)
    }

    pub async fn get(&self, id: RecordId) -> ServiceResult<Option<Contact>> {
        Ok(self.contacts.get_by_id(id).await?)
    }

    /// Removes the contact. Deals and activities that reference it are kept.
    pub async fn delete(&self, id: RecordId) -> ServiceResult<bool> {
        Ok(self.contacts.delete(id).await?)
    }

    pub async fn list(&self, query: &ContactQuery) -> ServiceResult<Vec<Contact>> {
        Ok(self.contacts.query(query).await?)
    }
}
