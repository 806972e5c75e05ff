//! Deal use-case service.
//!
//! # Invariants
//! - A deal can only be created for, or re-pointed at, an existing contact.
//! - List views are joined against a contact snapshot taken in the same call.

use crate::model::deal::{Deal, DealDraft, DealPatch};
use crate::model::{EntityKind, RecordId};
use crate::query::DealQuery;
use crate::resolve::{ContactDirectory, DealView};
use crate::service::{found, ServiceError, ServiceResult};
use crate::store::{ContactStore, DealStore};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

/// Headline figures over one deals list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealSummary {
    pub count: usize,
    pub total_value: Decimal,
    /// Mean deal value rounded to a whole amount; zero for an empty view.
    pub average_value: Decimal,
}

impl DealSummary {
    pub fn from_views(views: &[DealView]) -> Self {
        let count = views.len();
        let total_value: Decimal = views.iter().map(|view| view.deal.value).sum();
        let average_value = if count == 0 {
            Decimal::ZERO
        } else {
            (total_value / Decimal::from(count))
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        };
        Self {
            count,
            total_value,
            average_value,
        }
    }
}

/// Filtered deals plus the summary computed from the same snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DealListing {
    pub deals: Vec<DealView>,
    pub summary: DealSummary,
}

#[derive(Clone)]
pub struct DealService {
    deals: DealStore,
    contacts: ContactStore,
}

impl DealService {
    pub fn new(deals: DealStore, contacts: ContactStore) -> Self {
        Self { deals, contacts }
    }

    pub async fn create(&self, draft: DealDraft) -> ServiceResult<Deal> {
        draft.validate()?;
        self.ensure_contact(draft.contact_id).await?;
        Ok(self.deals.create(draft).await?)
    }

    pub async fn update(&self, id: RecordId, patch: DealPatch) -> ServiceResult<Deal> {
        patch.validate()?;
        if let Some(contact_id) = patch.contact_id {
            self.ensure_contact(contact_id).await?;
        }
        let updated = self.deals.update(id, patch).await?;
        found(updated, EntityKind::Deal, id)
    }

    pub async fn get(&self, id: RecordId) -> ServiceResult<Option<Deal>> {
        Ok(self.deals.get_by_id(id).await?)
    }

    pub async fn delete(&self, id: RecordId) -> ServiceResult<bool> {
        Ok(self.deals.delete(id).await?)
    }

    /// Deals list screen: filtered and joined with contact name/company.
    pub async fn list(&self, query: &DealQuery) -> ServiceResult<Vec<DealView>> {
        let (deals, contacts) = tokio::try_join!(self.deals.get_all(), self.contacts.get_all())?;
        let directory = ContactDirectory::new(&contacts);
        let matched = query.apply(&deals, &directory);
        Ok(directory.deal_views(&matched))
    }

    /// Deals list screen with its Total Deals / Total Value / Avg Deal Size row.
    pub async fn list_with_summary(&self, query: &DealQuery) -> ServiceResult<DealListing> {
        let deals = self.list(query).await?;
        let summary = DealSummary::from_views(&deals);
        Ok(DealListing { deals, summary })
    }

    pub async fn for_contact(&self, contact_id: RecordId) -> ServiceResult<Vec<Deal>> {
        Ok(self.deals.get_by_contact_id(contact_id).await?)
    }

    async fn ensure_contact(&self, contact_id: RecordId) -> ServiceResult<()> {
        match self.contacts.get_by_id(contact_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::UnknownContact(contact_id)),
        }
    }
}
