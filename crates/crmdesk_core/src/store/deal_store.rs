//! Deal-specific store reads and the stage transition.
//!
//! # Invariants
//! - `update_stage` only touches `stage` and `updated_at`.
//! - A same-stage move is not rejected here; callers suppress it.

use crate::model::deal::{Deal, Stage};
use crate::model::RecordId;
use crate::query::Filter;
use crate::store::latency::StoreOp;
use crate::store::{EntityStore, StoreResult};

pub type DealStore = EntityStore<Deal>;

impl EntityStore<Deal> {
    /// Deals whose `contact_id` equals `contact_id`, in insertion order.
    pub async fn get_by_contact_id(&self, contact_id: RecordId) -> StoreResult<Vec<Deal>> {
        self.select(StoreOp::GetByContactId, |deal| deal.contact_id == contact_id)
            .await
    }

    /// Deals in `stage`; `Filter::All` returns the full collection.
    pub async fn get_by_stage(&self, stage: Filter<Stage>) -> StoreResult<Vec<Deal>> {
        self.select(StoreOp::Filter, |deal| stage.matches(deal.stage))
            .await
    }

    /// Moves a deal to `stage`; `None` when no deal has `id`.
    pub async fn update_stage(&self, id: RecordId, stage: Stage) -> StoreResult<Option<Deal>> {
        self.modify(StoreOp::UpdateStage, id, |deal, now| {
            deal.stage = stage;
            deal.updated_at = now;
        })
        .await
    }
}
