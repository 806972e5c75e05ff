//! Activity-specific store reads. Every view is newest-first.

use crate::model::activity::{Activity, ActivityType};
use crate::model::RecordId;
use crate::query::{ActivityQuery, Filter};
use crate::store::latency::StoreOp;
use crate::store::{EntityStore, StoreResult};

pub type ActivityStore = EntityStore<Activity>;

impl EntityStore<Activity> {
    pub async fn get_by_contact_id(&self, contact_id: RecordId) -> StoreResult<Vec<Activity>> {
        self.select(StoreOp::GetByContactId, |activity| {
            activity.contact_id == contact_id
        })
        .await
    }

    /// Exact type match; `Filter::All` returns the same view as `get_all`.
    pub async fn filter_by_type(&self, kind: Filter<ActivityType>) -> StoreResult<Vec<Activity>> {
        let query = ActivityQuery { kind };
        self.select(StoreOp::Filter, |activity| query.matches(activity))
            .await
    }
}
