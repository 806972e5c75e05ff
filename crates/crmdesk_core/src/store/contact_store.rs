//! Contact-specific store reads.

use crate::model::contact::{Contact, ContactStatus};
use crate::query::{ContactQuery, Filter, TextQuery};
use crate::store::latency::StoreOp;
use crate::store::{EntityStore, StoreResult};

pub type ContactStore = EntityStore<Contact>;

impl EntityStore<Contact> {
    /// Case-insensitive substring search over name, email, and company.
    pub async fn search(&self, text: &str) -> StoreResult<Vec<Contact>> {
        let query = ContactQuery {
            text: TextQuery::new(text),
            ..ContactQuery::default()
        };
        self.query(&query).await
    }

    /// Exact status match; `Filter::All` returns the full collection.
    pub async fn filter_by_status(&self, status: Filter<ContactStatus>) -> StoreResult<Vec<Contact>> {
        let query = ContactQuery {
            status,
            ..ContactQuery::default()
        };
        self.query(&query).await
    }

    /// Combined status + text view.
    pub async fn query(&self, query: &ContactQuery) -> StoreResult<Vec<Contact>> {
        self.select(StoreOp::Filter, |contact| query.matches(contact))
            .await
    }
}
