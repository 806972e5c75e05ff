//! Company-specific store reads.

use crate::model::company::{Company, CompanyStatus};
use crate::query::{CompanyQuery, Filter, TextQuery};
use crate::store::latency::StoreOp;
use crate::store::{EntityStore, StoreResult};

pub type CompanyStore = EntityStore<Company>;

impl EntityStore<Company> {
    /// Case-insensitive substring search over name, industry, email, and phone.
    pub async fn search(&self, text: &str) -> StoreResult<Vec<Company>> {
        let query = CompanyQuery {
            text: TextQuery::new(text),
            ..CompanyQuery::default()
        };
        self.query(&query).await
    }

    pub async fn filter_by_status(&self, status: Filter<CompanyStatus>) -> StoreResult<Vec<Company>> {
        let query = CompanyQuery {
            status,
            ..CompanyQuery::default()
        };
        self.query(&query).await
    }

    pub async fn query(&self, query: &CompanyQuery) -> StoreResult<Vec<Company>> {
        self.select(StoreOp::Filter, |company| query.matches(company))
            .await
    }
}
