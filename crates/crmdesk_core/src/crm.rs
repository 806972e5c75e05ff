//! Root handle wiring the four stores to services and the pipeline.
//!
//! # Responsibility
//! - Own one store per record kind for the lifetime of the session.
//! - Hand out cheap service/workflow handles sharing those stores.
//!
//! # Invariants
//! - Every handle produced by one `Crm` observes the same collections.
//! - `reset_to_seed` restores the seeded state without simulated latency.

use crate::config::CrmConfig;
use crate::pipeline::PipelineWorkflow;
use crate::seed::{SeedData, SeedError};
use crate::service::activity_service::ActivityService;
use crate::service::company_service::CompanyService;
use crate::service::contact_service::ContactService;
use crate::service::deal_service::DealService;
use crate::store::{ActivityStore, CompanyStore, ContactStore, DealStore};
use log::info;

#[derive(Clone)]
pub struct Crm {
    config: CrmConfig,
    contacts: ContactStore,
    companies: CompanyStore,
    deals: DealStore,
    activities: ActivityStore,
}

impl Crm {
    /// Empty stores, identities starting at 1.
    pub fn new(config: CrmConfig) -> Self {
        Self::from_seed(config, SeedData::default())
    }

    /// Stores pre-populated with the embedded demo data.
    pub fn seeded(config: CrmConfig) -> Result<Self, SeedError> {
        let seed = SeedData::load()?;
        let crm = Self::from_seed(config, seed);
        info!("event=crm_seeded module=crm status=ok");
        Ok(crm)
    }

    fn from_seed(config: CrmConfig, seed: SeedData) -> Self {
        Self {
            contacts: ContactStore::new(seed.contacts, config.latency),
            companies: CompanyStore::new(seed.companies, config.company_latency),
            deals: DealStore::new(seed.deals, config.latency),
            activities: ActivityStore::new(seed.activities, config.latency),
            config,
        }
    }

    /// Drops every change made this session and reloads the seed data.
    pub async fn reset_to_seed(&self) -> Result<(), SeedError> {
        let seed = SeedData::load()?;
        self.contacts.reset(seed.contacts).await;
        self.companies.reset(seed.companies).await;
        self.deals.reset(seed.deals).await;
        self.activities.reset(seed.activities).await;
        info!("event=crm_reset module=crm status=ok");
        Ok(())
    }

    pub fn config(&self) -> &CrmConfig {
        &self.config
    }

    pub fn contacts(&self) -> &ContactStore {
        &self.contacts
    }

    pub fn companies(&self) -> &CompanyStore {
        &self.companies
    }

    pub fn deals(&self) -> &DealStore {
        &self.deals
    }

    pub fn activities(&self) -> &ActivityStore {
        &self.activities
    }

    pub fn contact_service(&self) -> ContactService {
        ContactService::new(self.contacts.clone())
    }

    pub fn company_service(&self) -> CompanyService {
        CompanyService::new(self.companies.clone())
    }

    pub fn deal_service(&self) -> DealService {
        DealService::new(self.deals.clone(), self.contacts.clone())
    }

    pub fn activity_service(&self) -> ActivityService {
        ActivityService::new(self.activities.clone(), self.contacts.clone())
    }

    pub fn pipeline(&self) -> PipelineWorkflow {
        PipelineWorkflow::new(self.deals.clone(), self.contacts.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::Crm;
    use crate::config::CrmConfig;

    #[tokio::test]
    async fn empty_crm_has_no_records() {
        let crm = Crm::new(CrmConfig::for_tests());
        assert!(crm.contacts().get_all().await.unwrap().is_empty());
        assert!(crm.deals().get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn handles_share_one_collection() {
        let crm = Crm::seeded(CrmConfig::for_tests()).unwrap();
        let before = crm.deals().get_all().await.unwrap().len();
        let first = crm.deals().get_all().await.unwrap()[0].id;
        assert!(crm.deal_service().delete(first).await.unwrap());
        assert_eq!(crm.clone().deals().get_all().await.unwrap().len(), before - 1);
    }
}
