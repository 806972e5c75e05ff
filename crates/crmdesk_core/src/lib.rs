//! Core data-access layer for the CrmDesk CRM.
//! This crate is the single source of truth for record invariants.

pub mod config;
pub mod crm;
pub mod logging;
pub mod model;
pub mod pipeline;
pub mod query;
pub mod resolve;
pub mod seed;
pub mod service;
pub mod store;

pub use config::{ConfigError, CrmConfig, LATENCY_ENV_VAR};
pub use crm::Crm;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::activity::{Activity, ActivityDraft, ActivityPatch, ActivityType};
pub use model::company::{Company, CompanyDraft, CompanyPatch, CompanyStatus};
pub use model::contact::{Contact, ContactDraft, ContactPatch, ContactStatus};
pub use model::deal::{Deal, DealDraft, DealPatch, Stage};
pub use model::validation::ValidationError;
pub use model::{EntityKind, Labeled, RecordId};
pub use pipeline::{DragSession, MoveOutcome, MoveResult, PipelineBoard, PipelineWorkflow};
pub use query::{ActivityQuery, CompanyQuery, ContactQuery, DealQuery, Filter, TextQuery};
pub use resolve::{ActivityView, ContactDirectory, DealView};
pub use seed::{SeedData, SeedError};
pub use service::deal_service::{DealListing, DealSummary};
pub use service::request_gate::{RequestGate, RequestTicket};
pub use service::{ServiceError, ServiceResult};
pub use store::latency::{LatencyProfile, StoreOp};
pub use store::{
    ActivityStore, CompanyStore, ContactStore, DealStore, EntityStore, StoreError, StoreResult,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
