//! Use-case services in front of the entity stores.
//!
//! # Responsibility
//! - Run form-level validation and contact reference checks before writes.
//! - Build joined, filtered views for list screens.
//! - Guard UI callers against stale responses.
//!
//! # Invariants
//! - Services never bypass a store; the store stays the source of truth.
//! - After any write, callers re-fetch a view; no optimistic state is kept.

pub mod activity_service;
pub mod company_service;
pub mod contact_service;
pub mod deal_service;
pub mod request_gate;

use crate::model::validation::ValidationError;
use crate::model::{EntityKind, RecordId};
use crate::store::StoreError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service-level error for CRM use-cases.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Input failed a form rule.
    Validation(ValidationError),
    /// Update target does not exist.
    NotFound { kind: EntityKind, id: RecordId },
    /// `contact_id` does not reference an existing contact.
    UnknownContact(RecordId),
    /// Unexpected store failure.
    Store(StoreError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound { kind, id } => write!(f, "{kind} not found: {id}"),
            Self::UnknownContact(id) => write!(f, "contact does not exist: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for ServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Turns a store-level `None` into `ServiceError::NotFound`.
pub(crate) fn found<T>(record: Option<T>, kind: EntityKind, id: RecordId) -> ServiceResult<T> {
    record.ok_or(ServiceError::NotFound { kind, id })
}
