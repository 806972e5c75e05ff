//! CRM domain model for contacts, companies, deals, and activities.
//!
//! # Responsibility
//! - Define canonical records, their enums, create drafts and partial patches.
//! - Define the `Record` contract the generic entity store relies on.
//!
//! # Invariants
//! - Identity is assigned by the store and is never part of a draft or patch,
//!   so callers cannot overwrite it.
//! - `created_at` is set once; `updated_at` is refreshed by every mutation.

pub mod activity;
pub mod company;
pub mod contact;
pub mod deal;
pub mod validation;

use chrono::{DateTime, Utc};
use std::fmt::{Display, Formatter};

/// Numeric identity, unique within one entity collection.
pub type RecordId = u32;

/// Parses a caller-supplied identity string.
///
/// Returns `None` for anything that is not a plain non-negative integer, which
/// callers treat as "not found" rather than an error.
pub fn parse_record_id(raw: &str) -> Option<RecordId> {
    raw.trim().parse::<RecordId>().ok()
}

/// The four record kinds held by the CRM.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Contact,
    Company,
    Deal,
    Activity,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Company => "company",
            Self::Deal => "deal",
            Self::Activity => "activity",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed set of display-named enum values (status, stage, activity type).
///
/// Display names double as wire values and filter parameters.
pub trait Labeled: Copy + Eq + Send + Sync + 'static {
    /// Every variant, in display order.
    const VARIANTS: &'static [Self];

    fn label(self) -> &'static str;

    /// Exact, case-sensitive match against [`Labeled::label`].
    fn from_label(value: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .copied()
            .find(|variant| variant.label() == value)
    }
}

/// Contract between a record type and the generic entity store.
pub trait Record: Clone + Send + Sync + 'static {
    /// Caller input for `create`; carries no identity.
    type Draft: Send + 'static;
    /// Partial update input; absent fields are left untouched.
    type Patch: Send + 'static;

    const KIND: EntityKind;

    fn id(&self) -> RecordId;

    /// Builds the stored record from a draft with store-assigned identity.
    fn from_draft(id: RecordId, draft: Self::Draft, now: DateTime<Utc>) -> Self;

    /// Merges a patch onto the record and refreshes `updated_at` to `now`.
    fn apply_patch(&mut self, patch: Self::Patch, now: DateTime<Utc>);

    /// Last modification stamp, when the kind tracks one.
    fn updated_at(&self) -> Option<DateTime<Utc>> {
        None
    }

    /// Orders a snapshot for display. Insertion order unless overridden.
    fn order_view(_records: &mut [Self]) {}
}

/// Replaces `target` when the patch carries a value.
pub(crate) fn merge<T>(target: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *target = value;
    }
}
