//! Activity (timeline entry) domain model.
//!
//! # Invariants
//! - Activities carry no `created_at`/`updated_at`; `timestamp` is the
//!   user-settable moment the interaction happened.
//! - Activity views are ordered by `timestamp` descending.

use crate::model::validation::{require, ValidationError};
use crate::model::{merge, EntityKind, Labeled, Record, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::fmt::{Display, Formatter};

/// Interaction channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityType {
    Call,
    Email,
    Meeting,
}

impl Labeled for ActivityType {
    const VARIANTS: &'static [Self] = &[Self::Call, Self::Email, Self::Meeting];

    fn label(self) -> &'static str {
        match self {
            Self::Call => "Call",
            Self::Email => "Email",
            Self::Meeting => "Meeting",
        }
    }
}

impl Display for ActivityType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Stored activity record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(rename = "Id")]
    pub id: RecordId,
    /// Serialized as `type` to match the external schema.
    #[serde(rename = "type")]
    pub kind: ActivityType,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub contact_id: RecordId,
}

/// Input for logging an activity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityDraft {
    pub kind: ActivityType,
    pub description: String,
    /// When the interaction happened; "now" when `None`.
    pub timestamp: Option<DateTime<Utc>>,
    pub contact_id: RecordId,
}

impl ActivityDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("description", &self.description)
    }
}

/// Partial update for an activity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityPatch {
    pub kind: Option<ActivityType>,
    pub description: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
    pub contact_id: Option<RecordId>,
}

impl ActivityPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(description) = &self.description {
            require("description", description)?;
        }
        Ok(())
    }
}

impl Record for Activity {
    type Draft = ActivityDraft;
    type Patch = ActivityPatch;

    const KIND: EntityKind = EntityKind::Activity;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: ActivityDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: draft.kind,
            description: draft.description,
            timestamp: draft.timestamp.unwrap_or(now),
            contact_id: draft.contact_id,
        }
    }

    fn apply_patch(&mut self, patch: ActivityPatch, _now: DateTime<Utc>) {
        merge(&mut self.kind, patch.kind);
        merge(&mut self.description, patch.description);
        merge(&mut self.timestamp, patch.timestamp);
        merge(&mut self.contact_id, patch.contact_id);
    }

    fn order_view(records: &mut [Self]) {
        // Stable: ties keep insertion order.
        records.sort_by_key(|activity| Reverse(activity.timestamp));
    }
}
