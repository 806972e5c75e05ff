//! Deal domain model and pipeline stages.
//!
//! # Invariants
//! - `value` is strictly positive for deals created through validated paths.
//! - `contact_id` points at a contact that existed when the deal was created.
//!   Later contact deletion is tolerated; see `resolve`.

use crate::model::validation::{require, require_positive, ValidationError};
use crate::model::{merge, EntityKind, Labeled, Record, RecordId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Pipeline phase of a deal, in funnel order.
///
/// Transitions are unrestricted: any stage may move to any other stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stage {
    Lead,
    Qualified,
    Proposal,
    Negotiation,
    Closed,
}

impl Stage {
    /// Zero-based column index on the pipeline board.
    pub fn position(self) -> usize {
        Self::VARIANTS
            .iter()
            .position(|stage| *stage == self)
            .unwrap_or_default()
    }
}

impl Labeled for Stage {
    const VARIANTS: &'static [Self] = &[
        Self::Lead,
        Self::Qualified,
        Self::Proposal,
        Self::Negotiation,
        Self::Closed,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Lead => "Lead",
            Self::Qualified => "Qualified",
            Self::Proposal => "Proposal",
            Self::Negotiation => "Negotiation",
            Self::Closed => "Closed",
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Stored deal record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub title: String,
    pub value: Decimal,
    pub stage: Stage,
    pub contact_id: RecordId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DealDraft {
    pub title: String,
    pub value: Decimal,
    pub stage: Stage,
    pub contact_id: RecordId,
}

impl DealDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require_positive("value", self.value)
    }
}

/// Partial update for a deal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealPatch {
    pub title: Option<String>,
    pub value: Option<Decimal>,
    pub stage: Option<Stage>,
    pub contact_id: Option<RecordId>,
}

impl DealPatch {
    /// Patch that only moves the deal to `stage`.
    pub fn stage(stage: Stage) -> Self {
        Self {
            stage: Some(stage),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(title) = &self.title {
            require("title", title)?;
        }
        if let Some(value) = self.value {
            require_positive("value", value)?;
        }
        Ok(())
    }
}

impl Record for Deal {
    type Draft = DealDraft;
    type Patch = DealPatch;

    const KIND: EntityKind = EntityKind::Deal;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: DealDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            value: draft.value,
            stage: draft.stage,
            contact_id: draft.contact_id,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: DealPatch, now: DateTime<Utc>) {
        merge(&mut self.title, patch.title);
        merge(&mut self.value, patch.value);
        merge(&mut self.stage, patch.stage);
        merge(&mut self.contact_id, patch.contact_id);
        self.updated_at = now;
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        Some(self.updated_at)
    }
}

#[cfg(test)]
mod tests {
    use super::{DealDraft, Stage};
    use crate::model::Labeled;
    use rust_decimal::Decimal;

    #[test]
    fn stages_are_ordered_like_the_funnel() {
        let positions: Vec<usize> = Stage::VARIANTS.iter().map(|s| s.position()).collect();
        assert_eq!(positions, vec![0, 1, 2, 3, 4]);
        assert!(Stage::Lead < Stage::Closed);
        assert_eq!(Stage::from_label("Negotiation"), Some(Stage::Negotiation));
        assert_eq!(Stage::from_label("negotiation"), None);
    }

    #[test]
    fn draft_rejects_non_positive_value() {
        let draft = DealDraft {
            title: "Renewal".to_string(),
            value: Decimal::ZERO,
            stage: Stage::Lead,
            contact_id: 1,
        };
        assert!(draft.validate().is_err());
    }
}
