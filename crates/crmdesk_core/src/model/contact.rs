//! Contact domain model.
//!
//! # Responsibility
//! - Define the person record other kinds point at through `contactId`.
//! - Derive the avatar initials shown next to a contact.
//!
//! # Invariants
//! - `avatar` always reflects the current `name` unless set explicitly.

use crate::model::validation::{require, ValidationError};
use crate::model::{merge, EntityKind, Labeled, Record, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Relationship status of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactStatus {
    Lead,
    Customer,
    Active,
    Inactive,
}

impl Labeled for ContactStatus {
    const VARIANTS: &'static [Self] = &[Self::Lead, Self::Customer, Self::Active, Self::Inactive];

    fn label(self) -> &'static str {
        match self {
            Self::Lead => "Lead",
            Self::Customer => "Customer",
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl Display for ContactStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Stored contact record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    /// Free-text employer name; not a reference to a `Company` record.
    pub company: String,
    pub status: ContactStatus,
    /// Uppercased initials derived from `name`.
    #[serde(default)]
    pub avatar: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub status: ContactStatus,
    /// Explicit initials; derived from `name` when `None`.
    pub avatar: Option<String>,
}

impl ContactDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            company: company.into(),
            status: ContactStatus::Lead,
            avatar: None,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("company", &self.company)
    }
}

/// Partial update for a contact.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub status: Option<ContactStatus>,
    pub avatar: Option<String>,
}

impl ContactPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require("name", name)?;
        }
        if let Some(email) = &self.email {
            require("email", email)?;
        }
        if let Some(company) = &self.company {
            require("company", company)?;
        }
        Ok(())
    }
}

impl Record for Contact {
    type Draft = ContactDraft;
    type Patch = ContactPatch;

    const KIND: EntityKind = EntityKind::Contact;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: ContactDraft, now: DateTime<Utc>) -> Self {
        let avatar = draft.avatar.unwrap_or_else(|| initials(&draft.name));
        Self {
            id,
            name: draft.name,
            email: draft.email,
            phone: draft.phone,
            company: draft.company,
            status: draft.status,
            avatar,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: ContactPatch, now: DateTime<Utc>) {
        if patch.avatar.is_none() {
            if let Some(name) = &patch.name {
                self.avatar = initials(name);
            }
        }
        merge(&mut self.name, patch.name);
        merge(&mut self.email, patch.email);
        merge(&mut self.phone, patch.phone);
        merge(&mut self.company, patch.company);
        merge(&mut self.status, patch.status);
        merge(&mut self.avatar, patch.avatar);
        self.updated_at = now;
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        Some(self.updated_at)
    }
}

/// First letter of each whitespace-separated word, uppercased.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
