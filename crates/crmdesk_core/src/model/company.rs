//! Company domain model.

use crate::model::validation::{optional_email, optional_website, require, ValidationError};
use crate::model::{merge, EntityKind, Labeled, Record, RecordId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Account status of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompanyStatus {
    Active,
    Inactive,
    Prospect,
}

impl Labeled for CompanyStatus {
    const VARIANTS: &'static [Self] = &[Self::Active, Self::Inactive, Self::Prospect];

    fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::Prospect => "Prospect",
        }
    }
}

impl Display for CompanyStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Stored company record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(rename = "Id")]
    pub id: RecordId,
    pub name: String,
    pub industry: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub employees: Option<u32>,
    /// Annual revenue in whole currency units.
    #[serde(default)]
    pub revenue: Option<u64>,
    /// Founding year.
    #[serde(default)]
    pub founded: Option<i32>,
    #[serde(default)]
    pub description: String,
    pub status: CompanyStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyDraft {
    pub name: String,
    pub industry: String,
    pub website: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub employees: Option<u32>,
    pub revenue: Option<u64>,
    pub founded: Option<i32>,
    pub description: String,
    pub status: CompanyStatus,
}

impl CompanyDraft {
    /// Minimal draft; every optional field starts empty and status is `Active`.
    pub fn new(name: impl Into<String>, industry: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            industry: industry.into(),
            website: String::new(),
            phone: String::new(),
            email: String::new(),
            address: String::new(),
            employees: None,
            revenue: None,
            founded: None,
            description: String::new(),
            status: CompanyStatus::Active,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("industry", &self.industry)?;
        optional_email(&self.email)?;
        optional_website(&self.website)
    }
}

/// Partial update for a company.
///
/// Numeric fields use `Some(None)` to clear a value and `None` to keep it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyPatch {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub employees: Option<Option<u32>>,
    pub revenue: Option<Option<u64>>,
    pub founded: Option<Option<i32>>,
    pub description: Option<String>,
    pub status: Option<CompanyStatus>,
}

impl CompanyPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(name) = &self.name {
            require("name", name)?;
        }
        if let Some(industry) = &self.industry {
            require("industry", industry)?;
        }
        if let Some(email) = &self.email {
            optional_email(email)?;
        }
        if let Some(website) = &self.website {
            optional_website(website)?;
        }
        Ok(())
    }
}

impl Record for Company {
    type Draft = CompanyDraft;
    type Patch = CompanyPatch;

    const KIND: EntityKind = EntityKind::Company;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: CompanyDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            industry: draft.industry,
            website: draft.website,
            phone: draft.phone,
            email: draft.email,
            address: draft.address,
            employees: draft.employees,
            revenue: draft.revenue,
            founded: draft.founded,
            description: draft.description,
            status: draft.status,
            created_at: now,
            updated_at: now,
        }
    }

    fn apply_patch(&mut self, patch: CompanyPatch, now: DateTime<Utc>) {
        merge(&mut self.name, patch.name);
        merge(&mut self.industry, patch.industry);
        merge(&mut self.website, patch.website);
        merge(&mut self.phone, patch.phone);
        merge(&mut self.email, patch.email);
        merge(&mut self.address, patch.address);
        merge(&mut self.employees, patch.employees);
        merge(&mut self.revenue, patch.revenue);
        merge(&mut self.founded, patch.founded);
        merge(&mut self.description, patch.description);
        merge(&mut self.status, patch.status);
        self.updated_at = now;
    }

    fn updated_at(&self) -> Option<DateTime<Utc>> {
        Some(self.updated_at)
    }
}
