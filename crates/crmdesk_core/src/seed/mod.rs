//! Static seed datasets loaded into the stores at startup.
//!
//! # Responsibility
//! - Embed the demo collections at compile time and decode them on demand.
//!
//! # Invariants
//! - Seed records use the same wire shape as serialized store records.
//! - Every seed `contactId` references a seeded contact.

use crate::model::activity::Activity;
use crate::model::company::Company;
use crate::model::contact::Contact;
use crate::model::deal::Deal;
use serde::de::DeserializeOwned;
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTACTS_JSON: &str = include_str!("contacts.json");
const COMPANIES_JSON: &str = include_str!("companies.json");
const DEALS_JSON: &str = include_str!("deals.json");
const ACTIVITIES_JSON: &str = include_str!("activities.json");

/// Embedded seed data failed to decode.
#[derive(Debug)]
pub struct SeedError {
    pub dataset: &'static str,
    pub source: serde_json::Error,
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid {} seed data: {}", self.dataset, self.source)
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

/// All four seed collections, decoded together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedData {
    pub contacts: Vec<Contact>,
    pub companies: Vec<Company>,
    pub deals: Vec<Deal>,
    pub activities: Vec<Activity>,
}

impl SeedData {
    pub fn load() -> Result<Self, SeedError> {
        Ok(Self {
            contacts: decode("contacts", CONTACTS_JSON)?,
            companies: decode("companies", COMPANIES_JSON)?,
            deals: decode("deals", DEALS_JSON)?,
            activities: decode("activities", ACTIVITIES_JSON)?,
        })
    }
}

fn decode<T: DeserializeOwned>(dataset: &'static str, json: &str) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(json).map_err(|source| SeedError { dataset, source })
}
