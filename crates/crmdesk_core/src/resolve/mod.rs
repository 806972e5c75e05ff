//! Foreign-key resolution from deals/activities to contacts.
//!
//! # Responsibility
//! - Join `contact_id` onto contact display fields for list and board views.
//!
//! # Invariants
//! - Resolution never fails: an orphaned `contact_id` yields a placeholder.
//! - Deleting a contact does not cascade; orphans are expected and permanent.

use crate::model::activity::Activity;
use crate::model::contact::Contact;
use crate::model::deal::Deal;
use crate::model::RecordId;
use serde::Serialize;
use std::collections::HashMap;

/// Placeholder name for a deal whose contact no longer exists.
pub const UNKNOWN_DEAL_CONTACT: &str = "Unknown";
/// Placeholder name for an activity whose contact no longer exists.
pub const UNKNOWN_ACTIVITY_CONTACT: &str = "Unknown Contact";

/// Lookup table over one contact snapshot.
#[derive(Debug, Clone, Default)]
pub struct ContactDirectory<'a> {
    by_id: HashMap<RecordId, &'a Contact>,
}

impl<'a> ContactDirectory<'a> {
    pub fn new(contacts: &'a [Contact]) -> Self {
        Self {
            by_id: contacts.iter().map(|contact| (contact.id, contact)).collect(),
        }
    }

    pub fn get(&self, id: RecordId) -> Option<&'a Contact> {
        self.by_id.get(&id).copied()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Contact name, or `fallback` for an orphaned id.
    pub fn name_or(&self, id: RecordId, fallback: &'static str) -> &'a str {
        self.get(id).map_or(fallback, |contact| contact.name.as_str())
    }

    /// Contact's free-text company, or `""` for an orphaned id.
    pub fn company(&self, id: RecordId) -> &'a str {
        self.get(id).map_or("", |contact| contact.company.as_str())
    }

    pub fn deal_view(&self, deal: &Deal) -> DealView {
        DealView {
            contact_name: self.name_or(deal.contact_id, UNKNOWN_DEAL_CONTACT).to_string(),
            contact_company: self.company(deal.contact_id).to_string(),
            deal: deal.clone(),
        }
    }

    pub fn activity_view(&self, activity: &Activity) -> ActivityView {
        ActivityView {
            contact_name: self
                .name_or(activity.contact_id, UNKNOWN_ACTIVITY_CONTACT)
                .to_string(),
            activity: activity.clone(),
        }
    }

    pub fn deal_views(&self, deals: &[Deal]) -> Vec<DealView> {
        deals.iter().map(|deal| self.deal_view(deal)).collect()
    }

    pub fn activity_views(&self, activities: &[Activity]) -> Vec<ActivityView> {
        activities
            .iter()
            .map(|activity| self.activity_view(activity))
            .collect()
    }
}

/// Deal joined with its contact's display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DealView {
    pub deal: Deal,
    pub contact_name: String,
    pub contact_company: String,
}

/// Activity joined with its contact's display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityView {
    pub activity: Activity,
    pub contact_name: String,
}
