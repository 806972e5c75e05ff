//! Stateless view derivation over store snapshots.
//!
//! # Responsibility
//! - Filter and order a full collection into a display view.
//!
//! # Invariants
//! - Never mutates its input; always returns a new sequence.
//! - Criteria combine with logical AND.
//! - `Filter::All` plus blank text returns the input unchanged in order
//!   (activities keep their timestamp-descending view order).

pub mod filter;
pub mod text;

use crate::model::activity::{Activity, ActivityType};
use crate::model::company::{Company, CompanyStatus};
use crate::model::contact::{Contact, ContactStatus};
use crate::model::deal::{Deal, Stage};
use crate::model::Record;
use crate::resolve::{ContactDirectory, UNKNOWN_DEAL_CONTACT};

pub use filter::{Filter, FilterParseError, ALL_SENTINEL};
pub use text::TextQuery;

/// Contact list criteria: status plus text over name/email/company.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactQuery {
    pub status: Filter<ContactStatus>,
    pub text: TextQuery,
}

impl ContactQuery {
    pub fn matches(&self, contact: &Contact) -> bool {
        self.status.matches(contact.status)
            && self.text.matches_any([
                contact.name.as_str(),
                contact.email.as_str(),
                contact.company.as_str(),
            ])
    }

    pub fn apply(&self, contacts: &[Contact]) -> Vec<Contact> {
        contacts
            .iter()
            .filter(|contact| self.matches(contact))
            .cloned()
            .collect()
    }
}

/// Company list criteria: status plus text over name/industry/email/phone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompanyQuery {
    pub status: Filter<CompanyStatus>,
    pub text: TextQuery,
}

impl CompanyQuery {
    pub fn matches(&self, company: &Company) -> bool {
        self.status.matches(company.status)
            && self.text.matches_any([
                company.name.as_str(),
                company.industry.as_str(),
                company.email.as_str(),
                company.phone.as_str(),
            ])
    }

    pub fn apply(&self, companies: &[Company]) -> Vec<Company> {
        companies
            .iter()
            .filter(|company| self.matches(company))
            .cloned()
            .collect()
    }
}

/// Deal list criteria: stage plus text over title and resolved contact
/// name/company.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DealQuery {
    pub stage: Filter<Stage>,
    pub text: TextQuery,
}

impl DealQuery {
    pub fn matches(&self, deal: &Deal, contacts: &ContactDirectory<'_>) -> bool {
        self.stage.matches(deal.stage)
            && self.text.matches_any([
                deal.title.as_str(),
                contacts.name_or(deal.contact_id, UNKNOWN_DEAL_CONTACT),
                contacts.company(deal.contact_id),
            ])
    }

    pub fn apply(&self, deals: &[Deal], contacts: &ContactDirectory<'_>) -> Vec<Deal> {
        deals
            .iter()
            .filter(|deal| self.matches(deal, contacts))
            .cloned()
            .collect()
    }
}

/// Activity timeline criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityQuery {
    pub kind: Filter<ActivityType>,
}

impl ActivityQuery {
    pub fn matches(&self, activity: &Activity) -> bool {
        self.kind.matches(activity.kind)
    }

    /// Matching activities, newest first.
    pub fn apply(&self, activities: &[Activity]) -> Vec<Activity> {
        let mut matched: Vec<Activity> = activities
            .iter()
            .filter(|activity| self.matches(activity))
            .cloned()
            .collect();
        Activity::order_view(&mut matched);
        matched
    }
}
