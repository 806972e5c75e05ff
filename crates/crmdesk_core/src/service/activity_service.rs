//! Activity timeline use-case service.

use crate::model::activity::{Activity, ActivityDraft, ActivityPatch};
use crate::model::{EntityKind, RecordId};
use crate::query::ActivityQuery;
use crate::resolve::{ActivityView, ContactDirectory};
use crate::service::{found, ServiceError, ServiceResult};
use crate::store::{ActivityStore, ContactStore};

#[derive(Clone)]
pub struct ActivityService {
    activities: ActivityStore,
    contacts: ContactStore,
}

impl ActivityService {
    pub fn new(activities: ActivityStore, contacts: ContactStore) -> Self {
        Self {
            activities,
            contacts,
        }
    }

    /// Logs an interaction against an existing contact.
    pub async fn log(&self, draft: ActivityDraft) -> ServiceResult<Activity> {
        draft.validate()?;
        self.ensure_contact(draft.contact_id).await?;
        Ok(self.activities.create(draft).await?)
    }

    pub async fn update(&self, id: RecordId, patch: ActivityPatch) -> ServiceResult<Activity> {
        patch.validate()?;
        if let Some(contact_id) = patch.contact_id {
            self.ensure_contact(contact_id).await?;
        }
        let updated = self.activities.update(id, patch).await?;
        found(updated, EntityKind::Activity, id)
    }

    pub async fn delete(&self, id: RecordId) -> ServiceResult<bool> {
        Ok(self.activities.delete(id).await?)
    }

    /// Timeline screen: newest first, joined with contact names.
    pub async fn timeline(&self, query: ActivityQuery) -> ServiceResult<Vec<ActivityView>> {
        let (activities, contacts) =
            tokio::try_join!(self.activities.filter_by_type(query.kind), self.contacts.get_all())?;
        let directory = ContactDirectory::new(&contacts);
        Ok(directory.activity_views(&activities))
    }

    /// One contact's history, newest first.
    pub async fn for_contact(&self, contact_id: RecordId) -> ServiceResult<Vec<Activity>> {
        Ok(self.activities.get_by_contact_id(contact_id).await?)
    }

    async fn ensure_contact(&self, contact_id: RecordId) -> ServiceResult<()> {
        if self.contacts.get_by_id(contact_id).await?.is_none() {
            return Err(ServiceError::UnknownContact(contact_id));
        }
        Ok(())
    }
}
