//! In-memory entity stores: the single source of truth for CRM records.
//!
//! # Responsibility
//! - Hold one ordered collection per record kind and assign identities.
//! - Provide async CRUD with simulated latency and copy-out snapshots.
//!
//! # Invariants
//! - Identity is `max(high-water mark, max existing id) + 1`; a deleted id is
//!   never handed out again, even when it was the highest.
//! - Not-found is never an error: reads and updates yield `None`, delete
//!   yields `false`. `Err` is reserved for unexpected failures.
//! - Every returned record is a clone; callers cannot reach store internals.
//! - Stamps issued by one store are strictly increasing, so `updated_at`
//!   always advances on a successful mutation.

pub mod activity_store;
pub mod company_store;
pub mod contact_store;
pub mod deal_store;
pub mod latency;

use crate::model::{parse_record_id, EntityKind, Record, RecordId};
use chrono::{DateTime, Duration, Utc};
use latency::{LatencyHook, LatencyProfile, StoreOp};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tokio::sync::RwLock;

pub use activity_store::ActivityStore;
pub use company_store::CompanyStore;
pub use contact_store::ContactStore;
pub use deal_store::DealStore;

pub type StoreResult<T> = Result<T, StoreError>;

/// Unexpected store-level failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The operation was rejected before touching data.
    Unavailable { kind: EntityKind, op: StoreOp },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { kind, op } => {
                write!(f, "{kind} store unavailable during {op}")
            }
        }
    }
}

impl Error for StoreError {}

#[derive(Debug)]
struct Collection<T> {
    records: Vec<T>,
    high_water: RecordId,
    last_stamp: Option<DateTime<Utc>>,
}

impl<T: Record> Collection<T> {
    fn from_records(records: Vec<T>) -> Self {
        let high_water = records.iter().map(Record::id).max().unwrap_or(0);
        let last_stamp = records.iter().filter_map(Record::updated_at).max();
        Self {
            records,
            high_water,
            last_stamp,
        }
    }

    fn next_id(&mut self) -> RecordId {
        let current_max = self.records.iter().map(Record::id).max().unwrap_or(0);
        self.high_water = self.high_water.max(current_max) + 1;
        self.high_water
    }

    fn next_stamp(&mut self) -> DateTime<Utc> {
        let now = Utc::now();
        let stamp = match self.last_stamp {
            Some(last) if now <= last => last + Duration::microseconds(1),
            _ => now,
        };
        self.last_stamp = Some(stamp);
        stamp
    }

    fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id() == id)
    }
}

/// Async in-memory store for one record kind.
///
/// Cloning yields another handle onto the same collection.
pub struct EntityStore<T: Record> {
    collection: Arc<RwLock<Collection<T>>>,
    latency: Arc<LatencyHook>,
}

impl<T: Record> Clone for EntityStore<T> {
    fn clone(&self) -> Self {
        Self {
            collection: Arc::clone(&self.collection),
            latency: Arc::clone(&self.latency),
        }
    }
}

impl<T: Record> EntityStore<T> {
    /// Creates a store pre-populated with `records` in the given order.
    pub fn new(records: Vec<T>, profile: LatencyProfile) -> Self {
        Self {
            collection: Arc::new(RwLock::new(Collection::from_records(records))),
            latency: Arc::new(LatencyHook::new(T::KIND, profile)),
        }
    }

    pub fn empty(profile: LatencyProfile) -> Self {
        Self::new(Vec::new(), profile)
    }

    /// Delay/failure hook shared by every handle of this store.
    pub fn latency(&self) -> &LatencyHook {
        &self.latency
    }

    /// Replaces the whole collection and restarts identity assignment from it.
    ///
    /// Applied immediately, without simulated latency.
    pub async fn reset(&self, records: Vec<T>) {
        let mut collection = self.collection.write().await;
        *collection = Collection::from_records(records);
        debug!(
            "event=store_reset module=store status=ok kind={} count={}",
            T::KIND,
            collection.records.len()
        );
    }

    /// Full collection snapshot in view order.
    pub async fn get_all(&self) -> StoreResult<Vec<T>> {
        self.select(StoreOp::GetAll, |_| true).await
    }

    pub async fn get_by_id(&self, id: RecordId) -> StoreResult<Option<T>> {
        self.latency.enter(StoreOp::GetById).await?;
        let collection = self.collection.read().await;
        let found = collection
            .records
            .iter()
            .find(|record| record.id() == id)
            .cloned();
        if found.is_none() {
            debug!(
                "event=store_get module=store status=not_found kind={} id={}",
                T::KIND,
                id
            );
        }
        Ok(found)
    }

    /// Looks up a record by a raw, caller-supplied identity string.
    ///
    /// Input that is not an integer identity is reported as not found.
    pub async fn get_by_key(&self, raw_id: &str) -> StoreResult<Option<T>> {
        match parse_record_id(raw_id) {
            Some(id) => self.get_by_id(id).await,
            None => {
                self.latency.enter(StoreOp::GetById).await?;
                Ok(None)
            }
        }
    }

    /// Assigns the next identity, stamps timestamps, and appends the record.
    pub async fn create(&self, draft: T::Draft) -> StoreResult<T> {
        self.latency.enter(StoreOp::Create).await?;
        let mut collection = self.collection.write().await;
        let id = collection.next_id();
        let now = collection.next_stamp();
        let record = T::from_draft(id, draft, now);
        collection.records.push(record.clone());
        debug!(
            "event=store_create module=store status=ok kind={} id={}",
            T::KIND,
            id
        );
        Ok(record)
    }

    /// Merges `patch` onto the record; `None` when no record has `id`.
    pub async fn update(&self, id: RecordId, patch: T::Patch) -> StoreResult<Option<T>> {
        self.modify(StoreOp::Update, id, |record, now| {
            record.apply_patch(patch, now)
        })
        .await
    }

    /// Removes the record; `false` when it was already absent.
    pub async fn delete(&self, id: RecordId) -> StoreResult<bool> {
        self.latency.enter(StoreOp::Delete).await?;
        let mut collection = self.collection.write().await;
        let Some(index) = collection.position(id) else {
            debug!(
                "event=store_delete module=store status=not_found kind={} id={}",
                T::KIND,
                id
            );
            return Ok(false);
        };
        collection.records.remove(index);
        debug!(
            "event=store_delete module=store status=ok kind={} id={}",
            T::KIND,
            id
        );
        Ok(true)
    }

    /// Snapshot of the records matching `predicate`, in view order.
    pub(crate) async fn select<F>(&self, op: StoreOp, predicate: F) -> StoreResult<Vec<T>>
    where
        F: Fn(&T) -> bool,
    {
        self.latency.enter(op).await?;
        let collection = self.collection.read().await;
        let mut records: Vec<T> = collection
            .records
            .iter()
            .filter(|record| predicate(*record))
            .cloned()
            .collect();
        T::order_view(&mut records);
        Ok(records)
    }

    /// Applies `change` to the record with `id` under one write lock.
    ///
    /// `change` receives a fresh stamp and must not fail, so a mutation
    /// either fully applies or does not happen at all.
    pub(crate) async fn modify<F>(&self, op: StoreOp, id: RecordId, change: F) -> StoreResult<Option<T>>
    where
        F: FnOnce(&mut T, DateTime<Utc>),
    {
        self.latency.enter(op).await?;
        let mut collection = self.collection.write().await;
        let Some(index) = collection.position(id) else {
            debug!(
                "event=store_{} module=store status=not_found kind={} id={}",
                op,
                T::KIND,
                id
            );
            return Ok(None);
        };
        let now = collection.next_stamp();
        let record = &mut collection.records[index];
        change(record, now);
        debug!(
            "event=store_{} module=store status=ok kind={} id={}",
            op,
            T::KIND,
            id
        );
        Ok(Some(record.clone()))
    }
}
