//! Simulated network latency and failure injection for entity stores.
//!
//! # Responsibility
//! - Delay every store operation by a configurable, per-operation amount.
//! - Optionally fail the next N calls of an operation after the delay.
//!
//! # Invariants
//! - Delays happen before any lock is taken, so a slow call never blocks
//!   unrelated operations from being queued.
//! - An injected failure is raised before the store touches data.

use crate::model::EntityKind;
use crate::store::{StoreError, StoreResult};
use log::warn;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

/// Store operation class used to pick a delay and match injected failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOp {
    GetAll,
    GetById,
    Create,
    Update,
    Delete,
    /// Status/type/stage filters and text search.
    Filter,
    GetByContactId,
    UpdateStage,
}

impl StoreOp {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetAll => "get_all",
            Self::GetById => "get_by_id",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Filter => "filter",
            Self::GetByContactId => "get_by_contact_id",
            Self::UpdateStage => "update_stage",
        }
    }
}

impl Display for StoreOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-operation artificial delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub get_all: Duration,
    pub get_by_id: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
    pub filter: Duration,
    pub get_by_contact_id: Duration,
    pub update_stage: Duration,
}

impl LatencyProfile {
    /// Timings the browser UI was tuned against.
    pub fn realistic() -> Self {
        Self {
            get_all: Duration::from_millis(300),
            get_by_id: Duration::from_millis(200),
            create: Duration::from_millis(400),
            update: Duration::from_millis(400),
            delete: Duration::from_millis(300),
            filter: Duration::from_millis(200),
            get_by_contact_id: Duration::from_millis(250),
            update_stage: Duration::from_millis(300),
        }
    }

    /// Company writes were simulated as slower than the other kinds.
    pub fn realistic_company() -> Self {
        Self {
            create: Duration::from_millis(500),
            update: Duration::from_millis(500),
            delete: Duration::from_millis(400),
            ..Self::realistic()
        }
    }

    /// No delay at all.
    pub fn instant() -> Self {
        Self {
            get_all: Duration::ZERO,
            get_by_id: Duration::ZERO,
            create: Duration::ZERO,
            update: Duration::ZERO,
            delete: Duration::ZERO,
            filter: Duration::ZERO,
            get_by_contact_id: Duration::ZERO,
            update_stage: Duration::ZERO,
        }
    }

    /// Multiplies every delay by `factor`.
    ///
    /// Negative or NaN factors clamp to zero; products too large for a
    /// `Duration` saturate at `Duration::MAX`.
    pub fn scaled(self, factor: f64) -> Self {
        self.map(|value| scale_delay(value, factor).unwrap_or(Duration::MAX))
    }

    /// Like [`LatencyProfile::scaled`], but `None` when any scaled delay is
    /// not representable as a `Duration`.
    pub fn checked_scaled(self, factor: f64) -> Option<Self> {
        Some(Self {
            get_all: scale_delay(self.get_all, factor)?,
            get_by_id: scale_delay(self.get_by_id, factor)?,
            create: scale_delay(self.create, factor)?,
            update: scale_delay(self.update, factor)?,
            delete: scale_delay(self.delete, factor)?,
            filter: scale_delay(self.filter, factor)?,
            get_by_contact_id: scale_delay(self.get_by_contact_id, factor)?,
            update_stage: scale_delay(self.update_stage, factor)?,
        })
    }

    fn map(self, scale: impl Fn(Duration) -> Duration) -> Self {
        Self {
            get_all: scale(self.get_all),
            get_by_id: scale(self.get_by_id),
            create: scale(self.create),
            update: scale(self.update),
            delete: scale(self.delete),
            filter: scale(self.filter),
            get_by_contact_id: scale(self.get_by_contact_id),
            update_stage: scale(self.update_stage),
        }
    }

    pub fn delay_for(&self, op: StoreOp) -> Duration {
        match op {
            StoreOp::GetAll => self.get_all,
            StoreOp::GetById => self.get_by_id,
            StoreOp::Create => self.create,
            StoreOp::Update => self.update,
            StoreOp::Delete => self.delete,
            StoreOp::Filter => self.filter,
            StoreOp::GetByContactId => self.get_by_contact_id,
            StoreOp::UpdateStage => self.update_stage,
        }
    }
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self::realistic()
    }
}

fn scale_delay(value: Duration, factor: f64) -> Option<Duration> {
    if value.is_zero() || factor.is_nan() || factor <= 0.0 {
        return Some(Duration::ZERO);
    }
    Duration::try_from_secs_f64(value.as_secs_f64() * factor).ok()
}

#[derive(Debug)]
struct HookState {
    profile: LatencyProfile,
    pending_failures: HashMap<StoreOp, u32>,
}

/// Delay and failure hook owned by one entity store.
#[derive(Debug)]
pub struct LatencyHook {
    kind: EntityKind,
    state: Mutex<HookState>,
}

impl LatencyHook {
    pub fn new(kind: EntityKind, profile: LatencyProfile) -> Self {
        Self {
            kind,
            state: Mutex::new(HookState {
                profile,
                pending_failures: HashMap::new(),
            }),
        }
    }

    pub fn profile(&self) -> LatencyProfile {
        self.lock().profile
    }

    /// Replaces the delay profile for subsequent calls.
    pub fn set_profile(&self, profile: LatencyProfile) {
        self.lock().profile = profile;
    }

    /// Makes the next `count` calls of `op` fail with `StoreError::Unavailable`.
    pub fn fail_next(&self, op: StoreOp, count: u32) {
        if count == 0 {
            return;
        }
        *self.lock().pending_failures.entry(op).or_insert(0) += count;
    }

    /// Drops every pending injected failure.
    pub fn clear_failures(&self) {
        self.lock().pending_failures.clear();
    }

    /// Waits out the configured delay, then consumes a pending failure if any.
    pub(crate) async fn enter(&self, op: StoreOp) -> StoreResult<()> {
        let delay = self.lock().profile.delay_for(op);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let mut state = self.lock();
        if let Some(remaining) = state.pending_failures.get_mut(&op) {
            *remaining -= 1;
            if *remaining == 0 {
                state.pending_failures.remove(&op);
            }
            warn!(
                "event=store_fault module=store status=error kind={} op={}",
                self.kind, op
            );
            return Err(StoreError::Unavailable {
                kind: self.kind,
                op,
            });
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, HookState> {
        // State is plain data; a poisoned guard is still consistent.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
