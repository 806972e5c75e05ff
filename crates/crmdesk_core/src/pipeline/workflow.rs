//! Drag-and-drop stage transition workflow.
//!
//! # Responsibility
//! - Negotiate a drag source (deal + origin stage) against a drop target.
//! - Apply the transition through the deal store and re-fetch the board.
//!
//! # Invariants
//! - Dropping onto the deal's current stage never reaches the store.
//! - The board is re-fetched after every attempted transition, success or
//!   failure, so the UI always renders authoritative state.
//! - A failed transition leaves every deal field unchanged.

use crate::model::deal::{Deal, Stage};
use crate::model::RecordId;
use crate::pipeline::board::PipelineBoard;
use crate::store::{ContactStore, DealStore, StoreError, StoreResult};
use log::{info, warn};

/// A deal picked up from a board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub deal_id: RecordId,
    pub origin: Stage,
}

impl DragSession {
    pub fn begin(deal: &Deal) -> Self {
        Self {
            deal_id: deal.id,
            origin: deal.stage,
        }
    }

    /// Decides whether dropping on `target` should reach the store.
    pub fn drop_on(self, target: Stage) -> DropDecision {
        if target == self.origin {
            DropDecision::Suppressed
        } else {
            DropDecision::Move {
                deal_id: self.deal_id,
                from: self.origin,
                to: target,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropDecision {
    Move {
        deal_id: RecordId,
        from: Stage,
        to: Stage,
    },
    /// Target equals the origin stage; nothing to do.
    Suppressed,
}

/// What happened to the dragged deal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    Moved(Deal),
    Suppressed,
    /// The deal was deleted while it was being dragged.
    Missing(RecordId),
    Failed(StoreError),
}

/// Result of a drop plus the freshly fetched board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub result: MoveResult,
    pub board: PipelineBoard,
}

/// Pipeline screen controller over the deal and contact stores.
#[derive(Clone)]
pub struct PipelineWorkflow {
    deals: DealStore,
    contacts: ContactStore,
}

impl PipelineWorkflow {
    pub fn new(deals: DealStore, contacts: ContactStore) -> Self {
        Self { deals, contacts }
    }

    /// Fetches deals and contacts concurrently and builds the board.
    pub async fn load_board(&self) -> StoreResult<PipelineBoard> {
        let (deals, contacts) = tokio::try_join!(self.deals.get_all(), self.contacts.get_all())?;
        Ok(PipelineBoard::build(&deals, &contacts))
    }

    /// Completes a drag by dropping it on `target`.
    ///
    /// A failed re-fetch is the only error; a failed transition is reported
    /// in `MoveOutcome::result` next to the unchanged board.
    pub async fn move_deal(&self, session: DragSession, target: Stage) -> StoreResult<MoveOutcome> {
        let result = match session.drop_on(target) {
            DropDecision::Suppressed => MoveResult::Suppressed,
            DropDecision::Move { deal_id, from, to } => {
                match self.deals.update_stage(deal_id, to).await {
                    Ok(Some(deal)) => {
                        info!(
                            "event=deal_stage_changed module=pipeline status=ok id={} from={} to={}",
                            deal_id, from, to
                        );
                        MoveResult::Moved(deal)
                    }
                    Ok(None) => MoveResult::Missing(deal_id),
                    Err(err) => {
                        warn!(
                            "event=deal_stage_changed module=pipeline status=error id={} to={} error={}",
                            deal_id, to, err
                        );
                        MoveResult::Failed(err)
                    }
                }
            }
        };

        let board = self.load_board().await?;
        Ok(MoveOutcome { result, board })
    }
}
