//! Sales pipeline: stage board and the drag-and-drop transition workflow.
//!
//! # Invariants
//! - Any stage may move to any other stage; the funnel order is only used
//!   for column layout.

pub mod board;
pub mod workflow;

pub use board::{PipelineBoard, StageColumn};
pub use workflow::{DragSession, DropDecision, MoveOutcome, MoveResult, PipelineWorkflow};
