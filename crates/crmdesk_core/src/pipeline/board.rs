//! Kanban board projection of deals by stage.

use crate::model::contact::Contact;
use crate::model::deal::{Deal, Stage};
use crate::model::{Labeled, RecordId};
use crate::resolve::{ContactDirectory, DealView};
use rust_decimal::Decimal;
use serde::Serialize;

/// One stage column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageColumn {
    pub stage: Stage,
    /// Deal cards in store order.
    pub cards: Vec<DealView>,
    pub total_value: Decimal,
}

impl StageColumn {
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// Every stage in funnel order, each with its deals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PipelineBoard {
    pub columns: Vec<StageColumn>,
}

impl PipelineBoard {
    pub fn build(deals: &[Deal], contacts: &[Contact]) -> Self {
        let directory = ContactDirectory::new(contacts);
        let columns = Stage::VARIANTS
            .iter()
            .map(|&stage| {
                let cards: Vec<DealView> = deals
                    .iter()
                    .filter(|deal| deal.stage == stage)
                    .map(|deal| directory.deal_view(deal))
                    .collect();
                let total_value = cards.iter().map(|card| card.deal.value).sum();
                StageColumn {
                    stage,
                    cards,
                    total_value,
                }
            })
            .collect();
        Self { columns }
    }

    pub fn column(&self, stage: Stage) -> Option<&StageColumn> {
        self.columns.iter().find(|column| column.stage == stage)
    }

    pub fn deal_count(&self) -> usize {
        self.columns.iter().map(StageColumn::count).sum()
    }

    pub fn total_value(&self) -> Decimal {
        self.columns.iter().map(|column| column.total_value).sum()
    }

    /// Stage the board currently shows `deal_id` in.
    pub fn stage_of(&self, deal_id: RecordId) -> Option<Stage> {
        self.columns
            .iter()
            .find(|column| column.cards.iter().any(|card| card.deal.id == deal_id))
            .map(|column| column.stage)
    }
}
