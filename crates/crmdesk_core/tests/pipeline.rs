use crmdesk_core::{
    Contact, ContactStatus, ContactStore, Crm, CrmConfig, DealDraft, DealStore, DragSession,
    LatencyProfile, MoveResult, PipelineWorkflow, Stage, StoreError, StoreOp,
};
use rust_decimal_macros::dec;

fn ana() -> Contact {
    let now = chrono::Utc::now();
    Contact {
        id: 1,
        name: "Ana".to_string(),
        email: "ana@example.com".to_string(),
        phone: String::new(),
        company: String::new(),
        status: ContactStatus::Lead,
        avatar: "A".to_string(),
        created_at: now,
        updated_at: now,
    }
}

#[tokio::test]
async fn update_stage_touches_only_stage_and_updated_at() {
    let crm = Crm::seeded(CrmConfig::for_tests()).unwrap();
    let before = crm.deals().get_by_id(2).await.unwrap().unwrap();
    assert_eq!(before.stage, Stage::Lead);

    let after = crm
        .deals()
        .update_stage(2, Stage::Qualified)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(after.stage, Stage::Qualified);
    assert!(after.updated_at > before.updated_at);
    assert_eq!(after.title, before.title);
    assert_eq!(after.value, before.value);
    assert_eq!(after.contact_id, before.contact_id);
    assert_eq!(after.created_at, before.created_at);
}

#[tokio::test]
async fn create_then_close_deal_for_single_contact() {
    let contacts = ContactStore::new(vec![ana()], LatencyProfile::instant());
    let deals = DealStore::empty(LatencyProfile::instant());

    let created = deals
        .create(DealDraft {
            title: "X".to_string(),
            value: dec!(100),
            stage: Stage::Lead,
            contact_id: 1,
        })
        .await
        .unwrap();

    let listed = deals.get_all().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, 1);
    assert_eq!(listed[0].stage, Stage::Lead);

    deals
        .update_stage(created.id, Stage::Closed)
        .await
        .unwrap()
        .unwrap();
    let listed = deals.get_all().await.unwrap();
    assert_eq!(listed[0].stage, Stage::Closed);
    assert!(listed[0].updated_at > created.updated_at);

    let board = PipelineWorkflow::new(deals, contacts)
        .load_board()
        .await
        .unwrap();
    let closed = board.column(Stage::Closed).unwrap();
    assert_eq!(closed.count(), 1);
    assert_eq!(closed.cards[0].contact_name, "Ana");
    assert_eq!(closed.total_value, dec!(100));
}

#[tokio::test]
async fn any_stage_can_move_to_any_other() {
    let crm = Crm::seeded(CrmConfig::for_tests()).unwrap();
    let closed = crm.deals().update_stage(6, Stage::Lead).await.unwrap().unwrap();
    assert_eq!(closed.stage, Stage::Lead);
    let back = crm
        .deals()
        .update_stage(6, Stage::Negotiation)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(back.stage, Stage::Negotiation);
}

#[tokio::test]
async fn dropping_on_same_stage_never_reaches_store() {
    let crm = Crm::seeded(CrmConfig::for_tests()).unwrap();
    let deal = crm.deals().get_by_id(3).await.unwrap().unwrap();
    crm.deals().latency().fail_next(StoreOp::UpdateStage, 1);

    let outcome = crm
        .pipeline()
        .move_deal(DragSession::begin(&deal), deal.stage)
        .await
        .unwrap();
    assert_eq!(outcome.result, MoveResult::Suppressed);
    assert_eq!(crm.deals().get_by_id(3).await.unwrap().unwrap(), deal);

    // The armed failure is still pending for the next real move.
    let outcome = crm
        .pipeline()
        .move_deal(DragSession::begin(&deal), Stage::Closed)
        .await
        .unwrap();
    assert!(matches!(outcome.result, MoveResult::Failed(_)));
}

#[tokio::test]
async fn successful_move_refreshes_board() {
    let crm = Crm::seeded(CrmConfig::for_tests()).unwrap();
    let workflow = crm.pipeline();
    let board = workflow.load_board().await.unwrap();
    assert_eq!(board.stage_of(5), Some(Stage::Lead));

    let deal = crm.deals().get_by_id(5).await.unwrap().unwrap();
    let outcome = workflow
        .move_deal(DragSession::begin(&deal), Stage::Proposal)
        .await
        .unwrap();

    match outcome.result {
        MoveResult::Moved(moved) => assert_eq!(moved.stage, Stage::Proposal),
        other => panic!("unexpected result: {other:?}"),
    }
    assert_eq!(outcome.board.stage_of(5), Some(Stage::Proposal));
    assert_eq!(outcome.board.deal_count(), board.deal_count());
    assert_eq!(outcome.board.total_value(), board.total_value());
}

#[tokio::test]
async fn failed_move_keeps_prior_stage_on_refreshed_board() {
    let crm = Crm::seeded(CrmConfig::for_tests()).unwrap();
    let deal = crm.deals().get_by_id(1).await.unwrap().unwrap();
    crm.deals().latency().fail_next(StoreOp::UpdateStage, 1);

    let outcome = crm
        .pipeline()
        .move_deal(DragSession::begin(&deal), Stage::Closed)
        .await
        .unwrap();

    assert_eq!(
        outcome.result,
        MoveResult::Failed(StoreError::Unavailable {
            kind: crmdesk_core::EntityKind::Deal,
            op: StoreOp::UpdateStage,
        })
    );
    assert_eq!(outcome.board.stage_of(1), Some(Stage::Negotiation));
    assert_eq!(crm.deals().get_by_id(1).await.unwrap().unwrap(), deal);
}

#[tokio::test]
async fn move_of_deleted_deal_reports_missing() {
    let crm = Crm::seeded(CrmConfig::for_tests()).unwrap();
    let deal = crm.deals().get_by_id(8).await.unwrap().unwrap();
    let session = DragSession::begin(&deal);
    assert!(crm.deals().delete(8).await.unwrap());

    let outcome = crm.pipeline().move_deal(session, Stage::Lead).await.unwrap();
    assert_eq!(outcome.result, MoveResult::Missing(8));
    assert_eq!(outcome.board.stage_of(8), None);
}

#[tokio::test]
async fn board_keeps_orphaned_deals_with_placeholder() {
    let crm = Crm::seeded(CrmConfig::for_tests()).unwrap();
    assert!(crm.contacts().delete(8).await.unwrap());

    let board = crm.pipeline().load_board().await.unwrap();
    let proposal = board.column(Stage::Proposal).unwrap();
    let orphan = proposal
        .cards
        .iter()
        .find(|card| card.deal.id == 8)
        .unwrap();
    assert_eq!(orphan.contact_name, "Unknown");
    assert_eq!(orphan.contact_company, "");
}
