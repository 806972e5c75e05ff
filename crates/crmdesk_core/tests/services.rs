use crmdesk_core::{
    ActivityDraft, ActivityQuery, ActivityType, CompanyDraft, CompanyPatch, ContactDraft,
    ContactPatch, Crm, CrmConfig, DealDraft, DealPatch, DealQuery, EntityKind, Filter,
    ServiceError, Stage, StoreOp, TextQuery, ValidationError,
};
use rust_decimal_macros::dec;

fn seeded() -> Crm {
    Crm::seeded(CrmConfig::for_tests()).unwrap()
}

#[tokio::test]
async fn contact_form_rules_are_enforced_before_the_store() {
    let crm = seeded();
    let service = crm.contact_service();
    let before = crm.contacts().get_all().await.unwrap().len();

    let err = service
        .create(ContactDraft::new("  ", "ana@example.com", ""))
        .await
        .unwrap_err();
    assert_eq!(err, ServiceError::Validation(ValidationError::Required("name")));

    let err = service
        .create(ContactDraft::new("Ana", "ana@example.com", " "))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::Validation(ValidationError::Required("company"))
    );
    assert_eq!(crm.contacts().get_all().await.unwrap().len(), before);
}

#[tokio::test]
async fn contact_update_reports_not_found() {
    let crm = seeded();
    let err = crm
        .contact_service()
        .update(404, ContactPatch::default())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::NotFound {
            kind: EntityKind::Contact,
            id: 404
        }
    );
}

#[tokio::test]
async fn company_not_found_matches_other_kinds() {
    let crm = seeded();
    let service = crm.company_service();

    assert_eq!(service.get(404).await.unwrap(), None);
    assert!(!service.delete(404).await.unwrap());
    let err = service.update(404, CompanyPatch::default()).await.unwrap_err();
    assert_eq!(
        err,
        ServiceError::NotFound {
            kind: EntityKind::Company,
            id: 404
        }
    );
}

#[tokio::test]
async fn company_website_must_be_http_url() {
    let crm = seeded();
    let mut draft = CompanyDraft::new("Initech", "Software");
    draft.website = "initech.example".to_string();
    let err = crm.company_service().create(draft).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(ValidationError::InvalidWebsite(_))
    ));

    let mut draft = CompanyDraft::new("Initech", "Software");
    draft.website = "https://initech.example".to_string();
    let created = crm.company_service().create(draft).await.unwrap();
    assert_eq!(created.id, 6);
}

#[tokio::test]
async fn deal_requires_positive_value_and_existing_contact() {
    let crm = seeded();
    let service = crm.deal_service();

    let err = service
        .create(DealDraft {
            title: "Free trial".to_string(),
            value: dec!(0),
            stage: Stage::Lead,
            contact_id: 1,
        })
        .await
        .unwrap_err();
    assert_eq!(
        err,
        ServiceError::Validation(ValidationError::NotPositive("value"))
    );

    let err = service
        .create(DealDraft {
            title: "Ghost".to_string(),
            value: dec!(10),
            stage: Stage::Lead,
            contact_id: 99,
        })
        .await
        .unwrap_err();
    assert_eq!(err, ServiceError::UnknownContact(99));

    let err = service
        .update(
            1,
            DealPatch {
                contact_id: Some(99),
                ..DealPatch::default()
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, ServiceError::UnknownContact(99));
    assert_eq!(crm.deals().get_by_id(1).await.unwrap().unwrap().contact_id, 1);
}

#[tokio::test]
async fn deal_list_joins_contacts_and_searches_names() {
    let crm = seeded();
    let query = DealQuery {
        stage: Filter::All,
        text: TextQuery::new("sarah"),
    };
    let views = crm.deal_service().list(&query).await.unwrap();
    let ids: Vec<u32> = views.iter().map(|view| view.deal.id).collect();
    assert_eq!(ids, vec![1, 6]);
    assert!(views
        .iter()
        .all(|view| view.contact_name == "Sarah Johnson"
            && view.contact_company == "TechCorp Solutions"));

    let query = DealQuery {
        stage: Filter::Only(Stage::Proposal),
        text: TextQuery::default(),
    };
    let views = crm.deal_service().list(&query).await.unwrap();
    assert_eq!(views.len(), 2);
}

#[tokio::test]
async fn activity_log_and_timeline() {
    let crm = seeded();
    let service = crm.activity_service();

    let logged = service
        .log(ActivityDraft {
            kind: ActivityType::Meeting,
            description: "Quarterly review".to_string(),
            timestamp: None,
            contact_id: 2,
        })
        .await
        .unwrap();
    assert_eq!(logged.id, 10);

    let timeline = service
        .timeline(ActivityQuery {
            kind: Filter::Only(ActivityType::Meeting),
        })
        .await
        .unwrap();
    assert_eq!(timeline[0].activity.id, logged.id);
    assert_eq!(timeline[0].contact_name, "Michael Chen");
    assert!(timeline
        .iter()
        .all(|view| view.activity.kind == ActivityType::Meeting));

    let err = service
        .log(ActivityDraft {
            kind: ActivityType::Call,
            description: "Nobody home".to_string(),
            timestamp: None,
            contact_id: 77,
        })
        .await
        .unwrap_err();
    assert_eq!(err, ServiceError::UnknownContact(77));
}

#[tokio::test]
async fn deleting_contact_leaves_orphans_resolvable() {
    let crm = seeded();
    assert!(crm.contact_service().delete(5).await.unwrap());

    let timeline = crm
        .activity_service()
        .timeline(ActivityQuery::default())
        .await
        .unwrap();
    let orphan = timeline
        .iter()
        .find(|view| view.activity.contact_id == 5)
        .unwrap();
    assert_eq!(orphan.contact_name, "Unknown Contact");
    assert_eq!(crm.activity_service().for_contact(5).await.unwrap().len(), 1);
}

#[tokio::test]
async fn store_failures_surface_as_service_errors() {
    let crm = seeded();
    crm.contacts().latency().fail_next(StoreOp::GetAll, 1);

    let err = crm
        .deal_service()
        .list(&DealQuery::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Store(_)));

    let views = crm.deal_service().list(&DealQuery::default()).await.unwrap();
    assert_eq!(views.len(), 8);
}

#[tokio::test]
async fn deal_listing_summarizes_the_filtered_view() {
    let crm = seeded();
    let service = crm.deal_service();

    let proposals = service
        .list_with_summary(&DealQuery {
            stage: Filter::Only(Stage::Proposal),
            text: TextQuery::default(),
        })
        .await
        .unwrap();
    assert_eq!(proposals.deals.len(), 2);
    assert_eq!(proposals.summary.count, 2);
    assert_eq!(proposals.summary.total_value, dec!(124500));
    assert_eq!(proposals.summary.average_value, dec!(62250));

    let everything = service
        .list_with_summary(&DealQuery::default())
        .await
        .unwrap();
    assert_eq!(everything.summary.count, 8);
    assert_eq!(everything.summary.total_value, dec!(267000.50));
    assert_eq!(everything.summary.average_value, dec!(33375));

    let nothing = service
        .list_with_summary(&DealQuery {
            stage: Filter::All,
            text: TextQuery::new("no such deal"),
        })
        .await
        .unwrap();
    assert!(nothing.deals.is_empty());
    assert_eq!(nothing.summary.count, 0);
    assert_eq!(nothing.summary.total_value, dec!(0));
    assert_eq!(nothing.summary.average_value, dec!(0));
}
