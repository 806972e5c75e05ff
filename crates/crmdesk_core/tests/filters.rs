use crmdesk_core::{
    ActivityType, CompanyStatus, ContactQuery, ContactStatus, Crm, CrmConfig, Filter, Stage,
    TextQuery,
};

fn seeded() -> Crm {
    Crm::seeded(CrmConfig::for_tests()).unwrap()
}

#[tokio::test]
async fn all_sentinel_returns_get_all_for_every_kind() {
    let crm = seeded();

    let contacts = crm.contacts().get_all().await.unwrap();
    for raw in ["All", ""] {
        let filter: Filter<ContactStatus> = Filter::parse(raw).unwrap();
        assert_eq!(crm.contacts().filter_by_status(filter).await.unwrap(), contacts);
    }

    let companies = crm.companies().get_all().await.unwrap();
    assert_eq!(
        crm.companies().filter_by_status(Filter::All).await.unwrap(),
        companies
    );

    let deals = crm.deals().get_all().await.unwrap();
    assert_eq!(crm.deals().get_by_stage(Filter::All).await.unwrap(), deals);

    let activities = crm.activities().get_all().await.unwrap();
    assert_eq!(
        crm.activities().filter_by_type(Filter::All).await.unwrap(),
        activities
    );
}

#[tokio::test]
async fn exact_filters_keep_store_order() {
    let crm = seeded();

    let leads = crm
        .contacts()
        .filter_by_status(Filter::Only(ContactStatus::Lead))
        .await
        .unwrap();
    let ids: Vec<u32> = leads.iter().map(|contact| contact.id).collect();
    assert_eq!(ids, vec![2, 6, 8]);

    let qualified = crm
        .deals()
        .get_by_stage(Filter::Only(Stage::Qualified))
        .await
        .unwrap();
    let ids: Vec<u32> = qualified.iter().map(|deal| deal.id).collect();
    assert_eq!(ids, vec![4, 7]);

    let prospects = crm
        .companies()
        .filter_by_status(Filter::Only(CompanyStatus::Prospect))
        .await
        .unwrap();
    assert_eq!(prospects.len(), 1);
    assert_eq!(prospects[0].name, "Innovate Labs");
}

#[tokio::test]
async fn get_by_contact_id_returns_only_that_contacts_records() {
    let crm = seeded();

    let deals = crm.deals().get_by_contact_id(1).await.unwrap();
    let ids: Vec<u32> = deals.iter().map(|deal| deal.id).collect();
    assert_eq!(ids, vec![1, 6]);
    assert!(deals.iter().all(|deal| deal.contact_id == 1));

    let activities = crm.activities().get_by_contact_id(1).await.unwrap();
    let ids: Vec<u32> = activities.iter().map(|activity| activity.id).collect();
    assert_eq!(ids, vec![6, 1]);

    assert!(crm.deals().get_by_contact_id(99).await.unwrap().is_empty());
}

#[tokio::test]
async fn activities_are_newest_first_and_filter_by_type() {
    let crm = seeded();

    let all = crm.activities().get_all().await.unwrap();
    assert!(all
        .windows(2)
        .all(|pair| pair[0].timestamp >= pair[1].timestamp));

    let calls = crm
        .activities()
        .filter_by_type(Filter::Only(ActivityType::Call))
        .await
        .unwrap();
    let ids: Vec<u32> = calls.iter().map(|activity| activity.id).collect();
    assert_eq!(ids, vec![7, 4, 1, 9]);
}

#[tokio::test]
async fn search_is_case_insensitive_and_trims() {
    let crm = seeded();

    let hits = crm.contacts().search("  TECHCORP ").await.unwrap();
    let ids: Vec<u32> = hits.iter().map(|contact| contact.id).collect();
    assert_eq!(ids, vec![1, 7]);

    let blank = crm.contacts().search("   ").await.unwrap();
    assert_eq!(blank, crm.contacts().get_all().await.unwrap());

    let companies = crm.companies().search("retail").await.unwrap();
    assert_eq!(companies.len(), 1);
    assert_eq!(companies[0].id, 3);
}

#[tokio::test]
async fn status_and_text_combine_with_and() {
    let crm = seeded();
    let query = ContactQuery {
        status: Filter::Only(ContactStatus::Active),
        text: TextQuery::new("techcorp"),
    };
    let hits = crm.contacts().query(&query).await.unwrap();
    let ids: Vec<u32> = hits.iter().map(|contact| contact.id).collect();
    assert_eq!(ids, vec![7]);
}

#[test]
fn unknown_filter_label_is_rejected() {
    assert!(Filter::<Stage>::parse("Won").is_err());
    assert!(Filter::<Stage>::parse("lead").is_err());
    assert_eq!(Filter::<Stage>::parse("Lead").unwrap(), Filter::Only(Stage::Lead));
}
