//! SDK builder and query-layer integration tests.

mod common;

use common::{new_project, new_testimonial, new_user};
use sair_reit_sdk::models::{NewInvestment, ProjectStatus, ProjectUpdate};
use sair_reit_sdk::{
    CriteriaParams, MemStorage, ProjectCriteria, ReitError, ReitSdk, RoiBand, SortKey,
};

fn empty_sdk() -> ReitSdk {
    ReitSdk::builder().seed(false).build().unwrap()
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

#[test]
fn default_builder_is_seeded_memory() {
    let sdk = ReitSdk::builder().build().unwrap();
    assert_eq!(sdk.storage().backend(), "memory");
    assert_eq!(sdk.projects().count().unwrap(), 6);
    assert_eq!(sdk.testimonials().list().unwrap().len(), 3);
    assert_eq!(sdk.to_string(), "ReitSdk(backend=memory)");
}

#[test]
fn database_builder_persists_to_file() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("data").join("reit.duckdb");

    let sdk = ReitSdk::builder().database(&path).build().unwrap();
    assert_eq!(sdk.storage().backend(), "duckdb");
    assert_eq!(sdk.projects().count().unwrap(), 6);
    drop(sdk);

    // Reopening does not seed twice
    let sdk = ReitSdk::builder().database(&path).build().unwrap();
    assert_eq!(sdk.projects().count().unwrap(), 6);
}

#[test]
fn injected_storage_is_used() {
    let sdk = ReitSdk::builder()
        .storage(Box::new(MemStorage::new()))
        .seed(false)
        .build()
        .unwrap();
    assert_eq!(sdk.projects().count().unwrap(), 0);
}

#[test]
fn in_memory_database_is_private() {
    let a = ReitSdk::builder().in_memory_database().build().unwrap();
    let b = ReitSdk::builder().in_memory_database().seed(false).build().unwrap();
    assert_eq!(a.projects().count().unwrap(), 6);
    assert_eq!(b.projects().count().unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[test]
fn seeded_dashboard_matches_sample_data() {
    let sdk = ReitSdk::builder().build().unwrap();
    let stats = sdk.dashboard().stats().unwrap();
    assert_eq!(stats.total_projects, 6);
    assert_eq!(stats.active_projects, 0);
    assert_eq!(stats.total_invested, 61_000_000);
}

#[test]
fn search_over_seeded_projects() {
    let sdk = ReitSdk::builder().build().unwrap();
    let criteria = ProjectCriteria::new()
        .search("banglow")
        .roi(RoiBand::FifteenPlus)
        .sort_by(SortKey::RoiHigh);
    let titles: Vec<String> = sdk
        .projects()
        .search(&criteria)
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(
        titles,
        vec![
            "120 Sq. Yd. Banglow at Gulistan-e-Noor Mohammad".to_string(),
            "150 Sq. Yd. Banglow".to_string(),
        ]
    );
}

#[test]
fn search_params_reject_unknown_band() {
    let sdk = ReitSdk::builder().build().unwrap();
    let params = CriteriaParams {
        roi: Some("99+".into()),
        ..Default::default()
    };
    assert!(matches!(
        sdk.projects().search_params(&params),
        Err(ReitError::InvalidArgument(_))
    ));
}

#[test]
fn featured_projects_by_priority() {
    let sdk = ReitSdk::builder().build().unwrap();
    let featured: Vec<String> = sdk
        .projects()
        .featured()
        .unwrap()
        .into_iter()
        .map(|p| p.title)
        .collect();
    assert_eq!(featured, vec!["Petaro Pump", "Singapore Business Hub"]);
}

#[test]
fn create_validates_payload() {
    let sdk = empty_sdk();
    let mut payload = new_project("", "10", ProjectStatus::Draft, 100, 0);
    assert!(matches!(
        sdk.projects().create(payload.clone()),
        Err(ReitError::InvalidArgument(_))
    ));

    payload.title = "Valid".into();
    payload.target_amount = 0;
    assert!(sdk.projects().create(payload).is_err());
    assert_eq!(sdk.projects().count().unwrap(), 0);
}

#[test]
fn update_requires_existing_project_and_fields() {
    let sdk = empty_sdk();
    let created = sdk
        .projects()
        .create(new_project("A", "10", ProjectStatus::Funding, 100, 0))
        .unwrap();

    assert!(matches!(
        sdk.projects().update(created.id, ProjectUpdate::default()),
        Err(ReitError::InvalidArgument(_))
    ));

    let update = ProjectUpdate {
        roi: Some("11.5".into()),
        ..Default::default()
    };
    assert!(matches!(
        sdk.projects().update(created.id + 1, update.clone()),
        Err(ReitError::NotFound(_))
    ));
    assert_eq!(sdk.projects().update(created.id, update).unwrap().roi, "11.5");
}

#[test]
fn require_reports_missing_project() {
    let sdk = empty_sdk();
    assert!(matches!(sdk.projects().require(1), Err(ReitError::NotFound(_))));
}

// ---------------------------------------------------------------------------
// Users, investments, testimonials
// ---------------------------------------------------------------------------

#[test]
fn duplicate_username_or_email_is_rejected() {
    let sdk = empty_sdk();
    sdk.users().create(new_user("aziz")).unwrap();

    assert!(sdk.users().create(new_user("aziz")).is_err());

    let mut same_email = new_user("other");
    same_email.email = "aziz@example.com".into();
    assert!(sdk.users().create(same_email).is_err());
}

#[test]
fn investments_require_known_references() {
    let sdk = empty_sdk();
    let user = sdk.users().create(new_user("aziz")).unwrap();
    let project = sdk
        .projects()
        .create(new_project("A", "10", ProjectStatus::Funding, 1_000, 0))
        .unwrap();

    let missing_project = NewInvestment {
        user_id: Some(user.id),
        project_id: Some(project.id + 10),
        amount: 100,
        ..Default::default()
    };
    assert!(matches!(
        sdk.investments().create(missing_project),
        Err(ReitError::NotFound(_))
    ));

    for amount in [100, 250] {
        sdk.investments()
            .create(NewInvestment {
                user_id: Some(user.id),
                project_id: Some(project.id),
                amount,
                ..Default::default()
            })
            .unwrap();
    }
    assert_eq!(sdk.investments().total_for_project(project.id).unwrap(), 350);
    assert_eq!(sdk.investments().by_user(user.id).unwrap().len(), 2);
}

#[test]
fn testimonial_rating_must_be_in_range() {
    let sdk = empty_sdk();
    assert!(sdk.testimonials().create(new_testimonial("Low", 0)).is_err());
    assert!(sdk.testimonials().create(new_testimonial("High", 6)).is_err());
    sdk.testimonials().create(new_testimonial("Ok", 5)).unwrap();
    assert_eq!(sdk.testimonials().list().unwrap().len(), 1);
    assert!(sdk.testimonials().featured().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Async wrapper
// ---------------------------------------------------------------------------

#[cfg(feature = "async")]
mod async_client {
    use sair_reit_sdk::{AsyncReitSdk, ProjectCriteria, SortKey};

    #[tokio::test]
    async fn async_sdk_serves_stats_and_search() {
        let sdk = AsyncReitSdk::builder().build().await.unwrap();
        assert_eq!(sdk.backend().await.unwrap(), "memory");

        let stats = sdk.stats().await.unwrap();
        assert_eq!(stats.total_projects, 6);

        let sorted = sdk
            .search_projects(ProjectCriteria::new().sort_by(SortKey::FundingLow))
            .await
            .unwrap();
        assert_eq!(sorted.len(), 6);
        assert_eq!(sorted[0].title, "London Tech District");

        let count = sdk.run(|s| s.projects().count()).await.unwrap();
        assert_eq!(count, 6);
    }
}
