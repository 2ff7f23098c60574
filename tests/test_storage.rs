//! Storage behaviour shared by the memory and DuckDB backends.
//!
//! Every test runs against each backend from `common::empty_stores()`.

mod common;

use common::{empty_stores, new_project, new_testimonial, new_user};
use sair_reit_sdk::models::{NewInvestment, NewTransaction, ProjectStatus, ProjectUpdate};
use sair_reit_sdk::storage::seed::{sample_projects, sample_testimonials, seed_if_empty};
use sair_reit_sdk::{DuckDbStorage, Storage};

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[test]
fn create_project_assigns_sequential_ids() {
    let (stores, _tmp) = empty_stores();
    for store in &stores {
        let first = store
            .create_project(new_project("A", "10", ProjectStatus::Funding, 100, 10))
            .unwrap();
        let second = store
            .create_project(new_project("B", "12", ProjectStatus::Active, 200, 20))
            .unwrap();
        assert_eq!((first.id, second.id), (1, 2), "{}", store.backend());

        let all = store.all_projects().unwrap();
        assert_eq!(all.iter().map(|p| p.title.as_str()).collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(all[1].status, ProjectStatus::Active);
    }
}

#[test]
fn create_project_defaults_current_amount_to_zero() {
    let (stores, _tmp) = empty_stores();
    for store in &stores {
        let mut payload = new_project("A", "10", ProjectStatus::Funding, 100, 0);
        payload.current_amount = None;
        let created = store.create_project(payload).unwrap();
        assert_eq!(created.current_amount, Some(0), "{}", store.backend());
    }
}

#[test]
fn project_lookup_misses_return_none() {
    let (stores, _tmp) = empty_stores();
    for store in &stores {
        assert!(store.project(42).unwrap().is_none(), "{}", store.backend());
        assert!(store.all_projects().unwrap().is_empty());
    }
}

#[test]
fn unknown_status_round_trips() {
    let (stores, _tmp) = empty_stores();
    for store in &stores {
        let created = store
            .create_project(new_project("A", "10", ProjectStatus::from("On Hold"), 100, 0))
            .unwrap();
        let fetched = store.project(created.id).unwrap().unwrap();
        assert_eq!(fetched.status, ProjectStatus::Unknown("On Hold".into()), "{}", store.backend());
        assert!(!fetched.status.is_known());
    }
}

#[test]
fn update_project_changes_only_set_fields() {
    let (stores, _tmp) = empty_stores();
    for store in &stores {
        let created = store
            .create_project(new_project("A", "10", ProjectStatus::Funding, 100, 10))
            .unwrap();
        let update = ProjectUpdate {
            current_amount: Some(100),
            status: Some(ProjectStatus::Complete),
            ..Default::default()
        };
        let updated = store.update_project(created.id, update).unwrap().unwrap();

        assert_eq!(updated.current_amount, Some(100), "{}", store.backend());
        assert_eq!(updated.status, ProjectStatus::Complete);
        assert_eq!(updated.title, "A");
        assert_eq!(updated.roi, "10");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
        assert_eq!(store.project(created.id).unwrap().unwrap(), updated);
    }
}

#[test]
fn update_project_changes_property_details() {
    let (stores, _tmp) = empty_stores();
    for store in &stores {
        let created = store
            .create_project(new_project("B", "10", ProjectStatus::Funding, 100, 10))
            .unwrap();
        let update = ProjectUpdate {
            property_size: Some(1_350),
            bedrooms: Some(5),
            bathrooms: Some(4),
            city: Some("Hyderabad".into()),
            country: Some("Pakistan".into()),
            expected_completion_date: Some("2025-06-30".into()),
            ..Default::default()
        };
        let updated = store.update_project(created.id, update).unwrap().unwrap();

        assert_eq!(updated.property_size, Some(1_350), "{}", store.backend());
        assert_eq!(updated.bedrooms, Some(5));
        assert_eq!(updated.bathrooms, Some(4));
        assert_eq!(updated.city.as_deref(), Some("Hyderabad"));
        assert_eq!(updated.country.as_deref(), Some("Pakistan"));
        assert_eq!(updated.expected_completion_date.as_deref(), Some("2025-06-30"));
        assert_eq!(updated.title, "B");
        assert_eq!(store.project(created.id).unwrap().unwrap(), updated);
    }
}

#[test]
fn update_missing_project_returns_none() {
    let (stores, _tmp) = empty_stores();
    for store in &stores {
        let update = ProjectUpdate {
            title: Some("Ghost".into()),
            ..Default::default()
        };
        assert!(store.update_project(9, update).unwrap().is_none(), "{}", store.backend());
    }
}

// ---------------------------------------------------------------------------
// Users, investments, transactions
// ---------------------------------------------------------------------------

#[test]
fn users_are_found_by_username_and_email() {
    let (stores, _tmp) = empty_stores();
    for store in &stores {
        let created = store.create_user(new_user("aziz")).unwrap();
        assert!(created.is_active, "{}", store.backend());
        assert!(!created.kyc_verified);
        assert_eq!(store.user(created.id).unwrap().unwrap().username, "aziz");
        assert_eq!(store.user_by_username("aziz").unwrap().unwrap().id, created.id);
        assert_eq!(store.user_by_email("aziz@example.com").unwrap().unwrap().id, created.id);
        assert!(store.user_by_username("naveed").unwrap().is_none());
    }
}

#[test]
fn investments_apply_defaults_and_filter_by_owner() {
    let (stores, _tmp) = empty_stores();
    for store in &stores {
        let user = store.create_user(new_user("aziz")).unwrap();
        let project = store
            .create_project(new_project("A", "10", ProjectStatus::Funding, 1_000, 0))
            .unwrap();
        let investment = store
            .create_investment(NewInvestment {
                user_id: Some(user.id),
                project_id: Some(project.id),
                amount: 250,
                ..Default::default()
            })
            .unwrap();

        assert_eq!(investment.units, Some(1), "{}", store.backend());
        assert_eq!(investment.returns.as_deref(), Some("0"));
        assert_eq!(investment.status, "ACTIVE");
        assert_eq!(store.investments_by_user(user.id).unwrap().len(), 1);
        assert_eq!(store.investments_by_project(project.id).unwrap()[0].amount, 250);
        assert!(store.investments_by_user(user.id + 1).unwrap().is_empty());
    }
}

#[test]
fn transactions_default_fees_to_zero() {
    let (stores, _tmp) = empty_stores();
    for store in &stores {
        let user = store.create_user(new_user("aziz")).unwrap();
        let created = store
            .create_transaction(NewTransaction {
                user_id: Some(user.id),
                amount: 500,
                kind: "INVESTMENT".into(),
                status: "PENDING".into(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(created.fees, 0, "{}", store.backend());
        assert!(created.processed_at.is_none());

        let listed = store.transactions_by_user(user.id).unwrap();
        assert_eq!(listed, vec![created]);
    }
}

// ---------------------------------------------------------------------------
// Testimonials and seeding
// ---------------------------------------------------------------------------

#[test]
fn testimonials_list_in_insertion_order() {
    let (stores, _tmp) = empty_stores();
    for store in &stores {
        store.create_testimonial(new_testimonial("First", 5)).unwrap();
        store.create_testimonial(new_testimonial("Second", 4)).unwrap();
        let names: Vec<String> = store
            .all_testimonials()
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["First", "Second"], "{}", store.backend());
    }
}

#[test]
fn seed_fills_empty_tables_once() {
    let (stores, _tmp) = empty_stores();
    let expected = sample_projects().len() + sample_testimonials().len();
    for store in &stores {
        assert_eq!(seed_if_empty(store.as_ref()).unwrap(), expected, "{}", store.backend());
        assert_eq!(seed_if_empty(store.as_ref()).unwrap(), 0);
        assert_eq!(store.all_projects().unwrap().len(), 6);
        assert_eq!(store.all_testimonials().unwrap().len(), 3);
    }
}

#[test]
fn seed_skips_tables_that_have_rows() {
    let (stores, _tmp) = empty_stores();
    for store in &stores {
        store
            .create_project(new_project("Mine", "10", ProjectStatus::Draft, 100, 0))
            .unwrap();
        assert_eq!(seed_if_empty(store.as_ref()).unwrap(), 3, "{}", store.backend());
        assert_eq!(store.all_projects().unwrap().len(), 1);
    }
}

// ---------------------------------------------------------------------------
// DuckDB persistence
// ---------------------------------------------------------------------------

#[test]
fn duckdb_storage_creates_every_table() {
    let store = DuckDbStorage::open_in_memory().unwrap();
    assert_eq!(
        store.connection().tables(),
        vec!["investments", "projects", "testimonials", "transactions", "users"]
    );
}

#[test]
fn duckdb_file_survives_reopen() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("reit.duckdb");

    {
        let store = DuckDbStorage::open(&path).unwrap();
        store
            .create_project(new_project("Kept", "11", ProjectStatus::Funding, 100, 5))
            .unwrap();
    }

    let store = DuckDbStorage::open(&path).unwrap();
    let projects = store.all_projects().unwrap();
    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "Kept");

    let next = store
        .create_project(new_project("Next", "12", ProjectStatus::Funding, 100, 0))
        .unwrap();
    assert_eq!(next.id, 2);
}
