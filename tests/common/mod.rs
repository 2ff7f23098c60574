//! Shared test fixtures for the SAIR REIT SDK integration tests.
//!
//! Provides hand-built project snapshots for the pure analytics functions
//! and freshly opened stores (memory, in-memory DuckDB, on-disk DuckDB in a
//! temp directory) for the storage and query tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use sair_reit_sdk::models::{NewProject, NewTestimonial, NewUser, Project, ProjectStatus};
use sair_reit_sdk::{DuckDbStorage, MemStorage, Storage};

// ---------------------------------------------------------------------------
// Project snapshots
// ---------------------------------------------------------------------------

/// A minimal valid insert payload.
pub fn new_project(
    title: &str,
    roi: &str,
    status: ProjectStatus,
    target: i64,
    current: i64,
) -> NewProject {
    NewProject {
        title: title.to_string(),
        description: format!("{title} description"),
        location: "Hyderabad, Pakistan".to_string(),
        category: "RESIDENTIAL".to_string(),
        property_type: "VILLA".to_string(),
        roi: roi.to_string(),
        min_investment: 50_000,
        target_amount: target,
        current_amount: Some(current),
        status,
        ..Default::default()
    }
}

/// A stored project with a fixed timestamp.
pub fn project(id: i64, roi: &str, status: ProjectStatus, target: i64, current: i64) -> Project {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Project::from_new(
        id,
        new_project(&format!("Project {id}"), roi, status, target, current),
        now,
    )
}

/// The three-record snapshot used by the dashboard and filter scenarios.
pub fn sample_projects() -> Vec<Project> {
    vec![
        project(1, "12.50", ProjectStatus::Active, 5_000_000, 3_000_000),
        project(2, "15.20", ProjectStatus::Complete, 8_000_000, 8_000_000),
        project(3, "8.75", ProjectStatus::Funding, 3_000_000, 1_500_000),
    ]
}

pub fn ids(projects: &[Project]) -> Vec<i64> {
    projects.iter().map(|p| p.id).collect()
}

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

/// One of each backend, empty. The on-disk database lives in the returned
/// `TempDir`, which the caller must keep alive for the duration of the test.
pub fn empty_stores() -> (Vec<Box<dyn Storage>>, tempfile::TempDir) {
    let tmp_dir = tempfile::tempdir().unwrap();
    let stores: Vec<Box<dyn Storage>> = vec![
        Box::new(MemStorage::new()),
        Box::new(DuckDbStorage::open_in_memory().unwrap()),
        Box::new(DuckDbStorage::open(tmp_dir.path().join("reit.duckdb")).unwrap()),
    ];
    (stores, tmp_dir)
}

pub fn new_user(username: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: "secret".to_string(),
        first_name: Some("Test".to_string()),
        last_name: Some("Investor".to_string()),
        ..Default::default()
    }
}

pub fn new_testimonial(name: &str, rating: i64) -> NewTestimonial {
    NewTestimonial {
        name: name.to_string(),
        content: "Steady returns every quarter.".to_string(),
        rating,
        ..Default::default()
    }
}
