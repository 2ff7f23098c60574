//! Connection integration tests: table creation, raw SQL execution and row
//! deserialization.

use duckdb::types::Value;
use sair_reit_sdk::models::Testimonial;
use sair_reit_sdk::Connection;

fn connection_with_testimonials() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    conn.ensure_tables(&["testimonials"]).unwrap();
    conn.raw()
        .execute_batch(
            r#"INSERT INTO testimonials ("name", "content", "rating", "verified", "featured", "createdAt")
               VALUES ('ABDUL AZIZ', 'Great', 5, true, true, '2024-01-01T00:00:00+00:00'),
                      ('MAKHDOOM NAVEED', 'Solid', 4, true, false, '2024-01-02T00:00:00+00:00');"#,
        )
        .unwrap();
    conn
}

// ---------------------------------------------------------------------------
// ensure_tables / has_table / tables
// ---------------------------------------------------------------------------

#[test]
fn has_table_returns_false_initially() {
    let conn = Connection::open_in_memory().unwrap();
    assert!(!conn.has_table("projects"));
    assert!(conn.tables().is_empty());
}

#[test]
fn ensure_tables_registers_each_table_once() {
    let conn = Connection::open_in_memory().unwrap();
    conn.ensure_tables(&["projects", "users"]).unwrap();
    conn.ensure_tables(&["projects"]).unwrap();
    assert_eq!(conn.tables(), vec!["projects".to_string(), "users".to_string()]);
}

#[test]
fn ensure_tables_rejects_unknown_table() {
    let conn = Connection::open_in_memory().unwrap();
    assert!(conn.ensure_tables(&["cards"]).is_err());
}

#[test]
fn open_creates_parent_directories() {
    let tmp_dir = tempfile::tempdir().unwrap();
    let path = tmp_dir.path().join("nested").join("dir").join("reit.duckdb");
    let conn = Connection::open(&path).unwrap();
    conn.ensure_tables(&["projects"]).unwrap();
    assert!(path.exists());
}

// ---------------------------------------------------------------------------
// execute
// ---------------------------------------------------------------------------

#[test]
fn execute_returns_rows_keyed_by_column() {
    let conn = connection_with_testimonials();
    let rows = conn
        .execute("SELECT * FROM testimonials ORDER BY \"id\"", &[])
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "ABDUL AZIZ");
    assert_eq!(rows[0]["rating"], 5);
    assert_eq!(rows[1]["featured"], false);
    assert!(rows[0]["avatar"].is_null());
}

#[test]
fn execute_with_params() {
    let conn = connection_with_testimonials();
    let rows = conn
        .execute(
            "SELECT * FROM testimonials WHERE \"rating\" = ?",
            &[Value::BigInt(4)],
        )
        .unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "MAKHDOOM NAVEED");
}

#[test]
fn execute_returns_empty_for_no_matches() {
    let conn = connection_with_testimonials();
    let rows = conn
        .execute(
            "SELECT * FROM testimonials WHERE \"name\" = ?",
            &[Value::Text("nobody".into())],
        )
        .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn execute_into_deserializes_models() {
    let conn = connection_with_testimonials();
    let testimonials: Vec<Testimonial> = conn
        .execute_into("SELECT * FROM testimonials ORDER BY \"id\"", &[])
        .unwrap();
    assert_eq!(testimonials.len(), 2);
    assert_eq!(testimonials[0].id, 1);
    assert!(testimonials[0].featured);
    assert_eq!(testimonials[1].rating, 4);
}

// ---------------------------------------------------------------------------
// execute_scalar
// ---------------------------------------------------------------------------

#[test]
fn execute_scalar_returns_single_value() {
    let conn = connection_with_testimonials();
    let count = conn
        .execute_scalar("SELECT COUNT(*) FROM testimonials", &[])
        .unwrap();
    assert_eq!(count.and_then(|v| v.as_i64()), Some(2));
}

#[test]
fn execute_scalar_returns_none_for_empty_result() {
    let conn = connection_with_testimonials();
    let result = conn
        .execute_scalar(
            "SELECT \"name\" FROM testimonials WHERE \"rating\" = ?",
            &[Value::BigInt(1)],
        )
        .unwrap();
    assert!(result.is_none());
}
