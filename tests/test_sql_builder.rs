//! Unit tests for the SELECT / INSERT / UPDATE builders.

use chrono::{TimeZone, Utc};
use duckdb::types::Value;
use sair_reit_sdk::SqlBuilder;

fn text(s: &str) -> Value {
    Value::Text(s.to_string())
}

// ---------------------------------------------------------------------------
// SELECT
// ---------------------------------------------------------------------------

#[test]
fn new_creates_select_star_from_table() {
    let (sql, params) = SqlBuilder::new("projects").build();
    assert_eq!(sql, "SELECT *\nFROM projects");
    assert!(params.is_empty());
}

#[test]
fn select_replaces_default_star() {
    let (sql, _) = SqlBuilder::new("projects")
        .select(&["\"id\"", "COUNT(*) AS cnt"])
        .build();
    assert!(sql.starts_with("SELECT \"id\", COUNT(*) AS cnt\n"));
}

#[test]
fn where_eq_quotes_column_and_binds_value() {
    let (sql, params) = SqlBuilder::new("projects")
        .where_eq("targetAmount", 5_000_000i64)
        .build();
    assert!(sql.contains("WHERE \"targetAmount\" = ?"));
    assert_eq!(params, vec![Value::BigInt(5_000_000)]);
}

#[test]
fn where_contains_wraps_value_in_wildcards() {
    let (sql, params) = SqlBuilder::new("projects")
        .where_contains("title", "Marina")
        .build();
    assert!(sql.contains("LOWER(\"title\") LIKE LOWER(?)"));
    assert_eq!(params, vec![text("%Marina%")]);
}

#[test]
fn conditions_join_with_and_in_param_order() {
    let (sql, params) = SqlBuilder::new("investments")
        .where_eq("userId", 7i64)
        .where_eq("status", "ACTIVE")
        .build();
    assert!(sql.contains("WHERE \"userId\" = ? AND \"status\" = ?"));
    assert_eq!(params, vec![Value::BigInt(7), text("ACTIVE")]);
}

#[test]
fn order_limit_offset_follow_where() {
    let (sql, _) = SqlBuilder::new("projects")
        .where_eq("featured", true)
        .order_by(&["\"priority\" DESC"])
        .limit(10)
        .offset(20)
        .build();
    assert_eq!(
        sql,
        "SELECT *\nFROM projects\nWHERE \"featured\" = ?\nORDER BY \"priority\" DESC\nLIMIT 10\nOFFSET 20"
    );
}

// ---------------------------------------------------------------------------
// INSERT
// ---------------------------------------------------------------------------

#[test]
fn insert_lists_columns_and_returns_row() {
    let (sql, params) = SqlBuilder::insert("testimonials")
        .value("name", "ABDUL AZIZ")
        .value("rating", 5i64)
        .value("avatar", None::<String>)
        .build();
    assert_eq!(
        sql,
        "INSERT INTO testimonials (\"name\", \"rating\", \"avatar\")\nVALUES (?, ?, ?)\nRETURNING *"
    );
    assert_eq!(params, vec![text("ABDUL AZIZ"), Value::BigInt(5), Value::Null]);
}

#[test]
fn timestamps_bind_as_rfc3339_text() {
    let at = Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap();
    let (_, params) = SqlBuilder::insert("projects").value("createdAt", at).build();
    assert_eq!(params, vec![text("2024-06-30T12:00:00+00:00")]);
}

// ---------------------------------------------------------------------------
// UPDATE
// ---------------------------------------------------------------------------

#[test]
fn update_skips_absent_fields() {
    let (sql, params) = SqlBuilder::update("projects")
        .set_some("title", Some("Renamed"))
        .set_some("roi", None::<String>)
        .set("featured", true)
        .where_eq("id", 3i64)
        .build();
    assert_eq!(
        sql,
        "UPDATE projects\nSET \"title\" = ?, \"featured\" = ?\nWHERE \"id\" = ?\nRETURNING *"
    );
    assert_eq!(params, vec![text("Renamed"), Value::Boolean(true), Value::BigInt(3)]);
}

#[test]
fn update_set_params_precede_where_params() {
    let (_, params) = SqlBuilder::update("projects")
        .where_eq("id", 1i64)
        .set("status", "SOLD")
        .build();
    assert_eq!(params, vec![text("SOLD"), Value::BigInt(1)]);
}
