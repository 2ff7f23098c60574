//! SQL builders with parameterized query construction.
//!
//! All values go through DuckDB's parameter binding (`?` placeholders),
//! never through string interpolation. Column names are always quoted so the
//! camelCase schema keeps its casing. Builder methods return `&mut Self` for
//! chaining.
//!
//! # Example
//!
//! ```rust
//! use sair_reit_sdk::SqlBuilder;
//! let (sql, params) = SqlBuilder::new("projects")
//!     .where_eq("status", "ACTIVE")
//!     .order_by(&["\"id\" ASC"])
//!     .limit(10)
//!     .build();
//! assert_eq!(params.len(), 1);
//! ```

use chrono::{DateTime, Utc};
use duckdb::types::Value;

/// Conversion into a bindable DuckDB value.
pub trait IntoSqlValue {
    fn into_sql_value(self) -> Value;
}

impl IntoSqlValue for Value {
    fn into_sql_value(self) -> Value {
        self
    }
}

impl IntoSqlValue for i64 {
    fn into_sql_value(self) -> Value {
        Value::BigInt(self)
    }
}

impl IntoSqlValue for bool {
    fn into_sql_value(self) -> Value {
        Value::Boolean(self)
    }
}

impl IntoSqlValue for String {
    fn into_sql_value(self) -> Value {
        Value::Text(self)
    }
}

impl IntoSqlValue for &str {
    fn into_sql_value(self) -> Value {
        Value::Text(self.to_string())
    }
}

/// Timestamps are stored as RFC 3339 text.
impl IntoSqlValue for DateTime<Utc> {
    fn into_sql_value(self) -> Value {
        Value::Text(self.to_rfc3339())
    }
}

impl<T: IntoSqlValue> IntoSqlValue for Option<T> {
    fn into_sql_value(self) -> Value {
        match self {
            Some(v) => v.into_sql_value(),
            None => Value::Null,
        }
    }
}

fn quote(column: &str) -> String {
    format!("\"{}\"", column)
}

// ---------------------------------------------------------------------------
// SqlBuilder
// ---------------------------------------------------------------------------

/// Builds parameterized SELECT queries.
pub struct SqlBuilder {
    select_cols: Vec<String>,
    from_table: String,
    where_clauses: Vec<String>,
    params: Vec<Value>,
    order_by_cols: Vec<String>,
    limit_val: Option<usize>,
    offset_val: Option<usize>,
}

impl SqlBuilder {
    /// Create a builder targeting the given table.
    pub fn new(table: &str) -> Self {
        Self {
            select_cols: vec!["*".to_string()],
            from_table: table.to_string(),
            where_clauses: Vec::new(),
            params: Vec::new(),
            order_by_cols: Vec::new(),
            limit_val: None,
            offset_val: None,
        }
    }

    /// Start an INSERT into `table`.
    pub fn insert(table: &str) -> InsertBuilder {
        InsertBuilder::new(table)
    }

    /// Start an UPDATE of `table`.
    pub fn update(table: &str) -> UpdateBuilder {
        UpdateBuilder::new(table)
    }

    /// Set the select expressions (replaces the default `*`). Passed through
    /// verbatim, so aggregate expressions are allowed.
    pub fn select(&mut self, cols: &[&str]) -> &mut Self {
        self.select_cols = cols.iter().map(|c| c.to_string()).collect();
        self
    }

    /// Add an equality condition: `"{column}" = ?`.
    pub fn where_eq(&mut self, column: &str, value: impl IntoSqlValue) -> &mut Self {
        self.where_clauses.push(format!("{} = ?", quote(column)));
        self.params.push(value.into_sql_value());
        self
    }

    /// Add a case-insensitive substring condition: `LOWER("{column}") LIKE LOWER(?)`.
    ///
    /// The value is wrapped in `%...%`.
    pub fn where_contains(&mut self, column: &str, value: &str) -> &mut Self {
        self.where_clauses
            .push(format!("LOWER({}) LIKE LOWER(?)", quote(column)));
        self.params.push(Value::Text(format!("%{}%", value)));
        self
    }

    /// Add ORDER BY clauses (e.g. `"\"id\" ASC"`).
    pub fn order_by(&mut self, clauses: &[&str]) -> &mut Self {
        self.order_by_cols
            .extend(clauses.iter().map(|c| c.to_string()));
        self
    }

    /// Set the maximum number of rows to return.
    pub fn limit(&mut self, n: usize) -> &mut Self {
        self.limit_val = Some(n);
        self
    }

    /// Set the number of rows to skip before returning results.
    pub fn offset(&mut self, n: usize) -> &mut Self {
        self.offset_val = Some(n);
        self
    }

    /// Build the final SQL string and parameter list.
    pub fn build(&self) -> (String, Vec<Value>) {
        let mut parts = vec![
            format!("SELECT {}", self.select_cols.join(", ")),
            format!("FROM {}", self.from_table),
        ];

        if !self.where_clauses.is_empty() {
            parts.push(format!("WHERE {}", self.where_clauses.join(" AND ")));
        }

        if !self.order_by_cols.is_empty() {
            parts.push(format!("ORDER BY {}", self.order_by_cols.join(", ")));
        }

        if let Some(n) = self.limit_val {
            parts.push(format!("LIMIT {}", n));
        }

        if let Some(n) = self.offset_val {
            parts.push(format!("OFFSET {}", n));
        }

        (parts.join("\n"), self.params.clone())
    }
}

// ---------------------------------------------------------------------------
// InsertBuilder
// ---------------------------------------------------------------------------

/// Builds a single-row `INSERT ... VALUES (...) RETURNING *`.
pub struct InsertBuilder {
    table: String,
    columns: Vec<String>,
    params: Vec<Value>,
}

impl InsertBuilder {
    fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            columns: Vec::new(),
            params: Vec::new(),
        }
    }

    pub fn value(&mut self, column: &str, value: impl IntoSqlValue) -> &mut Self {
        self.columns.push(quote(column));
        self.params.push(value.into_sql_value());
        self
    }

    pub fn build(&self) -> (String, Vec<Value>) {
        let placeholders: Vec<&str> = self.columns.iter().map(|_| "?").collect();
        let sql = format!(
            "INSERT INTO {} ({})\nVALUES ({})\nRETURNING *",
            self.table,
            self.columns.join(", "),
            placeholders.join(", ")
        );
        (sql, self.params.clone())
    }
}

// ---------------------------------------------------------------------------
// UpdateBuilder
// ---------------------------------------------------------------------------

/// Builds `UPDATE ... SET ... WHERE ... RETURNING *`.
///
/// SET parameters precede WHERE parameters in the output list.
pub struct UpdateBuilder {
    table: String,
    assignments: Vec<String>,
    set_params: Vec<Value>,
    where_clauses: Vec<String>,
    where_params: Vec<Value>,
}

impl UpdateBuilder {
    fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            assignments: Vec::new(),
            set_params: Vec::new(),
            where_clauses: Vec::new(),
            where_params: Vec::new(),
        }
    }

    pub fn set(&mut self, column: &str, value: impl IntoSqlValue) -> &mut Self {
        self.assignments.push(format!("{} = ?", quote(column)));
        self.set_params.push(value.into_sql_value());
        self
    }

    /// Set `column` only when `value` is present.
    pub fn set_some<T: IntoSqlValue>(&mut self, column: &str, value: Option<T>) -> &mut Self {
        if let Some(v) = value {
            self.set(column, v);
        }
        self
    }

    pub fn where_eq(&mut self, column: &str, value: impl IntoSqlValue) -> &mut Self {
        self.where_clauses.push(format!("{} = ?", quote(column)));
        self.where_params.push(value.into_sql_value());
        self
    }

    pub fn build(&self) -> (String, Vec<Value>) {
        let mut parts = vec![
            format!("UPDATE {}", self.table),
            format!("SET {}", self.assignments.join(", ")),
        ];
        if !self.where_clauses.is_empty() {
            parts.push(format!("WHERE {}", self.where_clauses.join(" AND ")));
        }
        parts.push("RETURNING *".to_string());

        let mut params = self.set_params.clone();
        params.extend(self.where_params.iter().cloned());
        (parts.join("\n"), params)
    }
}
