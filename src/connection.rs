//! DuckDB connection wrapper with lazy table creation and query execution.
//!
//! Tables are created on first use from the DDL in
//! [`config::table_schemas`](crate::config::table_schemas). Rows come back as
//! JSON maps keyed by column name so they deserialize straight into the
//! camelCase models.

use crate::config;
use crate::error::{ReitError, Result};
use duckdb::{types::Value, types::ValueRef, Connection as DuckDbConnection};
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Wraps a DuckDB connection and tracks which tables have been created.
pub struct Connection {
    conn: DuckDbConnection,
    registered_tables: RefCell<HashSet<String>>,
}

impl Connection {
    /// Open (or create) a database file, creating parent directories.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let conn = DuckDbConnection::open(path)?;
        Ok(Self {
            conn,
            registered_tables: RefCell::new(HashSet::new()),
        })
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = DuckDbConnection::open_in_memory()?;
        Ok(Self {
            conn,
            registered_tables: RefCell::new(HashSet::new()),
        })
    }

    /// Ensure one or more tables exist, creating them if needed.
    pub fn ensure_tables(&self, tables: &[&str]) -> Result<()> {
        for name in tables {
            if !self.registered_tables.borrow().contains(*name) {
                self.ensure_table(name)?;
            }
        }
        Ok(())
    }

    /// Execute SQL and return results as a `Vec` of `HashMap`s.
    ///
    /// Each row is represented as a `HashMap<String, serde_json::Value>`.
    pub fn execute(
        &self,
        sql: &str,
        params: &[Value],
    ) -> Result<Vec<HashMap<String, serde_json::Value>>> {
        let mut stmt = self.conn.prepare(sql)?;

        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows_result = stmt.query(param_values.as_slice())?;

        // Column metadata is only available once the statement has run
        let executed = rows_result.as_ref().ok_or_else(|| {
            ReitError::InvalidArgument(format!("statement did not execute: {sql}"))
        })?;
        let column_names: Vec<String> = executed
            .column_names()
            .into_iter()
            .map(|s| s.to_string())
            .collect();
        let column_count = executed.column_count();

        let mut out: Vec<HashMap<String, serde_json::Value>> = Vec::new();

        while let Some(row) = rows_result.next()? {
            let mut map = HashMap::with_capacity(column_count);
            for (i, col_name) in column_names.iter().enumerate() {
                let value = convert_value_ref(row.get_ref(i)?);
                map.insert(col_name.clone(), value);
            }
            out.push(map);
        }

        Ok(out)
    }

    /// Execute SQL and deserialize each row into type `T`.
    pub fn execute_into<T: DeserializeOwned>(&self, sql: &str, params: &[Value]) -> Result<Vec<T>> {
        let rows = self.execute(sql, params)?;
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            let value = serde_json::Value::Object(
                row.into_iter().collect::<serde_json::Map<String, serde_json::Value>>(),
            );
            let item: T = serde_json::from_value(value)?;
            results.push(item);
        }
        Ok(results)
    }

    /// Execute SQL and deserialize the first row, if any.
    pub fn execute_one<T: DeserializeOwned>(
        &self,
        sql: &str,
        params: &[Value],
    ) -> Result<Option<T>> {
        Ok(self.execute_into(sql, params)?.into_iter().next())
    }

    /// Execute SQL and return the first column of the first row.
    ///
    /// Returns `None` if the result set is empty.
    pub fn execute_scalar(&self, sql: &str, params: &[Value]) -> Result<Option<serde_json::Value>> {
        let mut stmt = self.conn.prepare(sql)?;
        let param_values: Vec<&dyn duckdb::ToSql> = params
            .iter()
            .map(|p| p as &dyn duckdb::ToSql)
            .collect();

        let mut rows = stmt.query(param_values.as_slice())?;

        if let Some(row) = rows.next()? {
            let value = convert_value_ref(row.get_ref(0)?);
            Ok(Some(value))
        } else {
            Ok(None)
        }
    }

    /// Check whether a table has been created through this connection.
    pub fn has_table(&self, name: &str) -> bool {
        self.registered_tables.borrow().contains(name)
    }

    /// Return the names of all tables created so far.
    pub fn tables(&self) -> Vec<String> {
        let mut names: Vec<String> = self.registered_tables.borrow().iter().cloned().collect();
        names.sort();
        names
    }

    /// Access the underlying DuckDB connection for advanced usage.
    pub fn raw(&self) -> &DuckDbConnection {
        &self.conn
    }

    fn ensure_table(&self, table_name: &str) -> Result<()> {
        let schemas = config::table_schemas();
        let ddl = schemas
            .get(table_name)
            .ok_or_else(|| ReitError::InvalidArgument(format!("unknown table: {table_name}")))?;

        self.conn.execute_batch(ddl)?;
        self.registered_tables
            .borrow_mut()
            .insert(table_name.to_string());
        debug!(table = table_name, "registered table");

        Ok(())
    }
}

/// Convert a DuckDB `ValueRef` to a `serde_json::Value`.
fn convert_value_ref(val: ValueRef<'_>) -> serde_json::Value {
    match val {
        ValueRef::Null => serde_json::Value::Null,
        ValueRef::Boolean(b) => serde_json::Value::Bool(b),
        ValueRef::TinyInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::SmallInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::Int(n) => serde_json::Value::Number(n.into()),
        ValueRef::BigInt(n) => serde_json::Value::Number(n.into()),
        ValueRef::HugeInt(n) => {
            // May not fit in i64; fall back to text
            if let Ok(i) = i64::try_from(n) {
                serde_json::Value::Number(i.into())
            } else {
                serde_json::Value::String(n.to_string())
            }
        }
        ValueRef::Double(f) => serde_json::Number::from_f64(f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        ValueRef::Text(bytes) => {
            serde_json::Value::String(String::from_utf8_lossy(bytes).to_string())
        }
        // The schema only uses integer, boolean and text columns
        _ => serde_json::Value::Null,
    }
}
