//! DuckDB-backed storage.

use std::path::Path;

use chrono::Utc;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::Storage;
use crate::config;
use crate::connection::Connection;
use crate::error::{ReitError, Result};
use crate::models::{
    Investment, NewInvestment, NewProject, NewTestimonial, NewTransaction, NewUser, Project,
    ProjectUpdate, Testimonial, Transaction, User, DEFAULT_INVESTMENT_STATUS,
};
use crate::sql_builder::SqlBuilder;

/// Persists records in DuckDB tables created on first use.
///
/// Ids come from per-table sequences; inserts and updates read the stored
/// row back with `RETURNING *`.
pub struct DuckDbStorage {
    conn: Connection,
}

impl DuckDbStorage {
    /// Open (or create) a database file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        info!(path = %path.display(), "opened DuckDB storage");
        Self::with_connection(conn)
    }

    /// A throwaway in-memory DuckDB database.
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.ensure_tables(&config::TABLES)?;
        Ok(Self { conn })
    }

    /// Access the wrapped connection for raw SQL.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn find_by<T: DeserializeOwned>(
        &self,
        table: &str,
        column: &str,
        value: impl crate::sql_builder::IntoSqlValue,
    ) -> Result<Option<T>> {
        let (sql, params) = SqlBuilder::new(table).where_eq(column, value).limit(1).build();
        self.conn.execute_one(&sql, &params)
    }

    fn list_by<T: DeserializeOwned>(
        &self,
        table: &str,
        column: &str,
        value: i64,
    ) -> Result<Vec<T>> {
        let (sql, params) = SqlBuilder::new(table)
            .where_eq(column, value)
            .order_by(&["\"id\" ASC"])
            .build();
        self.conn.execute_into(&sql, &params)
    }

    fn list_all<T: DeserializeOwned>(&self, table: &str) -> Result<Vec<T>> {
        let (sql, params) = SqlBuilder::new(table).order_by(&["\"id\" ASC"]).build();
        self.conn.execute_into(&sql, &params)
    }

    fn inserted<T: DeserializeOwned>(
        &self,
        table: &str,
        sql: &str,
        params: &[duckdb::types::Value],
    ) -> Result<T> {
        self.conn
            .execute_one(sql, params)?
            .ok_or_else(|| ReitError::NotFound(format!("insert into {table} returned no row")))
    }
}

impl Storage for DuckDbStorage {
    fn backend(&self) -> &'static str {
        "duckdb"
    }

    fn user(&self, id: i64) -> Result<Option<User>> {
        self.find_by("users", "id", id)
    }

    fn user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.find_by("users", "username", username)
    }

    fn user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.find_by("users", "email", email)
    }

    fn create_user(&self, user: NewUser) -> Result<User> {
        let now = Utc::now();
        let (sql, params) = SqlBuilder::insert("users")
            .value("username", user.username)
            .value("email", user.email)
            .value("password", user.password)
            .value("firstName", user.first_name)
            .value("lastName", user.last_name)
            .value("phone", user.phone)
            .value("nationality", user.nationality)
            .value("kycVerified", false)
            .value("isActive", true)
            .value("createdAt", now)
            .value("updatedAt", now)
            .build();
        let created: User = self.inserted("users", &sql, &params)?;
        debug!(id = created.id, "created user");
        Ok(created)
    }

    fn all_projects(&self) -> Result<Vec<Project>> {
        self.list_all("projects")
    }

    fn project(&self, id: i64) -> Result<Option<Project>> {
        self.find_by("projects", "id", id)
    }

    fn create_project(&self, project: NewProject) -> Result<Project> {
        let now = Utc::now();
        let (sql, params) = SqlBuilder::insert("projects")
            .value("title", project.title)
            .value("description", project.description)
            .value("shortDescription", project.short_description)
            .value("location", project.location)
            .value("category", project.category)
            .value("propertyType", project.property_type)
            .value("roi", project.roi)
            .value("minInvestment", project.min_investment)
            .value("targetAmount", project.target_amount)
            .value("currentAmount", project.current_amount.unwrap_or(0))
            .value("status", String::from(project.status))
            .value("featured", project.featured)
            .value("priority", project.priority)
            .value("propertySize", project.property_size)
            .value("bedrooms", project.bedrooms)
            .value("bathrooms", project.bathrooms)
            .value("monthlyRent", project.monthly_rent)
            .value("annualAppreciation", project.annual_appreciation)
            .value("imageUrl", project.image_url)
            .value("city", project.city)
            .value("country", project.country)
            .value("expectedCompletionDate", project.expected_completion_date)
            .value("createdAt", now)
            .value("updatedAt", now)
            .build();
        let created: Project = self.inserted("projects", &sql, &params)?;
        debug!(id = created.id, title = %created.title, "created project");
        Ok(created)
    }

    fn update_project(&self, id: i64, update: ProjectUpdate) -> Result<Option<Project>> {
        let (sql, params) = SqlBuilder::update("projects")
            .set_some("title", update.title)
            .set_some("description", update.description)
            .set_some("shortDescription", update.short_description)
            .set_some("location", update.location)
            .set_some("category", update.category)
            .set_some("propertyType", update.property_type)
            .set_some("roi", update.roi)
            .set_some("minInvestment", update.min_investment)
            .set_some("targetAmount", update.target_amount)
            .set_some("currentAmount", update.current_amount)
            .set_some("status", update.status.map(String::from))
            .set_some("featured", update.featured)
            .set_some("priority", update.priority)
            .set_some("propertySize", update.property_size)
            .set_some("bedrooms", update.bedrooms)
            .set_some("bathrooms", update.bathrooms)
            .set_some("monthlyRent", update.monthly_rent)
            .set_some("annualAppreciation", update.annual_appreciation)
            .set_some("imageUrl", update.image_url)
            .set_some("city", update.city)
            .set_some("country", update.country)
            .set_some("expectedCompletionDate", update.expected_completion_date)
            .set("updatedAt", Utc::now())
            .where_eq("id", id)
            .build();
        let updated: Option<Project> = self.conn.execute_one(&sql, &params)?;
        if updated.is_some() {
            debug!(id, "updated project");
        }
        Ok(updated)
    }

    fn investments_by_user(&self, user_id: i64) -> Result<Vec<Investment>> {
        self.list_by("investments", "userId", user_id)
    }

    fn investments_by_project(&self, project_id: i64) -> Result<Vec<Investment>> {
        self.list_by("investments", "projectId", project_id)
    }

    fn create_investment(&self, investment: NewInvestment) -> Result<Investment> {
        let now = Utc::now();
        let (sql, params) = SqlBuilder::insert("investments")
            .value("userId", investment.user_id)
            .value("projectId", investment.project_id)
            .value("amount", investment.amount)
            .value("units", investment.units.unwrap_or(1))
            .value("returns", investment.returns.unwrap_or_else(|| "0".to_string()))
            .value("status", DEFAULT_INVESTMENT_STATUS)
            .value("investmentDate", now)
            .value("notes", investment.notes)
            .value("createdAt", now)
            .value("updatedAt", now)
            .build();
        let created: Investment = self.inserted("investments", &sql, &params)?;
        debug!(id = created.id, amount = created.amount, "created investment");
        Ok(created)
    }

    fn transactions_by_user(&self, user_id: i64) -> Result<Vec<Transaction>> {
        self.list_by("transactions", "userId", user_id)
    }

    fn create_transaction(&self, transaction: NewTransaction) -> Result<Transaction> {
        let (sql, params) = SqlBuilder::insert("transactions")
            .value("userId", transaction.user_id)
            .value("projectId", transaction.project_id)
            .value("investmentId", transaction.investment_id)
            .value("amount", transaction.amount)
            .value("type", transaction.kind)
            .value("status", transaction.status)
            .value("paymentMethod", transaction.payment_method)
            .value("reference", transaction.reference)
            .value("description", transaction.description)
            .value("fees", transaction.fees.unwrap_or(0))
            .value("netAmount", transaction.net_amount)
            .value("processedAt", transaction.processed_at)
            .value("createdAt", Utc::now())
            .build();
        let created: Transaction = self.inserted("transactions", &sql, &params)?;
        debug!(id = created.id, kind = %created.kind, "created transaction");
        Ok(created)
    }

    fn all_testimonials(&self) -> Result<Vec<Testimonial>> {
        self.list_all("testimonials")
    }

    fn create_testimonial(&self, testimonial: NewTestimonial) -> Result<Testimonial> {
        let (sql, params) = SqlBuilder::insert("testimonials")
            .value("name", testimonial.name)
            .value("avatar", testimonial.avatar)
            .value("content", testimonial.content)
            .value("rating", testimonial.rating)
            .value("verified", testimonial.verified)
            .value("featured", testimonial.featured)
            .value("userId", testimonial.user_id)
            .value("projectId", testimonial.project_id)
            .value("investmentAmount", testimonial.investment_amount)
            .value("investmentDuration", testimonial.investment_duration)
            .value("location", testimonial.location)
            .value("createdAt", Utc::now())
            .build();
        let created: Testimonial = self.inserted("testimonials", &sql, &params)?;
        debug!(id = created.id, "created testimonial");
        Ok(created)
    }
}
