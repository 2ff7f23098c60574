use std::collections::HashMap;
use std::path::PathBuf;

/// Environment variable naming the DuckDB database file used by
/// [`ReitSdkBuilder::from_env`](crate::ReitSdkBuilder::from_env).
pub const DATABASE_ENV: &str = "DATABASE_URL";

pub const DEFAULT_DATABASE_FILE: &str = "sair-reit.duckdb";

/// Creation order matters only for readability; tables reference each other
/// by plain id columns without foreign key constraints.
pub const TABLES: [&str; 5] = ["users", "projects", "investments", "transactions", "testimonials"];

/// Annual return rate assumed by the investment calculators.
pub const ANNUAL_RETURN_RATE: f64 = 0.18;

/// Horizon, in years, of the single-amount investment analysis.
pub const ANALYSIS_YEARS: i64 = 5;

/// Upper bound on projection and comparison horizons.
pub const MAX_PROJECTION_YEARS: u32 = 50;

pub fn table_schemas() -> HashMap<&'static str, &'static str> {
    HashMap::from([
        (
            "users",
            r#"CREATE SEQUENCE IF NOT EXISTS users_id_seq START 1;
CREATE TABLE IF NOT EXISTS users (
    "id" BIGINT PRIMARY KEY DEFAULT nextval('users_id_seq'),
    "username" VARCHAR NOT NULL UNIQUE,
    "email" VARCHAR NOT NULL UNIQUE,
    "password" VARCHAR NOT NULL,
    "firstName" VARCHAR,
    "lastName" VARCHAR,
    "phone" VARCHAR,
    "nationality" VARCHAR,
    "kycVerified" BOOLEAN NOT NULL DEFAULT false,
    "isActive" BOOLEAN NOT NULL DEFAULT true,
    "createdAt" VARCHAR NOT NULL,
    "updatedAt" VARCHAR NOT NULL
);"#,
        ),
        (
            "projects",
            r#"CREATE SEQUENCE IF NOT EXISTS projects_id_seq START 1;
CREATE TABLE IF NOT EXISTS projects (
    "id" BIGINT PRIMARY KEY DEFAULT nextval('projects_id_seq'),
    "title" VARCHAR NOT NULL,
    "description" VARCHAR NOT NULL,
    "shortDescription" VARCHAR,
    "location" VARCHAR NOT NULL,
    "category" VARCHAR NOT NULL,
    "propertyType" VARCHAR NOT NULL,
    "roi" VARCHAR NOT NULL,
    "minInvestment" BIGINT NOT NULL,
    "targetAmount" BIGINT NOT NULL,
    "currentAmount" BIGINT DEFAULT 0,
    "status" VARCHAR NOT NULL,
    "featured" BOOLEAN NOT NULL DEFAULT false,
    "priority" BIGINT NOT NULL DEFAULT 0,
    "propertySize" BIGINT,
    "bedrooms" BIGINT,
    "bathrooms" BIGINT,
    "monthlyRent" BIGINT,
    "annualAppreciation" VARCHAR,
    "imageUrl" VARCHAR,
    "city" VARCHAR,
    "country" VARCHAR,
    "expectedCompletionDate" VARCHAR,
    "createdAt" VARCHAR NOT NULL,
    "updatedAt" VARCHAR NOT NULL
);"#,
        ),
        (
            "investments",
            r#"CREATE SEQUENCE IF NOT EXISTS investments_id_seq START 1;
CREATE TABLE IF NOT EXISTS investments (
    "id" BIGINT PRIMARY KEY DEFAULT nextval('investments_id_seq'),
    "userId" BIGINT,
    "projectId" BIGINT,
    "amount" BIGINT NOT NULL,
    "units" BIGINT,
    "returns" VARCHAR,
    "status" VARCHAR NOT NULL DEFAULT 'ACTIVE',
    "investmentDate" VARCHAR NOT NULL,
    "notes" VARCHAR,
    "createdAt" VARCHAR NOT NULL,
    "updatedAt" VARCHAR NOT NULL
);"#,
        ),
        (
            "transactions",
            r#"CREATE SEQUENCE IF NOT EXISTS transactions_id_seq START 1;
CREATE TABLE IF NOT EXISTS transactions (
    "id" BIGINT PRIMARY KEY DEFAULT nextval('transactions_id_seq'),
    "userId" BIGINT,
    "projectId" BIGINT,
    "investmentId" BIGINT,
    "amount" BIGINT NOT NULL,
    "type" VARCHAR NOT NULL,
    "status" VARCHAR NOT NULL,
    "paymentMethod" VARCHAR,
    "reference" VARCHAR,
    "description" VARCHAR,
    "fees" BIGINT NOT NULL DEFAULT 0,
    "netAmount" BIGINT,
    "processedAt" VARCHAR,
    "createdAt" VARCHAR NOT NULL
);"#,
        ),
        (
            "testimonials",
            r#"CREATE SEQUENCE IF NOT EXISTS testimonials_id_seq START 1;
CREATE TABLE IF NOT EXISTS testimonials (
    "id" BIGINT PRIMARY KEY DEFAULT nextval('testimonials_id_seq'),
    "name" VARCHAR NOT NULL,
    "avatar" VARCHAR,
    "content" VARCHAR NOT NULL,
    "rating" BIGINT NOT NULL,
    "verified" BOOLEAN NOT NULL DEFAULT false,
    "featured" BOOLEAN NOT NULL DEFAULT false,
    "userId" BIGINT,
    "projectId" BIGINT,
    "investmentAmount" BIGINT,
    "investmentDuration" VARCHAR,
    "location" VARCHAR,
    "createdAt" VARCHAR NOT NULL
);"#,
        ),
    ])
}

/// Per-user data directory, or `.sair-reit-data` when the platform has none.
pub fn default_data_dir() -> PathBuf {
    if let Some(data) = dirs::data_dir() {
        data.join("sair-reit")
    } else {
        PathBuf::from(".sair-reit-data")
    }
}

/// DuckDB file selected by `ReitSdkBuilder::default_database`.
pub fn default_database_path() -> PathBuf {
    default_data_dir().join(DEFAULT_DATABASE_FILE)
}
