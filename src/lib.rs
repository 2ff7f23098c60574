//! SAIR REIT SDK for Rust.
//!
//! The core of a real-estate investment platform: project listings,
//! investors, investments, transactions and testimonials behind a pluggable
//! [`Storage`], plus the dashboard aggregator and the listings filter.
//! Records live either in process memory or in a DuckDB database.
//!
//! # Quick start
//!
//! ```no_run
//! use sair_reit_sdk::{ProjectCriteria, ReitSdk, RoiBand, SortKey};
//!
//! let sdk = ReitSdk::builder().build().unwrap();
//!
//! // Headline figures for the dashboard
//! let stats = sdk.dashboard().stats().unwrap();
//! println!("{} active of {}", stats.active_projects, stats.total_projects);
//!
//! // Funding projects with ROI of at least 15%, best first
//! let criteria = ProjectCriteria::new()
//!     .status("funding")
//!     .roi(RoiBand::FifteenPlus)
//!     .sort_by(SortKey::RoiHigh);
//! let projects = sdk.projects().search(&criteria).unwrap();
//! ```

pub mod analytics;
#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod queries;
pub mod sql_builder;
pub mod storage;
pub mod tools;

pub use analytics::{
    compute_stats, filter_and_sort, CriteriaParams, ProjectCriteria, RoiBand, SortKey,
};
#[cfg(feature = "async")]
pub use async_client::AsyncReitSdk;
pub use connection::Connection;
pub use error::{ReitError, Result};
pub use models::{DashboardStats, Project, ProjectStatus};
pub use sql_builder::SqlBuilder;
pub use storage::{DuckDbStorage, MemStorage, Storage};

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

// ---------------------------------------------------------------------------
// ReitSdkBuilder
// ---------------------------------------------------------------------------

enum Backend {
    Memory,
    DuckDbFile(PathBuf),
    DuckDbMemory,
    Custom(Box<dyn Storage>),
}

/// Builder for configuring and constructing a [`ReitSdk`] instance.
///
/// Use [`ReitSdk::builder()`] to obtain a builder, chain configuration
/// methods, and call [`build()`](ReitSdkBuilder::build) to create the SDK.
/// Without configuration the SDK runs on a seeded [`MemStorage`].
pub struct ReitSdkBuilder {
    backend: Backend,
    seed: bool,
}

impl Default for ReitSdkBuilder {
    fn default() -> Self {
        Self {
            backend: Backend::Memory,
            seed: true,
        }
    }
}

impl ReitSdkBuilder {
    /// Persist to a DuckDB file, creating it and its parent directories if
    /// needed.
    pub fn database<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.backend = Backend::DuckDbFile(path.as_ref().to_path_buf());
        self
    }

    /// Persist to [`config::default_database_path()`] under the user's data
    /// directory.
    pub fn default_database(self) -> Self {
        self.database(config::default_database_path())
    }

    /// Use a private in-memory DuckDB database.
    pub fn in_memory_database(mut self) -> Self {
        self.backend = Backend::DuckDbMemory;
        self
    }

    /// Keep records in process memory (the default).
    pub fn memory_storage(mut self) -> Self {
        self.backend = Backend::Memory;
        self
    }

    /// Use a caller-provided store.
    pub fn storage(mut self, storage: Box<dyn Storage>) -> Self {
        self.backend = Backend::Custom(storage);
        self
    }

    /// Load the sample projects and testimonials into empty tables on
    /// build. Defaults to `true`.
    pub fn seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Pick the backend from the environment.
    ///
    /// A non-empty [`DATABASE_URL`](config::DATABASE_ENV) selects a DuckDB
    /// file at that path; otherwise records stay in memory.
    pub fn from_env(self) -> Self {
        match env::var(config::DATABASE_ENV) {
            Ok(path) if !path.trim().is_empty() => self.database(path.trim()),
            _ => self.memory_storage(),
        }
    }

    /// Build the SDK, opening the store and seeding it if enabled.
    pub fn build(self) -> Result<ReitSdk> {
        let storage: Box<dyn Storage> = match self.backend {
            Backend::Memory => Box::new(MemStorage::new()),
            Backend::DuckDbFile(path) => Box::new(DuckDbStorage::open(path)?),
            Backend::DuckDbMemory => Box::new(DuckDbStorage::open_in_memory()?),
            Backend::Custom(storage) => storage,
        };

        if self.seed {
            storage::seed::seed_if_empty(storage.as_ref())?;
        }

        info!(backend = storage.backend(), "SDK ready");
        Ok(ReitSdk { storage })
    }
}

// ---------------------------------------------------------------------------
// ReitSdk
// ---------------------------------------------------------------------------

/// The main entry point for the SAIR REIT SDK.
///
/// Owns a boxed [`Storage`] and exposes domain-specific query interfaces as
/// lightweight borrowing wrappers.
///
/// Created via [`ReitSdk::builder()`].
pub struct ReitSdk {
    storage: Box<dyn Storage>,
}

impl ReitSdk {
    /// Create a new builder for configuring the SDK.
    pub fn builder() -> ReitSdkBuilder {
        ReitSdkBuilder::default()
    }

    // -- Query accessors ---------------------------------------------------

    /// Access the project query interface.
    ///
    /// Returns a lightweight wrapper that borrows the underlying store and
    /// provides lookup, creation, updates and the filtered listings view.
    pub fn projects(&self) -> queries::ProjectQuery<'_> {
        queries::ProjectQuery::new(self.storage.as_ref())
    }

    /// Access the dashboard statistics.
    pub fn dashboard(&self) -> queries::DashboardQuery<'_> {
        queries::DashboardQuery::new(self.storage.as_ref())
    }

    pub fn testimonials(&self) -> queries::TestimonialQuery<'_> {
        queries::TestimonialQuery::new(self.storage.as_ref())
    }

    pub fn investments(&self) -> queries::InvestmentQuery<'_> {
        queries::InvestmentQuery::new(self.storage.as_ref())
    }

    pub fn transactions(&self) -> queries::TransactionQuery<'_> {
        queries::TransactionQuery::new(self.storage.as_ref())
    }

    pub fn users(&self) -> queries::UserQuery<'_> {
        queries::UserQuery::new(self.storage.as_ref())
    }

    /// Return a reference to the underlying store for advanced usage.
    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

impl fmt::Display for ReitSdk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReitSdk(backend={})", self.storage.backend())
    }
}
