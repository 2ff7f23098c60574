//! Async wrapper around [`ReitSdk`] for use in async runtimes (Tokio, etc.).
//!
//! Runs all SDK operations on a blocking thread pool via
//! [`tokio::task::spawn_blocking`], keeping the async event loop free.
//! Storage calls are short, so one locked SDK shared by all tasks is enough.
//!
//! # Example
//!
//! ```no_run
//! use sair_reit_sdk::AsyncReitSdk;
//!
//! #[tokio::main]
//! async fn main() {
//!     let sdk = AsyncReitSdk::builder().build().await.unwrap();
//!
//!     // Run any sync SDK method via closure
//!     let featured = sdk.run(|s| s.projects().featured()).await.unwrap();
//!
//!     // Convenience method for the dashboard
//!     let stats = sdk.stats().await.unwrap();
//! }
//! ```

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::analytics::ProjectCriteria;
use crate::error::{ReitError, Result};
use crate::models::{DashboardStats, Project};
use crate::ReitSdk;

// ---------------------------------------------------------------------------
// AsyncReitSdkBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing an [`AsyncReitSdk`] instance.
///
/// Mirrors the file and memory options of
/// [`ReitSdkBuilder`](crate::ReitSdkBuilder).
pub struct AsyncReitSdkBuilder {
    database: Option<PathBuf>,
    in_memory_database: bool,
    from_env: bool,
    seed: bool,
}

impl Default for AsyncReitSdkBuilder {
    fn default() -> Self {
        Self {
            database: None,
            in_memory_database: false,
            from_env: false,
            seed: true,
        }
    }
}

impl AsyncReitSdkBuilder {
    /// Persist to a DuckDB file.
    pub fn database<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database = Some(path.as_ref().to_path_buf());
        self
    }

    /// Persist to the DuckDB file under the user's data directory.
    pub fn default_database(self) -> Self {
        self.database(crate::config::default_database_path())
    }

    /// Use a private in-memory DuckDB database.
    pub fn in_memory_database(mut self) -> Self {
        self.in_memory_database = true;
        self
    }

    /// Pick the backend from `DATABASE_URL` at build time.
    pub fn from_env(mut self) -> Self {
        self.from_env = true;
        self
    }

    pub fn seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    /// Build the async SDK.
    ///
    /// Opening and seeding the store runs on the blocking thread pool so it
    /// won't block the async event loop.
    pub async fn build(self) -> Result<AsyncReitSdk> {
        tokio::task::spawn_blocking(move || {
            let mut builder = ReitSdk::builder().seed(self.seed);
            if self.from_env {
                builder = builder.from_env();
            }
            if let Some(path) = self.database {
                builder = builder.database(path);
            } else if self.in_memory_database {
                builder = builder.in_memory_database();
            }
            let sdk = builder.build()?;
            Ok(AsyncReitSdk::from_sdk(sdk))
        })
        .await
        .map_err(|e| ReitError::InvalidArgument(format!("Task join error: {e}")))?
    }
}

// ---------------------------------------------------------------------------
// AsyncReitSdk
// ---------------------------------------------------------------------------

/// Async wrapper around [`ReitSdk`].
///
/// All operations are dispatched to a blocking thread pool via
/// [`tokio::task::spawn_blocking`]. The underlying [`ReitSdk`] is
/// protected by a [`Mutex`] since its stores use `RefCell` internally.
/// Cloning is cheap and shares the same SDK.
#[derive(Clone)]
pub struct AsyncReitSdk {
    inner: Arc<Mutex<ReitSdk>>,
}

impl AsyncReitSdk {
    /// Create a new builder for configuring the async SDK.
    pub fn builder() -> AsyncReitSdkBuilder {
        AsyncReitSdkBuilder::default()
    }

    /// Wrap an already built SDK.
    pub fn from_sdk(sdk: ReitSdk) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sdk)),
        }
    }

    /// Run a sync SDK operation on the blocking thread pool.
    ///
    /// The closure receives an `&ReitSdk` reference and should return
    /// a `Result<T>`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use sair_reit_sdk::AsyncReitSdk;
    /// # async fn example() -> sair_reit_sdk::Result<()> {
    /// # let sdk = AsyncReitSdk::builder().build().await?;
    /// let project = sdk.run(|s| s.projects().get(1)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&ReitSdk) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let sdk = self.inner.clone();
        tokio::task::spawn_blocking(move || {
            let guard = sdk
                .lock()
                .map_err(|_| ReitError::InvalidArgument("SDK lock poisoned".into()))?;
            f(&guard)
        })
        .await
        .map_err(|e| ReitError::InvalidArgument(format!("Task join error: {e}")))?
    }

    /// Dashboard statistics over every stored project.
    pub async fn stats(&self) -> Result<DashboardStats> {
        self.run(|s| s.dashboard().stats()).await
    }

    /// The filtered and sorted listings view.
    pub async fn search_projects(&self, criteria: ProjectCriteria) -> Result<Vec<Project>> {
        self.run(move |s| s.projects().search(&criteria)).await
    }

    /// Name of the active storage backend.
    pub async fn backend(&self) -> Result<&'static str> {
        self.run(|s| Ok(s.storage().backend())).await
    }
}
