//! Dashboard headline figures.

use crate::analytics::compute_stats;
use crate::error::Result;
use crate::models::DashboardStats;
use crate::storage::Storage;

/// Query interface for the portfolio dashboard.
pub struct DashboardQuery<'a> {
    storage: &'a dyn Storage,
}

impl<'a> DashboardQuery<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// Aggregate statistics over every stored project.
    pub fn stats(&self) -> Result<DashboardStats> {
        let projects = self.storage.all_projects()?;
        Ok(compute_stats(&projects))
    }
}
