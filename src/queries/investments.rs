//! Investments placed by users into projects.

use crate::error::{ReitError, Result};
use crate::models::{Investment, NewInvestment};
use crate::storage::Storage;

/// Query interface for investments.
pub struct InvestmentQuery<'a> {
    storage: &'a dyn Storage,
}

impl<'a> InvestmentQuery<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    pub fn by_user(&self, user_id: i64) -> Result<Vec<Investment>> {
        self.storage.investments_by_user(user_id)
    }

    pub fn by_project(&self, project_id: i64) -> Result<Vec<Investment>> {
        self.storage.investments_by_project(project_id)
    }

    /// Sum of investment amounts recorded against a project.
    pub fn total_for_project(&self, project_id: i64) -> Result<i64> {
        Ok(self
            .by_project(project_id)?
            .iter()
            .fold(0i64, |acc, i| acc.saturating_add(i.amount)))
    }

    /// Validate and store an investment.
    ///
    /// Referenced users and projects must exist.
    pub fn create(&self, investment: NewInvestment) -> Result<Investment> {
        investment.validate()?;
        if let Some(user_id) = investment.user_id {
            if self.storage.user(user_id)?.is_none() {
                return Err(ReitError::NotFound(format!("user {user_id} not found")));
            }
        }
        if let Some(project_id) = investment.project_id {
            if self.storage.project(project_id)?.is_none() {
                return Err(ReitError::NotFound(format!("project {project_id} not found")));
            }
        }
        self.storage.create_investment(investment)
    }
}
