//! Project listings: lookup, creation, partial updates and the filtered
//! listings view.

use tracing::{debug, warn};

use crate::analytics::{filter_and_sort, CriteriaParams, ProjectCriteria};
use crate::error::{ReitError, Result};
use crate::models::{NewProject, Project, ProjectUpdate};
use crate::storage::Storage;

// ---------------------------------------------------------------------------
// ProjectQuery
// ---------------------------------------------------------------------------

/// Query interface for investment projects.
pub struct ProjectQuery<'a> {
    storage: &'a dyn Storage,
}

impl<'a> ProjectQuery<'a> {
    /// Create a new `ProjectQuery` bound to the given store.
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    /// All projects in insertion (id) order.
    pub fn list(&self) -> Result<Vec<Project>> {
        self.storage.all_projects()
    }

    pub fn get(&self, id: i64) -> Result<Option<Project>> {
        self.storage.project(id)
    }

    /// Like [`get`](Self::get), but a missing project is an error.
    pub fn require(&self, id: i64) -> Result<Project> {
        self.get(id)?
            .ok_or_else(|| ReitError::NotFound(format!("project {id} not found")))
    }

    /// Featured projects, highest priority first.
    pub fn featured(&self) -> Result<Vec<Project>> {
        let mut featured: Vec<Project> = self.list()?.into_iter().filter(|p| p.featured).collect();
        featured.sort_by(|a, b| b.priority.cmp(&a.priority));
        Ok(featured)
    }

    pub fn count(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }

    /// Validate and store a new project. `current_amount` defaults to 0.
    pub fn create(&self, project: NewProject) -> Result<Project> {
        project.validate()?;
        self.storage.create_project(project)
    }

    /// Apply a partial update.
    ///
    /// An update with no fields set is rejected; an unknown id is
    /// [`ReitError::NotFound`].
    pub fn update(&self, id: i64, update: ProjectUpdate) -> Result<Project> {
        if update.is_empty() {
            return Err(ReitError::InvalidArgument("update contains no fields".into()));
        }
        update.validate()?;
        self.storage
            .update_project(id, update)?
            .ok_or_else(|| ReitError::NotFound(format!("project {id} not found")))
    }

    /// The listings view: every stored project filtered and sorted by
    /// `criteria`.
    pub fn search(&self, criteria: &ProjectCriteria) -> Result<Vec<Project>> {
        let projects = self.list()?;
        let visible = filter_and_sort(&projects, criteria);
        debug!(
            total = projects.len(),
            visible = visible.len(),
            sort = %criteria.sort_by,
            "filtered projects"
        );
        Ok(visible)
    }

    /// Parse raw selections (e.g. from a query string) and search.
    pub fn search_params(&self, params: &CriteriaParams) -> Result<Vec<Project>> {
        let criteria = ProjectCriteria::from_params(params).inspect_err(|e| {
            warn!(error = %e, "rejected listing criteria");
        })?;
        self.search(&criteria)
    }
}
