//! Single-pass dashboard aggregation.

use crate::models::{DashboardStats, Project, ProjectStatus};

/// Summarize a project snapshot.
///
/// - `total_invested`: sum of `current_amount`, missing amounts count as 0
/// - `active_projects`: projects whose status is exactly `ACTIVE`
/// - `avg_roi`: mean over projects whose ROI parses; 0 when none do
/// - `monthly_returns`: see [`monthly_returns`]
///
/// Empty input yields all-zero stats.
pub fn compute_stats(projects: &[Project]) -> DashboardStats {
    let mut total_invested: i64 = 0;
    let mut active_projects = 0usize;
    let mut roi_sum = 0.0f64;
    let mut roi_count = 0usize;

    for project in projects {
        total_invested = total_invested.saturating_add(project.current_amount.unwrap_or(0));
        if project.status == ProjectStatus::Active {
            active_projects += 1;
        }
        if let Some(roi) = project.roi_value() {
            roi_sum += roi;
            roi_count += 1;
        }
    }

    let avg_roi = if roi_count == 0 {
        0.0
    } else {
        roi_sum / roi_count as f64
    };

    DashboardStats {
        total_invested,
        monthly_returns: monthly_returns(total_invested, avg_roi),
        active_projects,
        total_projects: projects.len(),
        avg_roi,
    }
}

/// `floor(total_invested * (avg_roi / 100) / 12)`, using the unrounded average.
pub fn monthly_returns(total_invested: i64, avg_roi: f64) -> i64 {
    (total_invested as f64 * (avg_roi / 100.0) / 12.0).floor() as i64
}
