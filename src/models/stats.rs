use serde::{Serialize, Serializer};

// ---------------------------------------------------------------------------
// DashboardStats
// ---------------------------------------------------------------------------

/// Portfolio-level summary computed by
/// [`compute_stats`](crate::analytics::compute_stats).
///
/// Never persisted. `avg_roi` keeps the unrounded mean; the JSON form carries
/// it as a one-decimal string under `avgROI`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_invested: i64,
    pub monthly_returns: i64,
    pub active_projects: usize,
    pub total_projects: usize,
    #[serde(rename = "avgROI", serialize_with = "serialize_one_decimal")]
    pub avg_roi: f64,
}

impl DashboardStats {
    /// Average ROI rounded to one decimal place, e.g. `"12.5"`.
    pub fn avg_roi_display(&self) -> String {
        format!("{:.1}", self.avg_roi)
    }
}

fn serialize_one_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.1}", value))
}
