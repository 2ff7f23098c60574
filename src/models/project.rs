use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analytics::normalize;
use crate::error::{ReitError, Result};

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Lifecycle stage of a project.
///
/// Stored and serialized as the upper-case string (`"ACTIVE"`,
/// `"WAITING_FOR_SALE"`, ...). Parsing is exact: any other string, including
/// a differently-cased canonical value, becomes [`ProjectStatus::Unknown`]
/// and round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProjectStatus {
    #[default]
    Draft,
    Funding,
    Active,
    Complete,
    Sold,
    WaitingForSale,
    Unknown(String),
}

impl ProjectStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ProjectStatus::Draft => "DRAFT",
            ProjectStatus::Funding => "FUNDING",
            ProjectStatus::Active => "ACTIVE",
            ProjectStatus::Complete => "COMPLETE",
            ProjectStatus::Sold => "SOLD",
            ProjectStatus::WaitingForSale => "WAITING_FOR_SALE",
            ProjectStatus::Unknown(raw) => raw,
        }
    }

    /// `false` for [`ProjectStatus::Unknown`]; presentation code uses this to
    /// pick its fallback badge style.
    pub fn is_known(&self) -> bool {
        !matches!(self, ProjectStatus::Unknown(_))
    }
}

impl From<&str> for ProjectStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "DRAFT" => ProjectStatus::Draft,
            "FUNDING" => ProjectStatus::Funding,
            "ACTIVE" => ProjectStatus::Active,
            "COMPLETE" => ProjectStatus::Complete,
            "SOLD" => ProjectStatus::Sold,
            "WAITING_FOR_SALE" => ProjectStatus::WaitingForSale,
            other => ProjectStatus::Unknown(other.to_string()),
        }
    }
}

impl From<String> for ProjectStatus {
    fn from(raw: String) -> Self {
        match ProjectStatus::from(raw.as_str()) {
            ProjectStatus::Unknown(_) => ProjectStatus::Unknown(raw),
            known => known,
        }
    }
}

impl From<ProjectStatus> for String {
    fn from(status: ProjectStatus) -> Self {
        match status {
            ProjectStatus::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub short_description: Option<String>,
    pub location: String,
    pub category: String,
    pub property_type: String,
    /// Percentage kept as text exactly as stored (e.g. `"12.50"`).
    pub roi: String,
    pub min_investment: i64,
    pub target_amount: i64,
    pub current_amount: Option<i64>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub priority: i64,
    pub property_size: Option<i64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub monthly_rent: Option<i64>,
    pub annual_appreciation: Option<String>,
    pub image_url: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub expected_completion_date: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Build a stored project from validated insert data.
    ///
    /// `current_amount` defaults to 0 when the insert leaves it out.
    pub fn from_new(id: i64, new: NewProject, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            short_description: new.short_description,
            location: new.location,
            category: new.category,
            property_type: new.property_type,
            roi: new.roi,
            min_investment: new.min_investment,
            target_amount: new.target_amount,
            current_amount: Some(new.current_amount.unwrap_or(0)),
            status: new.status,
            featured: new.featured,
            priority: new.priority,
            property_size: new.property_size,
            bedrooms: new.bedrooms,
            bathrooms: new.bathrooms,
            monthly_rent: new.monthly_rent,
            annual_appreciation: new.annual_appreciation,
            image_url: new.image_url,
            city: new.city,
            country: new.country,
            expected_completion_date: new.expected_completion_date,
            created_at: now,
            updated_at: now,
        }
    }

    /// The ROI as a number, or `None` when the stored text does not parse.
    pub fn roi_value(&self) -> Option<f64> {
        normalize::parse_roi(&self.roi)
    }

    /// `current / target`; `+inf` when the target is zero.
    pub fn funding_ratio(&self) -> f64 {
        normalize::funding_ratio(self.current_amount, self.target_amount)
    }

    /// Funding progress as a whole percentage, as shown on a listing card.
    pub fn funding_percentage(&self) -> Option<i64> {
        let ratio = self.funding_ratio();
        ratio.is_finite().then(|| (ratio * 100.0).round() as i64)
    }
}

// ---------------------------------------------------------------------------
// NewProject
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub short_description: Option<String>,
    pub location: String,
    pub category: String,
    pub property_type: String,
    pub roi: String,
    pub min_investment: i64,
    pub target_amount: i64,
    #[serde(default)]
    pub current_amount: Option<i64>,
    pub status: ProjectStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub priority: i64,
    #[serde(default)]
    pub property_size: Option<i64>,
    #[serde(default)]
    pub bedrooms: Option<i64>,
    #[serde(default)]
    pub bathrooms: Option<i64>,
    #[serde(default)]
    pub monthly_rent: Option<i64>,
    #[serde(default)]
    pub annual_appreciation: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub expected_completion_date: Option<String>,
}

impl NewProject {
    /// Reject payloads the schema cannot hold.
    ///
    /// The ROI text is not checked; unparseable values are skipped when
    /// statistics are computed.
    pub fn validate(&self) -> Result<()> {
        require_text("title", &self.title)?;
        require_text("description", &self.description)?;
        require_text("location", &self.location)?;
        require_amounts(Some(self.target_amount), self.current_amount, Some(self.min_investment))
    }
}

// ---------------------------------------------------------------------------
// ProjectUpdate
// ---------------------------------------------------------------------------

/// Fields left as `None` keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub short_description: Option<String>,
    pub location: Option<String>,
    pub category: Option<String>,
    pub property_type: Option<String>,
    pub roi: Option<String>,
    pub min_investment: Option<i64>,
    pub target_amount: Option<i64>,
    pub current_amount: Option<i64>,
    pub status: Option<ProjectStatus>,
    pub featured: Option<bool>,
    pub priority: Option<i64>,
    pub property_size: Option<i64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub monthly_rent: Option<i64>,
    pub annual_appreciation: Option<String>,
    pub image_url: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub expected_completion_date: Option<String>,
}

impl ProjectUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(description) = &self.description {
            require_text("description", description)?;
        }
        if let Some(location) = &self.location {
            require_text("location", location)?;
        }
        require_amounts(self.target_amount, self.current_amount, self.min_investment)
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.short_description.is_none()
            && self.location.is_none()
            && self.category.is_none()
            && self.property_type.is_none()
            && self.roi.is_none()
            && self.min_investment.is_none()
            && self.target_amount.is_none()
            && self.current_amount.is_none()
            && self.status.is_none()
            && self.featured.is_none()
            && self.priority.is_none()
            && self.property_size.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.monthly_rent.is_none()
            && self.annual_appreciation.is_none()
            && self.image_url.is_none()
            && self.city.is_none()
            && self.country.is_none()
            && self.expected_completion_date.is_none()
    }

    /// Merge the set fields into `project` and stamp `updated_at`.
    pub fn apply_to(self, project: &mut Project, now: DateTime<Utc>) {
        if let Some(v) = self.title {
            project.title = v;
        }
        if let Some(v) = self.description {
            project.description = v;
        }
        if let Some(v) = self.short_description {
            project.short_description = Some(v);
        }
        if let Some(v) = self.location {
            project.location = v;
        }
        if let Some(v) = self.category {
            project.category = v;
        }
        if let Some(v) = self.property_type {
            project.property_type = v;
        }
        if let Some(v) = self.roi {
            project.roi = v;
        }
        if let Some(v) = self.min_investment {
            project.min_investment = v;
        }
        if let Some(v) = self.target_amount {
            project.target_amount = v;
        }
        if let Some(v) = self.current_amount {
            project.current_amount = Some(v);
        }
        if let Some(v) = self.status {
            project.status = v;
        }
        if let Some(v) = self.featured {
            project.featured = v;
        }
        if let Some(v) = self.priority {
            project.priority = v;
        }
        if let Some(v) = self.property_size {
            project.property_size = Some(v);
        }
        if let Some(v) = self.bedrooms {
            project.bedrooms = Some(v);
        }
        if let Some(v) = self.bathrooms {
            project.bathrooms = Some(v);
        }
        if let Some(v) = self.monthly_rent {
            project.monthly_rent = Some(v);
        }
        if let Some(v) = self.annual_appreciation {
            project.annual_appreciation = Some(v);
        }
        if let Some(v) = self.image_url {
            project.image_url = Some(v);
        }
        if let Some(v) = self.city {
            project.city = Some(v);
        }
        if let Some(v) = self.country {
            project.country = Some(v);
        }
        if let Some(v) = self.expected_completion_date {
            project.expected_completion_date = Some(v);
        }
        project.updated_at = now;
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

pub(crate) fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ReitError::InvalidArgument(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_amounts(target: Option<i64>, current: Option<i64>, minimum: Option<i64>) -> Result<()> {
    if let Some(target) = target {
        if target <= 0 {
            return Err(ReitError::InvalidArgument(format!(
                "targetAmount must be positive, got {target}"
            )));
        }
    }
    if let Some(current) = current {
        if current < 0 {
            return Err(ReitError::InvalidArgument(format!(
                "currentAmount must not be negative, got {current}"
            )));
        }
    }
    if let Some(minimum) = minimum {
        if minimum < 0 {
            return Err(ReitError::InvalidArgument(format!(
                "minInvestment must not be negative, got {minimum}"
            )));
        }
    }
    Ok(())
}
