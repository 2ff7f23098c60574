use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::project::require_text;
use crate::error::{ReitError, Result};

// ---------------------------------------------------------------------------
// Testimonial
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub id: i64,
    pub name: String,
    pub avatar: Option<String>,
    pub content: String,
    pub rating: i64,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub featured: bool,
    pub user_id: Option<i64>,
    pub project_id: Option<i64>,
    pub investment_amount: Option<i64>,
    /// Free text such as `"6 months"`.
    pub investment_duration: Option<String>,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Testimonial {
    pub fn from_new(id: i64, new: NewTestimonial, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: new.name,
            avatar: new.avatar,
            content: new.content,
            rating: new.rating,
            verified: new.verified,
            featured: new.featured,
            user_id: new.user_id,
            project_id: new.project_id,
            investment_amount: new.investment_amount,
            investment_duration: new.investment_duration,
            location: new.location,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub content: String,
    pub rating: i64,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub investment_amount: Option<i64>,
    #[serde(default)]
    pub investment_duration: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}

impl NewTestimonial {
    pub fn validate(&self) -> Result<()> {
        require_text("name", &self.name)?;
        require_text("content", &self.content)?;
        if !(1..=5).contains(&self.rating) {
            return Err(ReitError::InvalidArgument(format!(
                "rating must be between 1 and 5, got {}",
                self.rating
            )));
        }
        Ok(())
    }
}
