use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ReitError, Result};

pub const DEFAULT_INVESTMENT_STATUS: &str = "ACTIVE";

// ---------------------------------------------------------------------------
// Investment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    pub id: i64,
    pub user_id: Option<i64>,
    pub project_id: Option<i64>,
    pub amount: i64,
    pub units: Option<i64>,
    /// Decimal text, `"0"` until returns are booked.
    pub returns: Option<String>,
    /// `ACTIVE`, `SOLD` or `CANCELLED`.
    pub status: String,
    pub investment_date: DateTime<Utc>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Investment {
    pub fn from_new(id: i64, new: NewInvestment, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: new.user_id,
            project_id: new.project_id,
            amount: new.amount,
            units: Some(new.units.unwrap_or(1)),
            returns: Some(new.returns.unwrap_or_else(|| "0".to_string())),
            status: DEFAULT_INVESTMENT_STATUS.to_string(),
            investment_date: now,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvestment {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub project_id: Option<i64>,
    pub amount: i64,
    #[serde(default)]
    pub units: Option<i64>,
    #[serde(default)]
    pub returns: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl NewInvestment {
    pub fn validate(&self) -> Result<()> {
        if self.amount <= 0 {
            return Err(ReitError::InvalidArgument(format!(
                "investment amount must be positive, got {}",
                self.amount
            )));
        }
        if let Some(units) = self.units {
            if units <= 0 {
                return Err(ReitError::InvalidArgument(format!(
                    "units must be positive, got {units}"
                )));
            }
        }
        Ok(())
    }
}
