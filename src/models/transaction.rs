use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::project::require_text;
use crate::error::{ReitError, Result};

// ---------------------------------------------------------------------------
// Transaction
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: i64,
    pub user_id: Option<i64>,
    pub project_id: Option<i64>,
    pub investment_id: Option<i64>,
    pub amount: i64,
    /// `INVESTMENT`, `RETURN`, `DIVIDEND`, `WITHDRAWAL` or `REFUND`.
    #[serde(rename = "type")]
    pub kind: String,
    /// `PENDING`, `COMPLETED`, `FAILED` or `CANCELLED`.
    pub status: String,
    pub payment_method: Option<String>,
    pub reference: Option<String>,
    pub description: Option<String>,
    pub fees: i64,
    pub net_amount: Option<i64>,
    pub processed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn from_new(id: i64, new: NewTransaction, now: DateTime<Utc>) -> Self {
        Self {
            id,
            user_id: new.user_id,
            project_id: new.project_id,
            investment_id: new.investment_id,
            amount: new.amount,
            kind: new.kind,
            status: new.status,
            payment_method: new.payment_method,
            reference: new.reference,
            description: new.description,
            fees: new.fees.unwrap_or(0),
            net_amount: new.net_amount,
            processed_at: new.processed_at,
            created_at: now,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub investment_id: Option<i64>,
    pub amount: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fees: Option<i64>,
    #[serde(default)]
    pub net_amount: Option<i64>,
    #[serde(default)]
    pub processed_at: Option<DateTime<Utc>>,
}

impl NewTransaction {
    pub fn validate(&self) -> Result<()> {
        require_text("type", &self.kind)?;
        require_text("status", &self.status)?;
        if let Some(fees) = self.fees {
            if fees < 0 {
                return Err(ReitError::InvalidArgument(format!(
                    "fees must not be negative, got {fees}"
                )));
            }
        }
        Ok(())
    }
}
