//! Investor tools: budget-based property suggestions, risk assessment,
//! return calculators and a static market snapshot.
//!
//! Everything here is a pure function over static tables. Amounts are in
//! PKR and must be positive and finite.

pub mod advisor;
pub mod calculator;

pub use advisor::{
    market_snapshot, property_suggestion, risk_assessment, MarketSnapshot, PropertySuggestion,
    RiskAssessment, RiskLevel, SampleProperty,
};
pub use calculator::{
    analyze_investment, compare_options, projected_returns, InvestmentAnalysis, InvestmentOption,
    OptionComparison, YearProjection, INVESTMENT_OPTIONS,
};

use crate::error::{ReitError, Result};

pub(crate) fn require_amount(amount: f64) -> Result<()> {
    if amount.is_finite() && amount > 0.0 {
        Ok(())
    } else {
        Err(ReitError::InvalidArgument(format!(
            "amount must be a positive number, got {amount}"
        )))
    }
}
