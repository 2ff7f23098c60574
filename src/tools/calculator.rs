//! Return calculators at a flat annual rate.
//!
//! Returns are simple interest on the principal: no compounding.

use serde::Serialize;

use super::advisor::RiskLevel;
use super::require_amount;
use crate::config::{ANALYSIS_YEARS, ANNUAL_RETURN_RATE, MAX_PROJECTION_YEARS};
use crate::error::{ReitError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentAnalysis {
    pub amount: f64,
    pub annual_return: f64,
    pub monthly_return: f64,
    pub five_year_return: f64,
    pub total_value: f64,
}

/// Expected returns on `amount` at [`ANNUAL_RETURN_RATE`].
pub fn analyze_investment(amount: f64) -> Result<InvestmentAnalysis> {
    require_amount(amount)?;
    let annual_return = amount * ANNUAL_RETURN_RATE;
    let five_year_return = annual_return * ANALYSIS_YEARS as f64;
    Ok(InvestmentAnalysis {
        amount,
        annual_return,
        monthly_return: annual_return / 12.0,
        five_year_return,
        total_value: amount + five_year_return,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct YearProjection {
    pub year: u32,
    /// Cumulative return up to and including this year.
    #[serde(rename = "return")]
    pub cumulative_return: f64,
    pub total_value: f64,
}

fn require_years(years: u32) -> Result<()> {
    if (1..=MAX_PROJECTION_YEARS).contains(&years) {
        Ok(())
    } else {
        Err(ReitError::InvalidArgument(format!(
            "years must be between 1 and {MAX_PROJECTION_YEARS}, got {years}"
        )))
    }
}

/// One entry per year from 1 to `years`.
pub fn projected_returns(amount: f64, years: u32) -> Result<Vec<YearProjection>> {
    require_amount(amount)?;
    require_years(years)?;
    let annual = amount * ANNUAL_RETURN_RATE;
    Ok((1..=years)
        .map(|year| {
            let cumulative_return = annual * f64::from(year);
            YearProjection {
                year,
                cumulative_return,
                total_value: amount + cumulative_return,
            }
        })
        .collect())
}

// ---------------------------------------------------------------------------
// Comparison across asset classes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentOption {
    pub name: &'static str,
    /// Annual return, in percent.
    pub roi: f64,
    pub risk: RiskLevel,
    pub liquidity: &'static str,
    pub min_investment: i64,
}

pub const INVESTMENT_OPTIONS: [InvestmentOption; 4] = [
    InvestmentOption {
        name: "Real Estate",
        roi: 18.0,
        risk: RiskLevel::Medium,
        liquidity: "Low",
        min_investment: 2_000_000,
    },
    InvestmentOption {
        name: "Stock Market",
        roi: 12.0,
        risk: RiskLevel::High,
        liquidity: "High",
        min_investment: 50_000,
    },
    InvestmentOption {
        name: "Gold",
        roi: 8.0,
        risk: RiskLevel::Low,
        liquidity: "Medium",
        min_investment: 100_000,
    },
    InvestmentOption {
        name: "Savings Account",
        roi: 3.0,
        risk: RiskLevel::VeryLow,
        liquidity: "Very High",
        min_investment: 1_000,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionComparison {
    #[serde(flatten)]
    pub option: InvestmentOption,
    pub total_return: f64,
    pub final_value: f64,
    /// Whether `amount` reaches the option's minimum investment.
    pub eligible: bool,
}

/// Compare `amount` held for `years` across [`INVESTMENT_OPTIONS`], in
/// table order.
pub fn compare_options(amount: f64, years: u32) -> Result<Vec<OptionComparison>> {
    require_amount(amount)?;
    require_years(years)?;
    Ok(INVESTMENT_OPTIONS
        .iter()
        .map(|option| {
            let total_return = amount * option.roi / 100.0 * f64::from(years);
            OptionComparison {
                option: *option,
                total_return,
                final_value: amount + total_return,
                eligible: amount >= option.min_investment as f64,
            }
        })
        .collect())
}
