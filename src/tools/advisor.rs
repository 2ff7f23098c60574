//! Budget tiers, risk bands and the market snapshot.

use std::fmt;

use serde::Serialize;

use super::require_amount;
use crate::error::Result;

// ---------------------------------------------------------------------------
// Property suggestions
// ---------------------------------------------------------------------------

/// A sample listing shown for a budget tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SampleProperty {
    pub name: &'static str,
    pub price: &'static str,
    pub location: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub roi: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropertySuggestion {
    pub suggestion: &'static str,
    pub properties: [SampleProperty; 3],
}

const fn sample(
    name: &'static str,
    price: &'static str,
    location: &'static str,
    kind: &'static str,
    roi: &'static str,
) -> SampleProperty {
    SampleProperty { name, price, location, kind, roi }
}

/// Tiers ordered by exclusive upper budget bound; the last tier is open.
const TIERS: [(f64, PropertySuggestion); 4] = [
    (
        2_000_000.0,
        PropertySuggestion {
            suggestion: "Consider 1-bed apartments or small commercial shops in emerging areas.",
            properties: [
                sample(
                    "Emerald Heights 1BR",
                    "1.8M PKR",
                    "Bahria Town Phase 8",
                    "Apartment",
                    "12-15%",
                ),
                sample("City Center Shop", "1.5M PKR", "Gulberg III", "Commercial", "18-22%"),
                sample("Green Valley Plot", "1.2M PKR", "DHA Phase 6", "Plot", "25-30%"),
            ],
        },
    ),
    (
        10_000_000.0,
        PropertySuggestion {
            suggestion: "Look for 2-3 bed apartments, small houses, or plots in developing societies.",
            properties: [
                sample("Luxury 2BR Apartment", "8.5M PKR", "DHA Phase 5", "Apartment", "15-18%"),
                sample("Modern Townhouse", "7.2M PKR", "Bahria Town Phase 7", "House", "20-25%"),
                sample("Commercial Office", "9.8M PKR", "Gulberg II", "Commercial", "22-28%"),
            ],
        },
    ),
    (
        50_000_000.0,
        PropertySuggestion {
            suggestion: "Explore luxury apartments, 1-kanal houses, or commercial properties in prime locations.",
            properties: [
                sample("Premium 3BR Villa", "35M PKR", "DHA Phase 8", "Villa", "18-22%"),
                sample("Luxury Penthouse", "42M PKR", "Gulberg I", "Penthouse", "25-30%"),
                sample(
                    "Commercial Plaza",
                    "28M PKR",
                    "Bahria Town Phase 6",
                    "Commercial",
                    "30-35%",
                ),
            ],
        },
    ),
    (
        f64::INFINITY,
        PropertySuggestion {
            suggestion: "You can invest in high-end villas, multi-kanal plots, or premium commercial plazas.",
            properties: [
                sample("Executive Villa", "85M PKR", "DHA Phase 9", "Villa", "20-25%"),
                sample("Luxury Farmhouse", "120M PKR", "Bahria Orchard", "Farmhouse", "30-40%"),
                sample("Premium Mall Space", "95M PKR", "Gulberg I", "Commercial", "35-45%"),
            ],
        },
    ),
];

/// Suggest property types and sample listings for a budget.
pub fn property_suggestion(budget: f64) -> Result<PropertySuggestion> {
    require_amount(budget)?;
    let tier = TIERS
        .iter()
        .find(|(bound, _)| budget < *bound)
        .map(|(_, tier)| *tier)
        .unwrap_or(TIERS[TIERS.len() - 1].1);
    Ok(tier)
}

// ---------------------------------------------------------------------------
// Risk assessment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum RiskLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "Very Low",
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
            RiskLevel::VeryHigh => "Very High",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            RiskLevel::VeryHigh => "High-value investments require careful planning",
            RiskLevel::High => "Consider diversification strategies",
            RiskLevel::Medium => "Moderate risk with good potential returns",
            RiskLevel::Low => "Conservative investment with steady returns",
            RiskLevel::VeryLow => "Safe investment for beginners",
        }
    }

    /// Band for an amount. Thresholds are exclusive lower bounds.
    pub fn for_amount(amount: f64) -> Self {
        if amount > 50_000_000.0 {
            RiskLevel::VeryHigh
        } else if amount > 20_000_000.0 {
            RiskLevel::High
        } else if amount > 5_000_000.0 {
            RiskLevel::Medium
        } else if amount > 1_000_000.0 {
            RiskLevel::Low
        } else {
            RiskLevel::VeryLow
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub description: &'static str,
}

pub fn risk_assessment(amount: f64) -> Result<RiskAssessment> {
    require_amount(amount)?;
    let level = RiskLevel::for_amount(amount);
    Ok(RiskAssessment {
        level,
        description: level.description(),
    })
}

// ---------------------------------------------------------------------------
// Market snapshot
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketSnapshot {
    pub trend: &'static str,
    #[serde(rename = "avgROI")]
    pub avg_roi: f64,
    pub market_growth: f64,
    pub hot_areas: &'static [&'static str],
    pub risk_factors: &'static [&'static str],
}

pub fn market_snapshot() -> MarketSnapshot {
    MarketSnapshot {
        trend: "Bullish",
        avg_roi: 18.5,
        market_growth: 12.3,
        hot_areas: &["DHA Phase 8", "Bahria Town Phase 7", "Gulberg III"],
        risk_factors: &["Interest Rate Changes", "Economic Policy", "Market Volatility"],
    }
}
