//! Investor tools. Pure calculations, so handlers skip the SDK entirely.

use axum::extract::Query;
use axum::response::Json;
use sair_reit_sdk::tools::{
    self, InvestmentAnalysis, MarketSnapshot, OptionComparison, PropertySuggestion,
    RiskAssessment,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;

const DEFAULT_YEARS: u32 = 5;

#[derive(Deserialize)]
pub struct AmountParams {
    pub amount: Option<f64>,
    pub years: Option<u32>,
}

#[derive(Deserialize)]
pub struct BudgetParams {
    pub budget: Option<f64>,
}

fn required(value: Option<f64>, name: &str) -> Result<f64, AppError> {
    value.ok_or_else(|| AppError::bad_request(format!("Missing required query parameter: {name}")))
}

/// GET /api/tools/analysis?amount=1000000
pub async fn analysis(
    Query(params): Query<AmountParams>,
) -> Result<Json<InvestmentAnalysis>, AppError> {
    Ok(Json(tools::analyze_investment(required(params.amount, "amount")?)?))
}

/// GET /api/tools/risk?amount=25000000
pub async fn risk(Query(params): Query<AmountParams>) -> Result<Json<RiskAssessment>, AppError> {
    Ok(Json(tools::risk_assessment(required(params.amount, "amount")?)?))
}

/// GET /api/tools/suggestions?budget=5000000
pub async fn suggestions(
    Query(params): Query<BudgetParams>,
) -> Result<Json<PropertySuggestion>, AppError> {
    Ok(Json(tools::property_suggestion(required(params.budget, "budget")?)?))
}

/// GET /api/tools/projections?amount=1000000&years=10
pub async fn projections(Query(params): Query<AmountParams>) -> Result<Json<Value>, AppError> {
    let years = params.years.unwrap_or(DEFAULT_YEARS);
    let rows = tools::projected_returns(required(params.amount, "amount")?, years)?;
    Ok(Json(json!({ "data": rows, "count": rows.len() })))
}

/// GET /api/tools/comparison?amount=1000000&years=5
pub async fn comparison(
    Query(params): Query<AmountParams>,
) -> Result<Json<Vec<OptionComparison>>, AppError> {
    let years = params.years.unwrap_or(DEFAULT_YEARS);
    Ok(Json(tools::compare_options(required(params.amount, "amount")?, years)?))
}

/// GET /api/tools/market
pub async fn market() -> Json<MarketSnapshot> {
    Json(tools::market_snapshot())
}
