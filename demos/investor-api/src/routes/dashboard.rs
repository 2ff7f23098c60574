use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use sair_reit_sdk::DashboardStats;

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/dashboard/stats
///
/// Flat statistics object; `avgROI` is a one-decimal string.
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<DashboardStats>, AppError> {
    Ok(Json(state.sdk.stats().await?))
}
