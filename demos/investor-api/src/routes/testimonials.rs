use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use sair_reit_sdk::models::{NewTestimonial, Testimonial};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ListTestimonialsParams {
    #[serde(default)]
    pub featured: bool,
}

/// GET /api/testimonials?featured=true
pub async fn list_testimonials(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListTestimonialsParams>,
) -> Result<Json<Value>, AppError> {
    let testimonials = state
        .sdk
        .run(move |s| {
            if params.featured {
                s.testimonials().featured()
            } else {
                s.testimonials().list()
            }
        })
        .await?;

    let count = testimonials.len();
    Ok(Json(json!({ "data": testimonials, "count": count })))
}

/// POST /api/testimonials
pub async fn create_testimonial(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewTestimonial>,
) -> Result<(StatusCode, Json<Testimonial>), AppError> {
    let testimonial = state
        .sdk
        .run(move |s| s.testimonials().create(payload))
        .await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}
