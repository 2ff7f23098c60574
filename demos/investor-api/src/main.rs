mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use state::AppState;

const DEFAULT_PORT: u16 = 5000;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,sair_reit_sdk=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // DATABASE_URL selects DuckDB; otherwise the seeded in-memory store
    let sdk = sair_reit_sdk::AsyncReitSdk::builder().from_env().build().await?;
    let backend = sdk.backend().await?;
    info!(backend, "SDK ready");

    let state = Arc::new(AppState { sdk });

    let app = Router::new()
        .route(
            "/api/projects",
            get(routes::projects::list_projects).post(routes::projects::create_project),
        )
        .route(
            "/api/projects/{id}",
            get(routes::projects::get_project).patch(routes::projects::update_project),
        )
        .route(
            "/api/testimonials",
            get(routes::testimonials::list_testimonials)
                .post(routes::testimonials::create_testimonial),
        )
        .route("/api/dashboard/stats", get(routes::dashboard::get_stats))
        .route("/api/tools/analysis", get(routes::tools::analysis))
        .route("/api/tools/risk", get(routes::tools::risk))
        .route("/api/tools/suggestions", get(routes::tools::suggestions))
        .route("/api/tools/projections", get(routes::tools::projections))
        .route("/api/tools/comparison", get(routes::tools::comparison))
        .route("/api/tools/market", get(routes::tools::market))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let addr = format!("0.0.0.0:{port}");
    info!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
