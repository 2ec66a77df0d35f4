pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod rate_limit;
pub mod relay;
pub mod state;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};

use state::AppState;

// Build the router: API routes sit behind the rate-limit gate, the
// operational endpoints do not
pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .route("/api/generate-faq", post(handlers::generate_faq_handler))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::rate_limit,
        ));

    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .merge(api)
        .with_state(state)
}
