use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn triage_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/analyze", post(handlers::analyze_symptoms))
        .route("/history", get(handlers::get_history))
        .with_state(state)
}
