use std::sync::Arc;

use axum::{routing::get, Router};

use shared_config::AppConfig;

use crate::handlers;

pub fn doctor_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/search", get(handlers::search_doctors))
        .route("/specializations", get(handlers::list_specializations))
        .route("/{doctor_id}", get(handlers::get_doctor))
        .route("/{doctor_id}/available-slots", get(handlers::get_available_slots))
        .with_state(state)
}
