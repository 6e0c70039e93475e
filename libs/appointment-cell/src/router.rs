use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use shared_config::AppConfig;

use crate::handlers;

pub fn appointment_routes(state: Arc<AppConfig>) -> Router {
    Router::new()
        .route("/", post(handlers::book_appointment))
        .route("/", get(handlers::list_appointments))
        .route("/{booking_id}", delete(handlers::cancel_appointment))
        .route(
            "/doctor/{doctor_id}/booked-slots",
            get(handlers::get_booked_slots),
        )
        .with_state(state)
}
