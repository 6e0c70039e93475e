use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{AppointmentError, BookAppointmentRequest};
use crate::services::booking::BookingService;

fn to_app_error(e: AppointmentError) -> AppError {
    match e {
        AppointmentError::DoctorNotFound | AppointmentError::NotFound => {
            AppError::NotFound(e.to_string())
        }
        AppointmentError::SlotNotAvailable => AppError::BadRequest(e.to_string()),
        AppointmentError::SlotTaken => AppError::Conflict(e.to_string()),
        AppointmentError::Validation(msg) => AppError::ValidationError(msg),
        AppointmentError::Storage(msg) => AppError::Storage(msg),
    }
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(&state);

    let booking = booking_service.book(request).await.map_err(to_app_error)?;

    Ok(Json(json!(booking)))
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(&state);

    let bookings = booking_service.list().await.map_err(to_app_error)?;

    Ok(Json(json!({
        "appointments": bookings,
        "total": bookings.len()
    })))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<Arc<AppConfig>>,
    Path(booking_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(&state);

    booking_service
        .cancel(booking_id)
        .await
        .map_err(to_app_error)?;

    Ok(Json(json!({ "success": true })))
}

#[axum::debug_handler]
pub async fn get_booked_slots(
    State(state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<u32>,
) -> Result<Json<Value>, AppError> {
    let booking_service = BookingService::new(&state);

    let slots = booking_service
        .booked_slots(doctor_id)
        .await
        .map_err(to_app_error)?;

    Ok(Json(json!({
        "doctor_id": doctor_id,
        "booked_slots": slots
    })))
}
