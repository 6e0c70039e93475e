use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{NaiveDate, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::DoctorSearchFilters;
use crate::services::{availability::AvailabilityService, directory::DoctorDirectoryService};

#[derive(Debug, Deserialize)]
pub struct SlotQuery {
    /// Reference date for the slot window; defaults to today (UTC). Results
    /// shift as the wall-clock date advances.
    pub from: Option<NaiveDate>,
}

#[axum::debug_handler]
pub async fn search_doctors(
    State(_state): State<Arc<AppConfig>>,
    Query(filters): Query<DoctorSearchFilters>,
) -> Result<Json<Value>, AppError> {
    let directory = DoctorDirectoryService::new();
    let doctors = directory.search(&filters);

    Ok(Json(json!({
        "doctors": doctors,
        "total": doctors.len()
    })))
}

#[axum::debug_handler]
pub async fn list_specializations(
    State(_state): State<Arc<AppConfig>>,
) -> Result<Json<Value>, AppError> {
    let directory = DoctorDirectoryService::new();

    Ok(Json(json!({
        "specializations": directory.specializations()
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(_state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<u32>,
) -> Result<Json<Value>, AppError> {
    let directory = DoctorDirectoryService::new();

    let doctor = directory
        .get(doctor_id)
        .ok_or_else(|| AppError::NotFound("Doctor not found".to_string()))?;

    Ok(Json(json!(doctor)))
}

#[axum::debug_handler]
pub async fn get_available_slots(
    State(_state): State<Arc<AppConfig>>,
    Path(doctor_id): Path<u32>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<Value>, AppError> {
    let directory = DoctorDirectoryService::new();
    if directory.get(doctor_id).is_none() {
        return Err(AppError::NotFound("Doctor not found".to_string()));
    }

    let from = query.from.unwrap_or_else(|| Utc::now().date_naive());
    let slots = AvailabilityService::slots_for_doctor(doctor_id, from);

    Ok(Json(json!({
        "doctor_id": doctor_id,
        "from": from,
        "available_slots": slots,
        "total_slots": slots.len()
    })))
}
