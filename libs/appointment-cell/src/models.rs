use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use doctor_cell::models::AppointmentType;

/// A confirmed appointment. Doctor fields are snapshots taken at booking
/// time so the record stays meaningful if the directory changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub doctor_id: u32,
    pub doctor_name: String,
    pub specialization: String,
    pub reg_no: String,
    pub slot: DateTime<Utc>,
    pub appointment_type: AppointmentType,
    pub patient_name: String,
    pub patient_phone: String,
    pub fee: u32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub doctor_id: u32,
    pub slot: DateTime<Utc>,
    pub appointment_type: AppointmentType,
    pub patient_name: String,
    pub patient_phone: String,
}

#[derive(Debug, Error)]
pub enum AppointmentError {
    #[error("Doctor not found")]
    DoctorNotFound,

    #[error("Booking not found")]
    NotFound,

    #[error("Selected slot is not offered by this doctor")]
    SlotNotAvailable,

    #[error("Slot is already booked for this doctor")]
    SlotTaken,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}
