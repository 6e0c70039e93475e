use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use doctor_cell::services::{availability::AvailabilityService, directory::DoctorDirectoryService};
use shared_config::AppConfig;
use shared_storage::{JsonFileStore, RecordStore, Repository};

use crate::models::{AppointmentError, BookAppointmentRequest, Booking};

/// Store key holding the persisted booking list.
pub const BOOKINGS_KEY: &str = "appointments";

pub struct BookingService {
    directory: DoctorDirectoryService,
    bookings: Repository<Booking>,
}

impl BookingService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_store(Arc::new(JsonFileStore::new(config)))
    }

    pub fn with_store(store: Arc<dyn RecordStore>) -> Self {
        Self {
            directory: DoctorDirectoryService::new(),
            bookings: Repository::new(store, BOOKINGS_KEY),
        }
    }

    pub async fn book(&self, request: BookAppointmentRequest) -> Result<Booking, AppointmentError> {
        self.book_for_date(request, Utc::now().date_naive()).await
    }

    /// `from` anchors the doctor's slot window; split out so the slot
    /// membership check is testable with a fixed date.
    pub async fn book_for_date(
        &self,
        request: BookAppointmentRequest,
        from: NaiveDate,
    ) -> Result<Booking, AppointmentError> {
        let patient_name = request.patient_name.trim();
        if patient_name.is_empty() {
            return Err(AppointmentError::Validation(
                "Patient name is required".to_string(),
            ));
        }

        let patient_phone = request.patient_phone.trim();
        if patient_phone.is_empty() {
            return Err(AppointmentError::Validation(
                "Patient phone is required".to_string(),
            ));
        }

        let doctor = self
            .directory
            .get(request.doctor_id)
            .ok_or(AppointmentError::DoctorNotFound)?
            .clone();

        if !AvailabilityService::is_bookable(doctor.id, request.slot, from) {
            return Err(AppointmentError::SlotNotAvailable);
        }

        let mut bookings = self.load_bookings().await?;

        // Equality scan, not a transaction: two concurrent writers can still
        // double-book. Accepted limitation of the single-writer store.
        if bookings
            .iter()
            .any(|b| b.doctor_id == doctor.id && b.slot == request.slot)
        {
            warn!("Slot {} already booked for doctor {}", request.slot, doctor.id);
            return Err(AppointmentError::SlotTaken);
        }

        let booking = Booking {
            id: Uuid::new_v4(),
            doctor_id: doctor.id,
            doctor_name: doctor.name.clone(),
            specialization: doctor.specialization.clone(),
            reg_no: doctor.reg_no.clone(),
            slot: request.slot,
            appointment_type: request.appointment_type,
            patient_name: patient_name.to_string(),
            patient_phone: patient_phone.to_string(),
            fee: doctor.fee,
            created_at: Utc::now(),
        };

        bookings.insert(0, booking.clone());
        self.save_bookings(&bookings).await?;

        info!("Appointment {} booked with doctor {}", booking.id, doctor.id);
        Ok(booking)
    }

    /// Bookings newest-first, as persisted.
    pub async fn list(&self) -> Result<Vec<Booking>, AppointmentError> {
        self.load_bookings().await
    }

    pub async fn cancel(&self, booking_id: Uuid) -> Result<(), AppointmentError> {
        let mut bookings = self.load_bookings().await?;
        let before = bookings.len();
        bookings.retain(|b| b.id != booking_id);
        if bookings.len() == before {
            return Err(AppointmentError::NotFound);
        }

        self.save_bookings(&bookings).await?;
        info!("Appointment {} cancelled", booking_id);
        Ok(())
    }

    /// Slots already taken for a doctor, so callers can render them disabled.
    pub async fn booked_slots(&self, doctor_id: u32) -> Result<Vec<DateTime<Utc>>, AppointmentError> {
        let bookings = self.load_bookings().await?;
        Ok(bookings
            .iter()
            .filter(|b| b.doctor_id == doctor_id)
            .map(|b| b.slot)
            .collect())
    }

    async fn load_bookings(&self) -> Result<Vec<Booking>, AppointmentError> {
        self.bookings
            .load()
            .await
            .map_err(|e| AppointmentError::Storage(e.to_string()))
    }

    async fn save_bookings(&self, bookings: &[Booking]) -> Result<(), AppointmentError> {
        self.bookings
            .save(bookings)
            .await
            .map_err(|e| AppointmentError::Storage(e.to_string()))
    }
}
