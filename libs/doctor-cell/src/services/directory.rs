use std::cmp::Ordering;

use tracing::debug;

use crate::models::{AppointmentType, Doctor, DoctorSearchFilters, SortKey};

/// Sample directory used by the demo deployment. Profile images and richer
/// credentials live with the frontend; this list is read-only after seeding.
pub fn seed_doctors() -> Vec<Doctor> {
    vec![
        Doctor {
            id: 1,
            name: "Dr. Ayesha Kaur".to_string(),
            specialization: "Dermatologist".to_string(),
            degree: "MD (Dermatology)".to_string(),
            reg_no: "REG-D-458762".to_string(),
            experience: 8,
            rating: 4.6,
            fee: 400,
            available: true,
        },
        Doctor {
            id: 2,
            name: "Dr. Arjun Mehta".to_string(),
            specialization: "General Surgeon".to_string(),
            degree: "MS (General Surgery)".to_string(),
            reg_no: "REG-S-564213".to_string(),
            experience: 12,
            rating: 4.2,
            fee: 600,
            available: true,
        },
        Doctor {
            id: 3,
            name: "Dr. Priya Sharma".to_string(),
            specialization: "Ophthalmologist".to_string(),
            degree: "MS (Ophthalmology)".to_string(),
            reg_no: "REG-O-789652".to_string(),
            experience: 6,
            rating: 4.8,
            fee: 350,
            available: false,
        },
        Doctor {
            id: 4,
            name: "Dr. Imran Shaikh".to_string(),
            specialization: "Pediatrician".to_string(),
            degree: "MD (Pediatrics)".to_string(),
            reg_no: "REG-P-652198".to_string(),
            experience: 10,
            rating: 4.5,
            fee: 300,
            available: true,
        },
    ]
}

pub struct DoctorDirectoryService {
    doctors: Vec<Doctor>,
}

impl DoctorDirectoryService {
    pub fn new() -> Self {
        Self {
            doctors: seed_doctors(),
        }
    }

    pub fn with_doctors(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    pub fn all(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn get(&self, doctor_id: u32) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.id == doctor_id)
    }

    /// Distinct specializations in first-seen order.
    pub fn specializations(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for doctor in &self.doctors {
            if !seen.contains(&doctor.specialization) {
                seen.push(doctor.specialization.clone());
            }
        }
        seen
    }

    /// Filtered, sorted view of the directory. An empty result is a valid
    /// outcome, never an error.
    pub fn search(&self, filters: &DoctorSearchFilters) -> Vec<Doctor> {
        let mut list: Vec<Doctor> = self.doctors.to_vec();

        if let Some(query) = filters
            .query
            .as_deref()
            .map(str::trim)
            .filter(|q| !q.is_empty())
        {
            let q = query.to_lowercase();
            list.retain(|d| {
                d.name.to_lowercase().contains(&q)
                    || d.specialization.to_lowercase().contains(&q)
                    || d.degree.to_lowercase().contains(&q)
            });
        }

        if let Some(specialization) = filters.specialization.as_deref().filter(|s| !s.is_empty()) {
            list.retain(|d| d.specialization == specialization);
        }

        if filters.appointment_type == Some(AppointmentType::Video) {
            list.retain(|d| d.available);
        }

        match filters.sort_by {
            SortKey::Fee => list.sort_by(|a, b| a.fee.cmp(&b.fee)),
            SortKey::Experience => list.sort_by(|a, b| b.experience.cmp(&a.experience)),
            SortKey::Best | SortKey::Rating => list.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            }),
        }

        debug!("Doctor search matched {} of {}", list.len(), self.doctors.len());
        list
    }
}

impl Default for DoctorDirectoryService {
    fn default() -> Self {
        Self::new()
    }
}
