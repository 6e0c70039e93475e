use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u32,
    pub name: String,
    pub specialization: String,
    pub degree: String,
    pub reg_no: String,
    pub experience: u32,
    pub rating: f32,
    pub fee: u32,
    pub available: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentType {
    Video,
    InPerson,
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentType::Video => write!(f, "video"),
            AppointmentType::InPerson => write!(f, "in-person"),
        }
    }
}

/// Comparator selection for directory search results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Default ordering; same comparator as `Rating`.
    #[default]
    Best,
    Rating,
    Fee,
    Experience,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DoctorSearchFilters {
    /// Case-insensitive substring match against name, specialization or
    /// degree.
    pub query: Option<String>,
    /// Exact specialization match.
    pub specialization: Option<String>,
    /// `video` keeps only doctors currently flagged available.
    pub appointment_type: Option<AppointmentType>,
    #[serde(default)]
    pub sort_by: SortKey,
}
