pub mod matcher;
pub mod triage;
pub mod urgency;

pub use triage::TriageService;
