use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Mild,
    Moderate,
}

/// Coarse triage label from phrase matching. Not a clinical judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    High,
    Moderate,
    Low,
}

impl Urgency {
    pub fn advice(&self) -> &'static str {
        match self {
            Urgency::High => "Seek emergency care immediately",
            Urgency::Moderate => "Consider urgent care",
            Urgency::Low => "Monitor and consult if persistent or worsening",
        }
    }
}

/// A keyword-derived candidate condition. Probabilities are heuristic demo
/// values, not diagnostic likelihoods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionMatch {
    pub name: String,
    pub probability: u8,
    pub severity: Severity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriageReport {
    pub possible_conditions: Vec<ConditionMatch>,
    pub urgency: Urgency,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub message: String,
}

/// One persisted chat turn: the free-text input and the report it produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranscriptEntry {
    pub message: String,
    pub report: TriageReport,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum TriageError {
    #[error("Storage error: {0}")]
    Storage(String),
}
