use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use shared_config::AppConfig;
use shared_storage::{JsonFileStore, RecordStore, Repository};

use crate::models::{TranscriptEntry, TriageError, TriageReport};
use crate::services::matcher::match_conditions;
use crate::services::urgency::classify_urgency;

/// Store key holding the persisted chat transcript.
pub const TRANSCRIPT_KEY: &str = "triage_transcript";

pub struct TriageService {
    transcript: Repository<TranscriptEntry>,
}

impl TriageService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_store(Arc::new(JsonFileStore::new(config)))
    }

    pub fn with_store(store: Arc<dyn RecordStore>) -> Self {
        Self {
            transcript: Repository::new(store, TRANSCRIPT_KEY),
        }
    }

    /// Pure report generation; never fails, whatever the input.
    pub fn analyze(message: &str) -> TriageReport {
        TriageReport {
            possible_conditions: match_conditions(message),
            urgency: classify_urgency(message),
            recommendations: default_recommendations(),
        }
    }

    /// Analyze one chat turn and append it to the persisted transcript.
    pub async fn analyze_and_record(&self, message: &str) -> Result<TriageReport, TriageError> {
        let report = Self::analyze(message);

        let mut entries = self.load_transcript().await?;
        entries.push(TranscriptEntry {
            message: message.to_string(),
            report: report.clone(),
            created_at: Utc::now(),
        });
        self.transcript
            .save(&entries)
            .await
            .map_err(|e| TriageError::Storage(e.to_string()))?;

        debug!(
            "Recorded triage turn ({} conditions, urgency {:?})",
            report.possible_conditions.len(),
            report.urgency
        );
        Ok(report)
    }

    pub async fn history(&self) -> Result<Vec<TranscriptEntry>, TriageError> {
        self.load_transcript().await
    }

    async fn load_transcript(&self) -> Result<Vec<TranscriptEntry>, TriageError> {
        self.transcript
            .load()
            .await
            .map_err(|e| TriageError::Storage(e.to_string()))
    }
}

fn default_recommendations() -> Vec<String> {
    [
        "Stay hydrated and rest.",
        "Use over-the-counter symptom relief as appropriate.",
        "Monitor temperature and breathing; seek care if symptoms worsen.",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
