use std::sync::Arc;

use axum::{extract::State, Json};
use serde_json::{json, Value};

use shared_config::AppConfig;
use shared_models::error::AppError;

use crate::models::{AnalyzeRequest, TriageError};
use crate::services::triage::TriageService;

fn to_app_error(e: TriageError) -> AppError {
    match e {
        TriageError::Storage(msg) => AppError::Storage(msg),
    }
}

#[axum::debug_handler]
pub async fn analyze_symptoms(
    State(state): State<Arc<AppConfig>>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<Value>, AppError> {
    if request.message.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Message is required".to_string(),
        ));
    }

    let triage_service = TriageService::new(&state);

    let report = triage_service
        .analyze_and_record(&request.message)
        .await
        .map_err(to_app_error)?;
    let advice = report.urgency.advice();

    Ok(Json(json!({
        "analysis": report,
        "advice": advice
    })))
}

#[axum::debug_handler]
pub async fn get_history(State(state): State<Arc<AppConfig>>) -> Result<Json<Value>, AppError> {
    let triage_service = TriageService::new(&state);

    let entries = triage_service.history().await.map_err(to_app_error)?;

    Ok(Json(json!({
        "entries": entries,
        "total": entries.len()
    })))
}
