use std::path::PathBuf;
use std::sync::Arc;

use assert_matches::assert_matches;
use axum::extract::{Path, Query, State};
use chrono::NaiveDate;

use doctor_cell::handlers::{self, SlotQuery};
use doctor_cell::models::DoctorSearchFilters;
use shared_config::AppConfig;
use shared_models::error::AppError;

fn test_state() -> State<Arc<AppConfig>> {
    State(Arc::new(AppConfig {
        data_dir: PathBuf::from("/tmp/unused"),
        port: 0,
    }))
}

#[tokio::test]
async fn search_handler_reports_matches_and_total() {
    let result = handlers::search_doctors(
        test_state(),
        Query(DoctorSearchFilters {
            query: Some("surgeon".to_string()),
            ..DoctorSearchFilters::default()
        }),
    )
    .await;

    let response = result.unwrap().0;
    assert_eq!(response["total"], 1);
    assert_eq!(response["doctors"][0]["name"], "Dr. Arjun Mehta");
}

#[tokio::test]
async fn search_handler_returns_empty_list_for_unknown_specialty() {
    let result = handlers::search_doctors(
        test_state(),
        Query(DoctorSearchFilters {
            query: Some("cardio".to_string()),
            ..DoctorSearchFilters::default()
        }),
    )
    .await;

    let response = result.unwrap().0;
    assert_eq!(response["total"], 0);
    assert_eq!(response["doctors"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn get_doctor_handler_rejects_unknown_ids() {
    let result = handlers::get_doctor(test_state(), Path(99)).await;
    assert_matches!(result.unwrap_err(), AppError::NotFound(_));
}

#[tokio::test]
async fn slots_handler_uses_the_requested_reference_date() {
    let from = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let result = handlers::get_available_slots(
        test_state(),
        Path(2),
        Query(SlotQuery { from: Some(from) }),
    )
    .await;

    let response = result.unwrap().0;
    assert_eq!(response["doctor_id"], 2);
    assert_eq!(response["total_slots"], 8);
    let slots = response["available_slots"].as_array().unwrap();
    assert!(slots
        .iter()
        .any(|s| s.as_str().unwrap().starts_with("2025-01-02T09:00:00")));
}

#[tokio::test]
async fn specializations_handler_lists_the_directory_enum() {
    let result = handlers::list_specializations(test_state()).await;
    let response = result.unwrap().0;
    let list = response["specializations"].as_array().unwrap();
    assert_eq!(list.len(), 4);
}
