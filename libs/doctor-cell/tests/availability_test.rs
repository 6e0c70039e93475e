use chrono::{DateTime, Datelike, Duration, NaiveDate, Timelike, Utc};

use doctor_cell::services::availability::{AvailabilityService, SLOT_HOURS, SLOT_WINDOW_DAYS};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn slots_stay_within_the_window_and_allowed_hours() {
    let from = day(2025, 1, 1);
    for doctor_id in 1..=4 {
        for slot in AvailabilityService::slots_for_doctor(doctor_id, from) {
            let offset = slot.date_naive().signed_duration_since(from).num_days();
            assert!((0..SLOT_WINDOW_DAYS).contains(&offset), "slot {} outside window", slot);
            assert!(SLOT_HOURS.contains(&slot.hour()), "slot {} at bad hour", slot);
            assert_eq!(slot.minute(), 0);
        }
    }
}

#[test]
fn generation_is_deterministic_for_a_fixed_reference_date() {
    let from = day(2025, 3, 10);
    let first = AvailabilityService::slots_for_doctor(3, from);
    let second = AvailabilityService::slots_for_doctor(3, from);
    assert_eq!(first, second);
}

#[test]
fn parity_rule_gates_whole_days_per_doctor() {
    let from = day(2025, 1, 1);
    let slots = AvailabilityService::slots_for_doctor(2, from);

    // Doctor 2 gets Jan 2 and Jan 4 within the Jan 1-5 window.
    let days: Vec<u32> = slots.iter().map(|s| s.day()).collect();
    assert!(days.iter().all(|d| [2, 4].contains(d)));
    assert_eq!(slots.len(), 2 * SLOT_HOURS.len());

    for slot in &slots {
        assert_eq!((slot.day() + 2) % 2, 0);
    }
}

#[test]
fn known_slot_is_bookable_and_off_pattern_times_are_not() {
    let from = day(2025, 1, 1);
    let expected: DateTime<Utc> = "2025-01-02T09:00:00Z".parse().unwrap();

    assert!(AvailabilityService::is_bookable(2, expected, from));
    // Wrong hour.
    assert!(!AvailabilityService::is_bookable(2, expected + Duration::hours(1), from));
    // Day excluded by the parity rule for this doctor.
    assert!(!AvailabilityService::is_bookable(2, expected + Duration::days(1), from));
    // Outside the window.
    assert!(!AvailabilityService::is_bookable(2, expected + Duration::days(30), from));
}

#[test]
fn consecutive_doctor_ids_see_different_days() {
    let from = day(2025, 1, 1);
    let doctor_two: Vec<u32> = AvailabilityService::slots_for_doctor(2, from)
        .iter()
        .map(|s| s.day())
        .collect();
    let doctor_three: Vec<u32> = AvailabilityService::slots_for_doctor(3, from)
        .iter()
        .map(|s| s.day())
        .collect();
    assert!(doctor_two.iter().all(|d| !doctor_three.contains(d)));
}
