use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Bookable hours per day, UTC.
pub const SLOT_HOURS: [u32; 4] = [9, 11, 13, 15];

/// Slots are offered for this many calendar days starting at the reference
/// date.
pub const SLOT_WINDOW_DAYS: i64 = 5;

pub struct AvailabilityService;

impl AvailabilityService {
    /// Ordered slot timestamps for one doctor, deterministic for a fixed
    /// reference date. The parity rule varies which days each doctor offers
    /// and carries no clinical meaning; keep it in one place.
    pub fn slots_for_doctor(doctor_id: u32, from: NaiveDate) -> Vec<DateTime<Utc>> {
        let mut slots = Vec::new();
        for day_offset in 0..SLOT_WINDOW_DAYS {
            let date = from + Duration::days(day_offset);
            if (date.day() + doctor_id) % 2 != 0 {
                continue;
            }
            for hour in SLOT_HOURS {
                if let Some(slot) = date.and_hms_opt(hour, 0, 0) {
                    slots.push(slot.and_utc());
                }
            }
        }
        slots
    }

    /// Whether `slot` belongs to the doctor's generated slot set for the
    /// window starting at `from`.
    pub fn is_bookable(doctor_id: u32, slot: DateTime<Utc>, from: NaiveDate) -> bool {
        Self::slots_for_doctor(doctor_id, from).contains(&slot)
    }
}
