//! Deterministic tests for the UTC-offset local-time resolver.

use chrono::{TimeZone, Utc};
use country_explorer_api::domain::localtime::{parse_utc_offset, resolve_local_time};

fn noon_utc() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

#[test]
fn parses_offset_strings() {
    assert_eq!(parse_utc_offset("UTC"), Some(0));
    assert_eq!(parse_utc_offset("UTC+05:30"), Some(330));
    assert_eq!(parse_utc_offset("UTC-03:30"), Some(-210));
    assert_eq!(parse_utc_offset("UTC+05"), Some(300));
    assert_eq!(parse_utc_offset("UTC+14:00"), Some(840));
}

#[test]
fn rejects_malformed_offsets() {
    assert_eq!(parse_utc_offset("GMT+05:00"), None);
    assert_eq!(parse_utc_offset("UTC5"), None);
    assert_eq!(parse_utc_offset("UTC+"), None);
    assert_eq!(parse_utc_offset("UTC+ab:cd"), None);
    assert_eq!(parse_utc_offset("UTC+05:75"), None);
    assert_eq!(parse_utc_offset(""), None);
}

#[test]
fn resolves_half_hour_offset() {
    // 12:00 UTC at UTC+05:30 is 17:30 local.
    assert_eq!(resolve_local_time("UTC+05:30", noon_utc()), "5:30 PM");
}

#[test]
fn resolves_negative_offset() {
    // 12:00 UTC at UTC-05:00 is 07:00 local.
    assert_eq!(resolve_local_time("UTC-05:00", noon_utc()), "7:00 AM");
    // The sign applies to the minutes too: UTC-03:30 is 08:30, not 09:30.
    assert_eq!(resolve_local_time("UTC-03:30", noon_utc()), "8:30 AM");
}

#[test]
fn resolves_zero_offset() {
    let morning = Utc.with_ymd_and_hms(2024, 1, 15, 6, 5, 0).unwrap();
    assert_eq!(resolve_local_time("UTC", morning), "6:05 AM");
}

#[test]
fn twelve_hour_clock_edges() {
    let midnight = Utc.with_ymd_and_hms(2024, 1, 15, 0, 15, 0).unwrap();
    assert_eq!(resolve_local_time("UTC", midnight), "12:15 AM");
    assert_eq!(resolve_local_time("UTC", noon_utc()), "12:00 PM");
    // Crossing a day boundary through the offset.
    assert_eq!(resolve_local_time("UTC-01:00", midnight), "11:15 PM");
}

#[test]
fn malformed_offset_degrades_to_fallback() {
    assert_eq!(resolve_local_time("not-a-timezone", noon_utc()), "12:00 PM");
    assert_eq!(resolve_local_time("UTC+99:00", noon_utc()), "12:00 PM");
}

#[test]
fn same_inputs_same_output() {
    let now = noon_utc();
    assert_eq!(
        resolve_local_time("UTC+09:00", now),
        resolve_local_time("UTC+09:00", now)
    );
}
