//! Email pattern and booking date rules.

use chrono::NaiveDate;
use eco_core::validation::{self, format_date, is_valid_email, min_booking_date, parse_date};
use eco_core::{FieldId, FormRole, FormValues};
use pretty_assertions::assert_eq;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
}

fn booking_with_date(date: &str) -> FormValues {
    let mut values = FormValues::new(FormRole::Booking);
    values.set(FieldId::BookName, "Ravi").unwrap();
    values.set(FieldId::BookAddress, "14 Lake View Street").unwrap();
    values.set(FieldId::BookDate, date).unwrap();
    values.set(FieldId::BookTime, "08:00").unwrap();
    values.set(FieldId::GarbageType, "mixed").unwrap();
    values
}

#[test]
fn email_pattern() {
    assert!(is_valid_email("a@b.c"));
    assert!(is_valid_email("first.last@sub.example.org"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("ab.c"));
    assert!(!is_valid_email("a@@b.c"));
    assert!(!is_valid_email("a b@c.d"));
    assert!(!is_valid_email(""));
}

#[test]
fn invalid_email_message() {
    let mut values = FormValues::new(FormRole::Contact);
    values.set(FieldId::ContactName, "Meera").unwrap();
    values.set(FieldId::ContactEmail, "a@b").unwrap();
    values.set(FieldId::ContactMessage, "Please call me back").unwrap();

    let report = validation::validate(&values, today());
    assert_eq!(
        report.message_for(FieldId::ContactEmail),
        Some("Please enter a valid email address")
    );
    assert_eq!(report.errors().len(), 1);
}

#[test]
fn booking_date_today_is_accepted() {
    let report = validation::validate(&booking_with_date("2026-10-15"), today());
    assert!(report.is_valid());
}

#[test]
fn booking_date_in_future_is_accepted() {
    let report = validation::validate(&booking_with_date("2027-01-01"), today());
    assert!(report.is_valid());
}

#[test]
fn booking_date_before_today_is_rejected() {
    let report = validation::validate(&booking_with_date("2026-10-14"), today());
    assert_eq!(report.message_for(FieldId::BookDate), Some("Please select a future date"));
}

#[test]
fn booking_date_unparseable_is_rejected() {
    let report = validation::validate(&booking_with_date("next tuesday"), today());
    assert_eq!(report.message_for(FieldId::BookDate), Some("Please select a valid date"));
}

#[test]
fn booking_date_missing() {
    let report = validation::validate(&booking_with_date(""), today());
    assert_eq!(report.message_for(FieldId::BookDate), Some("Please select a date"));
}

#[test]
fn address_length_counts_characters() {
    let mut values = booking_with_date("2026-10-15");
    values.set(FieldId::BookAddress, "  Rd 4 ").unwrap();
    let report = validation::validate(&values, today());
    assert_eq!(
        report.message_for(FieldId::BookAddress),
        Some("Address must be at least 5 characters")
    );
}

#[test]
fn location_needs_three_characters() {
    let mut values = FormValues::new(FormRole::Report);
    values.set(FieldId::ReportName, "Asha").unwrap();
    values.set(FieldId::ReportLocation, "ab").unwrap();
    values.set(FieldId::GarbageLevel, "low").unwrap();
    let report = validation::validate(&values, today());
    assert_eq!(
        report.message_for(FieldId::ReportLocation),
        Some("Location must be at least 3 characters")
    );
}

#[test]
fn date_helpers_use_iso_format() {
    assert_eq!(format_date(today()), "2026-10-15");
    assert_eq!(min_booking_date(today()), "2026-10-15");
    assert_eq!(parse_date("2026-10-15"), Some(today()));
    assert_eq!(parse_date("15/10/2026"), None);
}
