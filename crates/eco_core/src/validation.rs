//! Per-form rule sets. Every field is checked even when an earlier one failed;
//! each field reports at most one message.

use crate::fields::{FieldId, FormRole, FormValues};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_MIN_LEN: usize = 2;
pub const LOCATION_MIN_LEN: usize = 3;
pub const ADDRESS_MIN_LEN: usize = 5;
pub const MESSAGE_MIN_LEN: usize = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMessage {
    pub field: FieldId,
    pub message: &'static str,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldMessage>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldMessage] {
        &self.errors
    }

    pub fn message_for(&self, field: FieldId) -> Option<&'static str> {
        self.errors.iter().find(|e| e.field == field).map(|e| e.message)
    }

    fn fail(&mut self, field: FieldId, message: &'static str) {
        self.errors.push(FieldMessage { field, message });
    }
}

pub fn validate(values: &FormValues, today: NaiveDate) -> ValidationReport {
    let mut report = ValidationReport::default();
    match values.role() {
        FormRole::Report => {
            require_min_len(
                &mut report,
                FieldId::ReportName,
                values.read(FieldId::ReportName),
                NAME_MIN_LEN,
                "Please enter your name",
                "Name must be at least 2 characters",
            );
            require_min_len(
                &mut report,
                FieldId::ReportLocation,
                values.read(FieldId::ReportLocation),
                LOCATION_MIN_LEN,
                "Please enter your area/location",
                "Location must be at least 3 characters",
            );
            require_selected(
                &mut report,
                FieldId::GarbageLevel,
                values.read(FieldId::GarbageLevel),
                "Please select garbage level",
            );
        }
        FormRole::Booking => {
            require_min_len(
                &mut report,
                FieldId::BookName,
                values.read(FieldId::BookName),
                NAME_MIN_LEN,
                "Please enter your name",
                "Name must be at least 2 characters",
            );
            require_min_len(
                &mut report,
                FieldId::BookAddress,
                values.read(FieldId::BookAddress),
                ADDRESS_MIN_LEN,
                "Please enter your address",
                "Address must be at least 5 characters",
            );
            if let Err(message) = check_booking_date(values.read(FieldId::BookDate), today) {
                report.fail(FieldId::BookDate, message);
            }
            require_selected(
                &mut report,
                FieldId::BookTime,
                values.read(FieldId::BookTime),
                "Please select a time",
            );
            require_selected(
                &mut report,
                FieldId::GarbageType,
                values.read(FieldId::GarbageType),
                "Please select garbage type",
            );
        }
        FormRole::Contact => {
            require_min_len(
                &mut report,
                FieldId::ContactName,
                values.read(FieldId::ContactName),
                NAME_MIN_LEN,
                "Please enter your name",
                "Name must be at least 2 characters",
            );
            let email = values.read(FieldId::ContactEmail);
            if email.is_empty() {
                report.fail(FieldId::ContactEmail, "Please enter your email");
            } else if !is_valid_email(email) {
                report.fail(FieldId::ContactEmail, "Please enter a valid email address");
            }
            require_min_len(
                &mut report,
                FieldId::ContactMessage,
                values.read(FieldId::ContactMessage),
                MESSAGE_MIN_LEN,
                "Please enter your message",
                "Message must be at least 10 characters",
            );
        }
    }
    report
}

fn require_min_len(
    report: &mut ValidationReport,
    field: FieldId,
    value: &str,
    min: usize,
    empty_message: &'static str,
    short_message: &'static str,
) {
    if value.is_empty() {
        report.fail(field, empty_message);
    } else if value.chars().count() < min {
        report.fail(field, short_message);
    }
}

fn require_selected(report: &mut ValidationReport, field: FieldId, value: &str, message: &'static str) {
    if value.is_empty() {
        report.fail(field, message);
    }
}

/// Date-only comparison: today passes, anything earlier fails.
fn check_booking_date(value: &str, today: NaiveDate) -> Result<(), &'static str> {
    if value.is_empty() {
        return Err("Please select a date");
    }
    let selected = parse_date(value).ok_or("Please select a valid date")?;
    if selected < today {
        return Err("Please select a future date");
    }
    Ok(())
}

/// `local@domain.tld`: non-whitespace parts, exactly one `@`, at least one `.` after it.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `min` attribute for booking date pickers.
pub fn min_booking_date(today: NaiveDate) -> String {
    format_date(today)
}
