//! Submit flow for the three forms: empty, valid, and re-validation.

use chrono::NaiveDate;
use eco_core::{FieldId, FormController, FormRole, SubmitOutcome};
use pretty_assertions::assert_eq;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
}

fn filled(role: FormRole) -> FormController {
    let mut form = FormController::new(role);
    let values: &[(FieldId, &str)] = match role {
        FormRole::Report => &[
            (FieldId::ReportName, "Asha"),
            (FieldId::ReportLocation, "Ward 12, Market Road"),
            (FieldId::GarbageLevel, "high"),
        ],
        FormRole::Booking => &[
            (FieldId::BookName, "Ravi"),
            (FieldId::BookAddress, "14 Lake View Street"),
            (FieldId::BookDate, "2026-10-20"),
            (FieldId::BookTime, "09:30"),
            (FieldId::GarbageType, "recyclable"),
        ],
        FormRole::Contact => &[
            (FieldId::ContactName, "Meera"),
            (FieldId::ContactEmail, "meera@example.org"),
            (FieldId::ContactMessage, "When is the next pickup in my area?"),
        ],
    };
    for (field, value) in values {
        form.set_value(*field, *value).unwrap();
    }
    form
}

#[test]
fn empty_submission_reports_every_required_field() {
    for role in FormRole::ALL {
        let mut form = FormController::new(role);
        let outcome = form.submit(today());

        assert!(!outcome.is_accepted(), "{role:?} accepted an empty form");
        assert_eq!(form.error_count(), role.fields().len());
        for field in role.fields() {
            assert!(form.error(*field).is_some(), "no error for {}", field.dom_id());
        }
        assert!(!form.banner().exists());
    }
}

#[test]
fn empty_report_messages() {
    let mut form = FormController::new(FormRole::Report);
    form.submit(today());

    assert_eq!(form.error(FieldId::ReportName), Some("Please enter your name"));
    assert_eq!(form.error(FieldId::ReportLocation), Some("Please enter your area/location"));
    assert_eq!(form.error(FieldId::GarbageLevel), Some("Please select garbage level"));
}

#[test]
fn valid_submission_shows_role_banner_and_resets_fields() {
    for role in FormRole::ALL {
        let mut form = filled(role);
        let outcome = form.submit(today());

        assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
        assert_eq!(form.error_count(), 0);
        assert_eq!(form.banner().text(), Some(role.success_message()));
        assert!(form.banner().is_visible());
        assert!(form.values().is_empty());
    }
}

#[test]
fn booking_success_text() {
    let mut form = filled(FormRole::Booking);
    form.submit(today());
    assert_eq!(
        form.banner().text(),
        Some("Garbage vehicle booked successfully. Expected arrival in 2-3 hours.")
    );
}

#[test]
fn whitespace_only_name_counts_as_empty() {
    let mut form = filled(FormRole::Report);
    form.set_value(FieldId::ReportName, "   ").unwrap();
    form.submit(today());
    assert_eq!(form.error(FieldId::ReportName), Some("Please enter your name"));
}

#[test]
fn short_values_get_length_messages() {
    let mut form = filled(FormRole::Contact);
    form.set_value(FieldId::ContactName, " A ").unwrap();
    form.set_value(FieldId::ContactMessage, "too short").unwrap();
    form.submit(today());

    assert_eq!(form.error(FieldId::ContactName), Some("Name must be at least 2 characters"));
    assert_eq!(form.error(FieldId::ContactEmail), None);
    assert_eq!(
        form.error(FieldId::ContactMessage),
        Some("Message must be at least 10 characters")
    );
}

#[test]
fn resubmit_shows_only_current_failures() {
    let mut form = FormController::new(FormRole::Booking);
    form.submit(today());
    assert_eq!(form.error_count(), 5);

    form.set_value(FieldId::BookName, "Ravi").unwrap();
    form.set_value(FieldId::BookAddress, "14 Lake View Street").unwrap();
    form.set_value(FieldId::BookTime, "10:00").unwrap();
    form.set_value(FieldId::GarbageType, "organic").unwrap();
    form.submit(today());

    let remaining: Vec<FieldId> = form.errors().map(|(f, _)| f).collect();
    assert_eq!(remaining, vec![FieldId::BookDate]);
}

#[test]
fn rejected_submission_keeps_values() {
    let mut form = filled(FormRole::Contact);
    form.set_value(FieldId::ContactEmail, "not-an-email").unwrap();
    form.submit(today());

    assert_eq!(form.values().raw(FieldId::ContactName), "Meera");
    assert!(!form.banner().exists());
}

#[test]
fn show_error_ignores_fields_of_other_forms() {
    let mut form = FormController::new(FormRole::Report);
    form.show_error(FieldId::ContactEmail, "wrong form");
    assert_eq!(form.error_count(), 0);
}

#[test]
fn clear_errors_removes_everything() {
    let mut form = FormController::new(FormRole::Contact);
    form.submit(today());
    form.clear_errors();
    assert_eq!(form.error_count(), 0);
}
