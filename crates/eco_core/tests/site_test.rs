//! The assembled site: init, theme, navigation, forms, drafts, teardown.

use chrono::NaiveDate;
use eco_core::{FieldId, FormRole, KeyValueStore, MemoryStore, Page, Site, SiteConfig, SubmitOutcome, Theme};
use pretty_assertions::assert_eq;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 15).unwrap()
}

fn site_at(path: &str) -> Site<MemoryStore> {
    Site::init(MemoryStore::new(), SiteConfig::default(), path)
}

#[test]
fn init_applies_saved_theme_and_highlights_page() {
    let mut store = MemoryStore::new();
    store.set("theme", "dark").unwrap();
    let site = Site::init(store, SiteConfig::default(), "/contact.html");

    assert_eq!(site.theme().current(), Theme::Dark);
    assert_eq!(site.nav().current_route(), Some(Page::Contact));
}

#[test]
fn init_with_empty_path_lands_home() {
    let site = site_at("");
    assert_eq!(site.nav().current(), "index.html");
    assert_eq!(site.nav().active().count(), 1);
}

#[test]
fn toggle_theme_writes_store() {
    let mut site = site_at("/");
    assert_eq!(site.toggle_theme(), Theme::Dark);
    assert_eq!(site.store().get("theme").unwrap().as_deref(), Some("dark"));
}

#[test]
fn navigate_moves_highlight() {
    let mut site = site_at("/");
    assert_eq!(site.navigate("book.html"), "book.html");
    assert_eq!(site.nav().current_route(), Some(Page::Book));
}

#[test]
fn forms_are_independent() {
    let mut site = site_at("/");
    site.submit(FormRole::Report, today());

    assert_eq!(site.form(FormRole::Report).error_count(), 3);
    assert_eq!(site.form(FormRole::Contact).error_count(), 0);
}

#[test]
fn accepted_submission_then_timer_hides_banner() {
    let mut site = site_at("/contact.html");
    let form = site.form_mut(FormRole::Contact);
    form.set_value(FieldId::ContactName, "Meera").unwrap();
    form.set_value(FieldId::ContactEmail, "a@b.c").unwrap();
    form.set_value(FieldId::ContactMessage, "Bins were missed this week").unwrap();

    let SubmitOutcome::Accepted(ticket) = site.submit(FormRole::Contact, today()) else {
        panic!("contact form should be accepted");
    };
    assert!(site.form(FormRole::Contact).banner().is_visible());
    assert!(site.hide_banner(FormRole::Contact, ticket));
    assert!(!site.form(FormRole::Contact).banner().is_visible());
}

#[test]
fn teardown_cancels_pending_hides() {
    let mut site = site_at("/report.html");
    let ticket = site
        .form_mut(FormRole::Report)
        .show_success_message(FormRole::Report.success_message());

    site.teardown();
    assert!(!site.hide_banner(FormRole::Report, ticket));
    assert!(!site.form(FormRole::Report).banner().is_visible());
}

#[test]
fn leaving_form_mid_banner_does_not_leave_it_visible() {
    let mut site = site_at("/report.html");
    let form = site.form_mut(FormRole::Report);
    form.set_value(FieldId::ReportName, "Asha").unwrap();
    form.set_value(FieldId::ReportLocation, "Ward 12").unwrap();
    form.set_value(FieldId::GarbageLevel, "high").unwrap();
    let SubmitOutcome::Accepted(ticket) = site.submit(FormRole::Report, today()) else {
        panic!("report form should be accepted");
    };

    site.form_mut(FormRole::Report).banner_mut().cancel_pending();

    let banner = site.form(FormRole::Report).banner();
    assert!(!banner.is_visible());
    assert!(!banner.scroll_requested());
    assert!(!site.hide_banner(FormRole::Report, ticket));
}

#[test]
fn draft_round_trip_through_site() {
    let mut site = site_at("/book.html");
    site.form_mut(FormRole::Booking)
        .set_value(FieldId::BookAddress, "14 Lake View Street")
        .unwrap();
    site.save_draft(FormRole::Booking).unwrap();

    site.form_mut(FormRole::Booking).values_mut().reset();
    assert!(site.restore_draft(FormRole::Booking).unwrap());
    assert_eq!(
        site.form(FormRole::Booking).values().raw(FieldId::BookAddress),
        "14 Lake View Street"
    );

    site.clear_draft(FormRole::Booking).unwrap();
    assert!(!site.restore_draft(FormRole::Booking).unwrap());
}
