use dioxus::prelude::*;
use eco_core::validation::min_booking_date;
use eco_core::{FieldId, FormRole};
use crate::app::use_site;
use crate::choices::GARBAGE_TYPES;
use crate::form_flow;
use crate::platform;
use crate::theme::AppColors;
use crate::widgets::{Card, DraftControls, FieldKind, FormField, PageBackground, SuccessBanner};

const ROLE: FormRole = FormRole::Booking;

#[component]
pub fn BookScreen(is_dark: bool) -> Element {
    let site = use_site();
    let pending = form_flow::use_banner_timer(site, ROLE);
    let primary = AppColors::primary(is_dark);
    let on_surface = AppColors::on_surface(is_dark);
    let min_date = min_booking_date(platform::today());

    rsx! {
        PageBackground { is_dark,
            section { id: "{ROLE.container_id()}", class: "form-section",
                h1 { style: "color: {primary}; margin-bottom: 8px;", "Book a Garbage Vehicle" }
                p { style: "color: {on_surface}; opacity: 0.8; margin-bottom: 16px; font-size: 0.9rem;",
                    "Schedule a pickup at your address. Same-day bookings are accepted."
                }
                Card { is_dark,
                    form {
                        id: "{ROLE.form_id()}",
                        novalidate: true,
                        onsubmit: move |ev| {
                            ev.prevent_default();
                            form_flow::submit(site, ROLE, pending);
                        },
                        SuccessBanner { role: ROLE, is_dark }
                        FormField {
                            field: FieldId::BookName,
                            label: "Your name",
                            kind: FieldKind::Text { placeholder: "Full name" },
                            is_dark,
                        }
                        FormField {
                            field: FieldId::BookAddress,
                            label: "Pickup address",
                            kind: FieldKind::TextArea { placeholder: "House number, street, area", rows: 2 },
                            is_dark,
                        }
                        div { style: "display: flex; gap: 12px;",
                            div { style: "flex: 1;",
                                FormField {
                                    field: FieldId::BookDate,
                                    label: "Date",
                                    kind: FieldKind::Date { min: min_date.clone() },
                                    is_dark,
                                }
                            }
                            div { style: "flex: 1;",
                                FormField {
                                    field: FieldId::BookTime,
                                    label: "Time",
                                    kind: FieldKind::Time,
                                    is_dark,
                                }
                            }
                        }
                        FormField {
                            field: FieldId::GarbageType,
                            label: "Garbage type",
                            kind: FieldKind::Select { prompt: "Select garbage type", options: GARBAGE_TYPES },
                            is_dark,
                        }
                        button {
                            r#type: "submit",
                            style: "width: 100%; padding: 12px; border-radius: 8px; background: {primary}; color: white; font-weight: 600; border: none; cursor: pointer;",
                            "Book vehicle"
                        }
                    }
                    DraftControls { role: ROLE, is_dark }
                }
            }
        }
    }
}
