use dioxus::prelude::*;
use eco_core::{FieldId, FormRole};
use crate::app::use_site;
use crate::choices::GARBAGE_LEVELS;
use crate::form_flow;
use crate::theme::AppColors;
use crate::widgets::{Card, DraftControls, FieldKind, FormField, PageBackground, SuccessBanner};

const ROLE: FormRole = FormRole::Report;

#[component]
pub fn ReportScreen(is_dark: bool) -> Element {
    let site = use_site();
    let pending = form_flow::use_banner_timer(site, ROLE);
    let primary = AppColors::primary(is_dark);
    let on_surface = AppColors::on_surface(is_dark);

    rsx! {
        PageBackground { is_dark,
            section { id: "{ROLE.container_id()}", class: "form-section",
                h1 { style: "color: {primary}; margin-bottom: 8px;", "Report Garbage" }
                p { style: "color: {on_surface}; opacity: 0.8; margin-bottom: 16px; font-size: 0.9rem;",
                    "Let us know about uncollected or overflowing garbage in your area."
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
                            field: FieldId::ReportName,
                            label: "Your name",
                            kind: FieldKind::Text { placeholder: "Full name" },
                            is_dark,
                        }
                        FormField {
                            field: FieldId::ReportLocation,
                            label: "Area / location",
                            kind: FieldKind::Text { placeholder: "Street, ward or landmark" },
                            is_dark,
                        }
                        FormField {
                            field: FieldId::GarbageLevel,
                            label: "Garbage level",
                            kind: FieldKind::Select { prompt: "Select garbage level", options: GARBAGE_LEVELS },
                            is_dark,
                        }
                        button {
                            r#type: "submit",
                            style: "width: 100%; padding: 12px; border-radius: 8px; background: {primary}; color: white; font-weight: 600; border: none; cursor: pointer;",
                            "Send report"
                        }
                    }
                    DraftControls { role: ROLE, is_dark }
                }
            }
        }
    }
}
