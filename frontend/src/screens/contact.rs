use dioxus::prelude::*;
use eco_core::{FieldId, FormRole};
use crate::app::use_site;
use crate::form_flow;
use crate::theme::AppColors;
use crate::widgets::{Card, DraftControls, FieldKind, FormField, PageBackground, SuccessBanner};

const ROLE: FormRole = FormRole::Contact;

#[component]
pub fn ContactScreen(is_dark: bool) -> Element {
    let site = use_site();
    let pending = form_flow::use_banner_timer(site, ROLE);
    let primary = AppColors::primary(is_dark);
    let on_surface = AppColors::on_surface(is_dark);

    rsx! {
        PageBackground { is_dark,
            section { id: "{ROLE.container_id()}", class: "form-section",
                h1 { style: "color: {primary}; margin-bottom: 8px;", "Contact Us" }
                p { style: "color: {on_surface}; opacity: 0.8; margin-bottom: 16px; font-size: 0.9rem;",
                    "We usually reply within one working day."
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
                            field: FieldId::ContactName,
                            label: "Your name",
                            kind: FieldKind::Text { placeholder: "Full name" },
                            is_dark,
                        }
                        FormField {
                            field: FieldId::ContactEmail,
                            label: "Email",
                            kind: FieldKind::Email { placeholder: "you@example.com" },
                            is_dark,
                        }
                        FormField {
                            field: FieldId::ContactMessage,
                            label: "Message",
                            kind: FieldKind::TextArea { placeholder: "How can we help?", rows: 5 },
                            is_dark,
                        }
                        button {
                            r#type: "submit",
                            style: "width: 100%; padding: 12px; border-radius: 8px; background: {primary}; color: white; font-weight: 600; border: none; cursor: pointer;",
                            "Send message"
                        }
                    }
                    DraftControls { role: ROLE, is_dark }
                }
            }
        }
    }
}
