use dioxus::prelude::*;
use eco_core::FormRole;
use crate::app::use_site;
use crate::theme::AppColors;

/// Save / restore / discard a form draft in persisted storage.
#[component]
pub fn DraftControls(role: FormRole, is_dark: bool) -> Element {
    let mut site = use_site();
    let mut notice = use_signal(|| Option::<String>::None);
    let muted = AppColors::on_surface(is_dark);
    let button_style = format!(
        "padding: 6px 12px; border-radius: 8px; border: 1px solid {muted}; background: transparent; color: {muted}; cursor: pointer; font-size: 0.8rem;"
    );

    rsx! {
        div { class: "draft-controls", style: "display: flex; gap: 8px; align-items: center; margin-top: 12px; opacity: 0.85;",
            button {
                r#type: "button",
                onclick: move |_| {
                    let msg = match site.write().save_draft(role) {
                        Ok(()) => "Draft saved".to_string(),
                        Err(e) => {
                            tracing::warn!(error = %e, form = role.form_id(), "saving draft failed");
                            format!("Could not save draft: {e}")
                        }
                    };
                    notice.set(Some(msg));
                },
                style: "{button_style}",
                "Save draft"
            }
            button {
                r#type: "button",
                onclick: move |_| {
                    let msg = match site.write().restore_draft(role) {
                        Ok(true) => "Draft restored".to_string(),
                        Ok(false) => "No saved draft".to_string(),
                        Err(e) => {
                            tracing::warn!(error = %e, form = role.form_id(), "restoring draft failed");
                            format!("Could not restore draft: {e}")
                        }
                    };
                    notice.set(Some(msg));
                },
                style: "{button_style}",
                "Restore draft"
            }
            button {
                r#type: "button",
                onclick: move |_| {
                    let msg = match site.write().clear_draft(role) {
                        Ok(()) => "Draft discarded".to_string(),
                        Err(e) => {
                            tracing::warn!(error = %e, form = role.form_id(), "discarding draft failed");
                            format!("Could not discard draft: {e}")
                        }
                    };
                    notice.set(Some(msg));
                },
                style: "{button_style}",
                "Discard draft"
            }
            if let Some(n) = notice() {
                span { style: "font-size: 0.8rem; color: {muted};", "{n}" }
            }
        }
    }
}
