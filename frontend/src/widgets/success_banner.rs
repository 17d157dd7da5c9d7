use dioxus::prelude::*;
use eco_core::FormRole;
use crate::app::use_site;
use crate::theme::AppColors;

/// Element id of a form's success banner, used for scrolling.
pub fn banner_element_id(role: FormRole) -> String {
    format!("{}-success", role.container_id())
}

/// First child of each form. Renders nothing until the first valid submission.
#[component]
pub fn SuccessBanner(role: FormRole, is_dark: bool) -> Element {
    let site = use_site();
    let (text, visible) = {
        let s = site.read();
        let banner = s.form(role).banner();
        (banner.text().map(str::to_string), banner.is_visible())
    };
    let Some(text) = text else {
        return rsx! {};
    };

    let id = banner_element_id(role);
    let class = if visible { "success-message show" } else { "success-message" };
    let display = if visible { "block" } else { "none" };
    let color = AppColors::success(is_dark);
    let tint = if is_dark { "rgba(165,214,167,0.12)" } else { "#E8F5E9" };

    rsx! {
        div {
            id: "{id}",
            class: "{class}",
            role: "status",
            style: "display: {display}; padding: 12px 16px; margin-bottom: 16px; border-radius: 8px; border-left: 4px solid {color}; background: {tint}; color: {color}; font-weight: 500;",
            "{text}"
        }
    }
}
