use dioxus::prelude::*;
use crate::app::use_site;
use crate::platform;
use crate::theme::AppColors;

#[component]
pub fn ThemeToggle(is_dark: bool) -> Element {
    let mut site = use_site();
    let label = site.read().theme().toggle_label();
    let primary = AppColors::primary(is_dark);

    rsx! {
        button {
            id: "themeToggle",
            class: "theme-toggle",
            onclick: move |_| {
                let theme = site.write().toggle_theme();
                platform::apply_root_class(theme);
            },
            style: "padding: 6px 14px; border-radius: 16px; border: 1px solid {primary}; background: transparent; color: {primary}; cursor: pointer;",
            "{label}"
        }
    }
}
