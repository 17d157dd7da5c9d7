use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn PageBackground(is_dark: bool, children: Element) -> Element {
    let bg = AppColors::background(is_dark);
    let accent = if is_dark { "#1A2E1C" } else { "#DCEDC8" };
    rsx! {
        main {
            style: "min-height: calc(100vh - 64px); padding: {spacing::LG}; background: linear-gradient(to bottom, {accent}, {bg});",
            div { style: "max-width: {spacing::CONTENT_WIDTH}; margin: 0 auto;",
                {children}
            }
        }
    }
}
