use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn Card(is_dark: bool, children: Element) -> Element {
    let surface = AppColors::surface(is_dark);
    let shadow = if is_dark { "none" } else { "0 2px 8px rgba(27,42,28,0.12)" };
    rsx! {
        div {
            class: "card",
            style: "background: {surface}; border-radius: 12px; padding: {spacing::CARD_PADDING}; margin: {spacing::SM} 0; box-shadow: {shadow};",
            {children}
        }
    }
}
