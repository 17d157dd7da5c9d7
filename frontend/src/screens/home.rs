use dioxus::prelude::*;
use eco_core::Page;
use crate::theme::AppColors;
use crate::widgets::{Card, PageBackground};

const SERVICES: [(Page, &str, &str); 3] = [
    (
        Page::Report,
        "🗑️",
        "Spotted an overflowing bin? Tell us where and how bad it is; the nearest vehicle is notified.",
    ),
    (
        Page::Book,
        "🚛",
        "Book a garbage vehicle for a date and time that suits you, for household or bulk waste.",
    ),
    (
        Page::Contact,
        "✉️",
        "Questions about pickups, recycling or complaints? Send us a message.",
    ),
];

#[component]
pub fn HomeScreen(is_dark: bool, on_navigate: EventHandler<Page>) -> Element {
    let primary = AppColors::primary(is_dark);
    let on_surface = AppColors::on_surface(is_dark);

    rsx! {
        PageBackground { is_dark,
            section { class: "hero", style: "text-align: center; margin-bottom: 24px;",
                div { style: "font-size: 48px;", "🌍" }
                h1 { style: "font-size: 1.8rem; color: {primary}; margin: 12px 0 8px;", "Cleaner streets, together" }
                p { style: "color: {on_surface}; opacity: 0.8;",
                    "Report garbage, book collection vehicles and reach the municipal waste team from one place."
                }
            }
            for (page, icon, blurb) in SERVICES {
                Card { is_dark,
                    div { style: "display: flex; gap: 16px; align-items: center;",
                        div { style: "font-size: 32px;", "{icon}" }
                        div { style: "flex: 1;",
                            h2 { style: "font-size: 1.1rem; margin: 0 0 4px; color: {on_surface};", "{page.label()}" }
                            p { style: "margin: 0; color: {on_surface}; opacity: 0.8; font-size: 0.9rem;", "{blurb}" }
                        }
                        button {
                            onclick: move |_| on_navigate.call(page),
                            style: "padding: 8px 16px; border-radius: 8px; border: none; background: {primary}; color: white; cursor: pointer;",
                            "Open"
                        }
                    }
                }
            }
        }
    }
}
