use dioxus::prelude::*;
use eco_core::Page;
use crate::app::use_site;
use crate::theme::AppColors;
use crate::widgets::ThemeToggle;

#[derive(Clone, PartialEq)]
struct NavItem {
    href: String,
    label: String,
    class: &'static str,
    style: String,
    page: Option<Page>,
}

#[component]
pub fn NavBar(is_dark: bool, on_navigate: EventHandler<Page>) -> Element {
    let site = use_site();
    let primary = AppColors::primary(is_dark);
    let surface = AppColors::surface(is_dark);
    let on_surface = AppColors::on_surface(is_dark);

    let items: Vec<NavItem> = site
        .read()
        .nav()
        .links()
        .iter()
        .map(|link| {
            let (background, color) = if link.is_active() { (primary, surface) } else { ("transparent", on_surface) };
            NavItem {
                href: link.href.clone(),
                label: link.label.clone(),
                class: if link.is_active() { "active" } else { "" },
                style: format!(
                    "padding: 6px 12px; border-radius: 8px; text-decoration: none; background: {background}; color: {color};"
                ),
                page: Page::from_href(&link.href),
            }
        })
        .collect();

    rsx! {
        nav {
            class: "navbar",
            style: "display: flex; align-items: center; gap: 16px; padding: 12px 24px; height: 40px; background: {surface}; border-bottom: 2px solid {primary};",
            div { class: "logo", style: "font-weight: 700; color: {primary};", "🌿 Eco Management System" }
            ul {
                class: "nav-links",
                style: "display: flex; gap: 8px; list-style: none; margin: 0; padding: 0; flex: 1;",
                for item in items {
                    li { key: "{item.href}",
                        a {
                            href: "{item.href}",
                            class: "{item.class}",
                            style: "{item.style}",
                            onclick: move |ev: MouseEvent| {
                                ev.prevent_default();
                                if let Some(page) = item.page {
                                    on_navigate.call(page);
                                }
                            },
                            "{item.label}"
                        }
                    }
                }
            }
            ThemeToggle { is_dark }
        }
    }
}
