use dioxus::prelude::*;
use eco_core::{Page, Site};
use crate::platform::{self, PlatformStore};
use crate::screens::{BookScreen, ContactScreen, HomeScreen, ReportScreen};
use crate::theme::AppColors;
use crate::widgets::NavBar;

/// Site state shared by every component through context.
pub type SiteHandle = Signal<Site<PlatformStore>>;

pub fn use_site() -> SiteHandle {
    use_context::<SiteHandle>()
}

#[component]
pub fn App() -> Element {
    let mut site: SiteHandle = use_context_provider(|| Signal::new(platform::boot_site()));
    let mut route = use_signal(|| site.peek().nav().current_route().unwrap_or(Page::Home));

    use_drop(move || {
        if let Ok(mut s) = site.try_write() {
            s.teardown();
        }
    });

    let theme = site.read().theme().current();
    let is_dark = theme.is_dark();
    let root_class = theme.root_class().unwrap_or("");
    let background = AppColors::background(is_dark);
    let on_surface = AppColors::on_surface(is_dark);

    let navigate = move |page: Page| {
        site.write().navigate(page.href());
        route.set(page);
    };

    let current_screen = match route() {
        Page::Home => rsx! { HomeScreen { is_dark, on_navigate: navigate } },
        Page::Report => rsx! { ReportScreen { is_dark } },
        Page::Book => rsx! { BookScreen { is_dark } },
        Page::Contact => rsx! { ContactScreen { is_dark } },
    };

    rsx! {
        div {
            class: "{root_class}",
            style: "font-family: system-ui, sans-serif; min-height: 100vh; background: {background}; color: {on_surface};",
            NavBar { is_dark, on_navigate: navigate }
            {current_screen}
        }
    }
}
