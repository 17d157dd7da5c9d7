//! Application state for one page lifetime: storage, theme, navigation and
//! the three forms. Built by [`Site::init`], released by [`Site::teardown`].

use crate::banner::HideTicket;
use crate::config::SiteConfig;
use crate::error::CacheError;
use crate::fields::FormRole;
use crate::form::{FormController, SubmitOutcome};
use crate::form_cache::FormDataCache;
use crate::nav::NavHighlighter;
use crate::storage::KeyValueStore;
use crate::theme::{Theme, ThemeManager};
use chrono::NaiveDate;
use tracing::info;

pub struct Site<S> {
    store: S,
    config: SiteConfig,
    theme: ThemeManager,
    nav: NavHighlighter,
    cache: FormDataCache,
    report: FormController,
    booking: FormController,
    contact: FormController,
}

impl<S: KeyValueStore> Site<S> {
    /// Page-ready: applies the saved theme and highlights the link for `path`.
    pub fn init(mut store: S, config: SiteConfig, path: &str) -> Self {
        let mut theme = ThemeManager::new(config.theme_key.clone());
        theme.initialize(&mut store);

        let mut nav = NavHighlighter::new(config.default_page.clone());
        nav.set_active(path);

        info!(theme = theme.current().as_str(), page = nav.current(), "site initialized");

        Self {
            store,
            cache: FormDataCache::new(config.form_cache_prefix.clone()),
            config,
            theme,
            nav,
            report: FormController::new(FormRole::Report),
            booking: FormController::new(FormRole::Booking),
            contact: FormController::new(FormRole::Contact),
        }
    }

    /// Cancels every pending banner hide.
    pub fn teardown(&mut self) {
        for role in FormRole::ALL {
            self.form_mut(role).banner_mut().cancel_pending();
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn theme(&self) -> &ThemeManager {
        &self.theme
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme.toggle(&mut self.store)
    }

    pub fn nav(&self) -> &NavHighlighter {
        &self.nav
    }

    /// Re-highlights navigation for a new location path.
    pub fn navigate(&mut self, path: &str) -> String {
        self.nav.set_active(path).to_string()
    }

    pub fn form(&self, role: FormRole) -> &FormController {
        match role {
            FormRole::Report => &self.report,
            FormRole::Booking => &self.booking,
            FormRole::Contact => &self.contact,
        }
    }

    pub fn form_mut(&mut self, role: FormRole) -> &mut FormController {
        match role {
            FormRole::Report => &mut self.report,
            FormRole::Booking => &mut self.booking,
            FormRole::Contact => &mut self.contact,
        }
    }

    pub fn submit(&mut self, role: FormRole, today: NaiveDate) -> SubmitOutcome {
        self.form_mut(role).submit(today)
    }

    pub fn hide_banner(&mut self, role: FormRole, ticket: HideTicket) -> bool {
        self.form_mut(role).hide_banner(ticket)
    }

    pub fn save_draft(&mut self, role: FormRole) -> Result<(), CacheError> {
        let values = match role {
            FormRole::Report => self.report.values(),
            FormRole::Booking => self.booking.values(),
            FormRole::Contact => self.contact.values(),
        };
        self.cache.save(&mut self.store, values)
    }

    /// Returns `false` when no draft was saved for `role`.
    pub fn restore_draft(&mut self, role: FormRole) -> Result<bool, CacheError> {
        let values = match role {
            FormRole::Report => self.report.values_mut(),
            FormRole::Booking => self.booking.values_mut(),
            FormRole::Contact => self.contact.values_mut(),
        };
        self.cache.load(&self.store, values)
    }

    pub fn clear_draft(&mut self, role: FormRole) -> Result<(), CacheError> {
        self.cache.clear(&mut self.store, role)
    }
}
