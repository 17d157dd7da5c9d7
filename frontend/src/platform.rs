//! Host glue: which store backs the site, where the page path comes from,
//! document class and scrolling, and the banner timer.

use eco_core::{KeyValueStore, MemoryStore, Site, SiteConfig, Theme};
use std::time::Duration;

pub type PlatformStore = Box<dyn KeyValueStore>;

/// Builds the site for this page: config, store, saved theme, active nav link.
pub fn boot_site() -> Site<PlatformStore> {
    let config = load_config();
    let store = open_store(&config);
    let site = Site::init(store, config, &current_path());
    apply_root_class(site.theme().current());
    site
}

/// Today's date in the user's local time zone.
pub fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(target_arch = "wasm32")]
fn load_config() -> SiteConfig {
    SiteConfig::default()
}

#[cfg(not(target_arch = "wasm32"))]
fn load_config() -> SiteConfig {
    dotenv::dotenv().ok();
    SiteConfig::from_env().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "invalid ECO_* setting, using defaults");
        SiteConfig::default()
    })
}

#[cfg(target_arch = "wasm32")]
fn open_store(_config: &SiteConfig) -> PlatformStore {
    match web::LocalStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "localStorage unavailable, preferences will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_store(config: &SiteConfig) -> PlatformStore {
    let opened = match &config.storage_dir {
        Some(dir) => eco_core::FileStore::open(dir),
        None => eco_core::FileStore::open_default(),
    };
    match opened {
        Ok(store) => {
            tracing::info!(path = %store.path().display(), "using file store");
            Box::new(store)
        }
        Err(e) => {
            tracing::warn!(error = %e, "file store unavailable, preferences will not persist");
            Box::new(MemoryStore::new())
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Desktop has no location bar; the site starts on the default page.
#[cfg(not(target_arch = "wasm32"))]
pub fn current_path() -> String {
    String::new()
}

/// Sets or clears the dark class on `<html>`. The app root carries the same class,
/// so on desktop this is a no-op.
#[cfg(target_arch = "wasm32")]
pub fn apply_root_class(theme: Theme) {
    if let Some(html) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class = eco_core::theme::DARK_THEME_CLASS;
        let result = if theme.is_dark() {
            html.class_list().add_1(class)
        } else {
            html.class_list().remove_1(class)
        };
        if let Err(e) = result {
            tracing::debug!(error = ?e, "could not update document theme class");
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn apply_root_class(_theme: Theme) {}

#[cfg(target_arch = "wasm32")]
pub fn scroll_into_view(element_id: &str) {
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(element_id))
    {
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        opts.set_block(web_sys::ScrollLogicalPosition::Center);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn scroll_into_view(_element_id: &str) {}

#[cfg(target_arch = "wasm32")]
pub async fn sleep(delay: Duration) {
    let ms = delay.as_millis().min(i32::MAX as u128) as i32;
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        }
    });
    let _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep(delay: Duration) {
    tokio::time::sleep(delay).await;
}

#[cfg(target_arch = "wasm32")]
mod web {
    use eco_core::{KeyValueStore, StorageError};

    /// `window.localStorage`, scoped to the site origin.
    pub struct LocalStore {
        storage: web_sys::Storage,
    }

    fn js_error(e: wasm_bindgen::JsValue) -> StorageError {
        StorageError::Unavailable(format!("{e:?}"))
    }

    impl LocalStore {
        pub fn open() -> Result<Self, StorageError> {
            let window = web_sys::window()
                .ok_or_else(|| StorageError::Unavailable("no window".to_string()))?;
            let storage = window
                .local_storage()
                .map_err(js_error)?
                .ok_or_else(|| StorageError::Unavailable("localStorage disabled".to_string()))?;
            Ok(Self { storage })
        }
    }

    impl KeyValueStore for LocalStore {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.storage.get_item(key).map_err(js_error)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            self.storage.set_item(key, value).map_err(js_error)
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            self.storage.remove_item(key).map_err(js_error)
        }
    }
}
