use crate::error::ConfigError;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BANNER_HIDE_MS: u64 = 5000;
pub const DEFAULT_PAGE: &str = "index.html";
pub const THEME_KEY: &str = "theme";
pub const FORM_CACHE_PREFIX: &str = "formData_";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// How long a success banner stays visible.
    pub banner_hide_delay: Duration,
    /// Page identifier used when the location path has no last segment.
    pub default_page: String,
    pub theme_key: String,
    pub form_cache_prefix: String,
    /// Desktop only: directory for the JSON store. `None` uses the platform data dir.
    pub storage_dir: Option<PathBuf>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            banner_hide_delay: Duration::from_millis(DEFAULT_BANNER_HIDE_MS),
            default_page: DEFAULT_PAGE.to_string(),
            theme_key: THEME_KEY.to_string(),
            form_cache_prefix: FORM_CACHE_PREFIX.to_string(),
            storage_dir: None,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds a config from an arbitrary variable source; unset variables keep defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("ECO_BANNER_HIDE_MS") {
            let ms: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                var: "ECO_BANNER_HIDE_MS",
                value: raw.clone(),
            })?;
            config.banner_hide_delay = Duration::from_millis(ms);
        }

        if let Some(page) = lookup("ECO_DEFAULT_PAGE") {
            let page = page.trim();
            if page.is_empty() {
                return Err(ConfigError::Empty { var: "ECO_DEFAULT_PAGE" });
            }
            config.default_page = page.to_string();
        }

        if let Some(dir) = lookup("ECO_STORAGE_DIR") {
            if !dir.trim().is_empty() {
                config.storage_dir = Some(PathBuf::from(dir.trim()));
            }
        }

        Ok(config)
    }
}
