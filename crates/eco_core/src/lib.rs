//! Eco Management System core: theme, navigation, form validation and
//! persisted preferences. No UI types; the Dioxus frontend drives it.

pub mod banner;
pub mod config;
pub mod error;
pub mod fields;
pub mod form;
pub mod form_cache;
pub mod nav;
pub mod site;
pub mod storage;
pub mod theme;
pub mod validation;

pub use banner::{HideTicket, SuccessBanner};
pub use config::SiteConfig;
pub use error::{CacheError, ConfigError, StorageError, UnknownField};
pub use fields::{FieldId, FormRole, FormValues};
pub use form::{FormController, SubmitOutcome};
pub use form_cache::FormDataCache;
pub use nav::{NavHighlighter, NavLink, Page};
pub use site::Site;
pub use storage::{KeyValueStore, MemoryStore};
#[cfg(not(target_arch = "wasm32"))]
pub use storage::FileStore;
pub use theme::{Theme, ThemeManager};
pub use validation::{FieldMessage, ValidationReport};
