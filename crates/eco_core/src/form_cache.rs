//! Draft storage for form fields under `<prefix><formId>`. Whole-record
//! replace, no expiry.

use crate::error::CacheError;
use crate::fields::{FormRole, FormValues};
use crate::storage::KeyValueStore;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormDataCache {
    prefix: String,
}

impl FormDataCache {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    pub fn key(&self, role: FormRole) -> String {
        format!("{}{}", self.prefix, role.form_id())
    }

    pub fn save<S: KeyValueStore + ?Sized>(&self, store: &mut S, values: &FormValues) -> Result<(), CacheError> {
        let json = serde_json::to_string(&values.snapshot())?;
        store.set(&self.key(values.role()), &json)?;
        debug!(form = values.role().form_id(), "form draft saved");
        Ok(())
    }

    /// Repopulates `values` from the saved draft. Names the form does not
    /// have are skipped. Returns `false` when nothing was saved.
    pub fn load<S: KeyValueStore + ?Sized>(&self, store: &S, values: &mut FormValues) -> Result<bool, CacheError> {
        let Some(raw) = store.get(&self.key(values.role()))? else {
            return Ok(false);
        };
        let saved: BTreeMap<String, String> = serde_json::from_str(&raw)?;
        for (name, value) in saved {
            if let Err(e) = values.set_by_name(&name, value) {
                debug!(error = %e, "skipping cached field");
            }
        }
        Ok(true)
    }

    pub fn clear<S: KeyValueStore + ?Sized>(&self, store: &mut S, role: FormRole) -> Result<(), CacheError> {
        store.remove(&self.key(role))?;
        Ok(())
    }
}
