//! The display language and its persisted preference flag.

use std::{cell::RefCell, collections::HashMap};

use crate::error::Error;

/// The key used for the language preference in the store.
pub const PREFERENCE_KEY: &str = "lang";

/// A supported display language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Lang {
    /// English
    #[default]
    En,
    /// Bahasa Indonesia
    Id,
}

impl Lang {
    /// All supported languages, in display order.
    pub fn all() -> &'static [Lang] {
        &[Lang::En, Lang::Id]
    }

    /// The code stored in the preference flag and written to `<html lang>` .
    pub fn code(self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Id => "id",
        }
    }

    /// Parse a language code.
    ///
    /// Only the exact codes returned by `code` are accepted.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Lang::En),
            "id" => Some(Lang::Id),
            _ => None,
        }
    }

    /// The other language.
    pub fn toggle(self) -> Self {
        match self {
            Lang::En => Lang::Id,
            Lang::Id => Lang::En,
        }
    }
}

impl std::fmt::Display for Lang {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A string key-value store that survives page reloads.
pub trait PreferenceStore {
    /// Read a value.
    fn get(&self, key: &str) -> Result<Option<String>, Error>;
    /// Write a value.
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
}

/// An in-memory store, used outside the browser.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the saved language.
///
/// Falls back to the default language when nothing is saved,
/// the store fails, or the saved code is not supported.
pub fn restore_lang(store: &dyn PreferenceStore) -> Lang {
    match store.get(PREFERENCE_KEY) {
        Ok(Some(code)) => Lang::from_code(&code).unwrap_or_else(|| {
            log::warn!("Ignoring unsupported saved language {:?}", code);
            Lang::default()
        }),
        Ok(None) => Lang::default(),
        Err(err) => {
            log::warn!("{}", err);
            Lang::default()
        }
    }
}

/// Save the language.
pub fn persist_lang(store: &dyn PreferenceStore, lang: Lang) -> Result<(), Error> {
    log::debug!("Saving language preference {}", lang);
    store.set(PREFERENCE_KEY, lang.code())
}
