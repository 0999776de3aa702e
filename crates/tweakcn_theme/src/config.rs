//! Picker configuration

use crate::error::Result;
use crate::identifier::ThemeIdentifier;
use crate::registry::Registry;
use serde::{Deserialize, Serialize};

/// Storage key used by the theme provider components.
pub const DEFAULT_STORAGE_KEY: &str = "tweakcn-theme";

/// Root attribute carrying the active identifier.
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";

/// Where the registry JSON files are served from.
pub const DEFAULT_REGISTRY_URL: &str = "https://tweakcn-picker.vercel.app";

/// Settings shared by the resolver and registry helpers.
///
/// Every field has a default, so a partial TOML file is fine:
///
/// ```toml
/// storage_key = "my-app-theme"
/// fallback = "claude-light"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Persisted storage key
    pub storage_key: String,
    /// Root attribute name
    pub attribute: String,
    /// Identifier used when a raw value fails to parse
    pub fallback: ThemeIdentifier,
    /// Registry base URL, without trailing slash
    pub registry_url: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            attribute: DEFAULT_ATTRIBUTE.to_string(),
            fallback: ThemeIdentifier::fallback(),
            registry_url: DEFAULT_REGISTRY_URL.to_string(),
        }
    }
}

impl PickerConfig {
    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// Registry URL builder for `registry_url`.
    pub fn registry(&self) -> Registry {
        Registry::new(self.registry_url.clone())
    }

    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = attribute.into();
        self
    }

    pub fn with_fallback(mut self, fallback: ThemeIdentifier) -> Self {
        self.fallback = fallback;
        self
    }
}
