//! Styling attribute hand-off
//!
//! The resolver writes the active identifier into one named attribute on the
//! root of the rendering surface. Theme styles are scoped under a matching
//! attribute selector, e.g. `[data-theme="claude-dark"] { --primary: ... }`.

use crate::identifier::ThemeIdentifier;
use rustc_hash::FxHashMap;
use std::sync::{Arc, RwLock};

/// Root node of whatever the host renders into.
pub trait ThemeSurface: Send + Sync {
    fn set_attribute(&mut self, name: &str, value: &str);

    fn remove_attribute(&mut self, name: &str);
}

/// In-memory root element. Clones share attributes.
#[derive(Clone, Debug, Default)]
pub struct RootElement {
    attributes: Arc<RwLock<FxHashMap<String, String>>>,
}

impl RootElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.read().unwrap().get(name).cloned()
    }
}

impl ThemeSurface for RootElement {
    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes
            .write()
            .unwrap()
            .insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.write().unwrap().remove(name);
    }
}

/// CSS selector scoping the variables of `id`, e.g. `[data-theme="claude-dark"]`.
pub fn attribute_selector(attribute: &str, id: &ThemeIdentifier) -> String {
    format!("[{attribute}=\"{id}\"]")
}
