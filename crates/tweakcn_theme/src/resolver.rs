//! Active theme resolver
//!
//! [`ThemeResolver`] owns the active selection and is its only writer. Every
//! committed change goes through [`ThemeResolver::set_theme`], which mirrors
//! the identifier to storage, writes the root attribute, and notifies
//! subscribers, in that order.
//!
//! Theme name and mode are independent axes: any (name, mode) pair can be
//! reached from any other in one `set_theme`.

use crate::catalog::{Catalog, ThemeRecord};
use crate::color::OklchColor;
use crate::config::PickerConfig;
use crate::font::FontStack;
use crate::identifier::{split_identifier, ThemeIdentifier};
use crate::mode::Mode;
use crate::storage::SelectionStorage;
use crate::surface::{attribute_selector, ThemeSurface};
use slotmap::{new_key_type, SlotMap};
use std::sync::Arc;
use tracing::{debug, warn};

new_key_type! {
    /// Handle returned by [`ThemeResolver::subscribe`]
    pub struct SubscriptionId;
}

/// Called with the new identifier after each committed change.
pub type Subscriber = Box<dyn Fn(&ThemeIdentifier) + Send + Sync>;

/// Single owning store for the active theme identifier.
pub struct ThemeResolver {
    catalog: Arc<Catalog>,
    config: PickerConfig,
    current: ThemeIdentifier,
    storage: Box<dyn SelectionStorage>,
    surface: Box<dyn ThemeSurface>,
    subscribers: SlotMap<SubscriptionId, Subscriber>,
}

impl ThemeResolver {
    /// Create a resolver. The selection starts at the configured fallback
    /// and nothing is applied until [`initialize`](Self::initialize) or
    /// [`set_theme`](Self::set_theme).
    pub fn new(
        catalog: Arc<Catalog>,
        config: PickerConfig,
        storage: impl SelectionStorage + 'static,
        surface: impl ThemeSurface + 'static,
    ) -> Self {
        let current = config.fallback.clone();
        Self {
            catalog,
            config,
            current,
            storage: Box::new(storage),
            surface: Box::new(surface),
            subscribers: SlotMap::with_key(),
        }
    }

    /// Compute the startup identifier without touching any state.
    ///
    /// A stored value is used when it carries a mode suffix and names a theme
    /// in the catalog. Otherwise the default theme is used, in dark mode if
    /// the host prefers dark and light mode if not.
    pub fn resolve_initial(&self, stored: Option<&str>, system_prefers_dark: bool) -> ThemeIdentifier {
        if let Some((name, mode)) = stored.and_then(split_identifier) {
            if self.catalog.contains(name) {
                return ThemeIdentifier::new(name, mode);
            }
            debug!("stored theme `{}` is not in the catalog, ignoring", name);
        }

        ThemeIdentifier::new(
            self.catalog.default_record().name.clone(),
            Mode::from_prefers_dark(system_prefers_dark),
        )
    }

    /// Startup transition: read storage, resolve, and apply to the surface.
    ///
    /// Runs synchronously so the host can call it before its first paint.
    /// Storage is read but not written.
    pub fn initialize(&mut self, system_prefers_dark: bool) -> ThemeIdentifier {
        let stored = match self.storage.load(&self.config.storage_key) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("failed to read stored theme: {}", e);
                None
            }
        };

        let id = self.resolve_initial(stored.as_deref(), system_prefers_dark);
        debug!(
            "ThemeResolver::initialize - stored={:?} prefers_dark={} -> {}",
            stored, system_prefers_dark, id
        );

        self.current = id.clone();
        self.apply();
        self.notify();
        id
    }

    /// Overwrite the active selection.
    ///
    /// Names missing from the catalog are accepted; they simply match no
    /// theme styles.
    pub fn set_theme(&mut self, id: ThemeIdentifier) {
        if !self.catalog.contains(id.name()) {
            warn!("theme `{}` is not in the catalog; no styles will match", id.name());
        }
        debug!("ThemeResolver::set_theme - {} -> {}", self.current, id);

        self.current = id;
        self.persist();
        self.apply();
        self.notify();
    }

    /// Parse a raw identifier string (total parse) and set it.
    pub fn set_theme_str(&mut self, raw: &str) {
        let id = ThemeIdentifier::parse_or(Some(raw), &self.config.fallback);
        self.set_theme(id);
    }

    /// Flip the mode, keeping the theme name.
    pub fn toggle_mode(&mut self) {
        let id = self.current.toggled();
        self.set_theme(id);
    }

    /// Set the mode, keeping the theme name.
    pub fn set_mode(&mut self, mode: Mode) {
        let id = self.current.with_mode(mode);
        self.set_theme(id);
    }

    /// Switch the theme name, keeping the mode.
    pub fn switch_theme_name(&mut self, name: &str) {
        let id = self.current.with_name(name);
        self.set_theme(id);
    }

    pub fn current(&self) -> &ThemeIdentifier {
        &self.current
    }

    pub fn mode(&self) -> Mode {
        self.current.mode()
    }

    /// Record for the active theme, or the default record if it is unknown.
    pub fn current_record(&self) -> &ThemeRecord {
        self.catalog.find_or_default(self.current.name())
    }

    /// Primary color for `id`, falling back to the default record.
    pub fn resolve_primary_color(&self, id: &ThemeIdentifier) -> OklchColor {
        self.catalog.find_or_default(id.name()).primary(id.mode())
    }

    /// Font stack for `id`, falling back to the default record.
    pub fn resolve_font_stack(&self, id: &ThemeIdentifier) -> &FontStack {
        &self.catalog.find_or_default(id.name()).font_family
    }

    /// Selector scoping the active theme's styles.
    pub fn current_selector(&self) -> String {
        attribute_selector(&self.config.attribute, &self.current)
    }

    /// Register a change callback.
    ///
    /// Callbacks run inside the mutation and must not call back into this
    /// resolver.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: Fn(&ThemeIdentifier) + Send + Sync + 'static,
    {
        self.subscribers.insert(Box::new(callback))
    }

    /// Remove a callback. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(id).is_some()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    fn persist(&mut self) {
        let value = self.current.format();
        if let Err(e) = self.storage.store(&self.config.storage_key, &value) {
            warn!("failed to persist theme `{}`: {}", value, e);
        }
    }

    fn apply(&mut self) {
        self.surface
            .set_attribute(&self.config.attribute, &self.current.format());
    }

    fn notify(&self) {
        for callback in self.subscribers.values() {
            callback(&self.current);
        }
    }
}

impl std::fmt::Debug for ThemeResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeResolver")
            .field("current", &self.current)
            .field("config", &self.config)
            .field("themes", &self.catalog.len())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use crate::storage::MemoryStorage;
    use crate::surface::RootElement;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn resolver() -> ThemeResolver {
        ThemeResolver::new(
            builtin(),
            PickerConfig::default(),
            MemoryStorage::new(),
            RootElement::new(),
        )
    }

    #[test]
    fn stored_value_without_suffix_uses_system_preference() {
        let r = resolver();
        assert_eq!(
            r.resolve_initial(Some("claude"), false),
            ThemeIdentifier::new("default", Mode::Light)
        );
        assert_eq!(
            r.resolve_initial(Some("nonexistent-light"), true),
            ThemeIdentifier::new("default", Mode::Dark)
        );
    }

    #[test]
    fn unsubscribed_callbacks_stop_firing() {
        let mut r = resolver();
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let sub = r.subscribe(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        r.toggle_mode();
        assert!(r.unsubscribe(sub));
        r.toggle_mode();

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(!r.unsubscribe(sub));
    }

    #[test]
    fn set_theme_str_falls_back_on_garbage() {
        let mut r = resolver();
        r.set_theme_str("garbage");
        assert_eq!(r.current(), &ThemeIdentifier::fallback());
    }
}
