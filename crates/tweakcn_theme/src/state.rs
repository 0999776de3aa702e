//! Global theme state singleton
//!
//! Hosts with a single UI tree can install one [`ThemeResolver`] process-wide
//! and reach it from any widget through [`ThemeState::get`]. All mutations
//! still go through the one resolver behind a lock, so last write wins.
//!
//! Subscribers and the redraw callback run after the lock is released, so
//! they may read the state back.

use crate::catalog::{builtin, ThemeRecord};
use crate::color::OklchColor;
use crate::config::PickerConfig;
use crate::identifier::ThemeIdentifier;
use crate::mode::Mode;
use crate::resolver::{SubscriptionId, ThemeResolver};
use crate::storage::MemoryStorage;
use crate::surface::RootElement;
use std::sync::atomic::{AtomicBool, Ordering};
use slotmap::SlotMap;
use std::sync::{Arc, Mutex, OnceLock, RwLock};

/// Global theme state instance
static THEME_STATE: OnceLock<ThemeState> = OnceLock::new();

/// Global redraw callback - set by the app layer to trigger UI updates
static REDRAW_CALLBACK: Mutex<Option<fn()>> = Mutex::new(None);

/// Set the redraw callback function
///
/// Called after every committed theme change so the host can repaint.
pub fn set_redraw_callback(callback: fn()) {
    *REDRAW_CALLBACK.lock().unwrap() = Some(callback);
}

fn trigger_redraw() {
    if let Some(callback) = *REDRAW_CALLBACK.lock().unwrap() {
        callback();
    }
}

type SharedSubscriber = Arc<dyn Fn(&ThemeIdentifier) + Send + Sync>;

/// Process-wide wrapper around one [`ThemeResolver`].
pub struct ThemeState {
    resolver: RwLock<ThemeResolver>,

    /// Change callbacks, kept outside the resolver lock
    subscribers: RwLock<SlotMap<SubscriptionId, SharedSubscriber>>,

    /// Set on every change, cleared by the host after repainting
    needs_repaint: AtomicBool,
}

impl ThemeState {
    /// Install `resolver` globally and run its startup transition.
    ///
    /// Safe to call multiple times; the first call wins. Returns the
    /// identifier active after initialization.
    pub fn init(mut resolver: ThemeResolver, system_prefers_dark: bool) -> ThemeIdentifier {
        if let Some(state) = THEME_STATE.get() {
            return state.current();
        }

        resolver.initialize(system_prefers_dark);
        let state = ThemeState {
            resolver: RwLock::new(resolver),
            subscribers: RwLock::new(SlotMap::with_key()),
            needs_repaint: AtomicBool::new(true),
        };
        let _ = THEME_STATE.set(state);
        Self::get().current()
    }

    /// Initialize with the built-in catalog, default config and in-memory
    /// storage and surface.
    pub fn init_default(system_prefers_dark: bool) -> ThemeIdentifier {
        let resolver = ThemeResolver::new(
            builtin(),
            PickerConfig::default(),
            MemoryStorage::new(),
            RootElement::new(),
        );
        Self::init(resolver, system_prefers_dark)
    }

    /// Get the global theme state instance
    pub fn get() -> &'static ThemeState {
        THEME_STATE
            .get()
            .expect("ThemeState not initialized. Call ThemeState::init() at app startup.")
    }

    /// Try to get the global theme state (returns None if not initialized)
    pub fn try_get() -> Option<&'static ThemeState> {
        THEME_STATE.get()
    }

    // ========== Reads ==========

    pub fn current(&self) -> ThemeIdentifier {
        self.resolver.read().unwrap().current().clone()
    }

    pub fn mode(&self) -> Mode {
        self.resolver.read().unwrap().mode()
    }

    pub fn current_record(&self) -> ThemeRecord {
        self.resolver.read().unwrap().current_record().clone()
    }

    pub fn resolve_primary_color(&self, id: &ThemeIdentifier) -> OklchColor {
        self.resolver.read().unwrap().resolve_primary_color(id)
    }

    /// Run `f` with shared access to the resolver.
    pub fn with_resolver<R>(&self, f: impl FnOnce(&ThemeResolver) -> R) -> R {
        let resolver = self.resolver.read().unwrap();
        f(&*resolver)
    }

    // ========== Mutations ==========

    pub fn set_theme(&self, id: ThemeIdentifier) {
        self.mutate(|r| r.set_theme(id));
    }

    pub fn toggle_mode(&self) {
        self.mutate(ThemeResolver::toggle_mode);
    }

    pub fn set_mode(&self, mode: Mode) {
        self.mutate(|r| r.set_mode(mode));
    }

    pub fn switch_theme_name(&self, name: &str) {
        self.mutate(|r| r.switch_theme_name(name));
    }

    /// Register a change callback.
    ///
    /// Callbacks run once the change is committed and the lock is released.
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn(&ThemeIdentifier) + Send + Sync + 'static,
    {
        self.subscribers.write().unwrap().insert(Arc::new(callback))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.subscribers.write().unwrap().remove(id).is_some()
    }

    fn mutate(&self, f: impl FnOnce(&mut ThemeResolver)) {
        let current = {
            let mut resolver = self.resolver.write().unwrap();
            f(&mut *resolver);
            resolver.current().clone()
        };
        self.needs_repaint.store(true, Ordering::SeqCst);

        let callbacks: Vec<SharedSubscriber> =
            self.subscribers.read().unwrap().values().cloned().collect();
        for callback in callbacks {
            callback(&current);
        }
        trigger_redraw();
    }

    // ========== Dirty Flags ==========

    /// Check if theme changes require repaint
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint.load(Ordering::SeqCst)
    }

    /// Clear the repaint flag
    pub fn clear_repaint(&self) {
        self.needs_repaint.store(false, Ordering::SeqCst);
    }
}
