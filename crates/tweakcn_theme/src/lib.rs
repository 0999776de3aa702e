//! tweakcn Theme Core
//!
//! Theme identity and resolution for the tweakcn theme picker: the catalog of
//! shadcn/ui themes, the `"<name>-<mode>"` identifier codec, and the resolver
//! that owns the active selection.
//!
//! # Quick Start
//!
//! ```rust
//! use tweakcn_theme::{builtin, MemoryStorage, PickerConfig, RootElement, ThemeResolver};
//!
//! let root = RootElement::new();
//! let mut resolver = ThemeResolver::new(
//!     builtin(),
//!     PickerConfig::default(),
//!     MemoryStorage::new(),
//!     root.clone(),
//! );
//!
//! // Before first paint
//! let id = resolver.initialize(true);
//! assert_eq!(id.to_string(), "default-dark");
//!
//! resolver.switch_theme_name("claude");
//! resolver.toggle_mode();
//! assert_eq!(root.attribute("data-theme").as_deref(), Some("claude-light"));
//! ```
//!
//! # Architecture
//!
//! - [`Catalog`]: immutable, ordered [`ThemeRecord`]s with typed lookup
//! - [`ThemeIdentifier`]: `(name, Mode)` pair; the string form only exists at
//!   the storage and attribute boundary
//! - [`ThemeResolver`]: sole writer of the active selection; mirrors it to a
//!   [`SelectionStorage`] and a [`ThemeSurface`], then notifies subscribers
//! - [`ThemeState`]: optional process-global resolver for single-tree hosts
//!
//! Every resolver operation is total. Unknown names resolve to the default
//! record's values, and storage failures are logged rather than returned.

pub mod catalog;
pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod identifier;
pub mod mode;
pub mod registry;
pub mod resolver;
pub mod state;
pub mod storage;
pub mod surface;

// Re-export commonly used types
pub use catalog::{builtin, Catalog, ThemeRecord};
pub use color::OklchColor;
pub use config::PickerConfig;
pub use error::{Result, ThemeError};
pub use font::FontStack;
pub use identifier::{split_identifier, ThemeIdentifier, DEFAULT_THEME_NAME};
pub use mode::{opposite_mode, Mode};
pub use registry::{install_command, Framework, PackageManager, Registry};
pub use resolver::{SubscriptionId, ThemeResolver};
pub use state::{set_redraw_callback, ThemeState};
pub use storage::{FileStorage, MemoryStorage, SelectionStorage};
pub use surface::{attribute_selector, RootElement, ThemeSurface};
