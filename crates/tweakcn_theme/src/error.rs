//! Error types for the theme core

use thiserror::Error;

/// Errors raised at configuration boundaries.
///
/// The runtime operations of [`ThemeResolver`](crate::ThemeResolver) never
/// return these; they only surface when loading catalogs or config, strictly
/// parsing user input, or talking to a storage backend directly.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A color literal was not of the form `oklch(L C H)`
    #[error("invalid oklch color `{0}`")]
    InvalidColor(String),

    /// A font stack had no usable family names
    #[error("invalid font stack `{0}`")]
    InvalidFontStack(String),

    /// An identifier lacked a `-light` / `-dark` suffix or a theme name
    #[error("invalid theme identifier `{0}` (expected `<name>-light` or `<name>-dark`)")]
    InvalidIdentifier(String),

    /// A mode was neither `light` nor `dark`
    #[error("invalid mode `{0}` (expected `light` or `dark`)")]
    InvalidMode(String),

    /// A theme name is not a lowercase hyphenated slug
    #[error("invalid theme name `{0}`")]
    InvalidName(String),

    /// Two records share the same name
    #[error("duplicate theme name `{0}`")]
    DuplicateTheme(String),

    /// A catalog must contain at least one record
    #[error("catalog is empty")]
    EmptyCatalog,

    /// The designated default theme is missing from the catalog
    #[error("default theme `{0}` not found in catalog")]
    MissingDefault(String),

    /// Unrecognized framework id
    #[error("unknown framework `{0}`")]
    UnknownFramework(String),

    /// Unrecognized package manager id
    #[error("unknown package manager `{0}`")]
    UnknownPackageManager(String),

    /// Storage backend I/O failure
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error(transparent)]
    TomlDecode(#[from] toml::de::Error),

    #[error(transparent)]
    TomlEncode(#[from] toml::ser::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
