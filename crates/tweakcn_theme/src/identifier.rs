//! Theme identifier codec
//!
//! A theme identifier addresses one concrete (theme, mode) pair. On the wire
//! and in storage it is the string `"<theme-name>-<mode>"`, e.g.
//! `"catppuccin-dark"`. Everything inside the crate works on the structured
//! [`ThemeIdentifier`]; the string form only appears at the boundary.
//!
//! The mode is recovered by a pure suffix match. Full identifiers always
//! round-trip, even for a name like `after-dark` (`after-dark-light` splits
//! into `after-dark` and light). Only a bare name with no mode suffix is
//! ambiguous: a stored `"after-dark"` reads as `after` in dark mode. No
//! built-in theme ends in a mode suffix; [`Catalog`](crate::Catalog) logs a
//! warning when one is added.

use crate::error::ThemeError;
use crate::mode::Mode;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Name of the designated default theme.
pub const DEFAULT_THEME_NAME: &str = "default";

/// Mode used by the parse fallback.
pub const DEFAULT_MODE: Mode = Mode::Dark;

const LIGHT_SUFFIX: &str = "-light";
const DARK_SUFFIX: &str = "-dark";

/// A `(theme name, mode)` pair.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ThemeIdentifier {
    name: String,
    mode: Mode,
}

impl ThemeIdentifier {
    pub fn new(name: impl Into<String>, mode: Mode) -> Self {
        Self {
            name: name.into(),
            mode,
        }
    }

    /// The fixed fallback identifier, `default-dark`.
    pub fn fallback() -> Self {
        Self::new(DEFAULT_THEME_NAME, DEFAULT_MODE)
    }

    /// Total parse.
    ///
    /// A `-dark` suffix wins over `-light`; anything without either suffix
    /// (including `None` and `""`) becomes [`ThemeIdentifier::fallback`].
    pub fn parse(raw: Option<&str>) -> Self {
        Self::parse_or(raw, &Self::fallback())
    }

    /// Total parse with a caller-supplied fallback.
    pub fn parse_or(raw: Option<&str>, fallback: &ThemeIdentifier) -> Self {
        match raw.and_then(split_identifier) {
            Some((name, mode)) => Self::new(name, mode),
            None => {
                tracing::trace!("unrecognized theme identifier {:?}, using {}", raw, fallback);
                fallback.clone()
            }
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Serialize to `"<name>-<mode>"`.
    pub fn format(&self) -> String {
        format!("{}-{}", self.name, self.mode.as_str())
    }

    /// Same theme, other mode.
    pub fn toggled(&self) -> Self {
        self.with_mode(self.mode.toggle())
    }

    pub fn with_mode(&self, mode: Mode) -> Self {
        Self::new(self.name.clone(), mode)
    }

    /// Same mode, other theme.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self::new(name, self.mode)
    }
}

/// Split `raw` into its theme name and mode by suffix.
///
/// Returns `None` when neither suffix is present. The name may be empty
/// (`"-dark"` splits into `("", Dark)`).
pub fn split_identifier(raw: &str) -> Option<(&str, Mode)> {
    if let Some(name) = raw.strip_suffix(DARK_SUFFIX) {
        Some((name, Mode::Dark))
    } else {
        raw.strip_suffix(LIGHT_SUFFIX)
            .map(|name| (name, Mode::Light))
    }
}

/// Whether a bare theme name, with no mode appended, splits as a shorter
/// name plus a mode.
pub fn is_ambiguous_name(name: &str) -> bool {
    name.ends_with(DARK_SUFFIX) || name.ends_with(LIGHT_SUFFIX)
}

impl Default for ThemeIdentifier {
    fn default() -> Self {
        Self::fallback()
    }
}

impl Display for ThemeIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.name, self.mode)
    }
}

/// Strict parse: rejects missing suffixes and empty names.
impl FromStr for ThemeIdentifier {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match split_identifier(s) {
            Some((name, mode)) if !name.is_empty() => Ok(Self::new(name, mode)),
            _ => Err(ThemeError::InvalidIdentifier(s.to_string())),
        }
    }
}

impl TryFrom<String> for ThemeIdentifier {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ThemeIdentifier> for String {
    fn from(id: ThemeIdentifier) -> Self {
        id.format()
    }
}
