//! Theme catalog
//!
//! An immutable, ordered collection of [`ThemeRecord`]s. Declaration order is
//! kept for [`Catalog::all`]; [`Catalog::sorted`] gives the listing order used
//! by pickers (designated default first, then by title).

pub mod builtin;

use crate::color::OklchColor;
use crate::error::{Result, ThemeError};
use crate::font::FontStack;
use crate::identifier::{is_ambiguous_name, ThemeIdentifier, DEFAULT_THEME_NAME};
use crate::mode::Mode;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

pub use builtin::builtin;

/// One installable theme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeRecord {
    /// Unique slug, e.g. `"cosmic-night"`
    pub name: String,
    /// Display label, e.g. `"Cosmic Night"`
    pub title: String,
    pub primary_light: OklchColor,
    pub primary_dark: OklchColor,
    #[serde(alias = "font_sans")]
    pub font_family: FontStack,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ThemeRecord {
    /// Primary color for the given mode.
    pub fn primary(&self, mode: Mode) -> OklchColor {
        match mode {
            Mode::Light => self.primary_light,
            Mode::Dark => self.primary_dark,
        }
    }

    /// Identifier addressing this theme in `mode`.
    pub fn identifier(&self, mode: Mode) -> ThemeIdentifier {
        ThemeIdentifier::new(self.name.clone(), mode)
    }
}

/// TOML layout for an authored catalog.
///
/// ```toml
/// default = "default"
///
/// [[themes]]
/// name = "default"
/// title = "Default"
/// primary_light = "oklch(0.205 0 0)"
/// primary_dark = "oklch(0.922 0 0)"
/// font_sans = "ui-sans-serif, system-ui, sans-serif"
/// ```
#[derive(Debug, Deserialize, Serialize)]
struct CatalogFile {
    #[serde(default = "default_theme_name")]
    default: String,
    themes: Vec<ThemeRecord>,
}

fn default_theme_name() -> String {
    DEFAULT_THEME_NAME.to_string()
}

/// Ordered, read-only set of theme records.
#[derive(Clone, Debug)]
pub struct Catalog {
    records: Vec<ThemeRecord>,
    by_name: FxHashMap<String, usize>,
    /// Indices into `records` in listing order
    sorted: Vec<usize>,
    default_index: usize,
}

impl Catalog {
    /// Build and validate a catalog.
    ///
    /// Fails on an empty list, a malformed or duplicate name, or when
    /// `default_name` is not among the records.
    pub fn new(records: Vec<ThemeRecord>, default_name: &str) -> Result<Self> {
        if records.is_empty() {
            return Err(ThemeError::EmptyCatalog);
        }

        let mut seen = FxHashMap::default();
        for (i, record) in records.iter().enumerate() {
            if !is_valid_name(&record.name) {
                return Err(ThemeError::InvalidName(record.name.clone()));
            }
            if seen.insert(record.name.as_str(), i).is_some() {
                return Err(ThemeError::DuplicateTheme(record.name.clone()));
            }
            if is_ambiguous_name(&record.name) {
                tracing::warn!(
                    "theme name `{}` ends in a mode suffix; the bare name reads as a shorter name plus a mode",
                    record.name
                );
            }
        }
        if !seen.contains_key(default_name) {
            return Err(ThemeError::MissingDefault(default_name.to_string()));
        }

        Ok(Self::assemble(records, default_name))
    }

    /// Load a catalog from TOML (layout in the `CatalogFile` docs).
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(src)?;
        Self::new(file.themes, &file.default)
    }

    /// Serialize to the TOML layout accepted by [`Catalog::from_toml_str`].
    pub fn to_toml_string(&self) -> Result<String> {
        let file = CatalogFile {
            default: self.default_record().name.clone(),
            themes: self.records.clone(),
        };
        Ok(toml::to_string(&file)?)
    }

    /// Index records without validation. `default_name` must be present;
    /// otherwise the first record is treated as the default.
    pub(crate) fn assemble(records: Vec<ThemeRecord>, default_name: &str) -> Self {
        let by_name: FxHashMap<String, usize> = records
            .iter()
            .enumerate()
            .map(|(i, r)| (r.name.clone(), i))
            .collect();
        let default_index = by_name.get(default_name).copied().unwrap_or(0);

        let mut rest: Vec<usize> = (0..records.len()).filter(|&i| i != default_index).collect();
        // sort_by is stable: equal titles keep declaration order
        rest.sort_by(|&a, &b| compare_titles(&records[a].title, &records[b].title));

        let mut sorted = Vec::with_capacity(records.len());
        sorted.push(default_index);
        sorted.extend(rest);

        Self {
            records,
            by_name,
            sorted,
            default_index,
        }
    }

    /// Records in declaration order.
    pub fn all(&self) -> &[ThemeRecord] {
        &self.records
    }

    /// Records in listing order: default first, then by title.
    pub fn sorted(&self) -> impl Iterator<Item = &ThemeRecord> + '_ {
        self.sorted.iter().map(move |&i| &self.records[i])
    }

    /// Exact, case-sensitive lookup by slug.
    pub fn find_by_name(&self, name: &str) -> Option<&ThemeRecord> {
        self.by_name.get(name).map(|&i| &self.records[i])
    }

    /// Lookup with fallback to the default record.
    pub fn find_or_default(&self, name: &str) -> &ThemeRecord {
        self.find_by_name(name)
            .unwrap_or_else(|| self.default_record())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// The designated default record.
    pub fn default_record(&self) -> &ThemeRecord {
        &self.records[self.default_index]
    }

    /// Slugs in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|r| r.name.as_str())
    }

    /// Every `<name>-light` / `<name>-dark` string, two per record.
    pub fn all_identifier_strings(&self) -> Vec<String> {
        self.records
            .iter()
            .flat_map(|r| Mode::ALL.into_iter().map(move |mode| r.identifier(mode).format()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Lowercase slug: `[a-z0-9]+(-[a-z0-9]+)*`.
fn is_valid_name(name: &str) -> bool {
    name.split('-').all(|part| {
        !part.is_empty()
            && part
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    })
}

/// Case-insensitive title order, ties broken by exact comparison.
fn compare_titles(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
