//! Font family fallback stacks

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// CSS generic family keywords. These are never quoted.
const GENERIC_FAMILIES: &[&str] = &[
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
    "ui-serif",
    "ui-sans-serif",
    "ui-monospace",
    "ui-rounded",
    "math",
    "emoji",
];

/// Ordered typeface fallback list, primary family first.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FontStack {
    families: Vec<String>,
}

impl FontStack {
    /// Build from family names. An empty list becomes `sans-serif`.
    pub fn new<S: Into<String>>(families: impl IntoIterator<Item = S>) -> Self {
        let mut families: Vec<String> = families.into_iter().map(Into::into).collect();
        if families.is_empty() {
            families.push("sans-serif".to_string());
        }
        Self { families }
    }

    /// Parse a CSS `font-family` value such as `"Plus Jakarta Sans, sans-serif"`.
    ///
    /// Surrounding quotes on individual families are stripped.
    pub fn parse(src: &str) -> Result<Self, ThemeError> {
        let families: Vec<String> = src
            .split(',')
            .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\''))
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();

        if families.is_empty() {
            return Err(ThemeError::InvalidFontStack(src.to_string()));
        }
        Ok(Self { families })
    }

    pub fn families(&self) -> &[String] {
        &self.families
    }

    /// The first (preferred) family.
    pub fn primary(&self) -> &str {
        &self.families[0]
    }

    /// First family that is a concrete typeface rather than a generic keyword.
    pub fn named_family(&self) -> Option<&str> {
        self.families
            .iter()
            .map(String::as_str)
            .find(|f| !is_generic_family(f))
    }

    /// CSS value with multi-word families quoted, e.g. `"DM Sans", sans-serif`.
    pub fn to_css(&self) -> String {
        self.families
            .iter()
            .map(|f| {
                if f.contains(' ') && !is_generic_family(f) {
                    format!("\"{f}\"")
                } else {
                    f.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn is_generic_family(family: &str) -> bool {
    GENERIC_FAMILIES.contains(&family)
}

/// Plain comma-joined form, as authored.
impl Display for FontStack {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.families.join(", "))
    }
}

impl FromStr for FontStack {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for FontStack {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<FontStack> for String {
    fn from(stack: FontStack) -> Self {
        stack.to_string()
    }
}
