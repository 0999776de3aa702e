//! Registry install URLs and commands
//!
//! Themes and the per-framework theme system are published as shadcn
//! registry items. This module only builds the URLs and the copyable
//! `shadcn add` commands; fetching is the consumer's CLI's job.

use crate::error::ThemeError;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Frameworks with a dedicated theme-system registry item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Framework {
    #[default]
    NextJs,
    Vite,
    Remix,
    Astro,
}

impl Framework {
    /// Registry path segment.
    pub fn id(self) -> &'static str {
        match self {
            Self::NextJs => "nextjs",
            Self::Vite => "vite",
            Self::Remix => "remix",
            Self::Astro => "astro",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::NextJs => "Next.js",
            Self::Vite => "Vite",
            Self::Remix => "Remix",
            Self::Astro => "Astro",
        }
    }

    pub fn all() -> &'static [Framework] {
        const FRAMEWORKS: [Framework; 4] = [
            Framework::NextJs,
            Framework::Vite,
            Framework::Remix,
            Framework::Astro,
        ];
        &FRAMEWORKS
    }
}

impl Display for Framework {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Framework {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|fw| fw.id() == s)
            .ok_or_else(|| ThemeError::UnknownFramework(s.to_string()))
    }
}

/// Package managers offered in the install tabs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PackageManager {
    #[default]
    Pnpm,
    Npm,
    Bun,
    Yarn,
}

impl PackageManager {
    pub fn id(self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Npm => "npx",
            Self::Bun => "bun",
            Self::Yarn => "yarn",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm",
            Self::Npm => "npm",
            Self::Bun => "bun",
            Self::Yarn => "yarn",
        }
    }

    /// Command prefix that takes a registry URL.
    pub fn add_command(self) -> &'static str {
        match self {
            Self::Pnpm => "pnpm dlx shadcn@latest add",
            // yarn tab has always emitted the npx form
            Self::Npm | Self::Yarn => "npx shadcn@latest add",
            Self::Bun => "bunx --bun shadcn@latest add",
        }
    }

    pub fn all() -> &'static [PackageManager] {
        const MANAGERS: [PackageManager; 4] = [
            PackageManager::Pnpm,
            PackageManager::Npm,
            PackageManager::Bun,
            PackageManager::Yarn,
        ];
        &MANAGERS
    }
}

impl Display for PackageManager {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PackageManager {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|pm| pm.id() == s || pm.label() == s)
            .ok_or_else(|| ThemeError::UnknownPackageManager(s.to_string()))
    }
}

/// URL builder rooted at a registry host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry {
    base_url: String,
}

impl Registry {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Registry item for a single theme, e.g. `.../r/theme-claude.json`.
    pub fn theme_url(&self, theme_name: &str) -> String {
        format!("{}/r/theme-{}.json", self.base_url, theme_name)
    }

    /// Provider + switcher + toggle bundle for a framework.
    pub fn theme_system_url(&self, framework: Framework) -> String {
        format!("{}/r/{}/theme-system.json", self.base_url, framework.id())
    }

    pub fn install_theme(&self, manager: PackageManager, theme_name: &str) -> String {
        install_command(manager, &self.theme_url(theme_name))
    }

    pub fn install_theme_system(&self, manager: PackageManager, framework: Framework) -> String {
        install_command(manager, &self.theme_system_url(framework))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_REGISTRY_URL)
    }
}

/// Full copyable command, e.g. `pnpm dlx shadcn@latest add <url>`.
pub fn install_command(manager: PackageManager, url: &str) -> String {
    format!("{} {}", manager.add_command(), url)
}
