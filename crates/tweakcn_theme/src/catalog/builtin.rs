//! Built-in theme catalog
//!
//! The tweakcn themes shipped by the registry, in registry order with
//! `default` first. Primaries are the `--primary` values of each theme's
//! light and dark variants.

use super::{Catalog, ThemeRecord};
use crate::color::OklchColor;
use crate::font::FontStack;
use crate::identifier::DEFAULT_THEME_NAME;
use std::sync::{Arc, OnceLock};

static BUILTIN: OnceLock<Arc<Catalog>> = OnceLock::new();

struct Preset {
    name: &'static str,
    title: &'static str,
    light: OklchColor,
    dark: OklchColor,
    font: &'static [&'static str],
}

const PRESETS: &[Preset] = &[
    Preset {
        name: "default",
        title: "Default",
        light: OklchColor::new(0.2050, 0.0, 0.0),
        dark: OklchColor::new(0.9220, 0.0, 0.0),
        font: &["ui-sans-serif", "system-ui", "sans-serif"],
    },
    Preset {
        name: "amber-minimal",
        title: "Amber Minimal",
        light: OklchColor::new(0.77, 0.16, 70.08),
        dark: OklchColor::new(0.77, 0.16, 70.08),
        font: &["Inter", "sans-serif"],
    },
    Preset {
        name: "bold-tech",
        title: "Bold Tech",
        light: OklchColor::new(0.61, 0.22, 292.72),
        dark: OklchColor::new(0.61, 0.22, 292.72),
        font: &["Roboto", "sans-serif"],
    },
    Preset {
        name: "bubblegum",
        title: "Bubblegum",
        light: OklchColor::new(0.62, 0.18, 348.14),
        dark: OklchColor::new(0.92, 0.08, 87.67),
        font: &["Poppins", "sans-serif"],
    },
    Preset {
        name: "caffeine",
        title: "Caffeine",
        light: OklchColor::new(0.43, 0.04, 41.99),
        dark: OklchColor::new(0.92, 0.05, 66.17),
        font: &["system-ui", "sans-serif"],
    },
    Preset {
        name: "candyland",
        title: "Candyland",
        light: OklchColor::new(0.87, 0.07, 7.09),
        dark: OklchColor::new(0.8, 0.14, 349.23),
        font: &["Poppins", "sans-serif"],
    },
    Preset {
        name: "catppuccin",
        title: "Catppuccin",
        light: OklchColor::new(0.55, 0.25, 297.02),
        dark: OklchColor::new(0.79, 0.12, 304.77),
        font: &["Montserrat", "sans-serif"],
    },
    Preset {
        name: "claude",
        title: "Claude",
        light: OklchColor::new(0.62, 0.14, 39.04),
        dark: OklchColor::new(0.67, 0.13, 38.76),
        font: &["system-ui", "sans-serif"],
    },
    Preset {
        name: "claymorphism",
        title: "Claymorphism",
        light: OklchColor::new(0.59, 0.2, 277.12),
        dark: OklchColor::new(0.68, 0.16, 276.93),
        font: &["Plus Jakarta Sans", "sans-serif"],
    },
    Preset {
        name: "clean-slate",
        title: "Clean Slate",
        light: OklchColor::new(0.59, 0.2, 277.12),
        dark: OklchColor::new(0.68, 0.16, 276.93),
        font: &["Inter", "sans-serif"],
    },
    Preset {
        name: "cosmic-night",
        title: "Cosmic Night",
        light: OklchColor::new(0.54, 0.18, 288.03),
        dark: OklchColor::new(0.72, 0.16, 290.40),
        font: &["Inter", "sans-serif"],
    },
    Preset {
        name: "cyberpunk",
        title: "Cyberpunk",
        light: OklchColor::new(0.67, 0.29, 341.41),
        dark: OklchColor::new(0.67, 0.29, 341.41),
        font: &["Outfit", "sans-serif"],
    },
    Preset {
        name: "doom-64",
        title: "Doom 64",
        light: OklchColor::new(0.5, 0.19, 27.48),
        dark: OklchColor::new(0.61, 0.21, 27.03),
        font: &["Oxanium", "sans-serif"],
    },
    Preset {
        name: "elegant-luxury",
        title: "Elegant Luxury",
        light: OklchColor::new(0.47, 0.15, 24.94),
        dark: OklchColor::new(0.51, 0.19, 27.52),
        font: &["Poppins", "sans-serif"],
    },
    Preset {
        name: "graphite",
        title: "Graphite",
        light: OklchColor::new(0.49, 0.0, 0.0),
        dark: OklchColor::new(0.71, 0.0, 0.0),
        font: &["Inter", "sans-serif"],
    },
    Preset {
        name: "kodama-grove",
        title: "Kodama Grove",
        light: OklchColor::new(0.67, 0.11, 118.91),
        dark: OklchColor::new(0.68, 0.06, 132.45),
        font: &["Merriweather", "serif"],
    },
    Preset {
        name: "midnight-bloom",
        title: "Midnight Bloom",
        light: OklchColor::new(0.57, 0.20, 283.08),
        dark: OklchColor::new(0.57, 0.20, 283.08),
        font: &["Montserrat", "sans-serif"],
    },
    Preset {
        name: "mocha-mousse",
        title: "Mocha Mousse",
        light: OklchColor::new(0.61, 0.06, 44.36),
        dark: OklchColor::new(0.73, 0.05, 52.33),
        font: &["DM Sans", "sans-serif"],
    },
    Preset {
        name: "modern-minimal",
        title: "Modern Minimal",
        light: OklchColor::new(0.62, 0.19, 259.81),
        dark: OklchColor::new(0.62, 0.19, 259.81),
        font: &["Inter", "sans-serif"],
    },
    Preset {
        name: "mono",
        title: "Mono",
        light: OklchColor::new(0.56, 0.0, 0.0),
        dark: OklchColor::new(0.56, 0.0, 0.0),
        font: &["Geist Mono", "monospace"],
    },
    Preset {
        name: "nature",
        title: "Nature",
        light: OklchColor::new(0.52, 0.13, 144.17),
        dark: OklchColor::new(0.67, 0.16, 144.21),
        font: &["Montserrat", "sans-serif"],
    },
    Preset {
        name: "neo-brutalism",
        title: "Neo Brutalism",
        light: OklchColor::new(0.65, 0.24, 26.97),
        dark: OklchColor::new(0.70, 0.19, 23.19),
        font: &["DM Sans", "sans-serif"],
    },
    Preset {
        name: "northern-lights",
        title: "Northern Lights",
        light: OklchColor::new(0.65, 0.15, 150.31),
        dark: OklchColor::new(0.65, 0.15, 150.31),
        font: &["Plus Jakarta Sans", "sans-serif"],
    },
    Preset {
        name: "ocean-breeze",
        title: "Ocean Breeze",
        light: OklchColor::new(0.72, 0.19, 149.58),
        dark: OklchColor::new(0.77, 0.15, 163.22),
        font: &["DM Sans", "sans-serif"],
    },
    Preset {
        name: "pastel-dreams",
        title: "Pastel Dreams",
        light: OklchColor::new(0.71, 0.16, 293.54),
        dark: OklchColor::new(0.79, 0.12, 295.75),
        font: &["Open Sans", "sans-serif"],
    },
    Preset {
        name: "perpetuity",
        title: "Perpetuity",
        light: OklchColor::new(0.56, 0.09, 203.28),
        dark: OklchColor::new(0.85, 0.13, 195.04),
        font: &["Courier New", "monospace"],
    },
    Preset {
        name: "quantum-rose",
        title: "Quantum Rose",
        light: OklchColor::new(0.6, 0.24, 0.13),
        dark: OklchColor::new(0.75, 0.23, 332.02),
        font: &["Poppins", "sans-serif"],
    },
    Preset {
        name: "retro-arcade",
        title: "Retro Arcade",
        light: OklchColor::new(0.59, 0.2, 355.89),
        dark: OklchColor::new(0.59, 0.2, 355.89),
        font: &["Outfit", "sans-serif"],
    },
    Preset {
        name: "solar-dusk",
        title: "Solar Dusk",
        light: OklchColor::new(0.56, 0.15, 49.0),
        dark: OklchColor::new(0.7, 0.19, 47.6),
        font: &["Oxanium", "sans-serif"],
    },
    Preset {
        name: "starry-night",
        title: "Starry Night",
        light: OklchColor::new(0.48, 0.12, 263.38),
        dark: OklchColor::new(0.48, 0.12, 263.38),
        font: &["Libre Baskerville", "serif"],
    },
    Preset {
        name: "supabase",
        title: "Supabase",
        light: OklchColor::new(0.83, 0.13, 160.91),
        dark: OklchColor::new(0.44, 0.1, 156.76),
        font: &["Outfit", "sans-serif"],
    },
    Preset {
        name: "sunset-horizon",
        title: "Sunset Horizon",
        light: OklchColor::new(0.74, 0.16, 34.71),
        dark: OklchColor::new(0.74, 0.16, 34.71),
        font: &["Montserrat", "sans-serif"],
    },
    Preset {
        name: "t3-chat",
        title: "T3 Chat",
        light: OklchColor::new(0.53, 0.14, 355.2),
        dark: OklchColor::new(0.46, 0.19, 4.1),
        font: &["system-ui", "sans-serif"],
    },
    Preset {
        name: "tangerine",
        title: "Tangerine",
        light: OklchColor::new(0.64, 0.17, 36.44),
        dark: OklchColor::new(0.64, 0.17, 36.44),
        font: &["Inter", "sans-serif"],
    },
    Preset {
        name: "twitter",
        title: "Twitter",
        light: OklchColor::new(0.67, 0.16, 245.0),
        dark: OklchColor::new(0.67, 0.16, 245.01),
        font: &["Open Sans", "sans-serif"],
    },
    Preset {
        name: "vercel",
        title: "Vercel",
        light: OklchColor::new(0.0, 0.0, 0.0),
        dark: OklchColor::new(1.0, 0.0, 0.0),
        font: &["Geist", "sans-serif"],
    },
    Preset {
        name: "vintage-paper",
        title: "Vintage Paper",
        light: OklchColor::new(0.62, 0.08, 65.54),
        dark: OklchColor::new(0.73, 0.06, 66.7),
        font: &["Libre Baskerville", "serif"],
    },
    Preset {
        name: "twitch",
        title: "Twitch",
        light: OklchColor::new(0.54, 0.24, 292.0),
        dark: OklchColor::new(0.60, 0.22, 292.0),
        font: &["Inter", "sans-serif"],
    },
    Preset {
        name: "kick",
        title: "Kick",
        light: OklchColor::new(0.75, 0.26, 135.0),
        dark: OklchColor::new(0.83, 0.28, 135.0),
        font: &["Inter", "sans-serif"],
    },
    Preset {
        name: "spotify",
        title: "Spotify",
        light: OklchColor::new(0.64, 0.20, 155.0),
        dark: OklchColor::new(0.68, 0.20, 155.0),
        font: &["Montserrat", "sans-serif"],
    },
    Preset {
        name: "stripe",
        title: "Stripe",
        light: OklchColor::new(0.55, 0.24, 280.0),
        dark: OklchColor::new(0.65, 0.22, 280.0),
        font: &["system-ui", "sans-serif"],
    },
    Preset {
        name: "github",
        title: "GitHub",
        light: OklchColor::new(0.52, 0.16, 145.0),
        dark: OklchColor::new(0.62, 0.16, 145.0),
        font: &["system-ui", "sans-serif"],
    },
];

/// The shared built-in catalog, built on first access.
pub fn builtin() -> Arc<Catalog> {
    let catalog = BUILTIN.get_or_init(|| {
        let records = PRESETS
            .iter()
            .map(|p| ThemeRecord {
                name: p.name.to_string(),
                title: p.title.to_string(),
                primary_light: p.light,
                primary_dark: p.dark,
                font_family: FontStack::new(p.font.iter().copied()),
                category: None,
                description: None,
            })
            .collect();
        Arc::new(Catalog::assemble(records, DEFAULT_THEME_NAME))
    });
    Arc::clone(catalog)
}

/// Number of built-in themes.
pub fn builtin_len() -> usize {
    PRESETS.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_passes_validation() {
        let records = builtin().all().to_vec();
        let rebuilt = Catalog::new(records, DEFAULT_THEME_NAME).unwrap();
        assert_eq!(rebuilt.len(), builtin_len());
    }

    #[test]
    fn builtin_starts_with_default() {
        assert_eq!(builtin().all()[0].name, DEFAULT_THEME_NAME);
        assert_eq!(builtin().default_record().title, "Default");
    }
}
