use pretty_assertions::assert_eq;
use std::collections::HashSet;
use tweakcn_theme::{builtin, Catalog, Mode, OklchColor, ThemeError, ThemeIdentifier};

#[test]
fn builtin_catalog_has_all_registry_themes() {
    let catalog = builtin();
    assert_eq!(catalog.len(), 42);
    let names: Vec<&str> = catalog.names().take(3).collect();
    assert_eq!(names, vec!["default", "amber-minimal", "bold-tech"]);
}

#[test]
fn all_is_stable_across_calls() {
    let a: Vec<String> = builtin().all().iter().map(|r| r.name.clone()).collect();
    let b: Vec<String> = builtin().all().iter().map(|r| r.name.clone()).collect();
    assert_eq!(a, b);
}

#[test]
fn identifier_strings_cover_every_theme_and_mode() {
    let catalog = builtin();
    let strings = catalog.all_identifier_strings();
    assert_eq!(strings.len(), 2 * catalog.len());

    let distinct: HashSet<&String> = strings.iter().collect();
    assert_eq!(distinct.len(), strings.len());

    for s in &strings {
        let id: ThemeIdentifier = s.parse().unwrap();
        assert!(catalog.contains(id.name()), "{s} should name a catalog theme");
        assert_eq!(&id.format(), s);
    }
    assert_eq!(&strings[0], "default-light");
    assert_eq!(&strings[1], "default-dark");
}

#[test]
fn sorted_pins_default_then_orders_by_title() {
    let catalog = builtin();
    let titles: Vec<&str> = catalog.sorted().map(|r| r.title.as_str()).collect();
    assert_eq!(titles[0], "Default");
    assert_eq!(&titles[1..4], &["Amber Minimal", "Bold Tech", "Bubblegum"]);

    let rest = &titles[1..];
    for pair in rest.windows(2) {
        assert!(
            pair[0].to_lowercase() <= pair[1].to_lowercase(),
            "{} should sort before {}",
            pair[0],
            pair[1]
        );
    }
    assert_eq!(titles.len(), catalog.len());
}

#[test]
fn default_stays_first_for_any_insertion_order() {
    let base = builtin().all().to_vec();
    let n = base.len();

    let mut orders: Vec<Vec<usize>> = Vec::new();
    orders.push((0..n).rev().collect());
    for shift in [1, 7, 20, n - 1] {
        orders.push((0..n).map(|i| (i + shift) % n).collect());
    }
    // interleave odds then evens
    orders.push((0..n).filter(|i| i % 2 == 1).chain((0..n).filter(|i| i % 2 == 0)).collect());

    let expected: Vec<String> = builtin().sorted().map(|r| r.name.clone()).collect();
    for order in orders {
        let records = order.iter().map(|&i| base[i].clone()).collect();
        let catalog = Catalog::new(records, "default").unwrap();
        let sorted: Vec<String> = catalog.sorted().map(|r| r.name.clone()).collect();
        assert_eq!(sorted[0], "default");
        assert_eq!(sorted, expected);
    }
}

#[test]
fn find_by_name_is_exact_and_case_sensitive() {
    let catalog = builtin();
    let claude = catalog.find_by_name("claude").unwrap();
    assert_eq!(claude.title, "Claude");
    assert_eq!(claude.primary(Mode::Light), OklchColor::new(0.62, 0.14, 39.04));
    assert_eq!(claude.primary(Mode::Dark), OklchColor::new(0.67, 0.13, 38.76));

    assert!(catalog.find_by_name("Claude").is_none());
    assert!(catalog.find_by_name("claude-dark").is_none());
    assert_eq!(catalog.find_or_default("Claude").name, "default");
}

#[test]
fn toml_catalog_round_trip() {
    let src = r#"
default = "paper"

[[themes]]
name = "paper"
title = "Paper"
primary_light = "oklch(0.62 0.08 65.54)"
primary_dark = "oklch(0.73 0.06 66.7)"
font_sans = "Libre Baskerville, serif"
category = "retro"

[[themes]]
name = "ink"
title = "Ink"
primary_light = "oklch(0 0 0)"
primary_dark = "oklch(1 0 0)"
font_sans = "Geist Mono, monospace"
description = "Black on white"
"#;

    let catalog = Catalog::from_toml_str(src).unwrap();
    assert_eq!(catalog.default_record().name, "paper");
    assert_eq!(catalog.find_by_name("paper").unwrap().category.as_deref(), Some("retro"));
    assert_eq!(
        catalog.find_by_name("ink").unwrap().font_family.primary(),
        "Geist Mono"
    );

    let again = Catalog::from_toml_str(&catalog.to_toml_string().unwrap()).unwrap();
    assert_eq!(again.all(), catalog.all());
}

#[test]
fn toml_catalog_validation_errors() {
    let bad_color = r##"
[[themes]]
name = "default"
title = "Default"
primary_light = "#ff0000"
primary_dark = "oklch(1 0 0)"
font_sans = "Inter"
"##;
    assert!(matches!(
        Catalog::from_toml_str(bad_color),
        Err(ThemeError::TomlDecode(_))
    ));

    let no_default = r#"
[[themes]]
name = "ink"
title = "Ink"
primary_light = "oklch(0 0 0)"
primary_dark = "oklch(1 0 0)"
font_sans = "Inter"
"#;
    assert!(matches!(
        Catalog::from_toml_str(no_default),
        Err(ThemeError::MissingDefault(_))
    ));
}
