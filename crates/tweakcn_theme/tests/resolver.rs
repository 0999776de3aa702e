use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use tweakcn_theme::{
    builtin, opposite_mode, FileStorage, MemoryStorage, Mode, OklchColor, PickerConfig,
    RootElement, SelectionStorage, ThemeError, ThemeIdentifier, ThemeResolver,
};

const KEY: &str = "tweakcn-theme";
const ATTR: &str = "data-theme";

fn resolver_with(storage: MemoryStorage, root: RootElement) -> ThemeResolver {
    ThemeResolver::new(builtin(), PickerConfig::default(), storage, root)
}

fn id(name: &str, mode: Mode) -> ThemeIdentifier {
    ThemeIdentifier::new(name, mode)
}

#[test]
fn first_visit_follows_dark_system_preference() {
    let root = RootElement::new();
    let mut resolver = resolver_with(MemoryStorage::new(), root.clone());

    assert_eq!(resolver.initialize(true), id("default", Mode::Dark));
    assert_eq!(root.attribute(ATTR).as_deref(), Some("default-dark"));
}

#[test]
fn first_visit_follows_light_system_preference() {
    let storage = MemoryStorage::new();
    let mut resolver = resolver_with(storage.clone(), RootElement::new());

    assert_eq!(resolver.initialize(false), id("default", Mode::Light));
    // startup does not write storage
    assert_eq!(storage.get(KEY), None);
}

#[test]
fn returning_visitor_ignores_system_preference() {
    for prefers_dark in [true, false] {
        let storage = MemoryStorage::with_entry(KEY, "claude-light");
        let mut resolver = resolver_with(storage, RootElement::new());
        assert_eq!(resolver.initialize(prefers_dark), id("claude", Mode::Light));
    }
}

#[test]
fn unknown_or_malformed_stored_value_is_replaced() {
    for stored in ["garbage", "nonexistent-dark", "", "claude"] {
        let storage = MemoryStorage::with_entry(KEY, stored);
        let mut resolver = resolver_with(storage, RootElement::new());
        assert_eq!(
            resolver.initialize(false),
            id("default", Mode::Light),
            "stored={stored:?}"
        );
    }
}

#[test]
fn toggle_from_stored_state_persists_opposite_mode() {
    let storage = MemoryStorage::with_entry(KEY, "claude-light");
    let root = RootElement::new();
    let mut resolver = resolver_with(storage.clone(), root.clone());
    resolver.initialize(false);

    resolver.toggle_mode();

    assert_eq!(resolver.current(), &id("claude", Mode::Dark));
    assert_eq!(storage.get(KEY).as_deref(), Some("claude-dark"));
    assert_eq!(root.attribute(ATTR).as_deref(), Some("claude-dark"));
}

#[test]
fn axis_mutations_commute() {
    let mut a = resolver_with(MemoryStorage::new(), RootElement::new());
    a.set_theme(id("catppuccin", Mode::Light));
    a.switch_theme_name("vercel");
    a.toggle_mode();

    let mut b = resolver_with(MemoryStorage::new(), RootElement::new());
    b.set_theme(id("catppuccin", Mode::Light));
    b.toggle_mode();
    b.switch_theme_name("vercel");

    assert_eq!(a.current(), &id("vercel", Mode::Dark));
    assert_eq!(a.current(), b.current());
}

#[test]
fn set_mode_and_switch_name_preserve_the_other_axis() {
    let mut resolver = resolver_with(MemoryStorage::new(), RootElement::new());
    resolver.set_theme(id("nature", Mode::Dark));

    resolver.set_mode(Mode::Light);
    assert_eq!(resolver.current(), &id("nature", Mode::Light));
    resolver.set_mode(Mode::Light);
    assert_eq!(resolver.current(), &id("nature", Mode::Light));

    resolver.switch_theme_name("mono");
    assert_eq!(resolver.current(), &id("mono", Mode::Light));
}

#[test]
fn last_write_wins() {
    let storage = MemoryStorage::new();
    let mut resolver = resolver_with(storage.clone(), RootElement::new());
    for name in ["claude", "supabase", "twitter"] {
        resolver.set_theme(id(name, Mode::Dark));
    }
    assert_eq!(storage.get(KEY).as_deref(), Some("twitter-dark"));
}

#[test]
fn unknown_theme_is_accepted_silently() {
    let root = RootElement::new();
    let mut resolver = resolver_with(MemoryStorage::new(), root.clone());
    resolver.set_theme(id("nonexistent", Mode::Dark));

    assert_eq!(resolver.current(), &id("nonexistent", Mode::Dark));
    assert_eq!(root.attribute(ATTR).as_deref(), Some("nonexistent-dark"));
    assert_eq!(resolver.current_record().name, "default");
}

#[test]
fn resolve_primary_color_falls_back_to_default_record() {
    let resolver = resolver_with(MemoryStorage::new(), RootElement::new());
    let default = resolver.catalog().default_record().clone();

    assert_eq!(
        resolver.resolve_primary_color(&id("nonexistent", Mode::Dark)),
        default.primary_dark
    );
    assert_eq!(
        resolver.resolve_primary_color(&id("nonexistent", Mode::Light)),
        default.primary_light
    );
    assert_eq!(
        resolver.resolve_primary_color(&id("vercel", Mode::Dark)),
        OklchColor::new(1.0, 0.0, 0.0)
    );
    assert_eq!(
        resolver.resolve_font_stack(&id("nonexistent", Mode::Dark)),
        &default.font_family
    );
}

#[test]
fn subscribers_see_every_committed_change() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut resolver = resolver_with(MemoryStorage::new(), RootElement::new());
    let sink = Arc::clone(&seen);
    resolver.subscribe(move |id| sink.lock().unwrap().push(id.format()));

    resolver.initialize(true);
    resolver.switch_theme_name("claude");
    resolver.toggle_mode();

    assert_eq!(
        *seen.lock().unwrap(),
        vec!["default-dark", "claude-dark", "claude-light"]
    );
}

#[test]
fn custom_config_controls_key_and_attribute() {
    let config = PickerConfig::default()
        .with_storage_key("app-theme")
        .with_attribute("data-color-theme");
    let storage = MemoryStorage::new();
    let root = RootElement::new();
    let mut resolver = ThemeResolver::new(builtin(), config, storage.clone(), root.clone());

    resolver.set_theme(id("doom-64", Mode::Light));

    assert_eq!(storage.get("app-theme").as_deref(), Some("doom-64-light"));
    assert_eq!(root.attribute("data-color-theme").as_deref(), Some("doom-64-light"));
    assert_eq!(
        resolver.current_selector(),
        "[data-color-theme=\"doom-64-light\"]"
    );
}

struct BrokenStorage;

impl SelectionStorage for BrokenStorage {
    fn load(&self, _key: &str) -> tweakcn_theme::Result<Option<String>> {
        Err(ThemeError::Storage(std::io::Error::other("unavailable")))
    }

    fn store(&mut self, _key: &str, _value: &str) -> tweakcn_theme::Result<()> {
        Err(ThemeError::Storage(std::io::Error::other("read-only")))
    }
}

#[test]
fn storage_failures_do_not_break_resolution() {
    let root = RootElement::new();
    let mut resolver = ThemeResolver::new(
        builtin(),
        PickerConfig::default(),
        BrokenStorage,
        root.clone(),
    );

    assert_eq!(resolver.initialize(true), id("default", Mode::Dark));
    resolver.switch_theme_name("kick");
    assert_eq!(root.attribute(ATTR).as_deref(), Some("kick-dark"));
}

#[test]
fn file_storage_restores_across_resolvers() {
    let path = std::env::temp_dir().join(format!(
        "tweakcn-theme-resolver-{}.toml",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);

    {
        let mut first = ThemeResolver::new(
            builtin(),
            PickerConfig::default(),
            FileStorage::new(&path),
            RootElement::new(),
        );
        first.initialize(false);
        first.switch_theme_name("solar-dusk");
    }

    let mut second = ThemeResolver::new(
        builtin(),
        PickerConfig::default(),
        FileStorage::new(&path),
        RootElement::new(),
    );
    assert_eq!(second.initialize(true), id("solar-dusk", Mode::Light));

    let _ = std::fs::remove_file(&path);
}

#[test]
fn codec_round_trip_for_catalog_identifiers() {
    for record in builtin().all() {
        for mode in Mode::ALL {
            let original = record.identifier(mode);
            assert_eq!(ThemeIdentifier::parse(Some(&original.format())), original);
            assert_eq!(opposite_mode(opposite_mode(mode)), mode);
        }
    }
}

#[test]
fn total_parse_returns_fixed_fallback() {
    let fallback = id("default", Mode::Dark);
    assert_eq!(ThemeIdentifier::parse(None), fallback);
    assert_eq!(ThemeIdentifier::parse(Some("")), fallback);
    assert_eq!(ThemeIdentifier::parse(Some("garbage")), fallback);
}
