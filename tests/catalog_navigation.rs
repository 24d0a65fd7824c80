// SPDX-License-Identifier: MPL-2.0
//! End-to-end checks over the bundled catalog: menu navigation, the icon
//! directory and settings persistence working together.

use std::fs;
use std::time::Duration;
use stylebook::app::config::{self, Config};
use stylebook::catalog::{Catalog, Panel};
use stylebook::icon_directory::{CopyDelay, IconDirectoryState};
use stylebook::navigation::NavigationState;
use stylebook::ui::theming::ThemeMode;
use tempfile::tempdir;

fn catalog() -> Catalog {
    Catalog::embedded().expect("bundled catalog is valid")
}

#[test]
fn every_leaf_resolves_to_a_panel() {
    let catalog = catalog();
    for label in catalog.menu().leaf_labels() {
        assert!(catalog.panel(label).is_some(), "{label} has no panel");
    }
    assert!(matches!(catalog.panel("Colors"), Some(Panel::Colors)));
    assert!(matches!(catalog.panel("Icons"), Some(Panel::Icons)));
    assert!(matches!(catalog.panel("Buttons"), Some(Panel::Guideline(_))));
}

#[test]
fn selecting_a_child_expands_only_its_parent() {
    let catalog = catalog();
    let menu = catalog.menu();
    let mut nav = NavigationState::new(menu);

    assert!(!nav.is_expanded(menu, "Components"));
    assert!(nav.select(menu, "Loader"));
    assert!(nav.is_active("Loader"));
    assert!(nav.is_expanded(menu, "Components"));
    assert!(!nav.is_expanded(menu, "Colors"));

    let view = nav.projection(menu);
    let components = view
        .entries
        .iter()
        .find(|entry| entry.label == "Components")
        .expect("Components entry");
    assert!(components.expanded);
    assert_eq!(
        components
            .children
            .iter()
            .filter(|child| child.active)
            .map(|child| child.label)
            .collect::<Vec<_>>(),
        vec!["Loader"]
    );

    assert!(nav.select(menu, "Icons"));
    assert!(!nav.is_expanded(menu, "Components"));
}

#[test]
fn icon_directory_searches_sorts_and_copies() {
    let catalog = catalog();
    let icons = catalog.icons();
    let mut directory = IconDirectoryState::new(CopyDelay::default());

    assert_eq!(
        directory.view(icons).names(),
        vec![
            "affiliate",
            "bell",
            "chart-area-line",
            "filter",
            "help-circle",
            "info-circle",
            "map-pin",
            "trash",
        ]
    );

    directory.set_search_query("TABLE");
    assert_eq!(directory.view(icons).names(), vec!["filter"]);

    directory.set_search_query("e");
    directory.toggle_sort();
    let names = directory.view(icons).names();
    assert_eq!(names.first(), Some(&"trash"));

    let first = directory.copy(icons, "trash").expect("trash is shown");
    let second = directory.copy(icons, "bell").expect("bell is shown");
    assert_eq!(second.delay(), Duration::from_millis(1500));

    assert!(!directory.expire(&first));
    assert_eq!(directory.copied_name(), Some("bell"));
    assert!(directory.expire(&second));
    assert_eq!(directory.copied_name(), None);
}

#[test]
fn settings_round_trip_through_disk() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("settings.toml");

    let mut cfg = Config::default();
    cfg.general.theme_mode = ThemeMode::Dark;
    cfg.general.default_section = Some("Badge".into());
    cfg.icons.copy_ack_ms = Some(2_000);
    config::save_to_path(&cfg, &path).expect("save");

    let loaded = config::load_from_path(&path).expect("load");
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.icons.copy_delay().value(), 2_000);

    let catalog = catalog();
    let nav = NavigationState::with_initial(
        catalog.menu(),
        loaded.general.default_section.as_deref().unwrap_or_default(),
    );
    assert_eq!(nav.active_label(), "Badge");
}

#[test]
fn catalog_directory_overrides_single_files() {
    let dir = tempdir().expect("temp dir");
    fs::write(
        dir.path().join("icons.toml"),
        r#"
[[icons]]
name = "bell"
glyph = "bell"
use_case = "Only icon"
"#,
    )
    .expect("write icons");

    let catalog = Catalog::load(Some(dir.path())).expect("override is valid");
    assert_eq!(catalog.icons().len(), 1);
    assert_eq!(catalog.menu().default_label(), "Colors");
}

#[test]
fn broken_catalog_override_is_reported() {
    let dir = tempdir().expect("temp dir");
    fs::write(dir.path().join("menu.toml"), "default = [").expect("write menu");

    assert!(Catalog::load(Some(dir.path())).is_err());
}
