//! Unit tests for the settings panel

#![allow(clippy::unwrap_used, clippy::panic)]

use tempfile::TempDir;

use crate::config::{Appearance, Preferences};
use crate::config_store::PreferenceStore;
use crate::fonts::{FontFamily, FontWeight};
use crate::render::RefreshHandle;
use crate::settings::{PROJECT_URL, SettingsError, SettingsPanel, version_label};

#[test]
fn controls_mirror_preferences() {
    let store = PreferenceStore::with_defaults();
    store.set_use_am_pm(true).unwrap();
    store.set_appearance(Appearance::System).unwrap();

    let panel = SettingsPanel::open(store).unwrap();
    let state = panel.state();

    assert_eq!(state.appearance, Appearance::System);
    assert!(!state.twenty_four_hours);
    assert!(state.show_seconds);
    assert_eq!(state.font_family, FontFamily::SanFrancisco);
    assert_eq!(state.font_weight, FontWeight::UltraLight);
    assert_eq!(state.family_options.len(), FontFamily::ALL.len());
    assert_eq!(state.weight_options.len(), 9);
    assert_eq!(state.appearance_options(), vec!["Dark", "Light", "System"]);
}

#[test]
fn value_written_through_panel_reads_back() {
    let store = PreferenceStore::with_defaults();
    let mut panel = SettingsPanel::open(store.clone()).unwrap();

    panel.set_control("appearance", "Light").unwrap();
    panel.set_control("twenty_four_hours", "off").unwrap();
    panel.set_control("show_time_separators", "on").unwrap();
    panel.set_control("font_family", "New York").unwrap();
    panel.set_control("font_weight", "Bold").unwrap();

    assert_eq!(store.appearance(), Appearance::Light);
    assert!(store.use_am_pm());
    assert!(store.show_time_separators());
    assert_eq!(store.font_family(), FontFamily::NewYork);
    assert_eq!(store.font_weight(), FontWeight::Bold);
}

#[test]
fn apply_writes_every_control() {
    let store = PreferenceStore::with_defaults();
    let mut panel = SettingsPanel::open(store.clone()).unwrap();

    store.set_show_seconds(false).unwrap();
    panel.apply().unwrap();

    assert!(store.show_seconds(), "panel state overwrites the store");
    assert_eq!(store.get_current(), Preferences::default());
}

#[test]
fn family_switch_writes_back_coerced_weight() {
    let store = PreferenceStore::with_defaults();
    let mut panel = SettingsPanel::open(store.clone()).unwrap();

    panel.set_control("font_family", "Futura").unwrap();

    assert_eq!(store.font_family(), FontFamily::Futura);
    assert_eq!(store.font_weight(), FontWeight::Medium);
    assert_eq!(panel.state().font_weight, FontWeight::Medium);
    assert_eq!(
        panel.state().weight_options,
        vec![FontWeight::Medium, FontWeight::Bold]
    );
}

#[test]
fn opening_corrects_unavailable_weight() {
    let store = PreferenceStore::with_defaults();
    store
        .update(|prefs| {
            prefs.font_family = FontFamily::Didot;
            prefs.font_weight = FontWeight::Thin;
        })
        .unwrap();

    let panel = SettingsPanel::open(store.clone()).unwrap();

    assert_eq!(panel.state().font_weight, FontWeight::Regular);
    assert_eq!(store.font_weight(), FontWeight::Regular);
}

#[test]
fn plain_fonts_only_replaces_decorative_family() {
    let store = PreferenceStore::with_defaults();
    store.set_font_family(FontFamily::Didot).unwrap();
    let mut panel = SettingsPanel::open(store.clone()).unwrap();

    panel.set_control("plain_fonts_only", "on").unwrap();

    assert_eq!(store.font_family(), FontFamily::SanFrancisco);
    assert!(panel.state().family_options.iter().all(|family| family.is_plain()));
    assert!(matches!(
        panel.set_control("font_family", "Didot"),
        Err(SettingsError::InvalidValue { .. })
    ));
}

#[test]
fn weight_outside_family_is_rejected() {
    let store = PreferenceStore::with_defaults();
    store.set_font_family(FontFamily::Futura).unwrap();
    let mut panel = SettingsPanel::open(store.clone()).unwrap();

    let result = panel.set_control("font_weight", "Ultra Light");

    assert!(matches!(result, Err(SettingsError::InvalidValue { .. })));
    assert_eq!(store.font_weight(), FontWeight::Medium);
}

#[test]
fn invalid_controls_are_rejected() {
    let mut panel = SettingsPanel::open(PreferenceStore::with_defaults()).unwrap();

    assert!(matches!(
        panel.set_control("volume", "11"),
        Err(SettingsError::UnknownControl(_))
    ));
    assert!(matches!(
        panel.set_control("show_seconds", "maybe"),
        Err(SettingsError::InvalidValue { .. })
    ));
    assert!(matches!(
        panel.set_control("appearance", "sepia"),
        Err(SettingsError::InvalidValue { .. })
    ));
}

#[test]
fn changes_refresh_the_preview() {
    let handle = RefreshHandle::new();
    let mut panel =
        SettingsPanel::open_with_preview(PreferenceStore::with_defaults(), Some(handle.clone()))
            .unwrap();
    assert_eq!(handle.generation(), 1);

    panel.set_control("night_time_mode", "on").unwrap();
    assert_eq!(handle.generation(), 2);
}

#[test]
fn panel_writes_persist() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("preferences.toml");
    let mut panel = SettingsPanel::open(PreferenceStore::load_from(&path)).unwrap();

    panel.set_control("main_screen_only", "yes").unwrap();

    let reopened = PreferenceStore::load_from(&path);
    assert!(reopened.main_screen_only());
}

#[test]
fn failed_write_keeps_panel_in_step_with_store() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("padbury");
    std::fs::write(&blocker, "").unwrap();
    let store = PreferenceStore::load_from(blocker.join("preferences.toml"));
    let mut panel = SettingsPanel::open(store.clone()).unwrap();

    let result = panel.set_control("show_seconds", "off");

    assert!(matches!(result, Err(SettingsError::Store(_))));
    assert!(panel.state().show_seconds);
    assert!(store.show_seconds());
    assert_eq!(store.revision(), 0);
}

#[test]
fn version_and_project_link() {
    assert_eq!(version_label(), format!("v{}", env!("CARGO_PKG_VERSION")));
    assert!(PROJECT_URL.starts_with("https://github.com/"));
}
