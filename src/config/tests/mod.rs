//! Unit tests for config module
//!
//! Tests preference types, defaults, and tolerant parsing.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::unwrap_used, clippy::panic)]

use crate::config::{ALL_KEYS, Appearance, Preferences};
use crate::fonts::{FontFamily, FontWeight};

#[test]
fn defaults_match_documented_fallbacks() {
    let prefs = Preferences::default();

    assert_eq!(prefs.appearance, Appearance::Dark);
    assert!(!prefs.night_time_mode);
    assert!(!prefs.use_am_pm);
    assert!(prefs.show_seconds);
    assert!(!prefs.show_time_separators);
    assert_eq!(prefs.font_family, FontFamily::SanFrancisco);
    assert_eq!(prefs.font_weight, FontWeight::UltraLight);
    assert!(!prefs.main_screen_only);
    assert!(!prefs.plain_fonts_only);
}

#[test]
fn empty_toml_gives_defaults() {
    let prefs = Preferences::from_toml_str("").unwrap();
    assert_eq!(prefs, Preferences::default());
}

#[test]
fn serialized_table_has_every_key() {
    let table = Preferences::default().to_table();
    for key in ALL_KEYS {
        assert!(table.contains_key(key), "missing key {key}");
    }
    assert_eq!(table.len(), ALL_KEYS.len());
}

#[test]
fn font_names_are_stored_as_display_names() {
    let toml_str = toml::to_string(&Preferences::default()).unwrap();
    assert!(toml_str.contains("font_family = \"San Francisco (System Font)\""));
    assert!(toml_str.contains("font_weight = \"Ultra Light\""));
}

#[test]
fn parses_every_field() {
    let prefs = Preferences::from_toml_str(
        r#"
        appearance = "system"
        night_time_mode = true
        use_am_pm = true
        show_seconds = false
        show_time_separators = true
        font_family = "Neue Helvetica (Padbury Original)"
        font_weight = "Thin"
        main_screen_only = true
        plain_fonts_only = true
        "#,
    )
    .unwrap();

    assert_eq!(prefs.appearance, Appearance::System);
    assert!(prefs.night_time_mode);
    assert!(prefs.use_am_pm);
    assert!(!prefs.show_seconds);
    assert!(prefs.show_time_separators);
    assert_eq!(prefs.font_family, FontFamily::NeueHelvetica);
    assert_eq!(prefs.font_weight, FontWeight::Thin);
    assert!(prefs.main_screen_only);
    assert!(prefs.plain_fonts_only);
}

#[test]
fn invalid_field_falls_back_without_touching_others() {
    let prefs = Preferences::from_toml_str(
        r#"
        appearance = "sepia"
        show_seconds = "yes please"
        night_time_mode = true
        "#,
    )
    .unwrap();

    assert_eq!(prefs.appearance, Appearance::Dark);
    assert!(prefs.show_seconds);
    assert!(prefs.night_time_mode);
}

#[test]
fn unknown_font_names_fall_back() {
    let prefs = Preferences::from_toml_str(
        r#"
        font_family = "Wingdings"
        font_weight = "Extra Wobbly"
        "#,
    )
    .unwrap();

    assert_eq!(prefs.font_family, FontFamily::SanFrancisco);
    assert_eq!(prefs.font_weight, FontWeight::Regular);
}

#[test]
fn unknown_keys_are_ignored() {
    let prefs = Preferences::from_toml_str("screen_brightness = 3\nuse_am_pm = true").unwrap();
    assert!(prefs.use_am_pm);
}

#[test]
fn legacy_dark_theme_migrates_to_appearance() {
    let prefs = Preferences::from_toml_str("dark_theme = false").unwrap();
    assert_eq!(prefs.appearance, Appearance::Light);

    let prefs = Preferences::from_toml_str("dark_theme = true").unwrap();
    assert_eq!(prefs.appearance, Appearance::Dark);
}

#[test]
fn explicit_appearance_wins_over_legacy_key() {
    let prefs =
        Preferences::from_toml_str("dark_theme = false\nappearance = \"system\"").unwrap();
    assert_eq!(prefs.appearance, Appearance::System);
}

#[test]
fn invalid_toml_is_an_error() {
    let result = Preferences::from_toml_str("[general\ninvalid syntax");
    assert!(result.is_err());
}

#[test]
fn effective_weight_coerces_to_family() {
    let prefs = Preferences {
        font_family: FontFamily::NewYork,
        font_weight: FontWeight::UltraLight,
        ..Preferences::default()
    };
    assert_eq!(prefs.effective_weight(), FontWeight::Regular);
}

#[test]
fn appearance_titles_parse_case_insensitively() {
    assert_eq!(Appearance::titled("System"), Some(Appearance::System));
    assert_eq!(Appearance::titled("dark"), Some(Appearance::Dark));
    assert_eq!(" LIGHT ".parse::<Appearance>(), Ok(Appearance::Light));
    assert!("sepia".parse::<Appearance>().is_err());
}

#[test]
fn system_appearance_follows_dark_mode() {
    assert!(Appearance::System.is_dark(true));
    assert!(!Appearance::System.is_dark(false));
    assert!(Appearance::Dark.is_dark(false));
    assert!(!Appearance::Light.is_dark(true));
}
