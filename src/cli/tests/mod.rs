//! Unit tests for CLI module
//!
//! Tests command registry, formatting, and command execution against an
//! in-memory preference store.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::sync::Arc;

use tempfile::TempDir;
use toml::Value;

use crate::cli::{
    CliError, CliService, CommandRegistry,
    formatting::{format_change, format_toml_value},
};
use crate::config::Appearance;
use crate::config_store::{ChangeSource, PreferenceChange, PreferenceStore};
use crate::fonts::{FontFamily, FontWeight};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn service() -> (CliService, PreferenceStore) {
    let store = PreferenceStore::with_defaults();
    (CliService::new(store.clone()), store)
}

#[test]
fn format_toml_value_scalars() {
    assert_eq!(format_toml_value(&Value::String("Didot".to_string())), "\"Didot\"");
    assert_eq!(format_toml_value(&Value::Integer(-123)), "-123");
    assert_eq!(format_toml_value(&Value::Float(-2.5)), "-2.5");
    assert_eq!(format_toml_value(&Value::Boolean(false)), "false");
}

#[test]
fn format_toml_value_collections() {
    let value = Value::Array(vec![Value::Integer(1), Value::Integer(2)]);
    assert_eq!(format_toml_value(&value), "[2]");

    let mut table = toml::map::Map::new();
    table.insert("key".to_string(), Value::Boolean(true));
    assert_eq!(format_toml_value(&Value::Table(table)), "{1}");
}

#[test]
fn format_change_shows_old_and_new() {
    let change = PreferenceChange::new(
        "show_seconds".to_string(),
        Some(Value::Boolean(true)),
        Value::Boolean(false),
        ChangeSource::FileEdit,
    );

    let line = format_change(&change);
    assert!(line.starts_with("show_seconds: true -> false"));
    assert!(line.contains("(file)"));
}

#[test]
fn empty_registry_lists_nothing() {
    let registry = CommandRegistry::new(Arc::new(PreferenceStore::with_defaults()));
    assert!(registry.list_commands().is_empty());
}

#[test]
fn every_category_is_registered() {
    let (service, _) = service();

    let categories: Vec<String> = service.list_all().into_iter().map(|(name, _)| name).collect();
    assert_eq!(categories, vec!["config", "fonts", "screen"]);

    let config = service
        .list_all()
        .into_iter()
        .find(|(name, _)| name == "config")
        .map(|(_, commands)| commands)
        .unwrap();
    assert_eq!(config, vec!["get", "list", "reset", "schema", "set", "watch"]);
}

#[test]
fn unknown_commands_are_reported() {
    let (service, _) = service();

    assert!(matches!(
        service.execute_command("audio", "volume", &[]),
        Err(CliError::CommandNotFound(_))
    ));
    assert!(matches!(
        service.execute_command("config", "remove", &[]),
        Err(CliError::CommandNotFound(_))
    ));
}

#[test]
fn argument_count_is_validated() {
    let (service, _) = service();

    assert!(matches!(
        service.execute_command("config", "get", &[]),
        Err(CliError::InvalidArguments(_))
    ));
    assert!(matches!(
        service.execute_command("config", "set", &args(&["a", "b", "c"])),
        Err(CliError::InvalidArguments(_))
    ));
}

#[test]
fn help_lists_categories() {
    let (service, _) = service();

    let help = service.execute_command("help", "", &[]).unwrap();
    assert!(help.contains("config"));
    assert!(help.contains("snapshot"));

    let config_help = service.execute_command("config", "", &[]).unwrap();
    assert!(config_help.contains("padbury config set night_time_mode on"));
}

#[test]
fn get_prints_key_and_value() {
    let (service, _) = service();

    let output = service
        .execute_command("config", "get", &args(&["font_weight"]))
        .unwrap();
    assert_eq!(output, "font_weight: \"Ultra Light\"");

    assert!(matches!(
        service.execute_command("config", "get", &args(&["volume"])),
        Err(CliError::ConfigError(_))
    ));
}

#[test]
fn set_goes_through_the_panel() {
    let (service, store) = service();

    service
        .execute_command("config", "set", &args(&["font_family", "Futura"]))
        .unwrap();
    service
        .execute_command("config", "set", &args(&["appearance", "light"]))
        .unwrap();

    assert_eq!(store.font_family(), FontFamily::Futura);
    assert_eq!(store.font_weight(), FontWeight::Medium);
    assert_eq!(store.appearance(), Appearance::Light);
}

#[test]
fn set_rejects_invalid_values() {
    let (service, store) = service();

    assert!(matches!(
        service.execute_command("config", "set", &args(&["show_seconds", "sometimes"])),
        Err(CliError::InvalidArguments(_))
    ));
    assert!(store.show_seconds());
}

#[test]
fn list_prints_every_key() {
    let (service, _) = service();

    let output = service.execute_command("config", "list", &[]).unwrap();
    assert_eq!(output.lines().count(), crate::config::ALL_KEYS.len());
    assert!(output.contains("appearance: \"dark\""));
}

#[test]
fn reset_restores_one_key_or_all() {
    let (service, store) = service();
    store.set_show_seconds(false).unwrap();
    store.set_use_am_pm(true).unwrap();

    service
        .execute_command("config", "reset", &args(&["show_seconds"]))
        .unwrap();
    assert!(store.show_seconds());
    assert!(store.use_am_pm());

    service.execute_command("config", "reset", &[]).unwrap();
    assert!(!store.use_am_pm());
}

#[test]
fn schema_is_json() {
    let (service, _) = service();

    let output = service.execute_command("config", "schema", &[]).unwrap();
    let schema: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(schema["properties"]["plain_fonts_only"].is_object());
}

#[test]
fn fonts_commands() {
    let (service, _) = service();

    let all = service.execute_command("fonts", "list", &[]).unwrap();
    assert!(all.contains("Didot"));

    let plain = service
        .execute_command("fonts", "list", &args(&["plain"]))
        .unwrap();
    assert!(!plain.contains("Didot"));

    let weights = service
        .execute_command("fonts", "weights", &args(&["Neue Helvetica (Padbury Original)"]))
        .unwrap();
    assert_eq!(weights.lines().count(), 6);
    assert!(weights.contains("Thin (Helvetica Neue Thin)"));
}

#[test]
fn snapshot_writes_svg() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("clock.svg");
    let (service, _) = service();

    service
        .execute_command(
            "screen",
            "snapshot",
            &args(&[output.to_str().unwrap(), "800", "450"]),
        )
        .unwrap();

    let svg = std::fs::read_to_string(&output).unwrap();
    assert!(svg.contains("width=\"800\""));
    assert!(svg.contains("<text"));
}

#[test]
fn snapshot_rejects_bad_sizes() {
    let (service, _) = service();

    assert!(matches!(
        service.execute_command("screen", "snapshot", &args(&["out.svg", "wide"])),
        Err(CliError::InvalidArguments(_))
    ));
}
