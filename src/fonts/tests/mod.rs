//! Unit tests for the font catalog and face resolution.

#![allow(clippy::unwrap_used, clippy::panic)]

use crate::fonts::{
    BuiltinFontSource, FontFamily, FontFeature, FontSource, FontWeight, SYSTEM_FALLBACK_FACE,
    resolve_font,
};

#[test]
fn weight_names_round_trip() {
    for weight in FontWeight::ALL {
        assert_eq!(FontWeight::from_name(weight.name()), weight);
    }
}

#[test]
fn unknown_weight_name_is_regular() {
    assert_eq!(FontWeight::from_name("Extra Wobbly"), FontWeight::Regular);
    assert_eq!(FontWeight::from_name(""), FontWeight::Regular);
}

#[test]
fn unknown_family_name_is_default_family() {
    assert_eq!(FontFamily::named("Comic Sans"), FontFamily::SanFrancisco);
    assert_eq!(FontFamily::find("Comic Sans"), None);
    assert_eq!(FontFamily::named("New York"), FontFamily::NewYork);
}

#[test]
fn catalog_is_indexed_by_family() {
    for family in FontFamily::ALL {
        assert_eq!(family.spec().family, family);
        assert!(!family.available_weights().is_empty());
    }
}

#[test]
fn catalog_weights_in_selector_order() {
    assert_eq!(
        FontFamily::Futura.available_weights(),
        &[FontWeight::Medium, FontWeight::Bold]
    );
    assert_eq!(
        FontFamily::Didot.available_weights(),
        &[FontWeight::Regular, FontWeight::Bold]
    );
    assert_eq!(
        FontFamily::SanFranciscoMono.available_weights().first(),
        Some(&FontWeight::Light)
    );
    assert_eq!(FontFamily::SanFrancisco.available_weights().len(), 9);
}

#[test]
fn plain_filter_hides_decorative_families() {
    let plain = FontFamily::selectable(true);
    assert!(plain.contains(&FontFamily::NeueHelvetica));
    assert!(!plain.contains(&FontFamily::Futura));
    assert!(!plain.contains(&FontFamily::Didot));

    assert_eq!(FontFamily::selectable(false).len(), FontFamily::ALL.len());
}

#[test]
fn unavailable_weight_coerces_to_first_weight() {
    assert_eq!(
        FontFamily::SanFranciscoMono.coerce_weight(FontWeight::UltraLight),
        FontWeight::Light
    );
    assert_eq!(
        FontFamily::NewYork.coerce_weight(FontWeight::Thin),
        FontWeight::Regular
    );
    assert_eq!(
        FontFamily::NeueHelvetica.coerce_weight(FontWeight::Thin),
        FontWeight::Thin
    );
}

#[test]
fn helvetica_face_names_follow_weight() {
    let family = FontFamily::NeueHelvetica;
    assert_eq!(family.face_name(FontWeight::UltraLight), "Helvetica Neue UltraLight");
    assert_eq!(family.face_name(FontWeight::Thin), "Helvetica Neue Thin");
    assert_eq!(family.face_name(FontWeight::Regular), "Helvetica Neue");
    assert_eq!(family.face_name(FontWeight::Bold), "Helvetica Neue Bold");
}

#[test]
fn builtin_source_loads_catalog_faces() {
    let source = BuiltinFontSource::new();
    assert!(source.load_face("Helvetica Neue Medium").is_some());
    assert!(source.load_face("SF Mono Black").is_some());
    assert!(source.load_face("Helvetica Neue Black").is_none());
}

#[test]
fn helvetica_gets_original_features() {
    let font = resolve_font(
        &BuiltinFontSource::new(),
        FontFamily::NeueHelvetica,
        FontWeight::Thin,
        100.0,
    );

    assert!(!font.is_fallback);
    assert_eq!(font.face_name, "Helvetica Neue Thin");
    assert!(font.features.contains(&FontFeature::ProportionalNumbers));
    assert!(font.features.contains(&FontFeature::AlternatePunctuation));
}

#[test]
fn missing_face_falls_back_to_system_font_at_same_size() {
    let source = BuiltinFontSource::without(["Helvetica Neue Light"]);
    let font = resolve_font(&source, FontFamily::NeueHelvetica, FontWeight::Light, 72.0);

    assert!(font.is_fallback);
    assert_eq!(font.face_name, SYSTEM_FALLBACK_FACE);
    assert_eq!(font.size, 72.0);
    assert_eq!(font.weight, FontWeight::Light);
    assert_eq!(font.features, vec![FontFeature::MonospacedDigits]);
}

#[test]
fn resolution_coerces_weight_before_loading() {
    let font = resolve_font(
        &BuiltinFontSource::new(),
        FontFamily::Futura,
        FontWeight::UltraLight,
        10.0,
    );

    assert_eq!(font.weight, FontWeight::Medium);
    assert_eq!(font.face_name, "Futura Medium");
}

#[test]
fn proportional_digit_one_is_narrower() {
    let font = resolve_font(
        &BuiltinFontSource::new(),
        FontFamily::NeueHelvetica,
        FontWeight::Regular,
        100.0,
    );

    assert!(font.measure("11") < font.measure("22"));

    let mono = resolve_font(
        &BuiltinFontSource::new(),
        FontFamily::SanFranciscoMono,
        FontWeight::Regular,
        100.0,
    );
    assert_eq!(mono.measure("11"), mono.measure("22"));
}

#[test]
fn measurement_scales_with_size() {
    let font = resolve_font(
        &BuiltinFontSource::new(),
        FontFamily::SanFrancisco,
        FontWeight::Regular,
        50.0,
    );
    let bigger = font.with_size(100.0);

    let ratio = bigger.measure("12:34") / font.measure("12:34");
    assert!((ratio - 2.0).abs() < 1e-9);
}
