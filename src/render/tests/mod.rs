//! Unit tests for the render module
//! Time and system appearance are injected, so nothing depends on the host.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicBool, Ordering},
};

use chrono::{NaiveDate, NaiveDateTime};

use crate::config::{Appearance, Preferences};
use crate::config_store::PreferenceStore;
use crate::fonts::{BuiltinFontSource, FontFamily, FontWeight, SYSTEM_FALLBACK_FACE};
use crate::render::{
    AppearanceSource, ClockRenderer, Color, DisplayConfig, FixedAppearance, FixedTime, SchemeKind,
    TimeSource, night_mode_active, select_scheme,
};
use crate::surface::{DrawOp, RecordingSurface, Surface};

fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 6, 1)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

#[derive(Clone)]
struct SharedTime(Arc<Mutex<NaiveDateTime>>);

impl SharedTime {
    fn new(time: NaiveDateTime) -> Self {
        Self(Arc::new(Mutex::new(time)))
    }

    fn set(&self, time: NaiveDateTime) {
        *self.0.lock().unwrap() = time;
    }
}

impl TimeSource for SharedTime {
    fn now(&self) -> NaiveDateTime {
        *self.0.lock().unwrap()
    }
}

#[derive(Clone)]
struct SharedAppearance(Arc<AtomicBool>);

impl AppearanceSource for SharedAppearance {
    fn system_is_dark(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

fn renderer(store: &PreferenceStore, time: NaiveDateTime) -> ClockRenderer {
    ClockRenderer::new(store.clone())
        .with_time(FixedTime(time))
        .with_appearance(FixedAppearance { dark: true })
}

#[test]
fn night_mode_follows_window_and_setting() {
    for hour in 0..24 {
        let in_window = hour >= 22 || hour < 6;
        assert_eq!(night_mode_active(true, hour), in_window, "hour {hour}");
        assert!(!night_mode_active(false, hour), "hour {hour}");
    }
}

#[test]
fn scheme_priority() {
    assert_eq!(select_scheme(true, Appearance::Light, false).kind, SchemeKind::Night);
    assert_eq!(select_scheme(false, Appearance::Dark, false).kind, SchemeKind::Dark);
    assert_eq!(select_scheme(false, Appearance::Light, true).kind, SchemeKind::Light);
    assert_eq!(select_scheme(false, Appearance::System, true).kind, SchemeKind::Dark);
    assert_eq!(select_scheme(false, Appearance::System, false).kind, SchemeKind::Light);

    let night = select_scheme(true, Appearance::Dark, true);
    assert_eq!(night.background, Color::BLACK);
    assert_eq!(night.foreground, Color::rgb(255, 59, 48));
}

#[test]
fn font_size_grows_with_width() {
    let prefs = Preferences::default();
    let fonts = BuiltinFontSource::new();

    let sizes: Vec<f64> = [0.0, 1.0, 320.0, 800.0, 1440.0, 2560.0]
        .into_iter()
        .map(|width| DisplayConfig::compute(&prefs, width, &fonts, false, true).font.size)
        .collect();

    assert!(sizes.windows(2).all(|pair| pair[0] < pair[1]), "{sizes:?}");
    assert_eq!(sizes[0], 0.0);
}

#[test]
fn sizing_string_spans_the_width() {
    let prefs = Preferences {
        show_time_separators: true,
        ..Preferences::default()
    };
    let config = DisplayConfig::compute(&prefs, 1000.0, &BuiltinFontSource::new(), false, true);

    let measured = config.font.measure("<11:59:59>");
    assert!((measured - 1000.0).abs() < 1e-6, "{measured}");
}

#[test]
fn text_rect_centers_cap_height() {
    let config =
        DisplayConfig::compute(&Preferences::default(), 1200.0, &BuiltinFontSource::new(), false, true);
    let rect = config.text_rect(1200.0, 800.0);

    let baseline = rect.y + rect.height - config.font.ascender();
    let cap_middle = baseline + config.font.cap_height() / 2.0;
    assert!((cap_middle - 400.0).abs() < 1e-6, "{cap_middle}");
    assert_eq!(rect.width, 1200.0);
}

#[test]
fn unavailable_weight_uses_first_family_weight() {
    let prefs = Preferences {
        font_family: FontFamily::Futura,
        font_weight: FontWeight::UltraLight,
        ..Preferences::default()
    };
    let config = DisplayConfig::compute(&prefs, 800.0, &BuiltinFontSource::new(), false, true);

    assert_eq!(config.font.weight, FontWeight::Medium);
    assert!(!config.font.is_fallback);
}

#[test]
fn missing_face_falls_back_to_system_font() {
    let face = FontFamily::SanFrancisco.face_name(FontWeight::UltraLight);
    let fonts = BuiltinFontSource::without([face]);
    let config = DisplayConfig::compute(&Preferences::default(), 800.0, &fonts, false, true);

    assert!(config.font.is_fallback);
    assert_eq!(config.font.face_name, SYSTEM_FALLBACK_FACE);
    assert_eq!(config.font.weight, FontWeight::UltraLight);
    assert!(config.font.size > 0.0);
}

#[test]
fn setup_is_idempotent() {
    let store = PreferenceStore::with_defaults();
    let mut renderer = renderer(&store, at(12, 0, 0));

    let first = renderer.setup(1024.0, 768.0, false).clone();
    let second = renderer.setup(1024.0, 768.0, false).clone();

    assert_eq!(first, second);
    assert_eq!(renderer.computations(), 1);
}

#[test]
fn forced_setup_recomputes() {
    let store = PreferenceStore::with_defaults();
    let mut renderer = renderer(&store, at(12, 0, 0));

    renderer.setup(1024.0, 768.0, false);
    renderer.setup(1024.0, 768.0, true);

    assert_eq!(renderer.computations(), 2);
}

#[test]
fn preference_change_recomputes() {
    let store = PreferenceStore::with_defaults();
    let mut renderer = renderer(&store, at(12, 0, 0));

    assert_eq!(renderer.setup(1024.0, 768.0, false).format.pattern(), "HH mm ss");

    store.set_show_seconds(false).unwrap();
    assert_eq!(renderer.setup(1024.0, 768.0, false).format.pattern(), "HH mm");
    assert_eq!(renderer.computations(), 2);
}

#[test]
fn resize_recomputes() {
    let store = PreferenceStore::with_defaults();
    let mut renderer = renderer(&store, at(12, 0, 0));

    let small = renderer.setup(640.0, 480.0, false).font.size;
    let large = renderer.setup(1920.0, 1080.0, false).font.size;

    assert!(large > small);
    assert_eq!(renderer.computations(), 2);
}

#[test]
fn refresh_handle_forces_recompute() {
    let store = PreferenceStore::with_defaults();
    let mut renderer = renderer(&store, at(12, 0, 0));
    let handle = renderer.refresh_handle();

    renderer.setup(1024.0, 768.0, false);
    handle.request();
    renderer.setup(1024.0, 768.0, false);
    renderer.setup(1024.0, 768.0, false);

    assert_eq!(renderer.computations(), 2);
}

#[test]
fn crossing_into_night_recomputes() {
    let store = PreferenceStore::with_defaults();
    store.set_night_time_mode(true).unwrap();
    let time = SharedTime::new(at(21, 59, 59));
    let mut renderer = ClockRenderer::new(store.clone())
        .with_time(time.clone())
        .with_appearance(FixedAppearance { dark: false });

    assert_eq!(renderer.setup(800.0, 600.0, false).colors.kind, SchemeKind::Light);

    time.set(at(22, 0, 0));
    let config = renderer.setup(800.0, 600.0, false);
    assert!(config.night_active);
    assert_eq!(config.colors.kind, SchemeKind::Night);
    assert_eq!(renderer.computations(), 2);
}

#[test]
fn system_appearance_change_recomputes() {
    let store = PreferenceStore::with_defaults();
    store.set_appearance(Appearance::System).unwrap();
    let dark = Arc::new(AtomicBool::new(true));
    let mut renderer = ClockRenderer::new(store.clone())
        .with_time(FixedTime(at(12, 0, 0)))
        .with_appearance(SharedAppearance(dark.clone()));

    assert_eq!(renderer.setup(800.0, 600.0, false).colors.kind, SchemeKind::Dark);

    dark.store(false, Ordering::SeqCst);
    assert_eq!(renderer.setup(800.0, 600.0, false).colors.kind, SchemeKind::Light);
}

#[test]
fn draw_fills_then_draws_time() {
    let store = PreferenceStore::with_defaults();
    let mut renderer = renderer(&store, at(23, 15, 42));
    let mut surface = RecordingSurface::new(1280.0, 720.0);

    renderer.draw(&mut surface).unwrap();

    assert_eq!(surface.ops().first(), Some(&DrawOp::Fill(Color::BLACK)));
    assert_eq!(surface.texts(), vec!["23 15 42"]);
    assert_eq!(surface.ops().last(), Some(&DrawOp::Present));
}

#[test]
fn draw_uses_night_colors() {
    let store = PreferenceStore::with_defaults();
    store.set_night_time_mode(true).unwrap();
    store.set_use_am_pm(true).unwrap();
    let mut renderer = renderer(&store, at(23, 15, 42));
    let mut surface = RecordingSurface::new(1280.0, 720.0);

    renderer.draw(&mut surface).unwrap();

    let Some(DrawOp::Text { text, style, .. }) = surface.ops().get(1) else {
        panic!("expected text, got {:?}", surface.ops());
    };
    assert_eq!(text, "11 15 42 PM");
    assert_eq!(style.color, Color::NIGHT_RED);
}

#[test]
fn secondary_display_only_fills_when_main_screen_only() {
    let store = PreferenceStore::with_defaults();
    store.set_main_screen_only(true).unwrap();
    let mut renderer = renderer(&store, at(12, 0, 0));

    let mut secondary = RecordingSurface::new(1280.0, 720.0).secondary();
    renderer.draw(&mut secondary).unwrap();
    assert_eq!(secondary.ops(), &[DrawOp::Fill(Color::BLACK), DrawOp::Present]);

    let mut primary = RecordingSurface::new(1280.0, 720.0);
    renderer.draw(&mut primary).unwrap();
    assert_eq!(primary.texts().len(), 1);
}

#[test]
fn secondary_display_draws_time_by_default() {
    let store = PreferenceStore::with_defaults();
    let mut renderer = renderer(&store, at(12, 0, 0));
    let mut secondary = RecordingSurface::new(1280.0, 720.0).secondary();

    renderer.draw(&mut secondary).unwrap();

    assert!(!secondary.is_primary());
    assert_eq!(secondary.texts(), vec!["12 00 00"]);
}
