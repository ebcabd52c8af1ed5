use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use chrono::{NaiveDateTime, Timelike};
use tracing::{debug, instrument, trace};

use crate::{
    Result,
    config_store::PreferenceStore,
    fonts::{BuiltinFontSource, FontSource},
    surface::{Surface, TextStyle},
};

use super::{
    colors::night_mode_active,
    environment::{AppearanceSource, EnvAppearance, LocalTime, TimeSource},
    layout::DisplayConfig,
};

/// Lets another component force the next frame to recompute its layout.
#[derive(Debug, Clone, Default)]
pub struct RefreshHandle {
    generation: Arc<AtomicU64>,
}

impl RefreshHandle {
    /// Creates a handle with no pending refresh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks for a recompute on the next tick.
    pub fn request(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of refreshes requested so far.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }
}

/// Everything the cached layout depends on. The layout is recomputed
/// whenever this changes between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderInputs {
    /// Preference store revision
    pub revision: u64,
    /// Night colors apply
    pub night_active: bool,
    /// System dark mode state
    pub system_is_dark: bool,
    /// Drawable width
    pub width: f64,
    /// Drawable height
    pub height: f64,
    /// Refresh generation
    pub refresh: u64,
}

/// Draws the clock onto a surface once per tick, caching the layout between
/// ticks.
pub struct ClockRenderer {
    store: PreferenceStore,
    fonts: Box<dyn FontSource>,
    appearance: Box<dyn AppearanceSource>,
    time: Box<dyn TimeSource>,
    refresh: RefreshHandle,
    cache: Option<(RenderInputs, DisplayConfig)>,
    computations: u64,
}

impl ClockRenderer {
    /// Creates a renderer with the builtin fonts, the environment's appearance
    /// and the local clock.
    pub fn new(store: PreferenceStore) -> Self {
        Self {
            store,
            fonts: Box::new(BuiltinFontSource::new()),
            appearance: Box::new(EnvAppearance),
            time: Box::new(LocalTime),
            refresh: RefreshHandle::new(),
            cache: None,
            computations: 0,
        }
    }

    /// Replaces the font source.
    pub fn with_fonts(mut self, fonts: impl FontSource + 'static) -> Self {
        self.fonts = Box::new(fonts);
        self.cache = None;
        self
    }

    /// Replaces the system appearance source.
    pub fn with_appearance(mut self, appearance: impl AppearanceSource + 'static) -> Self {
        self.appearance = Box::new(appearance);
        self
    }

    /// Replaces the clock.
    pub fn with_time(mut self, time: impl TimeSource + 'static) -> Self {
        self.time = Box::new(time);
        self
    }

    /// Handle that forces a recompute when requested.
    pub fn refresh_handle(&self) -> RefreshHandle {
        self.refresh.clone()
    }

    /// Store the renderer reads from.
    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    /// How many times the layout has been computed.
    pub fn computations(&self) -> u64 {
        self.computations
    }

    /// Layout from the last computation, if any.
    pub fn current(&self) -> Option<&DisplayConfig> {
        self.cache.as_ref().map(|(_, config)| config)
    }

    /// Makes sure the layout matches the current inputs, recomputing when
    /// `force` is set or anything it depends on has changed.
    pub fn setup(&mut self, width: f64, height: f64, force: bool) -> &DisplayConfig {
        let now = self.time.now();
        self.setup_at(width, height, force, now)
    }

    fn setup_at(&mut self, width: f64, height: f64, force: bool, now: NaiveDateTime) -> &DisplayConfig {
        let revision = self.store.revision();
        let prefs = self.store.get_current();
        let inputs = RenderInputs {
            revision,
            night_active: night_mode_active(prefs.night_time_mode, now.hour()),
            system_is_dark: self.appearance.system_is_dark(),
            width,
            height,
            refresh: self.refresh.generation(),
        };

        let entry = match self.cache.take() {
            Some(entry) if !force && entry.0 == inputs => entry,
            previous => {
                debug!(
                    ?inputs,
                    forced = force,
                    first = previous.is_none(),
                    "Recomputing display configuration"
                );
                self.computations += 1;
                let config = DisplayConfig::compute(
                    &prefs,
                    width,
                    self.fonts.as_ref(),
                    inputs.night_active,
                    inputs.system_is_dark,
                );
                (inputs, config)
            }
        };

        &self.cache.insert(entry).1
    }

    /// Draws one frame.
    ///
    /// # Errors
    /// Returns an error if the surface cannot be written.
    #[instrument(skip_all)]
    pub fn draw(&mut self, surface: &mut dyn Surface) -> Result<()> {
        let (width, height) = surface.size();
        let now = self.time.now();
        let config = self.setup_at(width, height, false, now);

        surface.fill(config.colors.background)?;

        if config.main_screen_only && !surface.is_primary() {
            trace!("Secondary display, time hidden");
            return surface.present();
        }

        let text = config.format.format(&now);
        let rect = config.text_rect(width, height);
        let style = TextStyle {
            font: config.font.clone(),
            color: config.colors.foreground,
        };

        trace!(%text, "Drawing frame");
        surface.draw_text(&text, rect, &style)?;
        surface.present()
    }
}
