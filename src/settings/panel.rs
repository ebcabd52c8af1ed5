use tracing::{debug, info, instrument};

use crate::{
    config::{
        ALL_KEYS, Appearance, KEY_APPEARANCE, KEY_FONT_FAMILY, KEY_FONT_WEIGHT,
        KEY_MAIN_SCREEN_ONLY, KEY_NIGHT_TIME_MODE, KEY_PLAIN_FONTS_ONLY, KEY_SHOW_SECONDS,
        KEY_SHOW_TIME_SEPARATORS, KEY_USE_AM_PM,
    },
    config_store::{PreferenceStore, StoreError},
    fonts::{FontFamily, FontWeight},
    render::RefreshHandle,
};

use super::SettingsError;

/// Name of the 24-hour checkbox, the inverse of `use_am_pm`.
pub const CONTROL_TWENTY_FOUR_HOURS: &str = "twenty_four_hours";

/// Values shown by the panel's controls.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelState {
    /// Appearance selector
    pub appearance: Appearance,
    /// Night time mode checkbox
    pub night_time_mode: bool,
    /// 24-hour checkbox
    pub twenty_four_hours: bool,
    /// Show seconds checkbox
    pub show_seconds: bool,
    /// Time separators checkbox
    pub show_time_separators: bool,
    /// Families offered by the family selector
    pub family_options: Vec<FontFamily>,
    /// Selected family
    pub font_family: FontFamily,
    /// Weights offered by the weight selector
    pub weight_options: Vec<FontWeight>,
    /// Selected weight
    pub font_weight: FontWeight,
    /// Main screen only checkbox
    pub main_screen_only: bool,
    /// Plain fonts only checkbox
    pub plain_fonts_only: bool,
}

impl PanelState {
    /// Titles of the appearance selector entries.
    pub fn appearance_options(&self) -> Vec<&'static str> {
        Appearance::ALL.iter().map(|appearance| appearance.title()).collect()
    }
}

/// Controller of the settings panel.
///
/// Every change writes all controls to the store, then rebuilds the
/// controls from the store so dependent selectors stay consistent.
pub struct SettingsPanel {
    store: PreferenceStore,
    state: PanelState,
    preview: Option<RefreshHandle>,
}

impl SettingsPanel {
    /// Opens the panel on `store`.
    ///
    /// # Errors
    /// Returns an error if a corrected family or weight cannot be written back.
    pub fn open(store: PreferenceStore) -> Result<Self, StoreError> {
        Self::open_with_preview(store, None)
    }

    /// Opens the panel with a preview renderer that is refreshed on every change.
    ///
    /// # Errors
    /// Returns an error if a corrected family or weight cannot be written back.
    pub fn open_with_preview(
        store: PreferenceStore,
        preview: Option<RefreshHandle>,
    ) -> Result<Self, StoreError> {
        let state = build_state(&store)?;
        let panel = Self {
            store,
            state,
            preview,
        };
        panel.refresh_preview();
        Ok(panel)
    }

    /// Current control values.
    pub fn state(&self) -> &PanelState {
        &self.state
    }

    /// Writes every control to the store and rebuilds the controls.
    ///
    /// # Errors
    /// Returns an error if the store cannot be written.
    #[instrument(skip(self))]
    pub fn apply(&mut self) -> Result<(), StoreError> {
        self.commit(self.state.clone())
    }

    /// Stores `state` and only then adopts what the store now holds.
    fn commit(&mut self, state: PanelState) -> Result<(), StoreError> {
        self.store.update(move |prefs| {
            prefs.appearance = state.appearance;
            prefs.night_time_mode = state.night_time_mode;
            prefs.use_am_pm = !state.twenty_four_hours;
            prefs.show_seconds = state.show_seconds;
            prefs.show_time_separators = state.show_time_separators;
            prefs.font_family = state.font_family;
            prefs.font_weight = state.font_weight;
            prefs.main_screen_only = state.main_screen_only;
            prefs.plain_fonts_only = state.plain_fonts_only;
        })?;

        self.state = build_state(&self.store)?;
        self.refresh_preview();
        Ok(())
    }

    /// Changes one control from its textual value and applies.
    ///
    /// Controls are named by preference key, plus
    /// [`CONTROL_TWENTY_FOUR_HOURS`]. Selectors only accept their listed
    /// options.
    ///
    /// # Errors
    /// * `SettingsError::UnknownControl` - If `control` names no control
    /// * `SettingsError::InvalidValue` - If `value` isn't valid for the control
    /// * `SettingsError::Store` - If the store cannot be written
    pub fn set_control(&mut self, control: &str, value: &str) -> Result<(), SettingsError> {
        let invalid = |expected: String| SettingsError::InvalidValue {
            control: control.to_string(),
            value: value.to_string(),
            expected,
        };
        let checkbox = || parse_checkbox(value).ok_or_else(|| invalid(CHECKBOX.to_string()));
        let mut edited = self.state.clone();
        let state = &mut edited;

        match control {
            KEY_APPEARANCE => {
                state.appearance = Appearance::titled(value)
                    .ok_or_else(|| invalid(join(Appearance::ALL.iter().map(|a| a.title()))))?;
            }
            KEY_NIGHT_TIME_MODE => state.night_time_mode = checkbox()?,
            KEY_USE_AM_PM => state.twenty_four_hours = !checkbox()?,
            CONTROL_TWENTY_FOUR_HOURS => state.twenty_four_hours = checkbox()?,
            KEY_SHOW_SECONDS => state.show_seconds = checkbox()?,
            KEY_SHOW_TIME_SEPARATORS => state.show_time_separators = checkbox()?,
            KEY_FONT_FAMILY => {
                state.font_family = state
                    .family_options
                    .iter()
                    .copied()
                    .find(|family| family.name().eq_ignore_ascii_case(value.trim()))
                    .ok_or_else(|| invalid(join(state.family_options.iter().map(|f| f.name()))))?;
            }
            KEY_FONT_WEIGHT => {
                state.font_weight = state
                    .weight_options
                    .iter()
                    .copied()
                    .find(|weight| weight.name().eq_ignore_ascii_case(value.trim()))
                    .ok_or_else(|| invalid(join(state.weight_options.iter().map(|w| w.name()))))?;
            }
            KEY_MAIN_SCREEN_ONLY => state.main_screen_only = checkbox()?,
            KEY_PLAIN_FONTS_ONLY => state.plain_fonts_only = checkbox()?,
            _ => return Err(SettingsError::UnknownControl(control.to_string())),
        }

        debug!(control, value, "Control changed");
        self.commit(edited)?;
        Ok(())
    }

    /// Every control name accepted by [`SettingsPanel::set_control`].
    pub fn controls() -> Vec<&'static str> {
        let mut controls = ALL_KEYS.to_vec();
        controls.push(CONTROL_TWENTY_FOUR_HOURS);
        controls
    }

    fn refresh_preview(&self) {
        if let Some(preview) = &self.preview {
            preview.request();
        }
    }
}

const CHECKBOX: &str = "on or off";

fn build_state(store: &PreferenceStore) -> Result<PanelState, StoreError> {
    let prefs = store.get_current();

    let family_options = FontFamily::selectable(prefs.plain_fonts_only);
    let font_family = if family_options.contains(&prefs.font_family) {
        prefs.font_family
    } else {
        FontFamily::default()
    };

    let weight_options = font_family.available_weights().to_vec();
    let font_weight = font_family.coerce_weight(prefs.font_weight);

    if font_family != prefs.font_family || font_weight != prefs.font_weight {
        info!(
            family = %font_family,
            weight = %font_weight,
            "Correcting font selection"
        );
        store.update(|prefs| {
            prefs.font_family = font_family;
            prefs.font_weight = font_weight;
        })?;
    }

    Ok(PanelState {
        appearance: prefs.appearance,
        night_time_mode: prefs.night_time_mode,
        twenty_four_hours: !prefs.use_am_pm,
        show_seconds: prefs.show_seconds,
        show_time_separators: prefs.show_time_separators,
        family_options,
        font_family,
        weight_options,
        font_weight,
        main_screen_only: prefs.main_screen_only,
        plain_fonts_only: prefs.plain_fonts_only,
    })
}

fn parse_checkbox(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

fn join<'a>(options: impl Iterator<Item = &'a str>) -> String {
    options.collect::<Vec<_>>().join(", ")
}
