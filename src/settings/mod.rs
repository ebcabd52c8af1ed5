//! Settings panel for the clock.
//!
//! Mirrors the preferences into control state (selectors and checkboxes),
//! keeps the choices consistent with the font catalog, and writes every
//! control back to the store whenever one of them changes.

mod panel;

#[cfg(test)]
mod tests;

pub use panel::{CONTROL_TWENTY_FOUR_HOURS, PanelState, SettingsPanel};

use crate::config_store::StoreError;

/// Project page shown in the panel.
pub const PROJECT_URL: &str = "https://github.com/Kamik423/Padbury-Clock-Revived";

/// Version label shown in the corner of the panel.
pub fn version_label() -> String {
    format!("v{}", env!("CARGO_PKG_VERSION"))
}

/// Errors raised when a control is changed.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// No control has this name
    #[error("unknown control '{0}'")]
    UnknownControl(String),

    /// The value is not one of the control's options
    #[error("invalid value '{value}' for {control}: expected {expected}")]
    InvalidValue {
        /// Control being changed
        control: String,
        /// Rejected value
        value: String,
        /// Description of the accepted values
        expected: String,
    },

    /// The store rejected the write
    #[error(transparent)]
    Store(#[from] StoreError),
}
