//! Padbury - a fullscreen clock.
//!
//! Draws the current time as large as the screen allows, in a configurable
//! font, with optional red night colors. The main pieces:
//!
//! - Preference store with write-through persistence and change broadcast
//! - Layout engine sizing the time to the screen width
//! - Settings panel keeping font choices consistent
//! - CLI for reading and changing preferences and running the clock
//!
//! # Quick Start
//!
//! ```rust
//! use padbury::{
//!     config_store::PreferenceStore,
//!     render::ClockRenderer,
//!     surface::RecordingSurface,
//! };
//!
//! let store = PreferenceStore::with_defaults();
//! let mut renderer = ClockRenderer::new(store.clone());
//! let mut surface = RecordingSurface::new(1920.0, 1080.0);
//!
//! renderer.draw(&mut surface)?;
//! assert_eq!(surface.texts().len(), 1);
//! # Ok::<(), padbury::PadburyError>(())
//! ```

/// Preference schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Documentation generation for the preference schema.
pub mod docs;

/// Shared preference store with change tracking.
pub mod config_store;

/// Command-line interface.
pub mod cli;

/// Font catalog and face resolution.
pub mod fonts;

/// Clock layout and drawing.
pub mod render;

/// Settings panel controller.
pub mod settings;

/// Drawing surfaces.
pub mod surface;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{PadburyError, Result};
