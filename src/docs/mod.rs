//! Documentation generation for the preference schema and font catalog.
//!
//! Generates markdown pages from the `schemars` schema of [`Preferences`]
//! and from the static font catalog.
//!
//! [`Preferences`]: crate::config::Preferences

mod generator;
mod markdown;
mod schema;

pub use generator::{DocPage, DocsError, DocsGenerator};
pub use markdown::{generate_fonts_page, generate_preferences_page, generate_property_table};
pub use schema::{PropertyInfo, extract_property_info, preferences_schema, preferences_schema_json};
