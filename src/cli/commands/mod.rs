//! Built-in commands, one module per category.

pub mod config;
pub mod fonts;
pub mod screen;
