//! # Theme catalog
//!
//! The selectable axes a daily theme is composed from and the generator
//! that draws from them.
//!
//! - [`types`] — palettes, font pairings, layouts, and the composed
//!   [`ThemeRecord`](types::ThemeRecord) that is archived and applied.
//! - [`generator`] — independent uniform selection per axis through an
//!   injectable [`Picker`](generator::Picker) seam.
//! - [`loader`] — the shared `theme-config.json` document, with a
//!   built-in fallback config for the resolver side.
//! - [`validation`] — non-empty axes and required style-variable keys.

pub mod generator;
pub mod loader;
pub mod types;
pub mod validation;

pub use generator::{generate, Picker, RandomPicker};
pub use loader::ConfigLoader;
pub use types::{ThemeConfig, ThemeDate, ThemeRecord};
