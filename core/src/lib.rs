//! # Styleday Core Library
//!
//! Core library for the daily rotating "style of the day" system: a
//! catalog of palettes, font pairings and layouts, a generator that
//! composes one theme record per calendar date, a date-keyed archive of
//! persisted records, and the resolver that decides which record a page
//! request should display.
//!
//! ## Modules
//!
//! - [`theme`] - Theme config, record model, generation and validation
//! - [`archive`] - Date-keyed JSON file store with the `latest` alias
//! - [`resolver`] - Request precedence and URL-state side effects
//! - [`apply`] - Style-variable bindings materialized from a record
//! - [`calendar`] - Month grid and date eligibility for the browser
//! - [`dates`] - ISO and compact date forms, month arithmetic
//! - [`content`] - Auxiliary profile and quotes documents
//! - [`error`] - Error taxonomy shared by generator and resolver

pub mod apply;
pub mod archive;
pub mod calendar;
pub mod content;
pub mod dates;
pub mod error;
pub mod resolver;
pub mod theme;

pub use archive::ThemeArchive;
pub use error::{ThemeError, ThemeResult};
pub use resolver::{Resolution, Resolver, ThemeRequest, UrlAction};
pub use theme::{ThemeConfig, ThemeDate, ThemeRecord};
