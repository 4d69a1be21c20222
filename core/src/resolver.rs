//! Request-to-record resolution and its URL side effects.
//!
//! The resolver decides which theme record to display for a page load,
//! a calendar click, or a remix, and reports the history-state change
//! the UI glue must perform alongside applying the record. Persisted
//! requests read the archive; remix bypasses it entirely.

use crate::archive::ThemeArchive;
use crate::dates;
use crate::error::ThemeResult;
use crate::theme::generator::{self, Picker};
use crate::theme::types::{ThemeConfig, ThemeDate, ThemeRecord};
use chrono::NaiveDate;

/// What the caller asked to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeRequest {
    /// A specific archived date.
    Date(NaiveDate),
    /// The `latest` alias, the default landing experience.
    Latest,
    /// An ephemeral in-memory generation.
    Remix,
}

impl ThemeRequest {
    /// Interpret the `date` URL query parameter. Exactly eight digits in
    /// `YYYYMMDD` form select that date; anything absent or malformed
    /// falls back to `Latest`.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some(raw) => match dates::parse_compact(raw) {
                Ok(date) => ThemeRequest::Date(date),
                Err(e) => {
                    log::warn!("ignoring malformed date parameter: {e}");
                    ThemeRequest::Latest
                }
            },
            None => ThemeRequest::Latest,
        }
    }
}

/// History-state change to perform after applying the resolved record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlAction {
    /// Leave the URL as it is (it already encodes the request).
    None,
    /// Push `?date=YYYYMMDD` so the view is shareable and reload-stable.
    PushDate(NaiveDate),
    /// Drop any `date` parameter; remix results are not linkable.
    ClearDate,
}

impl UrlAction {
    /// The query string this action leaves in place, if any.
    pub fn query(&self) -> Option<String> {
        match self {
            UrlAction::None | UrlAction::ClearDate => None,
            UrlAction::PushDate(date) => Some(format!("date={}", dates::compact(*date))),
        }
    }
}

/// A resolved record together with its URL side effect.
#[derive(Debug, Clone)]
pub struct Resolution {
    pub record: ThemeRecord,
    pub url: UrlAction,
}

/// Resolves requests against an archive and a config, both passed in
/// explicitly so the logic is testable without a live page.
pub struct Resolver<'a> {
    archive: &'a ThemeArchive,
    config: &'a ThemeConfig,
}

impl<'a> Resolver<'a> {
    pub fn new(archive: &'a ThemeArchive, config: &'a ThemeConfig) -> Self {
        Self { archive, config }
    }

    /// Page-load resolution: the URL already encodes the request, so no
    /// history state is pushed. Archive failures propagate; the caller
    /// logs a warning and keeps whatever theme was previously applied.
    pub fn resolve_initial(
        &self,
        query: Option<&str>,
        picker: &mut dyn Picker,
    ) -> ThemeResult<Resolution> {
        match ThemeRequest::from_query(query) {
            ThemeRequest::Date(date) => Ok(Resolution {
                record: self.archive.read_date(date)?,
                url: UrlAction::None,
            }),
            ThemeRequest::Latest => Ok(Resolution {
                record: self.archive.read_latest()?,
                url: UrlAction::None,
            }),
            // Unreachable from a query string, but the enum is public.
            ThemeRequest::Remix => self.remix(picker),
        }
    }

    /// Calendar-driven navigation: fetch the selected date's record and
    /// push it into the URL.
    pub fn navigate(&self, date: NaiveDate) -> ThemeResult<Resolution> {
        Ok(Resolution {
            record: self.archive.read_date(date)?,
            url: UrlAction::PushDate(date),
        })
    }

    /// Remix: generate in memory from the config, never touching the
    /// archive, and clear any `date` parameter.
    pub fn remix(&self, picker: &mut dyn Picker) -> ThemeResult<Resolution> {
        Ok(Resolution {
            record: generator::generate(self.config, ThemeDate::Remixed, picker)?,
            url: UrlAction::ClearDate,
        })
    }
}
