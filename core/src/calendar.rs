//! Month grid construction and date eligibility for the theme browser.

use crate::dates;
use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// How the minimum eligible date bounds the window. Snapshots of the
/// original disagreed on whether the inception date itself is selectable,
/// so the boundary is a configured policy rather than a guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Boundary {
    /// The minimum date itself is selectable.
    #[default]
    Inclusive,
    /// Only dates strictly after the minimum are selectable.
    Exclusive,
}

/// The date range within which calendar days are selectable.
#[derive(Debug, Clone, Copy)]
pub struct EligibilityWindow {
    pub min_date: NaiveDate,
    pub boundary: Boundary,
    pub today: NaiveDate,
}

impl EligibilityWindow {
    pub fn new(min_date: NaiveDate, boundary: Boundary, today: NaiveDate) -> Self {
        Self {
            min_date,
            boundary,
            today,
        }
    }

    /// A day is selectable only if it is not after today and not outside
    /// the minimum-date boundary.
    pub fn is_selectable(&self, date: NaiveDate) -> bool {
        if date > self.today {
            return false;
        }
        match self.boundary {
            Boundary::Inclusive => date >= self.min_date,
            Boundary::Exclusive => date > self.min_date,
        }
    }
}

/// The "currently displayed month" cursor, advanced and retreated by
/// whole months with no bound, independent of eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    /// 1-based.
    pub month: u32,
}

impl MonthCursor {
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    pub fn prev(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Header label, e.g. `January 2026`.
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[(self.month - 1) as usize], self.year)
    }
}

/// One calendar cell. Ineligible days render disabled and are not
/// click-bound.
#[derive(Debug, Clone, Copy)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    pub selectable: bool,
}

/// A rendered month: leading blanks to align day 1 with its weekday in a
/// Sunday-first week, then one cell per day.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub label: String,
    pub leading_blanks: u32,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    pub fn build(cursor: MonthCursor, window: &EligibilityWindow) -> Self {
        let day_count = dates::days_in_month(cursor.year, cursor.month);
        let days = (1..=day_count)
            .filter_map(|day| {
                let date = NaiveDate::from_ymd_opt(cursor.year, cursor.month, day)?;
                Some(DayCell {
                    day,
                    date,
                    selectable: window.is_selectable(date),
                })
            })
            .collect();

        Self {
            label: cursor.label(),
            leading_blanks: dates::leading_offset(cursor.year, cursor.month),
            days,
        }
    }
}
