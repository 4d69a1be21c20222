//! End-to-end flow through the public surface: generate into a real
//! archive directory, then resolve through each request path and check
//! the applied style bindings.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use styleday_core::apply::StyleBindings;
use styleday_core::theme::generator::{self, Picker};
use styleday_core::theme::types::{FontPairing, Palette};
use styleday_core::{Resolver, ThemeArchive, ThemeConfig, ThemeDate, ThemeRequest, UrlAction};

/// Deterministic picker replaying a fixed index sequence.
struct SeqPicker {
    picks: Vec<usize>,
    next: usize,
}

impl SeqPicker {
    fn new(picks: &[usize]) -> Self {
        Self {
            picks: picks.to_vec(),
            next: 0,
        }
    }
}

impl Picker for SeqPicker {
    fn pick(&mut self, len: usize) -> usize {
        let index = self.picks.get(self.next).copied().unwrap_or(0);
        self.next += 1;
        index % len
    }
}

fn map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn noir_config() -> ThemeConfig {
    ThemeConfig {
        palettes: vec![Palette {
            name: "Noir".to_string(),
            colors: map(&[
                ("--bg-color", "#0a0a0a"),
                ("--text-color", "#ededed"),
                ("--accent-color", "#ffffff"),
                ("--card-bg", "rgba(255,255,255,0.03)"),
            ]),
        }],
        font_pairings: vec![FontPairing {
            name: "Tech Brutalist".to_string(),
            fonts: map(&[
                ("--heading-font", "'Space Grotesk', sans-serif"),
                ("--body-font", "'Space Grotesk', sans-serif"),
            ]),
        }],
        layouts: vec!["hero".to_string()],
    }
}

#[test]
fn generated_record_round_trips_through_the_archive() {
    let dir = tempfile::tempdir().unwrap();
    let archive = ThemeArchive::new(dir.path());
    let config = noir_config();
    let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();

    let written = generator::generate_for_date(
        &config,
        &archive,
        date,
        date,
        &mut SeqPicker::new(&[0, 0, 0]),
    )
    .unwrap();

    // The end-to-end composition from the config above.
    assert_eq!(written.name, "Noir x Tech Brutalist");
    assert_eq!(written.layout.as_deref(), Some("hero"));
    assert_eq!(written.colors["--bg-color"], "#0a0a0a");
    assert_eq!(written.colors["--body-font"], "'Space Grotesk', sans-serif");

    let read_back = archive.read_date(date).unwrap();
    assert_eq!(
        StyleBindings::from_record(&read_back),
        StyleBindings::from_record(&written)
    );
}

#[test]
fn date_parameter_resolves_the_same_record_as_the_date_file() {
    let dir = tempfile::tempdir().unwrap();
    let archive = ThemeArchive::new(dir.path());
    let config = noir_config();
    let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();

    generator::generate_for_date(&config, &archive, date, today, &mut SeqPicker::new(&[0]))
        .unwrap();

    let resolver = Resolver::new(&archive, &config);
    let resolved = resolver
        .resolve_initial(Some("20260115"), &mut SeqPicker::new(&[0]))
        .unwrap();

    // The URL already encodes the date: nothing is pushed.
    assert_eq!(resolved.url, UrlAction::None);
    let direct = archive.read_date(date).unwrap();
    assert_eq!(
        StyleBindings::from_record(&resolved.record),
        StyleBindings::from_record(&direct)
    );
}

#[test]
fn absent_parameter_resolves_the_latest_alias() {
    let dir = tempfile::tempdir().unwrap();
    let archive = ThemeArchive::new(dir.path());
    let config = noir_config();
    let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();

    // Generating for "today" refreshes the alias.
    generator::generate_for_date(&config, &archive, today, today, &mut SeqPicker::new(&[0]))
        .unwrap();

    let resolver = Resolver::new(&archive, &config);
    let resolved = resolver
        .resolve_initial(None, &mut SeqPicker::new(&[0]))
        .unwrap();
    let latest = archive.read_latest().unwrap();

    assert_eq!(resolved.url, UrlAction::None);
    assert_eq!(resolved.record.date, ThemeDate::Day(today));
    assert_eq!(
        StyleBindings::from_record(&resolved.record),
        StyleBindings::from_record(&latest)
    );
}

#[test]
fn malformed_parameter_falls_back_to_latest() {
    assert_eq!(ThemeRequest::from_query(Some("15-01-2026")), ThemeRequest::Latest);

    let dir = tempfile::tempdir().unwrap();
    let archive = ThemeArchive::new(dir.path());
    let config = noir_config();
    let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
    generator::generate_for_date(&config, &archive, today, today, &mut SeqPicker::new(&[0]))
        .unwrap();

    let resolver = Resolver::new(&archive, &config);
    let resolved = resolver
        .resolve_initial(Some("not-a-date"), &mut SeqPicker::new(&[0]))
        .unwrap();
    assert_eq!(resolved.record.date, ThemeDate::Day(today));
}

#[test]
fn calendar_navigation_pushes_the_compact_date() {
    let dir = tempfile::tempdir().unwrap();
    let archive = ThemeArchive::new(dir.path());
    let config = noir_config();
    let date = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
    let today = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
    generator::generate_for_date(&config, &archive, date, today, &mut SeqPicker::new(&[0]))
        .unwrap();

    let resolver = Resolver::new(&archive, &config);
    let resolved = resolver.navigate(date).unwrap();
    assert_eq!(resolved.url, UrlAction::PushDate(date));
    assert_eq!(resolved.url.query().as_deref(), Some("date=20260110"));
}

#[test]
fn remix_never_touches_the_archive_and_clears_the_date() {
    // An archive root that does not exist proves remix never reads it.
    let archive = ThemeArchive::new("/nonexistent/archive/root");
    let config = noir_config();
    let resolver = Resolver::new(&archive, &config);

    let resolved = resolver.remix(&mut SeqPicker::new(&[0, 0, 0])).unwrap();
    assert_eq!(resolved.url, UrlAction::ClearDate);
    assert_eq!(resolved.url.query(), None);
    assert_eq!(resolved.record.date, ThemeDate::Remixed);
    assert_eq!(resolved.record.name, "Noir x Tech Brutalist");
}

#[test]
fn missing_archive_record_surfaces_as_a_recoverable_error() {
    let dir = tempfile::tempdir().unwrap();
    let archive = ThemeArchive::new(dir.path());
    let config = noir_config();
    let resolver = Resolver::new(&archive, &config);

    let err = resolver
        .navigate(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
        .unwrap_err();
    assert!(err.is_recoverable());
}

#[test]
fn month_batch_writes_every_day_and_refreshes_latest_once() {
    let dir = tempfile::tempdir().unwrap();
    let archive = ThemeArchive::new(dir.path().join("archive"));
    let config = noir_config();
    let today = NaiveDate::from_ymd_opt(2026, 2, 10).unwrap();

    let records =
        generator::generate_month(&config, &archive, today, &mut SeqPicker::new(&[])).unwrap();
    assert_eq!(records.len(), 28);

    for day in 1..=28 {
        let date = NaiveDate::from_ymd_opt(2026, 2, day).unwrap();
        let record = archive.read_date(date).unwrap();
        assert_eq!(record.date, ThemeDate::Day(date));
    }

    let latest = archive.read_latest().unwrap();
    assert_eq!(latest.date, ThemeDate::Day(today));
}
