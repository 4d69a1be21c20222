//! Batch generation: one date, or every day of the current month.
//!
//! Generation failures are fatal; the process must exit non-zero so a
//! scheduled run is noticed when the archive cannot be written.

use crate::settings::Settings;
use anyhow::Context;
use chrono::Local;
use styleday_core::dates;
use styleday_core::theme::generator::{self, RandomPicker};
use styleday_core::theme::ConfigLoader;
use styleday_core::ThemeArchive;

/// Generate and persist the record for one date (default: today),
/// refreshing the `latest` alias when that date is today.
pub fn run(settings: &Settings, date: Option<&str>) -> anyhow::Result<()> {
    let config = ConfigLoader::new(&settings.theme_config)
        .load()
        .context("generator requires a valid theme config")?;
    let archive = ThemeArchive::new(&settings.archive_dir);

    let today = Local::now().date_naive();
    let target = match date {
        Some(raw) => dates::parse_iso(raw)?,
        None => today,
    };

    let record =
        generator::generate_for_date(&config, &archive, target, today, &mut RandomPicker)?;
    println!("{}  {}", record.date.label(), record.name);
    Ok(())
}

/// Generate and persist an independent record for every day of the
/// current month.
pub fn run_month(settings: &Settings) -> anyhow::Result<()> {
    let config = ConfigLoader::new(&settings.theme_config)
        .load()
        .context("generator requires a valid theme config")?;
    let archive = ThemeArchive::new(&settings.archive_dir);

    let today = Local::now().date_naive();
    let records = generator::generate_month(&config, &archive, today, &mut RandomPicker)?;
    println!(
        "generated {} themes under {}",
        records.len(),
        archive.root().display()
    );
    Ok(())
}
