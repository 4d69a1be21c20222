use crate::archive::ThemeArchive;
use crate::dates;
use crate::error::{ThemeError, ThemeResult};
use crate::theme::types::{FontPairing, Palette, ThemeConfig, ThemeDate, ThemeRecord};
use chrono::NaiveDate;
use rand::Rng;

/// Uniform "pick one of N" selection, injectable so tests can substitute
/// a deterministic stub and assert exact composed output.
pub trait Picker {
    /// Return an index in `0..len`. `len` is always non-zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Production picker backed by the thread-local RNG. No seeding across
/// runs: two generations for the same date may differ, and the archive
/// is the only durable record of what a day's theme was.
#[derive(Debug, Default)]
pub struct RandomPicker;

impl Picker for RandomPicker {
    fn pick(&mut self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

fn pick_from<'a, T>(items: &'a [T], axis: &'static str, picker: &mut dyn Picker) -> ThemeResult<&'a T> {
    if items.is_empty() {
        return Err(ThemeError::EmptyAxis { axis });
    }
    Ok(&items[picker.pick(items.len())])
}

fn compose(palette: &Palette, pairing: &FontPairing, layout: &str, date: ThemeDate) -> ThemeRecord {
    let mut colors = palette.colors.clone();
    // Color and font keys are disjoint, so this union never drops a key.
    colors.extend(pairing.fonts.clone());

    ThemeRecord {
        date,
        name: format!("{} x {}", palette.name, pairing.name),
        layout: Some(layout.to_string()),
        font: pairing.fonts.get("--body-font").cloned(),
        palette_name: Some(palette.name.clone()),
        font_name: Some(pairing.name.clone()),
        colors,
    }
}

/// Produce one complete theme record for the given date by independent
/// uniform draws from each config axis. An empty axis is a fatal
/// precondition violation.
pub fn generate(
    config: &ThemeConfig,
    date: ThemeDate,
    picker: &mut dyn Picker,
) -> ThemeResult<ThemeRecord> {
    let palette = pick_from(&config.palettes, "palettes", picker)?;
    let pairing = pick_from(&config.font_pairings, "fontPairings", picker)?;
    let layout = pick_from(&config.layouts, "layouts", picker)?;
    Ok(compose(palette, pairing, layout, date))
}

/// Generate and persist the record for one calendar date, refreshing the
/// `latest` alias when that date is `today`.
pub fn generate_for_date(
    config: &ThemeConfig,
    archive: &ThemeArchive,
    date: NaiveDate,
    today: NaiveDate,
    picker: &mut dyn Picker,
) -> ThemeResult<ThemeRecord> {
    let record = generate(config, ThemeDate::Day(date), picker)?;
    archive.write(&record)?;
    if date == today {
        archive.write_latest(&record)?;
    }
    Ok(record)
}

/// Batch mode: generate and persist an independent record for every day
/// of the month containing `today`. Each date's write is independent, but
/// the run aborts on the first failure so operators notice; files written
/// before the failure remain valid.
pub fn generate_month(
    config: &ThemeConfig,
    archive: &ThemeArchive,
    today: NaiveDate,
    picker: &mut dyn Picker,
) -> ThemeResult<Vec<ThemeRecord>> {
    use chrono::Datelike;

    let year = today.year();
    let month = today.month();
    let days = dates::days_in_month(year, month);
    log::info!("generating themes for {year}-{month:02} ({days} days)");

    let mut records = Vec::with_capacity(days as usize);
    for day in 1..=days {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            ThemeError::InvalidDate {
                value: format!("{year}-{month:02}-{day:02}"),
                reason: "not a calendar date".to_string(),
            }
        })?;
        let record = generate_for_date(config, archive, date, today, picker)?;
        log::debug!("saved {}.json", dates::iso(date));
        records.push(record);
    }
    Ok(records)
}
