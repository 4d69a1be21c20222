//! The page-load and remix flows, driven from the terminal: resolve a
//! request to a record and print the style bindings the page would apply.

use crate::settings::Settings;
use std::path::Path;
use styleday_core::apply::StyleBindings;
use styleday_core::content;
use styleday_core::theme::generator::RandomPicker;
use styleday_core::theme::ConfigLoader;
use styleday_core::{Resolution, Resolver, ThemeArchive};

/// Resolve a theme request the way the page would at load time.
///
/// `date` is the raw `date` URL parameter (compact `YYYYMMDD`); absent or
/// malformed values fall back to the `latest` alias. `remix` generates
/// in memory without touching the archive. A resource load failure is
/// logged and leaves the terminal "page" unchanged, never a crash.
pub fn run(settings: &Settings, date: Option<&str>, remix: bool) -> anyhow::Result<()> {
    let config = ConfigLoader::new(&settings.theme_config).load_or_fallback();
    let archive = ThemeArchive::new(&settings.archive_dir);
    let resolver = Resolver::new(&archive, &config);
    let mut picker = RandomPicker;

    let resolution = if remix {
        resolver.remix(&mut picker)
    } else {
        resolver.resolve_initial(date, &mut picker)
    };

    let resolution = match resolution {
        Ok(resolution) => resolution,
        Err(e) if e.is_recoverable() => {
            log::warn!("theme not resolved, keeping prior state: {e}");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    print_resolution(&resolution);
    print_page_content(settings);
    Ok(())
}

fn print_resolution(resolution: &Resolution) {
    let record = &resolution.record;
    println!("{}  {}", record.date.label(), record.name);
    match resolution.url.query() {
        Some(query) => println!("url: ?{query}"),
        None => println!("url: (no date parameter)"),
    }
    println!();
    print!("{}", StyleBindings::from_record(record).render_css());
}

/// Auxiliary content is decorative; missing documents are skipped.
fn print_page_content(settings: &Settings) {
    match content::load_profile(Path::new(&settings.profile)) {
        Ok(profile) => println!("\n{} — {}", profile.name, profile.description),
        Err(e) => log::warn!("{e}"),
    }
    match content::load_quotes(Path::new(&settings.quotes)) {
        Ok(quotes) => {
            if let Some(quote) = quotes.pick(&mut RandomPicker) {
                println!("\"{quote}\"");
            }
        }
        Err(e) => log::warn!("{e}"),
    }
}
