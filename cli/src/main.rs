use clap::{Parser, Subcommand};

mod commands;
mod logger;
mod settings;

use settings::Settings;

#[derive(Parser)]
#[command(name = "styleday", about = "Daily rotating theme generator and resolver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate and archive the theme for one date (default: today)
    Generate {
        /// Target date, ISO form (YYYY-MM-DD)
        #[arg(long)]
        date: Option<String>,
    },
    /// Generate and archive a theme for every day of the current month
    GenerateMonth,
    /// Resolve a theme request the way the page would and print it
    Resolve {
        /// The `date` URL parameter, compact form (YYYYMMDD)
        #[arg(long)]
        date: Option<String>,
        /// Generate an ephemeral remix instead of reading the archive
        #[arg(long, conflicts_with = "date")]
        remix: bool,
    },
    /// Preview the calendar month grid with selectable days
    Calendar {
        /// Whole months away from the current one (may be negative)
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
    },
}

fn main() {
    let cli = Cli::parse();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load settings: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = logger::setup_logger(&settings.logging) {
        eprintln!("Failed to initialize logger: {e}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Generate { date } => commands::generate::run(&settings, date.as_deref()),
        Commands::GenerateMonth => commands::generate::run_month(&settings),
        Commands::Resolve { date, remix } => {
            commands::resolve::run(&settings, date.as_deref(), remix)
        }
        Commands::Calendar { offset } => commands::calendar::run(&settings, offset),
    };

    if let Err(e) = result {
        log::error!("{e:#}");
        std::process::exit(1);
    }
}
