use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use color_eyre::eyre::Result;

mod chart;
mod commands;
mod constants;
mod domain;
mod export;
mod logging;
mod source;
mod state;
mod theme;
mod tui;
mod ui;

#[cfg(test)]
mod test_utils;

use crate::domain::SortField;
use crate::source::{FixtureSource, RateSource};
use crate::state::{App, AppConfig};

// lazyrates version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

const LOGO: &str = r#"
 _                                  _
| | __ _ _____   _ _ __ __ _| |_ ___  ___
| |/ _` |_  / | | | '__/ _` | __/ _ \/ __|
| | (_| |/ /| |_| | | | (_| | ||  __/\__ \
|_|\__,_/___|\__, |_|  \__,_|\__\___||___/
             |___/
"#;

/// lazyrates - Terminal UI for currency exchange rates
#[derive(Parser, Debug)]
#[command(version = VERSION, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Quotation date to load (YYYY-MM-DD)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// JSON fixture to read instead of the bundled dataset
    #[arg(short, long, global = true)]
    fixture: Option<PathBuf>,

    /// Simulated load delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Initial sort field
    #[arg(short, long, value_enum)]
    sort: Option<SortField>,

    /// Log filter when LAZYRATES_LOG is unset (e.g. debug, lazyrates=trace)
    #[arg(long)]
    log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Display version with ASCII art
    Version,
    /// Write one currency's history chart as SVG without starting the TUI
    Export {
        /// Currency code, e.g. USD
        #[arg(short, long)]
        code: String,
        /// Output file (defaults to lazyrates_<CODE>_<DATE>.svg)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Save the effective settings (config file plus flags) as the new defaults
    SaveConfig,
}

impl Cli {
    /// Layers command line overrides on top of the loaded config.
    fn apply_to(&self, mut config: AppConfig) -> AppConfig {
        if let Some(date) = self.date {
            config.date = date;
        }
        if let Some(fixture) = &self.fixture {
            config.fixture = Some(fixture.clone());
        }
        if let Some(delay_ms) = self.delay_ms {
            config.load_delay_ms = delay_ms;
        }
        if let Some(sort) = self.sort {
            config.sort_field = sort;
        }
        config
    }
}

/// Application entry point
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_level.as_deref()) {
        eprintln!("Logging disabled: {e}");
    }

    let config = cli.apply_to(AppConfig::load());

    match &cli.command {
        Some(Commands::Version) => {
            println!("{LOGO}");
            println!("lazyrates v{VERSION}");
            println!("A terminal UI for browsing currency exchange rates");
            Ok(())
        }
        Some(Commands::Export { code, output }) => export_headless(&config, code, output.clone()),
        Some(Commands::SaveConfig) => {
            config.save()?;
            println!("Saved {}", AppConfig::config_path()?.display());
            Ok(())
        }
        None => run_tui(&config).await,
    }
}

async fn run_tui(config: &AppConfig) -> Result<()> {
    let mut terminal = tui::init()?;
    let mut app = App::new(config);
    let result = app.run(&mut terminal).await;
    tui::restore()?;
    result
}

/// Loads the configured partition and writes `code`'s chart to disk.
fn export_headless(config: &AppConfig, code: &str, output: Option<PathBuf>) -> Result<()> {
    let source = FixtureSource::from_option(config.fixture.as_deref());
    let records = source
        .load_partition(config.date)
        .map_err(domain::RatesError::into_report)?;

    let record = records
        .iter()
        .find(|record| record.code.eq_ignore_ascii_case(code.trim()))
        .ok_or_else(|| {
            domain::RatesError::invalid_input(format!(
                "no currency '{code}' on {}",
                config.date
            ))
            .into_report()
        })?;

    let svg = export::history_svg(record);
    let path = match output {
        Some(path) => {
            std::fs::write(&path, &svg)?;
            path
        }
        None => export::save_with_fallback(&export::file_name(record), &svg)?,
    };

    tracing::info!("Exported {} chart to {}", record.code, path.display());
    println!("Saved {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::parse_from([
            "lazyrates",
            "--date",
            "2025-03-04",
            "--delay-ms",
            "0",
            "--sort",
            "rate",
        ]);
        let config = cli.apply_to(AppConfig::default());

        assert_eq!(config.date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(config.load_delay_ms, 0);
        assert_eq!(config.sort_field, SortField::Rate);
        assert!(config.fixture.is_none());
    }

    #[test]
    fn test_cli_without_flags_keeps_config() {
        let cli = Cli::parse_from(["lazyrates"]);
        assert_eq!(cli.apply_to(AppConfig::default()), AppConfig::default());
    }

    #[test]
    fn test_export_subcommand_parses() {
        let cli = Cli::parse_from(["lazyrates", "export", "--code", "usd"]);
        match cli.command {
            Some(Commands::Export { code, output }) => {
                assert_eq!(code, "usd");
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        assert!(Cli::try_parse_from(["lazyrates", "--date", "03.03.2025"]).is_err());
    }

    #[test]
    fn test_export_unknown_code_fails() {
        let err = export_headless(&AppConfig::default(), "ZZZ", None).unwrap_err();
        assert!(err.to_string().contains("ZZZ"));
    }

    #[test]
    fn test_export_writes_requested_file() {
        let path = std::env::temp_dir().join(format!("lazyrates_test_{}.svg", std::process::id()));
        export_headless(&AppConfig::default(), "USD", Some(path.clone())).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<svg"));
        assert!(content.contains("USD"));
        let _ = std::fs::remove_file(path);
    }
}
