//! SVG export of a record's history chart.
//!
//! Shared by the `s` key in the TUI and the headless `export` subcommand.

use std::io;
use std::path::{Path, PathBuf};

use crate::chart::{CHART_HEIGHT, CHART_WIDTH, SvgSurface, draw_history_chart};
use crate::domain::{CurrencyRecord, chronological_values, format_date, generate_history};

/// Renders the history chart of `record` as a standalone SVG document.
#[must_use]
pub fn history_svg(record: &CurrencyRecord) -> String {
    let series = generate_history(record);
    let values = chronological_values(&series);
    let oldest = series.last().map_or(record.date, |point| point.date);

    let title = format!(
        "{} {}: {} to {}",
        record.code,
        record.name,
        format_date(oldest),
        format_date(record.date)
    );
    let mut surface = SvgSurface::new(CHART_WIDTH as f64, CHART_HEIGHT as f64).with_title(title);
    draw_history_chart(&mut surface, &values);
    surface.to_svg()
}

/// Default export file name, e.g. `lazyrates_USD_2025-03-03.svg`.
#[must_use]
pub fn file_name(record: &CurrencyRecord) -> String {
    format!("lazyrates_{}_{}.svg", record.code, record.date)
}

/// Writes `content` to `file_name` in the working directory, falling back
/// to the home directory.
///
/// # Errors
///
/// Returns the working directory error if both writes fail.
pub fn save_with_fallback(file_name: &str, content: &str) -> io::Result<PathBuf> {
    let path = Path::new(file_name);
    match std::fs::write(path, content) {
        Ok(()) => Ok(path.to_path_buf()),
        Err(err) => {
            let Some(home) = dirs::home_dir() else {
                return Err(err);
            };
            let home_path = home.join(file_name);
            match std::fs::write(&home_path, content) {
                Ok(()) => Ok(home_path),
                Err(_) => Err(err),
            }
        }
    }
}
