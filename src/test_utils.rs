//! Shared test utilities and Mother pattern factories.
#![allow(dead_code)]

use std::sync::Arc;

use chrono::NaiveDate;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::domain::{CurrencyRecord, Trend};
use crate::source::{FixtureSource, RateSource};
use crate::state::{App, AppConfig, AppMessage};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct RecordMother;

impl RecordMother {
    /// `{USD, 2025-03-03, rate "505.50", delta 1.2, UP}`.
    #[must_use]
    pub fn usd() -> CurrencyRecord {
        CurrencyRecord {
            code: "USD".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
            delta: 1.2,
            trend: Trend::Up,
            logo: None,
            name: "US Dollar".to_string(),
            units_per_quote: "1".to_string(),
            sort_key: "1".to_string(),
            rate: "505.50".to_string(),
        }
    }

    #[must_use]
    pub fn with(code: &str, rate: &str, delta: f64, sort_key: &str) -> CurrencyRecord {
        CurrencyRecord {
            code: code.to_string(),
            name: format!("{code} name"),
            rate: rate.to_string(),
            delta,
            trend: Trend::from_change(delta),
            sort_key: sort_key.to_string(),
            ..Self::usd()
        }
    }
}

pub struct AppMother;

impl AppMother {
    /// App over the bundled fixture, still loading, no task spawned.
    #[must_use]
    pub fn loading(area: Rect) -> App {
        let config = AppConfig {
            load_delay_ms: 0,
            ..AppConfig::default()
        };
        let mut app = App::with_source(&config, Arc::new(FixtureSource::bundled()));
        app.resize(area);
        app
    }

    /// App with the bundled 2025-03-03 partition loaded.
    #[must_use]
    pub fn ready(area: Rect) -> App {
        let mut app = Self::loading(area);
        app.generation = 1;
        let result = FixtureSource::bundled().load_partition(app.date);
        app.apply_message(AppMessage::PartitionLoaded {
            generation: 1,
            result,
        });
        app
    }
}

// ============================================================================
// Buffer Helpers
// ============================================================================

/// Joins buffer symbols row by row, rows separated by newlines.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area();
    let mut result = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            result.push_str(buffer[(x, y)].symbol());
        }
        if y + 1 < area.bottom() {
            result.push('\n');
        }
    }
    result
}

/// Text of one buffer row.
#[must_use]
pub fn buffer_row(buffer: &Buffer, y: u16) -> String {
    let area = buffer.area();
    (area.left()..area.right())
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}
