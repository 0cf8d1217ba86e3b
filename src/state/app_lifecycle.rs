//! Application lifecycle management.
//!
//! - `new()` / `with_source()` - Creates a new application instance
//! - `run()` - Main event loop
//! - `start_load()` - Spawns the partition load task

use std::sync::Arc;
use std::time::Instant;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::layout::Rect;
use tokio::sync::mpsc;

use crate::constants::TICK_RATE;
use crate::source::{FixtureSource, RateSource};
use crate::tui::Tui;
use crate::ui;

use super::{App, AppConfig, AppMessage, TableState, UiState};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates an App reading from the fixture named in `config`, or the
    /// bundled one.
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let source = FixtureSource::from_option(config.fixture.as_deref());
        Self::with_source(config, Arc::new(source))
    }

    /// Creates an App reading from an explicit source.
    #[must_use]
    pub fn with_source(config: &AppConfig, source: Arc<dyn RateSource>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            table: TableState::new(config.sort_field, config.sort_direction),
            ui: UiState::new(),
            date: config.date,
            load_delay: config.load_delay(),
            exit: false,
            terminal_area: Rect::default(),
            generation: 0,
            source,
            message_tx,
            message_rx,
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    /// Returns an error if the terminal operations fail.
    pub async fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.start_load();

        let mut last_tick = Instant::now();
        let size = terminal.size()?;
        self.resize(Rect::new(0, 0, size.width, size.height));
        terminal.draw(|frame| ui::render(self, frame))?;

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => {
                        self.handle_mouse_input(mouse);
                    }
                    Event::Resize(width, height) => {
                        self.resize(Rect::new(0, 0, width, height));
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.ui.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        tracing::info!("Exiting");
        Ok(())
    }

    /// Records the terminal size and keeps the cursor row in view.
    pub(crate) fn resize(&mut self, area: Rect) {
        self.terminal_area = area;
        self.keep_cursor_visible();
    }

    pub(crate) fn keep_cursor_visible(&mut self) {
        let body = ui::layout::table_body(self.terminal_area);
        self.table.ensure_cursor_visible(body.height);
    }

    // ========================================================================
    // Loading
    // ========================================================================

    /// Resets the table to `Loading` and spawns a load for the current date.
    ///
    /// The task sleeps for the configured delay, reads the partition, and
    /// posts [`AppMessage::PartitionLoaded`] tagged with a fresh generation.
    pub(crate) fn start_load(&mut self) {
        self.generation += 1;
        self.table.begin_load();

        let generation = self.generation;
        let date = self.date;
        let delay = self.load_delay;
        let source = Arc::clone(&self.source);
        let message_tx = self.message_tx.clone();

        tracing::info!(
            "Loading rates for {date} from {} (generation {generation})",
            source.describe()
        );

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let result = source.load_partition(date);
            let _ = message_tx.send(AppMessage::PartitionLoaded { generation, result });
        });
    }

    /// Starts a fresh load unless one is already in flight.
    pub(crate) fn refresh(&mut self) {
        if self.table.loading() {
            tracing::debug!("Refresh ignored, load already in flight");
            return;
        }
        self.start_load();
    }
}
