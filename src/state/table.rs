//! Rate table view state.
//!
//! Holds the loaded records together with load status, sort order, the
//! expanded row and the cursor. All transitions are plain methods so the
//! command layer and tests drive them the same way.
//!
//! # Load state machine
//!
//! ```text
//! Loading ──finish_load──▶ Ready
//!    │                       │
//!    └──fail_load──▶ Failed ─┴──begin_load──▶ Loading
//! ```

use crate::constants::DETAIL_HEIGHT;
use crate::domain::{CurrencyRecord, SortDirection, SortField, sort_records};

// ============================================================================
// Load State
// ============================================================================

/// Status of the rate partition load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// A load is in flight; no data is shown.
    #[default]
    Loading,
    /// Records are available.
    Ready,
    /// The last load failed and can be retried.
    Failed {
        /// Human readable failure reason.
        reason: String,
    },
}

// ============================================================================
// Table Lines
// ============================================================================

/// One visual element of the table body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLine {
    /// Record row, by index into the sorted records.
    Row(usize),
    /// Detail panel of the record at this sorted index.
    Detail(usize),
}

/// A [`TableLine`] positioned in the table body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedLine {
    pub line: TableLine,
    /// Rows from the top of the table body.
    pub offset: u16,
    /// Rows occupied; the last line may be clipped.
    pub height: u16,
}

// ============================================================================
// Table State
// ============================================================================

/// View state of the currency table.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    /// Records in load order.
    pub records: Vec<CurrencyRecord>,
    /// Load status.
    pub load_state: LoadState,
    /// Code of the expanded record.
    pub selected_code: Option<String>,
    /// Active sort field.
    pub sort_field: SortField,
    /// Active sort direction.
    pub sort_direction: SortDirection,
    /// Highlighted row, index into the sorted records.
    pub cursor: usize,
    /// First visible row, index into the sorted records.
    pub scroll: usize,
    /// Sort restored by a reload.
    initial_sort: (SortField, SortDirection),
}

impl TableState {
    /// Creates an empty, loading table with the given initial sort.
    #[must_use]
    pub fn new(sort_field: SortField, sort_direction: SortDirection) -> Self {
        Self {
            sort_field,
            sort_direction,
            initial_sort: (sort_field, sort_direction),
            ..Self::default()
        }
    }

    /// Returns `true` while a load is in flight.
    #[must_use]
    pub fn loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    // ========================================================================
    // Load Transitions
    // ========================================================================

    /// Enters `Loading`, discarding records, sort and selection.
    pub fn begin_load(&mut self) {
        let (field, direction) = self.initial_sort;
        self.records.clear();
        self.load_state = LoadState::Loading;
        self.selected_code = None;
        self.sort_field = field;
        self.sort_direction = direction;
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Publishes loaded records and enters `Ready`.
    pub fn finish_load(&mut self, records: Vec<CurrencyRecord>) {
        self.records = records;
        self.load_state = LoadState::Ready;
        self.cursor = 0;
        self.scroll = 0;
    }

    /// Enters `Failed` with the given reason.
    pub fn fail_load(&mut self, reason: impl Into<String>) {
        self.records.clear();
        self.load_state = LoadState::Failed {
            reason: reason.into(),
        };
    }

    // ========================================================================
    // Sorting
    // ========================================================================

    /// Sorts by `field`: flips direction if it is already active, otherwise
    /// switches to it in ascending order. The cursor stays on its record.
    pub fn set_sort_field(&mut self, field: SortField) {
        let highlighted = self.cursor_record().map(|r| r.code);

        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Asc;
        }

        if let Some(code) = highlighted {
            self.cursor = self.position_of(&code).unwrap_or(0);
        }
    }

    /// Records in the current sort order.
    #[must_use]
    pub fn sorted_records(&self) -> Vec<CurrencyRecord> {
        sort_records(&self.records, self.sort_field, self.sort_direction)
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Expands the record with `code`, or collapses it if already expanded.
    pub fn toggle_selection(&mut self, code: &str) {
        if self.selected_code.as_deref() == Some(code) {
            self.selected_code = None;
        } else {
            self.selected_code = Some(code.to_string());
        }
    }

    /// Toggles the record under the cursor.
    pub fn toggle_cursor_selection(&mut self) {
        if let Some(record) = self.cursor_record() {
            self.toggle_selection(&record.code);
        }
    }

    /// Collapses the expanded record, if any.
    pub fn collapse(&mut self) {
        self.selected_code = None;
    }

    /// The expanded record.
    #[must_use]
    pub fn selected_record(&self) -> Option<CurrencyRecord> {
        let code = self.selected_code.as_deref()?;
        self.records.iter().find(|r| r.code == code).cloned()
    }

    /// The record under the cursor.
    #[must_use]
    pub fn cursor_record(&self) -> Option<CurrencyRecord> {
        self.sorted_records().into_iter().nth(self.cursor)
    }

    fn position_of(&self, code: &str) -> Option<usize> {
        self.sorted_records().iter().position(|r| r.code == code)
    }

    // ========================================================================
    // Cursor Movement
    // ========================================================================

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.records.len() {
            self.cursor += 1;
        }
    }

    pub fn go_to_top(&mut self) {
        self.cursor = 0;
    }

    pub fn go_to_bottom(&mut self) {
        self.cursor = self.records.len().saturating_sub(1);
    }

    /// Moves the cursor to a sorted row index, clamped to the table.
    pub fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(self.records.len().saturating_sub(1));
    }

    // ========================================================================
    // Layout
    // ========================================================================

    /// Index of the expanded record in sort order.
    fn selected_index(&self, sorted: &[CurrencyRecord]) -> Option<usize> {
        let code = self.selected_code.as_deref()?;
        sorted.iter().position(|r| r.code == code)
    }

    /// Adjusts `scroll` so the cursor row, and its detail panel when it is
    /// the expanded row, fit in a body of `viewport` rows.
    pub fn ensure_cursor_visible(&mut self, viewport: u16) {
        let sorted = self.sorted_records();
        let selected = self.selected_index(&sorted);
        let viewport = usize::from(viewport.max(1));

        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        }
        loop {
            let rows = self.cursor + 1 - self.scroll;
            let detail = match selected {
                Some(index) if (self.scroll..=self.cursor).contains(&index) => {
                    usize::from(DETAIL_HEIGHT)
                }
                _ => 0,
            };
            if rows + detail <= viewport || self.scroll >= self.cursor {
                break;
            }
            self.scroll += 1;
        }
    }

    /// Lays out the rows and detail panel visible in a body of `viewport`
    /// rows, starting at `scroll`.
    #[must_use]
    pub fn visible_lines(&self, viewport: u16) -> Vec<PlacedLine> {
        let sorted = self.sorted_records();
        let selected = self.selected_index(&sorted);
        let mut placed = Vec::new();
        let mut offset: u16 = 0;

        for index in self.scroll..sorted.len() {
            if offset >= viewport {
                break;
            }
            placed.push(PlacedLine {
                line: TableLine::Row(index),
                offset,
                height: 1,
            });
            offset += 1;

            if selected == Some(index) && offset < viewport {
                let height = DETAIL_HEIGHT.min(viewport - offset);
                placed.push(PlacedLine {
                    line: TableLine::Detail(index),
                    offset,
                    height,
                });
                offset += height;
            }
        }
        placed
    }

    /// Finds the line drawn at `offset` rows from the top of the body.
    #[must_use]
    pub fn line_at(&self, offset: u16, viewport: u16) -> Option<TableLine> {
        self.visible_lines(viewport)
            .into_iter()
            .find(|placed| offset >= placed.offset && offset < placed.offset + placed.height)
            .map(|placed| placed.line)
    }
}

// ============================================================================
// Tests
// ============================================================================
