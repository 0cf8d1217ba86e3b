//! Message processing for the lazyrates application.

use super::{App, AppMessage};

impl App {
    /// Drains and applies every pending message.
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            self.apply_message(message);
        }
    }

    pub(crate) fn apply_message(&mut self, message: AppMessage) {
        match message {
            AppMessage::PartitionLoaded { generation, .. } if generation != self.generation => {
                tracing::debug!(
                    "Dropping stale load result (generation {generation}, current {})",
                    self.generation
                );
            }
            AppMessage::PartitionLoaded {
                result: Ok(records),
                ..
            } => {
                tracing::info!("Loaded {} records for {}", records.len(), self.date);
                self.table.finish_load(records);
                self.keep_cursor_visible();
            }
            AppMessage::PartitionLoaded {
                result: Err(error), ..
            } => {
                tracing::warn!("Rate load failed: {error}");
                self.table.fail_load(error.to_string());
            }
        }
    }
}
