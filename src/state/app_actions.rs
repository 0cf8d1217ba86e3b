//! Side-effecting actions for the lazyrates application.

use super::App;
use crate::constants::TOAST_TICKS;
use crate::export;

impl App {
    /// Export the expanded record's history chart to an SVG file.
    pub(crate) fn export_selected_chart(&mut self) {
        let Some(record) = self.table.selected_record() else {
            self.ui.show_toast("Expand a currency to export its chart", TOAST_TICKS);
            return;
        };

        let svg_content = export::history_svg(&record);
        let filename = export::file_name(&record);

        match export::save_with_fallback(&filename, &svg_content) {
            Ok(path) => {
                tracing::info!("Exported {} chart to {}", record.code, path.display());
                self.ui
                    .show_toast(format!("Saved {}", path.display()), TOAST_TICKS);
            }
            Err(e) => {
                tracing::warn!("Chart export failed: {e}");
                self.ui.show_toast(format!("Export failed: {e}"), TOAST_TICKS);
            }
        }
    }
}
