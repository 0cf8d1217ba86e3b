//! UI presentation state: help popup and toast notifications.

/// UI presentation concerns that are not part of the table itself.
///
/// # Example
///
/// ```ignore
/// let mut ui = UiState::new();
/// ui.show_toast("Chart exported", 20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Whether the help popup is open.
    pub show_help: bool,

    /// Toast message and remaining ticks.
    pub toast: Option<(String, u8)>,
}

impl UiState {
    /// Creates a new UI state with nothing open.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens or closes the help popup.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    // ========================================================================
    // Toast Notifications
    // ========================================================================

    /// Shows a toast notification (non-blocking overlay that auto-dismisses).
    ///
    /// Duration is in ticks of the main loop.
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }

    /// Gets the current toast message.
    #[must_use]
    pub fn toast_message(&self) -> Option<&str> {
        self.toast.as_ref().map(|(msg, _)| msg.as_str())
    }
}
