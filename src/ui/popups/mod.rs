//! Popup UI components for the lazyrates TUI.
//!
//! Popups are modal overlays drawn on top of the main UI.

pub mod help;
