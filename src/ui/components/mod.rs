//! Reusable UI components for the lazyrates TUI.
//!
//! - [`toast`] - Toast notification overlay for non-blocking messages
//! - [`raster_image`] - Half-block rendering of a pixel surface

pub mod raster_image;
pub mod toast;

pub use raster_image::RasterImage;
pub use toast::render_toast;
