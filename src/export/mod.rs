//! Export functionality for seating charts.
//!
//! Two renderers share the chart model: a raster renderer for PNG/JPEG
//! snapshots of the room and a PDF renderer for printable documents
//! with student names.

pub mod document;
pub mod image;

pub use document::render_document;
pub use image::{render_image, render_jpeg, render_png};
