//! PPTX (Office Open XML) backend for slide decks.
//!
//! Writes a [`deck_core::Canvas`] as a .pptx package (a ZIP archive of XML
//! parts) and reads packages back into a structural summary.

mod parts;
pub mod reader;
pub mod writer;
mod xml;

pub use reader::{PackageSummary, PptxReader};
pub use writer::{PptxWriter, DEFAULT_LANGUAGE};
