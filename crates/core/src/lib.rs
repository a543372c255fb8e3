//! Document model, style palette, layout math and slide templates
//! for procedurally built slide decks.

pub mod builder;
pub mod content;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod outline;
pub mod palette;
pub mod templates;
pub mod types;

pub use builder::{DeckBuilder, DeckSpec};
pub use error::{Error, Result};
pub use geometry::{inches, points, Emu, Rect};
pub use outline::OutlineFormatter;
pub use palette::{Palette, Rgb, Swatch};
pub use templates::{Captions, Metric, SlideSpec};
pub use types::{
    Alignment, AutoShape, Canvas, Cell, Font, Geometry, Paragraph, Shape, ShapeKind,
    ShapeSummary, Slide, SlideSummary, Table, TextBox,
};
