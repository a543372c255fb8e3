//! Document model: a canvas of slides, each an ordered list of shapes.

use crate::geometry::{Emu, Rect};
use crate::palette::Rgb;
use serde::{Deserialize, Serialize};

/// The whole document being built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    /// Slide width in EMUs, fixed at creation.
    width: Emu,

    /// Slide height in EMUs, fixed at creation.
    height: Emu,

    /// Slides in presentation order.
    slides: Vec<Slide>,
}

impl Canvas {
    /// Create an empty canvas with the given slide dimensions.
    pub fn new(width: Emu, height: Emu) -> Self {
        Self {
            width,
            height,
            slides: Vec::new(),
        }
    }

    /// Slide width in EMUs.
    pub fn width(&self) -> Emu {
        self.width
    }

    /// Slide height in EMUs.
    pub fn height(&self) -> Emu {
        self.height
    }

    /// Append a finished slide.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Get all slides, in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Get the number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Structural view of every slide, in order.
    pub fn summarize(&self) -> Vec<SlideSummary> {
        self.slides.iter().map(Slide::summarize).collect()
    }
}

/// One page of the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    /// Shapes in drawing order; later shapes draw on top.
    shapes: Vec<Shape>,
}

impl Slide {
    /// Create an empty slide.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of everything drawn so far.
    pub fn add_shape(&mut self, shape: impl Into<Shape>) {
        self.shapes.push(shape.into());
    }

    /// Get all shapes, in drawing order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get the number of shapes.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// All text boxes on the slide, in drawing order.
    pub fn text_boxes(&self) -> impl Iterator<Item = &TextBox> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::TextBox(t) => Some(t),
            _ => None,
        })
    }

    /// All tables on the slide, in drawing order.
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.shapes.iter().filter_map(|s| match s {
            Shape::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Kind and text of every shape, in drawing order.
    pub fn summarize(&self) -> SlideSummary {
        SlideSummary {
            shapes: self.shapes.iter().map(Shape::summarize).collect(),
        }
    }
}

/// A positioned visual primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    AutoShape(AutoShape),
    TextBox(TextBox),
    Table(Table),
}

impl Shape {
    /// Position and size of the shape.
    pub fn frame(&self) -> Rect {
        match self {
            Shape::AutoShape(s) => s.frame,
            Shape::TextBox(t) => t.frame,
            Shape::Table(t) => t.frame,
        }
    }

    /// Kind of the shape as it is serialized.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::AutoShape(s) => match s.geometry {
                Geometry::Rectangle => ShapeKind::Rectangle,
                Geometry::RoundedRectangle => ShapeKind::RoundedRectangle,
            },
            Shape::TextBox(_) => ShapeKind::TextBox,
            Shape::Table(_) => ShapeKind::Table,
        }
    }

    /// Text carried by the shape: paragraphs for text boxes, row-major cells for tables.
    pub fn texts(&self) -> Vec<&str> {
        match self {
            Shape::AutoShape(_) => Vec::new(),
            Shape::TextBox(t) => t.paragraphs.iter().map(|p| p.text.as_str()).collect(),
            Shape::Table(t) => t.cells().map(|c| c.text.as_str()).collect(),
        }
    }

    pub fn summarize(&self) -> ShapeSummary {
        ShapeSummary {
            kind: self.kind(),
            texts: self.texts().into_iter().map(str::to_string).collect(),
        }
    }
}

impl From<AutoShape> for Shape {
    fn from(shape: AutoShape) -> Self {
        Shape::AutoShape(shape)
    }
}

impl From<TextBox> for Shape {
    fn from(text_box: TextBox) -> Self {
        Shape::TextBox(text_box)
    }
}

impl From<Table> for Shape {
    fn from(table: Table) -> Self {
        Shape::Table(table)
    }
}

/// Preset geometry of an [`AutoShape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Geometry {
    Rectangle,
    RoundedRectangle,
}

/// Outline of rounded shapes: theme accent 1 at 50% shade.
pub const DEFAULT_OUTLINE: Rgb = Rgb::new(0x38, 0x5D, 0x8A);

/// A filled preset shape with no text of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoShape {
    pub geometry: Geometry,
    pub frame: Rect,
    pub fill: Rgb,
    /// Outline color; `None` draws no outline.
    pub outline: Option<Rgb>,
}

impl AutoShape {
    /// Filled rectangle with no outline, for backgrounds and bars.
    pub fn rectangle(frame: Rect, fill: Rgb) -> Self {
        Self {
            geometry: Geometry::Rectangle,
            frame,
            fill,
            outline: None,
        }
    }

    /// Filled rounded rectangle drawn with [`DEFAULT_OUTLINE`].
    pub fn rounded(frame: Rect, fill: Rgb) -> Self {
        Self {
            geometry: Geometry::RoundedRectangle,
            frame,
            fill,
            outline: Some(DEFAULT_OUTLINE),
        }
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Character formatting applied to a whole paragraph or cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Size in points.
    pub size: f64,
    pub bold: bool,
    /// `None` inherits the theme text color.
    pub color: Option<Rgb>,
}

impl Font {
    /// Regular font of `size` points in the theme text color.
    pub fn new(size: f64) -> Self {
        Self {
            size,
            bold: false,
            color: None,
        }
    }

    /// Bold variant.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Use an explicit color.
    pub fn color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }
}

/// A single line of styled text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    pub text: String,
    pub font: Font,
    pub alignment: Alignment,
    /// Extra space after the paragraph, in points.
    pub space_after: Option<f64>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, font: Font) -> Self {
        Self {
            text: text.into(),
            font,
            alignment: Alignment::Left,
            space_after: None,
        }
    }

    pub fn centered(mut self) -> Self {
        self.alignment = Alignment::Center;
        self
    }

    pub fn space_after(mut self, points: f64) -> Self {
        self.space_after = Some(points);
        self
    }
}

/// A frame holding one or more paragraphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBox {
    pub frame: Rect,
    pub word_wrap: bool,
    pub paragraphs: Vec<Paragraph>,
}

impl TextBox {
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            word_wrap: false,
            paragraphs: Vec::new(),
        }
    }

    /// Text box holding exactly one paragraph.
    pub fn single(frame: Rect, paragraph: Paragraph) -> Self {
        let mut text_box = Self::new(frame);
        text_box.paragraphs.push(paragraph);
        text_box
    }

    pub fn wrapped(mut self) -> Self {
        self.word_wrap = true;
        self
    }

    pub fn push(&mut self, paragraph: Paragraph) {
        self.paragraphs.push(paragraph);
    }

    /// Non-blank paragraph texts, in order.
    pub fn non_empty_lines(&self) -> Vec<&str> {
        self.paragraphs
            .iter()
            .map(|p| p.text.as_str())
            .filter(|s| !s.trim().is_empty())
            .collect()
    }
}

/// One table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub font: Font,
    pub alignment: Alignment,
    /// `None` leaves the cell unfilled.
    pub fill: Option<Rgb>,
}

/// A fixed-size grid of cells with evenly divided columns and rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub frame: Rect,
    columns: usize,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Build a table; every row must have `columns` cells.
    pub fn new(frame: Rect, columns: usize, rows: Vec<Vec<Cell>>) -> crate::Result<Self> {
        if columns == 0 || rows.is_empty() {
            return Err(crate::Error::EmptyTable { slide: None });
        }
        if let Some((idx, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != columns) {
            return Err(crate::Error::RaggedTable {
                row: idx,
                expected: columns,
                found: row.len(),
            });
        }
        Ok(Self {
            frame,
            columns,
            rows,
        })
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    /// Get the number of rows, header included.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get all rows; row 0 is the header.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flatten()
    }

    /// Get the cell at `row`, `column`, if it exists.
    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Width of each grid column (the last absorbs rounding).
    pub fn column_widths(&self) -> Vec<Emu> {
        split_evenly(self.frame.width, self.columns)
    }

    /// Height of each grid row (the last absorbs rounding).
    pub fn row_heights(&self) -> Vec<Emu> {
        split_evenly(self.frame.height, self.rows.len())
    }
}

fn split_evenly(total: Emu, parts: usize) -> Vec<Emu> {
    if parts == 0 {
        return Vec::new();
    }
    let each = total / parts as Emu;
    let mut sizes = vec![each; parts];
    if let Some(last) = sizes.last_mut() {
        *last = total - each * (parts as Emu - 1);
    }
    sizes
}

/// Kind of a shape as it appears in a serialized slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    RoundedRectangle,
    TextBox,
    Table,
}

/// Kind and text content of one shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeSummary {
    pub kind: ShapeKind,
    pub texts: Vec<String>,
}

/// Ordered shape summaries for one slide.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideSummary {
    pub shapes: Vec<ShapeSummary>,
}
