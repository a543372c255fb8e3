//! Slide specifications and the one-function-per-kind renderers.
//!
//! A [`SlideSpec`] says what to show; [`render`] dispatches to the template
//! that knows how to draw that kind of slide.

use crate::error::{Error, Result};
use crate::geometry::{inches, Emu, Rect};
use crate::layout;
use crate::palette::{Palette, Swatch};
use crate::types::{Alignment, AutoShape, Cell, Font, Paragraph, Slide, Table, TextBox};
use serde::{Deserialize, Serialize};

/// Height of the title bar on content-style slides, in inches.
const TITLE_BAR_HEIGHT: f64 = 1.2;

/// One slide to render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlideSpec {
    Title {
        title: String,
        #[serde(default)]
        subtitle: Option<String>,
    },
    Section {
        number: u32,
        title: String,
    },
    Content {
        title: String,
        lines: Vec<String>,
        #[serde(default)]
        table: Option<Vec<Vec<String>>>,
    },
    Table {
        title: String,
        rows: Vec<Vec<String>>,
        #[serde(default)]
        subtitle: Option<String>,
    },
    Comparison {
        title: String,
        before: Vec<String>,
        after: Vec<String>,
    },
    Metrics {
        title: String,
        metrics: Vec<Metric>,
    },
    Conclusion {
        points: Vec<String>,
    },
    Closing,
}

impl SlideSpec {
    /// Short name of the slide kind, for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SlideSpec::Title { .. } => "title",
            SlideSpec::Section { .. } => "section",
            SlideSpec::Content { .. } => "content",
            SlideSpec::Table { .. } => "table",
            SlideSpec::Comparison { .. } => "comparison",
            SlideSpec::Metrics { .. } => "metrics",
            SlideSpec::Conclusion { .. } => "conclusion",
            SlideSpec::Closing => "closing",
        }
    }
}

/// A headline number on a metrics slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
    pub color: Swatch,
}

impl Metric {
    pub fn new(value: impl Into<String>, label: impl Into<String>, color: Swatch) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            color,
        }
    }
}

/// Fixed wording used by templates that take no text for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Captions {
    pub before: String,
    pub after: String,
    pub conclusion_heading: String,
    pub closing_heading: String,
    pub closing_prompt: String,
    pub closing_footer: String,
}

impl Default for Captions {
    fn default() -> Self {
        Self {
            before: "AVANT".to_string(),
            after: "APRES".to_string(),
            conclusion_heading: "Points Cles a Retenir".to_string(),
            closing_heading: "Merci !".to_string(),
            closing_prompt: "Questions ?".to_string(),
            closing_footer: "Projet E-Commerce Symfony - Decembre 2025".to_string(),
        }
    }
}

/// Everything a template needs besides its own spec.
#[derive(Debug, Clone, Copy)]
pub struct TemplateContext<'a> {
    pub width: Emu,
    pub height: Emu,
    pub palette: &'a Palette,
    pub captions: &'a Captions,
}

impl<'a> TemplateContext<'a> {
    fn color(&self, swatch: Swatch) -> crate::palette::Rgb {
        self.palette.color(swatch)
    }

    fn white_font(&self, size: f64) -> Font {
        Font::new(size).color(self.color(Swatch::White))
    }

    fn full_bleed(&self, slide: &mut Slide, swatch: Swatch) {
        slide.add_shape(AutoShape::rectangle(
            Rect::new(0, 0, self.width, self.height),
            self.color(swatch),
        ));
    }

    fn title_bar(&self, slide: &mut Slide, title: &str) {
        slide.add_shape(AutoShape::rectangle(
            Rect::new(0, 0, self.width, inches(TITLE_BAR_HEIGHT)),
            self.color(Swatch::Primary),
        ));
        slide.add_shape(TextBox::single(
            Rect::from_inches(0.5, 0.3, 9.0, 0.7),
            Paragraph::new(title, self.white_font(28.0).bold()),
        ));
    }
}

/// Render one spec into a new slide.
pub fn render(ctx: &TemplateContext<'_>, spec: &SlideSpec) -> Result<Slide> {
    match spec {
        SlideSpec::Title { title, subtitle } => Ok(title_slide(ctx, title, subtitle.as_deref())),
        SlideSpec::Section { number, title } => Ok(section_slide(ctx, *number, title)),
        SlideSpec::Content {
            title,
            lines,
            table,
        } => content_slide(ctx, title, lines, table.as_deref()),
        SlideSpec::Table {
            title,
            rows,
            subtitle,
        } => table_slide(ctx, title, rows, subtitle.as_deref()),
        SlideSpec::Comparison {
            title,
            before,
            after,
        } => Ok(comparison_slide(ctx, title, before, after)),
        SlideSpec::Metrics { title, metrics } => Ok(metrics_slide(ctx, title, metrics)),
        SlideSpec::Conclusion { points } => Ok(conclusion_slide(ctx, points)),
        SlideSpec::Closing => Ok(closing_slide(ctx)),
    }
}

fn present(text: Option<&str>) -> Option<&str> {
    text.filter(|s| !s.is_empty())
}

/// Full-bleed primary background with a centered heading and optional subheading.
pub fn title_slide(ctx: &TemplateContext<'_>, title: &str, subtitle: Option<&str>) -> Slide {
    let mut slide = Slide::new();
    ctx.full_bleed(&mut slide, Swatch::Primary);

    slide.add_shape(TextBox::single(
        Rect::from_inches(0.5, 2.5, 9.0, 1.5),
        Paragraph::new(title, ctx.white_font(44.0).bold()).centered(),
    ));

    if let Some(subtitle) = present(subtitle) {
        slide.add_shape(TextBox::single(
            Rect::from_inches(0.5, 4.0, 9.0, 1.0),
            Paragraph::new(subtitle, Font::new(24.0).color(ctx.color(Swatch::Light))).centered(),
        ));
    }

    slide
}

/// Section divider: "SECTION n" label above the section heading.
pub fn section_slide(ctx: &TemplateContext<'_>, number: u32, title: &str) -> Slide {
    let mut slide = Slide::new();
    ctx.full_bleed(&mut slide, Swatch::Secondary);

    slide.add_shape(TextBox::single(
        Rect::from_inches(0.5, 2.0, 9.0, 1.0),
        Paragraph::new(
            format!("SECTION {}", number),
            Font::new(20.0).color(ctx.color(Swatch::Accent)),
        )
        .centered(),
    ));
    slide.add_shape(TextBox::single(
        Rect::from_inches(0.5, 2.8, 9.0, 1.5),
        Paragraph::new(title, ctx.white_font(40.0).bold()).centered(),
    ));

    slide
}

/// Title bar, stacked paragraphs, and an optional table below them.
///
/// With a table, the paragraph region stops above the table instead of
/// running underneath it.
pub fn content_slide(
    ctx: &TemplateContext<'_>,
    title: &str,
    lines: &[String],
    table: Option<&[Vec<String>]>,
) -> Result<Slide> {
    let mut slide = Slide::new();
    ctx.title_bar(&mut slide, title);

    let table_frame = Rect::from_inches(0.5, 3.5, 9.0, 2.5);
    let table = table.filter(|rows| !rows.is_empty());

    if !lines.is_empty() {
        let mut frame = Rect::from_inches(0.5, 1.5, 9.0, 5.0);
        if table.is_some() {
            frame.height = table_frame.y - inches(0.2) - frame.y;
            log::warn!(
                "Slide '{}': shortening text region to keep it clear of the table",
                title
            );
        }

        let mut body = TextBox::new(frame).wrapped();
        for line in lines {
            body.push(
                Paragraph::new(line.as_str(), Font::new(18.0).color(ctx.color(Swatch::Dark)))
                    .space_after(12.0),
            );
        }
        slide.add_shape(body);
    }

    if let Some(rows) = table {
        let header_font = ctx.white_font(12.0).bold();
        let primary = ctx.color(Swatch::Primary);
        let grid = build_table(title, table_frame, rows, |row, text| {
            if row == 0 {
                cell(text, header_font, Alignment::Left, Some(primary))
            } else {
                cell(text, Font::new(12.0), Alignment::Left, None)
            }
        })?;
        slide.add_shape(grid);
    }

    Ok(slide)
}

/// Title bar, optional subtitle, and a banded table.
pub fn table_slide(
    ctx: &TemplateContext<'_>,
    title: &str,
    rows: &[Vec<String>],
    subtitle: Option<&str>,
) -> Result<Slide> {
    let mut slide = Slide::new();
    ctx.title_bar(&mut slide, title);

    let subtitle = present(subtitle);
    if let Some(subtitle) = subtitle {
        slide.add_shape(TextBox::single(
            Rect::from_inches(0.5, 1.3, 9.0, 0.5),
            Paragraph::new(subtitle, Font::new(16.0).color(ctx.color(Swatch::Secondary))),
        ));
    }

    let top = if subtitle.is_some() { 2.0 } else { 1.5 };
    let frame = Rect::from_inches(0.3, top, 9.4, 4.0);
    let header_font = ctx.white_font(11.0).bold();
    let primary = ctx.color(Swatch::Primary);
    let light = ctx.color(Swatch::Light);
    let white = ctx.color(Swatch::White);

    let grid = build_table(title, frame, rows, |row, text| {
        if row == 0 {
            cell(text, header_font, Alignment::Center, Some(primary))
        } else {
            let band = if row % 2 == 0 { light } else { white };
            cell(text, Font::new(11.0), Alignment::Center, Some(band))
        }
    })?;
    slide.add_shape(grid);

    Ok(slide)
}

/// Title bar and two side-by-side panels: before (left) and after (right).
pub fn comparison_slide(
    ctx: &TemplateContext<'_>,
    title: &str,
    before: &[String],
    after: &[String],
) -> Slide {
    let mut slide = Slide::new();
    ctx.title_bar(&mut slide, title);

    let columns = [
        (0.5, Swatch::Danger, ctx.captions.before.as_str(), "-", before),
        (5.2, Swatch::Accent, ctx.captions.after.as_str(), "+", after),
    ];

    for (x, swatch, caption, marker, items) in columns {
        slide.add_shape(AutoShape::rounded(
            Rect::from_inches(x, 1.5, 4.3, 4.5),
            ctx.color(swatch),
        ));
        slide.add_shape(TextBox::single(
            Rect::from_inches(x + 0.2, 1.7, 4.0, 0.5),
            Paragraph::new(caption, ctx.white_font(24.0).bold()).centered(),
        ));

        let mut list = TextBox::new(Rect::from_inches(x + 0.2, 2.3, 4.0, 3.5));
        for item in items {
            list.push(
                Paragraph::new(format!("{} {}", marker, item), ctx.white_font(16.0))
                    .space_after(10.0),
            );
        }
        slide.add_shape(list);
    }

    slide
}

/// Title bar and a centered grid of colored cards, at most three per row.
pub fn metrics_slide(ctx: &TemplateContext<'_>, title: &str, metrics: &[Metric]) -> Slide {
    let mut slide = Slide::new();
    ctx.title_bar(&mut slide, title);

    let frames = layout::metric_grid(metrics.len(), ctx.width);
    for (metric, frame) in metrics.iter().zip(frames) {
        slide.add_shape(AutoShape::rounded(frame, ctx.color(metric.color)));
        slide.add_shape(TextBox::single(
            Rect::new(frame.x, frame.y + inches(0.3), frame.width, inches(1.0)),
            Paragraph::new(metric.value.as_str(), ctx.white_font(36.0).bold()).centered(),
        ));
        slide.add_shape(TextBox::single(
            Rect::new(frame.x, frame.y + inches(1.2), frame.width, inches(0.6)),
            Paragraph::new(metric.label.as_str(), ctx.white_font(14.0)).centered(),
        ));
    }

    slide
}

/// Heading over one alternating-colored bar per takeaway.
pub fn conclusion_slide(ctx: &TemplateContext<'_>, points: &[String]) -> Slide {
    let mut slide = Slide::new();
    ctx.full_bleed(&mut slide, Swatch::Secondary);

    slide.add_shape(TextBox::single(
        Rect::from_inches(0.5, 0.5, 9.0, 1.0),
        Paragraph::new(
            ctx.captions.conclusion_heading.as_str(),
            ctx.white_font(32.0).bold(),
        )
        .centered(),
    ));

    for (i, point) in points.iter().enumerate() {
        let y = layout::conclusion_bar_top(i);
        let fill = if i % 2 == 0 {
            Swatch::Accent
        } else {
            Swatch::Primary
        };
        slide.add_shape(AutoShape::rounded(
            Rect::from_inches(0.5, y, 9.0, 0.8),
            ctx.color(fill),
        ));
        slide.add_shape(TextBox::single(
            Rect::from_inches(0.7, y + 0.2, 8.6, 0.6),
            Paragraph::new(format!("[OK] {}", point), ctx.white_font(18.0)),
        ));
    }

    slide
}

/// Static thank-you screen.
pub fn closing_slide(ctx: &TemplateContext<'_>) -> Slide {
    let mut slide = Slide::new();
    ctx.full_bleed(&mut slide, Swatch::Primary);

    let light = Font::new(0.0).color(ctx.color(Swatch::Light));
    slide.add_shape(TextBox::single(
        Rect::from_inches(0.5, 2.0, 9.0, 1.5),
        Paragraph::new(
            ctx.captions.closing_heading.as_str(),
            ctx.white_font(60.0).bold(),
        )
        .centered(),
    ));
    slide.add_shape(TextBox::single(
        Rect::from_inches(0.5, 3.5, 9.0, 1.0),
        Paragraph::new(
            ctx.captions.closing_prompt.as_str(),
            Font { size: 32.0, ..light },
        )
        .centered(),
    ));
    slide.add_shape(TextBox::single(
        Rect::from_inches(0.5, 5.5, 9.0, 1.0),
        Paragraph::new(
            ctx.captions.closing_footer.as_str(),
            Font { size: 16.0, ..light },
        )
        .centered(),
    ));

    slide
}

fn cell(text: &str, font: Font, alignment: Alignment, fill: Option<crate::palette::Rgb>) -> Cell {
    Cell {
        text: text.to_string(),
        font,
        alignment,
        fill,
    }
}

/// Shape a grid of strings into a [`Table`], styling each cell by its row index.
fn build_table<F>(title: &str, frame: Rect, rows: &[Vec<String>], style: F) -> Result<Table>
where
    F: Fn(usize, &str) -> Cell,
{
    let columns = rows.first().map(Vec::len).unwrap_or(0);
    if columns == 0 {
        return Err(Error::EmptyTable {
            slide: Some(title.to_string()),
        });
    }

    let cells: Vec<Vec<Cell>> = rows
        .iter()
        .enumerate()
        .map(|(i, row)| row.iter().map(|text| style(i, text)).collect::<Vec<_>>())
        .collect();

    Table::new(frame, columns, cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Geometry, Shape, DEFAULT_OUTLINE};

    fn with_ctx<T>(f: impl FnOnce(&TemplateContext<'_>) -> T) -> T {
        let palette = Palette::default();
        let captions = Captions::default();
        let ctx = TemplateContext {
            width: inches(10.0),
            height: inches(7.5),
            palette: &palette,
            captions: &captions,
        };
        f(&ctx)
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn grid(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter().map(|r| strings(r)).collect()
    }

    #[test]
    fn test_title_slide_subtitle_optional() {
        with_ctx(|ctx| {
            assert_eq!(title_slide(ctx, "Deck", None).shape_count(), 2);
            assert_eq!(title_slide(ctx, "Deck", Some("")).shape_count(), 2);
            let slide = title_slide(ctx, "Deck", Some("Sub"));
            assert_eq!(slide.shape_count(), 3);
            assert_eq!(slide.shapes()[2].texts(), vec!["Sub"]);
        });
    }

    #[test]
    fn test_section_label() {
        with_ctx(|ctx| {
            let slide = section_slide(ctx, 3, "Delivery");
            assert_eq!(slide.shapes()[1].texts(), vec!["SECTION 3"]);
            assert_eq!(slide.shapes()[2].texts(), vec!["Delivery"]);
        });
    }

    #[test]
    fn test_content_paragraphs_in_order() {
        with_ctx(|ctx| {
            let lines = strings(&["First", "", "Second", "Third"]);
            let slide = content_slide(ctx, "Context", &lines, None).unwrap();

            let body = slide.text_boxes().nth(1).unwrap();
            assert_eq!(body.paragraphs.len(), 4);
            assert_eq!(body.non_empty_lines(), vec!["First", "Second", "Third"]);
            assert!(body.word_wrap);
            for paragraph in &body.paragraphs {
                assert_eq!(paragraph.font.size, 18.0);
                assert_eq!(paragraph.font.color, Some(ctx.color(Swatch::Dark)));
                assert_eq!(paragraph.space_after, Some(12.0));
            }
        });
    }

    #[test]
    fn test_content_without_lines_has_only_title_bar() {
        with_ctx(|ctx| {
            let slide = content_slide(ctx, "Empty", &[], None).unwrap();
            assert_eq!(slide.shape_count(), 2);
        });
    }

    #[test]
    fn test_content_empty_table_is_skipped() {
        with_ctx(|ctx| {
            let lines = strings(&["Only line"]);
            let slide = content_slide(ctx, "Bare", &lines, Some(&[])).unwrap();

            assert_eq!(slide.tables().count(), 0);
            let body = slide.text_boxes().nth(1).unwrap();
            assert_eq!(body.frame, Rect::from_inches(0.5, 1.5, 9.0, 5.0));
        });
    }

    #[test]
    fn test_content_table_does_not_overlap_text() {
        with_ctx(|ctx| {
            let lines = strings(&["Only line"]);
            let rows = grid(&[&["A", "B"], &["1", "2"]]);
            let slide = content_slide(ctx, "Mixed", &lines, Some(&rows)).unwrap();

            let body = slide.text_boxes().nth(1).unwrap();
            let table = slide.tables().next().unwrap();
            assert!(!body.frame.overlaps(&table.frame));
            assert_eq!(table.cell(0, 0).unwrap().fill, Some(ctx.color(Swatch::Primary)));
            assert_eq!(table.cell(1, 0).unwrap().fill, None);
        });
    }

    #[test]
    fn test_table_slide_cells_and_banding() {
        with_ctx(|ctx| {
            let rows = grid(&[
                &["H1", "H2", "H3"],
                &["a", "b", "c"],
                &["d", "e", "f"],
                &["g", "h", "i"],
            ]);
            let slide = table_slide(ctx, "Grid", &rows, None).unwrap();
            let table = slide.tables().next().unwrap();

            assert_eq!(table.cells().count(), 12);
            let header: Vec<_> = table.rows()[0].iter().map(|c| c.fill).collect();
            for body_row in &table.rows()[1..] {
                for cell in body_row {
                    assert!(!header.contains(&cell.fill));
                }
            }
            assert_eq!(table.cell(1, 0).unwrap().fill, Some(ctx.color(Swatch::White)));
            assert_eq!(table.cell(2, 0).unwrap().fill, Some(ctx.color(Swatch::Light)));
            assert!(table.cell(0, 1).unwrap().font.bold);
            assert_eq!(table.cell(3, 2).unwrap().alignment, Alignment::Center);
        });
    }

    #[test]
    fn test_table_slide_subtitle_moves_table() {
        with_ctx(|ctx| {
            let rows = grid(&[&["H"], &["v"]]);
            let plain = table_slide(ctx, "T", &rows, None).unwrap();
            let sub = table_slide(ctx, "T", &rows, Some("Sub")).unwrap();

            assert_eq!(plain.tables().next().unwrap().frame.y, inches(1.5));
            assert_eq!(sub.tables().next().unwrap().frame.y, inches(2.0));
            assert_eq!(sub.shape_count(), plain.shape_count() + 1);
        });
    }

    #[test]
    fn test_table_slide_rejects_empty_grid() {
        with_ctx(|ctx| {
            assert!(matches!(
                table_slide(ctx, "Nothing", &[], None),
                Err(Error::EmptyTable { slide: Some(title) }) if title == "Nothing"
            ));
            assert!(table_slide(ctx, "Blank", &[vec![]], None).is_err());
        });
    }

    #[test]
    fn test_comparison_prefixes() {
        with_ctx(|ctx| {
            let slide = comparison_slide(ctx, "Cmp", &strings(&["slow"]), &strings(&["fast"]));
            let texts: Vec<Vec<&str>> = slide.shapes().iter().map(Shape::texts).collect();

            assert!(texts.contains(&vec!["- slow"]));
            assert!(texts.contains(&vec!["+ fast"]));
            assert!(texts.contains(&vec!["AVANT"]));
            assert!(texts.contains(&vec!["APRES"]));

            let panels: Vec<_> = slide
                .shapes()
                .iter()
                .filter_map(|s| match s {
                    Shape::AutoShape(a) if a.geometry == Geometry::RoundedRectangle => Some(a),
                    _ => None,
                })
                .collect();
            assert_eq!(panels.len(), 2);
            assert_eq!(panels[0].frame.width, panels[1].frame.width);
            assert!(panels[0].frame.x < panels[1].frame.x);
            assert_eq!(panels[0].fill, ctx.color(Swatch::Danger));
            assert_eq!(panels[1].fill, ctx.color(Swatch::Accent));
        });
    }

    #[test]
    fn test_metrics_cards() {
        with_ctx(|ctx| {
            let metrics: Vec<_> = (0..4)
                .map(|i| Metric::new(format!("{i}%"), "Label", Swatch::Accent))
                .collect();
            let slide = metrics_slide(ctx, "KPIs", &metrics);

            // title bar + title + 3 shapes per card
            assert_eq!(slide.shape_count(), 2 + 4 * 3);
            assert_eq!(slide.shapes()[3].texts(), vec!["0%"]);
            assert_eq!(slide.shapes()[4].texts(), vec!["Label"]);
        });
    }

    #[test]
    fn test_conclusion_alternates_fill() {
        with_ctx(|ctx| {
            let slide = conclusion_slide(ctx, &strings(&["a", "b", "c"]));
            let fills: Vec<_> = slide
                .shapes()
                .iter()
                .filter_map(|s| match s {
                    Shape::AutoShape(a) if a.geometry == Geometry::RoundedRectangle => Some(a.fill),
                    _ => None,
                })
                .collect();
            let accent = ctx.color(Swatch::Accent);
            let primary = ctx.color(Swatch::Primary);
            assert_eq!(fills, vec![accent, primary, accent]);
            assert_eq!(slide.shapes().last().unwrap().texts(), vec!["[OK] c"]);
        });
    }

    #[test]
    fn test_rounded_shapes_keep_outline() {
        with_ctx(|ctx| {
            let metrics = [Metric::new("1", "One", Swatch::Warning)];
            let slides = [
                title_slide(ctx, "Deck", Some("Sub")),
                section_slide(ctx, 1, "Intro"),
                comparison_slide(ctx, "Cmp", &strings(&["a"]), &strings(&["b"])),
                metrics_slide(ctx, "KPIs", &metrics),
                conclusion_slide(ctx, &strings(&["a", "b"])),
                closing_slide(ctx),
            ];

            let mut rounded = 0;
            for slide in &slides {
                for shape in slide.shapes() {
                    if let Shape::AutoShape(a) = shape {
                        match a.geometry {
                            Geometry::RoundedRectangle => {
                                rounded += 1;
                                assert_eq!(a.outline, Some(DEFAULT_OUTLINE));
                            }
                            Geometry::Rectangle => assert_eq!(a.outline, None),
                        }
                    }
                }
            }
            assert_eq!(rounded, 2 + 1 + 2);
        });
    }

    #[test]
    fn test_closing_is_static() {
        with_ctx(|ctx| {
            let slide = closing_slide(ctx);
            assert_eq!(slide.shape_count(), 4);
            assert_eq!(slide.shapes()[1].texts(), vec!["Merci !"]);
        });
    }

    #[test]
    fn test_slide_json_tagging() {
        let spec: SlideSpec =
            serde_json::from_str(r#"{"kind":"section","number":2,"title":"Options"}"#).unwrap();
        assert_eq!(
            spec,
            SlideSpec::Section {
                number: 2,
                title: "Options".to_string()
            }
        );

        let closing: SlideSpec = serde_json::from_str(r#"{"kind":"closing"}"#).unwrap();
        assert_eq!(closing.kind_name(), "closing");

        let title: SlideSpec = serde_json::from_str(r#"{"kind":"title","title":"X"}"#).unwrap();
        assert_eq!(
            title,
            SlideSpec::Title {
                title: "X".to_string(),
                subtitle: None
            }
        );
    }
}
