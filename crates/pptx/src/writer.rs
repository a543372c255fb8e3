//! PPTX package writer.
//!
//! Lays a [`Canvas`] out as an Office Open XML package: one slide part per
//! slide on top of a single blank master and layout.

use crate::parts::*;
use crate::xml::XmlWriter;
use deck_core::{
    points, Alignment, AutoShape, Canvas, Error, Font, Geometry, Paragraph, Rect, Result, Shape,
    Slide, Table, TextBox,
};
use std::fs::File;
use std::io::{BufWriter, Cursor, Seek, Write};
use std::path::Path;
use zip::write::FileOptions;
use zip::{CompressionMethod, DateTime, ZipWriter};

/// First `p:sldId` value; PowerPoint requires ids of 256 and above.
const FIRST_SLIDE_ID: usize = 256;

/// Language tag written on text runs unless overridden.
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// Outline width of outlined shapes, in points.
const OUTLINE_WIDTH_PT: f64 = 0.75;

/// Writer for PPTX (Office Open XML) packages.
#[derive(Debug, Clone)]
pub struct PptxWriter {
    /// Title recorded in `docProps/core.xml`.
    title: Option<String>,

    /// Language tag written on every text run.
    language: String,
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self {
            title: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

impl PptxWriter {
    /// Create a new PPTX writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a document title in the package properties.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Tag text runs with a language other than [`DEFAULT_LANGUAGE`].
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Write the package to `path`, replacing any existing file.
    pub fn save(&self, canvas: &Canvas, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        let mut out = self.write(canvas, BufWriter::new(file))?;
        out.flush()?;
        log::info!(
            "Saved {} slides to {}",
            canvas.slide_count(),
            path.display()
        );
        Ok(())
    }

    /// Serialize the package into memory.
    pub fn to_bytes(&self, canvas: &Canvas) -> Result<Vec<u8>> {
        Ok(self.write(canvas, Cursor::new(Vec::new()))?.into_inner())
    }

    /// Write the package to any seekable sink, returning the sink.
    pub fn write<W: Write + Seek>(&self, canvas: &Canvas, writer: W) -> Result<W> {
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .last_modified_time(DateTime::default());

        let mut zip = ZipWriter::new(writer);
        for (name, bytes) in self.parts(canvas)? {
            log::trace!("Writing part {} ({} bytes)", name, bytes.len());
            zip.start_file(name.as_str(), options)
                .map_err(|e| Error::ZipError(format!("Failed to start '{}': {}", name, e)))?;
            zip.write_all(&bytes)?;
        }

        zip.finish()
            .map_err(|e| Error::ZipError(format!("Failed to finish archive: {}", e)))
    }

    /// Every part of the package, in archive order.
    fn parts(&self, canvas: &Canvas) -> Result<Vec<(String, Vec<u8>)>> {
        let count = canvas.slide_count();
        let mut parts = vec![
            ("[Content_Types].xml".to_string(), content_types_xml(count)?),
            ("_rels/.rels".to_string(), root_rels_xml()?),
            ("docProps/core.xml".to_string(), self.core_props_xml()?),
            ("docProps/app.xml".to_string(), app_props_xml(count)?),
            ("ppt/presentation.xml".to_string(), presentation_xml(canvas)?),
            (
                "ppt/_rels/presentation.xml.rels".to_string(),
                presentation_rels_xml(count)?,
            ),
            ("ppt/presProps.xml".to_string(), PRES_PROPS_XML.as_bytes().to_vec()),
            ("ppt/viewProps.xml".to_string(), VIEW_PROPS_XML.as_bytes().to_vec()),
            ("ppt/tableStyles.xml".to_string(), TABLE_STYLES_XML.as_bytes().to_vec()),
            (SLIDE_MASTER_PATH.to_string(), SLIDE_MASTER_XML.as_bytes().to_vec()),
            (
                "ppt/slideMasters/_rels/slideMaster1.xml.rels".to_string(),
                SLIDE_MASTER_RELS.as_bytes().to_vec(),
            ),
            (SLIDE_LAYOUT_PATH.to_string(), SLIDE_LAYOUT_XML.as_bytes().to_vec()),
            (
                "ppt/slideLayouts/_rels/slideLayout1.xml.rels".to_string(),
                SLIDE_LAYOUT_RELS.as_bytes().to_vec(),
            ),
            (THEME_PATH.to_string(), THEME_XML.as_bytes().to_vec()),
        ];

        for (idx, slide) in canvas.slides().iter().enumerate() {
            let n = idx + 1;
            parts.push((
                format!("ppt/slides/slide{}.xml", n),
                slide_xml(slide, &self.language)?,
            ));
            parts.push((
                format!("ppt/slides/_rels/slide{}.xml.rels", n),
                slide_rels_xml()?,
            ));
        }

        Ok(parts)
    }

    fn core_props_xml(&self) -> Result<Vec<u8>> {
        let mut xml = XmlWriter::new()?;
        xml.start(
            "cp:coreProperties",
            &[
                (
                    "xmlns:cp",
                    "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
                ),
                ("xmlns:dc", "http://purl.org/dc/elements/1.1/"),
                ("xmlns:dcterms", "http://purl.org/dc/terms/"),
                ("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance"),
            ],
        )?;
        if let Some(title) = &self.title {
            xml.text_element("dc:title", &[], title)?;
        }
        xml.text_element("cp:revision", &[], "1")?;
        xml.end("cp:coreProperties")?;
        Ok(xml.into_bytes())
    }
}

fn content_types_xml(slide_count: usize) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start("Types", &[("xmlns", NS_CONTENT_TYPES)])?;
    xml.empty("Default", &[("Extension", "rels"), ("ContentType", CT_RELATIONSHIPS)])?;
    xml.empty("Default", &[("Extension", "xml"), ("ContentType", "application/xml")])?;

    let fixed = [
        ("/ppt/presentation.xml", CT_PRESENTATION),
        ("/ppt/presProps.xml", CT_PRES_PROPS),
        ("/ppt/viewProps.xml", CT_VIEW_PROPS),
        ("/ppt/tableStyles.xml", CT_TABLE_STYLES),
        ("/ppt/slideMasters/slideMaster1.xml", CT_SLIDE_MASTER),
        ("/ppt/slideLayouts/slideLayout1.xml", CT_SLIDE_LAYOUT),
        ("/ppt/theme/theme1.xml", CT_THEME),
        ("/docProps/core.xml", CT_CORE_PROPS),
        ("/docProps/app.xml", CT_EXTENDED_PROPS),
    ];
    for (part, content_type) in fixed {
        xml.empty("Override", &[("PartName", part), ("ContentType", content_type)])?;
    }
    for n in 1..=slide_count {
        let part = format!("/ppt/slides/slide{}.xml", n);
        xml.empty("Override", &[("PartName", part.as_str()), ("ContentType", CT_SLIDE)])?;
    }

    xml.end("Types")?;
    Ok(xml.into_bytes())
}

fn root_rels_xml() -> Result<Vec<u8>> {
    relationships(&[
        ("rId1", REL_OFFICE_DOCUMENT, "ppt/presentation.xml"),
        ("rId2", REL_CORE_PROPS, "docProps/core.xml"),
        ("rId3", REL_EXTENDED_PROPS, "docProps/app.xml"),
    ])
}

fn app_props_xml(slide_count: usize) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start(
        "Properties",
        &[(
            "xmlns",
            "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties",
        )],
    )?;
    xml.text_element("Application", &[], env!("CARGO_PKG_NAME"))?;
    xml.text_element("Slides", &[], &slide_count.to_string())?;
    xml.end("Properties")?;
    Ok(xml.into_bytes())
}

/// Relationship id of the n-th slide (1-based) in `presentation.xml.rels`.
fn slide_rel_id(n: usize) -> String {
    format!("rId{}", n + 1)
}

fn presentation_xml(canvas: &Canvas) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start(
        "p:presentation",
        &[
            ("xmlns:a", NS_A),
            ("xmlns:r", NS_R),
            ("xmlns:p", NS_P),
            ("saveSubsetFonts", "1"),
        ],
    )?;

    xml.start("p:sldMasterIdLst", &[])?;
    xml.empty("p:sldMasterId", &[("id", "2147483648"), ("r:id", "rId1")])?;
    xml.end("p:sldMasterIdLst")?;

    if canvas.slide_count() > 0 {
        xml.start("p:sldIdLst", &[])?;
        for n in 1..=canvas.slide_count() {
            let id = (FIRST_SLIDE_ID + n - 1).to_string();
            let rel = slide_rel_id(n);
            xml.empty("p:sldId", &[("id", id.as_str()), ("r:id", rel.as_str())])?;
        }
        xml.end("p:sldIdLst")?;
    }

    let cx = canvas.width().to_string();
    let cy = canvas.height().to_string();
    xml.empty("p:sldSz", &[("cx", cx.as_str()), ("cy", cy.as_str())])?;
    xml.empty("p:notesSz", &[("cx", "6858000"), ("cy", "9144000")])?;

    xml.end("p:presentation")?;
    Ok(xml.into_bytes())
}

fn presentation_rels_xml(slide_count: usize) -> Result<Vec<u8>> {
    let slide_targets: Vec<(String, String)> = (1..=slide_count)
        .map(|n| (slide_rel_id(n), format!("slides/slide{}.xml", n)))
        .collect();
    let tail: Vec<String> = (0..4).map(|i| format!("rId{}", slide_count + 2 + i)).collect();

    let mut rels: Vec<(&str, &str, &str)> =
        vec![("rId1", REL_SLIDE_MASTER, "slideMasters/slideMaster1.xml")];
    for (id, target) in &slide_targets {
        rels.push((id.as_str(), REL_SLIDE, target.as_str()));
    }
    rels.push((tail[0].as_str(), REL_PRES_PROPS, "presProps.xml"));
    rels.push((tail[1].as_str(), REL_VIEW_PROPS, "viewProps.xml"));
    rels.push((tail[2].as_str(), REL_THEME, "theme/theme1.xml"));
    rels.push((tail[3].as_str(), REL_TABLE_STYLES, "tableStyles.xml"));

    relationships(&rels)
}

fn slide_rels_xml() -> Result<Vec<u8>> {
    relationships(&[("rId1", REL_SLIDE_LAYOUT, "../slideLayouts/slideLayout1.xml")])
}

fn relationships(rels: &[(&str, &str, &str)]) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start("Relationships", &[("xmlns", NS_PKG_RELS)])?;
    for &(id, rel_type, target) in rels {
        xml.empty(
            "Relationship",
            &[("Id", id), ("Type", rel_type), ("Target", target)],
        )?;
    }
    xml.end("Relationships")?;
    Ok(xml.into_bytes())
}

/// Generate the XML for one slide part, tagging text runs with `language`.
pub fn slide_xml(slide: &Slide, language: &str) -> Result<Vec<u8>> {
    let mut xml = XmlWriter::new()?;
    xml.start(
        "p:sld",
        &[("xmlns:a", NS_A), ("xmlns:r", NS_R), ("xmlns:p", NS_P)],
    )?;
    xml.start("p:cSld", &[])?;
    xml.start("p:spTree", &[])?;

    xml.start("p:nvGrpSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", "1"), ("name", "")])?;
    xml.empty("p:cNvGrpSpPr", &[])?;
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvGrpSpPr")?;
    xml.start("p:grpSpPr", &[])?;
    xml.start("a:xfrm", &[])?;
    for (name, a, b) in [
        ("a:off", "x", "y"),
        ("a:ext", "cx", "cy"),
        ("a:chOff", "x", "y"),
        ("a:chExt", "cx", "cy"),
    ] {
        xml.empty(name, &[(a, "0"), (b, "0")])?;
    }
    xml.end("a:xfrm")?;
    xml.end("p:grpSpPr")?;

    // Shape id 1 is the tree itself.
    for (idx, shape) in slide.shapes().iter().enumerate() {
        let id = idx + 2;
        match shape {
            Shape::AutoShape(s) => write_auto_shape(&mut xml, id, s)?,
            Shape::TextBox(t) => write_text_box(&mut xml, id, t, language)?,
            Shape::Table(t) => write_table(&mut xml, id, t, language)?,
        }
    }

    xml.end("p:spTree")?;
    xml.end("p:cSld")?;
    xml.start("p:clrMapOvr", &[])?;
    xml.empty("a:masterClrMapping", &[])?;
    xml.end("p:clrMapOvr")?;
    xml.end("p:sld")?;
    Ok(xml.into_bytes())
}

fn write_nv_sp_pr(xml: &mut XmlWriter, id: usize, name: &str, text_box: bool) -> Result<()> {
    let id = id.to_string();
    let name = format!("{} {}", name, id);
    xml.start("p:nvSpPr", &[])?;
    xml.empty("p:cNvPr", &[("id", id.as_str()), ("name", name.as_str())])?;
    if text_box {
        xml.empty("p:cNvSpPr", &[("txBox", "1")])?;
    } else {
        xml.empty("p:cNvSpPr", &[])?;
    }
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvSpPr")
}

fn write_offset_extent(xml: &mut XmlWriter, frame: &Rect) -> Result<()> {
    let (x, y) = (frame.x.to_string(), frame.y.to_string());
    let (cx, cy) = (frame.width.to_string(), frame.height.to_string());
    xml.empty("a:off", &[("x", x.as_str()), ("y", y.as_str())])?;
    xml.empty("a:ext", &[("cx", cx.as_str()), ("cy", cy.as_str())])
}

fn write_xfrm(xml: &mut XmlWriter, frame: &Rect) -> Result<()> {
    xml.start("a:xfrm", &[])?;
    write_offset_extent(xml, frame)?;
    xml.end("a:xfrm")
}

fn write_solid_fill(xml: &mut XmlWriter, color: deck_core::Rgb) -> Result<()> {
    xml.start("a:solidFill", &[])?;
    let hex = color.hex();
    xml.empty("a:srgbClr", &[("val", hex.as_str())])?;
    xml.end("a:solidFill")
}

fn write_auto_shape(xml: &mut XmlWriter, id: usize, shape: &AutoShape) -> Result<()> {
    let (name, preset) = match shape.geometry {
        Geometry::Rectangle => ("Rectangle", "rect"),
        Geometry::RoundedRectangle => ("Rounded Rectangle", "roundRect"),
    };

    xml.start("p:sp", &[])?;
    write_nv_sp_pr(xml, id, name, false)?;
    xml.start("p:spPr", &[])?;
    write_xfrm(xml, &shape.frame)?;
    xml.start("a:prstGeom", &[("prst", preset)])?;
    xml.empty("a:avLst", &[])?;
    xml.end("a:prstGeom")?;
    write_solid_fill(xml, shape.fill)?;
    match shape.outline {
        Some(color) => {
            let width = points(OUTLINE_WIDTH_PT).to_string();
            xml.start("a:ln", &[("w", width.as_str())])?;
            write_solid_fill(xml, color)?;
        }
        None => {
            xml.start("a:ln", &[])?;
            xml.empty("a:noFill", &[])?;
        }
    }
    xml.end("a:ln")?;
    xml.end("p:spPr")?;
    xml.end("p:sp")
}

fn write_text_box(
    xml: &mut XmlWriter,
    id: usize,
    text_box: &TextBox,
    language: &str,
) -> Result<()> {
    xml.start("p:sp", &[])?;
    write_nv_sp_pr(xml, id, "TextBox", true)?;
    xml.start("p:spPr", &[])?;
    write_xfrm(xml, &text_box.frame)?;
    xml.start("a:prstGeom", &[("prst", "rect")])?;
    xml.empty("a:avLst", &[])?;
    xml.end("a:prstGeom")?;
    xml.empty("a:noFill", &[])?;
    xml.end("p:spPr")?;

    xml.start("p:txBody", &[])?;
    let wrap = if text_box.word_wrap { "square" } else { "none" };
    xml.start("a:bodyPr", &[("wrap", wrap), ("rtlCol", "0")])?;
    xml.empty("a:spAutoFit", &[])?;
    xml.end("a:bodyPr")?;
    xml.empty("a:lstStyle", &[])?;
    if text_box.paragraphs.is_empty() {
        xml.empty("a:p", &[])?;
    }
    for paragraph in &text_box.paragraphs {
        write_paragraph(xml, paragraph, language)?;
    }
    xml.end("p:txBody")?;
    xml.end("p:sp")
}

fn alignment_code(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "l",
        Alignment::Center => "ctr",
        Alignment::Right => "r",
    }
}

/// One paragraph; embedded newlines become `a:br` line breaks.
fn write_paragraph(xml: &mut XmlWriter, paragraph: &Paragraph, language: &str) -> Result<()> {
    xml.start("a:p", &[])?;

    let has_spacing = paragraph.space_after.is_some();
    if paragraph.alignment != Alignment::Left || has_spacing {
        let attrs = [("algn", alignment_code(paragraph.alignment))];
        if let Some(space) = paragraph.space_after {
            xml.start("a:pPr", &attrs)?;
            xml.start("a:spcAft", &[])?;
            let val = ((space * 100.0).round() as i64).to_string();
            xml.empty("a:spcPts", &[("val", val.as_str())])?;
            xml.end("a:spcAft")?;
            xml.end("a:pPr")?;
        } else {
            xml.empty("a:pPr", &attrs)?;
        }
    }

    if paragraph.text.is_empty() {
        write_run_properties(xml, "a:endParaRPr", &paragraph.font, language)?;
    } else {
        for (idx, line) in paragraph.text.split('\n').enumerate() {
            if idx > 0 {
                xml.start("a:br", &[])?;
                write_run_properties(xml, "a:rPr", &paragraph.font, language)?;
                xml.end("a:br")?;
            }
            if line.is_empty() {
                continue;
            }
            xml.start("a:r", &[])?;
            write_run_properties(xml, "a:rPr", &paragraph.font, language)?;
            xml.text_element("a:t", &[], line)?;
            xml.end("a:r")?;
        }
    }

    xml.end("a:p")
}

fn write_run_properties(
    xml: &mut XmlWriter,
    name: &str,
    font: &Font,
    language: &str,
) -> Result<()> {
    let size = ((font.size * 100.0).round() as i64).to_string();
    let mut attrs = vec![("lang", language), ("sz", size.as_str())];
    if font.bold {
        attrs.push(("b", "1"));
    }
    attrs.push(("dirty", "0"));

    match font.color {
        Some(color) => {
            xml.start(name, &attrs)?;
            write_solid_fill(xml, color)?;
            xml.end(name)
        }
        None => xml.empty(name, &attrs),
    }
}

fn write_table(xml: &mut XmlWriter, id: usize, table: &Table, language: &str) -> Result<()> {
    let id_str = id.to_string();
    let name = format!("Table {}", id);

    xml.start("p:graphicFrame", &[])?;
    xml.start("p:nvGraphicFramePr", &[])?;
    xml.empty("p:cNvPr", &[("id", id_str.as_str()), ("name", name.as_str())])?;
    xml.start("p:cNvGraphicFramePr", &[])?;
    xml.empty("a:graphicFrameLocks", &[("noGrp", "1")])?;
    xml.end("p:cNvGraphicFramePr")?;
    xml.empty("p:nvPr", &[])?;
    xml.end("p:nvGraphicFramePr")?;

    xml.start("p:xfrm", &[])?;
    write_offset_extent(xml, &table.frame)?;
    xml.end("p:xfrm")?;

    xml.start("a:graphic", &[])?;
    xml.start(
        "a:graphicData",
        &[("uri", "http://schemas.openxmlformats.org/drawingml/2006/table")],
    )?;
    xml.start("a:tbl", &[])?;
    xml.empty("a:tblPr", &[("firstRow", "1"), ("bandRow", "1")])?;

    xml.start("a:tblGrid", &[])?;
    for width in table.column_widths() {
        let w = width.to_string();
        xml.empty("a:gridCol", &[("w", w.as_str())])?;
    }
    xml.end("a:tblGrid")?;

    for (row, height) in table.rows().iter().zip(table.row_heights()) {
        let h = height.to_string();
        xml.start("a:tr", &[("h", h.as_str())])?;
        for cell in row {
            xml.start("a:tc", &[])?;
            xml.start("a:txBody", &[])?;
            xml.empty("a:bodyPr", &[])?;
            xml.empty("a:lstStyle", &[])?;
            let mut paragraph = Paragraph::new(cell.text.as_str(), cell.font);
            paragraph.alignment = cell.alignment;
            write_paragraph(xml, &paragraph, language)?;
            xml.end("a:txBody")?;
            match cell.fill {
                Some(color) => {
                    xml.start("a:tcPr", &[])?;
                    write_solid_fill(xml, color)?;
                    xml.end("a:tcPr")?;
                }
                None => xml.empty("a:tcPr", &[])?,
            }
            xml.end("a:tc")?;
        }
        xml.end("a:tr")?;
    }

    xml.end("a:tbl")?;
    xml.end("a:graphicData")?;
    xml.end("a:graphic")?;
    xml.end("p:graphicFrame")
}
