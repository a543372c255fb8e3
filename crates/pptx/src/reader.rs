//! Structural PPTX reader.
//!
//! Recovers the slide order and, per slide, each shape's kind and text.
//! Used to check a written package against the canvas it came from.

use deck_core::{Emu, Error, Result, ShapeKind, ShapeSummary, SlideSummary};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::{Read, Seek};
use zip::ZipArchive;

/// What the reader recovers from a package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSummary {
    /// Slide width and height in EMUs, from `p:sldSz`.
    pub slide_size: Option<(Emu, Emu)>,

    /// Slides in presentation order.
    pub slides: Vec<SlideSummary>,
}

/// Reader for PPTX (Office Open XML) files.
pub struct PptxReader;

impl PptxReader {
    /// Create a new PPTX reader.
    pub fn new() -> Self {
        Self
    }

    /// Read a PPTX package from a reader.
    pub fn read<R: Read + Seek>(&self, reader: R) -> Result<PackageSummary> {
        let mut archive = ZipArchive::new(reader)
            .map_err(|e| Error::ZipError(format!("Failed to open ZIP: {}", e)))?;

        let presentation = self.read_file_from_archive(&mut archive, "ppt/presentation.xml")?;
        let slide_size = parse_slide_size(&presentation)?;

        let slide_order = self.get_slide_order(&mut archive)?;
        let mut slides = Vec::with_capacity(slide_order.len());
        for slide_path in &slide_order {
            let content = self.read_file_from_archive(&mut archive, slide_path)?;
            slides.push(parse_slide(&content)?);
        }
        log::debug!("Read {} slides", slides.len());

        Ok(PackageSummary { slide_size, slides })
    }

    /// Get the ordered list of slide paths from the presentation relationships.
    fn get_slide_order<R: Read + Seek>(&self, archive: &mut ZipArchive<R>) -> Result<Vec<String>> {
        let rels_content = self.read_file_from_archive(archive, "ppt/_rels/presentation.xml.rels")?;
        let mut slides: Vec<(String, Option<usize>)> = Vec::new();

        let mut reader = Reader::from_str(&rels_content);
        reader.trim_text(true);

        loop {
            match reader.read_event() {
                Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                    if e.name().as_ref() == b"Relationship" =>
                {
                    let rel_type = attr_value(e, b"Type").unwrap_or_default();
                    let target = attr_value(e, b"Target").unwrap_or_default();
                    let id = attr_value(e, b"Id").unwrap_or_default();

                    if rel_type.ends_with("/slide") {
                        let order_num =
                            extract_slide_number(&id).or_else(|| extract_slide_number(&target));
                        let full_path = match target.strip_prefix('/') {
                            Some(absolute) => absolute.to_string(),
                            None => format!("ppt/{}", target),
                        };
                        slides.push((full_path, order_num));
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(Error::XmlError(format!(
                        "Error parsing relationships: {}",
                        e
                    )));
                }
                _ => {}
            }
        }

        slides.sort_by(|a, b| match (a.1, b.1) {
            (Some(na), Some(nb)) => na.cmp(&nb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.0.cmp(&b.0),
        });

        Ok(slides.into_iter().map(|(path, _)| path).collect())
    }

    /// Read a file from the ZIP archive.
    fn read_file_from_archive<R: Read + Seek>(
        &self,
        archive: &mut ZipArchive<R>,
        path: &str,
    ) -> Result<String> {
        let mut file = archive
            .by_name(path)
            .map_err(|e| Error::ZipError(format!("File not found in archive '{}': {}", path, e)))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| Error::ZipError(format!("Failed to read '{}': {}", path, e)))?;

        Ok(content)
    }
}

impl Default for PptxReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Shape being collected while walking a slide.
#[derive(Debug)]
struct PendingShape {
    kind: ShapeKind,
    texts: Vec<String>,
}

fn parse_slide_size(xml: &str) -> Result<Option<(Emu, Emu)>> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    loop {
        match reader.read_event() {
            Ok(Event::Empty(ref e)) | Ok(Event::Start(ref e))
                if local_name(e.name().as_ref()) == b"sldSz" =>
            {
                let cx = attr_value(e, b"cx").and_then(|v| v.parse().ok());
                let cy = attr_value(e, b"cy").and_then(|v| v.parse().ok());
                return Ok(cx.zip(cy));
            }
            Ok(Event::Eof) => return Ok(None),
            Err(e) => {
                return Err(Error::XmlError(format!(
                    "Error parsing presentation: {}",
                    e
                )))
            }
            _ => {}
        }
    }
}

/// Walk one slide part and summarize its top-level shapes in document order.
fn parse_slide(xml: &str) -> Result<SlideSummary> {
    let mut reader = Reader::from_str(xml);

    let mut shapes = Vec::new();
    let mut current: Option<PendingShape> = None;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match local_name(e.name().as_ref()) {
                b"sp" => {
                    current = Some(PendingShape {
                        kind: ShapeKind::Rectangle,
                        texts: Vec::new(),
                    });
                }
                b"graphicFrame" => {
                    current = Some(PendingShape {
                        kind: ShapeKind::Table,
                        texts: Vec::new(),
                    });
                }
                b"prstGeom" => {
                    if let Some(shape) = current.as_mut() {
                        if shape.kind == ShapeKind::Rectangle
                            && attr_value(e, b"prst").as_deref() == Some("roundRect")
                        {
                            shape.kind = ShapeKind::RoundedRectangle;
                        }
                    }
                }
                // Paragraphs in text boxes; cells in tables.
                b"p" => {
                    if let Some(shape) = current.as_mut() {
                        if shape.kind == ShapeKind::TextBox {
                            shape.texts.push(String::new());
                        }
                    }
                }
                b"tc" => {
                    if let Some(shape) = current.as_mut() {
                        shape.texts.push(String::new());
                    }
                }
                b"t" => in_text = true,
                b"br" => push_line_break(current.as_mut()),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match local_name(e.name().as_ref()) {
                b"cNvSpPr" => {
                    if attr_value(e, b"txBox").as_deref() == Some("1") {
                        if let Some(shape) = current.as_mut() {
                            shape.kind = ShapeKind::TextBox;
                        }
                    }
                }
                b"br" => push_line_break(current.as_mut()),
                _ => {}
            },
            Ok(Event::Text(ref e)) => {
                if in_text {
                    let text = e
                        .unescape()
                        .map_err(|err| Error::XmlError(format!("Bad text: {}", err)))?;
                    if let Some(last) = current.as_mut().and_then(|s| s.texts.last_mut()) {
                        last.push_str(&text);
                    }
                }
            }
            Ok(Event::End(ref e)) => match local_name(e.name().as_ref()) {
                b"sp" | b"graphicFrame" => {
                    if let Some(shape) = current.take() {
                        shapes.push(ShapeSummary {
                            kind: shape.kind,
                            texts: shape.texts,
                        });
                    }
                }
                b"t" => in_text = false,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(Error::CorruptedFile(format!("Slide XML error: {}", e)));
            }
            _ => {}
        }
    }

    Ok(SlideSummary { shapes })
}

/// A line break inside the current paragraph or cell.
fn push_line_break(shape: Option<&mut PendingShape>) {
    if let Some(last) = shape.and_then(|s| s.texts.last_mut()) {
        last.push('\n');
    }
}

fn attr_value(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|attr| attr.key.as_ref() == key)
        .map(|attr| String::from_utf8_lossy(&attr.value).to_string())
}

/// Extract the local name from a potentially namespaced XML element name.
fn local_name(name: &[u8]) -> &[u8] {
    if let Some(pos) = name.iter().position(|&b| b == b':') {
        &name[pos + 1..]
    } else {
        name
    }
}

/// Extract a slide number from a string like "rId2" or "slide3.xml".
fn extract_slide_number(s: &str) -> Option<usize> {
    let s = s.trim_end_matches(".xml").trim_end_matches(".rels");

    let digits: String = s.chars().rev().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    let digits: String = digits.chars().rev().collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_slide_number() {
        assert_eq!(extract_slide_number("rId1"), Some(1));
        assert_eq!(extract_slide_number("rId12"), Some(12));
        assert_eq!(extract_slide_number("slide1.xml"), Some(1));
        assert_eq!(extract_slide_number("slide123.xml"), Some(123));
        assert_eq!(extract_slide_number("nodigits"), None);
    }

    #[test]
    fn test_local_name() {
        assert_eq!(local_name(b"p:sp"), b"sp");
        assert_eq!(local_name(b"a:t"), b"t");
        assert_eq!(local_name(b"sp"), b"sp");
    }

    #[test]
    fn test_parse_slide_kinds_and_text() {
        let xml = concat!(
            r#"<p:sld xmlns:a="a" xmlns:p="p"><p:cSld><p:spTree>"#,
            r#"<p:sp><p:nvSpPr><p:cNvPr id="2" name="R"/><p:cNvSpPr/><p:nvPr/></p:nvSpPr>"#,
            r#"<p:spPr><a:prstGeom prst="roundRect"><a:avLst/></a:prstGeom></p:spPr></p:sp>"#,
            r#"<p:sp><p:nvSpPr><p:cNvPr id="3" name="T"/><p:cNvSpPr txBox="1"/>"#,
            r#"<p:nvPr/></p:nvSpPr>"#,
            r#"<p:spPr><a:prstGeom prst="rect"><a:avLst/></a:prstGeom></p:spPr>"#,
            r#"<p:txBody><a:bodyPr/><a:p><a:r><a:t>Let&apos;s go</a:t></a:r></a:p>"#,
            r#"<a:p><a:endParaRPr/></a:p><a:p><a:r><a:t>- item</a:t></a:r></a:p>"#,
            r#"<a:p><a:r><a:t>one</a:t></a:r><a:br><a:rPr/></a:br><a:r><a:t>two</a:t></a:r></a:p>"#,
            r#"</p:txBody></p:sp>"#,
            r#"</p:spTree></p:cSld></p:sld>"#
        );

        let slide = parse_slide(xml).unwrap();
        assert_eq!(slide.shapes.len(), 2);
        assert_eq!(slide.shapes[0].kind, ShapeKind::RoundedRectangle);
        assert!(slide.shapes[0].texts.is_empty());
        assert_eq!(slide.shapes[1].kind, ShapeKind::TextBox);
        assert_eq!(slide.shapes[1].texts, vec!["Let's go", "", "- item", "one\ntwo"]);
    }

    #[test]
    fn test_parse_slide_size() {
        let xml = concat!(
            r#"<p:presentation xmlns:p="p">"#,
            r#"<p:sldSz cx="9144000" cy="6858000"/></p:presentation>"#
        );
        assert_eq!(parse_slide_size(xml).unwrap(), Some((9_144_000, 6_858_000)));
    }
}
