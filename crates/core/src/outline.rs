//! Plain-text outline of a built deck.
//!
//! Each slide becomes a block of its non-empty text lines in drawing order,
//! blocks separated by a blank line.

use crate::types::{Canvas, Slide};

/// Formatter for a readable text rendition of a [`Canvas`].
#[derive(Debug, Clone)]
pub struct OutlineFormatter {
    /// Whether each block starts with a `--- Slide n ---` header.
    slide_headers: bool,
}

impl Default for OutlineFormatter {
    fn default() -> Self {
        Self {
            slide_headers: true,
        }
    }
}

impl OutlineFormatter {
    /// Create a new formatter with slide headers enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable slide headers.
    pub fn with_slide_headers(mut self, enabled: bool) -> Self {
        self.slide_headers = enabled;
        self
    }

    /// Format the whole canvas.
    ///
    /// # Example output
    /// ```text
    /// --- Slide 1 ---
    /// Plateforme E-Commerce Symfony
    /// Architecture Sécurisée & Haute Disponibilité
    ///
    /// --- Slide 2 ---
    /// SECTION 1
    /// Contexte / Problématique
    /// ```
    pub fn format(&self, canvas: &Canvas) -> String {
        canvas
            .slides()
            .iter()
            .enumerate()
            .map(|(idx, slide)| self.format_slide(idx + 1, slide))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Format and add a trailing newline when there is any output.
    pub fn format_with_newline(&self, canvas: &Canvas) -> String {
        let formatted = self.format(canvas);
        if formatted.is_empty() {
            formatted
        } else {
            format!("{}\n", formatted)
        }
    }

    fn format_slide(&self, number: usize, slide: &Slide) -> String {
        let mut lines = Vec::new();
        if self.slide_headers {
            lines.push(format!("--- Slide {} ---", number));
        }
        lines.extend(
            slide
                .shapes()
                .iter()
                .flat_map(|s| s.texts())
                .filter(|t| !t.trim().is_empty())
                .map(str::to_string),
        );
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::types::{Font, Paragraph, TextBox};

    fn slide_with(lines: &[&str]) -> Slide {
        let mut text_box = TextBox::new(Rect::from_inches(0.0, 0.0, 1.0, 1.0));
        for line in lines {
            text_box.push(Paragraph::new(*line, Font::new(18.0)));
        }
        let mut slide = Slide::new();
        slide.add_shape(text_box);
        slide
    }

    #[test]
    fn test_format_empty() {
        let canvas = Canvas::new(1, 1);
        assert_eq!(OutlineFormatter::new().format(&canvas), "");
        assert_eq!(OutlineFormatter::new().format_with_newline(&canvas), "");
    }

    #[test]
    fn test_format_skips_blank_lines() {
        let mut canvas = Canvas::new(1, 1);
        canvas.add_slide(slide_with(&["One", "", "Two"]));
        canvas.add_slide(slide_with(&["Three"]));

        let expected = "--- Slide 1 ---\nOne\nTwo\n\n--- Slide 2 ---\nThree";
        assert_eq!(OutlineFormatter::new().format(&canvas), expected);
    }

    #[test]
    fn test_format_without_headers() {
        let mut canvas = Canvas::new(1, 1);
        canvas.add_slide(slide_with(&["A", "B"]));
        canvas.add_slide(slide_with(&["C"]));

        let formatter = OutlineFormatter::new().with_slide_headers(false);
        assert_eq!(formatter.format(&canvas), "A\nB\n\nC");
        assert!(formatter.format_with_newline(&canvas).ends_with('\n'));
    }
}
