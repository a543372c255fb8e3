//! Deck builder: turns an ordered list of slide specs into a [`Canvas`].

use crate::error::{Error, Result};
use crate::geometry::{inches, Emu};
use crate::palette::Palette;
use crate::templates::{self, Captions, SlideSpec, TemplateContext};
use crate::types::Canvas;
use serde::{Deserialize, Serialize};

/// Default slide width: 10 inches.
pub const DEFAULT_WIDTH: f64 = 10.0;

/// Default slide height: 7.5 inches.
pub const DEFAULT_HEIGHT: f64 = 7.5;

/// A complete deck description: the slides plus the template captions.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DeckSpec {
    /// Document title recorded in the package properties.
    #[serde(default)]
    pub title: Option<String>,

    /// Language tag of the slide text, e.g. `fr-FR`.
    #[serde(default)]
    pub language: Option<String>,

    #[serde(default)]
    pub captions: Captions,

    pub slides: Vec<SlideSpec>,
}

impl DeckSpec {
    /// Parse a deck from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::ContentError(e.to_string()))
    }

    /// Encode the deck as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::ContentError(e.to_string()))
    }
}

/// Renders slide specs onto a fixed-size canvas.
#[derive(Debug, Clone)]
pub struct DeckBuilder {
    palette: Palette,
    width: Emu,
    height: Emu,
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            width: inches(DEFAULT_WIDTH),
            height: inches(DEFAULT_HEIGHT),
        }
    }
}

impl DeckBuilder {
    /// Create a builder with the default palette and a 10" x 7.5" canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every slide of `deck`, in order. Any template failure aborts the build.
    pub fn build(&self, deck: &DeckSpec) -> Result<Canvas> {
        let ctx = TemplateContext {
            width: self.width,
            height: self.height,
            palette: &self.palette,
            captions: &deck.captions,
        };

        let mut canvas = Canvas::new(self.width, self.height);
        for (idx, spec) in deck.slides.iter().enumerate() {
            let slide = templates::render(&ctx, spec)?;
            log::debug!(
                "Rendered slide {} ({}) with {} shapes",
                idx + 1,
                spec.kind_name(),
                slide.shape_count()
            );
            canvas.add_slide(slide);
        }

        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ecommerce_deck;

    #[test]
    fn test_canvas_dimensions() {
        let canvas = DeckBuilder::new().build(&DeckSpec::default()).unwrap();
        assert_eq!(canvas.width(), 9_144_000);
        assert_eq!(canvas.height(), 6_858_000);
        assert_eq!(canvas.slide_count(), 0);
    }

    #[test]
    fn test_one_slide_per_spec_in_order() {
        let deck = ecommerce_deck();
        let canvas = DeckBuilder::new().build(&deck).unwrap();
        assert_eq!(canvas.slide_count(), deck.slides.len());

        let first = canvas.slides()[0].summarize();
        assert_eq!(first.shapes[1].texts, vec!["Plateforme E-Commerce Symfony"]);
    }

    #[test]
    fn test_build_is_structurally_idempotent() {
        let deck = ecommerce_deck();
        let builder = DeckBuilder::new();
        let a = builder.build(&deck).unwrap();
        let b = builder.build(&deck).unwrap();
        assert_eq!(a.summarize(), b.summarize());
        assert_eq!(a, b);
    }

    #[test]
    fn test_failure_aborts_build() {
        let deck = DeckSpec {
            slides: vec![
                SlideSpec::Closing,
                SlideSpec::Table {
                    title: "Broken".to_string(),
                    rows: vec![],
                    subtitle: None,
                },
            ],
            ..DeckSpec::default()
        };
        assert!(DeckBuilder::new().build(&deck).is_err());
    }

    #[test]
    fn test_json_round_trip_of_builtin_deck() {
        let deck = ecommerce_deck();
        let json = deck.to_json().unwrap();
        assert_eq!(DeckSpec::from_json(&json).unwrap(), deck);
    }

    #[test]
    fn test_from_json_reports_content_error() {
        let err = DeckSpec::from_json(r#"{"slides":[{"kind":"bogus"}]}"#).unwrap_err();
        assert!(matches!(err, Error::ContentError(_)));
    }

    #[test]
    fn test_captions_default_when_missing() {
        let deck = DeckSpec::from_json(r#"{"slides":[{"kind":"closing"}]}"#).unwrap();
        assert_eq!(deck.captions, Captions::default());
        assert_eq!(deck.title, None);
        assert_eq!(deck.language, None);
    }
}
