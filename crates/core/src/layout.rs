//! Layout arithmetic shared by the slide templates.
//!
//! Templates author geometry in inches against the canvas; the helpers here
//! cover the few places where positions are computed rather than fixed.

use crate::geometry::{inches, Emu, Rect};

/// Maximum number of metric cards per row.
pub const METRIC_COLUMNS: usize = 3;

/// Metric card width, in inches.
pub const METRIC_CARD_WIDTH: f64 = 2.8;

/// Metric card height, in inches.
pub const METRIC_CARD_HEIGHT: f64 = 2.0;

/// Horizontal gap between metric cards, in inches.
pub const METRIC_GAP: f64 = 0.3;

/// Top of the first metric row, in inches.
pub const METRIC_TOP: f64 = 1.8;

/// Vertical distance between metric rows, in inches.
pub const METRIC_ROW_PITCH: f64 = 2.2;

/// Top of the first conclusion bar, in inches.
pub const CONCLUSION_TOP: f64 = 1.8;

/// Vertical distance between conclusion bars, in inches.
pub const CONCLUSION_PITCH: f64 = 0.9;

/// Number of card columns for `count` metrics.
pub fn metric_columns(count: usize) -> usize {
    count.min(METRIC_COLUMNS)
}

/// Left edge of a row of `columns` metric cards centered in `canvas_width`.
pub fn metric_start_x(columns: usize, canvas_width: Emu) -> Emu {
    if columns == 0 {
        return canvas_width / 2;
    }
    let row_width = inches(columns as f64 * METRIC_CARD_WIDTH + (columns - 1) as f64 * METRIC_GAP);
    (canvas_width - row_width) / 2
}

/// Frames of `count` metric cards laid out row by row, centered horizontally.
pub fn metric_grid(count: usize, canvas_width: Emu) -> Vec<Rect> {
    let columns = metric_columns(count);
    let start_x = metric_start_x(columns, canvas_width);
    let pitch_x = inches(METRIC_CARD_WIDTH + METRIC_GAP);

    (0..count)
        .map(|i| {
            let col = i % columns;
            let row = i / columns;
            Rect::new(
                start_x + col as Emu * pitch_x,
                inches(METRIC_TOP + row as f64 * METRIC_ROW_PITCH),
                inches(METRIC_CARD_WIDTH),
                inches(METRIC_CARD_HEIGHT),
            )
        })
        .collect()
}

/// Vertical offset of the `index`-th conclusion bar, in inches.
pub fn conclusion_bar_top(index: usize) -> f64 {
    CONCLUSION_TOP + index as f64 * CONCLUSION_PITCH
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDTH: Emu = 9_144_000;

    #[test]
    fn test_metric_columns() {
        assert_eq!(metric_columns(0), 0);
        assert_eq!(metric_columns(1), 1);
        assert_eq!(metric_columns(3), 3);
        assert_eq!(metric_columns(6), 3);
        assert_eq!(metric_columns(7), 3);
    }

    #[test]
    fn test_metric_row_is_centered() {
        for count in 1..=7 {
            let frames = metric_grid(count, WIDTH);
            let first_row: Vec<_> = frames.iter().filter(|f| f.y == frames[0].y).collect();
            assert_eq!(first_row.len(), metric_columns(count));

            let left = first_row[0].x;
            let right = WIDTH - first_row.last().unwrap().right();
            assert!((left - right).abs() <= 1, "count {count}: {left} vs {right}");
        }
    }

    #[test]
    fn test_metric_grid_wraps_rows() {
        let frames = metric_grid(6, WIDTH);
        assert_eq!(frames.len(), 6);
        assert_eq!(frames[3].x, frames[0].x);
        assert_eq!(frames[3].y - frames[0].y, inches(METRIC_ROW_PITCH));
        // 10 - (3 * 2.8 + 2 * 0.3) = 1.0, halved
        assert_eq!(frames[0].x, inches(0.5));
    }

    #[test]
    fn test_metric_grid_empty() {
        assert!(metric_grid(0, WIDTH).is_empty());
    }

    #[test]
    fn test_conclusion_bar_top() {
        assert!((conclusion_bar_top(0) - 1.8).abs() < 1e-9);
        assert!((conclusion_bar_top(4) - 5.4).abs() < 1e-9);
    }
}
