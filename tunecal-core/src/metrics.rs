//! Pixel mapping for positioned segments.
//!
//! Pure arithmetic from grid cells to screen rectangles. The renderer
//! (out of scope for the engine) supplies the dimensions and draws the
//! resulting rects.

use crate::layout::PositionedSegment;

/// Fixed dimensions of a rendered month grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridMetrics {
    /// Full width available to the 7 columns, gaps included.
    pub grid_width: f64,
    /// Horizontal gap between adjacent columns.
    pub gap: f64,
    /// Height of one week row.
    pub row_height: f64,
    /// Height of one stacking lane.
    pub lane_height: f64,
    /// Vertical offset of the first lane below a row's day-number header.
    pub header_offset: f64,
}

/// Screen rectangle of one segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl GridMetrics {
    /// Width of a single day cell, gaps excluded.
    pub fn cell_width(&self) -> f64 {
        (self.grid_width - 6.0 * self.gap) / 7.0
    }

    /// Screen rectangle for `segment`.
    ///
    /// A segment spanning n cells covers n cell widths plus the n-1 gaps
    /// between them.
    pub fn rect(&self, segment: &PositionedSegment) -> SegmentRect {
        let cell = self.cell_width();
        let span = segment.span_days as f64;

        SegmentRect {
            x: segment.col as f64 * (cell + self.gap),
            y: segment.row as f64 * self.row_height
                + self.header_offset
                + segment.lane as f64 * self.lane_height,
            width: span * cell + (span - 1.0) * self.gap,
            height: self.lane_height,
        }
    }
}
