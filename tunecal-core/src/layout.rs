//! Calendar layout: event segmentation and lane stacking.
//!
//! Packs bookings into a month grid. Each booking becomes one rectangle
//! per week row it touches (split at week boundaries), and bookings that
//! share a row are stacked into distinct vertical lanes so they never
//! render on top of each other.

use std::collections::HashMap;

use chrono::Datelike;
use tracing::debug;

use crate::event::BookingEvent;
use crate::grid::MonthGrid;

/// One contiguous, single-row rendering of all or part of a booking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedSegment {
    /// Source booking id, suffixed `-part-{n}` when split across rows.
    pub event_id: String,
    /// Week row within the month grid (0-based).
    pub row: u32,
    /// Weekday column, Monday-first (0-6).
    pub col: u32,
    /// Cells spanned. Never crosses a row, so always 1-7.
    pub span_days: u32,
    /// Chronological start of the booking; the label renders here.
    pub is_first: bool,
    /// Chronological end of the booking (or of its clipped part).
    pub is_last: bool,
    /// Vertical stacking lane within the row (0-based).
    pub lane: u32,
}

impl PositionedSegment {
    /// Source booking id with any `-part-{n}` suffix stripped.
    pub fn base_id(&self) -> &str {
        base_id(&self.event_id)
    }
}

/// Lay out `events` on `grid`.
///
/// A booking is drawn only in the month it starts in; the part of a range
/// that runs past the last day of the month is clipped, not carried into
/// the next month's view. Segments come out in input order, split parts
/// in chronological order, with lanes already assigned.
pub fn layout_month(grid: &MonthGrid, events: &[BookingEvent]) -> Vec<PositionedSegment> {
    let mut segments = Vec::new();
    for event in events {
        segment_event(grid, event, &mut segments);
    }
    assign_lanes(&mut segments);
    segments
}

/// Emit the grid segments for one booking (lanes assigned later).
fn segment_event(grid: &MonthGrid, event: &BookingEvent, out: &mut Vec<PositionedSegment>) {
    if !grid.contains(event.date) {
        debug!(event = %event.id, "skipping booking outside displayed month");
        return;
    }

    let span = clipped_span(grid, event);
    let (row, col) = grid.cell_of_day(event.date.day());
    let days_to_week_end = 7 - col;

    if span <= days_to_week_end {
        out.push(PositionedSegment {
            event_id: event.id.clone(),
            row,
            col,
            span_days: span,
            is_first: true,
            is_last: true,
            lane: 0,
        });
        return;
    }

    // Split at week boundaries: first chunk runs to the end of its row,
    // the rest restart at column 0 of successive rows.
    debug!(event = %event.id, span, "splitting booking across week rows");
    out.push(PositionedSegment {
        event_id: part_id(&event.id, 0),
        row,
        col,
        span_days: days_to_week_end,
        is_first: true,
        is_last: false,
        lane: 0,
    });

    let mut part = 1;
    let mut row = row + 1;
    let mut remaining = span - days_to_week_end;
    while remaining > 0 {
        out.push(PositionedSegment {
            event_id: part_id(&event.id, part),
            row,
            col: 0,
            span_days: remaining.min(7),
            is_first: false,
            is_last: remaining <= 7,
            lane: 0,
        });
        remaining = remaining.saturating_sub(7);
        row += 1;
        part += 1;
    }
}

/// Day span of `event` within the displayed month.
fn clipped_span(grid: &MonthGrid, event: &BookingEvent) -> u32 {
    let end = match event.end_date {
        Some(end) => end,
        None => return 1,
    };

    if end < event.date {
        // Inverted range: caller bug, normalize to a single day.
        debug!(event = %event.id, "normalizing inverted booking range");
        return 1;
    }

    if grid.contains(end) {
        end.day() - event.date.day() + 1
    } else {
        // Ends in a later month: clip to the last day of this one. The
        // continuation is never drawn; the booking stays anchored to the
        // month it starts in.
        debug!(event = %event.id, "clipping booking at month end");
        grid.days() - event.date.day() + 1
    }
}

fn part_id(id: &str, part: u32) -> String {
    format!("{id}-part-{part}")
}

/// Strip a `-part-{n}` suffix back to the source booking id.
fn base_id(event_id: &str) -> &str {
    match event_id.rsplit_once("-part-") {
        Some((base, n)) if !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()) => base,
        _ => event_id,
    }
}

/// Assign stacking lanes, keyed by booking identity.
///
/// A booking keeps one lane for all its segments; a booking first seen in
/// a row takes the lowest lane not already occupied in that row. Distinct
/// bookings sharing a row therefore get distinct lanes in input order,
/// whether or not their day ranges actually overlap.
fn assign_lanes(segments: &mut [PositionedSegment]) {
    let mut lane_of: HashMap<String, u32> = HashMap::new();
    let mut used_in_row: HashMap<u32, Vec<u32>> = HashMap::new();

    for segment in segments.iter_mut() {
        let base = segment.base_id().to_string();
        let used = used_in_row.entry(segment.row).or_default();

        let lane = match lane_of.get(&base) {
            Some(&lane) => lane,
            None => {
                let mut lane = 0;
                while used.contains(&lane) {
                    lane += 1;
                }
                lane_of.insert(base, lane);
                lane
            }
        };

        if !used.contains(&lane) {
            used.push(lane);
        }
        segment.lane = lane;
    }
}
