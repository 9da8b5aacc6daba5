//! Terminal rendering for layout output.
//!
//! Draws the month grid and booking bars with owo_colors. This is an
//! inspection view of the engine's output, not the product UI: day
//! numbers per week row, one bar line per stacking lane, and a segment
//! table underneath.

use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;
use tunecal_core::{
    Branch, BookingEvent, ColorCategory, CompletionIndex, MonthGrid, PositionedSegment,
};

/// Characters per day column.
const CELL_WIDTH: usize = 6;

/// Colorize text according to its booking's category.
fn paint(category: ColorCategory, text: &str) -> String {
    match category {
        ColorCategory::Completed => text.green().to_string(),
        ColorCategory::Branch(Branch::Msk) => text.blue().to_string(),
        ColorCategory::Branch(Branch::Rnd) => text.red().to_string(),
        ColorCategory::Unassigned => text.to_string(),
    }
}

/// Category of a segment's source booking.
fn category_of(
    segment: &PositionedSegment,
    events: &[BookingEvent],
    index: &CompletionIndex,
) -> ColorCategory {
    events
        .iter()
        .find(|e| e.id == segment.base_id())
        .map(|e| index.classify(e))
        .unwrap_or(ColorCategory::Unassigned)
}

/// Render the full month view: title, day grid, lane bars, segment table.
pub fn render_month(
    grid: &MonthGrid,
    segments: &[PositionedSegment],
    events: &[BookingEvent],
    index: &CompletionIndex,
    today: NaiveDate,
) -> String {
    let mut lines = Vec::new();

    lines.push(format!(" {}", month_title(grid).bold()));
    lines.push(weekday_header());

    for row in 0..grid.rows() {
        lines.push(day_number_line(grid, row, today));
        lines.extend(lane_lines(row, segments, events, index));
    }

    if !segments.is_empty() {
        lines.push(String::new());
        lines.push(format!(" {}", "Segments:".dimmed()));
        for segment in segments {
            lines.push(segment_table_line(segment, events, index));
        }
    }

    lines.join("\n")
}

/// List bookings active on one date, colored by category.
pub fn render_day(
    date: NaiveDate,
    active: &[&BookingEvent],
    index: &CompletionIndex,
) -> String {
    if active.is_empty() {
        return format!(" No bookings on {}", date).dimmed().to_string();
    }

    let mut lines = vec![format!(" {}", format!("Bookings on {}:", date).bold())];
    for event in active {
        lines.push(format!("   {}", render_booking_line(event, index)));
    }
    lines.join("\n")
}

/// One listing line for a booking.
pub fn render_booking_line(event: &BookingEvent, index: &CompletionIndex) -> String {
    let category = index.classify(event);
    let marker = paint(category, "●");

    let range = match event.end_date {
        Some(end) if end != event.date => format!("{}..{}", event.date, end),
        _ => event.date.to_string(),
    };

    let branch = match event.branch {
        Some(Branch::Msk) => " [msk]",
        Some(Branch::Rnd) => " [rnd]",
        None => "",
    };

    let status = if index.is_completed(event) {
        " done".green().to_string()
    } else {
        String::new()
    };

    format!(
        "{} {}  {}{}{}  {}",
        marker,
        range,
        event.service,
        branch,
        status,
        format!("(client {})", event.client_id).dimmed()
    )
}

fn month_title(grid: &MonthGrid) -> String {
    // The 1st always exists for a constructed grid.
    let first = NaiveDate::from_ymd_opt(grid.year(), grid.month(), 1).unwrap();
    first.format("%B %Y").to_string()
}

fn weekday_header() -> String {
    let mut line = String::new();
    for day in ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"] {
        line.push_str(&format!("{:>width$}", day, width = CELL_WIDTH));
    }
    line.dimmed().to_string()
}

/// Day numbers of one week row; blank cells stay empty, today is inverted.
fn day_number_line(grid: &MonthGrid, row: u32, today: NaiveDate) -> String {
    let mut line = String::new();
    for col in 0..7 {
        match grid.date_of_cell(row, col) {
            Some(date) if date == today => {
                let cell = format!("{:>width$}", date.day(), width = CELL_WIDTH);
                line.push_str(&cell.reversed().to_string());
            }
            Some(date) => line.push_str(&format!("{:>width$}", date.day(), width = CELL_WIDTH)),
            None => line.push_str(&" ".repeat(CELL_WIDTH)),
        }
    }
    line
}

/// Bar lines for one week row, one line per occupied lane.
fn lane_lines(
    row: u32,
    segments: &[PositionedSegment],
    events: &[BookingEvent],
    index: &CompletionIndex,
) -> Vec<String> {
    let in_row: Vec<&PositionedSegment> = segments.iter().filter(|s| s.row == row).collect();
    let Some(max_lane) = in_row.iter().map(|s| s.lane).max() else {
        return Vec::new();
    };

    let mut lines = Vec::new();
    for lane in 0..=max_lane {
        let mut in_lane: Vec<&&PositionedSegment> =
            in_row.iter().filter(|s| s.lane == lane).collect();
        in_lane.sort_by_key(|s| s.col);

        let mut line = String::new();
        let mut cursor = 0;
        for segment in in_lane {
            let start = segment.col as usize * CELL_WIDTH + 1;
            line.push_str(&" ".repeat(start.saturating_sub(cursor)));

            let width = segment.span_days as usize * CELL_WIDTH - 2;
            let bar = bar_text(segment, events, width);
            line.push_str(&paint(category_of(segment, events, index), &bar));
            cursor = start + width;
        }
        lines.push(line);
    }
    lines
}

/// The visible text of one bar: label on the first segment, rails on
/// continuations, open/closed ends showing where the booking continues.
fn bar_text(segment: &PositionedSegment, events: &[BookingEvent], width: usize) -> String {
    let label = if segment.is_first {
        events
            .iter()
            .find(|e| e.id == segment.base_id())
            .map(|e| e.service.clone())
            .unwrap_or_default()
    } else {
        String::new()
    };

    let open = if segment.is_first { '[' } else { '·' };
    let close = if segment.is_last { ']' } else { '·' };

    let body_width = width.saturating_sub(2);
    let mut body: String = label.chars().take(body_width).collect();
    while body.chars().count() < body_width {
        body.push('─');
    }

    format!("{open}{body}{close}")
}

fn segment_table_line(
    segment: &PositionedSegment,
    events: &[BookingEvent],
    index: &CompletionIndex,
) -> String {
    let mut flags = Vec::new();
    if segment.is_first {
        flags.push("first");
    }
    if segment.is_last {
        flags.push("last");
    }

    format!(
        "   {} {}",
        paint(category_of(segment, events, index), &format!("{:<24}", segment.event_id)),
        format!(
            "row {} col {} span {} lane {} [{}]",
            segment.row,
            segment.col,
            segment.span_days,
            segment.lane,
            flags.join(", ")
        )
        .dimmed()
    )
}
