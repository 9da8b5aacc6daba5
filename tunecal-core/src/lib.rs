//! Calendar layout engine for tuning-shop bookings.
//!
//! Turns a flat list of bookings plus month-grid geometry into
//! positioned, visually non-overlapping rectangles for a 7-column month
//! view, and answers day-click queries:
//! - `grid` — month geometry (days, Monday-first pad, week rows)
//! - `layout` — event segmentation and lane stacking
//! - `metrics` — cell-to-pixel mapping for renderers
//! - `event` — booking types and the date-membership query
//! - `classify` — completion/branch color categories

pub mod classify;
pub mod error;
pub mod event;
pub mod grid;
pub mod layout;
pub mod metrics;

pub use classify::{ClientRecords, ColorCategory, CompletionIndex, RecordStatus};
pub use error::{TuneCalError, TuneCalResult};
pub use event::{events_on_date, BookingEvent, Branch};
pub use grid::MonthGrid;
pub use layout::{layout_month, PositionedSegment};
pub use metrics::{GridMetrics, SegmentRect};
