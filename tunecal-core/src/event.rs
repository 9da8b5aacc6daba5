//! Booking event types and the date-membership query.
//!
//! Bookings are produced by the surrounding application (client records,
//! booking forms) and are immutable from the engine's perspective. The
//! layout engine only reads dates; branch and service are opaque display
//! metadata.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TuneCalError;

/// A shop branch tag.
///
/// Used only for color selection downstream; the layout algorithm never
/// inspects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Msk,
    Rnd,
}

impl FromStr for Branch {
    type Err = TuneCalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "msk" => Ok(Branch::Msk),
            "rnd" => Ok(Branch::Rnd),
            other => Err(TuneCalError::UnknownBranch(other.to_string())),
        }
    }
}

/// A booking shown on the calendar (externally owned).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingEvent {
    pub id: String,
    pub client_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_id: Option<String>,
    /// Range start (inclusive).
    pub date: NaiveDate,
    /// Range end (inclusive). `None` means a single-day booking.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<Branch>,
    /// Display label (service name).
    pub service: String,
}

impl BookingEvent {
    /// Effective inclusive end of the booking's range.
    ///
    /// An inverted range (`end_date` before `date`) is caller error; it is
    /// normalized to a single-day booking so the engine stays total.
    pub fn effective_end(&self) -> NaiveDate {
        match self.end_date {
            Some(end) => end.max(self.date),
            None => self.date,
        }
    }

    /// Total day span, inclusive of both endpoints (1 for single-day).
    pub fn span_days(&self) -> u32 {
        (self.effective_end() - self.date).num_days() as u32 + 1
    }

    /// Whether the booking is active on `date`.
    ///
    /// A booking without `end_date` matches only its start date; a ranged
    /// booking matches every date in `date..=end_date`.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.date <= date && date <= self.effective_end()
    }
}

/// All bookings active on `date`, in input order.
///
/// Branch is not consulted; callers filter separately if they need to.
pub fn events_on_date(events: &[BookingEvent], date: NaiveDate) -> Vec<&BookingEvent> {
    events.iter().filter(|e| e.is_active_on(date)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn make_booking(id: &str, start: &str, end: Option<&str>) -> BookingEvent {
        BookingEvent {
            id: id.to_string(),
            client_id: "client-1".to_string(),
            record_id: None,
            date: date(start),
            end_date: end.map(date),
            branch: None,
            service: "Chip tuning".to_string(),
        }
    }

    // --- date membership ---

    #[test]
    fn single_day_matches_only_its_date() {
        let booking = make_booking("b1", "2024-03-15", None);
        assert!(booking.is_active_on(date("2024-03-15")));
        assert!(!booking.is_active_on(date("2024-03-14")));
        assert!(!booking.is_active_on(date("2024-03-16")));
    }

    #[test]
    fn range_is_inclusive_on_both_ends() {
        let booking = make_booking("b1", "2024-03-10", Some("2024-03-12"));
        assert!(!booking.is_active_on(date("2024-03-09")), "day before start");
        assert!(booking.is_active_on(date("2024-03-10")), "start boundary");
        assert!(booking.is_active_on(date("2024-03-11")), "interior day");
        assert!(booking.is_active_on(date("2024-03-12")), "end boundary");
        assert!(!booking.is_active_on(date("2024-03-13")), "day after end");
    }

    #[test]
    fn range_crossing_month_boundary() {
        let booking = make_booking("b1", "2024-03-30", Some("2024-04-02"));
        assert!(booking.is_active_on(date("2024-03-31")));
        assert!(booking.is_active_on(date("2024-04-01")));
        assert!(!booking.is_active_on(date("2024-04-03")));
    }

    #[test]
    fn events_on_date_keeps_input_order() {
        let bookings = vec![
            make_booking("b1", "2024-03-10", Some("2024-03-12")),
            make_booking("b2", "2024-03-11", None),
            make_booking("b3", "2024-03-20", None),
        ];
        let active = events_on_date(&bookings, date("2024-03-11"));
        let ids: Vec<_> = active.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b1", "b2"]);
    }

    // --- span and normalization ---

    #[test]
    fn span_counts_both_endpoints() {
        assert_eq!(make_booking("b", "2024-03-04", Some("2024-03-06")).span_days(), 3);
        assert_eq!(make_booking("b", "2024-03-04", Some("2024-03-04")).span_days(), 1);
        assert_eq!(make_booking("b", "2024-03-04", None).span_days(), 1);
    }

    #[test]
    fn inverted_range_normalizes_to_single_day() {
        let booking = make_booking("b", "2024-03-10", Some("2024-03-05"));
        assert_eq!(booking.span_days(), 1);
        assert_eq!(booking.effective_end(), date("2024-03-10"));
        assert!(booking.is_active_on(date("2024-03-10")));
        assert!(!booking.is_active_on(date("2024-03-07")));
    }

    // --- serde ---

    #[test]
    fn serializes_dates_as_iso_strings() {
        let booking = make_booking("b1", "2024-03-08", Some("2024-03-11"));
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["date"], "2024-03-08");
        assert_eq!(json["end_date"], "2024-03-11");
    }

    #[test]
    fn branch_serializes_lowercase() {
        let mut booking = make_booking("b1", "2024-03-08", None);
        booking.branch = Some(Branch::Msk);
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["branch"], "msk");

        booking.branch = Some(Branch::Rnd);
        let json = serde_json::to_value(&booking).unwrap();
        assert_eq!(json["branch"], "rnd");
    }

    #[test]
    fn optional_fields_are_omitted_when_absent() {
        let booking = make_booking("b1", "2024-03-08", None);
        let json = serde_json::to_value(&booking).unwrap();
        assert!(json.get("end_date").is_none());
        assert!(json.get("branch").is_none());
        assert!(json.get("record_id").is_none());
    }

    #[test]
    fn round_trips_through_json() {
        let mut booking = make_booking("b1", "2024-03-08", Some("2024-03-11"));
        booking.branch = Some(Branch::Rnd);
        booking.record_id = Some("rec-7".to_string());

        let json = serde_json::to_string(&booking).unwrap();
        let back: BookingEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, booking);
    }

    #[test]
    fn branch_parses_from_str() {
        assert_eq!("msk".parse::<Branch>().unwrap(), Branch::Msk);
        assert_eq!("rnd".parse::<Branch>().unwrap(), Branch::Rnd);
        assert!("spb".parse::<Branch>().is_err());
    }
}
