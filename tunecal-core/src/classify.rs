//! Color classification for rendered bookings.
//!
//! The layout engine is purely geometric; color comes from a separate
//! pass over a precomputed completion index, so the engine never reaches
//! into client or record shapes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::event::{BookingEvent, Branch};

/// Completion status of one booking record (collaborator shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordStatus {
    pub id: String,
    #[serde(default)]
    pub is_completed: bool,
}

/// A client with its booking records (collaborator shape).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientRecords {
    pub id: String,
    #[serde(default)]
    pub records: Vec<RecordStatus>,
}

/// Rendering category of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCategory {
    /// The underlying record is marked completed.
    Completed,
    /// Colored by shop branch.
    Branch(Branch),
    /// No completed record and no branch tag.
    Unassigned,
}

/// Precomputed `(client, record) -> completed` lookup.
pub struct CompletionIndex {
    completed: HashMap<(String, String), bool>,
}

impl CompletionIndex {
    pub fn from_clients(clients: &[ClientRecords]) -> Self {
        let mut completed = HashMap::new();
        for client in clients {
            for record in &client.records {
                completed.insert((client.id.clone(), record.id.clone()), record.is_completed);
            }
        }
        CompletionIndex { completed }
    }

    /// Whether the booking's record is marked completed.
    ///
    /// Bookings without a record reference, or referencing an unknown
    /// record, count as not completed.
    pub fn is_completed(&self, event: &BookingEvent) -> bool {
        let Some(record_id) = &event.record_id else {
            return false;
        };
        self.completed
            .get(&(event.client_id.clone(), record_id.clone()))
            .copied()
            .unwrap_or(false)
    }

    /// Category for rendering. Completion wins over branch color.
    pub fn classify(&self, event: &BookingEvent) -> ColorCategory {
        if self.is_completed(event) {
            ColorCategory::Completed
        } else {
            match event.branch {
                Some(branch) => ColorCategory::Branch(branch),
                None => ColorCategory::Unassigned,
            }
        }
    }
}
