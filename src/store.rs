//! Bookings file load/save.
//!
//! The bookings file is the CLI's stand-in for the booking application's
//! database: a single JSON document with the event list and the client
//! records used for completion coloring.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use tunecal_core::{BookingEvent, ClientRecords};

use crate::config::TunecalConfig;

/// On-disk shape of the bookings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingFile {
    #[serde(default)]
    pub events: Vec<BookingEvent>,
    #[serde(default)]
    pub clients: Vec<ClientRecords>,
}

/// Pick the bookings file: `--file` wins over the configured path.
pub fn resolve_path(cli_file: Option<&str>, config: &TunecalConfig) -> PathBuf {
    match cli_file {
        Some(file) => PathBuf::from(shellexpand::tilde(file).into_owned()),
        None => config.bookings_path(),
    }
}

/// Load the bookings file, failing with a hint if it doesn't exist.
pub fn load(path: &Path) -> Result<BookingFile> {
    if !path.exists() {
        anyhow::bail!(
            "No bookings file at {}.\n\n\
            Create your first booking with:\n  \
            tunecal new \"Chip tuning\" --client <id> --date YYYY-MM-DD",
            path.display()
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read {}", path.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Could not parse {}", path.display()))
}

/// Load the bookings file, starting empty if it doesn't exist yet.
pub fn load_or_default(path: &Path) -> Result<BookingFile> {
    if !path.exists() {
        return Ok(BookingFile::default());
    }
    load(path)
}

/// Write the bookings file atomically (write-then-rename).
pub fn save(path: &Path, file: &BookingFile) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Could not create {}", parent.display()))?;
    }

    let content = serde_json::to_string_pretty(file).context("Could not serialize bookings")?;

    let temp = path.with_extension("json.tmp");
    std::fs::write(&temp, content)
        .with_context(|| format!("Could not write {}", temp.display()))?;
    std::fs::rename(&temp, path)
        .with_context(|| format!("Could not replace {}", path.display()))?;

    info!(path = %path.display(), events = file.events.len(), "saved bookings file");
    Ok(())
}
