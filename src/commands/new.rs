use std::path::Path;

use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::info;
use tunecal_core::{BookingEvent, Branch};
use uuid::Uuid;

use crate::store;

pub fn run(
    store_path: &Path,
    service: String,
    client: String,
    date: String,
    end: Option<String>,
    branch: Option<String>,
    default_branch: Option<Branch>,
) -> Result<()> {
    let date = super::parse_date(&date)?;

    let end_date = end.as_deref().map(super::parse_date).transpose()?;
    if let Some(end) = end_date {
        if end < date {
            anyhow::bail!("End date {} is before start date {}", end, date);
        }
    }

    let branch = match branch {
        Some(s) => Some(s.parse::<Branch>()?),
        None => default_branch,
    };

    let mut file = store::load_or_default(store_path)?;

    let event = BookingEvent {
        id: Uuid::new_v4().to_string(),
        client_id: client,
        record_id: None,
        date,
        end_date,
        branch,
        service,
    };

    info!(event = %event.id, "creating booking");
    file.events.push(event.clone());
    store::save(store_path, &file)?;

    let range = match event.end_date {
        Some(end) => format!("{}..{}", event.date, end),
        None => event.date.to_string(),
    };
    println!("{}", format!("  Created: {} ({})", event.service, range).green());

    Ok(())
}
