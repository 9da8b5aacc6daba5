use std::path::Path;

use anyhow::Result;
use tunecal_core::{events_on_date, CompletionIndex};

use crate::render;
use crate::store;

pub fn run(store_path: &Path, date_str: &str) -> Result<()> {
    let date = super::parse_date(date_str)?;

    let file = store::load(store_path)?;
    let index = CompletionIndex::from_clients(&file.clients);
    let active = events_on_date(&file.events, date);

    println!("{}", render::render_day(date, &active, &index));

    Ok(())
}
