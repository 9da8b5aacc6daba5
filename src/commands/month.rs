use std::path::Path;

use anyhow::Result;
use chrono::{Datelike, Local};
use tunecal_core::{layout_month, CompletionIndex, MonthGrid};

use crate::render;
use crate::store;

pub fn run(store_path: &Path, year: Option<i32>, month: Option<u32>) -> Result<()> {
    let file = store::load(store_path)?;

    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());

    let grid = MonthGrid::new(year, month)?;
    let segments = layout_month(&grid, &file.events);
    let index = CompletionIndex::from_clients(&file.clients);

    println!(
        "{}",
        render::render_month(&grid, &segments, &file.events, &index, today)
    );

    Ok(())
}
