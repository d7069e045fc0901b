pub mod config;
pub mod rng;
pub mod scan;
pub mod select;

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::scan::PhotoEntry;

/// The composed pipeline: enumerate the photo directory and pick the day's
/// selection against the current instant.
#[must_use]
pub fn daily_selection(dir: &Path, public_base: &str, count: usize) -> Vec<PhotoEntry> {
    daily_selection_at(dir, public_base, count, Utc::now())
}

/// Same pipeline with an explicit instant; the clock is the pipeline's only
/// ambient input, so tests pin it here.
#[must_use]
pub fn daily_selection_at(
    dir: &Path,
    public_base: &str,
    count: usize,
    now: DateTime<Utc>,
) -> Vec<PhotoEntry> {
    let catalogue = scan::enumerate_photos(dir, public_base);
    select::select_daily(catalogue, count, now)
}
