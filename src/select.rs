//! Deterministic daily selection over the photo catalogue.
//!
//! The pipeline is pure: catalogue + instant in, selection out. Every
//! visitor sees the same subset for a given UTC calendar day and the subset
//! rotates at UTC midnight, with no persisted state between invocations.

use chrono::{DateTime, Duration, Utc};

use crate::rng::Mulberry32;

pub const MS_PER_DAY: i64 = 86_400_000;

/// Seed for `now`: the count of whole UTC days since the epoch.
///
/// Stable for every instant within one UTC day, different across day
/// boundaries. Truncated to the generator's 32-bit state width.
#[must_use]
pub fn daily_seed(now: DateTime<Utc>) -> u32 {
    now.timestamp_millis().div_euclid(MS_PER_DAY) as u32
}

/// Permute `items` with a backward Fisher-Yates pass driven by the seeded
/// stream: same items and same seed yield the identical order on every
/// machine. Lengths 0 and 1 pass through untouched.
#[must_use]
pub fn seeded_shuffle<T>(mut items: Vec<T>, seed: u32) -> Vec<T> {
    let mut rng = Mulberry32::new(seed);
    for i in (1..items.len()).rev() {
        let j = (rng.next_f64() * (i as f64 + 1.0)) as usize;
        items.swap(i, j);
    }
    items
}

/// The day's selection: the first `min(count, len)` entries of the
/// seed-determined permutation of `items`. A `count` of zero yields an
/// empty selection; an oversized `count` yields the full permutation.
#[must_use]
pub fn select_daily<T>(items: Vec<T>, count: usize, now: DateTime<Utc>) -> Vec<T> {
    let mut permuted = seeded_shuffle(items, daily_seed(now));
    permuted.truncate(count);
    permuted
}

/// The next UTC midnight after `now`, when the selection rotates. Exactly
/// at midnight the rotation is a full day away.
#[must_use]
pub fn next_rotation(now: DateTime<Utc>) -> DateTime<Utc> {
    let next_day = now.timestamp_millis().div_euclid(MS_PER_DAY) + 1;
    DateTime::from_timestamp_millis(next_day * MS_PER_DAY)
        .expect("next UTC midnight is representable")
}

/// Time remaining until the selection rotates.
#[must_use]
pub fn time_until_rotation(now: DateTime<Utc>) -> Duration {
    next_rotation(now) - now
}
