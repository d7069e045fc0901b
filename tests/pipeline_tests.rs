use std::fs;

use chrono::{TimeZone, Utc};
use daily_gallery::daily_selection_at;
use tempfile::tempdir;

#[test]
fn pipeline_scans_and_selects_against_the_instant() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    for name in ["a.jpg", "b.jpg", "c.png", "d.webp", "ignore.txt"] {
        fs::write(root.join(name), b"x").unwrap();
    }

    let morning = Utc.with_ymd_and_hms(2024, 6, 15, 8, 0, 0).unwrap();
    let evening = Utc.with_ymd_and_hms(2024, 6, 15, 22, 30, 0).unwrap();

    let first = daily_selection_at(root, "/photography", 3, morning);
    assert_eq!(first.len(), 3);
    for photo in &first {
        assert_eq!(photo.url, format!("/photography/{}", photo.filename));
        assert_ne!(photo.filename, "ignore.txt");
    }

    // Any instant inside the same UTC day yields the same selection.
    assert_eq!(first, daily_selection_at(root, "/photography", 3, evening));
}

#[test]
fn pipeline_degrades_to_empty_selection() {
    let tmp = tempdir().unwrap();
    let gone = tmp.path().join("missing");
    let now = Utc.with_ymd_and_hms(2024, 6, 15, 8, 0, 0).unwrap();

    assert!(daily_selection_at(&gone, "/photography", 6, now).is_empty());
}
