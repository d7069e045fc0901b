//! Directory scanning utilities for discovering gallery photos.

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

/// Extensions eligible for the gallery (lowercase, without dot).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

/// One selectable photo: the file name plus the public URL a renderer
/// fetches it from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoEntry {
    /// File name, unique within one catalogue.
    pub filename: String,
    /// Public locator; a pure function of `filename`.
    pub url: String,
}

impl PhotoEntry {
    #[must_use]
    pub fn new(filename: impl Into<String>, public_base: &str) -> Self {
        let filename = filename.into();
        let url = format!("{}/{}", public_base.trim_end_matches('/'), filename);
        Self { filename, url }
    }
}

/// Return `true` if `path` has an allowed image extension.
#[must_use]
pub fn is_supported_image(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()).is_some_and(|ext| {
        let ext = ext.to_ascii_lowercase();
        IMAGE_EXTENSIONS.iter().any(|e| *e == ext)
    })
}

/// List the photos directly inside `dir` (no recursion).
///
/// A missing or unreadable directory yields an empty catalogue rather than
/// an error: the gallery degrades to its empty state instead of failing the
/// page. The result reflects the filesystem at call time; nothing is cached
/// between calls, and the ordering is whatever the directory walk yields.
#[must_use]
pub fn enumerate_photos(dir: &Path, public_base: &str) -> Vec<PhotoEntry> {
    if !dir.is_dir() {
        debug!(dir = %dir.display(), "photo directory missing; returning empty catalogue");
        return Vec::new();
    }

    let mut out = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .flatten()
    {
        if entry.file_type().is_file()
            && is_supported_image(entry.path())
            && let Some(name) = entry.file_name().to_str()
        {
            out.push(PhotoEntry::new(name, public_base));
        }
    }
    debug!(dir = %dir.display(), count = out.len(), "enumerated photo catalogue");
    out
}
