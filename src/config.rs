//! Host configuration for the gallery pipeline.

use std::path::{Path, PathBuf};

use anyhow::{Result, ensure};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Configuration {
    /// Directory scanned for gallery photos.
    pub photo_library_path: PathBuf,
    /// Public URL prefix joined with each file name to form its locator.
    pub public_photo_base: String,
    /// How many photos the gallery shows per day.
    pub gallery_count: usize,
    /// Site identity surfaced by the hosting pages.
    pub site: SiteOptions,
    /// Social links; only filled entries are surfaced.
    pub social: SocialLinks,
}

impl Configuration {
    const fn default_gallery_count() -> usize {
        6
    }

    fn default_public_photo_base() -> String {
        "/photography".to_owned()
    }

    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate runtime invariants that cannot be expressed via serde defaults alone.
    pub fn validated(self) -> Result<Self> {
        ensure!(self.gallery_count >= 1, "gallery-count must be at least one");
        ensure!(
            !self.public_photo_base.is_empty(),
            "public-photo-base must not be empty"
        );
        Ok(self)
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            photo_library_path: PathBuf::new(),
            public_photo_base: Self::default_public_photo_base(),
            gallery_count: Self::default_gallery_count(),
            site: SiteOptions::default(),
            social: SocialLinks::default(),
        }
    }
}

/// Identity block rendered into page metadata by the host.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SiteOptions {
    pub title: String,
    pub description: String,
    pub url: String,
    pub author: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub instagram: Option<String>,
    pub linkedin: Option<String>,
    pub steam: Option<String>,
    pub discord: Option<String>,
}

impl SocialLinks {
    /// The links that are actually filled in, in display order.
    #[must_use]
    pub fn filled(&self) -> Vec<(&'static str, &str)> {
        [
            ("github", &self.github),
            ("instagram", &self.instagram),
            ("linkedin", &self.linkedin),
            ("steam", &self.steam),
            ("discord", &self.discord),
        ]
        .into_iter()
        .filter_map(|(name, link)| link.as_deref().map(|l| (name, l)))
        .collect()
    }
}
