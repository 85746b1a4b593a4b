//! `[build]` section configuration.
//!
//! Contains input/output paths, minification, and the per-document settings.
//!
//! # Example
//!
//! ```toml
//! [build]
//! content = "content"         # Catalog directory (relative to site root)
//! output = "public"           # Output directory (relative to site root)
//! minify = false              # Minify generated XML
//!
//! [build.feed]
//! path = "rss.xml"            # Feed output path (relative to output)
//!
//! [build.sitemap]
//! path = "sitemap.xml"        # Sitemap output path (relative to output)
//! ```
//!
//! See submodules for detailed options: [`feed`], [`sitemap`].

mod feed;
mod sitemap;

use feed::FeedConfig;
use sitemap::SitemapConfig;

pub use sitemap::ChangeFreq;

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BuildSectionConfig {
    /// Catalog source directory.
    pub content: PathBuf,

    /// Build output directory.
    pub output: PathBuf,

    /// Minify generated XML.
    pub minify: bool,

    /// RSS feed settings.
    pub feed: FeedConfig,

    /// Sitemap settings.
    pub sitemap: SitemapConfig,
}

impl Default for BuildSectionConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
            minify: false,
            feed: FeedConfig::default(),
            sitemap: SitemapConfig::default(),
        }
    }
}

impl BuildSectionConfig {
    pub const FIELD_FEED_PATH: FieldPath = FieldPath::new("build.feed.path");
    pub const FIELD_SITEMAP_PATH: FieldPath = FieldPath::new("build.sitemap.path");

    /// Validate build configuration.
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, path) in [
            (Self::FIELD_FEED_PATH, &self.feed.path),
            (Self::FIELD_SITEMAP_PATH, &self.sitemap.path),
        ] {
            if path.as_os_str().is_empty() {
                diag.error(field, "output path is empty");
            } else if path.is_absolute() {
                diag.error_with_hint(
                    field,
                    format!("`{}` must be relative", path.display()),
                    "paths are resolved against [build] output",
                );
            }
        }

        if self.feed.path == self.sitemap.path {
            diag.error(
                Self::FIELD_SITEMAP_PATH,
                "feed and sitemap would overwrite each other",
            );
        }

        self.sitemap.validate(diag);
    }
}
