//! Sitemap generation configuration.
//!
//! Static routes are listed in order of appearance in `sitemap.xml`:
//!
//! ```toml
//! [[build.sitemap.pages]]
//! path = "/"
//! priority = 1.0
//! changefreq = "weekly"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;

/// Sitemap `changefreq` hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFreq {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A hand-listed route (home, listings, about, ...).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StaticPage {
    /// Site path, starting with `/`.
    pub path: String,
    #[serde(default)]
    pub priority: Option<f32>,
    #[serde(default)]
    pub changefreq: Option<ChangeFreq>,
}

impl StaticPage {
    fn new(path: &str, priority: f32, changefreq: ChangeFreq) -> Self {
        Self {
            path: path.to_string(),
            priority: Some(priority),
            changefreq: Some(changefreq),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Output path for sitemap file.
    pub path: PathBuf,

    /// Static routes, emitted before project and article entries.
    pub pages: Vec<StaticPage>,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            path: "sitemap.xml".into(),
            pages: default_pages(),
        }
    }
}

/// The portfolio's six top-level routes.
fn default_pages() -> Vec<StaticPage> {
    vec![
        StaticPage::new("/", 1.0, ChangeFreq::Weekly),
        StaticPage::new("/portfolio", 0.9, ChangeFreq::Weekly),
        StaticPage::new("/blog", 0.9, ChangeFreq::Weekly),
        StaticPage::new("/certifications", 0.8, ChangeFreq::Monthly),
        StaticPage::new("/about", 0.8, ChangeFreq::Monthly),
        StaticPage::new("/contact", 0.7, ChangeFreq::Monthly),
    ]
}

impl SitemapConfig {
    const PAGES: &'static str = "build.sitemap.pages";

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let mut seen = HashSet::new();

        for (i, page) in self.pages.iter().enumerate() {
            if !page.path.starts_with('/') {
                diag.error_with_hint(
                    FieldPath::index(Self::PAGES, i, "path"),
                    format!("`{}` must start with `/`", page.path),
                    "paths are joined to site.url",
                );
            } else if !seen.insert(page.path.as_str()) {
                diag.error(
                    FieldPath::index(Self::PAGES, i, "path"),
                    format!("`{}` is listed more than once", page.path),
                );
            }

            if let Some(priority) = page.priority
                && !(0.0..=1.0).contains(&priority)
            {
                diag.error(
                    FieldPath::index(Self::PAGES, i, "priority"),
                    format!("{priority} is outside 0.0..=1.0"),
                );
            }
        }

        if self.pages.is_empty() {
            diag.warn(FieldPath::new(Self::PAGES), "no static pages configured");
        }
    }
}
