//! `[site]` section configuration.
//!
//! Site-wide constants shared by the feed and the sitemap.
//!
//! # Example
//!
//! ```toml
//! [site]
//! title = "Jane Doe"
//! description = "Backend engineer writing about distributed systems"
//! author = "Jane Doe"
//! email = "jane@example.com"
//! url = "https://janedoe.dev"
//! language = "en-us"
//! image = "/og-image.png"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::Deserialize;

/// Site metadata injected into both generators.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site title.
    pub title: String,

    /// Site description.
    pub description: String,

    /// Author name, or an RSS-style `email (Name)` string.
    pub author: String,

    /// Author email.
    pub email: String,

    /// Absolute base URL (e.g., "https://example.com").
    pub url: String,

    /// Language code (e.g., "en-us").
    pub language: String,

    /// Channel image path or absolute URL.
    pub image: String,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            author: String::new(),
            email: String::new(),
            url: String::new(),
            language: "en-us".into(),
            image: "/og-image.png".into(),
        }
    }
}

impl SiteInfoConfig {
    pub const FIELD_TITLE: FieldPath = FieldPath::new("site.title");
    pub const FIELD_AUTHOR: FieldPath = FieldPath::new("site.author");
    pub const FIELD_EMAIL: FieldPath = FieldPath::new("site.email");
    pub const FIELD_URL: FieldPath = FieldPath::new("site.url");

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Absolute URL for a site path; absolute inputs are returned as-is.
    ///
    /// ```ignore
    /// site.url_for("/")          // "https://example.com/"
    /// site.url_for("/blog/x")    // "https://example.com/blog/x"
    /// site.url_for("rss.xml")    // "https://example.com/rss.xml"
    /// ```
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }

    /// Validate site configuration.
    ///
    /// # Checks
    /// - `title`, `author`, `email` are set
    /// - `url` is a valid http(s) URL with a host
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.trim().is_empty() {
            diag.error(Self::FIELD_TITLE, "site title is empty");
        }
        if self.author.trim().is_empty() {
            diag.error(Self::FIELD_AUTHOR, "author is required for feed items");
        }
        if !self.email.contains('@') {
            diag.error_with_hint(
                Self::FIELD_EMAIL,
                format!("`{}` is not an email address", self.email),
                "RSS authors are written as `email (Name)`",
            );
        }

        if self.url.is_empty() {
            diag.error_with_hint(
                Self::FIELD_URL,
                "site url is not configured",
                format!("set {}, e.g.: \"https://example.com\"", Self::FIELD_URL),
            );
            return;
        }

        // URL format check using url crate for strict validation
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        Self::FIELD_URL,
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        Self::FIELD_URL,
                        "URL must have a valid host",
                        "use format like https://example.com",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELD_URL,
                    format!("invalid URL: {}", e),
                    "use format like https://example.com",
                );
            }
        }
    }
}
