//! RSS feed generation configuration.

use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Output path for the feed file, also used for the `atom:link` self reference.
    pub path: PathBuf,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            path: "rss.xml".into(),
        }
    }
}
