//! `check` command: validate config and catalog without writing output.

use crate::{
    catalog::Catalog,
    config::SiteConfig,
    log,
    utils::plural_count,
};
use anyhow::{Context, Result};

/// Load and validate the catalog from the configured content directory.
pub fn load_catalog(config: &SiteConfig) -> Result<Catalog> {
    let content_dir = config.content_dir();
    Catalog::load(&content_dir)
        .with_context(|| format!("Failed to load catalog from {}", content_dir.display()))
}

/// Validate everything, then report what would be generated.
pub fn check_site(config: &SiteConfig) -> Result<Catalog> {
    let catalog = load_catalog(config)?;
    log!("check"; "{}", catalog.summary());

    let urls = config.build.sitemap.pages.len() + catalog.projects.len() + catalog.articles.len();
    log!(
        "check";
        "would write {} and {}",
        plural_count(catalog.articles.len(), "feed item"),
        plural_count(urls, "sitemap url")
    );

    Ok(catalog)
}
