//! Sitemap generation.
//!
//! Lists every public route for search engine indexing:
//!
//! 1. static pages from `[build.sitemap]`, in configured order
//! 2. one entry per project (`/project/{slug}`)
//! 3. one entry per article (`/blog/{slug}`)
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" ...>
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01</lastmod>
//!     <changefreq>weekly</changefreq>
//!     <priority>1.0</priority>
//!   </url>
//! </urlset>
//! ```

use super::escape::escape_xml;
use crate::{
    catalog::{Article, CatalogError, Project},
    config::{ChangeFreq, SiteConfig},
    utils::date::DateTimeUtc,
};

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Extension namespaces declared on `<urlset>`.
const EXTENSION_NS: &[(&str, &str)] = &[
    ("xhtml", "http://www.w3.org/1999/xhtml"),
    ("mobile", "http://www.google.com/schemas/sitemap-mobile/1.0"),
    ("image", "http://www.google.com/schemas/sitemap-image/1.1"),
    ("video", "http://www.google.com/schemas/sitemap-video/1.1"),
];

const CONTENT_PRIORITY: f32 = 0.8;
const CONTENT_CHANGEFREQ: ChangeFreq = ChangeFreq::Monthly;

/// One `<url>` element. Absent fields are omitted from the output.
#[derive(Debug, Clone, PartialEq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: Option<String>,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<f32>,
}

impl SitemapEntry {
    fn content(loc: String, lastmod: String) -> Self {
        Self {
            loc,
            lastmod: Some(lastmod),
            changefreq: Some(CONTENT_CHANGEFREQ),
            priority: Some(CONTENT_PRIORITY),
        }
    }
}

/// Collect entries in document order.
pub fn sitemap_entries(
    config: &SiteConfig,
    articles: &[Article],
    projects: &[Project],
    now: DateTimeUtc,
) -> Result<Vec<SitemapEntry>, CatalogError> {
    let site = &config.site;
    let today = now.to_ymd();
    let pages = &config.build.sitemap.pages;

    let mut entries = Vec::with_capacity(pages.len() + projects.len() + articles.len());

    entries.extend(pages.iter().map(|page| SitemapEntry {
        loc: site.url_for(&page.path),
        lastmod: Some(today.clone()),
        changefreq: page.changefreq,
        priority: page.priority,
    }));

    entries.extend(
        projects
            .iter()
            .map(|project| SitemapEntry::content(site.url_for(&project.path()), today.clone())),
    );

    for article in articles {
        let lastmod = article.published()?.to_ymd();
        entries.push(SitemapEntry::content(site.url_for(&article.path()), lastmod));
    }

    Ok(entries)
}

/// Render the sitemap document.
pub fn generate_sitemap(
    config: &SiteConfig,
    articles: &[Article],
    projects: &[Project],
    now: DateTimeUtc,
) -> Result<String, CatalogError> {
    let entries = sitemap_entries(config, articles, projects, now)?;
    Ok(into_xml(&entries))
}

fn into_xml(entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(512 + entries.len() * 160);

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push('"');
    for (prefix, ns) in EXTENSION_NS {
        xml.push_str(" xmlns:");
        xml.push_str(prefix);
        xml.push_str("=\"");
        xml.push_str(ns);
        xml.push('"');
    }
    xml.push_str(">\n");

    for entry in entries {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_xml(&entry.loc));
        xml.push_str("</loc>\n");
        if let Some(lastmod) = &entry.lastmod {
            xml.push_str("    <lastmod>");
            xml.push_str(&escape_xml(lastmod));
            xml.push_str("</lastmod>\n");
        }
        if let Some(changefreq) = entry.changefreq {
            xml.push_str("    <changefreq>");
            xml.push_str(changefreq.as_str());
            xml.push_str("</changefreq>\n");
        }
        if let Some(priority) = entry.priority {
            xml.push_str("    <priority>");
            xml.push_str(&format_priority(priority));
            xml.push_str("</priority>\n");
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Shortest decimal form that keeps at least one fractional digit
/// (`1.0`, `0.8`, `0.75`).
fn format_priority(priority: f32) -> String {
    let mut text = priority.to_string();
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}
