//! Feed and sitemap generators.
//!
//! - **Feed**: RSS 2.0 for blog readers (`rss.xml`)
//! - **Sitemap**: search engine indexing (`sitemap.xml`)
//!
//! Assemblers are pure: they take the loaded `SiteConfig`, catalog slices and
//! the generation time, and return the document as a string. The `build_*`
//! functions add the clock, optional minification and the single file write.

pub mod escape;
pub mod feed;
pub mod markup;
pub mod sitemap;

use crate::{
    catalog::Catalog,
    config::SiteConfig,
    debug, log,
    utils::{date::DateTimeUtc, plural_count},
};
use anyhow::{Context, Result};
use std::{borrow::Cow, fs, path::Path};

const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

/// Generate and write the RSS feed.
pub fn build_rss(config: &SiteConfig, catalog: &Catalog) -> Result<()> {
    let now = DateTimeUtc::now();
    debug!("rss"; "generating at {now}");
    let xml = feed::generate_rss_feed(config, &catalog.articles, now)?;
    let path = config.feed_output();
    write_output(&path, &minify_xml(&xml, config.build.minify))?;

    log!(
        "rss";
        "{} ({})",
        display_path(config, &path),
        plural_count(catalog.articles.len(), "item")
    );
    Ok(())
}

/// Generate and write the sitemap.
pub fn build_sitemap(config: &SiteConfig, catalog: &Catalog) -> Result<()> {
    let now = DateTimeUtc::now();
    debug!("sitemap"; "generating at {now}");
    let xml = sitemap::generate_sitemap(config, &catalog.articles, &catalog.projects, now)?;
    let path = config.sitemap_output();
    write_output(&path, &minify_xml(&xml, config.build.minify))?;

    let count = config.build.sitemap.pages.len() + catalog.projects.len() + catalog.articles.len();
    log!("sitemap"; "{} ({})", display_path(config, &path), plural_count(count, "url"));
    Ok(())
}

/// Generate feed and sitemap in parallel.
pub fn build_all(config: &SiteConfig, catalog: &Catalog) -> Result<()> {
    let (rss_result, sitemap_result) =
        rayon::join(|| build_rss(config, catalog), || build_sitemap(config, catalog));

    rss_result?;
    sitemap_result?;
    Ok(())
}

/// Write a document in one call, creating parent directories.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn display_path(config: &SiteConfig, path: &Path) -> String {
    path.strip_prefix(config.get_root())
        .unwrap_or(path)
        .display()
        .to_string()
}

/// Minify XML content if enabled.
///
/// Strips indentation and line breaks between elements. CDATA sections are
/// copied untouched.
pub fn minify_xml(content: &str, enabled: bool) -> Cow<'_, str> {
    if !enabled {
        return Cow::Borrowed(content);
    }

    let mut minified = String::with_capacity(content.len());
    let mut rest = content;

    while let Some(start) = rest.find(CDATA_OPEN) {
        let (markup, tail) = rest.split_at(start);
        push_collapsed(&mut minified, markup);

        let end = tail
            .find(CDATA_CLOSE)
            .map_or(tail.len(), |i| i + CDATA_CLOSE.len());
        minified.push_str(&tail[..end]);
        rest = &tail[end..];
    }
    push_collapsed(&mut minified, rest);

    Cow::Owned(minified)
}

/// Append `markup` with indentation removed. Line breaks between two tags are
/// dropped; any other break collapses to one space so text keeps its words apart.
fn push_collapsed(out: &mut String, markup: &str) {
    for line in markup.lines().map(str::trim).filter(|line| !line.is_empty()) {
        let between_tags = out.is_empty() || (out.ends_with('>') && line.starts_with('<'));
        if !between_tags {
            out.push(' ');
        }
        out.push_str(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Article;
    use crate::config::test_parse_config;
    use tempfile::TempDir;

    #[test]
    fn test_minify_xml_basic() {
        let xml = "<?xml version=\"1.0\"?>\n<root>\n  <item>Hello</item>\n</root>";
        assert_eq!(
            minify_xml(xml, true),
            "<?xml version=\"1.0\"?><root><item>Hello</item></root>"
        );
    }

    #[test]
    fn test_minify_xml_keeps_inner_spaces() {
        assert_eq!(minify_xml("  <tag>  content  </tag>  ", true), "<tag>  content  </tag>");
    }

    #[test]
    fn test_minify_xml_removes_empty_lines() {
        assert_eq!(minify_xml("<root>\n\n  <item/>\n\n</root>", true), "<root><item/></root>");
    }

    #[test]
    fn test_minify_xml_disabled() {
        let xml = "<root>\n  <item/>\n</root>";
        assert!(matches!(minify_xml(xml, false), Cow::Borrowed(s) if s == xml));
    }

    #[test]
    fn test_minify_xml_preserves_cdata() {
        let cdata = "<![CDATA[<pre><code>fn main() {\n    let x = 1;\n\n}\n</code></pre>]]>";
        let xml = format!("<item>\n  <content:encoded>{cdata}</content:encoded>\n  <a/>\n</item>");

        assert_eq!(
            minify_xml(&xml, true),
            format!("<item><content:encoded>{cdata}</content:encoded><a/></item>")
        );
    }

    #[test]
    fn test_minify_xml_keeps_words_of_multiline_text() {
        let xml = "<item>\n  <description>line one\nline two</description>\n</item>";
        assert_eq!(
            minify_xml(xml, true),
            "<item><description>line one line two</description></item>"
        );
    }

    #[test]
    fn test_minify_generated_feed_keeps_multiline_excerpt() {
        let config = test_parse_config("");
        let article = Article {
            slug: "notes".into(),
            title: "Notes".into(),
            excerpt: "line one\nline two".into(),
            content: "body".into(),
            published_at: "2024-01-01".into(),
            read_time: String::new(),
            category: "Notes".into(),
            tags: vec![],
            featured: false,
        };
        let xml = feed::generate_rss_feed(&config, &[article], DateTimeUtc::now()).unwrap();
        let minified = minify_xml(&xml, true);

        let channel = rss::Channel::read_from(minified.as_bytes()).unwrap();
        assert_eq!(channel.items()[0].description(), Some("line one line two"));
    }

    #[test]
    fn test_minify_generated_feed_keeps_content() {
        let config = test_parse_config("");
        let article = Article {
            slug: "code".into(),
            title: "Code".into(),
            excerpt: "x".into(),
            content: "```\n  indented\n\nline\n```".into(),
            published_at: "2024-01-01".into(),
            read_time: String::new(),
            category: "Notes".into(),
            tags: vec![],
            featured: false,
        };
        let xml = feed::generate_rss_feed(&config, &[article], DateTimeUtc::now()).unwrap();
        let minified = minify_xml(&xml, true);

        assert!(!minified.contains("\n  <"));
        let channel = rss::Channel::read_from(minified.as_bytes()).unwrap();
        assert_eq!(
            channel.items()[0].content(),
            Some("<pre><code>  indented\n\nline\n</code></pre>")
        );
    }

    #[test]
    fn test_write_output_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("public/feeds/rss.xml");

        write_output(&path, "<rss/>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<rss/>");
    }

    #[test]
    fn test_build_all_writes_both_documents() {
        let dir = TempDir::new().unwrap();
        let mut config = test_parse_config("[build]\noutput = \"dist\"\nminify = true");
        config.root = dir.path().to_path_buf();

        build_all(&config, &Catalog::default()).unwrap();

        let feed = fs::read_to_string(dir.path().join("dist/rss.xml")).unwrap();
        let sitemap = fs::read_to_string(dir.path().join("dist/sitemap.xml")).unwrap();
        assert!(feed.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?><rss"));
        assert_eq!(sitemap.matches("<url>").count(), 6);
        assert!(!sitemap.contains('\n'));
    }
}
