//! RSS 2.0 feed generation.
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <rss version="2.0" xmlns:content="..." xmlns:atom="...">
//!   <channel>
//!     <title>...</title>
//!     <atom:link href="https://example.com/rss.xml" rel="self" type="application/rss+xml"/>
//!     <item>
//!       <guid isPermaLink="true">https://example.com/blog/slug</guid>
//!       <content:encoded><![CDATA[<h1>...</h1>]]></content:encoded>
//!     </item>
//!   </channel>
//! </rss>
//! ```

use super::{escape::escape_xml, markup::render_body};
use crate::{
    catalog::{Article, CatalogError},
    config::SiteConfig,
    utils::date::DateTimeUtc,
};
use regex::Regex;
use rss::validation::Validate;
use std::sync::LazyLock;
use thiserror::Error;

const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";
const ATOM_NS: &str = "http://www.w3.org/2005/Atom";

#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("RSS validation failed: {0}")]
    Validation(String),
}

/// Render the feed document for `articles`, newest first.
///
/// `now` is used as `lastBuildDate` when there are no articles.
pub fn generate_rss_feed(
    config: &SiteConfig,
    articles: &[Article],
    now: DateTimeUtc,
) -> Result<String, FeedError> {
    let mut dated = articles
        .iter()
        .map(|article| Ok((article.published()?, article)))
        .collect::<Result<Vec<_>, CatalogError>>()?;

    // stable: same-day articles keep catalog order
    dated.sort_by(|(a, _), (b, _)| b.cmp(a));

    let last_build = dated.first().map_or(now, |&(date, _)| date);
    let author = normalize_rss_author(config);

    let mut xml = String::with_capacity(4096 + articles.len() * 1024);
    push_channel_head(&mut xml, config, last_build);
    for (date, article) in dated {
        push_item(&mut xml, config, article, date, &author);
    }
    xml.push_str("  </channel>\n</rss>\n");

    validate_rss(&xml)?;
    Ok(xml)
}

fn push_channel_head(xml: &mut String, config: &SiteConfig, last_build: DateTimeUtc) {
    let site = &config.site;

    xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    xml.push_str("<rss version=\"2.0\" xmlns:content=\"");
    xml.push_str(CONTENT_NS);
    xml.push_str("\" xmlns:atom=\"");
    xml.push_str(ATOM_NS);
    xml.push_str("\">\n  <channel>\n");

    push_element(xml, 4, "title", &site.title);
    push_element(xml, 4, "link", &site.url);
    push_element(xml, 4, "description", &site.description);
    push_element(xml, 4, "language", &site.language);
    push_element(xml, 4, "lastBuildDate", &last_build.to_rfc2822());

    xml.push_str("    <atom:link href=\"");
    xml.push_str(&escape_xml(&config.feed_url()));
    xml.push_str("\" rel=\"self\" type=\"application/rss+xml\"/>\n");

    xml.push_str("    <image>\n");
    push_element(xml, 6, "url", &site.url_for(&site.image));
    push_element(xml, 6, "title", &site.title);
    push_element(xml, 6, "link", &site.url);
    xml.push_str("    </image>\n");
}

fn push_item(
    xml: &mut String,
    config: &SiteConfig,
    article: &Article,
    date: DateTimeUtc,
    author: &str,
) {
    let link = config.site.url_for(&article.path());

    xml.push_str("    <item>\n");
    push_element(xml, 6, "title", &article.title);
    push_element(xml, 6, "link", &link);
    xml.push_str("      <guid isPermaLink=\"true\">");
    xml.push_str(&escape_xml(&link));
    xml.push_str("</guid>\n");
    push_element(xml, 6, "description", &article.excerpt);

    // rendered text is already escaped, so `]]>` cannot occur
    xml.push_str("      <content:encoded><![CDATA[");
    xml.push_str(&render_body(&article.content));
    xml.push_str("]]></content:encoded>\n");

    push_element(xml, 6, "pubDate", &date.to_rfc2822());
    push_element(xml, 6, "author", author);
    push_element(xml, 6, "category", &article.category);
    for tag in &article.tags {
        push_element(xml, 6, "category", tag);
    }
    xml.push_str("    </item>\n");
}

fn push_element(xml: &mut String, indent: usize, name: &str, text: &str) {
    xml.extend(std::iter::repeat_n(' ', indent));
    xml.push('<');
    xml.push_str(name);
    xml.push('>');
    xml.push_str(&escape_xml(text));
    xml.push_str("</");
    xml.push_str(name);
    xml.push_str(">\n");
}

/// Normalize the site author to RSS format: "email (Name)"
fn normalize_rss_author(config: &SiteConfig) -> String {
    static RE_VALID_AUTHOR: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}[ \t]*\([^)]+\)$").unwrap()
    });

    let site = &config.site;
    if RE_VALID_AUTHOR.is_match(&site.author) {
        return site.author.clone();
    }
    format!("{} ({})", site.email, site.author)
}

/// Parse the document back and run the `rss` crate's checks
/// (RFC 2822 dates, absolute links, image URL).
fn validate_rss(xml: &str) -> Result<(), FeedError> {
    let channel = rss::Channel::read_from(xml.as_bytes())
        .map_err(|e| FeedError::Validation(e.to_string()))?;
    channel
        .validate()
        .map_err(|e| FeedError::Validation(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    const NOW: DateTimeUtc = DateTimeUtc::new(2025, 6, 30, 12, 0, 0);

    fn article(slug: &str, published_at: &str) -> Article {
        Article {
            slug: slug.into(),
            title: format!("Post {slug}"),
            excerpt: format!("About {slug}"),
            content: "Body".into(),
            published_at: published_at.into(),
            read_time: "2 min read".into(),
            category: "Notes".into(),
            tags: vec![],
            featured: false,
        }
    }

    fn parse(xml: &str) -> rss::Channel {
        rss::Channel::read_from(xml.as_bytes()).unwrap()
    }

    #[test]
    fn test_scenario_single_article() {
        let config = test_parse_config("");
        let post = Article {
            title: "Hello & Welcome".into(),
            content: "# Hi".into(),
            category: "C".into(),
            tags: vec!["t1".into(), "t2".into()],
            ..article("hello", "2024-01-01")
        };

        let xml = generate_rss_feed(&config, &[post], NOW).unwrap();

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(xml.contains("<title>Hello &amp; Welcome</title>"));
        assert!(xml.contains("<content:encoded><![CDATA[<h1>Hi</h1>]]></content:encoded>"));
        assert!(xml.contains("<pubDate>Mon, 01 Jan 2024 00:00:00 GMT</pubDate>"));
        assert!(xml.contains("<lastBuildDate>Mon, 01 Jan 2024 00:00:00 GMT</lastBuildDate>"));
        assert!(xml.contains("<author>test@example.com (Test Author)</author>"));

        let channel = parse(&xml);
        let item = &channel.items()[0];
        assert_eq!(item.title(), Some("Hello & Welcome"));
        assert_eq!(item.content(), Some("<h1>Hi</h1>"));
        let categories: Vec<_> = item.categories().iter().map(|c| c.name()).collect();
        assert_eq!(categories, ["C", "t1", "t2"]);
    }

    #[test]
    fn test_scenario_no_articles() {
        let config = test_parse_config("");
        let xml = generate_rss_feed(&config, &[], NOW).unwrap();

        assert!(!xml.contains("<item>"));
        assert!(xml.contains("<lastBuildDate>Mon, 30 Jun 2025 12:00:00 GMT</lastBuildDate>"));

        let channel = parse(&xml);
        assert!(channel.items().is_empty());
        assert_eq!(channel.title(), "Test");
        assert_eq!(channel.link(), "https://example.com");
    }

    #[test]
    fn test_items_newest_first() {
        let config = test_parse_config("");
        let articles = [
            article("old", "2023-05-01"),
            article("new", "2024-02-01"),
            article("same-day-a", "2024-01-10"),
            article("same-day-b", "2024-01-10"),
        ];

        let xml = generate_rss_feed(&config, &articles, NOW).unwrap();
        let channel = parse(&xml);
        let links: Vec<_> = channel.items().iter().filter_map(|i| i.link()).collect();
        assert_eq!(
            links,
            [
                "https://example.com/blog/new",
                "https://example.com/blog/same-day-a",
                "https://example.com/blog/same-day-b",
                "https://example.com/blog/old",
            ]
        );
        assert_eq!(
            channel.last_build_date(),
            Some("Thu, 01 Feb 2024 00:00:00 GMT")
        );
    }

    #[test]
    fn test_one_unique_guid_per_article() {
        let config = test_parse_config("");
        let articles = [
            article("a", "2024-01-01"),
            article("b", "2024-01-02"),
            article("c", "2024-01-03"),
        ];

        let channel = parse(&generate_rss_feed(&config, &articles, NOW).unwrap());
        let mut guids: Vec<_> = channel
            .items()
            .iter()
            .map(|i| {
                let guid = i.guid().unwrap();
                assert!(guid.is_permalink());
                guid.value().to_string()
            })
            .collect();
        assert_eq!(guids.len(), 3);
        guids.sort();
        guids.dedup();
        assert_eq!(
            guids,
            [
                "https://example.com/blog/a",
                "https://example.com/blog/b",
                "https://example.com/blog/c",
            ]
        );
    }

    #[test]
    fn test_malformed_date_names_slug() {
        let config = test_parse_config("");
        let articles = [article("ok", "2024-01-01"), article("broken", "2024/01/02")];

        let err = generate_rss_feed(&config, &articles, NOW).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("broken"));
        assert!(message.contains("2024/01/02"));
    }

    #[test]
    fn test_channel_envelope() {
        let config = test_parse_config("[build.feed]\npath = \"feed/rss.xml\"");
        let xml = generate_rss_feed(&config, &[], NOW).unwrap();

        assert!(xml.contains(&format!("xmlns:content=\"{CONTENT_NS}\"")));
        assert!(xml.contains(&format!("xmlns:atom=\"{ATOM_NS}\"")));
        assert!(xml.contains(
            "<atom:link href=\"https://example.com/feed/rss.xml\" \
             rel=\"self\" type=\"application/rss+xml\"/>"
        ));
        assert!(xml.contains("<language>en-us</language>"));

        let channel = parse(&xml);
        let image = channel.image().unwrap();
        assert_eq!(image.url(), "https://example.com/og-image.png");
        assert_eq!(image.link(), "https://example.com");
    }

    #[test]
    fn test_timestamped_article() {
        let config = test_parse_config("");
        let post = article("late", "2024-03-15T18:30:05Z");
        let xml = generate_rss_feed(&config, &[post], NOW).unwrap();
        assert!(xml.contains("<pubDate>Fri, 15 Mar 2024 18:30:05 GMT</pubDate>"));
    }

    #[test]
    fn test_normalize_author_combined() {
        let config = test_parse_config("");
        assert_eq!(
            normalize_rss_author(&config),
            "test@example.com (Test Author)"
        );
    }

    #[test]
    fn test_normalize_author_already_valid() {
        let mut config = test_parse_config("");
        config.site.author = "jane@example.com (Jane Doe)".into();
        assert_eq!(normalize_rss_author(&config), "jane@example.com (Jane Doe)");
    }

    #[test]
    fn test_validation_rejects_relative_link() {
        let mut config = test_parse_config("");
        config.site.url = "not-a-url".into();
        let err = generate_rss_feed(&config, &[article("a", "2024-01-01")], NOW).unwrap_err();
        assert!(matches!(err, FeedError::Validation(_)));
    }
}
