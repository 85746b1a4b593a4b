//! Blog article records.

use super::CatalogError;
use crate::utils::date::DateTimeUtc;
use serde::Deserialize;

/// One blog post.
///
/// `slug` is the identity key: it is the URL path segment under `/blog/`
/// and, through the link, the feed item GUID.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    /// Body in the restricted markup dialect (see `generator::markup`).
    pub content: String,
    /// `YYYY-MM-DD` or `YYYY-MM-DDTHH:MM:SSZ`.
    pub published_at: String,
    #[serde(default)]
    pub read_time: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

impl Article {
    /// Parsed publish date, or an error naming this article.
    pub fn published(&self) -> Result<DateTimeUtc, CatalogError> {
        DateTimeUtc::parse(&self.published_at).ok_or_else(|| CatalogError::InvalidDate {
            slug: self.slug.clone(),
            value: self.published_at.clone(),
        })
    }

    /// Site path of the article page.
    pub fn path(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(published_at: &str) -> Article {
        Article {
            slug: "hello".into(),
            title: "Hello".into(),
            excerpt: String::new(),
            content: String::new(),
            published_at: published_at.into(),
            read_time: "3 min read".into(),
            category: "Notes".into(),
            tags: vec![],
            featured: false,
        }
    }

    #[test]
    fn test_published() {
        assert_eq!(
            article("2024-03-01").published().unwrap(),
            DateTimeUtc::from_ymd(2024, 3, 1)
        );
    }

    #[test]
    fn test_published_error_names_slug() {
        let err = article("March 1st").published().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("hello"));
        assert!(message.contains("March 1st"));
    }

    #[test]
    fn test_path() {
        assert_eq!(article("2024-03-01").path(), "/blog/hello");
    }

    #[test]
    fn test_deserialize_defaults() {
        let toml = r##"
            slug = "x"
            title = "X"
            excerpt = "e"
            content = "# Hi"
            published_at = "2024-01-01"
            category = "C"
        "##;
        let article: Article = toml::from_str(toml).unwrap();
        assert!(article.tags.is_empty());
        assert!(!article.featured);
        assert_eq!(article.read_time, "");
    }
}
