//! Config and catalog field paths used in diagnostics.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// Dotted path to the field a diagnostic refers to.
///
/// Static for config fields (`site.url`), owned for catalog records
/// (`articles[hello-world].published_at`).
///
/// # Example
///
/// ```ignore
/// diag.error(SiteInfoConfig::FIELD_URL, "required");
/// diag.error(FieldPath::record("articles", slug, "published_at"), "invalid date");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path to a field of one record in a keyed collection.
    pub fn record(collection: &str, key: &str, field: &str) -> Self {
        Self(Cow::Owned(format!("{collection}[{key}].{field}")))
    }

    /// Path to a field of the n-th element of an array.
    pub fn index(collection: &str, index: usize, field: &str) -> Self {
        Self(Cow::Owned(format!("{collection}[{index}].{field}")))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}
