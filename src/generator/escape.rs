//! XML text escaping.

use std::borrow::Cow;

/// Escape the five XML special characters.
///
/// `&` is replaced first so entities produced by later replacements are not
/// escaped twice. Input without special characters is borrowed as-is.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}
