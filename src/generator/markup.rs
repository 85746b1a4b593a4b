//! Article body rendering.
//!
//! Bodies use a deliberately small line-oriented dialect:
//!
//! | Line               | Output                 |
//! |--------------------|------------------------|
//! | blank              | `<br/>`                |
//! | `# Title`          | `<h1>Title</h1>`       |
//! | `## Title`         | `<h2>Title</h2>`       |
//! | `### Title`        | `<h3>Title</h3>`       |
//! | `- item`           | `<li>item</li>`        |
//! | `` ``` ``          | opens/closes a code block |
//! | anything else      | `<p>line</p>`          |
//!
//! List items are emitted bare, without a `<ul>` wrapper, and no inline
//! formatting is interpreted. All text is XML-escaped.

use super::escape::escape_xml;

const FENCE: &str = "```";

/// Line prefix to element mapping. Checked in order, first match wins.
const BLOCK_RULES: &[(&str, &str)] = &[("### ", "h3"), ("## ", "h2"), ("# ", "h1"), ("- ", "li")];

/// Fallback element for lines matching no rule.
const PARAGRAPH: &str = "p";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Text,
    InCodeBlock,
}

/// Render an article body to an HTML fragment.
pub fn render_body(content: &str) -> String {
    let mut html = String::with_capacity(content.len() + content.len() / 2);
    let mut state = State::Text;

    // a trailing newline yields a final empty line, rendered as `<br/>`
    for line in content.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        let trimmed = line.trim();
        let is_fence = trimmed.starts_with(FENCE);

        state = match (state, is_fence) {
            (State::Text, true) => {
                html.push_str("<pre><code>");
                State::InCodeBlock
            }
            (State::InCodeBlock, true) => {
                html.push_str("</code></pre>");
                State::Text
            }
            (State::InCodeBlock, false) => {
                html.push_str(&escape_xml(line));
                html.push('\n');
                State::InCodeBlock
            }
            (State::Text, false) => {
                if trimmed.is_empty() {
                    html.push_str("<br/>");
                } else {
                    push_block(&mut html, trimmed);
                }
                State::Text
            }
        };
    }

    if state == State::InCodeBlock {
        html.push_str("</code></pre>");
    }

    html
}

/// Classify a non-blank trimmed line into `(tag, text)`.
fn classify(line: &str) -> (&'static str, &str) {
    BLOCK_RULES
        .iter()
        .find_map(|&(prefix, tag)| line.strip_prefix(prefix).map(|rest| (tag, rest)))
        .unwrap_or((PARAGRAPH, line))
}

fn push_block(html: &mut String, line: &str) {
    let (tag, text) = classify(line);
    html.push('<');
    html.push_str(tag);
    html.push('>');
    html.push_str(&escape_xml(text));
    html.push_str("</");
    html.push_str(tag);
    html.push('>');
}
