//! Markdown to sanitized HTML.
//!
//! Rendering runs in two stages: `pulldown-cmark` turns markdown into HTML,
//! then `ammonia` reduces that HTML to the allow-list in [`policy`]. Raw HTML
//! written in the markdown source never reaches the output as markup; it is
//! escaped as text before sanitization.

pub mod policy;

use std::sync::Arc;

use ammonia::Builder;
use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html};

/// Renders markdown into HTML that is safe to embed without further escaping.
///
/// The sanitizer policy is built once and shared; each call creates its own
/// parser, so one renderer can serve concurrent requests.
#[derive(Clone)]
pub struct MarkdownRenderer {
    sanitizer: Arc<Builder<'static>>,
    options: Options,
}

impl std::fmt::Debug for MarkdownRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarkdownRenderer")
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    /// Create a renderer with tables and strikethrough enabled.
    pub fn new() -> Self {
        Self {
            sanitizer: Arc::new(policy::sanitizer()),
            options: Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH,
        }
    }

    /// Render `markdown` to sanitized HTML.
    pub fn render(&self, markdown: &str) -> String {
        let events = Parser::new_ext(markdown, self.options).map(|event| match event {
            Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
            Event::SoftBreak => Event::HardBreak,
            Event::Start(Tag::CodeBlock(kind)) => Event::Html(open_code_block(&kind)),
            Event::End(TagEnd::CodeBlock) => Event::Html(CowStr::Borrowed("</code></pre></div>\n")),
            other => other,
        });

        let mut unsafe_html = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut unsafe_html, events);

        self.sanitizer.clean(&unsafe_html).to_string()
    }
}

/// Opening markup for a code block, wrapped for client-side highlighting.
fn open_code_block(kind: &CodeBlockKind<'_>) -> CowStr<'static> {
    let language = match kind {
        CodeBlockKind::Fenced(info) => info
            .split_whitespace()
            .next()
            .map(language_class)
            .unwrap_or_default(),
        CodeBlockKind::Indented => String::new(),
    };

    if language.is_empty() {
        CowStr::Borrowed("<div class=\"highlight\"><pre><code>")
    } else {
        CowStr::from(format!(
            "<div class=\"highlight\"><pre><code class=\"language-{language}\">"
        ))
    }
}

/// Keep only characters that are safe inside a class attribute.
fn language_class(info: &str) -> String {
    info.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+'))
        .collect()
}
