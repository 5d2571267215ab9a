//! HTML allow-list applied to rendered markdown.

use std::collections::HashSet;

use ammonia::{Builder, UrlRelative};

/// Tags that survive sanitization. Everything else is unwrapped to its text.
pub const ALLOWED_TAGS: &[&str] = &[
    "a",
    "abbr",
    "b",
    "blockquote",
    "br",
    "code",
    "del",
    "div",
    "em",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hr",
    "i",
    "img",
    "li",
    "ol",
    "p",
    "pre",
    "span",
    "strong",
    "table",
    "tbody",
    "td",
    "th",
    "thead",
    "tr",
    "ul",
];

/// URL schemes kept in `href` and `src`. Relative URLs pass through.
pub const ALLOWED_SCHEMES: &[&str] = &["http", "https"];

/// Build the sanitizer used for every render.
pub fn sanitizer() -> Builder<'static> {
    let mut builder = Builder::empty();
    builder
        .add_tags(ALLOWED_TAGS)
        .add_tag_attributes("a", &["href", "title"])
        .add_tag_attributes("img", &["src", "alt", "title"])
        .add_generic_attributes(&["class"])
        .url_schemes(ALLOWED_SCHEMES.iter().copied().collect::<HashSet<_>>())
        .url_relative(UrlRelative::PassThrough)
        .clean_content_tags(HashSet::from(["script", "style"]))
        .strip_comments(true)
        .link_rel(None);
    builder
}
