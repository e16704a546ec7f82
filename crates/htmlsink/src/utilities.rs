//! Utility functions and constants for HTML element classes.

/// Block-level HTML elements, followed by a line break in the compact layout
pub const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "audio", "blockquote", "body", "canvas", "caption",
    "center", "colgroup", "dd", "dir", "div", "dl", "dt", "fieldset", "figcaption",
    "figure", "footer", "form", "frameset", "h1", "h2", "h3", "h4", "h5", "h6", "head",
    "header", "hgroup", "hr", "html", "isindex", "li", "link", "main", "menu", "meta",
    "nav", "noframes", "noscript", "ol", "option", "output", "p", "pre", "script",
    "section", "style", "table", "tbody", "td", "tfoot", "th", "thead", "title", "tr",
    "ul",
];

/// Elements whose content is not markup
pub const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Elements whose whitespace is significant
pub const VERBATIM_ELEMENTS: &[&str] = &["pre"];

/// HTML attributes that may appear without a value
pub const BOOLEAN_ATTRIBUTES: &[&str] = &[
    "checked", "compact", "declare", "defer", "disabled", "ismap", "multiple", "nohref",
    "noresize", "noshade", "nowrap", "readonly", "selected",
];

fn contains_ignore_case(list: &[&str], tag: &str) -> bool {
    list.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Check if a tag is a block-level element
pub fn is_block(tag: &str) -> bool {
    contains_ignore_case(BLOCK_ELEMENTS, tag)
}

/// Check if a tag holds raw text (`script`, `style`)
pub fn is_raw_text(tag: &str) -> bool {
    contains_ignore_case(RAW_TEXT_ELEMENTS, tag)
}

/// Check if a tag preserves whitespace (`pre`)
pub fn is_verbatim(tag: &str) -> bool {
    contains_ignore_case(VERBATIM_ELEMENTS, tag)
}

/// Check if an attribute is an HTML boolean attribute
pub fn is_boolean_attribute(name: &str) -> bool {
    contains_ignore_case(BOOLEAN_ATTRIBUTES, name)
}
