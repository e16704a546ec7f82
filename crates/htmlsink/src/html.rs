//! HTML parsing support.
//!
//! This module adapts `scraper` parse trees to the [`TagNode`] structure the
//! serializer walks. `scraper` does the tag-soup recovery; this crate only
//! serializes the balanced result.

use scraper::{ElementRef, Html, Node as ScraperNode};

use crate::node::{Node, TagNode};

/// Parse an HTML fragment into a TagNode tree.
///
/// The returned root is the `html` element wrapping the fragment.
///
/// # Example
///
/// ```rust
/// use htmlsink::{parse_html, HtmlSerializer, Options};
///
/// let root = parse_html("<p>Hello <em>World</em></p>");
/// assert_eq!(root.tag_name(), "html");
///
/// let serializer = HtmlSerializer::with_options(Options::compact());
/// let xml = serializer.serialize_to_string(&root).unwrap();
/// assert_eq!(xml, "<p>Hello <em>World</em></p>\n");
/// ```
pub fn parse_html(html: &str) -> TagNode {
    let document = Html::parse_fragment(html);
    scraper_to_node(document.root_element())
}

/// Convert a scraper ElementRef to our TagNode structure
fn scraper_to_node(element: ElementRef) -> TagNode {
    let mut node = TagNode::new(element.value().name());
    for (name, value) in element.value().attrs() {
        node.set_attr(name, value);
    }

    for child in element.children() {
        match child.value() {
            ScraperNode::Text(text) => node.add_child(Node::text(&text.text)),
            ScraperNode::Comment(comment) => node.add_child(Node::comment(&comment.comment)),
            ScraperNode::Element(_) => {
                if let Some(child_element) = ElementRef::wrap(child) {
                    node.add_child(scraper_to_node(child_element));
                }
            }
            _ => {}
        }
    }

    node
}
