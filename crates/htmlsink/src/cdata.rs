//! CDATA encapsulation of raw-text element content.

use htmlsink_core::{Element, Options};

use crate::node::{Node, TagNode};
use crate::utilities::is_raw_text;
use crate::{HtmlSinkError, Result};

/// An element the CDATA decision can be made for
pub trait RawTextCandidate {
    fn element_name(&self) -> &str;

    /// Whether the element currently has any child node
    fn has_child_nodes(&self) -> bool;
}

impl RawTextCandidate for TagNode {
    fn element_name(&self) -> &str {
        self.name()
    }

    fn has_child_nodes(&self) -> bool {
        !self.children().is_empty()
    }
}

impl RawTextCandidate for Element {
    fn element_name(&self) -> &str {
        &self.name
    }

    fn has_child_nodes(&self) -> bool {
        Element::has_child_nodes(self)
    }
}

/// Check if content added to `element` must go into a CDATA section.
///
/// Only a childless `script` or `style` qualifies, so that
/// `<script src="..."></script>` never receives an empty section and a
/// section is never appended after other content.
pub fn needs_cdata<E: RawTextCandidate + ?Sized>(element: &E, options: &Options) -> bool {
    options.use_cdata_for_script_and_style
        && is_raw_text(element.element_name())
        && !element.has_child_nodes()
}

/// Reject raw-text elements that carry markup while CDATA wrapping is on.
pub(crate) fn check_raw_text(tag: &TagNode, options: &Options) -> Result<()> {
    if !options.use_cdata_for_script_and_style || !is_raw_text(tag.name()) {
        return Ok(());
    }
    match tag.children().iter().find_map(Node::as_tag) {
        Some(child) => {
            tracing::warn!(tag = tag.name(), child = child.name(), "markup inside raw-text element");
            Err(HtmlSinkError::MalformedNode {
                tag: tag.name().to_string(),
                reason: format!("raw-text content contains element <{}>", child.name()),
            })
        }
        None => Ok(()),
    }
}
