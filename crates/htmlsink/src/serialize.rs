//! Node tree serialization
//!
//! Walks a [`TagNode`] tree in document order and drives a [`Sink`]. Text is
//! routed through the whitespace normalizer (compact layout only) and the
//! escape policy; `script` and `style` content may be wrapped in CDATA.

use std::mem;

use htmlsink_core::{Layout, Options, Sink};

use crate::cdata::{check_raw_text, needs_cdata, RawTextCandidate};
use crate::escape::{escape, Context};
use crate::node::{Node, TagNode};
use crate::utilities::{is_block, is_boolean_attribute, is_raw_text, is_verbatim};
use crate::whitespace::{compact, Edge, Fragment};
use crate::Result;

/// Serialize `root` and its descendants to `sink`
pub fn serialize<S: Sink + ?Sized>(root: &TagNode, sink: &mut S, options: &Options) -> Result<()> {
    tracing::debug!(root = root.name(), layout = ?options.layout, "serializing tree");

    sink.start_document()?;
    let mut serializer = Serializer {
        options,
        out: Emitter::new(sink, options.layout == Layout::Compact),
    };

    if options.omit_html_envelope && root.tag_name() == "html" {
        match root.element_children().find(|c| c.tag_name() == "body") {
            Some(body) => serializer.children(body, false, false)?,
            None => serializer.children(root, false, true)?,
        }
    } else {
        serializer.element(root, false)?;
    }

    serializer.out.finish()
}

/// The output element whose children are being written
struct OpenElement<'t> {
    name: &'t str,
    emitted: usize,
}

impl RawTextCandidate for OpenElement<'_> {
    fn element_name(&self) -> &str {
        self.name
    }

    fn has_child_nodes(&self) -> bool {
        self.emitted > 0
    }
}

struct Serializer<'a, 's, S: ?Sized> {
    options: &'a Options,
    out: Emitter<'s, S>,
}

impl<S: Sink + ?Sized> Serializer<'_, '_, S> {
    fn element(&mut self, tag: &TagNode, verbatim: bool) -> Result<()> {
        tracing::trace!(tag = tag.name(), children = tag.children().len(), "element");
        check_raw_text(tag, self.options)?;

        let block = is_block(tag.name());
        if !block && !verbatim {
            // Leading blanks of inline content belong before the start tag
            self.out.edge(leading_edge(tag));
        }
        self.out.open(tag.name(), block)?;
        for (name, value) in tag.attributes() {
            let value = if value.is_empty() && is_boolean_attribute(name) {
                self.options.boolean_attribute_values.value_for(name)
            } else {
                value.as_str()
            };
            self.out.attribute(name, &escape(value, Context::Attribute, self.options))?;
        }

        let verbatim = verbatim || is_verbatim(tag.name()) || is_raw_text(tag.name());
        self.children(tag, verbatim, false)?;
        self.out.close(tag.name(), block)
    }

    fn children(&mut self, parent: &TagNode, verbatim: bool, skip_head: bool) -> Result<()> {
        let children = parent.children();
        let mut frame = OpenElement {
            name: parent.name(),
            emitted: 0,
        };

        let mut i = 0;
        while i < children.len() {
            let child = &children[i];

            if child.is_text() && needs_cdata(&frame, self.options) {
                let run: Vec<&str> = children[i..]
                    .iter()
                    .map_while(|n| match n {
                        Node::Content(text) => Some(text.as_str()),
                        _ => None,
                    })
                    .collect();
                let buffer = run.concat();
                if !buffer.is_empty() {
                    self.out.cdata(&buffer)?;
                }
                frame.emitted += run.len();
                i += run.len();
                continue;
            }

            match child {
                Node::Tag(tag) if skip_head && tag.tag_name() == "head" => {}
                Node::Tag(tag) => self.element(tag, verbatim)?,
                Node::Content(text) => self.content(text, verbatim)?,
                Node::Comment(text) => self.out.comment(text)?,
            }
            frame.emitted += 1;
            i += 1;
        }

        Ok(())
    }

    fn content(&mut self, text: &str, verbatim: bool) -> Result<()> {
        if !self.out.compact || verbatim {
            return self.out.text(&escape(text, Context::Text, self.options));
        }

        let compacted = compact(text);
        self.out.edge(compacted.leading);
        for fragment in &compacted.fragments {
            match fragment {
                Fragment::Text(t) => self.out.text(&escape(t, Context::Text, self.options))?,
                Fragment::Break => self.out.break_marker()?,
            }
        }
        self.out.edge(compacted.trailing);
        Ok(())
    }
}

/// Leading blank run of an inline element's content
fn leading_edge(tag: &TagNode) -> Edge {
    match tag.children().first() {
        Some(Node::Content(text)) => compact(text).leading,
        Some(Node::Tag(child)) if !is_block(child.name()) && !is_verbatim(child.name()) => {
            leading_edge(child)
        }
        _ => Edge::None,
    }
}

/// Event writer resolving whitespace edges lazily.
///
/// Text is buffered so that a pending edge can still become a space at the
/// end of the previous run. Inline closes seen while an edge is pending are
/// deferred, which keeps that space inside the inline element.
struct Emitter<'s, S: ?Sized> {
    sink: &'s mut S,
    compact: bool,
    text: String,
    pending: Edge,
    deferred: Vec<String>,
    /// Output ends at a line start or in a space
    blank: bool,
}

impl<'s, S: Sink + ?Sized> Emitter<'s, S> {
    fn new(sink: &'s mut S, compact: bool) -> Self {
        Self {
            sink,
            compact,
            text: String::new(),
            pending: Edge::None,
            deferred: Vec::new(),
            blank: true,
        }
    }

    fn edge(&mut self, edge: Edge) {
        if self.compact && !self.blank {
            self.pending = self.pending.max(edge);
        }
    }

    /// Resolve the pending edge, writing it if `keep`
    fn settle(&mut self, keep: bool) -> Result<()> {
        let pending = mem::take(&mut self.pending);
        if keep && pending != Edge::None {
            self.text.push(' ');
            self.blank = true;
            if pending == Edge::Break {
                self.flush()?;
                self.sink.line_break()?;
            }
        }
        if !self.deferred.is_empty() {
            self.flush()?;
            for name in mem::take(&mut self.deferred) {
                self.sink.close_element(&name)?;
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if !self.text.is_empty() {
            self.sink.text(&self.text)?;
            self.text.clear();
        }
        Ok(())
    }

    fn text(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.settle(true)?;
        self.text.push_str(text);
        self.blank = false;
        Ok(())
    }

    fn break_marker(&mut self) -> Result<()> {
        self.pending = Edge::Break;
        self.settle(true)
    }

    fn open(&mut self, name: &str, block: bool) -> Result<()> {
        self.settle(!block)?;
        self.flush()?;
        self.sink.open_element(name)?;
        if block {
            self.blank = true;
        }
        Ok(())
    }

    fn attribute(&mut self, name: &str, value: &str) -> Result<()> {
        self.sink.set_attribute(name, value)?;
        Ok(())
    }

    fn close(&mut self, name: &str, block: bool) -> Result<()> {
        if !block && self.pending != Edge::None {
            self.deferred.push(name.to_string());
            return Ok(());
        }
        self.settle(false)?;
        self.flush()?;
        self.sink.close_element(name)?;
        if block {
            if self.compact {
                self.sink.newline()?;
            }
            self.blank = true;
        }
        Ok(())
    }

    fn comment(&mut self, text: &str) -> Result<()> {
        self.settle(true)?;
        self.flush()?;
        self.sink.comment(text)?;
        Ok(())
    }

    fn cdata(&mut self, text: &str) -> Result<()> {
        self.settle(true)?;
        self.flush()?;
        self.sink.cdata(text)?;
        self.blank = false;
        Ok(())
    }

    fn finish(mut self) -> Result<()> {
        self.settle(false)?;
        self.flush()?;
        self.sink.end_document()?;
        Ok(())
    }
}
