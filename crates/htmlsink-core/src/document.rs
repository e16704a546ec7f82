//! Document-object output
//!
//! [`DocumentBuilder`] materializes the event stream as an owned element tree,
//! the in-process counterpart of building a DOM document.

use crate::sink::Sink;
use crate::{Result, SinkError};

/// A node inside an output element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Element(Element),
    Text(String),
    Comment(String),
    CData(String),
}

/// An output element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<Content>,
}

impl Element {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Check if any child node was appended
    pub fn has_child_nodes(&self) -> bool {
        !self.children.is_empty()
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|c| match c {
            Content::Element(e) => Some(e),
            _ => None,
        })
    }

    /// Concatenated text and CDATA of this element and its descendants
    pub fn text_content(&self) -> String {
        let mut text = String::new();
        collect_text(self, &mut text);
        text
    }

    fn set_attr(&mut self, name: &str, value: &str) {
        match self.attributes.iter_mut().find(|(key, _)| key == name) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self
                .attributes
                .push((name.to_string(), value.to_string())),
        }
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for child in &element.children {
        match child {
            Content::Element(e) => collect_text(e, out),
            Content::Text(t) | Content::CData(t) => out.push_str(t),
            Content::Comment(_) => {}
        }
    }
}

/// A complete output document with a single root element
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Document {
    root: Option<Element>,
}

impl Document {
    /// The root element, if one was written
    pub fn root(&self) -> Option<&Element> {
        self.root.as_ref()
    }

    pub fn into_root(self) -> Option<Element> {
        self.root
    }
}

/// Sink building a [`Document`]
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
    stack: Vec<Element>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The element currently being built
    pub fn current(&self) -> Option<&Element> {
        self.stack.last()
    }

    /// Finish building.
    ///
    /// Fails if elements are still open.
    pub fn finish(self) -> Result<Document> {
        if let Some(open) = self.stack.last() {
            return Err(SinkError::Rejected(format!(
                "element `{}` was never closed",
                open.name
            )));
        }
        Ok(self.document)
    }

    fn append(&mut self, content: Content) -> Result<()> {
        match self.stack.last_mut() {
            Some(parent) => {
                parent.children.push(content);
                Ok(())
            }
            None => match content {
                // Formatting whitespace around the root has no place to go
                Content::Text(t) if t.trim().is_empty() => Ok(()),
                Content::Element(e) => {
                    if self.document.root.is_some() {
                        return Err(SinkError::Rejected(format!(
                            "document already has a root element, cannot add `{}`",
                            e.name
                        )));
                    }
                    self.document.root = Some(e);
                    Ok(())
                }
                _ => Err(SinkError::Rejected(
                    "content outside of the root element".to_string(),
                )),
            },
        }
    }
}

impl Sink for DocumentBuilder {
    fn open_element(&mut self, name: &str) -> Result<()> {
        if self.stack.is_empty() && self.document.root.is_some() {
            return Err(SinkError::Rejected(format!(
                "document already has a root element, cannot add `{}`",
                name
            )));
        }
        self.stack.push(Element::new(name));
        Ok(())
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        match self.stack.last_mut() {
            Some(element) => {
                element.set_attr(name, value);
                Ok(())
            }
            None => Err(SinkError::Rejected(format!(
                "attribute `{}` without an open element",
                name
            ))),
        }
    }

    fn close_element(&mut self, name: &str) -> Result<()> {
        match self.stack.pop() {
            Some(element) if element.name == name => self.append(Content::Element(element)),
            Some(element) => Err(SinkError::Rejected(format!(
                "closing `{}` while `{}` is open",
                name, element.name
            ))),
            None => Err(SinkError::Rejected(format!(
                "closing `{}` without an open element",
                name
            ))),
        }
    }

    fn text(&mut self, value: &str) -> Result<()> {
        if value.is_empty() {
            return Ok(());
        }
        // Adjacent text runs merge like normalized DOM text nodes
        if let Some(Content::Text(last)) = self.stack.last_mut().and_then(|e| e.children.last_mut()) {
            last.push_str(value);
            return Ok(());
        }
        self.append(Content::Text(value.to_string()))
    }

    fn comment(&mut self, value: &str) -> Result<()> {
        self.append(Content::Comment(value.to_string()))
    }

    fn cdata(&mut self, value: &str) -> Result<()> {
        self.append(Content::CData(value.to_string()))
    }

    fn line_break(&mut self) -> Result<()> {
        self.append(Content::Element(Element::new("br")))
    }
}
