//! Node tree handed over by the upstream parser.
//!
//! The tree is built once and only read by the serializer. Nested child lists
//! produced by upstream list splicing are flattened while the tree is built,
//! so traversal only ever sees a single ordered sequence of nodes.

use indexmap::IndexMap;

/// A node of the tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Element with attributes and children
    Tag(TagNode),
    /// Text run
    Content(String),
    /// Comment, emitted verbatim
    Comment(String),
}

impl Node {
    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Node::Tag(TagNode::new(tag_name))
    }

    /// Create a new element node with attributes
    pub fn element_with_attrs(tag_name: &str, attrs: Vec<(&str, &str)>) -> Self {
        let mut tag = TagNode::new(tag_name);
        for (name, value) in attrs {
            tag.set_attr(name, value);
        }
        Node::Tag(tag)
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Node::Content(content.to_string())
    }

    /// Create a new comment node
    pub fn comment(content: &str) -> Self {
        Node::Comment(content.to_string())
    }

    /// Check if this is an element node
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Tag(_))
    }

    /// Check if this is a text node
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Content(_))
    }

    /// The element, if this is an element node
    pub fn as_tag(&self) -> Option<&TagNode> {
        match self {
            Node::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    /// Get all text content from this node and descendants
    pub fn text_content(&self) -> String {
        match self {
            Node::Tag(tag) => tag.text_content(),
            Node::Content(text) => text.clone(),
            Node::Comment(_) => String::new(),
        }
    }
}

impl From<TagNode> for Node {
    fn from(tag: TagNode) -> Self {
        Node::Tag(tag)
    }
}

/// A child sequence as produced by upstream splicing: single nodes mixed
/// with nested lists of nodes
#[derive(Debug, Clone)]
pub enum Splice {
    Node(Node),
    List(Vec<Splice>),
}

impl From<Node> for Splice {
    fn from(node: Node) -> Self {
        Splice::Node(node)
    }
}

impl From<TagNode> for Splice {
    fn from(tag: TagNode) -> Self {
        Splice::Node(Node::Tag(tag))
    }
}

impl From<Vec<Splice>> for Splice {
    fn from(list: Vec<Splice>) -> Self {
        Splice::List(list)
    }
}

/// An element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagNode {
    name: String,
    attributes: IndexMap<String, String>,
    children: Vec<Node>,
}

impl TagNode {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Element name as given by the parser
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the tag name (lowercase)
    pub fn tag_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Attributes in insertion order
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// Get an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Set an attribute, replacing an existing value with the same name
    pub fn set_attr(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    /// Child nodes in document order
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Get only element children
    pub fn element_children(&self) -> impl Iterator<Item = &TagNode> {
        self.children.iter().filter_map(Node::as_tag)
    }

    /// Add a child node
    pub fn add_child(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Builder form of [`TagNode::add_child`]
    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.add_child(child);
        self
    }

    /// Append a spliced child sequence, flattening nested lists in order
    pub fn splice_children(&mut self, items: Vec<Splice>) {
        for item in items {
            match item {
                Splice::Node(node) => self.children.push(node),
                Splice::List(list) => self.splice_children(list),
            }
        }
    }

    /// Get all text content from this element and descendants
    pub fn text_content(&self) -> String {
        self.children.iter().map(Node::text_content).collect()
    }
}
