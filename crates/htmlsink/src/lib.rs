//! # htmlsink
//!
//! Serialize cleaned HTML node trees to XML text or document sinks.
//!
//! An upstream tag-soup parser produces a tree of [`TagNode`]s, text runs and
//! comments. This crate walks that tree and emits a linear event stream to a
//! [`Sink`], applying three policies on the way:
//!
//! - **Escaping**: reserved characters become references, already valid
//!   references are never encoded twice, named HTML entities can be
//!   translated to numeric form.
//! - **CDATA**: `script` and `style` content can be wrapped in a single CDATA
//!   section instead of being escaped.
//! - **Whitespace**: the compact layout trims and collapses insignificant
//!   whitespace, treats every encoding of the non-breaking space as blank at
//!   the edges, keeps `pre` content untouched and turns blank lines into
//!   `<br />`.
//!
//! ## Example (Node-based)
//!
//! ```rust
//! use htmlsink::{HtmlSerializer, Node, Options, TagNode};
//!
//! let serializer = HtmlSerializer::with_options(Options::compact());
//!
//! let mut div = TagNode::new("div");
//! div.set_attr("class", "foo");
//! div.add_child(Node::text("2 roots < here >  "));
//!
//! let xml = serializer.serialize_to_string(&div).unwrap();
//! assert_eq!(xml, "<div class=\"foo\">2 roots &lt; here &gt;</div>\n");
//! ```
//!
//! ## Example (HTML string)
//!
//! ```rust
//! use htmlsink::{HtmlSerializer, Options};
//!
//! let serializer = HtmlSerializer::with_options(Options::compact());
//! let xml = serializer.serialize_html("<pre>     some text</pre>").unwrap();
//! assert_eq!(xml, "<pre>     some text</pre>\n");
//! ```

pub mod cdata;
mod entities;
pub mod escape;
#[cfg(feature = "html")]
pub mod html;
pub mod node;
mod serialize;
mod service;
mod utilities;
pub mod whitespace;

pub use cdata::{needs_cdata, RawTextCandidate};
pub use escape::{escape, Context};
#[cfg(feature = "html")]
pub use html::parse_html;
pub use node::{Node, Splice, TagNode};
pub use serialize::serialize;
pub use service::{serialize_to_file, serialize_to_sink, serialize_to_string, HtmlSerializer};
pub use utilities::*;
pub use whitespace::{compact, normalize, Compacted, Edge, Fragment};

pub use htmlsink_core::{
    BooleanAttributeValues, ConfigError, Content, Document, DocumentBuilder, Element, Event,
    Layout, Options, Sink, SinkError, XmlWriter,
};

/// Error type for serialization
#[derive(Debug, thiserror::Error)]
pub enum HtmlSinkError {
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),

    #[error("Malformed node <{tag}>: {reason}")]
    MalformedNode { tag: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Configuration(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, HtmlSinkError>;
