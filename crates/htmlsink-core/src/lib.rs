//! htmlsink-core - sink events, options and writers
//!
//! This crate provides the output side of HTML tree serialization: the
//! [`Sink`] capability that receives serialization events, the [`Options`]
//! shared by every serialization policy, and the concrete sinks shipped with
//! the library. It is used by `htmlsink`, which walks node trees and drives a
//! sink.
//!
//! # Architecture
//!
//! ```text
//!                            ┌──────────────┐ ──▶ XmlWriter ──▶ UTF-8 bytes
//! Node Tree ──serializer───▶ │  Sink events │ ──▶ DocumentBuilder ──▶ Document
//!                            └──────────────┘ ──▶ Vec<Event>
//! ```
//!
//! # Example
//!
//! ```rust
//! use htmlsink_core::{Options, Sink, XmlWriter};
//!
//! let options = Options {
//!     omit_xml_declaration: true,
//!     ..Default::default()
//! };
//!
//! let mut writer = XmlWriter::new(Vec::new(), &options);
//! writer.start_document().unwrap();
//! writer.open_element("p").unwrap();
//! writer.text("Hello").unwrap();
//! writer.close_element("p").unwrap();
//! writer.end_document().unwrap();
//!
//! assert_eq!(writer.into_string(), "<p>Hello</p>");
//! ```

mod document;
mod event;
mod options;
mod sink;
mod writer;

pub use document::{Content, Document, DocumentBuilder, Element};
pub use event::Event;
pub use options::{BooleanAttributeValues, Layout, Options};
pub use sink::Sink;
pub use writer::{is_void, XmlWriter};

/// Error raised by a sink that cannot accept an event
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Event rejected: {0}")]
    Rejected(String),
}

/// Error raised for option values that cannot be interpreted
#[derive(Debug, thiserror::Error)]
#[error("Invalid configuration: {0}")]
pub struct ConfigError(pub String);

pub type Result<T> = std::result::Result<T, SinkError>;
