//! Serialization events
//!
//! The flat event stream produced by the serializer. Recording events into a
//! `Vec<Event>` is the simplest sink and the one tests assert against.

/// A single sink event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Start of an element
    Open(String),

    /// Attribute of the most recently opened element (value already escaped)
    Attribute { name: String, value: String },

    /// End of an element
    Close(String),

    /// Text run (already escaped)
    Text(String),

    /// Comment, verbatim
    Comment(String),

    /// CDATA section, verbatim
    CData(String),

    /// Void line-break marker
    LineBreak,
}

impl Event {
    /// Shorthand for an attribute event
    pub fn attribute(name: &str, value: &str) -> Self {
        Event::Attribute {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// Check if this event carries text (text or CDATA)
    pub fn is_text(&self) -> bool {
        matches!(self, Event::Text(_) | Event::CData(_))
    }
}
