//! The sink capability

use crate::event::Event;
use crate::Result;

/// Receiver of serialization events.
///
/// The serializer emits events in document order. Text, attribute values and
/// break markers arrive fully escaped; comments and CDATA arrive verbatim. Any
/// error returned by a sink aborts the serialization pass.
pub trait Sink {
    /// Called once before the first event
    fn start_document(&mut self) -> Result<()> {
        Ok(())
    }

    /// Start an element
    fn open_element(&mut self, name: &str) -> Result<()>;

    /// Set an attribute on the element opened last
    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()>;

    /// End an element
    fn close_element(&mut self, name: &str) -> Result<()>;

    /// Append escaped text
    fn text(&mut self, value: &str) -> Result<()>;

    /// Append a comment
    fn comment(&mut self, value: &str) -> Result<()>;

    /// Append a CDATA section
    fn cdata(&mut self, value: &str) -> Result<()>;

    /// Append a void line-break marker
    fn line_break(&mut self) -> Result<()>;

    /// Formatting line break after a block element
    fn newline(&mut self) -> Result<()> {
        self.text("\n")
    }

    /// Called once after the last event
    fn end_document(&mut self) -> Result<()> {
        Ok(())
    }
}

impl Sink for Vec<Event> {
    fn open_element(&mut self, name: &str) -> Result<()> {
        self.push(Event::Open(name.to_string()));
        Ok(())
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        self.push(Event::attribute(name, value));
        Ok(())
    }

    fn close_element(&mut self, name: &str) -> Result<()> {
        self.push(Event::Close(name.to_string()));
        Ok(())
    }

    fn text(&mut self, value: &str) -> Result<()> {
        self.push(Event::Text(value.to_string()));
        Ok(())
    }

    fn comment(&mut self, value: &str) -> Result<()> {
        self.push(Event::Comment(value.to_string()));
        Ok(())
    }

    fn cdata(&mut self, value: &str) -> Result<()> {
        self.push(Event::CData(value.to_string()));
        Ok(())
    }

    fn line_break(&mut self) -> Result<()> {
        self.push(Event::LineBreak);
        Ok(())
    }
}
