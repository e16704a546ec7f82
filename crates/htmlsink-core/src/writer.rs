//! XML text output
//!
//! Writes sink events as UTF-8 markup to any [`std::io::Write`].

use std::io::Write;

use crate::options::Options;
use crate::sink::Sink;
use crate::{Result, SinkError};

const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// Void (self-closing) HTML elements
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "basefont", "br", "col", "command", "embed", "frame", "hr", "img",
    "input", "isindex", "keygen", "link", "meta", "param", "source", "track", "wbr",
];

/// Check if a tag is a void element
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

/// Sink writing markup text.
///
/// The `>` of a start tag is held back until the next event so that elements
/// without content can be written as `<tag />`.
pub struct XmlWriter<W> {
    out: W,
    declaration: bool,
    use_empty_element_tags: bool,
    open_start_tag: Option<String>,
}

impl<W: Write> XmlWriter<W> {
    /// Create a writer configured from `options`
    pub fn new(out: W, options: &Options) -> Self {
        Self {
            out,
            declaration: !options.omit_xml_declaration,
            use_empty_element_tags: options.use_empty_element_tags,
            open_start_tag: None,
        }
    }

    /// Get a reference to the underlying writer
    pub fn get_ref(&self) -> &W {
        &self.out
    }

    /// Unwrap the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write(&mut self, s: &str) -> Result<()> {
        self.out.write_all(s.as_bytes())?;
        Ok(())
    }

    fn finish_start_tag(&mut self) -> Result<()> {
        if self.open_start_tag.take().is_some() {
            self.write(">")?;
        }
        Ok(())
    }
}

impl XmlWriter<Vec<u8>> {
    /// Consume an in-memory writer and return its output
    pub fn into_string(self) -> String {
        // Only `&str` data is ever written
        String::from_utf8_lossy(&self.out).into_owned()
    }
}

impl<W: Write> Sink for XmlWriter<W> {
    fn start_document(&mut self) -> Result<()> {
        if self.declaration {
            self.write(XML_DECLARATION)?;
        }
        Ok(())
    }

    fn open_element(&mut self, name: &str) -> Result<()> {
        self.finish_start_tag()?;
        self.write("<")?;
        self.write(name)?;
        self.open_start_tag = Some(name.to_string());
        Ok(())
    }

    fn set_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        if self.open_start_tag.is_none() {
            return Err(SinkError::Rejected(format!(
                "attribute `{}` outside of a start tag",
                name
            )));
        }
        self.write(" ")?;
        self.write(name)?;
        self.write("=\"")?;
        self.write(value)?;
        self.write("\"")
    }

    fn close_element(&mut self, name: &str) -> Result<()> {
        match self.open_start_tag.take() {
            Some(open) if open == name && (self.use_empty_element_tags || is_void(name)) => {
                self.write(" />")
            }
            Some(_) => {
                self.write("></")?;
                self.write(name)?;
                self.write(">")
            }
            None => {
                self.write("</")?;
                self.write(name)?;
                self.write(">")
            }
        }
    }

    fn text(&mut self, value: &str) -> Result<()> {
        if value.is_empty() {
            return Ok(());
        }
        self.finish_start_tag()?;
        self.write(value)
    }

    fn comment(&mut self, value: &str) -> Result<()> {
        self.finish_start_tag()?;
        self.write("<!--")?;
        self.write(value)?;
        self.write("-->")
    }

    fn cdata(&mut self, value: &str) -> Result<()> {
        self.finish_start_tag()?;
        self.write("<![CDATA[")?;
        // A literal terminator has to be split across two sections
        self.write(&value.replace("]]>", "]]]]><![CDATA[>"))?;
        self.write("]]>")
    }

    fn line_break(&mut self) -> Result<()> {
        self.finish_start_tag()?;
        self.write("<br />")
    }

    fn newline(&mut self) -> Result<()> {
        self.finish_start_tag()?;
        self.write("\n")
    }

    fn end_document(&mut self) -> Result<()> {
        self.finish_start_tag()?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn bare_options() -> Options {
        Options {
            omit_xml_declaration: true,
            ..Default::default()
        }
    }

    fn write_with(options: &Options, f: impl FnOnce(&mut XmlWriter<Vec<u8>>) -> Result<()>) -> String {
        let mut writer = XmlWriter::new(Vec::new(), options);
        writer.start_document().unwrap();
        f(&mut writer).unwrap();
        writer.end_document().unwrap();
        writer.into_string()
    }

    #[test]
    fn test_declaration() {
        let output = write_with(&Options::default(), |w| {
            w.open_element("html")?;
            w.close_element("html")
        });
        assert_eq!(output, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<html />");
    }

    #[test]
    fn test_element_with_attributes_and_text() {
        let output = write_with(&bare_options(), |w| {
            w.open_element("div")?;
            w.set_attribute("class", "foo")?;
            w.set_attribute("title", "a &amp; b")?;
            w.text("2 roots &lt; here")?;
            w.close_element("div")
        });
        assert_eq!(output, "<div class=\"foo\" title=\"a &amp; b\">2 roots &lt; here</div>");
    }

    #[test]
    fn test_empty_element_tags() {
        let output = write_with(&bare_options(), |w| {
            w.open_element("p")?;
            w.close_element("p")
        });
        assert_eq!(output, "<p />");

        let options = Options {
            use_empty_element_tags: false,
            ..bare_options()
        };
        let output = write_with(&options, |w| {
            w.open_element("p")?;
            w.close_element("p")?;
            w.open_element("br")?;
            w.close_element("br")
        });
        assert_eq!(output, "<p></p><br />");
    }

    #[test]
    fn test_empty_text_keeps_element_empty() {
        let output = write_with(&bare_options(), |w| {
            w.open_element("span")?;
            w.text("")?;
            w.close_element("span")
        });
        assert_eq!(output, "<span />");
    }

    #[test]
    fn test_cdata_terminator_is_split() {
        let output = write_with(&bare_options(), |w| {
            w.open_element("script")?;
            w.cdata("if (a[b[0]]> 1) {}")?;
            w.close_element("script")
        });
        assert_eq!(
            output,
            "<script><![CDATA[if (a[b[0]]]]><![CDATA[> 1) {}]]></script>"
        );
    }

    #[test]
    fn test_comment_line_break_and_newline() {
        let output = write_with(&bare_options(), |w| {
            w.open_element("div")?;
            w.comment(" x ")?;
            w.text("a ")?;
            w.line_break()?;
            w.text("b")?;
            w.close_element("div")?;
            w.newline()
        });
        assert_eq!(output, "<div><!-- x -->a <br />b</div>\n");
    }

    #[test]
    fn test_attribute_outside_start_tag_is_rejected() {
        let mut writer = XmlWriter::new(Vec::new(), &bare_options());
        writer.open_element("p").unwrap();
        writer.text("x").unwrap();
        let err = writer.set_attribute("id", "1").unwrap_err();
        assert!(matches!(err, SinkError::Rejected(_)));
    }

    #[test]
    fn test_underlying_writer_access() {
        let mut writer = XmlWriter::new(Vec::new(), &bare_options());
        writer.open_element("p").unwrap();
        assert_eq!(writer.get_ref().as_slice(), b"<p");

        writer.text("x").unwrap();
        writer.close_element("p").unwrap();
        assert_eq!(writer.into_inner(), b"<p>x</p>".to_vec());
    }

    #[test]
    fn test_is_void() {
        assert!(is_void("br"));
        assert!(is_void("IMG"));
        assert!(!is_void("div"));
    }
}
