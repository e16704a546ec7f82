//! HtmlSerializer - the main entry point for node tree serialization.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use htmlsink_core::{BooleanAttributeValues, Document, DocumentBuilder, Options, Sink, XmlWriter};

use crate::node::TagNode;
use crate::serialize::serialize;
use crate::Result;

/// The main service for serializing node trees
#[derive(Debug, Clone, Default)]
pub struct HtmlSerializer {
    options: Options,
}

impl HtmlSerializer {
    /// Create an HtmlSerializer with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an HtmlSerializer with custom options
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Set the rendering of valueless boolean attributes by name
    /// (`empty`, `self` or `true`)
    pub fn boolean_attribute_values(mut self, value: &str) -> Result<Self> {
        self.options.boolean_attribute_values = value.parse::<BooleanAttributeValues>()?;
        Ok(self)
    }

    /// Get the current options
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Get mutable access to options
    pub fn options_mut(&mut self) -> &mut Options {
        &mut self.options
    }

    /// Serialize `root` to any sink
    pub fn serialize<S: Sink + ?Sized>(&self, root: &TagNode, sink: &mut S) -> Result<()> {
        serialize(root, sink, &self.options)
    }

    /// Serialize `root` to a string
    pub fn serialize_to_string(&self, root: &TagNode) -> Result<String> {
        let mut writer = XmlWriter::new(Vec::new(), &self.options);
        serialize(root, &mut writer, &self.options)?;
        Ok(writer.into_string())
    }

    /// Serialize `root` to the file at `path`, replacing its content
    pub fn serialize_to_file(&self, root: &TagNode, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "writing serialized tree");

        let file = File::create(path)?;
        let mut writer = XmlWriter::new(BufWriter::new(file), &self.options);
        serialize(root, &mut writer, &self.options)
    }

    /// Serialize `root` into an owned document tree.
    ///
    /// The envelope is always kept, a document needs its single root.
    pub fn to_document(&self, root: &TagNode) -> Result<Document> {
        let options = Options {
            omit_html_envelope: false,
            ..self.options.clone()
        };
        let mut builder = DocumentBuilder::new();
        serialize(root, &mut builder, &options)?;
        Ok(builder.finish()?)
    }

    /// Parse an HTML fragment and serialize it to a string
    #[cfg(feature = "html")]
    pub fn serialize_html(&self, html: &str) -> Result<String> {
        let root = crate::html::parse_html(html);
        self.serialize_to_string(&root)
    }
}

/// Serialize `root` to `sink`
pub fn serialize_to_sink<S: Sink + ?Sized>(root: &TagNode, sink: &mut S, options: &Options) -> Result<()> {
    serialize(root, sink, options)
}

/// Serialize `root` to a string
pub fn serialize_to_string(root: &TagNode, options: &Options) -> Result<String> {
    HtmlSerializer::with_options(options.clone()).serialize_to_string(root)
}

/// Serialize `root` to the file at `path`
pub fn serialize_to_file(root: &TagNode, path: impl AsRef<Path>, options: &Options) -> Result<()> {
    HtmlSerializer::with_options(options.clone()).serialize_to_file(root, path)
}
