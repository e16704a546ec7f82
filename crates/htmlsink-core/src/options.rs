//! Configuration options for HTML tree serialization

use std::str::FromStr;

use crate::ConfigError;

/// How attributes listed as HTML boolean attributes are rendered when they
/// carry no explicit value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BooleanAttributeValues {
    /// `checked=""`
    Empty,
    /// `checked="checked"`
    #[default]
    SelfName,
    /// `checked="true"`
    TrueFalse,
}

impl BooleanAttributeValues {
    /// Value rendered for the boolean attribute `name`
    pub fn value_for<'a>(&self, name: &'a str) -> &'a str {
        match self {
            BooleanAttributeValues::Empty => "",
            BooleanAttributeValues::SelfName => name,
            BooleanAttributeValues::TrueFalse => "true",
        }
    }

    /// Parse a policy name, falling back to the default for unknown values
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_else(|err: ConfigError| {
            tracing::warn!(%err, "falling back to default boolean attribute values");
            Self::default()
        })
    }
}

impl FromStr for BooleanAttributeValues {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "empty" => Ok(BooleanAttributeValues::Empty),
            "self" => Ok(BooleanAttributeValues::SelfName),
            "true" | "truefalse" => Ok(BooleanAttributeValues::TrueFalse),
            other => Err(ConfigError(format!(
                "unknown boolean attribute values `{}` (expected empty, self or true)",
                other
            ))),
        }
    }
}

/// Output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    /// Text is written as found in the tree (escaping aside)
    #[default]
    Simple,
    /// Insignificant whitespace is removed, blank lines become `<br />`
    /// and block elements are followed by a line break
    Compact,
}

/// Options for serialization
///
/// Options are read by every serialization policy and never mutated during a
/// serialization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Escape text content (attributes are always escaped)
    pub escape_xml: bool,

    /// Wrap `script` and `style` content in CDATA sections
    pub use_cdata_for_script_and_style: bool,

    /// Replace characters outside the XML-safe range with numeric references
    pub advanced_xml_escape: bool,

    /// Rewrite named HTML entities to numeric character references
    pub translate_special_entities: bool,

    /// Resolve numeric character references to the characters themselves
    pub recognize_unicode_chars: bool,

    /// Skip the `<?xml ...?>` declaration
    pub omit_xml_declaration: bool,

    /// Serialize only the body content of an `html` root
    pub omit_html_envelope: bool,

    /// Write empty elements as `<tag />`
    pub use_empty_element_tags: bool,

    /// Rendering of valueless boolean attributes
    pub boolean_attribute_values: BooleanAttributeValues,

    /// Output layout
    pub layout: Layout,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            escape_xml: true,
            use_cdata_for_script_and_style: true,
            advanced_xml_escape: true,
            translate_special_entities: true,
            recognize_unicode_chars: true,
            omit_xml_declaration: false,
            omit_html_envelope: false,
            use_empty_element_tags: true,
            boolean_attribute_values: BooleanAttributeValues::SelfName,
            layout: Layout::Simple,
        }
    }
}

impl Options {
    /// Options for the compact layout, without XML declaration or envelope
    pub fn compact() -> Self {
        Self {
            omit_xml_declaration: true,
            omit_html_envelope: true,
            layout: Layout::Compact,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_boolean_attribute_values() {
        assert_eq!(
            "empty".parse::<BooleanAttributeValues>().unwrap(),
            BooleanAttributeValues::Empty
        );
        assert_eq!(
            "Self".parse::<BooleanAttributeValues>().unwrap(),
            BooleanAttributeValues::SelfName
        );
        assert_eq!(
            " true ".parse::<BooleanAttributeValues>().unwrap(),
            BooleanAttributeValues::TrueFalse
        );
        assert!("yes".parse::<BooleanAttributeValues>().is_err());
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(
            BooleanAttributeValues::parse_or_default("bogus"),
            BooleanAttributeValues::SelfName
        );
        assert_eq!(
            BooleanAttributeValues::parse_or_default("empty"),
            BooleanAttributeValues::Empty
        );
    }

    #[test]
    fn test_value_for() {
        assert_eq!(BooleanAttributeValues::Empty.value_for("checked"), "");
        assert_eq!(BooleanAttributeValues::SelfName.value_for("checked"), "checked");
        assert_eq!(BooleanAttributeValues::TrueFalse.value_for("checked"), "true");
    }

    #[test]
    fn test_compact_options() {
        let options = Options::compact();
        assert_eq!(options.layout, Layout::Compact);
        assert!(options.omit_xml_declaration);
        assert!(options.omit_html_envelope);
        assert!(options.escape_xml);
    }
}
