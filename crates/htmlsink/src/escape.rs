//! XML escaping of text and attribute values.
//!
//! Only the reserved characters are replaced. An ampersand that already
//! starts a valid reference is left alone, which keeps escaping idempotent:
//! escaping `&amp;` again yields `&amp;`.

use std::borrow::Cow;
use std::fmt::Write as _;

use htmlsink_core::Options;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::entities;

/// Where an escaped string ends up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Element content
    Text,
    /// Double-quoted attribute value
    Attribute,
}

static NUMERIC_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^&#(?:[xX]([0-9A-Fa-f]{1,8})|([0-9]{1,10}));").expect("valid numeric reference pattern")
});

static NAMED_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^&([A-Za-z][A-Za-z0-9]{0,31});").expect("valid named reference pattern")
});

/// Escape `text` for `context`.
///
/// Text is returned unchanged when `escape_xml` is off; attribute values
/// still get their ampersands and double quotes escaped.
pub fn escape<'a>(text: &'a str, context: Context, options: &Options) -> Cow<'a, str> {
    if context == Context::Text && !options.escape_xml {
        return Cow::Borrowed(text);
    }
    if !text.chars().any(|c| needs_escape(c, context, options)) {
        return Cow::Borrowed(text);
    }

    let full = options.escape_xml;
    let mut out = String::with_capacity(text.len() + 16);
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if ch == '&' {
            let consumed = push_reference(rest, options, &mut out);
            rest = &rest[consumed..];
            continue;
        }

        match ch {
            '<' if full => out.push_str("&lt;"),
            '>' if full => out.push_str("&gt;"),
            '"' if context == Context::Attribute => out.push_str("&quot;"),
            c if full && options.advanced_xml_escape && is_restricted(c) => {
                let _ = write!(out, "&#{};", c as u32);
            }
            c => out.push(c),
        }
        rest = &rest[ch.len_utf8()..];
    }

    Cow::Owned(out)
}

fn needs_escape(c: char, context: Context, options: &Options) -> bool {
    match c {
        '&' => true,
        '<' | '>' => options.escape_xml,
        '"' => context == Context::Attribute,
        c => options.escape_xml && options.advanced_xml_escape && is_restricted(c),
    }
}

/// Write the reference starting at `rest` (which begins with `&`) and return
/// the number of bytes consumed.
fn push_reference(rest: &str, options: &Options, out: &mut String) -> usize {
    if let Some(caps) = NUMERIC_REFERENCE.captures(rest) {
        let len = caps[0].len();
        let code = match (caps.get(1), caps.get(2)) {
            (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
            (None, Some(dec)) => dec.as_str().parse::<u32>().ok(),
            _ => None,
        };
        if let Some(ch) = code.and_then(char::from_u32) {
            push_character(ch, &rest[..len], options, out);
            return len;
        }
    } else if let Some(caps) = NAMED_REFERENCE.captures(rest) {
        let len = caps[0].len();
        let name = &caps[1];
        if entities::is_xml_entity(name) {
            out.push_str(&rest[..len]);
            return len;
        }
        if options.translate_special_entities {
            if let Some(ch) = entities::lookup(name).and_then(char::from_u32) {
                push_character(ch, &rest[..len], options, out);
                return len;
            }
        }
    }

    out.push_str("&amp;");
    1
}

/// Write a referenced character in its configured form
fn push_character(ch: char, reference: &str, options: &Options, out: &mut String) {
    if options.recognize_unicode_chars && !is_reserved(ch) && !is_restricted(ch) {
        out.push(ch);
    } else if options.translate_special_entities {
        let _ = write!(out, "&#{};", ch as u32);
    } else {
        out.push_str(reference);
    }
}

fn is_reserved(c: char) -> bool {
    matches!(c, '&' | '<' | '>' | '"')
}

/// Characters that XML 1.0 does not allow literally
fn is_restricted(c: char) -> bool {
    matches!(
        c,
        '\u{0}'..='\u{8}'
            | '\u{B}'
            | '\u{C}'
            | '\u{E}'..='\u{1F}'
            | '\u{7F}'..='\u{84}'
            | '\u{86}'..='\u{9F}'
            | '\u{FFFE}'
            | '\u{FFFF}'
    )
}
