//! Whitespace compaction for the compact layout.
//!
//! A text run is split into its leading blank run, a compacted core and its
//! trailing blank run. Blank units are ASCII space, tab, line feed, carriage
//! return and every encoding of the non-breaking space (the raw character,
//! `&nbsp;`, `&#160;`, `&#xA0;`). Whether an edge run survives depends on its
//! neighbours, so edges are reported as [`Edge`]s and resolved by the
//! serializer.
//!
//! Inside the core, runs of ASCII whitespace collapse to a single space and a
//! run holding two or more line breaks becomes a [`Fragment::Break`]. Inside
//! a run, non-breaking spaces are kept as written while the ASCII whitespace
//! around them still collapses to a single space.

use std::mem;

use once_cell::sync::Lazy;
use regex::Regex;

static NBSP_REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?i:&nbsp;|&#0*160;|&#x0*a0;)").expect("valid nbsp reference pattern")
});

/// A blank run at the edge of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub enum Edge {
    /// No blank run
    #[default]
    None,
    /// A blank run worth at most one space
    Space,
    /// A blank run holding two or more line breaks
    Break,
}

/// A piece of compacted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    Text(String),
    Break,
}

/// Result of [`compact`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Compacted {
    pub leading: Edge,
    pub fragments: Vec<Fragment>,
    pub trailing: Edge,
}

impl Compacted {
    /// True when the text consisted of blank units only
    pub fn is_blank(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Render the core, a break as a blank line
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for fragment in &self.fragments {
            match fragment {
                Fragment::Text(t) => text.push_str(t),
                Fragment::Break => text.push_str("\n\n"),
            }
        }
        text
    }
}

struct Blank {
    len: usize,
    newline: bool,
    nbsp: bool,
}

fn blank_unit(rest: &str) -> Option<Blank> {
    let blank = |len, newline, nbsp| Some(Blank { len, newline, nbsp });
    match rest.chars().next()? {
        ' ' | '\t' => blank(1, false, false),
        '\n' => blank(1, true, false),
        // CR LF counts once, through its LF
        '\r' => blank(1, !rest[1..].starts_with('\n'), false),
        '\u{a0}' => blank('\u{a0}'.len_utf8(), false, true),
        '&' => NBSP_REFERENCE.find(rest).and_then(|m| blank(m.end(), false, true)),
        _ => None,
    }
}

#[derive(Default)]
struct Run {
    newlines: usize,
    nbsp: bool,
    /// Interior rendering: nbsp units as written, ASCII sub-runs as one space
    kept: String,
    after_ascii: bool,
}

impl Run {
    fn push(&mut self, blank: &Blank, unit: &str) {
        if blank.newline {
            self.newlines += 1;
        }
        if blank.nbsp {
            self.nbsp = true;
            self.kept.push_str(unit);
            self.after_ascii = false;
        } else if !self.after_ascii {
            self.kept.push(' ');
            self.after_ascii = true;
        }
    }

    fn edge(&self) -> Edge {
        if self.newlines >= 2 {
            Edge::Break
        } else {
            Edge::Space
        }
    }
}

/// Compact a text run
pub fn compact(text: &str) -> Compacted {
    let mut result = Compacted::default();
    let mut current = String::with_capacity(text.len());
    let mut run: Option<Run> = None;
    let mut seen_content = false;
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];

        if let Some(blank) = blank_unit(rest) {
            run.get_or_insert_with(Run::default).push(&blank, &rest[..blank.len]);
            i += blank.len;
            continue;
        }

        if let Some(r) = run.take() {
            if !seen_content {
                result.leading = r.edge();
            } else if r.newlines >= 2 {
                result.fragments.push(Fragment::Text(mem::take(&mut current)));
                result.fragments.push(Fragment::Break);
            } else if r.nbsp {
                current.push_str(&r.kept);
            } else {
                current.push(' ');
            }
        }

        let Some(ch) = rest.chars().next() else {
            break;
        };
        current.push(ch);
        i += ch.len_utf8();
        seen_content = true;
    }

    if let Some(r) = run {
        if seen_content {
            result.trailing = r.edge();
        } else {
            result.leading = r.edge();
        }
    }
    if !current.is_empty() {
        result.fragments.push(Fragment::Text(current));
    }

    result
}

/// Trimmed and collapsed form of `text`
pub fn normalize(text: &str) -> String {
    compact(text).to_text()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn text(s: &str) -> Fragment {
        Fragment::Text(s.to_string())
    }

    #[test]
    fn test_trims_and_collapses() {
        let c = compact("  hello   \t world  ");
        assert_eq!(c.leading, Edge::Space);
        assert_eq!(c.fragments, vec![text("hello world")]);
        assert_eq!(c.trailing, Edge::Space);
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(compact(""), Compacted::default());

        let c = compact("   ");
        assert!(c.is_blank());
        assert_eq!(c.leading, Edge::Space);
        assert_eq!(c.trailing, Edge::None);

        let c = compact(" \n \n ");
        assert!(c.is_blank());
        assert_eq!(c.leading, Edge::Break);
    }

    #[test]
    fn test_single_newline_is_a_space() {
        let c = compact("2 roots \n    < here >  ");
        assert_eq!(c.leading, Edge::None);
        assert_eq!(c.fragments, vec![text("2 roots < here >")]);
        assert_eq!(c.trailing, Edge::Space);
    }

    #[test]
    fn test_blank_line_is_a_break() {
        let c = compact("2 roots \n\n    < here >  ");
        assert_eq!(c.fragments, vec![text("2 roots"), Fragment::Break, text("< here >")]);

        let c = compact("a\r\n\r\nb");
        assert_eq!(c.fragments, vec![text("a"), Fragment::Break, text("b")]);

        let c = compact("a\r\nb");
        assert_eq!(c.fragments, vec![text("a b")]);
    }

    #[test]
    fn test_nbsp_variants_are_blank_at_the_edges() {
        let sentence = "We have just released Jericho Road.";
        for input in [
            format!("&nbsp;&nbsp;{}", sentence),
            format!("&#160;{}&#160;", sentence),
            format!("&#xA0;{}&#xa0;", sentence),
            format!("&NBSP;{}&#x00A0;", sentence),
            format!("\u{a0}{}&#xA0;\u{a0}", sentence),
        ] {
            let c = compact(&input);
            assert_eq!(c.leading, Edge::Space, "{:?}", input);
            assert_eq!(c.fragments, vec![text(sentence)], "{:?}", input);
        }
    }

    #[test]
    fn test_interior_nbsp_is_kept() {
        assert_eq!(normalize("a&nbsp;b"), "a&nbsp;b");
        assert_eq!(normalize("a \u{a0} b"), "a \u{a0} b");
        assert_eq!(normalize("&nbspx"), "&nbspx");
    }

    #[test]
    fn test_ascii_around_interior_nbsp_collapses() {
        let c = compact("a \n&nbsp;\t\t b");
        assert_eq!(c.fragments, vec![text("a &nbsp; b")]);
        assert_eq!(normalize("a\u{a0}\n  b"), "a\u{a0} b");
        assert_eq!(normalize("a\t&#160;\u{a0}\r\nb"), "a &#160;\u{a0} b");

        let c = compact("a &nbsp;\n\n b");
        assert_eq!(c.fragments, vec![text("a"), Fragment::Break, text("b")]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for input in [
            "",
            "   ",
            "plain",
            "  lead and trail  ",
            "a  b\t\tc",
            "2 roots \n\n    < here >  ",
            "x\n\n\n\ny",
            "x \n \n y",
            "&nbsp;&nbsp;start",
            "mid &nbsp; dle",
            "a\u{a0}\u{a0}b",
            "a\r\n\r\nb\rc",
            "a \n&nbsp;\t\t b",
            "a\u{a0}\n  b",
            "\n\n",
        ] {
            let once = normalize(input);
            assert_eq!(normalize(&once), once, "{:?}", input);
            assert_eq!(compact(&once).fragments, compact(input).fragments, "{:?}", input);
        }
    }
}
