//! Serializers for the accumulated triple set.
//!
//! Two serialization formats are supported:
//! - **Turtle** ([`turtle`]) — the default, prefix-compacted and grouped by subject
//! - **N-Triples** ([`ntriples`]) — one triple per line, absolute IRIs; chosen for `.nt` outputs
//!
//! Both are deterministic: the store iterates triples in sorted order.

pub mod ntriples;
pub mod turtle;

use std::fmt;
use std::path::Path;

use percent_encoding::percent_encode_byte;

/// The on-disk graph serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Turtle 1.1.
    Turtle,
    /// N-Triples.
    NTriples,
}

impl OutputFormat {
    /// Picks the format from a destination path: `.nt` selects N-Triples,
    /// anything else Turtle.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("nt") => OutputFormat::NTriples,
            _ => OutputFormat::Turtle,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Turtle => f.write_str("turtle"),
            OutputFormat::NTriples => f.write_str("n-triples"),
        }
    }
}

/// Escapes a string for use inside a double-quoted literal.
pub(crate) fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out
}

/// Percent-encodes the ASCII characters that may not appear in an IRI.
/// Non-ASCII text passes through.
pub(crate) fn escape_iri(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match u8::try_from(c) {
            Ok(b) if is_forbidden_in_iri(b) => out.push_str(percent_encode_byte(b)),
            _ => out.push(c),
        }
    }
    out
}

fn is_forbidden_in_iri(b: u8) -> bool {
    b <= b' ' || b == 0x7F || matches!(b, b'<' | b'>' | b'"' | b'{' | b'}' | b'|' | b'^' | b'`' | b'\\')
}
