//! Resource-name normalization.
//!
//! [`encode`] turns arbitrary text (record titles, descriptor class names) into
//! a fragment that can be appended to a namespace IRI:
//!
//! 1. trim leading and trailing whitespace;
//! 2. collapse each whitespace run into a single `_`;
//! 3. drop every character that is not alphanumeric, `_`, `-`, `.` or `~`;
//! 4. percent-encode whatever is still unsafe in an IRI (non-ASCII letters
//!    and digits survive step 3 and are escaped here as UTF-8 octets).
//!
//! The result is deterministic. It is not idempotent for non-ASCII input: the
//! `%` introduced by step 4 is removed by step 3 on a second pass, so
//! `encode(encode("café"))` is `"cafC3A9"`, not `"caf%C3%A9"`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Everything but ASCII alphanumerics and `_-.~` is escaped.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC.remove(b'_').remove(b'-').remove(b'.').remove(b'~');

/// Normalizes `raw` into a URI-safe resource name.
#[must_use]
pub fn encode(raw: &str) -> String {
    let kept = retain_allowed(&collapse_whitespace(raw.trim()));
    utf8_percent_encode(&kept, UNRESERVED).to_string()
}

fn collapse_whitespace(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_run = false;
    for c in s.chars() {
        if c.is_whitespace() {
            if !in_run {
                out.push('_');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

fn retain_allowed(s: &str) -> String {
    s.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.' | '~'))
        .collect()
}
