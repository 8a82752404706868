//! Turtle 1.1 serializer.
//!
//! Produces a Turtle document with the store's prefix declarations followed by
//! one block per subject. IRIs under a bound prefix are compacted when the
//! local part is a plain name; everything else is written in full.

use super::{escape_iri, escape_literal};
use crate::model::{iris, Term};
use crate::store::TripleStore;

/// Serializes every triple in `store` to a Turtle string.
#[must_use]
pub fn to_turtle(store: &TripleStore) -> String {
    let prefixes = store.prefixes();
    let mut out = String::with_capacity(store.len() * 64 + 256);

    // Prefix declarations
    for (prefix, iri) in prefixes {
        out.push_str(&format!("@prefix {}: <{}> .\n", prefix, escape_iri(iri)));
    }

    let mut current: Option<&str> = None;
    for t in store.iter() {
        if current == Some(t.subject.as_str()) {
            out.push_str(" ;\n    ");
        } else {
            if current.is_some() {
                out.push_str(" .\n");
            }
            out.push('\n');
            out.push_str(&resource(&t.subject, prefixes));
            out.push_str("\n    ");
            current = Some(t.subject.as_str());
        }
        out.push_str(&predicate(&t.predicate, prefixes));
        out.push(' ');
        out.push_str(&object(&t.object, prefixes));
    }
    if current.is_some() {
        out.push_str(" .\n");
    }

    out
}

fn predicate(iri: &str, prefixes: &[(String, String)]) -> String {
    if iri == iris::RDF_TYPE {
        "a".to_owned()
    } else {
        resource(iri, prefixes)
    }
}

fn object(term: &Term, prefixes: &[(String, String)]) -> String {
    match term {
        Term::Iri(iri) => resource(iri, prefixes),
        Term::Literal(value) => format!("\"{}\"", escape_literal(value)),
    }
}

fn resource(iri: &str, prefixes: &[(String, String)]) -> String {
    prefixes
        .iter()
        .filter_map(|(prefix, ns)| {
            iri.strip_prefix(ns.as_str())
                .filter(|local| is_plain_local_name(local))
                .map(|local| (ns.len(), format!("{prefix}:{local}")))
        })
        .max_by_key(|(len, _)| *len)
        .map(|(_, curie)| curie)
        .unwrap_or_else(|| format!("<{}>", escape_iri(iri)))
}

/// Conservative subset of Turtle's `PN_LOCAL`: ASCII letters, digits, `_` and
/// `-`, not starting with `-`.
fn is_plain_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphanumeric() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
