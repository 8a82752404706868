//! N-Triples output, selected for `.nt` destinations.
//!
//! Writes the store in its sorted order with no prefixes, so two builds over
//! the same records produce byte-identical files.

use super::{escape_iri, escape_literal};
use crate::model::Term;
use crate::store::TripleStore;

/// Serializes every triple in `store` to an N-Triples string.
#[must_use]
pub fn to_ntriples(store: &TripleStore) -> String {
    let mut out = String::with_capacity(store.len() * 96);
    for t in store.iter() {
        out.push_str(&iri(&t.subject));
        out.push(' ');
        out.push_str(&iri(&t.predicate));
        out.push(' ');
        out.push_str(&object(&t.object));
        out.push_str(" .\n");
    }
    out
}

fn iri(s: &str) -> String {
    format!("<{}>", escape_iri(s))
}

fn object(term: &Term) -> String {
    match term {
        Term::Iri(value) => iri(value),
        Term::Literal(value) => format!("\"{}\"", escape_literal(value)),
    }
}
