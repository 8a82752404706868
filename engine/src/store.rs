//! Triple accumulation and export.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use crate::error::BuildError;
use crate::model::{iris, Term, Triple};
use crate::serializer::{ntriples, turtle, OutputFormat};

/// A duplicate-collapsing set of triples plus the prefix bindings used when
/// exporting to Turtle.
///
/// The store only grows: there is no removal API.
#[derive(Debug, Clone)]
pub struct TripleStore {
    triples: BTreeSet<Triple>,
    prefixes: Vec<(String, String)>,
}

impl TripleStore {
    /// Creates an empty store with the `rdf`, `rdfs`, `owl` and `xsd` prefixes bound.
    #[must_use]
    pub fn new() -> Self {
        Self {
            triples: BTreeSet::new(),
            prefixes: vec![
                ("owl".to_owned(), iris::OWL.to_owned()),
                ("rdf".to_owned(), iris::RDF.to_owned()),
                ("rdfs".to_owned(), iris::RDFS.to_owned()),
                ("xsd".to_owned(), iris::XSD.to_owned()),
            ],
        }
    }

    /// Binds `prefix` to `iri` for Turtle output, replacing any earlier binding
    /// of the same prefix.
    pub fn bind(&mut self, prefix: &str, iri: &str) {
        match self.prefixes.iter_mut().find(|(p, _)| p == prefix) {
            Some(binding) => binding.1 = iri.to_owned(),
            None => self.prefixes.push((prefix.to_owned(), iri.to_owned())),
        }
    }

    /// Returns the prefix bindings in binding order.
    #[must_use]
    pub fn prefixes(&self) -> &[(String, String)] {
        &self.prefixes
    }

    /// Adds a triple. Returns `false` if it was already present.
    pub fn add(&mut self, subject: &str, predicate: &str, object: Term) -> bool {
        self.insert(Triple::new(subject, predicate, object))
    }

    /// Inserts an already-built triple. Returns `false` if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Returns whether the store holds the given triple.
    #[must_use]
    pub fn contains(&self, subject: &str, predicate: &str, object: &Term) -> bool {
        self.triples
            .contains(&Triple::new(subject, predicate, object.clone()))
    }

    /// Number of distinct triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns `true` if no triple has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterates the triples in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Serializes the store in the given format.
    #[must_use]
    pub fn serialize(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Turtle => turtle::to_turtle(self),
            OutputFormat::NTriples => ntriples::to_ntriples(self),
        }
    }

    /// Writes the store to `destination`, overwriting any existing file. The
    /// format is chosen from the file extension (see [`OutputFormat::from_path`]).
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Export`] if the file cannot be written, e.g. when
    /// its directory does not exist or is not writable.
    pub fn export(&self, destination: &Path) -> Result<OutputFormat, BuildError> {
        let format = OutputFormat::from_path(destination);
        fs::write(destination, self.serialize(format)).map_err(|source| BuildError::Export {
            path: destination.to_path_buf(),
            source,
        })?;
        Ok(format)
    }
}

impl Default for TripleStore {
    fn default() -> Self {
        Self::new()
    }
}
