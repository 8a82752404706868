//! The namespace-bound graph a model writes into.

use tracing::debug;

use crate::descriptor::BuildSpec;
use crate::encode::encode;
use crate::error::BuildError;
use crate::model::{iris, SchemaTermKind, Term};
use crate::store::TripleStore;

/// Prefix under which the build namespace is bound in Turtle output.
pub const NAMESPACE_PREFIX: &str = "ns";

/// A namespace IRI. Local names are appended verbatim, so `"http://x.org/"`
/// and `"http://x.org/#"` mint different resources for the same name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    iri: String,
}

impl Namespace {
    /// Creates a namespace from its IRI.
    pub fn new(iri: impl Into<String>) -> Self {
        Self { iri: iri.into() }
    }

    /// The namespace IRI.
    #[must_use]
    pub fn iri(&self) -> &str {
        &self.iri
    }

    /// Appends `local` as-is. Use for names that are already valid fragments.
    #[must_use]
    pub fn term(&self, local: &str) -> String {
        format!("{}{}", self.iri, local)
    }

    /// Normalizes `raw` with [`encode`] and appends it.
    #[must_use]
    pub fn resource(&self, raw: &str) -> String {
        self.term(&encode(raw))
    }
}

/// The primary resource of one record, returned by `create_subject` and handed
/// to every step for that record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    iri: String,
}

impl Entity {
    /// Wraps the IRI of a record's primary resource.
    pub fn new(iri: impl Into<String>) -> Self {
        Self { iri: iri.into() }
    }

    /// The entity IRI.
    #[must_use]
    pub fn iri(&self) -> &str {
        &self.iri
    }
}

/// A triple store bound to the build namespace.
#[derive(Debug, Clone)]
pub struct Graph {
    namespace: Namespace,
    store: TripleStore,
}

impl Graph {
    /// Creates an empty graph and binds `namespace` to the `ns:` prefix.
    #[must_use]
    pub fn new(namespace: Namespace) -> Self {
        let mut store = TripleStore::new();
        store.bind(NAMESPACE_PREFIX, namespace.iri());
        Self { namespace, store }
    }

    /// The bound namespace.
    #[must_use]
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Shorthand for [`Namespace::term`].
    #[must_use]
    pub fn term(&self, local: &str) -> String {
        self.namespace.term(local)
    }

    /// Shorthand for [`Namespace::resource`].
    #[must_use]
    pub fn resource(&self, raw: &str) -> String {
        self.namespace.resource(raw)
    }

    /// Adds a triple; duplicates are ignored.
    pub fn add(&mut self, subject: &str, predicate: &str, object: Term) {
        self.store.add(subject, predicate, object);
    }

    /// Adds `subject rdf:type class`.
    pub fn add_type(&mut self, subject: &str, class: &str) {
        self.add(subject, iris::RDF_TYPE, Term::iri(class));
    }

    /// The accumulated triples.
    #[must_use]
    pub fn store(&self) -> &TripleStore {
        &self.store
    }

    /// Consumes the graph, returning its store.
    #[must_use]
    pub fn into_store(self) -> TripleStore {
        self.store
    }
}

/// Materializes the descriptor's schema terms: `rdfs:Class` for every class
/// and the resolved schema-term type for every predicate.
///
/// # Errors
///
/// Returns [`BuildError::Config`] for a predicate type tag outside the
/// [`SchemaTermKind`] table. Nothing is added when any tag is unknown.
pub fn initialize_schema(graph: &mut Graph, spec: &BuildSpec) -> Result<(), BuildError> {
    let predicates = spec
        .predicates
        .iter()
        .map(|p| {
            SchemaTermKind::from_tag(&p.type_tag)
                .map(|kind| (p.name.as_str(), kind))
                .ok_or_else(|| {
                    BuildError::Config(format!(
                        "predicate `{}` has unknown type `{}` (expected one of: {})",
                        p.name,
                        p.type_tag,
                        SchemaTermKind::tags().collect::<Vec<_>>().join(", ")
                    ))
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for class in &spec.classes {
        let iri = graph.resource(class);
        graph.add_type(&iri, iris::RDFS_CLASS);
    }
    for (name, kind) in predicates {
        let iri = graph.resource(name);
        graph.add_type(&iri, kind.iri());
    }

    debug!(
        classes = spec.classes.len(),
        predicates = spec.predicates.len(),
        triples = graph.store().len(),
        "schema initialized"
    );
    Ok(())
}
