//! Core graph model types.
//!
//! A graph is a set of [`Triple`]s whose positions hold [`Term`]s. Subjects and
//! predicates are always IRIs; objects are IRIs or plain literals. All terms are
//! owned strings so the store can outlive the records they were derived from.

use std::fmt;

/// An RDF object term: an absolute IRI or a plain string literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Term {
    /// An IRI reference (e.g., `"http://example.org/Alpha"`).
    Iri(String),
    /// A plain literal without datatype or language tag.
    Literal(String),
}

impl Term {
    /// Creates an IRI term.
    pub fn iri(iri: impl Into<String>) -> Self {
        Term::Iri(iri.into())
    }

    /// Creates a plain literal term.
    pub fn literal(value: impl Into<String>) -> Self {
        Term::Literal(value.into())
    }

    /// Returns the IRI if this term is one.
    #[must_use]
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal(_) => None,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Iri(iri) => write!(f, "<{iri}>"),
            Term::Literal(value) => write!(f, "{value:?}"),
        }
    }
}

/// A `(subject, predicate, object)` statement.
///
/// Subjects and predicates are IRIs; only the object may be a literal.
/// Ordering is lexicographic over the three positions, which gives the store a
/// stable export order independent of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triple {
    /// IRI of the subject resource.
    pub subject: String,
    /// IRI of the predicate.
    pub predicate: String,
    /// The object resource or literal.
    pub object: Term,
}

impl Triple {
    /// Creates a triple from its three positions.
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

/// The closed set of schema-term kinds a descriptor predicate may declare.
///
/// Descriptor type tags (e.g., `"OWL.ObjectProperty"`) resolve through
/// [`SchemaTermKind::from_tag`]; anything outside the table is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaTermKind {
    /// `rdf:Property`.
    RdfProperty,
    /// `rdfs:Class`.
    RdfsClass,
    /// `rdfs:Datatype`.
    RdfsDatatype,
    /// `owl:Class`.
    OwlClass,
    /// `owl:ObjectProperty`.
    ObjectProperty,
    /// `owl:DatatypeProperty`.
    DatatypeProperty,
    /// `owl:AnnotationProperty`.
    AnnotationProperty,
    /// `owl:FunctionalProperty`.
    FunctionalProperty,
    /// `owl:InverseFunctionalProperty`.
    InverseFunctionalProperty,
    /// `owl:TransitiveProperty`.
    TransitiveProperty,
    /// `owl:SymmetricProperty`.
    SymmetricProperty,
}

const SCHEMA_TERM_TAGS: &[(&str, SchemaTermKind)] = &[
    ("RDF.Property", SchemaTermKind::RdfProperty),
    ("RDFS.Class", SchemaTermKind::RdfsClass),
    ("RDFS.Datatype", SchemaTermKind::RdfsDatatype),
    ("OWL.Class", SchemaTermKind::OwlClass),
    ("OWL.ObjectProperty", SchemaTermKind::ObjectProperty),
    ("OWL.DatatypeProperty", SchemaTermKind::DatatypeProperty),
    ("OWL.AnnotationProperty", SchemaTermKind::AnnotationProperty),
    ("OWL.FunctionalProperty", SchemaTermKind::FunctionalProperty),
    (
        "OWL.InverseFunctionalProperty",
        SchemaTermKind::InverseFunctionalProperty,
    ),
    ("OWL.TransitiveProperty", SchemaTermKind::TransitiveProperty),
    ("OWL.SymmetricProperty", SchemaTermKind::SymmetricProperty),
];

impl SchemaTermKind {
    /// Resolves a descriptor type tag. Surrounding whitespace is ignored;
    /// matching is otherwise exact. Returns `None` for unknown tags.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        SCHEMA_TERM_TAGS
            .iter()
            .find(|(known, _)| *known == tag)
            .map(|(_, kind)| *kind)
    }

    /// Returns every accepted type tag, in table order.
    pub fn tags() -> impl Iterator<Item = &'static str> {
        SCHEMA_TERM_TAGS.iter().map(|(tag, _)| *tag)
    }

    /// Returns the full IRI of the schema term.
    #[must_use]
    pub fn iri(self) -> &'static str {
        match self {
            SchemaTermKind::RdfProperty => iris::RDF_PROPERTY,
            SchemaTermKind::RdfsClass => iris::RDFS_CLASS,
            SchemaTermKind::RdfsDatatype => iris::RDFS_DATATYPE,
            SchemaTermKind::OwlClass => iris::OWL_CLASS,
            SchemaTermKind::ObjectProperty => iris::OWL_OBJECT_PROPERTY,
            SchemaTermKind::DatatypeProperty => iris::OWL_DATATYPE_PROPERTY,
            SchemaTermKind::AnnotationProperty => iris::OWL_ANNOTATION_PROPERTY,
            SchemaTermKind::FunctionalProperty => iris::OWL_FUNCTIONAL_PROPERTY,
            SchemaTermKind::InverseFunctionalProperty => iris::OWL_INVERSE_FUNCTIONAL_PROPERTY,
            SchemaTermKind::TransitiveProperty => iris::OWL_TRANSITIVE_PROPERTY,
            SchemaTermKind::SymmetricProperty => iris::OWL_SYMMETRIC_PROPERTY,
        }
    }
}

/// Standard IRI constants used by the schema initializer and serializers.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// Namespace used when a descriptor does not declare one.
    pub const DEFAULT_NAMESPACE: &str = "http://example.org/";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:Property`.
    pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
    /// `rdfs:Class`.
    pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
    /// `rdfs:Datatype`.
    pub const RDFS_DATATYPE: &str = "http://www.w3.org/2000/01/rdf-schema#Datatype";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:ObjectProperty`.
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    /// `owl:DatatypeProperty`.
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    /// `owl:AnnotationProperty`.
    pub const OWL_ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
    /// `owl:FunctionalProperty`.
    pub const OWL_FUNCTIONAL_PROPERTY: &str = "http://www.w3.org/2002/07/owl#FunctionalProperty";
    /// `owl:InverseFunctionalProperty`.
    pub const OWL_INVERSE_FUNCTIONAL_PROPERTY: &str =
        "http://www.w3.org/2002/07/owl#InverseFunctionalProperty";
    /// `owl:TransitiveProperty`.
    pub const OWL_TRANSITIVE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#TransitiveProperty";
    /// `owl:SymmetricProperty`.
    pub const OWL_SYMMETRIC_PROPERTY: &str = "http://www.w3.org/2002/07/owl#SymmetricProperty";
}
