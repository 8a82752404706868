//! Build descriptor loading.
//!
//! A descriptor is a YAML document naming the graph model, the record source,
//! the handler order, the output destination and the schema terms:
//!
//! ```yaml
//! ontology: CryptoOntology
//! class_definition: ontology/crypto_ontology.py
//! namespace: http://example.org/crypto#
//! source_directory: data/ecosystems
//! file_extension: .toml
//! handlers: [title, sub_ecosystems]
//! output_file: out/crypto.ttl
//! classes: [Ecosystems]
//! predicates:
//!   - sub_ecosystem_of: OWL.ObjectProperty
//! ```
//!
//! Parsing is strict about required fields and shapes; resolution of the model,
//! the steps and the predicate type tags happens later, against the registry and
//! the loaded model.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::BuildError;
use crate::model::iris::DEFAULT_NAMESPACE;

/// On-disk descriptor shape, before validation.
#[derive(Debug, Deserialize)]
struct RawDescriptor {
    ontology: String,
    class_definition: PathBuf,
    #[serde(default)]
    namespace: Option<String>,
    source_directory: PathBuf,
    file_extension: String,
    handlers: Vec<String>,
    output_file: PathBuf,
    #[serde(default)]
    classes: Vec<String>,
    #[serde(default)]
    predicates: Vec<BTreeMap<String, String>>,
}

/// A schema predicate declared by the descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredicateDecl {
    /// Predicate name, minted under the namespace.
    pub name: String,
    /// Type tag resolved through [`SchemaTermKind::from_tag`](crate::SchemaTermKind::from_tag).
    pub type_tag: String,
}

/// The validated, immutable build descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildSpec {
    /// Class name of the graph model to load.
    pub model_class_name: String,
    /// Where the model is defined; matched against registered definitions.
    pub class_definition: PathBuf,
    /// Namespace IRI under which resources are minted.
    pub namespace: String,
    /// Root of the record tree.
    pub source_directory: PathBuf,
    /// Record file extension as written in the descriptor.
    pub file_extension: String,
    /// Step names, applied to every record in this order.
    pub handlers: Vec<String>,
    /// Output graph path.
    pub output_file: PathBuf,
    /// Schema classes, in declaration order.
    pub classes: Vec<String>,
    /// Schema predicates, in declaration order.
    pub predicates: Vec<PredicateDecl>,
}

impl BuildSpec {
    /// Parses a descriptor from YAML text. Paths are kept as written.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Config`] if the YAML is malformed, a required
    /// field is missing, or a value is invalid.
    pub fn from_yaml_str(text: &str) -> Result<Self, BuildError> {
        let raw: RawDescriptor =
            serde_yaml::from_str(text).map_err(|e| BuildError::Config(e.to_string()))?;
        Self::validate(raw)
    }

    /// Reads and parses a descriptor file. Relative paths inside it are
    /// resolved against the descriptor's directory.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Config`] if the file cannot be read or does not
    /// describe a valid build.
    pub fn from_path(path: &Path) -> Result<Self, BuildError> {
        let text = fs::read_to_string(path)
            .map_err(|e| BuildError::Config(format!("cannot read {}: {e}", path.display())))?;
        let spec = Self::from_yaml_str(&text)?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(spec.resolve_relative_to(base))
    }

    /// Rebases every relative path onto `base`.
    #[must_use]
    pub fn resolve_relative_to(mut self, base: &Path) -> Self {
        let rebase = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };
        self.class_definition = rebase(self.class_definition);
        self.source_directory = rebase(self.source_directory);
        self.output_file = rebase(self.output_file);
        self
    }

    fn validate(raw: RawDescriptor) -> Result<Self, BuildError> {
        let model_class_name = required("ontology", raw.ontology)?;
        let file_extension = required("file_extension", raw.file_extension)?;
        if raw.class_definition.as_os_str().is_empty() {
            return Err(config("`class_definition` must not be empty"));
        }
        if raw.output_file.as_os_str().is_empty() {
            return Err(config("`output_file` must not be empty"));
        }

        // An explicit namespace is used as given, even when empty.
        let namespace = raw
            .namespace
            .map_or_else(|| DEFAULT_NAMESPACE.to_owned(), |ns| ns.trim().to_owned());

        // Handlers run in the listed order; a repeated name runs again.
        let handlers = raw
            .handlers
            .into_iter()
            .map(|h| required("handlers[]", h))
            .collect::<Result<Vec<_>, _>>()?;

        let classes = raw
            .classes
            .into_iter()
            .map(|c| required("classes[]", c))
            .collect::<Result<Vec<_>, _>>()?;

        let mut predicates = Vec::with_capacity(raw.predicates.len());
        for entry in raw.predicates {
            if entry.len() != 1 {
                return Err(config(format!(
                    "each `predicates` entry must map one name to one type tag, found {} keys",
                    entry.len()
                )));
            }
            for (name, type_tag) in entry {
                predicates.push(PredicateDecl {
                    name: required("predicates[] name", name)?,
                    type_tag,
                });
            }
        }

        Ok(Self {
            model_class_name,
            class_definition: raw.class_definition,
            namespace,
            source_directory: raw.source_directory,
            file_extension,
            handlers,
            output_file: raw.output_file,
            classes,
            predicates,
        })
    }
}

fn required(field: &str, value: String) -> Result<String, BuildError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(config(format!("`{field}` must not be empty")))
    } else {
        Ok(trimmed.to_owned())
    }
}

fn config(message: impl Into<String>) -> BuildError {
    BuildError::Config(message.into())
}
