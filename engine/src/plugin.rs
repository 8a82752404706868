//! Graph-model plugin registry.
//!
//! Domains are compiled in and registered at startup under a definition name
//! and a class name. A descriptor selects one with its `class_definition`
//! (matched by file stem, so `ontology/crypto_ontology.py` and
//! `crypto_ontology` name the same definition) and its `ontology` class name.
//! Adding a domain means registering it; the engine itself never changes.

use std::path::Path;

use tracing::debug;

use crate::error::BuildError;
use crate::pipeline::GraphModel;

/// Constructs a fresh model instance.
pub type ModelFactory = fn() -> Box<dyn GraphModel>;

/// A registered model.
#[derive(Clone, Copy)]
pub struct PluginEntry {
    /// Definition name, compared against the descriptor's `class_definition` stem.
    pub definition: &'static str,
    /// Class name, compared against the descriptor's `ontology`.
    pub class_name: &'static str,
    factory: ModelFactory,
}

impl std::fmt::Debug for PluginEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginEntry")
            .field("definition", &self.definition)
            .field("class_name", &self.class_name)
            .finish_non_exhaustive()
    }
}

/// The set of models available to a build.
#[derive(Debug, Clone, Default)]
pub struct PluginRegistry {
    entries: Vec<PluginEntry>,
}

impl PluginRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a model, replacing any earlier entry with the same
    /// definition and class name.
    pub fn register(
        &mut self,
        definition: &'static str,
        class_name: &'static str,
        factory: ModelFactory,
    ) -> &mut Self {
        self.entries
            .retain(|e| !(e.definition == definition && e.class_name == class_name));
        self.entries.push(PluginEntry {
            definition,
            class_name,
            factory,
        });
        self
    }

    /// All registered entries, in registration order.
    #[must_use]
    pub fn entries(&self) -> &[PluginEntry] {
        &self.entries
    }

    /// Instantiates the model `class_name` from the definition at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::PluginLoad`] if no registered entry matches both
    /// the definition and the class name.
    pub fn load(&self, location: &Path, class_name: &str) -> Result<Box<dyn GraphModel>, BuildError> {
        let definition = definition_name(location);
        let entry = self
            .entries
            .iter()
            .find(|e| Some(e.definition) == definition && e.class_name == class_name)
            .ok_or_else(|| BuildError::PluginLoad {
                location: location.to_path_buf(),
                class_name: class_name.to_owned(),
            })?;
        debug!(definition = entry.definition, class_name, "graph model loaded");
        Ok((entry.factory)())
    }
}

fn definition_name(location: &Path) -> Option<&str> {
    location.file_stem().and_then(|stem| stem.to_str())
}
