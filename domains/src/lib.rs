//! Reference graph models for ontograph.
//!
//! | Definition | Class | Steps |
//! |------------|-------|-------|
//! | `crypto_ontology` | `CryptoOntology` | `sub_ecosystems`, `github_organizations`, `repo`, `title` |
//! | `pet_ontology` | `PetOntology` | `name`, `siblings`, `caregiver_for` |
//!
//! # Entry Point
//!
//! ```
//! let registry = ontograph_domains::registry();
//! assert_eq!(registry.entries().len(), 2);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod crypto;
pub mod pets;

use ontograph_engine::{GraphModel, PluginRegistry};

pub use crypto::CryptoOntology;
pub use pets::PetOntology;

/// Registers every reference model into `registry`.
pub fn register_all(registry: &mut PluginRegistry) {
    registry
        .register(crypto::DEFINITION, crypto::CLASS_NAME, crypto_model)
        .register(pets::DEFINITION, pets::CLASS_NAME, pet_model);
}

/// Returns a registry holding every reference model.
#[must_use]
pub fn registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    register_all(&mut registry);
    registry
}

fn crypto_model() -> Box<dyn GraphModel> {
    Box::new(CryptoOntology)
}

fn pet_model() -> Box<dyn GraphModel> {
    Box::new(PetOntology)
}
