//! Metadata-driven knowledge-graph build engine.
//!
//! The `ontograph-engine` crate turns a directory of structured records (one
//! TOML or JSON file per entity) into an RDF graph. A YAML [`BuildSpec`] names
//! the graph model, the record source, the ordered handler steps and the output
//! file; domain models plug in through a [`PluginRegistry`].
//!
//! # Entry Point
//!
//! ```no_run
//! use std::path::Path;
//! use ontograph_engine::{run_build, BuildSpec, PluginRegistry};
//!
//! let spec = BuildSpec::from_path(Path::new("demos/crypto/crypto.yaml"))?;
//! let registry = PluginRegistry::new(); // register domain models here
//! let report = run_build(&spec, &registry)?;
//! println!("{} triples written to {}", report.total_triples, report.output.display());
//! # Ok::<(), ontograph_engine::BuildError>(())
//! ```
//!
//! # Writing a model
//!
//! A model implements [`GraphModel`]: `create_subject` mints the record's
//! primary [`Entity`], and a static table of [`Step`]s adds triples relative to
//! it. Resource names go through [`encode`] so arbitrary record text yields
//! valid IRIs.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod descriptor;
pub mod encode;
pub mod error;
pub mod graph;
pub mod model;
pub mod orchestrator;
pub mod pipeline;
pub mod plugin;
pub mod record;
pub mod report;
pub mod serializer;
pub mod store;
pub mod walker;

pub use descriptor::{BuildSpec, PredicateDecl};
pub use encode::encode;
pub use error::{BuildError, RecordDecodeError, StepError};
pub use graph::{initialize_schema, Entity, Graph, Namespace};
pub use model::{iris, SchemaTermKind, Term, Triple};
pub use orchestrator::{run_build, BuildState};
pub use pipeline::{GraphModel, Pipeline, Step, StepFn};
pub use plugin::{ModelFactory, PluginEntry, PluginRegistry};
pub use record::{FileFormat, Record};
pub use report::{BuildReport, SkippedRecord};
pub use serializer::OutputFormat;
pub use store::TripleStore;
pub use walker::{RecordWalker, WalkEntry};
