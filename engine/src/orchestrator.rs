//! The build state machine.
//!
//! ```text
//! Idle → SchemaInitialized → (EntityCreated → StepsApplied)* → Exported → Done
//! ```
//!
//! Everything that can be checked without reading records is checked first:
//! model lookup, step resolution and walker preconditions. Records are then
//! processed one at a time, in walk order. The graph is written only after the
//! last record, so a failing build leaves no output behind.

use std::fmt;

use tracing::{debug, info, warn};

use crate::descriptor::BuildSpec;
use crate::error::BuildError;
use crate::pipeline::Pipeline;
use crate::plugin::PluginRegistry;
use crate::report::{BuildReport, SkippedRecord};
use crate::walker::RecordWalker;

/// Build progress, as logged at each transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    /// Nothing has run yet.
    Idle,
    /// Namespace bound and schema triples added.
    SchemaInitialized,
    /// The current record's entity exists.
    EntityCreated,
    /// Every step ran on the current record.
    StepsApplied,
    /// The graph has been written.
    Exported,
    /// The build finished.
    Done,
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BuildState::Idle => "idle",
            BuildState::SchemaInitialized => "schema-initialized",
            BuildState::EntityCreated => "entity-created",
            BuildState::StepsApplied => "steps-applied",
            BuildState::Exported => "exported",
            BuildState::Done => "done",
        };
        f.write_str(name)
    }
}

/// Runs a complete build described by `spec` using the models in `registry`.
///
/// # Errors
///
/// Returns the first fatal [`BuildError`]. Records that fail to decode are not
/// errors; they are listed in [`BuildReport::skipped`].
pub fn run_build(spec: &BuildSpec, registry: &PluginRegistry) -> Result<BuildReport, BuildError> {
    let mut state = BuildState::Idle;
    debug!(%state, descriptor = ?spec, "starting build");

    let model = registry.load(&spec.class_definition, &spec.model_class_name)?;
    let pipeline = Pipeline::resolve(model.as_ref(), &spec.handlers)?;
    let walker = RecordWalker::new(&spec.source_directory, &spec.file_extension)?;

    let mut graph = model.bind_namespace(spec);
    model.initialize_schema(&mut graph, spec)?;
    let schema_triples = graph.store().len();
    state = BuildState::SchemaInitialized;
    info!(%state, model = model.class_name(), namespace = graph.namespace().iri(), schema_triples);

    let mut records_processed = 0usize;
    let mut skipped = Vec::new();
    for entry in walker {
        let record = match entry.record {
            Ok(record) => record,
            Err(err) => {
                warn!(path = %entry.path.display(), error = %err, "skipping undecodable record");
                skipped.push(SkippedRecord {
                    path: entry.path,
                    message: err.message,
                });
                continue;
            }
        };

        let entity = model
            .create_subject(&mut graph, &record)
            .map_err(|source| BuildError::Step {
                path: entry.path.clone(),
                step: "create_subject".to_owned(),
                source,
            })?;
        state = BuildState::EntityCreated;
        debug!(%state, path = %entry.path.display(), entity = entity.iri());

        pipeline.apply(&mut graph, &entity, &record)?;
        state = BuildState::StepsApplied;
        debug!(%state, path = %entry.path.display());
        records_processed += 1;
    }

    let store = graph.into_store();
    let format = store.export(&spec.output_file)?;
    state = BuildState::Exported;
    info!(
        %state,
        output = %spec.output_file.display(),
        %format,
        triples = store.len(),
        records = records_processed,
        skipped = skipped.len()
    );

    let report = BuildReport {
        model: model.class_name().to_owned(),
        records_processed,
        skipped,
        schema_triples,
        total_triples: store.len(),
        output: spec.output_file.clone(),
        format,
    };
    state = BuildState::Done;
    debug!(%state, "build finished");
    Ok(report)
}
