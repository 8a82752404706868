//! The graph-model contract and its resolved step pipeline.
//!
//! A [`GraphModel`] is the per-domain extraction logic. It declares its steps
//! as a static table; the descriptor's `handlers` list is resolved against
//! that table once, before any record is read, into a [`Pipeline`].

use std::fmt;

use crate::descriptor::BuildSpec;
use crate::error::{BuildError, StepError};
use crate::graph::{self, Entity, Graph, Namespace};
use crate::record::Record;

/// Signature of a named step. Steps only add triples relative to `entity`.
pub type StepFn = fn(&mut Graph, &Entity, &Record) -> Result<(), StepError>;

/// A named step in a model's capability table.
#[derive(Clone, Copy)]
pub struct Step {
    /// Handler name as written in descriptors (e.g. `"sub_ecosystems"`).
    pub name: &'static str,
    /// The step body.
    pub run: StepFn,
}

impl Step {
    /// Creates a table entry.
    #[must_use]
    pub const fn new(name: &'static str, run: StepFn) -> Self {
        Self { name, run }
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Domain-specific extraction logic driven by the build orchestrator.
///
/// Implementations must not keep per-record state: the entity returned by
/// [`create_subject`](GraphModel::create_subject) is the only link between a
/// record's steps, and it is passed explicitly.
pub trait GraphModel {
    /// The class name descriptors use to select this model.
    fn class_name(&self) -> &'static str;

    /// Every step this model supports.
    fn steps(&self) -> &'static [Step];

    /// Creates the graph for a build, bound to the descriptor's namespace.
    fn bind_namespace(&self, spec: &BuildSpec) -> Graph {
        Graph::new(Namespace::new(spec.namespace.clone()))
    }

    /// Adds the descriptor's schema classes and predicates.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::Config`] for an unknown predicate type tag.
    fn initialize_schema(&self, graph: &mut Graph, spec: &BuildSpec) -> Result<(), BuildError> {
        graph::initialize_schema(graph, spec)
    }

    /// Mints (and types) the primary entity of `record`.
    ///
    /// # Errors
    ///
    /// Returns [`StepError`] if the record lacks the fields that identify it.
    fn create_subject(&self, graph: &mut Graph, record: &Record) -> Result<Entity, StepError>;
}

/// A descriptor's handler list resolved against a model's step table.
#[derive(Debug, Clone)]
pub struct Pipeline {
    steps: Vec<Step>,
}

impl Pipeline {
    /// Resolves `handlers`, in order, against `model`'s step table.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::UnknownStep`] for the first handler the model
    /// does not declare.
    pub fn resolve(model: &dyn GraphModel, handlers: &[String]) -> Result<Self, BuildError> {
        let table = model.steps();
        let steps = handlers
            .iter()
            .map(|name| {
                table
                    .iter()
                    .find(|step| step.name == name.as_str())
                    .copied()
                    .ok_or_else(|| BuildError::UnknownStep {
                        model: model.class_name().to_owned(),
                        step: name.clone(),
                        available: table.iter().map(|s| s.name).collect::<Vec<_>>().join(", "),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { steps })
    }

    /// The resolved steps in execution order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Runs every step against one record.
    ///
    /// # Errors
    ///
    /// Returns the first step failure, tagged with the step name and record path.
    pub fn apply(&self, graph: &mut Graph, entity: &Entity, record: &Record) -> Result<(), BuildError> {
        for step in &self.steps {
            (step.run)(graph, entity, record).map_err(|source| BuildError::Step {
                path: record.path().to_path_buf(),
                step: step.name.to_owned(),
                source,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Term;

    struct Tagger;

    fn tag(graph: &mut Graph, entity: &Entity, record: &Record) -> Result<(), StepError> {
        if let Some(tag) = record.str_field("tag")? {
            let predicate = graph.term("tag");
            graph.add(entity.iri(), &predicate, Term::literal(tag));
        }
        Ok(())
    }

    fn fail(_: &mut Graph, _: &Entity, _: &Record) -> Result<(), StepError> {
        Err(StepError::MissingField("anything".to_owned()))
    }

    const STEPS: &[Step] = &[Step::new("tag", tag), Step::new("fail", fail)];

    impl GraphModel for Tagger {
        fn class_name(&self) -> &'static str {
            "Tagger"
        }

        fn steps(&self) -> &'static [Step] {
            STEPS
        }

        fn create_subject(&self, graph: &mut Graph, record: &Record) -> Result<Entity, StepError> {
            Ok(Entity::new(graph.resource(record.require_str("id")?)))
        }
    }

    fn record(json: &str) -> Record {
        crate::record::FileFormat::Json
            .decode(std::path::Path::new("r.json"), json)
            .unwrap()
    }

    #[test]
    fn resolves_in_descriptor_order() {
        let pipeline = Pipeline::resolve(&Tagger, &["fail".to_owned(), "tag".to_owned()]).unwrap();
        let names: Vec<_> = pipeline.steps().iter().map(|s| s.name).collect();
        assert_eq!(names, ["fail", "tag"]);
    }

    #[test]
    fn repeated_handler_resolves_twice() {
        let handlers = ["tag".to_owned(), "tag".to_owned()];
        let pipeline = Pipeline::resolve(&Tagger, &handlers).unwrap();
        assert_eq!(pipeline.steps().len(), 2);
    }

    #[test]
    fn unknown_step_fails_fast() {
        let err = Pipeline::resolve(&Tagger, &["tag".to_owned(), "colour".to_owned()]).unwrap_err();
        match err {
            BuildError::UnknownStep { model, step, available } => {
                assert_eq!(model, "Tagger");
                assert_eq!(step, "colour");
                assert_eq!(available, "tag, fail");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn absent_field_is_a_no_op() {
        let mut graph = Graph::new(Namespace::new("http://example.org/"));
        let pipeline = Pipeline::resolve(&Tagger, &["tag".to_owned()]).unwrap();
        let record = record(r#"{"id": "a"}"#);
        let entity = Tagger.create_subject(&mut graph, &record).unwrap();
        pipeline.apply(&mut graph, &entity, &record).unwrap();
        assert!(graph.store().is_empty());
    }

    #[test]
    fn step_failure_names_step_and_path() {
        let mut graph = Graph::new(Namespace::new("http://example.org/"));
        let pipeline = Pipeline::resolve(&Tagger, &["tag".to_owned(), "fail".to_owned()]).unwrap();
        let record = record(r#"{"id": "a", "tag": "x"}"#);
        let entity = Entity::new("http://example.org/a");
        let err = pipeline.apply(&mut graph, &entity, &record).unwrap_err();
        assert!(matches!(err, BuildError::Step { ref step, .. } if step == "fail"));
        // Steps that ran before the failure have already written.
        assert_eq!(graph.store().len(), 1);
    }
}
