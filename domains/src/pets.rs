//! Pets and their relationships.
//!
//! One record per animal, keyed by `name` and typed by `type`:
//!
//! ```json
//! {"name": "Rex", "type": "Dog", "siblings": ["Fido"], "caregiver_for": ["Tom"]}
//! ```

use ontograph_engine::{Entity, Graph, GraphModel, Record, Step, StepError, Term};

/// Definition name descriptors use in `class_definition`.
pub const DEFINITION: &str = "pet_ontology";
/// Class name descriptors use in `ontology`.
pub const CLASS_NAME: &str = "PetOntology";

const STEPS: &[Step] = &[
    Step::new("name", name),
    Step::new("siblings", siblings),
    Step::new("caregiver_for", caregiver_for),
];

/// Animals typed by species, with names, siblings and care relationships.
#[derive(Debug, Default)]
pub struct PetOntology;

impl GraphModel for PetOntology {
    fn class_name(&self) -> &'static str {
        CLASS_NAME
    }

    fn steps(&self) -> &'static [Step] {
        STEPS
    }

    fn create_subject(&self, graph: &mut Graph, record: &Record) -> Result<Entity, StepError> {
        let item = Entity::new(graph.resource(record.require_str("name")?));
        let item_type = graph.resource(record.require_str("type")?);
        graph.add_type(item.iri(), &item_type);
        Ok(item)
    }
}

fn name(graph: &mut Graph, item: &Entity, record: &Record) -> Result<(), StepError> {
    if let Some(name) = record.str_field("name")? {
        let predicate = graph.term("name");
        graph.add(item.iri(), &predicate, Term::literal(name));
    }
    Ok(())
}

fn siblings(graph: &mut Graph, item: &Entity, record: &Record) -> Result<(), StepError> {
    link_all(graph, item, record, "siblings", "has_sibling")
}

fn caregiver_for(graph: &mut Graph, item: &Entity, record: &Record) -> Result<(), StepError> {
    link_all(graph, item, record, "caregiver_for", "caregiver_for")
}

fn link_all(
    graph: &mut Graph,
    item: &Entity,
    record: &Record,
    field: &str,
    predicate: &str,
) -> Result<(), StepError> {
    let Some(targets) = record.str_list(field)? else {
        return Ok(());
    };
    let predicate = graph.term(predicate);
    for target in targets {
        let target = graph.resource(target);
        graph.add(item.iri(), &predicate, Term::iri(target));
    }
    Ok(())
}
