//! End-to-end builds of the reference models from descriptors on disk.

use std::fs;
use std::path::Path;

use ontograph_engine::{run_build, BuildError, BuildSpec, StepError};
use sophia_api::source::TripleSource;

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn crypto_descriptor(root: &Path, handlers: &str, output: &str) -> BuildSpec {
    let text = format!(
        "ontology: CryptoOntology\n\
         class_definition: ontology/crypto_ontology.py\n\
         namespace: http://example.org/\n\
         source_directory: data\n\
         file_extension: toml\n\
         handlers: {handlers}\n\
         output_file: {output}\n\
         classes: [Ecosystems, Organizations, Repositories]\n\
         predicates:\n  - sub_ecosystem_of: OWL.ObjectProperty\n  - has_title: OWL.DatatypeProperty\n"
    );
    write(root, "crypto.yaml", &text);
    BuildSpec::from_path(&root.join("crypto.yaml")).unwrap()
}

fn nt_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_owned)
        .collect()
}

#[test]
fn sub_ecosystems_link_back_to_parent() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "data/alpha.toml", "title = \"Alpha\"\nsub_ecosystems = [\"Beta\"]\n");
    write(dir.path(), "data/beta.toml", "title = \"Beta\"\n");

    let spec = crypto_descriptor(dir.path(), "[sub_ecosystems, title]", "graph.nt");
    let report = run_build(&spec, &ontograph_domains::registry()).unwrap();
    assert_eq!(report.records_processed, 2);
    assert!(report.is_clean());

    let lines = nt_lines(&dir.path().join("graph.nt"));
    let expected = [
        "<http://example.org/Alpha> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.org/Ecosystems> .",
        "<http://example.org/Beta> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.org/Ecosystems> .",
        "<http://example.org/Beta> <http://example.org/sub_ecosystem_of> <http://example.org/Alpha> .",
        "<http://example.org/Alpha> <http://example.org/has_title> \"Alpha\" .",
        "<http://example.org/Beta> <http://example.org/has_title> \"Beta\" .",
        "<http://example.org/Ecosystems> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://www.w3.org/2000/01/rdf-schema#Class> .",
    ];
    for line in expected {
        assert!(lines.iter().any(|l| l == line), "missing: {line}");
    }
    // Beta's type triple is asserted twice (as a sub-ecosystem and as a record)
    // but stored once.
    let beta_types = lines
        .iter()
        .filter(|l| l.starts_with("<http://example.org/Beta> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type>"))
        .count();
    assert_eq!(beta_types, 1);
    assert!(!lines
        .iter()
        .any(|l| l.starts_with("<http://example.org/Alpha> <http://example.org/sub_ecosystem_of>")));
}

#[test]
fn repeated_handler_adds_nothing_new() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "data/alpha.toml", "title = \"Alpha\"\nsub_ecosystems = [\"Beta\"]\n");

    let once = crypto_descriptor(dir.path(), "[sub_ecosystems, title]", "once.nt");
    let twice = crypto_descriptor(dir.path(), "[title, sub_ecosystems, title]", "twice.nt");
    let registry = ontograph_domains::registry();
    let first = run_build(&once, &registry).unwrap();
    let second = run_build(&twice, &registry).unwrap();
    assert_eq!(first.total_triples, second.total_triples);
    assert_eq!(
        fs::read_to_string(dir.path().join("once.nt")).unwrap(),
        fs::read_to_string(dir.path().join("twice.nt")).unwrap()
    );
}

#[test]
fn repository_url_with_space_stays_parseable() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "data/odd.toml",
        "title = \"Odd\"\n\n[[repo]]\nurl = \"https://github.com/odd/my repo\"\n",
    );

    let spec = crypto_descriptor(dir.path(), "[repo, title]", "graph.ttl");
    let report = run_build(&spec, &ontograph_domains::registry()).unwrap();

    let ttl = fs::read_to_string(dir.path().join("graph.ttl")).unwrap();
    assert!(ttl.contains("<https://github.com/odd/my%20repo>"));
    let mut count = 0usize;
    sophia_turtle::parser::turtle::parse_str(&ttl)
        .for_each_triple(|_| count += 1)
        .unwrap();
    assert_eq!(count, report.total_triples);
}

#[test]
fn turtle_output_parses() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "data/eth.toml",
        r#"
        title = "Ethereum Classic"
        sub_ecosystems = ["ETC Cooperative"]
        github_organizations = ["https://github.com/ethereumclassic"]

        [[repo]]
        url = "https://github.com/ethereumclassic/core-geth"
        "#,
    );

    let spec = crypto_descriptor(
        dir.path(),
        "[sub_ecosystems, github_organizations, repo, title]",
        "out/graph.ttl",
    );
    fs::create_dir_all(dir.path().join("out")).unwrap();
    let report = run_build(&spec, &ontograph_domains::registry()).unwrap();

    let ttl = fs::read_to_string(dir.path().join("out/graph.ttl")).unwrap();
    assert!(ttl.contains("ns:Ethereum_Classic"));
    let mut count = 0usize;
    sophia_turtle::parser::turtle::parse_str(&ttl)
        .for_each_triple(|_| count += 1)
        .unwrap();
    assert_eq!(count, report.total_triples);
}

#[test]
fn decode_failure_does_not_block_later_records() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "data/a.toml", "title = \"Alpha\"\n");
    write(dir.path(), "data/b.toml", "title = [unterminated\n");
    write(dir.path(), "data/nested/c.toml", "title = \"Gamma\"\n");

    let spec = crypto_descriptor(dir.path(), "[title]", "graph.nt");
    let report = run_build(&spec, &ontograph_domains::registry()).unwrap();
    assert_eq!(report.records_processed, 2);
    assert_eq!(report.skipped_count(), 1);
    assert!(report.skipped[0].path.ends_with("b.toml"));

    let nt = fs::read_to_string(dir.path().join("graph.nt")).unwrap();
    assert!(nt.contains("\"Gamma\""));
}

#[test]
fn missing_title_names_the_record() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "data/untitled.toml", "sub_ecosystems = [\"Beta\"]\n");

    let spec = crypto_descriptor(dir.path(), "[title]", "graph.nt");
    match run_build(&spec, &ontograph_domains::registry()).unwrap_err() {
        BuildError::Step { path, step, source } => {
            assert!(path.ends_with("untitled.toml"));
            assert_eq!(step, "create_subject");
            assert_eq!(source, StepError::MissingField("title".to_owned()));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!dir.path().join("graph.nt").exists());
}

#[test]
fn pets_build_from_json() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "pets.yaml",
        "ontology: PetOntology\n\
         class_definition: pet_ontology\n\
         namespace: http://example.org/pets/\n\
         source_directory: animals\n\
         file_extension: .json\n\
         handlers: [name, siblings, caregiver_for]\n\
         output_file: pets.nt\n\
         classes: [Dog, Cat, Person]\n",
    );
    write(
        dir.path(),
        "animals/rex.json",
        r#"{"name": "Rex", "type": "Dog", "siblings": ["Fido"], "caregiver_for": ["Tom"]}"#,
    );
    write(dir.path(), "animals/tom.json", r#"{"name": "Tom", "type": "Person"}"#);

    let spec = BuildSpec::from_path(&dir.path().join("pets.yaml")).unwrap();
    let report = run_build(&spec, &ontograph_domains::registry()).unwrap();
    assert_eq!(report.model, "PetOntology");
    assert_eq!(report.schema_triples, 3);
    assert_eq!(report.records_processed, 2);

    let lines = nt_lines(&dir.path().join("pets.nt"));
    assert!(lines.contains(
        &"<http://example.org/pets/Rex> <http://example.org/pets/caregiver_for> <http://example.org/pets/Tom> ."
            .to_owned()
    ));
    assert!(lines.contains(
        &"<http://example.org/pets/Tom> <http://www.w3.org/1999/02/22-rdf-syntax-ns#type> <http://example.org/pets/Person> ."
            .to_owned()
    ));
}

#[test]
fn unknown_handler_lists_available_steps() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "data/a.toml", "title = \"Alpha\"\n");

    let spec = crypto_descriptor(dir.path(), "[title, tokenomics]", "graph.nt");
    match run_build(&spec, &ontograph_domains::registry()).unwrap_err() {
        BuildError::UnknownStep { model, step, available } => {
            assert_eq!(model, "CryptoOntology");
            assert_eq!(step, "tokenomics");
            assert!(available.contains("sub_ecosystems"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn demo_descriptors_select_registered_models() {
    let demos = Path::new(env!("CARGO_MANIFEST_DIR")).join("../demos");
    let registry = ontograph_domains::registry();
    for (descriptor, class) in [("crypto/crypto.yaml", "CryptoOntology"), ("pets/pets.yaml", "PetOntology")] {
        let spec = BuildSpec::from_path(&demos.join(descriptor)).unwrap();
        let model = registry
            .load(&spec.class_definition, &spec.model_class_name)
            .unwrap();
        assert_eq!(model.class_name(), class);
    }
}
