//! Crypto ecosystems.
//!
//! One record per ecosystem, keyed by `title`:
//!
//! ```toml
//! title = "Ethereum"
//! sub_ecosystems = ["Optimism", "Arbitrum"]
//! github_organizations = ["https://github.com/ethereum"]
//!
//! [[repo]]
//! url = "https://github.com/ethereum/go-ethereum"
//! ```

use ontograph_engine::{Entity, Graph, GraphModel, Record, Step, StepError, Term};

/// Definition name descriptors use in `class_definition`.
pub const DEFINITION: &str = "crypto_ontology";
/// Class name descriptors use in `ontology`.
pub const CLASS_NAME: &str = "CryptoOntology";

const GITHUB_PREFIX: &str = "https://github.com/";

const ECOSYSTEMS: &str = "Ecosystems";
const ORGANIZATIONS: &str = "Organizations";
const REPOSITORIES: &str = "Repositories";

const STEPS: &[Step] = &[
    Step::new("sub_ecosystems", sub_ecosystems),
    Step::new("github_organizations", github_organizations),
    Step::new("repo", repo),
    Step::new("title", title),
];

/// Ecosystems, their sub-ecosystems, GitHub organizations and repositories.
#[derive(Debug, Default)]
pub struct CryptoOntology;

impl GraphModel for CryptoOntology {
    fn class_name(&self) -> &'static str {
        CLASS_NAME
    }

    fn steps(&self) -> &'static [Step] {
        STEPS
    }

    fn create_subject(&self, graph: &mut Graph, record: &Record) -> Result<Entity, StepError> {
        let ecosystem = Entity::new(graph.resource(record.require_str("title")?));
        let class = graph.term(ECOSYSTEMS);
        graph.add_type(ecosystem.iri(), &class);
        Ok(ecosystem)
    }
}

/// Returns the organization name of a `https://github.com/<org>` URL: the last
/// path segment. Any other form is no match.
#[must_use]
pub fn github_org(url: &str) -> Option<&str> {
    if !url.starts_with(GITHUB_PREFIX) {
        return None;
    }
    url.rsplit('/').next()
}

fn sub_ecosystems(graph: &mut Graph, ecosystem: &Entity, record: &Record) -> Result<(), StepError> {
    let Some(names) = record.str_list("sub_ecosystems")? else {
        return Ok(());
    };
    let class = graph.term(ECOSYSTEMS);
    let sub_ecosystem_of = graph.term("sub_ecosystem_of");
    for name in names {
        let sub = graph.resource(name);
        graph.add_type(&sub, &class);
        graph.add(&sub, &sub_ecosystem_of, Term::iri(ecosystem.iri()));
    }
    Ok(())
}

fn github_organizations(graph: &mut Graph, ecosystem: &Entity, record: &Record) -> Result<(), StepError> {
    let Some(urls) = record.str_list("github_organizations")? else {
        return Ok(());
    };
    let class = graph.term(ORGANIZATIONS);
    let has_organization = graph.term("has_organization");
    let has_url = graph.term("has_url");
    for url in urls {
        let Some(name) = github_org(url) else {
            continue;
        };
        let organization = graph.resource(name);
        graph.add_type(&organization, &class);
        graph.add(ecosystem.iri(), &has_organization, Term::iri(&organization));
        graph.add(&organization, &has_url, Term::iri(url));
    }
    Ok(())
}

fn repo(graph: &mut Graph, ecosystem: &Entity, record: &Record) -> Result<(), StepError> {
    let Some(repos) = record.table_list("repo")? else {
        return Ok(());
    };
    let class = graph.term(REPOSITORIES);
    let has_repository = graph.term("has_repository");
    for repo in repos {
        let url = match repo.get("url") {
            Some(value) => value.as_str().ok_or_else(|| StepError::FieldType {
                field: "repo.url".to_owned(),
                expected: "a string",
            })?,
            None => return Err(StepError::MissingField("repo.url".to_owned())),
        };
        graph.add_type(url, &class);
        graph.add(ecosystem.iri(), &has_repository, Term::iri(url));
    }
    Ok(())
}

fn title(graph: &mut Graph, ecosystem: &Entity, record: &Record) -> Result<(), StepError> {
    if let Some(title) = record.str_field("title")? {
        let has_title = graph.term("has_title");
        graph.add(ecosystem.iri(), &has_title, Term::literal(title));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ontograph_engine::{iris, FileFormat, Namespace, Pipeline};
    use std::path::Path;

    const NS: &str = "http://example.org/";

    fn record(text: &str) -> Record {
        FileFormat::Toml.decode(Path::new("eco.toml"), text).unwrap()
    }

    fn run(text: &str, handlers: &[&str]) -> Graph {
        let model = CryptoOntology;
        let mut graph = Graph::new(Namespace::new(NS));
        let handlers: Vec<String> = handlers.iter().map(|h| (*h).to_owned()).collect();
        let pipeline = Pipeline::resolve(&model, &handlers).unwrap();
        let record = record(text);
        let entity = model.create_subject(&mut graph, &record).unwrap();
        pipeline.apply(&mut graph, &entity, &record).unwrap();
        graph
    }

    #[test]
    fn github_org_requires_exact_prefix() {
        assert_eq!(github_org("https://github.com/ethereum"), Some("ethereum"));
        assert_eq!(github_org("http://github.com/ethereum"), None);
        assert_eq!(github_org("https://gitlab.com/ethereum"), None);
        assert_eq!(github_org("github.com/ethereum"), None);
    }

    #[test]
    fn subject_is_typed_ecosystem() {
        let graph = run("title = \"Bitcoin Cash\"", &[]);
        assert!(graph.store().contains(
            "http://example.org/Bitcoin_Cash",
            iris::RDF_TYPE,
            &Term::iri("http://example.org/Ecosystems")
        ));
    }

    #[test]
    fn organizations_and_repositories() {
        let graph = run(
            r#"
            title = "Ethereum"
            github_organizations = ["https://github.com/ethereum", "https://example.com/not-github"]

            [[repo]]
            url = "https://github.com/ethereum/go-ethereum"
            "#,
            &["github_organizations", "repo"],
        );
        let store = graph.store();
        assert!(store.contains(
            "http://example.org/Ethereum",
            "http://example.org/has_organization",
            &Term::iri("http://example.org/ethereum")
        ));
        assert!(store.contains(
            "http://example.org/ethereum",
            "http://example.org/has_url",
            &Term::iri("https://github.com/ethereum")
        ));
        assert!(store.contains(
            "https://github.com/ethereum/go-ethereum",
            iris::RDF_TYPE,
            &Term::iri("http://example.org/Repositories")
        ));
        assert!(store.contains(
            "http://example.org/Ethereum",
            "http://example.org/has_repository",
            &Term::iri("https://github.com/ethereum/go-ethereum")
        ));
        // entity type + org (type, has_organization, has_url) + repo (type, has_repository)
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn absent_fields_add_nothing() {
        let graph = run(
            "title = \"Lonely\"",
            &["sub_ecosystems", "github_organizations", "repo"],
        );
        assert_eq!(graph.store().len(), 1);
    }

    #[test]
    fn repo_without_url_is_an_error() {
        let model = CryptoOntology;
        let mut graph = Graph::new(Namespace::new(NS));
        let record = record("title = \"X\"\n[[repo]]\nname = \"core\"");
        let entity = model.create_subject(&mut graph, &record).unwrap();
        assert_eq!(
            repo(&mut graph, &entity, &record),
            Err(StepError::MissingField("repo.url".to_owned()))
        );
    }
}
