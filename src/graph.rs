//! Co-authorship graph construction.
//!
//! Each document contributes one edge per pair of its resolved authors and
//! one self edge per author, so single-author documents still show up. Nodes
//! are the distinct identities seen across all documents.
//!
//! This module only builds the in-memory graph. Writing it to CSV or any
//! other file format is left to the caller; the graph is `Serialize`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::directory::SurnameLookup;
use crate::error::ResolveResult;
use crate::identity::{IdentityKey, ResolvedIdentity};
use crate::name::AuthorName;
use crate::resolver::NameResolver;

/// A document and the author names printed on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Identifier used in diagnostics and on edges, e.g. `"RFC0791"`.
    pub id: String,

    /// Document title; empty when unknown.
    #[serde(default)]
    pub title: String,

    /// Publication year.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// Publication stream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,

    /// Source draft name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<String>,

    #[serde(default)]
    pub authors: Vec<String>,
}

impl Document {
    /// Creates a document with the given authors and no other metadata.
    #[must_use]
    pub fn new<I, A>(id: impl Into<String>, authors: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            id: id.into(),
            title: String::new(),
            year: None,
            stream: None,
            draft: None,
            authors: authors.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the publication year.
    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

/// A distinct author identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Directory id or synthetic id.
    pub id: IdentityKey,
    /// Display name from the latest sighting.
    pub label: String,
    /// Known only for directory matches.
    pub affiliation: Option<String>,
}

/// One co-authorship link contributed by a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// The author listed first in the document.
    pub target: IdentityKey,
    /// The author listed later; equal to `target` on a self edge.
    pub source: IdentityKey,
    /// Always 1; duplicate links are kept as separate edges.
    pub weight: u32,
    /// Publication year of the document.
    pub year: Option<i32>,
    /// Id of the contributing document.
    pub document: String,
    /// Publication stream, e.g. `"IETF"`.
    pub stream: Option<String>,
    /// Document title.
    pub title: String,
    /// Draft name the document was published from.
    pub draft: Option<String>,
}

impl Edge {
    /// Returns true for an author's link to themself.
    #[must_use]
    pub fn is_self_edge(&self) -> bool {
        self.target == self.source
    }
}

/// Nodes and edges accumulated over a set of documents.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CoauthorGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    #[serde(skip)]
    node_index: HashMap<IdentityKey, usize>,
}

impl CoauthorGraph {
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes in first-seen order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Looks up a node by key.
    #[must_use]
    pub fn node(&self, key: &IdentityKey) -> Option<&Node> {
        self.node_index.get(key).map(|&i| &self.nodes[i])
    }

    /// Adds one document's resolved authors, in author order.
    pub fn add_document(&mut self, document: &Document, authors: &[ResolvedIdentity]) {
        let edge = |target: IdentityKey, source: IdentityKey| Edge {
            target,
            source,
            weight: 1,
            year: document.year,
            document: document.id.clone(),
            stream: document.stream.clone(),
            title: document.title.clone(),
            draft: document.draft.clone(),
        };

        for (i, first) in authors.iter().enumerate() {
            for second in &authors[i + 1..] {
                self.edges.push(edge(first.key(), second.key()));
            }
        }

        for author in authors {
            let key = author.key();
            self.edges.push(edge(key.clone(), key));
            self.upsert_node(author);
        }
    }

    // Later sightings overwrite the label; position stays where first seen.
    fn upsert_node(&mut self, identity: &ResolvedIdentity) {
        let node = Node {
            id: identity.key(),
            label: identity.display_name().to_string(),
            affiliation: identity.affiliation().map(str::to_string),
        };
        match self.node_index.get(&node.id) {
            Some(&i) => self.nodes[i] = node,
            None => {
                self.node_index.insert(node.id.clone(), self.nodes.len());
                self.nodes.push(node);
            }
        }
    }
}

/// Resolves document authors and feeds them into a [`CoauthorGraph`].
#[derive(Debug)]
pub struct GraphBuilder<'r, L, S> {
    resolver: &'r NameResolver<L, S>,
    graph: CoauthorGraph,
    documents: usize,
    skipped: usize,
}

impl<'r, L: SurnameLookup, S: DiagnosticSink> GraphBuilder<'r, L, S> {
    /// Starts an empty graph.
    pub fn new(resolver: &'r NameResolver<L, S>) -> Self {
        Self {
            resolver,
            graph: CoauthorGraph::new(),
            documents: 0,
            skipped: 0,
        }
    }

    /// Resolves every author of `document` and records its edges.
    ///
    /// Author names that cannot be parsed (empty or whitespace-only) are
    /// skipped and reported as `InvalidAuthor` diagnostics. All remaining
    /// authors are resolved before the graph is touched, so a lookup failure
    /// leaves no partial edges behind.
    ///
    /// # Errors
    /// `Lookup` if the directory query fails.
    pub fn add_document(&mut self, document: &Document) -> ResolveResult<()> {
        let mut authors = Vec::with_capacity(document.authors.len());
        let mut skipped = 0;
        for raw in &document.authors {
            match AuthorName::parse(raw.as_str()) {
                Ok(name) => authors.push(self.resolver.resolve(&name, &document.id)?),
                Err(err) => {
                    self.resolver.sink().emit(&Diagnostic::InvalidAuthor {
                        name: raw.clone(),
                        document: document.id.clone(),
                        reason: err.to_string(),
                    });
                    skipped += 1;
                }
            }
        }

        self.graph.add_document(document, &authors);
        self.documents += 1;
        self.skipped += skipped;
        debug!(document = %document.id, authors = authors.len(), "document added to graph");
        Ok(())
    }

    /// Adds each document in turn, stopping at the first error.
    ///
    /// # Errors
    /// As for [`Self::add_document`].
    pub fn add_documents<'d>(
        &mut self,
        documents: impl IntoIterator<Item = &'d Document>,
    ) -> ResolveResult<()> {
        for document in documents {
            self.add_document(document)?;
        }
        Ok(())
    }

    /// Number of documents added so far.
    #[must_use]
    pub const fn document_count(&self) -> usize {
        self.documents
    }

    /// Number of author names skipped as unparseable.
    #[must_use]
    pub const fn skipped_authors(&self) -> usize {
        self.skipped
    }

    /// Finishes and returns the graph.
    #[must_use]
    pub fn finish(self) -> CoauthorGraph {
        self.graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{SyntheticId, SyntheticIdentity};
    use crate::person::{Person, PersonId};

    fn person(id: u64, name: &str) -> ResolvedIdentity {
        ResolvedIdentity::Directory(Person::new(id, name))
    }

    fn synthetic(name: &str) -> ResolvedIdentity {
        ResolvedIdentity::Synthetic(SyntheticIdentity::from_name(&AuthorName::parse(name).unwrap(), "?"))
    }

    fn key(id: u64) -> IdentityKey {
        IdentityKey::Person(PersonId::new(id))
    }

    #[test]
    fn test_pairs_and_self_edges() {
        let mut graph = CoauthorGraph::new();
        let doc = Document::new("RFC0001", ["a", "b", "c"]).with_year(1969);
        graph.add_document(&doc, &[person(1, "A"), person(2, "B"), person(3, "C")]);

        let pairs: Vec<(IdentityKey, IdentityKey)> = graph
            .edges()
            .iter()
            .filter(|e| !e.is_self_edge())
            .map(|e| (e.target.clone(), e.source.clone()))
            .collect();
        assert_eq!(pairs, vec![(key(1), key(2)), (key(1), key(3)), (key(2), key(3))]);

        assert_eq!(graph.edges().iter().filter(|e| e.is_self_edge()).count(), 3);
        assert!(graph.edges().iter().all(|e| e.weight == 1 && e.year == Some(1969)));
        assert_eq!(graph.nodes().len(), 3);
    }

    #[test]
    fn test_single_author_gets_self_edge() {
        let mut graph = CoauthorGraph::new();
        graph.add_document(&Document::new("RFC0002", ["z"]), &[synthetic("Z Xu")]);
        assert_eq!(graph.edges().len(), 1);
        assert!(graph.edges()[0].is_self_edge());

        let node = graph
            .node(&IdentityKey::Synthetic(SyntheticId::derive("Z Xu", "?")))
            .unwrap();
        assert_eq!(node.label, "Z Xu");
        assert!(node.affiliation.is_none());
    }

    #[test]
    fn test_nodes_deduplicate_and_keep_first_position() {
        let mut graph = CoauthorGraph::new();
        graph.add_document(&Document::new("D1", ["a", "b"]), &[person(1, "Ann"), person(2, "Bo")]);
        graph.add_document(&Document::new("D2", ["b"]), &[person(2, "Bo Renamed")]);

        assert_eq!(graph.nodes().len(), 2);
        assert_eq!(graph.nodes()[1].label, "Bo Renamed");
        assert_eq!(graph.nodes()[0].id, key(1));
    }

    #[test]
    fn test_document_without_authors_adds_nothing() {
        let mut graph = CoauthorGraph::new();
        graph.add_document(&Document::new("D0", Vec::<String>::new()), &[]);
        assert!(graph.edges().is_empty());
        assert!(graph.nodes().is_empty());
    }

    #[test]
    fn test_graph_serializes_without_index() {
        let mut graph = CoauthorGraph::new();
        graph.add_document(&Document::new("D1", ["a"]).with_title("T"), &[person(7, "Ann")]);
        let json = serde_json::to_value(&graph).unwrap();
        assert_eq!(json["nodes"][0]["id"], 7);
        assert_eq!(json["edges"][0]["title"], "T");
        assert!(json.get("node_index").is_none());
    }
}
