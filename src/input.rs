use std::collections::HashMap;

use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::error::{CutsetError, Result};

/// Node of a [`LabeledGraph`], numbered in order of insertion
pub type LabelId = u32;

/// Undirected graph with a text label per node.
///
/// Adjacency is kept in insertion order, so traversals visit neighbors in the order their edges
/// were added.
#[derive(Debug, Clone, Default)]
pub struct LabeledGraph {
    graph: UnGraphMap<LabelId, ()>,
    labels: Vec<String>,
    ids: HashMap<String, LabelId>,
}

impl LabeledGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying graph, ready to hand to the connectivity and cutset functions
    pub fn graph(&self) -> &UnGraphMap<LabelId, ()> {
        &self.graph
    }

    pub fn label(&self, node: LabelId) -> &str {
        &self.labels[node as usize]
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Get the node carrying `label`, adding it first if it is new
    pub fn add_node(&mut self, label: &str) -> LabelId {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        let id = self.labels.len() as LabelId;
        self.labels.push(label.to_string());
        self.ids.insert(label.to_string(), id);
        self.graph.add_node(id);
        id
    }

    /// Connect two nodes. Connecting an already adjacent pair keeps the single existing edge.
    pub fn add_edge(&mut self, a: LabelId, b: LabelId) {
        self.graph.add_edge(a, b, ());
    }
}

/// Parse a graph from an edge list.
///
/// Every line holds either `a b` for an edge or a single `a` for a node, and `#` starts a comment.
/// Nodes are numbered in order of first appearance. Repeated edges are only added once and
/// self-loops are skipped.
pub fn parse_edge_list(text: &str) -> Result<LabeledGraph> {
    let mut graph = LabeledGraph::new();

    for (number, raw) in text.lines().enumerate() {
        let line = match raw.split_once('#') {
            Some((content, _)) => content,
            None => raw,
        };
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [] => {}
            [label] => {
                graph.add_node(label);
            }
            [a, b] => {
                let a_id = graph.add_node(a);
                let b_id = graph.add_node(b);
                if a_id == b_id {
                    warn!(line = number + 1, node = *a, "skipping self-loop");
                    continue;
                }
                graph.add_edge(a_id, b_id);
            }
            _ => {
                return Err(CutsetError::MalformedLine {
                    line: number + 1,
                    content: raw.to_string(),
                })
            }
        }
    }

    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "parsed edge list"
    );
    Ok(graph)
}

/// Generate a G(n, p) random graph labelled `0..nodes`, reproducible for a given `seed`
pub fn random_graph(nodes: usize, probability: f64, seed: u64) -> Result<LabeledGraph> {
    if !(0.0..=1.0).contains(&probability) {
        return Err(CutsetError::InvalidProbability(probability));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = LabeledGraph::new();
    let ids: Vec<LabelId> = (0..nodes).map(|i| graph.add_node(&i.to_string())).collect();
    for (&a, &b) in ids.iter().tuple_combinations() {
        if rng.gen_bool(probability) {
            graph.add_edge(a, b);
        }
    }

    debug!(nodes, edges = graph.edge_count(), seed, "generated random graph");
    Ok(graph)
}

/// Two stars joined at their centres: A-B, A-C, A-D, D-E, D-F
pub fn double_star() -> LabeledGraph {
    let mut graph = LabeledGraph::new();
    let [a, b, c, d, e, f] = ["A", "B", "C", "D", "E", "F"].map(|label| graph.add_node(label));
    for (from, to) in [(a, b), (a, c), (a, d), (d, e), (d, f)] {
        graph.add_edge(from, to);
    }
    graph
}
