use std::collections::HashSet;
use std::hash::Hash;

/// A set of vertices whose removal disconnects the graph.
///
/// `nodes` keeps the order in which the search enumerated them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cutset<N> {
    pub nodes: Vec<N>,
    pub size: usize,
}

impl<N> Cutset<N> {
    pub fn new(nodes: Vec<N>) -> Self {
        let size = nodes.len();
        Self { nodes, size }
    }
}

impl<N: Copy + Hash + Eq> Cutset<N> {
    pub fn exclusion_set(&self) -> HashSet<N> {
        self.nodes.iter().copied().collect()
    }
}

/// Vertex-connectivity of a graph together with every cutset of that size.
///
/// `connectivity` is `None` when no searched size yields a cutset, in which case `cutsets` is
/// empty. `capped_at` tells the two reasons for that apart: it holds the size limit when the
/// search stopped before trying every proper subset size, and is `None` when every size was tried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimumCutsets<N> {
    pub connectivity: Option<usize>,
    pub cutsets: Vec<Cutset<N>>,
    pub capped_at: Option<usize>,
}

impl<N> MinimumCutsets<N> {
    /// No proper subset of the nodes disconnects the graph
    pub fn none() -> Self {
        Self {
            connectivity: None,
            cutsets: vec![],
            capped_at: None,
        }
    }

    /// Nothing up to `max_size` disconnects the graph, larger sizes were not tried
    pub fn capped(max_size: usize) -> Self {
        Self {
            capped_at: Some(max_size),
            ..Self::none()
        }
    }

    pub fn found(k: usize, cutsets: Vec<Cutset<N>>) -> Self {
        Self {
            connectivity: Some(k),
            cutsets,
            capped_at: None,
        }
    }
}
