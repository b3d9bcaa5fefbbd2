//! Exhaustive cutset search.
//!
//! Every candidate subset is handed to the connectivity oracle, so a search for size `k` costs
//! O(C(n, k) * (V + E)). This is only usable on small graphs and is kept exhaustive on purpose:
//! the enumeration order is what makes results reproducible.

use std::collections::HashSet;
use std::hash::Hash;

use itertools::Itertools;
use petgraph::visit::{IntoNeighbors, IntoNodeIdentifiers, Visitable};
use tracing::{debug, trace};

use crate::connectivity::is_connected_excluding;
use crate::cuts::{Cutset, MinimumCutsets};
use crate::error::{CutsetError, Result};

/// Whether removing `candidate` leaves the graph disconnected
pub(super) fn disconnects<G>(graph: G, candidate: &[G::NodeId]) -> bool
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable,
    G::NodeId: Hash + Eq,
{
    let excluded: HashSet<G::NodeId> = candidate.iter().copied().collect();
    !is_connected_excluding(graph, &excluded)
}

/// Get the first cutset of exactly `k` nodes.
///
/// Candidates are the `k`-combinations of the graph's nodes in lexicographic order over the
/// graph's node iteration order, and the search stops at the first one that disconnects the graph.
/// For `k` equal to the node count the only candidate removes everything, which counts as
/// disconnected. For larger `k` there are no candidates at all.
pub fn find_k_cutset<G>(graph: G, k: usize) -> Result<Option<Cutset<G::NodeId>>>
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable,
    G::NodeId: Hash + Eq,
{
    if k == 0 {
        return Err(CutsetError::InvalidCutsetSize(k));
    }

    debug!(k, "searching for a cutset");
    let cutset = graph
        .node_identifiers()
        .combinations(k)
        .find(|candidate| disconnects(graph, candidate.as_slice()))
        .map(Cutset::new);

    if cutset.is_none() {
        debug!(k, "no cutset of this size");
    }
    Ok(cutset)
}

/// Reject a size limit of zero, which would leave nothing to search
pub(super) fn check_max_size(max_size: Option<usize>) -> Result<()> {
    match max_size {
        Some(0) => Err(CutsetError::InvalidCutsetSize(0)),
        _ => Ok(()),
    }
}

fn search_minimum<G>(graph: G, max_size: Option<usize>) -> MinimumCutsets<G::NodeId>
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable,
    G::NodeId: Hash + Eq,
{
    let node_count = graph.node_identifiers().count();

    for k in 1..node_count {
        if let Some(max) = max_size.filter(|&max| k > max) {
            debug!(k, max, "reached maximum cutset size");
            return MinimumCutsets::capped(max);
        }

        let cutsets: Vec<Cutset<G::NodeId>> = graph
            .node_identifiers()
            .combinations(k)
            .filter(|candidate| disconnects(graph, candidate.as_slice()))
            .map(Cutset::new)
            .collect();
        debug!(k, found = cutsets.len(), "evaluated all candidates");

        if !cutsets.is_empty() {
            trace!(k, "vertex-connectivity found");
            return MinimumCutsets::found(k, cutsets);
        }
    }

    MinimumCutsets::none()
}

/// Get the vertex-connectivity of `graph` and every cutset of that size.
///
/// Sizes are tried from 1 up to one less than the node count. All candidates of a size are
/// evaluated, and the search stops at the first size with at least one cutset.
pub fn min_vertex_cutsets<G>(graph: G) -> MinimumCutsets<G::NodeId>
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable,
    G::NodeId: Hash + Eq,
{
    search_minimum(graph, None)
}

/// Same as [`min_vertex_cutsets`] but never tries cutsets larger than `max_size`.
///
/// If the limit stops the search before a cutset turns up, the result carries the limit in
/// `capped_at`. A limit of zero is rejected.
pub fn min_vertex_cutsets_within<G>(
    graph: G,
    max_size: Option<usize>,
) -> Result<MinimumCutsets<G::NodeId>>
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable,
    G::NodeId: Hash + Eq,
{
    check_max_size(max_size)?;
    Ok(search_minimum(graph, max_size))
}
