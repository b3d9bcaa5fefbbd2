//! Cutset search with candidate evaluation spread over the rayon thread pool.
//!
//! Candidates come from the same lexicographic enumeration as the serial search, pulled in
//! batches. Within a batch rayon keeps results in enumeration order, so both functions return
//! exactly what their serial counterparts return.

use std::hash::Hash;

use itertools::Itertools;
use petgraph::visit::{IntoNeighbors, IntoNodeIdentifiers, Visitable};
use rayon::prelude::*;
use tracing::debug;

use crate::cuts::naive::{check_max_size, disconnects};
use crate::cuts::{Cutset, MinimumCutsets};
use crate::error::{CutsetError, Result};

/// Parallel version of [`find_k_cutset`](crate::find_k_cutset).
///
/// Once a batch contains a cutset no further batches are enumerated.
pub fn par_find_k_cutset<G>(
    graph: G,
    k: usize,
    batch_size: usize,
) -> Result<Option<Cutset<G::NodeId>>>
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable + Sync,
    G::NodeId: Hash + Eq + Send + Sync,
{
    if k == 0 {
        return Err(CutsetError::InvalidCutsetSize(k));
    }
    if batch_size == 0 {
        return Err(CutsetError::InvalidBatchSize);
    }

    debug!(k, batch_size, "searching for a cutset in parallel");
    let mut candidates = graph.node_identifiers().combinations(k);
    loop {
        let batch: Vec<Vec<G::NodeId>> = candidates.by_ref().take(batch_size).collect();
        if batch.is_empty() {
            return Ok(None);
        }

        let hit = batch
            .into_par_iter()
            .find_first(|candidate| disconnects(graph, candidate.as_slice()));
        if let Some(nodes) = hit {
            return Ok(Some(Cutset::new(nodes)));
        }
    }
}

/// Parallel version of [`min_vertex_cutsets_within`](crate::min_vertex_cutsets_within)
pub fn par_min_vertex_cutsets_within<G>(
    graph: G,
    max_size: Option<usize>,
    batch_size: usize,
) -> Result<MinimumCutsets<G::NodeId>>
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable + Sync,
    G::NodeId: Hash + Eq + Send + Sync,
{
    if batch_size == 0 {
        return Err(CutsetError::InvalidBatchSize);
    }
    check_max_size(max_size)?;

    let node_count = graph.node_identifiers().count();
    for k in 1..node_count {
        if let Some(max) = max_size.filter(|&max| k > max) {
            return Ok(MinimumCutsets::capped(max));
        }

        let mut cutsets = vec![];
        let mut candidates = graph.node_identifiers().combinations(k);
        loop {
            let batch: Vec<Vec<G::NodeId>> = candidates.by_ref().take(batch_size).collect();
            if batch.is_empty() {
                break;
            }
            let found: Vec<Cutset<G::NodeId>> = batch
                .into_par_iter()
                .filter(|candidate| disconnects(graph, candidate.as_slice()))
                .map(Cutset::new)
                .collect();
            cutsets.extend(found);
        }
        debug!(k, found = cutsets.len(), "evaluated all candidates in parallel");

        if !cutsets.is_empty() {
            return Ok(MinimumCutsets::found(k, cutsets));
        }
    }

    Ok(MinimumCutsets::none())
}

#[cfg(test)]
mod tests {
    use petgraph::graph::UnGraph;

    use crate::cuts::naive::{find_k_cutset, min_vertex_cutsets_within};
    use crate::cuts::parallel::{par_find_k_cutset, par_min_vertex_cutsets_within};
    use crate::cuts::MinimumCutsets;
    use crate::error::CutsetError;

    fn ladder() -> UnGraph<(), ()> {
        UnGraph::from_edges(&[
            (0, 1),
            (1, 2),
            (2, 3),
            (4, 5),
            (5, 6),
            (6, 7),
            (0, 4),
            (1, 5),
            (2, 6),
            (3, 7),
        ])
    }

    #[test]
    fn matches_serial_first_cutset() {
        let graph = ladder();
        for k in 1..=4 {
            for batch_size in [1, 3, 64] {
                assert_eq!(
                    find_k_cutset(&graph, k).unwrap(),
                    par_find_k_cutset(&graph, k, batch_size).unwrap()
                );
            }
        }
    }

    #[test]
    fn matches_serial_minimum() {
        let graph = ladder();
        for batch_size in [1, 5, 1000] {
            let parallel = par_min_vertex_cutsets_within(&graph, None, batch_size).unwrap();
            assert_eq!(min_vertex_cutsets_within(&graph, None).unwrap(), parallel);
            assert_eq!(Some(2), parallel.connectivity);
        }
    }

    #[test]
    fn complete_graph_has_no_cutset() {
        let graph =
            UnGraph::<(), ()>::from_edges(&[(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
        let minimum = par_min_vertex_cutsets_within(&graph, None, 2).unwrap();
        assert_eq!(None, minimum.connectivity);
        assert!(minimum.cutsets.is_empty());
    }

    #[test]
    fn matches_serial_capped_search() {
        let graph = ladder();
        let parallel = par_min_vertex_cutsets_within(&graph, Some(1), 4).unwrap();
        assert_eq!(min_vertex_cutsets_within(&graph, Some(1)).unwrap(), parallel);
        assert_eq!(MinimumCutsets::capped(1), parallel);
    }

    #[test]
    fn rejects_zero_limit() {
        let graph = ladder();
        assert!(matches!(
            par_min_vertex_cutsets_within(&graph, Some(0), 4),
            Err(CutsetError::InvalidCutsetSize(0))
        ));
    }

    #[test]
    fn rejects_empty_batches() {
        let graph = ladder();
        assert!(matches!(
            par_find_k_cutset(&graph, 1, 0),
            Err(CutsetError::InvalidBatchSize)
        ));
        assert!(matches!(
            par_min_vertex_cutsets_within(&graph, None, 0),
            Err(CutsetError::InvalidBatchSize)
        ));
    }

    #[test]
    fn rejects_zero_size() {
        let graph = ladder();
        assert!(matches!(
            par_find_k_cutset(&graph, 0, 8),
            Err(CutsetError::InvalidCutsetSize(0))
        ));
    }
}
