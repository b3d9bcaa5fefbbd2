use std::collections::{HashSet, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;

use petgraph::visit::{IntoNeighbors, IntoNodeIdentifiers, VisitMap, Visitable};

use crate::error::{CutsetError, Result};

/// Breadth-first walk from `start` that stays out of `excluded`, calling `on_visit` for every node
/// reached (including `start`) in visitation order.
///
/// `visited` is shared with the caller so several walks can partition one graph into components.
fn visit_component<G, F>(
    graph: G,
    start: G::NodeId,
    excluded: &HashSet<G::NodeId>,
    visited: &mut G::Map,
    mut on_visit: F,
) where
    G: IntoNeighbors + Visitable,
    G::NodeId: Hash + Eq,
    F: FnMut(G::NodeId),
{
    let mut queue: VecDeque<G::NodeId> = VecDeque::new();
    visited.visit(start);
    queue.push_back(start);

    while let Some(vertex) = queue.pop_front() {
        on_visit(vertex);
        for next in graph.neighbors(vertex) {
            if !excluded.contains(&next) && visited.visit(next) {
                queue.push_back(next);
            }
        }
    }
}

/// Checks whether the subgraph induced by all nodes outside `excluded` is connected.
///
/// The traversal starts at the first node (in the graph's iteration order) that is not excluded.
/// Excluded nodes the graph does not know about are ignored.
///
/// If every node is excluded the result is `false`: an empty remaining graph counts as
/// disconnected. This is a convention rather than a structural fact, and cutset searches rely on it
/// when `k` reaches the node count.
pub fn is_connected_excluding<G>(graph: G, excluded: &HashSet<G::NodeId>) -> bool
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable,
    G::NodeId: Hash + Eq,
{
    let mut remaining = graph
        .node_identifiers()
        .filter(|node| !excluded.contains(node));
    let Some(start) = remaining.next() else {
        return false;
    };
    let remaining_count = 1 + remaining.count();

    let mut visited = graph.visit_map();
    let mut reached = 0usize;
    visit_component(graph, start, excluded, &mut visited, |_| reached += 1);

    reached == remaining_count
}

/// Get the breadth-first visitation order of the component containing `start`
pub fn bfs_order<G>(graph: G, start: G::NodeId) -> Result<Vec<G::NodeId>>
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable,
    G::NodeId: Hash + Eq + Debug,
{
    if !graph.node_identifiers().any(|node| node == start) {
        return Err(CutsetError::UnknownStartNode(format!("{:?}", start)));
    }

    let mut order = vec![];
    let mut visited = graph.visit_map();
    visit_component(graph, start, &HashSet::new(), &mut visited, |node| {
        order.push(node)
    });
    Ok(order)
}

/// Get the connected components left after removing `excluded`.
///
/// Each component is listed in breadth-first order, and components are ordered by their first
/// node in the graph's iteration order.
pub fn components_excluding<G>(graph: G, excluded: &HashSet<G::NodeId>) -> Vec<Vec<G::NodeId>>
where
    G: IntoNodeIdentifiers + IntoNeighbors + Visitable,
    G::NodeId: Hash + Eq,
{
    let mut components = vec![];
    let mut visited = graph.visit_map();

    for node in graph.node_identifiers() {
        if excluded.contains(&node) || visited.is_visited(&node) {
            continue;
        }
        let mut component = vec![];
        visit_component(graph, node, excluded, &mut visited, |n| component.push(n));
        components.push(component);
    }

    components
}
