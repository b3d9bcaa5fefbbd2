//! Vertex cutsets of small undirected graphs.
//!
//! A breadth-first connectivity check decides whether a graph stays connected once a set of
//! nodes is removed, and an exhaustive search over node subsets uses it to find cutsets and the
//! vertex-connectivity number. Everything works on `petgraph` graph references through the
//! `petgraph::visit` traits.

mod connectivity;
mod cuts;
mod error;
pub mod input;

pub use connectivity::{bfs_order, components_excluding, is_connected_excluding};
pub use cuts::{
    find_k_cutset, min_vertex_cutsets, min_vertex_cutsets_within, par_find_k_cutset,
    par_min_vertex_cutsets_within, Cutset, MinimumCutsets,
};
pub use error::{CutsetError, Result};
