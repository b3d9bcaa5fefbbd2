mod cutset;
mod naive;
mod parallel;

pub use cutset::{Cutset, MinimumCutsets};
pub use naive::{find_k_cutset, min_vertex_cutsets, min_vertex_cutsets_within};
pub use parallel::{par_find_k_cutset, par_min_vertex_cutsets_within};
