//! Global minimum cut of undirected multigraphs by random edge contraction
//! (Karger's algorithm), for graphs whose min cut size is known in advance.

pub mod cs;
pub mod error;

pub use cs::{graph, randomized};
pub use cs::graph::{
    karger_min_cut, karger_min_cut_with_config, ContractableGraph, Edge, KargerConfig,
};
pub use cs::randomized::RandomMultiset;
pub use error::{GraphError, Result};
