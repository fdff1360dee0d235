pub mod adjacency_list;
pub mod karger;
pub mod multigraph;

pub use adjacency_list::{parse_adjacency_list, read_adjacency_list};
pub use karger::{
    contract_to_single_edge, default_max_attempts, karger_min_cut, karger_min_cut_with_config,
    KargerConfig,
};
pub use multigraph::{members, partition_size, ContractableGraph, Edge, Node, SEPARATOR};
