use thiserror::Error;

use crate::cs::graph::multigraph::Node;

/// Result type for graph contraction operations
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by the edge pool, the contractable graph and the min cut driver.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Item is not stored in the multiset
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// Edge is not present in the graph
    #[error("Edge not found: ({0}, {1})")]
    EdgeNotFound(Node, Node),

    /// Edge would connect a node to itself
    #[error("Self-loop on node {0} is not allowed")]
    SelfLoop(Node),

    /// Edges are stored with a multiplicity of at least one
    #[error("Edge multiplicity must be at least 1")]
    InvalidMultiplicity,

    /// Contraction would reuse the identity of a live node
    #[error("Composite node {0} already exists in the graph")]
    NodeCollision(Node),

    /// Graph has no edges to contract
    #[error("Graph has no edges")]
    EmptyGraph,

    /// No attempt observed a cut of the requested size
    #[error("Min cut not found within {attempts} attempts")]
    AttemptsExhausted { attempts: usize },

    /// Malformed adjacency-list input
    #[error("Invalid input on line {line}: {message}")]
    InvalidInput { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    pub fn invalid_input(line: usize, message: impl Into<String>) -> Self {
        GraphError::InvalidInput {
            line,
            message: message.into(),
        }
    }

    /// Only an exhausted budget can be fixed by retrying with more attempts.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, GraphError::AttemptsExhausted { .. })
    }
}
