use rand::Rng;
use std::collections::{BTreeMap, BTreeSet};

use crate::cs::randomized::RandomMultiset;
use crate::error::{GraphError, Result};

/// Node identity. Contracted nodes join their constituents with [`SEPARATOR`].
pub type Node = String;

/// Joins the identities of contracted nodes.
pub const SEPARATOR: char = '-';

/// Returns the original node names absorbed into `node`.
pub fn members(node: &str) -> impl Iterator<Item = &str> {
    node.split(SEPARATOR)
}

/// Number of original nodes absorbed into `node`.
pub fn partition_size(node: &str) -> usize {
    members(node).count()
}

/// An undirected edge stored with its endpoints in lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    low: Node,
    high: Node,
}

impl Edge {
    /// Builds the canonical edge between `n1` and `n2`, rejecting self-loops.
    pub fn new(n1: &str, n2: &str) -> Result<Edge> {
        if n1 == n2 {
            return Err(GraphError::SelfLoop(n1.to_string()));
        }
        let (low, high) = if n1 < n2 { (n1, n2) } else { (n2, n1) };
        Ok(Edge {
            low: low.to_string(),
            high: high.to_string(),
        })
    }

    pub fn low(&self) -> &str {
        &self.low
    }

    pub fn high(&self) -> &str {
        &self.high
    }

    pub fn endpoints(&self) -> (&str, &str) {
        (&self.low, &self.high)
    }

    /// Identity of the node that replaces both endpoints after contraction.
    pub fn composite(&self) -> Node {
        format!("{}{}{}", self.low, SEPARATOR, self.high)
    }

    /// Sizes of the two node groups the endpoints stand for.
    pub fn partition_sizes(&self) -> (usize, usize) {
        (partition_size(&self.low), partition_size(&self.high))
    }

    pub fn partition_product(&self) -> usize {
        let (a, b) = self.partition_sizes();
        a * b
    }
}

/// Undirected multigraph supporting edge contraction.
///
/// Adjacency sets and the pool of distinct edges are only ever changed together
/// through [`add_edge`](Self::add_edge) and [`remove_edge`](Self::remove_edge),
/// so an edge is pooled exactly when both endpoints list each other.
/// Every node in the adjacency map has at least one incident edge.
#[derive(Debug, Clone, Default)]
pub struct ContractableGraph {
    adjacency: BTreeMap<Node, BTreeSet<Node>>,
    edges: RandomMultiset<Edge>,
}

impl ContractableGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `multiplicity` parallel edges between `n1` and `n2`.
    pub fn add_edge(&mut self, n1: &str, n2: &str, multiplicity: usize) -> Result<()> {
        let edge = Edge::new(n1, n2)?;
        if multiplicity == 0 {
            return Err(GraphError::InvalidMultiplicity);
        }
        if !self.edges.contains(&edge) {
            self.adjacency
                .entry(edge.low.clone())
                .or_default()
                .insert(edge.high.clone());
            self.adjacency
                .entry(edge.high.clone())
                .or_default()
                .insert(edge.low.clone());
        }
        self.edges.add(edge, multiplicity);
        Ok(())
    }

    /// Removes the edge between `n1` and `n2` and returns its multiplicity.
    /// Nodes left without neighbours disappear from the graph.
    pub fn remove_edge(&mut self, n1: &str, n2: &str) -> Result<usize> {
        let edge = Edge::new(n1, n2)?;
        if !self.edges.contains(&edge) {
            return Err(GraphError::EdgeNotFound(edge.low, edge.high));
        }
        self.unlink(&edge.low, &edge.high);
        self.unlink(&edge.high, &edge.low);
        self.edges.remove_all(&edge)
    }

    fn unlink(&mut self, node: &str, neighbor: &str) {
        if let Some(neighbors) = self.adjacency.get_mut(node) {
            neighbors.remove(neighbor);
            if neighbors.is_empty() {
                self.adjacency.remove(node);
            }
        }
    }

    /// Merges `n1` and `n2` into one composite node and returns its identity.
    ///
    /// Parallel edges between the pair vanish as a self-loop. Edges to every
    /// other neighbour are rewired to the composite, and multiplicities add up
    /// where both endpoints shared a neighbour.
    pub fn contract_edge(&mut self, n1: &str, n2: &str) -> Result<Node> {
        let edge = Edge::new(n1, n2)?;
        if !self.edges.contains(&edge) {
            return Err(GraphError::EdgeNotFound(edge.low, edge.high));
        }
        let composite = edge.composite();
        if self.adjacency.contains_key(&composite) {
            return Err(GraphError::NodeCollision(composite));
        }

        self.remove_edge(&edge.low, &edge.high)?;
        for endpoint in [&edge.low, &edge.high] {
            let neighbors: Vec<Node> = self
                .adjacency
                .get(endpoint.as_str())
                .map(|set| set.iter().cloned().collect())
                .unwrap_or_default();
            for neighbor in neighbors {
                let multiplicity = self.remove_edge(endpoint, &neighbor)?;
                self.add_edge(&composite, &neighbor, multiplicity)?;
            }
        }
        Ok(composite)
    }

    pub fn contains_edge(&self, n1: &str, n2: &str) -> bool {
        Edge::new(n1, n2).is_ok_and(|edge| self.edges.contains(&edge))
    }

    /// Number of parallel edges between `n1` and `n2`, `None` if not adjacent.
    pub fn multiplicity(&self, n1: &str, n2: &str) -> Option<usize> {
        Edge::new(n1, n2)
            .ok()
            .and_then(|edge| self.edges.multiplicity(&edge))
    }

    pub fn neighbors(&self, node: &str) -> Option<impl Iterator<Item = &str>> {
        self.adjacency
            .get(node)
            .map(|set| set.iter().map(String::as_str))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.adjacency.keys().map(String::as_str)
    }

    /// Distinct edges together with their multiplicities.
    pub fn edges(&self) -> impl Iterator<Item = (&Edge, usize)> {
        self.edges
            .iter()
            .map(move |edge| (edge, self.edges.multiplicity(edge).unwrap_or(0)))
    }

    /// Picks a distinct edge uniformly at random.
    pub fn random_edge<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Edge> {
        self.edges.pick_uniform_random(rng)
    }

    pub fn number_of_nodes(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of distinct edges; parallel edges count once.
    pub fn number_of_edges(&self) -> usize {
        self.edges.len()
    }

    /// Number of edges with parallel edges counted individually.
    pub fn total_multiplicity(&self) -> usize {
        self.edges.total_multiplicity()
    }
}
