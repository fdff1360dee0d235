use log::{debug, info, trace, warn};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use rayon::prelude::*;

use crate::cs::graph::multigraph::{ContractableGraph, Edge};
use crate::error::{GraphError, Result};

/// Configuration options for the Monte Carlo min cut search.
#[derive(Debug, Clone, Default)]
pub struct KargerConfig {
    /// Number of contraction runs before giving up. `None` uses [`default_max_attempts`].
    pub max_attempts: Option<usize>,
    /// Seed for reproducible runs; attempt `i` draws from stream `i` of this seed.
    pub seed: Option<u64>,
    /// Run attempts on the rayon thread pool; the first successful attempt wins.
    pub parallel: bool,
}

/// Default attempt budget: `C(E, 2) * ln(E)` for `E` distinct edges, at least 1.
///
/// This is the textbook `O(n^2 log n)` repetition bound with the edge count
/// standing in for the node count, so treat it as a generous heuristic.
pub fn default_max_attempts(distinct_edges: usize) -> usize {
    if distinct_edges < 2 {
        return 1;
    }
    let e = distinct_edges as f64;
    let pairs = e * (e - 1.0) / 2.0;
    ((pairs * e.ln()) as usize).max(1)
}

/// Finds a cut of exactly `mincut_size` edges using Karger's contraction algorithm.
///
/// # Arguments
/// - `graph`: The graph; it is never modified, every attempt works on a copy.
/// - `mincut_size`: The known size of the minimum cut.
/// - `max_attempts`: Attempt budget, see [`default_max_attempts`] when `None`.
///
/// # Returns
/// The last remaining edge. Its endpoints are the composite identities of the
/// two sides of the cut, see [`Edge::partition_sizes`].
pub fn karger_min_cut(
    graph: &ContractableGraph,
    mincut_size: usize,
    max_attempts: Option<usize>,
) -> Result<Edge> {
    let config = KargerConfig {
        max_attempts,
        ..KargerConfig::default()
    };
    karger_min_cut_with_config(graph, mincut_size, &config)
}

/// Same as [`karger_min_cut`] with seeding and parallelism controlled by `config`.
pub fn karger_min_cut_with_config(
    graph: &ContractableGraph,
    mincut_size: usize,
    config: &KargerConfig,
) -> Result<Edge> {
    if graph.number_of_edges() == 0 {
        return Err(GraphError::EmptyGraph);
    }
    let max_attempts = config
        .max_attempts
        .unwrap_or_else(|| default_max_attempts(graph.number_of_edges()));
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    debug!(
        "searching for a cut of size {} in {} nodes / {} distinct edges, {} attempts",
        mincut_size,
        graph.number_of_nodes(),
        graph.number_of_edges(),
        max_attempts
    );

    let attempt = |index: usize| run_attempt(graph, mincut_size, seed, index).transpose();
    let found = if config.parallel {
        (0..max_attempts).into_par_iter().find_map_any(attempt)
    } else {
        (0..max_attempts).find_map(attempt)
    };

    match found {
        Some(result) => result,
        None => {
            warn!("no cut of size {} after {} attempts", mincut_size, max_attempts);
            Err(GraphError::AttemptsExhausted {
                attempts: max_attempts,
            })
        }
    }
}

/// Contracts a private copy of `graph` down to one distinct edge.
/// Returns the edge if its multiplicity equals `mincut_size`.
fn run_attempt(
    graph: &ContractableGraph,
    mincut_size: usize,
    seed: u64,
    index: usize,
) -> Result<Option<Edge>> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    rng.set_stream(index as u64);

    let (edge, multiplicity) = contract_to_single_edge(graph.clone(), &mut rng)?;
    debug!("attempt {} ended with a cut of size {}", index, multiplicity);
    if multiplicity != mincut_size {
        return Ok(None);
    }
    info!(
        "found cut of size {} on attempt {}, partition sizes {:?}",
        multiplicity,
        index,
        edge.partition_sizes()
    );
    Ok(Some(edge))
}

/// Repeatedly contracts uniformly chosen edges until a single distinct edge remains.
/// Returns that edge and its multiplicity.
pub fn contract_to_single_edge<R: Rng + ?Sized>(
    mut graph: ContractableGraph,
    rng: &mut R,
) -> Result<(Edge, usize)> {
    let mut steps = 0;
    while graph.number_of_edges() > 1 {
        let edge = graph.random_edge(rng).cloned().ok_or(GraphError::EmptyGraph)?;
        graph.contract_edge(edge.low(), edge.high())?;
        steps += 1;
    }
    trace!("contracted {} edges", steps);
    graph
        .edges()
        .next()
        .map(|(edge, multiplicity)| (edge.clone(), multiplicity))
        .ok_or(GraphError::EmptyGraph)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_from(edges: &[(&str, &str)]) -> ContractableGraph {
        let mut graph = ContractableGraph::new();
        for (a, b) in edges {
            graph.add_edge(a, b, 1).unwrap();
        }
        graph
    }

    fn triangle_with_pendant() -> ContractableGraph {
        graph_from(&[("A", "B"), ("B", "C"), ("C", "A"), ("A", "D")])
    }

    const TRIANGLES: [(&str, &str); 6] = [
        ("a1", "a2"),
        ("a2", "a3"),
        ("a3", "a1"),
        ("b1", "b2"),
        ("b2", "b3"),
        ("b3", "b1"),
    ];
    const BRIDGES: [(&str, &str); 3] = [("a1", "b1"), ("a2", "b2"), ("a3", "b3")];

    fn seeded(seed: u64, max_attempts: usize) -> KargerConfig {
        KargerConfig {
            max_attempts: Some(max_attempts),
            seed: Some(seed),
            parallel: false,
        }
    }

    #[test]
    fn test_default_max_attempts() {
        assert_eq!(default_max_attempts(0), 1);
        assert_eq!(default_max_attempts(1), 1);
        // C(4, 2) * ln(4) = 6 * 1.386...
        assert_eq!(default_max_attempts(4), 8);
        // C(9, 2) * ln(9) = 36 * 2.197...
        assert_eq!(default_max_attempts(9), 79);
    }

    #[test]
    fn test_karger_triangle_with_pendant() {
        let graph = triangle_with_pendant();
        for _ in 0..10 {
            let cut = karger_min_cut(&graph, 1, Some(500)).unwrap();
            assert_eq!(cut.partition_sizes(), (3, 1));
            assert_eq!(cut.partition_product(), 3);
            assert_eq!(cut.high(), "D");
        }
        // The input graph is left untouched.
        assert_eq!(graph.number_of_edges(), 4);
        assert_eq!(graph.number_of_nodes(), 4);
    }

    #[test]
    fn test_karger_two_triangles_any_cut_of_three() {
        // Every node has degree 3 here, so singleton cuts are minimum cuts too.
        let graph = graph_from(&[&TRIANGLES[..], &BRIDGES[..]].concat());
        let cut = karger_min_cut_with_config(&graph, 3, &seeded(3, 2_000)).unwrap();
        let (a, b) = cut.partition_sizes();
        assert_eq!(a + b, 6);
        assert!(cut.partition_product() == 9 || cut.partition_product() == 5);
    }

    #[test]
    fn test_karger_two_triangles_split() {
        // Doubling the triangle edges makes the triangle split the only cut of size 3.
        let graph = graph_from(&[&TRIANGLES[..], &TRIANGLES[..], &BRIDGES[..]].concat());
        assert_eq!(graph.number_of_edges(), 9);

        let cut = karger_min_cut_with_config(&graph, 3, &seeded(11, 2_000)).unwrap();
        assert_eq!(cut.partition_sizes(), (3, 3));
        assert_eq!(cut.partition_product(), 9);
        let mut side: Vec<&str> = crate::cs::graph::members(cut.low()).collect();
        side.sort();
        assert!(side == ["a1", "a2", "a3"] || side == ["b1", "b2", "b3"]);
    }

    #[test]
    fn test_karger_parallel() {
        let graph = graph_from(&[&TRIANGLES[..], &TRIANGLES[..], &BRIDGES[..]].concat());
        let config = KargerConfig {
            max_attempts: Some(2_000),
            seed: None,
            parallel: true,
        };
        let cut = karger_min_cut_with_config(&graph, 3, &config).unwrap();
        assert_eq!(cut.partition_product(), 9);
    }

    #[test]
    fn test_karger_seed_is_reproducible() {
        let graph = triangle_with_pendant();
        let first = karger_min_cut_with_config(&graph, 2, &seeded(5, 200)).unwrap();
        let second = karger_min_cut_with_config(&graph, 2, &seeded(5, 200)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_karger_exhausts_attempts() {
        // No cut of this graph has 7 edges.
        let graph = triangle_with_pendant();
        let err = karger_min_cut(&graph, 7, Some(1)).unwrap_err();
        assert!(matches!(err, GraphError::AttemptsExhausted { attempts: 1 }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_karger_empty_graph() {
        let graph = ContractableGraph::new();
        let err = karger_min_cut(&graph, 1, None).unwrap_err();
        assert!(matches!(err, GraphError::EmptyGraph));
    }

    #[test]
    fn test_single_edge_graph() {
        let mut graph = ContractableGraph::new();
        graph.add_edge("x", "y", 2).unwrap();
        let cut = karger_min_cut(&graph, 2, None).unwrap();
        assert_eq!(cut.endpoints(), ("x", "y"));
        assert_eq!(cut.partition_product(), 1);
    }

    #[test]
    fn test_contract_to_single_edge_absorbs_every_node() {
        let graph = graph_from(&[&TRIANGLES[..], &BRIDGES[..]].concat());
        let mut rng = ChaCha20Rng::seed_from_u64(99);
        let (edge, multiplicity) = contract_to_single_edge(graph.clone(), &mut rng).unwrap();
        let (a, b) = edge.partition_sizes();
        assert_eq!(a + b, graph.number_of_nodes());
        assert!(multiplicity >= 3);
    }
}
