use std::fs;
use std::path::Path;

use crate::cs::graph::multigraph::{ContractableGraph, SEPARATOR};
use crate::error::{GraphError, Result};

/// Builds a graph from adjacency records of the form `name: neighbour neighbour ...`.
///
/// Every listed neighbour adds one edge, so a pair listed twice (in either
/// record) ends up with multiplicity 2. Blank lines are skipped.
///
/// # Examples
/// ```
/// use karger_cut::cs::graph::parse_adjacency_list;
///
/// let graph = parse_adjacency_list("a: b c\nb: c\n").unwrap();
/// assert_eq!(graph.number_of_nodes(), 3);
/// assert_eq!(graph.number_of_edges(), 3);
/// ```
pub fn parse_adjacency_list(input: &str) -> Result<ContractableGraph> {
    let mut graph = ContractableGraph::new();
    for (index, raw) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let (node, neighbors) = line
            .split_once(':')
            .ok_or_else(|| GraphError::invalid_input(line_no, "expected 'name: neighbours'"))?;
        let node = validate_name(node.trim(), line_no)?;

        let mut listed = 0;
        for neighbor in neighbors.split_whitespace() {
            let neighbor = validate_name(neighbor, line_no)?;
            if neighbor == node {
                return Err(GraphError::invalid_input(
                    line_no,
                    format!("node {} lists itself as a neighbour", node),
                ));
            }
            graph.add_edge(node, neighbor, 1)?;
            listed += 1;
        }
        if listed == 0 {
            return Err(GraphError::invalid_input(
                line_no,
                format!("node {} has no neighbours", node),
            ));
        }
    }
    Ok(graph)
}

/// Reads and parses an adjacency-list file.
pub fn read_adjacency_list(path: impl AsRef<Path>) -> Result<ContractableGraph> {
    let input = fs::read_to_string(path)?;
    parse_adjacency_list(&input)
}

fn validate_name(name: &str, line_no: usize) -> Result<&str> {
    if name.is_empty() {
        return Err(GraphError::invalid_input(line_no, "empty node name"));
    }
    if name.contains(SEPARATOR) {
        return Err(GraphError::invalid_input(
            line_no,
            format!("node name {} contains the separator '{}'", name, SEPARATOR),
        ));
    }
    Ok(name)
}
