use ahash::{AHashMap, AHashSet};

use crate::error::ValidationError;
use crate::graph::GraphDefinition;

/// Validates a drawn graph before any compilation is attempted.
///
/// Checks run in a fixed order: empty graph, cycles, then roots. Multiple
/// roots are permitted by default; the stricter historical behavior of a
/// single starting point can be re-enabled with [`GraphValidator::single_root`].
#[derive(Debug, Clone, Default)]
pub struct GraphValidator {
    single_root: bool,
}

#[derive(Clone, Copy, PartialEq)]
enum Color {
    White,
    Gray,
    Black,
}

impl GraphValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects graphs with more than one root node.
    pub fn single_root(mut self, enabled: bool) -> Self {
        self.single_root = enabled;
        self
    }

    /// Checks the graph and returns its root node ids, in node iteration order.
    pub fn validate(&self, graph: &GraphDefinition) -> Result<Vec<String>, ValidationError> {
        if graph.nodes.is_empty() {
            return Err(ValidationError::EmptyGraph);
        }

        check_acyclic(graph)?;

        let roots = root_nodes(graph);
        if roots.is_empty() {
            return Err(ValidationError::NoRootNode);
        }
        if self.single_root && roots.len() > 1 {
            return Err(ValidationError::MultipleRoots { count: roots.len() });
        }

        Ok(roots)
    }
}

/// Nodes with no incoming edge.
pub(super) fn root_nodes(graph: &GraphDefinition) -> Vec<String> {
    let has_incoming: AHashSet<&str> = graph.edges.iter().map(|e| e.target.as_str()).collect();
    graph
        .nodes
        .iter()
        .filter(|n| !has_incoming.contains(n.id.as_str()))
        .map(|n| n.id.clone())
        .collect()
}

/// Depth-first search with white/gray/black coloring, started from every
/// unvisited node so disconnected subgraphs are each checked. A back-edge to
/// a gray node is a cycle.
fn check_acyclic(graph: &GraphDefinition) -> Result<(), ValidationError> {
    let mut successors: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for node in &graph.nodes {
        successors.entry(node.id.as_str()).or_default();
    }
    for edge in &graph.edges {
        successors
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let mut color: AHashMap<&str, Color> = graph
        .nodes
        .iter()
        .map(|n| (n.id.as_str(), Color::White))
        .collect();

    for node in &graph.nodes {
        if color.get(node.id.as_str()) != Some(&Color::White) {
            continue;
        }

        // Iterative DFS; each frame is (node, index of the next child to visit).
        color.insert(node.id.as_str(), Color::Gray);
        let mut stack: Vec<(&str, usize)> = vec![(node.id.as_str(), 0)];

        while let Some(&(current, child_index)) = stack.last() {
            let children = successors
                .get(current)
                .map(Vec::as_slice)
                .unwrap_or_default();

            if child_index < children.len() {
                if let Some(frame) = stack.last_mut() {
                    frame.1 += 1;
                }
                let child = children[child_index];
                match color.get(child).copied() {
                    Some(Color::Gray) => {
                        return Err(ValidationError::CycleDetected {
                            node_id: child.to_string(),
                        });
                    }
                    Some(Color::White) => {
                        color.insert(child, Color::Gray);
                        stack.push((child, 0));
                    }
                    // Black, or an edge endpoint outside the node list.
                    _ => {}
                }
            } else {
                color.insert(current, Color::Black);
                stack.pop();
            }
        }
    }

    Ok(())
}
