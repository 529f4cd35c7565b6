use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;
use tracing::warn;

use crate::graph::GraphDefinition;

/// Produces the execution order for every node reachable from the given roots.
///
/// Multi-source breadth-first traversal: the queue is seeded with the roots in
/// root-set order, and each dequeued node enqueues all of its direct
/// successors. A node may therefore be enqueued once per incoming edge, but it
/// is appended to the result only on its first dequeue, which guarantees that
/// for any edge u -> v with both endpoints reachable, u precedes v.
///
/// Nodes unreachable from any root are left out of the order entirely; they
/// are never scheduled or compiled.
pub fn level_order(graph: &GraphDefinition, roots: &[String]) -> Vec<String> {
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

    let mut queue: VecDeque<&str> = roots.iter().map(String::as_str).collect();
    let mut visited: AHashSet<&str> = AHashSet::new();
    let mut order = Vec::with_capacity(graph.nodes.len());

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current.to_string());
        if let Some(children) = successors.get(current) {
            queue.extend(children.iter().copied());
        }
    }

    if order.len() < graph.nodes.len() {
        warn!(
            scheduled = order.len(),
            total = graph.nodes.len(),
            "nodes unreachable from any root were left out of the execution order"
        );
    }

    order
}
