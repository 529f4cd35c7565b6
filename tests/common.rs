//! Common test utilities for building pipeline graphs.
use ahash::AHashMap;
use weft::prelude::*;
use weft::workflow::{DagTemplate, Template, WorkflowDocument};

/// Creates a node with no parameters.
#[allow(dead_code)]
pub fn node(id: &str, node_type: &str) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        node_type: node_type.to_string(),
        params: AHashMap::new(),
    }
}

/// Creates a node with the given parameters.
#[allow(dead_code)]
pub fn node_with_params(
    id: &str,
    node_type: &str,
    params: &[(&str, serde_json::Value)],
) -> NodeDefinition {
    NodeDefinition {
        id: id.to_string(),
        node_type: node_type.to_string(),
        params: params
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect(),
    }
}

/// Creates an edge the way the editor does: target depends on source.
#[allow(dead_code)]
pub fn edge(source: &str, target: &str) -> EdgeDefinition {
    EdgeDefinition {
        id: format!("e{source}-{target}"),
        source: source.to_string(),
        target: target.to_string(),
    }
}

/// A two-step pipeline: load-dataset "a" feeding plot "b".
#[allow(dead_code)]
pub fn linear_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![node("a", "load-dataset"), node("b", "plot")],
        edges: vec![edge("a", "b")],
    }
}

/// A diamond: a feeds b and c, both feeding d.
#[allow(dead_code)]
pub fn diamond_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            node("a", "load-dataset"),
            node("b", "mean"),
            node("c", "median"),
            node("d", "plot"),
        ],
        edges: vec![
            edge("a", "b"),
            edge("a", "c"),
            edge("b", "d"),
            edge("c", "d"),
        ],
    }
}

/// Three nodes in a cycle: a -> b -> c -> a.
#[allow(dead_code)]
pub fn cyclic_graph() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![
            node("a", "load-dataset"),
            node("b", "mean"),
            node("c", "plot"),
        ],
        edges: vec![edge("a", "b"), edge("b", "c"), edge("c", "a")],
    }
}

/// Two disconnected single nodes, no edges.
#[allow(dead_code)]
pub fn disconnected_pair() -> GraphDefinition {
    GraphDefinition {
        nodes: vec![node("a", "load-dataset"), node("b", "load-dataset")],
        edges: vec![],
    }
}

/// Returns the aggregating DAG template of a compiled document.
#[allow(dead_code)]
pub fn main_dag(document: &WorkflowDocument) -> &DagTemplate {
    document
        .spec
        .templates
        .iter()
        .find_map(|t| match t {
            Template::Dag(dag) => Some(dag),
            Template::Container(_) => None,
        })
        .expect("document has no DAG template")
}

/// Returns the position of a node id in an execution order.
#[allow(dead_code)]
pub fn position(order: &[String], id: &str) -> usize {
    order
        .iter()
        .position(|entry| entry == id)
        .unwrap_or_else(|| panic!("'{id}' missing from order {order:?}"))
}
