use ahash::{AHashMap, AHashSet};
use serde::Deserialize;

use crate::error::GraphConversionError;
use crate::graph::{EdgeDefinition, GraphDefinition, IntoGraph, NodeDefinition};

/// Node payload as exported by the canvas editor.
///
/// The editor attaches presentation fields (label, icon, color) next to the
/// ones the compiler cares about; everything unknown is ignored.
#[derive(Debug, Deserialize, Clone)]
pub struct UiNodeData {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub params: AHashMap<String, serde_json::Value>,
}

/// A node in the editor export.
#[derive(Debug, Deserialize)]
pub struct UiNode {
    pub id: String,
    pub data: UiNodeData,
}

/// An edge in the editor export.
#[derive(Debug, Deserialize)]
pub struct UiEdge {
    #[serde(default)]
    pub id: String,
    pub source: String,
    pub target: String,
}

/// Complete editor export: the input boundary of the compiler.
#[derive(Debug, Deserialize)]
pub struct UiGraph {
    pub nodes: Vec<UiNode>,
    pub edges: Vec<UiEdge>,
}

impl IntoGraph for UiGraph {
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
        // The editor cascades deletions, so an edge referencing a missing
        // node means the export itself is corrupt.
        let known: AHashSet<&str> = self.nodes.iter().map(|n| n.id.as_str()).collect();
        for edge in &self.edges {
            for endpoint in [&edge.source, &edge.target] {
                if !known.contains(endpoint.as_str()) {
                    return Err(GraphConversionError::ValidationError(format!(
                        "edge '{}' references unknown node '{}'",
                        edge.id, endpoint
                    )));
                }
            }
        }

        let nodes = self
            .nodes
            .into_iter()
            .map(|ui_node| NodeDefinition {
                id: ui_node.id,
                node_type: ui_node.data.node_type,
                params: ui_node.data.params,
            })
            .collect();

        let edges = self
            .edges
            .into_iter()
            .map(|ui_edge| EdgeDefinition {
                id: ui_edge.id,
                source: ui_edge.source,
                target: ui_edge.target,
            })
            .collect();

        Ok(GraphDefinition { nodes, edges })
    }
}
