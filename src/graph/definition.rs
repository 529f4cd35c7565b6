use ahash::AHashMap;

/// The complete, canonical definition of a pipeline graph, ready for compilation.
/// This is the target structure for any front-end data model conversion.
#[derive(Debug, Clone, Default)]
pub struct GraphDefinition {
    pub nodes: Vec<NodeDefinition>,
    pub edges: Vec<EdgeDefinition>,
}

/// A single processing step placed on the canvas.
#[derive(Debug, Clone)]
pub struct NodeDefinition {
    pub id: String,
    pub node_type: String,
    /// Configuration entered in the parameter sidebar. Values are strings in
    /// the common case; list-valued parameters arrive as JSON arrays.
    pub params: AHashMap<String, serde_json::Value>,
}

/// A connection between two nodes: `target` consumes the output of `source`.
#[derive(Debug, Clone)]
pub struct EdgeDefinition {
    pub id: String,
    pub source: String,
    pub target: String,
}

impl GraphDefinition {
    /// Looks up a node by id.
    pub fn node(&self, id: &str) -> Option<&NodeDefinition> {
        self.nodes.iter().find(|n| n.id == id)
    }
}
