use itertools::Itertools;

use crate::graph::GraphDefinition;

/// One schedulable step of the pipeline: a node in execution order together
/// with its upstream dependencies and its retained parameters.
///
/// Produced fresh for every deploy and never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanEntry {
    pub node_id: String,
    pub node_type: String,
    /// Upstream node ids, de-duplicated, in edge-list order.
    pub depends_on: Vec<String>,
    /// Parameters with empty values dropped, sorted by key so that compiled
    /// output is deterministic.
    pub params: Vec<(String, serde_json::Value)>,
}

impl PlanEntry {
    /// Returns a parameter's string value, if present.
    pub fn param_str(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(name, _)| name == key)
            .and_then(|(_, value)| value.as_str())
    }
}

/// Converts the linear node order plus edge dependency information into an
/// ordered list of plan entries.
///
/// An id with no matching node is skipped; well-formed input never hits that
/// path. An empty-string parameter value means "use the task's default", so
/// such parameters are dropped here and never reach the command line.
pub fn build_plan(order: &[String], graph: &GraphDefinition) -> Vec<PlanEntry> {
    order
        .iter()
        .filter_map(|id| {
            let node = graph.node(id)?;

            let depends_on = graph
                .edges
                .iter()
                .filter(|e| e.target == *id)
                .map(|e| e.source.clone())
                .unique()
                .collect();

            let params = node
                .params
                .iter()
                .filter(|(_, value)| !is_empty_value(value))
                .map(|(key, value)| (key.clone(), value.clone()))
                .sorted_by(|a, b| a.0.cmp(&b.0))
                .collect();

            Some(PlanEntry {
                node_id: id.clone(),
                node_type: node.node_type.clone(),
                depends_on,
                params,
            })
        })
        .collect()
}

fn is_empty_value(value: &serde_json::Value) -> bool {
    value.is_null() || value.as_str() == Some("")
}
