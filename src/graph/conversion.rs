use super::definition::GraphDefinition;
use crate::error::GraphConversionError;

/// A trait for custom front-end data models that can be converted into a
/// weft `GraphDefinition`.
///
/// This is the primary extension point for keeping the compiler
/// format-agnostic. The canvas editor, a saved-pipeline file format, or a
/// test fixture can each implement this trait to provide a translation layer
/// into the canonical graph model; no editor types ever reach the core.
///
/// # Example
///
/// ```rust,no_run
/// use weft::error::GraphConversionError;
/// use weft::graph::{GraphDefinition, IntoGraph, NodeDefinition};
///
/// // 1. Define your custom structs for parsing your format.
/// struct MyStep { id: String, operation: String }
/// struct MyPipeline { steps: Vec<MyStep> }
///
/// // 2. Implement `IntoGraph` for your top-level struct.
/// impl IntoGraph for MyPipeline {
///     fn into_graph(self) -> Result<GraphDefinition, GraphConversionError> {
///         let nodes = self
///             .steps
///             .into_iter()
///             .map(|step| NodeDefinition {
///                 id: step.id,
///                 node_type: step.operation,
///                 params: Default::default(),
///             })
///             .collect();
///
///         Ok(GraphDefinition {
///             nodes,
///             edges: vec![], // Convert your connections here as well
///         })
///     }
/// }
/// ```
pub trait IntoGraph {
    /// Consumes the object and converts it into a weft-compatible pipeline graph.
    fn into_graph(self) -> Result<GraphDefinition, GraphConversionError>;
}
