mod conversion;
mod definition;

pub use conversion::IntoGraph;
pub use definition::{EdgeDefinition, GraphDefinition, NodeDefinition};
