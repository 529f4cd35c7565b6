mod types;

pub use types::{UiEdge, UiGraph, UiNode, UiNodeData};
