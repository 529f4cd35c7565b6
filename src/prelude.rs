//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the
//! weft crate. Import this module to get access to the core functionality
//! without having to import each type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! // Use the prelude to get easy access to all the core types.
//! use weft::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! // Load a graph exported by the canvas editor and compile it.
//! let graph_json = std::fs::read_to_string("path/to/graph.json")?;
//! let ui_graph: UiGraph = serde_json::from_str(&graph_json)?;
//!
//! let compiler = PipelineCompiler::builder(ui_graph.into_graph()?).build();
//! let document = compiler.compile("my-pipeline")?;
//!
//! println!("{}", serde_json::to_string_pretty(&document)?);
//! # Ok(())
//! # }
//! ```

// Core compilation pipeline
pub use crate::compiler::{GraphValidator, PipelineCompiler, PlanEntry, build_plan, level_order};

// Graph model and conversion
pub use crate::graph::{EdgeDefinition, GraphDefinition, IntoGraph, NodeDefinition};

// Editor boundary types
pub use crate::ui::UiGraph;

// Workflow document generation
pub use crate::workflow::{
    OperationKind, WorkflowCompiler, WorkflowConfig, WorkflowDocument, sanitize_task_name,
    sanitize_workflow_name,
};

// Orchestrator client and deploy engine
pub use crate::client::{ArgoClient, ClientConfig};
pub use crate::deploy::{DeployConfig, DeployEngine, DeployOutcome};

// Error types
pub use crate::error::{ClientError, CompileError, DeployError, ValidationError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
