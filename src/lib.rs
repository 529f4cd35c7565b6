//! # Weft - Graph-to-Workflow Compilation Engine
//!
//! **Weft** compiles a visually composed graph of data-processing steps into
//! a declarative, dependency-respecting workflow document and deploys it to a
//! remote execution engine (an Argo-Workflows-compatible orchestrator). The
//! canvas editor draws nodes and edges; weft validates the result as a
//! well-formed pipeline, linearizes it, and weaves it into a task DAG the
//! engine can run.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic: it operates on a canonical `GraphDefinition`
//! and never sees editor types. The primary workflow is:
//!
//! 1.  **Load Your Graph**: Parse the editor's export (or any custom pipeline
//!     format) into your own Rust structs, or use the bundled [`ui::UiGraph`]
//!     serde model.
//! 2.  **Convert to Weft's Model**: Implement the [`graph::IntoGraph`] trait
//!     (already provided for `UiGraph`) to translate into a `GraphDefinition`.
//! 3.  **Compile**: Use [`compiler::PipelineCompiler`] to validate the graph
//!     (non-empty, acyclic, rooted), compute the execution order, build the
//!     plan, and emit a [`workflow::WorkflowDocument`].
//! 4.  **Deploy**: Hand the document to [`deploy::DeployEngine`], which
//!     submits it through the [`client::ArgoClient`] and polls until the
//!     workflow reaches a terminal phase.
//!
//! ## Quick Start
//!
//! The following example compiles a two-step pipeline and prints the
//! resulting document.
//!
//! ```rust,no_run
//! use ahash::AHashMap;
//! use weft::compiler::PipelineCompiler;
//! use weft::graph::{EdgeDefinition, GraphDefinition, NodeDefinition};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut params = AHashMap::new();
//!     params.insert("dataset_name".to_string(), serde_json::json!("Demo"));
//!
//!     let graph = GraphDefinition {
//!         nodes: vec![
//!             NodeDefinition {
//!                 id: "load-1".to_string(),
//!                 node_type: "load-dataset".to_string(),
//!                 params,
//!             },
//!             NodeDefinition {
//!                 id: "mean-1".to_string(),
//!                 node_type: "mean".to_string(),
//!                 params: AHashMap::new(),
//!             },
//!         ],
//!         edges: vec![EdgeDefinition {
//!             id: "e1".to_string(),
//!             source: "load-1".to_string(),
//!             target: "mean-1".to_string(),
//!         }],
//!     };
//!
//!     let compiler = PipelineCompiler::builder(graph).build();
//!     let document = compiler.compile("demo-pipeline")?;
//!     println!("{}", serde_json::to_string_pretty(&document)?);
//!     Ok(())
//! }
//! ```
//!
//! Deployment is async; see [`deploy::DeployEngine::deploy`] for the
//! submit-and-monitor loop.

pub mod client;
pub mod compiler;
pub mod deploy;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod ui;
pub mod workflow;
