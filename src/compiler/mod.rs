use crate::error::CompileError;
use crate::graph::GraphDefinition;
use crate::workflow::{WorkflowCompiler, WorkflowConfig, WorkflowDocument};

mod plan;
mod traverse;
mod validate;

pub use plan::{PlanEntry, build_plan};
pub use traverse::level_order;
pub use validate::GraphValidator;

/// Compiles a drawn graph into a deployable workflow document.
///
/// The compiler is pure and synchronous: it reads the graph, never mutates
/// it, and holds no shared state, so one instance can be used repeatedly and
/// different instances concurrently without coordination.
pub struct PipelineCompiler {
    graph: GraphDefinition,
    validator: GraphValidator,
    workflow: WorkflowCompiler,
}

pub struct PipelineCompilerBuilder {
    graph: GraphDefinition,
    validator: GraphValidator,
    config: WorkflowConfig,
}

impl PipelineCompilerBuilder {
    pub fn new(graph: GraphDefinition) -> Self {
        Self {
            graph,
            validator: GraphValidator::new(),
            config: WorkflowConfig::default(),
        }
    }

    /// Restricts the graph to a single root node (historical behavior).
    pub fn single_root(mut self, enabled: bool) -> Self {
        self.validator = self.validator.single_root(enabled);
        self
    }

    /// Overrides the document-shaping configuration (image, namespace, ...).
    pub fn workflow_config(mut self, config: WorkflowConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> PipelineCompiler {
        PipelineCompiler {
            graph: self.graph,
            validator: self.validator,
            workflow: WorkflowCompiler::new(self.config),
        }
    }
}

impl PipelineCompiler {
    pub fn builder(graph: GraphDefinition) -> PipelineCompilerBuilder {
        PipelineCompilerBuilder::new(graph)
    }

    /// Validates the graph and produces its execution plan: the linear node
    /// order annotated with dependencies and retained parameters.
    pub fn plan(&self) -> Result<Vec<PlanEntry>, CompileError> {
        let roots = self.validator.validate(&self.graph)?;
        let order = level_order(&self.graph, &roots);
        Ok(build_plan(&order, &self.graph))
    }

    /// Runs validation, linearization, planning and document generation in
    /// one pass.
    pub fn compile(&self, workflow_name: &str) -> Result<WorkflowDocument, CompileError> {
        let entries = self.plan()?;
        self.workflow.compile(workflow_name, &entries)
    }
}
