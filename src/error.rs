use thiserror::Error;

/// Errors detected while validating the drawn graph, before any compilation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("The graph has no nodes; there is nothing to deploy")]
    EmptyGraph,

    #[error("The graph contains a cycle through node '{node_id}'")]
    CycleDetected { node_id: String },

    #[error("No root node found; every node has an incoming connection")]
    NoRootNode,

    #[error("Found {count} root nodes, but this pipeline is restricted to a single starting point")]
    MultipleRoots { count: usize },
}

/// Errors that can occur while compiling an execution plan into a workflow document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Node '{node_id}' has an unregistered operation type: '{type_name}'")]
    UnknownOperation { node_id: String, type_name: String },
}

/// Errors that can occur when converting a custom front-end format into a
/// `GraphDefinition`.
#[derive(Error, Debug, Clone)]
pub enum GraphConversionError {
    #[error("Invalid graph data: {0}")]
    ValidationError(String),
}

/// Errors from the orchestrator HTTP boundary.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Orchestrator API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

impl ClientError {
    /// Whether the monitoring loop may keep polling after this error.
    ///
    /// Connection-level failures and server-side overload responses are
    /// expected to clear on their own; anything else aborts the attempt.
    pub fn is_transient(&self) -> bool {
        match self {
            ClientError::Http(e) => e.is_timeout() || e.is_connect(),
            ClientError::Api { status, .. } => *status == 429 || *status >= 500,
            ClientError::InvalidUrl(_) => false,
        }
    }
}

/// Errors covering a full deploy attempt, from validation to terminal phase.
#[derive(Error, Debug)]
pub enum DeployError {
    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("Workflow '{name}' finished in phase '{phase}'")]
    WorkflowFailed { name: String, phase: String },

    #[error("Gave up monitoring workflow '{name}' after {waited_secs}s; it may still be running")]
    Timeout { name: String, waited_secs: u64 },
}
