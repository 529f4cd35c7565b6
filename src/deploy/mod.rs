//! Drives one graph through compile, submit and monitor.

use std::time::Duration;

use chrono::Utc;
use tokio::time::{Instant, sleep};
use tracing::{info, warn};

use crate::client::ArgoClient;
use crate::compiler::PipelineCompiler;
use crate::error::DeployError;
use crate::graph::GraphDefinition;
use crate::workflow::WorkflowConfig;

/// Timing knobs for one deploy attempt.
#[derive(Debug, Clone)]
pub struct DeployConfig {
    /// Pause between status polls.
    pub poll_interval: Duration,
    /// Overall budget for the monitoring loop.
    pub timeout: Duration,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(5),
            timeout: Duration::from_secs(300),
        }
    }
}

/// Terminal result of a monitored deploy.
#[derive(Debug, Clone)]
pub struct DeployOutcome {
    /// The engine-assigned workflow name.
    pub workflow_name: String,
    /// The terminal phase string reported by the engine.
    pub phase: String,
}

/// Runs deploy attempts against one orchestrator.
///
/// Each attempt compiles the graph under a fresh time-based name, so
/// concurrent deploys never collide on a workflow name and no locking is
/// needed. A failure anywhere before submission never contacts the engine.
pub struct DeployEngine {
    client: ArgoClient,
    config: DeployConfig,
    workflow_config: WorkflowConfig,
}

impl DeployEngine {
    pub fn new(client: ArgoClient) -> Self {
        Self {
            client,
            config: DeployConfig::default(),
            workflow_config: WorkflowConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: DeployConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_workflow_config(mut self, workflow_config: WorkflowConfig) -> Self {
        self.workflow_config = workflow_config;
        self
    }

    /// Compiles and submits the graph, then blocks until the workflow
    /// reaches a terminal phase or the monitoring budget runs out.
    pub async fn deploy(&self, graph: &GraphDefinition) -> Result<DeployOutcome, DeployError> {
        let compiler = PipelineCompiler::builder(graph.clone())
            .workflow_config(self.workflow_config.clone())
            .build();

        let requested = Utc::now().timestamp_millis().to_string();
        let document = compiler.compile(&requested)?;
        info!(
            workflow = %requested,
            nodes = graph.nodes.len(),
            "compiled workflow document"
        );

        self.client.probe().await?;

        let submitted = self.client.submit(&document).await?;
        let name = match submitted.name() {
            Some(name) => name.to_string(),
            None => {
                // Without the echoed name, polling can only guess.
                warn!("submission response carried no workflow name");
                requested
            }
        };
        info!(workflow = %name, "workflow submitted");

        self.monitor(&name).await
    }

    /// Polls the workflow until its phase reads as succeeded or failed.
    ///
    /// Transient client errors (connection refused, timeouts, 5xx) are
    /// logged and the loop keeps going; anything else aborts the attempt.
    pub async fn monitor(&self, name: &str) -> Result<DeployOutcome, DeployError> {
        let started = Instant::now();

        while started.elapsed() < self.config.timeout {
            match self.client.workflow_status(name).await {
                Ok(status) => {
                    let phase = status.phase().to_string();
                    info!(workflow = %name, phase = %phase, "workflow status");

                    let lowered = phase.to_lowercase();
                    if lowered.contains("succeeded") {
                        return Ok(DeployOutcome {
                            workflow_name: name.to_string(),
                            phase,
                        });
                    }
                    if lowered.contains("failed") || lowered.contains("error") {
                        return Err(DeployError::WorkflowFailed {
                            name: name.to_string(),
                            phase,
                        });
                    }
                }
                Err(e) if e.is_transient() => {
                    warn!(workflow = %name, error = %e, "transient error while polling, retrying");
                }
                Err(e) => return Err(e.into()),
            }

            sleep(self.config.poll_interval).await;
        }

        Err(DeployError::Timeout {
            name: name.to_string(),
            waited_secs: self.config.timeout.as_secs(),
        })
    }
}
