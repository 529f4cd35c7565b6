use std::collections::BTreeMap;

use crate::compiler::PlanEntry;
use crate::error::CompileError;

mod document;
mod registry;
mod sanitize;

pub use document::{
    Arguments, ContainerSpec, ContainerTemplate, Dag, DagTask, DagTemplate, EmptyDir, Inputs,
    NameValue, ResourceList, Resources, Template, TtlStrategy, Volume, VolumeMount,
    WorkflowDocument, WorkflowMetadata, WorkflowSpec,
};
pub use registry::OperationKind;
pub use sanitize::{sanitize_task_name, sanitize_workflow_name};

use sanitize::sanitize_fragment;

/// Shared ephemeral volume every task mounts, so tasks in one workflow can
/// exchange files.
pub const SHARED_VOLUME_NAME: &str = "workflow-data";
pub const SHARED_VOLUME_MOUNT_PATH: &str = "/app/data";

/// Name of the aggregating DAG template; also the document's entrypoint.
const MAIN_DAG: &str = "main-dag";

/// Parameters treated as on/off toggles: emitted as a bare `--flag` when the
/// value is "true" and omitted entirely otherwise.
const BOOLEAN_FLAGS: &[&str] = &["minio_secure"];

/// Settings that shape the emitted document but carry no logic: which SDK
/// image runs the tasks, where the workflow lives, how it is named, and how
/// long the engine keeps it around after completion.
#[derive(Debug, Clone)]
pub struct WorkflowConfig {
    pub image: String,
    pub namespace: String,
    pub generate_name_prefix: String,
    pub ttl_seconds_after_completion: u64,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            image: "ghcr.io/weft-dev/pipeline-sdk:latest".to_string(),
            namespace: "argo".to_string(),
            generate_name_prefix: "weft".to_string(),
            ttl_seconds_after_completion: 86400,
        }
    }
}

/// Maps plan entries onto specialized container templates and the
/// aggregating DAG, and assembles the final document.
///
/// Every node instance gets its own template, cloned from its type's base
/// template, so two nodes of the same operation can carry different CLI
/// arguments. Base templates for types with no plan entry are never emitted.
pub struct WorkflowCompiler {
    config: WorkflowConfig,
}

impl WorkflowCompiler {
    pub fn new(config: WorkflowConfig) -> Self {
        Self { config }
    }

    /// Compiles an execution plan into a complete workflow document.
    ///
    /// Fails on the first plan entry whose node type has no registered
    /// operation kind; a document referencing a missing template would be
    /// rejected by the engine after submission, so nothing partial is built.
    pub fn compile(
        &self,
        workflow_name: &str,
        entries: &[PlanEntry],
    ) -> Result<WorkflowDocument, CompileError> {
        let sanitized_name = sanitize_workflow_name(workflow_name);

        let mut tasks = Vec::with_capacity(entries.len());
        let mut specialized = Vec::with_capacity(entries.len());
        for entry in entries {
            let kind = OperationKind::parse(&entry.node_type).ok_or_else(|| {
                CompileError::UnknownOperation {
                    node_id: entry.node_id.clone(),
                    type_name: entry.node_type.clone(),
                }
            })?;
            tasks.push(task_for(kind, entry));
            specialized.push(Template::Container(specialize(
                kind.base_template(&self.config.image),
                kind,
                entry,
            )));
        }

        let mut templates = Vec::with_capacity(specialized.len() + 1);
        templates.push(Template::Dag(DagTemplate {
            name: MAIN_DAG.to_string(),
            dag: Dag { tasks },
        }));
        templates.extend(specialized);

        Ok(WorkflowDocument {
            api_version: "argoproj.io/v1alpha1".to_string(),
            kind: "Workflow".to_string(),
            metadata: WorkflowMetadata {
                generate_name: format!("{}-{}-", self.config.generate_name_prefix, sanitized_name),
                namespace: self.config.namespace.clone(),
                labels: BTreeMap::from([
                    (
                        "workflows.argoproj.io/archive-strategy".to_string(),
                        "true".to_string(),
                    ),
                    ("workflow-name".to_string(), sanitized_name),
                ]),
            },
            spec: WorkflowSpec {
                entrypoint: MAIN_DAG.to_string(),
                ttl_strategy: Some(TtlStrategy {
                    seconds_after_completion: Some(self.config.ttl_seconds_after_completion),
                }),
                templates,
                volumes: vec![Volume {
                    name: SHARED_VOLUME_NAME.to_string(),
                    empty_dir: EmptyDir::default(),
                }],
            },
        })
    }
}

/// The per-instance template name: base type name plus the sanitized node id.
/// Plot nodes with an `operation` parameter are further qualified by it, so
/// several plots computing different aggregates stay distinguishable.
fn instance_template_name(kind: OperationKind, entry: &PlanEntry) -> String {
    if kind == OperationKind::Plot {
        if let Some(operation) = entry.param_str("operation").filter(|op| !op.is_empty()) {
            return format!(
                "plot-{}-{}",
                sanitize_fragment(operation),
                sanitize_fragment(&entry.node_id)
            );
        }
    }
    format!(
        "{}-{}",
        kind.template_name(),
        sanitize_fragment(&entry.node_id)
    )
}

/// The DAG task name for a plan entry, qualified like the template name for
/// plot nodes.
fn instance_task_name(kind: OperationKind, entry: &PlanEntry) -> String {
    if kind == OperationKind::Plot {
        if let Some(operation) = entry.param_str("operation").filter(|op| !op.is_empty()) {
            return sanitize_task_name(&format!("{}-{}", entry.node_id, operation));
        }
    }
    sanitize_task_name(&entry.node_id)
}

/// Derives the DAG task list entry for a plan entry.
fn task_for(kind: OperationKind, entry: &PlanEntry) -> DagTask {
    DagTask {
        name: instance_task_name(kind, entry),
        template: instance_template_name(kind, entry),
        dependencies: entry
            .depends_on
            .iter()
            .map(|dep| sanitize_task_name(dep))
            .collect(),
        arguments: Arguments {
            parameters: entry
                .params
                .iter()
                .map(|(key, value)| NameValue {
                    name: key.clone(),
                    value: param_value_string(value),
                })
                .collect(),
        },
    }
}

/// Pure per-instance specialization: clone of the base template renamed for
/// this node, with its CLI arguments computed from the retained parameters
/// and the shared volume mounted.
fn specialize(
    mut template: ContainerTemplate,
    kind: OperationKind,
    entry: &PlanEntry,
) -> ContainerTemplate {
    template.name = instance_template_name(kind, entry);
    template.container.args = build_cli_args(&entry.params);
    template.container.volume_mounts = vec![VolumeMount {
        name: SHARED_VOLUME_NAME.to_string(),
        mount_path: SHARED_VOLUME_MOUNT_PATH.to_string(),
    }];
    template
}

/// Converts retained parameters into `--key value` pairs for the runner.
/// Boolean-flag parameters become a bare `--key` when "true" and disappear
/// otherwise; there is no way to pass an explicit empty string downstream.
fn build_cli_args(params: &[(String, serde_json::Value)]) -> Vec<String> {
    let mut args = Vec::new();
    for (key, value) in params {
        let rendered = param_value_string(value);
        if BOOLEAN_FLAGS.contains(&key.as_str()) {
            if rendered.eq_ignore_ascii_case("true") {
                args.push(format!("--{key}"));
            }
            continue;
        }
        args.push(format!("--{key}"));
        args.push(rendered);
    }
    args
}

/// Renders a parameter value the way the runner expects it on the command
/// line: strings pass through as-is, arrays and everything else use their
/// JSON form.
fn param_value_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
