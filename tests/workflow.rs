//! Tests for workflow document generation: sanitization, template
//! specialization, CLI arguments and document assembly.
mod common;
use common::*;
use serde_json::json;
use weft::prelude::*;
use weft::workflow::{SHARED_VOLUME_MOUNT_PATH, SHARED_VOLUME_NAME, Template};

fn compile(graph: GraphDefinition, name: &str) -> weft::workflow::WorkflowDocument {
    PipelineCompiler::builder(graph)
        .build()
        .compile(name)
        .expect("compilation should succeed")
}

#[test]
fn test_sanitize_workflow_name_fixes_punctuation() {
    assert_eq!(sanitize_workflow_name("My Workflow!!"), "my-workflow-x");
}

#[test]
fn test_sanitize_workflow_name_properties() {
    let long = "a".repeat(80);
    for raw in [
        "My Workflow!!",
        "--weird--",
        "ünïcode name",
        "123 starts with digits",
        long.as_str(),
        "",
    ] {
        let sanitized = sanitize_workflow_name(raw);
        assert!(sanitized.len() <= 63, "too long for '{raw}'");
        let first = sanitized.chars().next().unwrap();
        assert!(
            first.is_ascii_lowercase() || first.is_ascii_digit(),
            "bad first char in '{sanitized}'"
        );
        assert!(
            sanitized.chars().last().unwrap().is_ascii_alphanumeric(),
            "bad last char in '{sanitized}'"
        );
        assert!(
            sanitized
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "bad charset in '{sanitized}'"
        );
    }
}

#[test]
fn test_sanitize_task_name_strips_and_prefixes() {
    assert_eq!(sanitize_task_name("My Node"), "my-node");
    assert_eq!(sanitize_task_name("-abc-"), "abc");
    assert_eq!(sanitize_task_name("9lives"), "node-9lives");
    assert_eq!(sanitize_task_name("load-dataset-1"), "load-dataset-1");
}

#[test]
fn test_linear_graph_compiles_to_two_tasks_with_dependency() {
    let document = compile(linear_graph(), "demo");

    // One DAG template plus one specialized template per node.
    assert_eq!(document.spec.templates.len(), 3);

    let dag = main_dag(&document);
    assert_eq!(dag.name, "main-dag");
    assert_eq!(document.spec.entrypoint, "main-dag");
    assert_eq!(dag.dag.tasks.len(), 2);

    let task_a = &dag.dag.tasks[0];
    assert_eq!(task_a.name, "a");
    assert_eq!(task_a.template, "download-data-a");
    assert!(task_a.dependencies.is_empty());

    let task_b = &dag.dag.tasks[1];
    assert_eq!(task_b.name, "b");
    assert_eq!(task_b.template, "plot-b");
    assert_eq!(task_b.dependencies, vec!["a".to_string()]);
}

#[test]
fn test_disconnected_nodes_become_independent_tasks() {
    let document = compile(disconnected_pair(), "demo");
    let dag = main_dag(&document);
    assert_eq!(dag.dag.tasks.len(), 2);
    assert!(dag.dag.tasks.iter().all(|t| t.dependencies.is_empty()));
}

#[test]
fn test_every_specialized_template_mounts_the_shared_volume() {
    let document = compile(diamond_graph(), "demo");

    let mut containers = 0;
    for template in &document.spec.templates {
        if let Template::Container(container) = template {
            containers += 1;
            assert_eq!(container.container.volume_mounts.len(), 1);
            assert_eq!(container.container.volume_mounts[0].name, SHARED_VOLUME_NAME);
            assert_eq!(
                container.container.volume_mounts[0].mount_path,
                SHARED_VOLUME_MOUNT_PATH
            );
        }
    }
    assert_eq!(containers, 4);

    assert_eq!(document.spec.volumes.len(), 1);
    assert_eq!(document.spec.volumes[0].name, SHARED_VOLUME_NAME);
}

#[test]
fn test_empty_param_never_reaches_the_command_line() {
    let graph = GraphDefinition {
        nodes: vec![node_with_params(
            "a",
            "mean",
            &[("column", json!("age")), ("threshold", json!(""))],
        )],
        edges: vec![],
    };
    let document = compile(graph, "demo");

    let Some(Template::Container(container)) = document.spec.templates.get(1) else {
        panic!("expected a specialized container template");
    };
    assert_eq!(
        container.container.args,
        vec!["--column".to_string(), "age".to_string()]
    );
    assert!(!container.container.args.contains(&"--threshold".to_string()));
}

#[test]
fn test_boolean_flag_param_emits_bare_flag_only_when_true() {
    for (value, expected) in [
        (json!("true"), vec!["--minio_secure".to_string()]),
        (json!("True"), vec!["--minio_secure".to_string()]),
        (json!("false"), vec![]),
        (json!("anything-else"), vec![]),
    ] {
        let graph = GraphDefinition {
            nodes: vec![node_with_params(
                "a",
                "load-dataset",
                &[("minio_secure", value)],
            )],
            edges: vec![],
        };
        let document = compile(graph, "demo");
        let Some(Template::Container(container)) = document.spec.templates.get(1) else {
            panic!("expected a specialized container template");
        };
        assert_eq!(container.container.args, expected);
    }
}

#[test]
fn test_array_param_serializes_as_json_string() {
    let graph = GraphDefinition {
        nodes: vec![node_with_params(
            "a",
            "observation",
            &[("columns", json!(["age", "sex"]))],
        )],
        edges: vec![],
    };
    let document = compile(graph, "demo");

    let Some(Template::Container(container)) = document.spec.templates.get(1) else {
        panic!("expected a specialized container template");
    };
    assert_eq!(
        container.container.args,
        vec!["--columns".to_string(), r#"["age","sex"]"#.to_string()]
    );
}

#[test]
fn test_plot_instance_qualified_by_operation() {
    let graph = GraphDefinition {
        nodes: vec![node_with_params("viz", "plot", &[("operation", json!("mean"))])],
        edges: vec![],
    };
    let document = compile(graph, "demo");

    let dag = main_dag(&document);
    assert_eq!(dag.dag.tasks[0].name, "viz-mean");
    assert_eq!(dag.dag.tasks[0].template, "plot-mean-viz");

    let Some(Template::Container(container)) = document.spec.templates.get(1) else {
        panic!("expected a specialized container template");
    };
    assert_eq!(container.name, "plot-mean-viz");
}

#[test]
fn test_two_nodes_of_same_type_get_distinct_templates() {
    let graph = GraphDefinition {
        nodes: vec![
            node("first", "load-dataset"),
            node_with_params("second", "mean", &[("column", json!("age"))]),
            node_with_params("third", "mean", &[("column", json!("weight"))]),
        ],
        edges: vec![edge("first", "second"), edge("first", "third")],
    };
    let document = compile(graph, "demo");

    let names: Vec<&str> = document
        .spec
        .templates
        .iter()
        .map(|t| t.name())
        .collect();
    assert!(names.contains(&"mean-second"));
    assert!(names.contains(&"mean-third"));
}

#[test]
fn test_unknown_operation_type_is_fatal() {
    let graph = GraphDefinition {
        nodes: vec![node("a", "teleport")],
        edges: vec![],
    };
    let result = PipelineCompiler::builder(graph).build().compile("demo");
    assert_eq!(
        result.err(),
        Some(CompileError::UnknownOperation {
            node_id: "a".to_string(),
            type_name: "teleport".to_string(),
        })
    );
}

#[test]
fn test_compilation_is_idempotent() {
    let compiler = PipelineCompiler::builder(diamond_graph()).build();
    let first = compiler.compile("repeat").unwrap();
    let second = compiler.compile("repeat").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_document_metadata_and_arguments() {
    let graph = GraphDefinition {
        nodes: vec![node_with_params(
            "a",
            "load-dataset",
            &[("dataset_name", json!("Demo"))],
        )],
        edges: vec![],
    };
    let document = compile(graph, "My Workflow!!");

    assert_eq!(document.api_version, "argoproj.io/v1alpha1");
    assert_eq!(document.kind, "Workflow");
    assert_eq!(document.metadata.generate_name, "weft-my-workflow-x-");
    assert_eq!(
        document.metadata.labels.get("workflow-name"),
        Some(&"my-workflow-x".to_string())
    );

    let dag = main_dag(&document);
    let parameters = &dag.dag.tasks[0].arguments.parameters;
    assert_eq!(parameters.len(), 1);
    assert_eq!(parameters[0].name, "dataset_name");
    assert_eq!(parameters[0].value, "Demo");
}

#[test]
fn test_document_serializes_with_camel_case_keys() {
    let document = compile(linear_graph(), "demo");
    let value = serde_json::to_value(&document).unwrap();

    assert_eq!(value["apiVersion"], "argoproj.io/v1alpha1");
    assert!(value["metadata"]["generateName"].is_string());
    assert_eq!(
        value["spec"]["ttlStrategy"]["secondsAfterCompletion"],
        json!(86400)
    );
    assert!(value["spec"]["volumes"][0]["emptyDir"].is_object());

    // Specialized container templates carry camelCase mounts.
    let templates = value["spec"]["templates"].as_array().unwrap();
    let container = templates
        .iter()
        .find(|t| t.get("container").is_some())
        .unwrap();
    assert!(container["container"]["volumeMounts"][0]["mountPath"].is_string());
}
