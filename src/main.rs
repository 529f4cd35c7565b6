use weft::prelude::*;
use std::env;
use std::fs;

fn main() {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: cargo run -- <path/to/graph.json> [workflow-name]");
        std::process::exit(1);
    }

    let graph_path = &args[1];
    let workflow_name = args.get(2).map(String::as_str).unwrap_or("workflow");

    println!("Loading graph from: {}", graph_path);

    let graph_json = match fs::read_to_string(graph_path) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Failed to read graph file '{}': {}", graph_path, e);
            std::process::exit(1);
        }
    };

    let ui_graph: UiGraph = match serde_json::from_str(&graph_json) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Failed to parse graph JSON: {}", e);
            std::process::exit(1);
        }
    };

    let graph = match ui_graph.into_graph() {
        Ok(graph) => graph,
        Err(e) => {
            eprintln!("Failed to convert graph: {}", e);
            std::process::exit(1);
        }
    };

    // Compilation phase
    println!("\nStarting Weft Pipeline Compilation...");

    let compiler = PipelineCompiler::builder(graph).build();

    let plan = match compiler.plan() {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("Compilation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("Compilation Successful! {} tasks planned.", plan.len());
    for entry in &plan {
        if entry.depends_on.is_empty() {
            println!("  -> Task '{}' ({})", entry.node_id, entry.node_type);
        } else {
            println!(
                "  -> Task '{}' ({}), after {}",
                entry.node_id,
                entry.node_type,
                entry.depends_on.join(", ")
            );
        }
    }

    let document = match compiler.compile(workflow_name) {
        Ok(document) => document,
        Err(e) => {
            eprintln!("Workflow generation failed: {}", e);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&document) {
        Ok(rendered) => {
            println!("\nWorkflow document:");
            println!("{}", rendered);
        }
        Err(e) => {
            eprintln!("Failed to serialize workflow document: {}", e);
            std::process::exit(1);
        }
    }
}
