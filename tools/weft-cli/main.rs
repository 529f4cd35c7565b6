use clap::{Parser, Subcommand};
use std::fs;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use weft::prelude::*;

/// A graph-to-workflow compilation and deployment CLI
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a graph export into a workflow document and print it
    Compile {
        /// Path to the graph JSON file exported by the editor
        graph_path: String,

        /// Workflow name used for labels and name generation
        #[arg(short, long, default_value = "workflow")]
        name: String,

        /// Reject graphs with more than one root node
        #[arg(long)]
        single_root: bool,
    },
    /// Compile a graph, submit it to the orchestrator and monitor it
    Deploy {
        /// Path to the graph JSON file exported by the editor
        graph_path: String,

        /// Base URL of the orchestrator API
        #[arg(long)]
        server: String,

        /// Bearer token for the orchestrator
        #[arg(long, env = "WEFT_ARGO_TOKEN", default_value = "", hide_env_values = true)]
        token: String,

        /// Namespace to submit into
        #[arg(long, default_value = "argo")]
        namespace: String,

        /// Container image running the pipeline tasks
        #[arg(long)]
        image: Option<String>,

        /// Seconds between status polls
        #[arg(long, default_value_t = 5)]
        poll_secs: u64,

        /// Overall monitoring budget in seconds
        #[arg(long, default_value_t = 300)]
        timeout_secs: u64,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Compile {
            graph_path,
            name,
            single_root,
        } => run_compile(&graph_path, &name, single_root),
        Command::Deploy {
            graph_path,
            server,
            token,
            namespace,
            image,
            poll_secs,
            timeout_secs,
        } => {
            run_deploy(
                &graph_path,
                &server,
                &token,
                &namespace,
                image,
                poll_secs,
                timeout_secs,
            )
            .await
        }
    }
}

fn load_graph(graph_path: &str) -> GraphDefinition {
    let graph_json = fs::read_to_string(graph_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read graph file '{}': {}", graph_path, e))
    });
    let ui_graph: UiGraph = serde_json::from_str(&graph_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse graph JSON: {}", e)));
    ui_graph
        .into_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert graph: {}", e)))
}

fn run_compile(graph_path: &str, name: &str, single_root: bool) {
    let graph = load_graph(graph_path);

    let compiler = PipelineCompiler::builder(graph)
        .single_root(single_root)
        .build();
    let document = compiler
        .compile(name)
        .unwrap_or_else(|e| exit_with_error(&format!("Compilation failed: {}", e)));

    let rendered = serde_json::to_string_pretty(&document).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to serialize workflow document: {}", e))
    });
    println!("{}", rendered);
}

async fn run_deploy(
    graph_path: &str,
    server: &str,
    token: &str,
    namespace: &str,
    image: Option<String>,
    poll_secs: u64,
    timeout_secs: u64,
) {
    let graph = load_graph(graph_path);

    let client_config = ClientConfig::new(server, token).with_namespace(namespace);
    let client = ArgoClient::new(client_config)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to create client: {}", e)));

    let mut workflow_config = WorkflowConfig {
        namespace: namespace.to_string(),
        ..WorkflowConfig::default()
    };
    if let Some(image) = image {
        workflow_config.image = image;
    }

    let engine = DeployEngine::new(client)
        .with_config(DeployConfig {
            poll_interval: Duration::from_secs(poll_secs),
            timeout: Duration::from_secs(timeout_secs),
        })
        .with_workflow_config(workflow_config);

    match engine.deploy(&graph).await {
        Ok(outcome) => {
            println!(
                "Workflow '{}' finished: {}",
                outcome.workflow_name, outcome.phase
            );
        }
        Err(e) => exit_with_error(&format!("Deployment failed: {}", e)),
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
