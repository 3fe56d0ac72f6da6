use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

use sdf_file::{FileResult, load_json, load_yaml, save_json, save_yaml};
use sdf_graph::Graph;

#[derive(Parser)]
#[command(name = "sdf-cli")]
#[command(about = "SDF graph toolkit - model, transform and export synchronous dataflow graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a graph file
    Validate {
        /// Path to the graph file (YAML or JSON)
        graph_path: PathBuf,
    },
    /// Show a summary of a graph
    Info {
        /// Path to the graph file
        graph_path: PathBuf,
    },
    /// Check whether a graph is homogeneous (every rate equal to 1)
    Hsdf {
        /// Path to the graph file
        graph_path: PathBuf,
    },
    /// Model auto-concurrency bounds as explicit self-channels
    Autoconc {
        /// Path to the graph file
        graph_path: PathBuf,
        /// Maximum number of overlapping firings per actor
        #[arg(long)]
        max_degree: u32,
        /// Output graph file
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Convert a graph between YAML and JSON carriers
    Convert {
        /// Input graph file
        input: PathBuf,
        /// Output graph file (format from extension)
        output: PathBuf,
    },
    /// Export a graph in DOT format
    Dot {
        /// Path to the graph file
        graph_path: PathBuf,
        /// Output file (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export a graph as HAPI C++ process-network skeletons
    Hapi {
        /// Path to the graph file
        graph_path: PathBuf,
        /// Directory for the generated files
        #[arg(short, long)]
        output_dir: PathBuf,
    },
}

fn main() -> FileResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { graph_path } => cmd_validate(&graph_path),
        Commands::Info { graph_path } => cmd_info(&graph_path),
        Commands::Hsdf { graph_path } => cmd_hsdf(&graph_path),
        Commands::Autoconc {
            graph_path,
            max_degree,
            output,
        } => cmd_autoconc(&graph_path, max_degree, &output),
        Commands::Convert { input, output } => cmd_convert(&input, &output),
        Commands::Dot { graph_path, output } => cmd_dot(&graph_path, output.as_deref()),
        Commands::Hapi {
            graph_path,
            output_dir,
        } => cmd_hapi(&graph_path, &output_dir),
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

fn load_graph(path: &Path) -> FileResult<Graph> {
    if is_json(path) {
        load_json(path)
    } else {
        load_yaml(path)
    }
}

fn save_graph(path: &Path, graph: &Graph) -> FileResult<()> {
    if is_json(path) {
        save_json(path, graph)
    } else {
        save_yaml(path, graph)
    }
}

fn cmd_validate(graph_path: &Path) -> FileResult<()> {
    println!("Validating graph: {}", graph_path.display());
    let graph = load_graph(graph_path)?;
    println!(
        "✓ Graph '{}' is valid ({} actors, {} channels)",
        graph.name(),
        graph.nr_actors(),
        graph.nr_channels()
    );
    Ok(())
}

fn cmd_info(graph_path: &Path) -> FileResult<()> {
    let graph = load_graph(graph_path)?;

    println!("Graph '{}' (type {})", graph.name(), graph.kind());
    println!("  Actors:   {}", graph.nr_actors());
    println!("  Channels: {}", graph.nr_channels());

    for actor in graph.actors() {
        println!(
            "  {} ({}) - {} ports{}",
            actor.name(),
            actor.kind(),
            actor.nr_ports(),
            if actor.is_connected() {
                ""
            } else {
                ", not fully connected"
            }
        );
    }
    for channel in graph.channels() {
        let endpoints = match (channel.src(), channel.dst()) {
            (Some(src), Some(dst)) => {
                let (sa, sp) = graph.endpoint(src)?;
                let (da, dp) = graph.endpoint(dst)?;
                format!(
                    "{}.{} ({}) -> {}.{} ({})",
                    sa.name(),
                    sp.name(),
                    sp.rate(),
                    da.name(),
                    dp.name(),
                    dp.rate()
                )
            }
            _ => "unconnected".to_string(),
        };
        println!(
            "  {}: {} [{} initial tokens]",
            channel.name(),
            endpoints,
            channel.initial_tokens()
        );
    }
    Ok(())
}

fn cmd_hsdf(graph_path: &Path) -> FileResult<()> {
    let graph = load_graph(graph_path)?;
    if sdf_transform::is_hsdf(&graph) {
        println!("✓ Graph '{}' is a HSDF graph", graph.name());
    } else {
        println!("✗ Graph '{}' is not a HSDF graph", graph.name());
    }
    Ok(())
}

fn cmd_autoconc(graph_path: &Path, max_degree: u32, output: &Path) -> FileResult<()> {
    let graph = load_graph(graph_path)?;
    let transformed = sdf_transform::model_auto_concurrency(&graph, max_degree)?;
    save_graph(output, &transformed)?;
    println!(
        "✓ Added {} self-channels (max degree {}), written to {}",
        transformed.nr_channels() - graph.nr_channels(),
        max_degree,
        output.display()
    );
    Ok(())
}

fn cmd_convert(input: &Path, output: &Path) -> FileResult<()> {
    let graph = load_graph(input)?;
    save_graph(output, &graph)?;
    println!("✓ Converted {} -> {}", input.display(), output.display());
    Ok(())
}

fn cmd_dot(graph_path: &Path, output: Option<&Path>) -> FileResult<()> {
    let graph = load_graph(graph_path)?;

    let mut buf = Vec::new();
    sdf_export::write_dot(&graph, &mut buf)?;

    if let Some(path) = output {
        std::fs::write(path, buf)?;
        println!("✓ DOT output written to {}", path.display());
    } else {
        std::io::stdout().write_all(&buf)?;
    }
    Ok(())
}

fn cmd_hapi(graph_path: &Path, output_dir: &Path) -> FileResult<()> {
    let graph = load_graph(graph_path)?;
    std::fs::create_dir_all(output_dir)?;
    sdf_export::export_hapi(&graph, output_dir)?;
    println!(
        "✓ HAPI skeleton for '{}' written to {}",
        graph.name(),
        output_dir.display()
    );
    Ok(())
}
