//! Sunburst Command Line Interface
//!
//! Loads a challenge taxonomy, flattens it and prints what the chart
//! renderer would receive. Click sequences can be replayed headlessly.
//!
//! # Usage
//!
//! ```bash
//! # Render frame for the bundled taxonomy
//! sunburst frame
//!
//! # Indented node tree with values and colors
//! sunburst index --taxonomy data/public_finance_challenges.yaml
//!
//! # Replay clicks by id or label
//! sunburst navigate --click "Revenue Mobilisation" --click node-2
//!
//! # Check a taxonomy file for structural errors
//! sunburst validate --taxonomy my_taxonomy.json --format json
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use challenge_sunburst::{
    ClickOutcome, DetailPanel, FlatHierarchy, Flattener, NodeId, PlaceholderRows,
    RecordingRenderer, SunburstConfig, SunburstError, SunburstView, Taxonomy,
};

#[derive(Parser)]
#[command(name = "sunburst")]
#[command(version = "0.1.0")]
#[command(about = "Flatten the public finance challenge taxonomy and replay sunburst navigation")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Taxonomy file (.yaml/.yml or .json); the bundled taxonomy if omitted
    #[arg(long, short, global = true)]
    taxonomy: Option<PathBuf>,

    /// View configuration YAML; built-in defaults if omitted
    #[arg(long, short, global = true, env = "SUNBURST_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'o', global = true, default_value = "pretty", value_enum)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Pretty,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the initial render frame (focus on the root)
    Frame,

    /// Print the flattened node tree
    Index,

    /// Replay a click sequence and print the state after each click
    Navigate {
        /// Node id (node-N) or exact label; repeat for a sequence
        #[arg(long, required = true)]
        click: Vec<String>,
    },

    /// Flatten the taxonomy and report structural errors
    Validate,
}

// =============================================================================
// MAIN
// =============================================================================

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Frame => cmd_frame(&cli),
        Commands::Index => cmd_index(&cli),
        Commands::Navigate { click } => cmd_navigate(&cli, click),
        Commands::Validate => cmd_validate(&cli),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if cli.format == OutputFormat::Json {
                println!("{}", serde_json::json!({ "error": format!("{e:#}") }));
            } else {
                eprintln!("{}: {:#}", "error".red().bold(), e);
            }
            ExitCode::FAILURE
        }
    }
}

// =============================================================================
// LOADING
// =============================================================================

fn load_config(path: Option<&Path>) -> Result<SunburstConfig> {
    match path {
        Some(path) => SunburstConfig::load(path)
            .with_context(|| format!("loading config {}", path.display())),
        None => Ok(SunburstConfig::default()),
    }
}

fn load_taxonomy(path: Option<&Path>) -> Result<Taxonomy, SunburstError> {
    match path {
        Some(path) => Taxonomy::load(path),
        None => Taxonomy::bundled(),
    }
}

fn load(cli: &Cli) -> Result<(SunburstConfig, FlatHierarchy)> {
    let config = load_config(cli.config.as_deref())?;
    let taxonomy = load_taxonomy(cli.taxonomy.as_deref()).with_context(|| match &cli.taxonomy {
        Some(path) => format!("loading taxonomy {}", path.display()),
        None => "loading bundled taxonomy".to_string(),
    })?;
    let flat = Flattener::new(config.flatten_options())
        .flatten(&taxonomy)
        .context("flattening taxonomy")?;
    Ok((config, flat))
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("JSON serialization failed")?
    );
    Ok(())
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

fn cmd_frame(cli: &Cli) -> Result<()> {
    let (config, flat) = load(cli)?;
    let view = SunburstView::new(
        flat,
        RecordingRenderer::new(),
        PlaceholderRows::from(config.detail_rows),
        config.depth_window,
    );
    let frame = view.frame();

    match cli.format {
        OutputFormat::Json => print_json(&frame)?,
        OutputFormat::Pretty => {
            println!(
                "{} {} nodes, level {}, maxdepth {}",
                "OK".green().bold(),
                frame.columns.len(),
                frame.level.cyan(),
                frame.maxdepth
            );
            for i in 0..frame.columns.len() {
                println!(
                    "  {:<8} {:<8} {:>3}  {} / {}  {}",
                    frame.columns.ids[i],
                    frame.columns.parents[i],
                    frame.columns.values[i],
                    frame.columns.colors[i],
                    frame.columns.text_colors[i],
                    frame.columns.labels[i]
                );
            }
        }
    }
    Ok(())
}

fn cmd_index(cli: &Cli) -> Result<()> {
    let (_, flat) = load(cli)?;

    match cli.format {
        OutputFormat::Json => print_json(flat.nodes())?,
        OutputFormat::Pretty => {
            for node in flat.nodes() {
                let indent = "  ".repeat(node.depth);
                let label = if node.is_leaf() {
                    node.label.normal()
                } else {
                    node.label.bold()
                };
                println!(
                    "{}{} {} {}",
                    indent,
                    label,
                    format!("[{}]", node.id).dimmed(),
                    format!("={} {}", node.value, node.color).dimmed()
                );
            }
        }
    }
    Ok(())
}

/// Accept a node id as-is, otherwise look the argument up as a label.
fn resolve_click(flat: &FlatHierarchy, arg: &str) -> NodeId {
    let as_id = NodeId::new(arg);
    if flat.index().contains(&as_id) {
        return as_id;
    }
    match flat.find_by_label(arg) {
        Some(node) => node.id.clone(),
        None => as_id,
    }
}

fn cmd_navigate(cli: &Cli, clicks: &[String]) -> Result<()> {
    let (config, flat) = load(cli)?;
    let targets: Vec<NodeId> = clicks.iter().map(|arg| resolve_click(&flat, arg)).collect();

    let mut view = SunburstView::new(
        flat,
        RecordingRenderer::new(),
        PlaceholderRows::from(config.detail_rows),
        config.depth_window,
    );
    view.mount();

    let mut steps = Vec::with_capacity(targets.len());
    for target in targets {
        view.renderer().click(target);
        for outcome in view.pump() {
            let snapshot = view.state().snapshot(view.hierarchy().index());
            match cli.format {
                OutputFormat::Json => steps.push(serde_json::json!({
                    "outcome": describe_outcome(&outcome),
                    "state": snapshot,
                })),
                OutputFormat::Pretty => {
                    let marker = if outcome.changed_state() {
                        "->".green().bold()
                    } else {
                        "--".yellow().bold()
                    };
                    println!("{} {}", marker, describe_outcome(&outcome));
                    let trail = if snapshot.breadcrumbs.is_empty() {
                        "(root)".to_string()
                    } else {
                        snapshot.breadcrumbs.join(" > ")
                    };
                    println!("   breadcrumbs: {}", trail.cyan());
                    if let DetailPanel::Open { rows, .. } = &snapshot.panel {
                        for row in rows {
                            println!("   | {}", row.dimmed());
                        }
                    }
                }
            }
        }
    }

    if cli.format == OutputFormat::Json {
        print_json(&steps)?;
    }
    Ok(())
}

fn describe_outcome(outcome: &ClickOutcome) -> String {
    match outcome {
        ClickOutcome::Refocused { from: Some(from), to } => format!("refocused {from} -> {to}"),
        ClickOutcome::Refocused { from: None, to } => format!("focused {to}"),
        ClickOutcome::Collapsed { from, to } => format!("collapsed {from} -> {to}"),
        ClickOutcome::PanelOpened { node, rows } => format!("opened panel for {node} ({rows} rows)"),
        ClickOutcome::Ignored { id } => format!("ignored unknown node {id}"),
    }
}

fn cmd_validate(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let taxonomy = load_taxonomy(cli.taxonomy.as_deref()).context("loading taxonomy")?;

    match Flattener::new(config.flatten_options()).flatten(&taxonomy) {
        Ok(flat) => {
            match cli.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::json!({
                        "valid": true,
                        "root": taxonomy.root_label(),
                        "nodes": flat.len(),
                        "statements": flat.root().value,
                        "leafDepth": flat.index().leaf_depth(),
                    })
                ),
                OutputFormat::Pretty => println!(
                    "{} {}: {} nodes, {} statements",
                    "OK".green().bold(),
                    taxonomy.root_label(),
                    flat.len(),
                    flat.root().value
                ),
            }
            Ok(())
        }
        Err(err) => Err(anyhow!("{} {}", err.code(), err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_config_path_reads_environment() {
        let command = Cli::command();
        let config = command
            .get_arguments()
            .find(|arg| arg.get_id() == "config")
            .unwrap();
        assert_eq!(config.get_env(), Some(std::ffi::OsStr::new("SUNBURST_CONFIG")));
    }

    #[test]
    fn test_navigate_parses_repeated_clicks() {
        let cli = Cli::try_parse_from([
            "sunburst", "navigate", "--click", "node-1", "--click", "Fiscal Rules", "-o", "json",
        ])
        .unwrap();
        assert!(cli.format == OutputFormat::Json);
        match cli.command {
            Commands::Navigate { click } => assert_eq!(click, vec!["node-1", "Fiscal Rules"]),
            _ => panic!("expected navigate"),
        }
    }

    #[test]
    fn test_node_list_serializes_as_json() {
        let flat = Flattener::default().flatten(&Taxonomy::bundled().unwrap()).unwrap();
        print_json(flat.nodes()).unwrap();
    }

    #[test]
    fn test_resolve_click_by_id_or_label() {
        let flat = Flattener::default().flatten(&Taxonomy::bundled().unwrap()).unwrap();
        assert_eq!(resolve_click(&flat, "node-0"), NodeId::from_sequence(0));
        assert_eq!(
            resolve_click(&flat, "Revenue Mobilisation"),
            NodeId::from_sequence(1)
        );
        assert_eq!(resolve_click(&flat, "nowhere"), NodeId::new("nowhere"));
    }
}
