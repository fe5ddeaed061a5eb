//! Nexus CLI: command-line interface for the investigation graph analyzer
//!
//! Loads a snapshot exported by the editor, runs the analysis and prints the
//! results as tables or JSON.

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use nexus_intel::analysis::{completeness_label, AnalysisConfig, InvestigationAnalyzer};
use nexus_intel::{AnalysisResult, GraphSnapshot, NodeCompleteness, NodeId};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(name = "nexus-cli", version, about = "Nexus investigation graph analyzer")]
struct Cli {
    /// Output format
    #[arg(long, default_value = "table", global = true)]
    format: OutputFormat,

    /// YAML file overriding the default heuristics
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed for label propagation
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a snapshot and print the summary and prioritized suggestions
    Analyze {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Maximum number of suggestions to print
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },
    /// Show the completeness breakdown of one node
    Node {
        /// Snapshot JSON file
        snapshot: PathBuf,

        /// Node id
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match &cli.command {
        Commands::Analyze { snapshot, limit } => run_analyze(&cli, snapshot, *limit),
        Commands::Node { snapshot, id } => run_node(&cli, snapshot, id),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<AnalysisConfig> {
    let mut config = match &cli.config {
        Some(path) => AnalysisConfig::from_yaml_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    Ok(config)
}

fn run_pipeline(cli: &Cli, snapshot_path: &Path) -> Result<(GraphSnapshot, AnalysisResult)> {
    let config = load_config(cli)?;
    let snapshot = GraphSnapshot::from_json_file(snapshot_path)
        .with_context(|| format!("loading snapshot {}", snapshot_path.display()))?;
    let result = InvestigationAnalyzer::new(config).analyze(&snapshot);
    Ok((snapshot, result))
}

fn run_analyze(cli: &Cli, snapshot_path: &Path, limit: usize) -> Result<()> {
    let (snapshot, result) = run_pipeline(cli, snapshot_path)?;

    if let OutputFormat::Json = cli.format {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let investigation = &result.investigation;
    let health = &investigation.graph_health;
    let distribution = &investigation.completeness_distribution;

    println!("Nodes:        {}", investigation.total_nodes);
    println!("Connections:  {}", snapshot.connection_count());
    println!("Communities:  {}", result.graph.community_count());
    println!(
        "Completeness: {:.1}% ({})",
        investigation.average_completeness * 100.0,
        completeness_label(investigation.average_completeness)
    );
    println!(
        "Distribution: critical {} / low {} / medium {} / high {}",
        distribution.critical, distribution.low, distribution.medium, distribution.high
    );
    println!(
        "Health:       connectivity {:.2}, information density {:.2}, balance {:.2}",
        health.connectivity, health.information_density, health.structural_balance
    );

    if !result.graph.key_nodes.is_empty() {
        let names: Vec<String> = result
            .graph
            .key_nodes
            .iter()
            .map(|id| node_title(&snapshot, id))
            .collect();
        println!("Key nodes:    {}", names.join(", "));
    }
    println!();

    let suggestions = &investigation.prioritized_suggestions;
    if suggestions.is_empty() {
        println!("(no suggestions)");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Priority", "Node", "Type", "Score", "Top suggestion"]);

    for node in suggestions.iter().take(limit) {
        table.add_row(vec![
            node.priority.label().to_string(),
            display_title(node),
            node.node_category.to_string(),
            format!("{:.2}", node.overall_score),
            top_suggestion(node),
        ]);
    }

    println!("{}", table);
    println!(
        "{} of {} suggestion(s) shown",
        suggestions.len().min(limit),
        suggestions.len()
    );

    Ok(())
}

fn run_node(cli: &Cli, snapshot_path: &Path, id: &str) -> Result<()> {
    let (_, result) = run_pipeline(cli, snapshot_path)?;
    let id = NodeId::new(id);

    let node = match result.investigation.node(&id) {
        Some(node) => node,
        None => bail!("node {} not found in snapshot", id),
    };

    if let OutputFormat::Json = cli.format {
        println!("{}", serde_json::to_string_pretty(node)?);
        return Ok(());
    }

    println!("Node:       {} ({})", display_title(node), node.node_category);
    if let Some(community) = result.graph.communities.community_of(&id) {
        println!("Community:  {}", community);
    }
    if let Some(centrality) = result.graph.centrality_of(&id) {
        let marker = if result.graph.is_key_node(&id) { " [key]" } else { "" };
        println!("Centrality: {:.3}{}", centrality, marker);
    }
    println!("Priority:   {}", node.priority);
    println!();

    let mut scores = Table::new();
    scores.set_header(vec!["Axis", "Score"]);
    scores.add_row(vec!["Relations".to_string(), format!("{:.2}", node.relation_score)]);
    scores.add_row(vec!["Attributes".to_string(), format!("{:.2}", node.attribute_score)]);
    scores.add_row(vec!["Structure".to_string(), format!("{:.2}", node.structure_score)]);
    scores.add_row(vec![
        "Overall".to_string(),
        format!("{:.2} ({})", node.overall_score, completeness_label(node.overall_score)),
    ]);
    println!("{}", scores);

    if !node.missing_relations.is_empty() {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Missing relation", "Expected", "Hint"]);
        for missing in &node.missing_relations {
            table.add_row(vec![
                missing.target_category.to_string(),
                format!("{:.0}%", missing.expected_probability * 100.0),
                missing.description.clone(),
            ]);
        }
        println!("{}", table);
    }

    if !node.sparse_attributes.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Sparse field", "Importance", "Fill rate"]);
        for sparse in &node.sparse_attributes {
            table.add_row(vec![
                sparse.field.clone(),
                format!("{:.2}", sparse.importance),
                format!("{:.0}%", sparse.fill_rate * 100.0),
            ]);
        }
        println!("{}", table);
    }

    for issue in &node.structural_issues {
        println!("! {} (severity {:.1})", issue.description, issue.severity);
    }

    Ok(())
}

fn node_title(snapshot: &GraphSnapshot, id: &NodeId) -> String {
    match snapshot.node(id) {
        Some(node) if !node.title.trim().is_empty() => node.title.clone(),
        _ => id.to_string(),
    }
}

fn display_title(node: &NodeCompleteness) -> String {
    if node.node_title.trim().is_empty() {
        node.node_id.to_string()
    } else {
        node.node_title.clone()
    }
}

fn top_suggestion(node: &NodeCompleteness) -> String {
    if let Some(issue) = node.structural_issues.first() {
        return issue.description.clone();
    }
    if let Some(missing) = node.missing_relations.first() {
        return missing.description.clone();
    }
    if let Some(sparse) = node.sparse_attributes.first() {
        return format!("Fill in '{}'", sparse.field);
    }
    String::new()
}
