use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cluster_init::{run_for_identity, scan_resources, PluginConfig, RunReport};
use std::path::PathBuf;
use std::time::Instant;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Publish precomputed label tables as named, colored clusters
#[derive(Parser, Debug)]
#[command(name = "cluster-init", version)]
struct Args {
    /// JSON config with resource root and dataset tables
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cluster a dataset of the given size
    Run {
        /// Number of points in the input dataset
        #[arg(short, long)]
        points: usize,

        /// Directory holding the label resources (overrides the config)
        #[arg(short, long)]
        resources: Option<PathBuf>,

        /// Print a JSON report instead of a table
        #[arg(long)]
        json: bool,
    },
    /// List the recognized datasets
    Datasets,
    /// Report label files found under a resource directory
    Scan {
        /// Directory to scan (defaults to the configured resource root)
        #[arg(short, long)]
        resources: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let mut config = match &args.config {
        Some(path) => PluginConfig::from_file(path)?,
        None => PluginConfig::default(),
    };
    let registry = config.registry().context("Invalid dataset configuration")?;

    match args.command {
        Command::Run {
            points,
            resources,
            json,
        } => {
            if let Some(root) = resources {
                config.resource_root = root;
            }

            let start = Instant::now();
            let identity = registry.resolve(points)?;
            let records = run_for_identity(identity, points, &config.reader())?;
            let report = RunReport::new(identity, points, records);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
                return Ok(());
            }

            println!("=== {} ({} points) ===\n", report.dataset, report.num_points);
            for cluster in &report.clusters {
                println!(
                    "  {:<24} {}  {:>6} points",
                    cluster.name,
                    cluster.color,
                    cluster.len()
                );
            }
            println!(
                "\n✓ {} clusters, {} points assigned [{:.3}s]",
                report.clusters.len(),
                report.assigned_points(),
                start.elapsed().as_secs_f64()
            );
        }
        Command::Datasets => {
            for identity in registry.identities() {
                println!(
                    "{:<16} {:>7} points  {:>2} clusters  {}",
                    identity.name,
                    identity.expected_point_count,
                    identity.cluster_names.len(),
                    identity.label_resource_path
                );
            }
        }
        Command::Scan { resources } => {
            let root = resources.unwrap_or(config.resource_root);
            let entries = scan_resources(&root, &registry)?;

            if entries.is_empty() {
                println!("No label files under {}", root.display());
            }
            for entry in entries {
                let implied = entry
                    .implied_points
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| "?".to_string());
                let dataset = entry
                    .referenced_by
                    .or(entry.size_matches.map(|name| format!("{} (by size)", name)))
                    .unwrap_or_else(|| "-".to_string());
                println!("{:<40} {:>10} bytes  {:>7} labels  {}", entry.path, entry.size_bytes, implied, dataset);
            }
        }
    }

    Ok(())
}
