use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use headline_cluster::{prepare_batch, ClusterReport, Item, Pipeline, PipelineConfig};
use headline_cluster::{BBC_NEWS_BASE, MAX_BATCH};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "headline-cluster",
    about = "Cluster a batch of headlines and report top terms per cluster"
)]
struct Cli {
    /// JSON array of {"title", "link"} objects. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// Requested number of clusters (clamped to the batch size).
    #[arg(short = 'k', long, env = "HEADLINE_CLUSTER_K", default_value_t = 5)]
    clusters: usize,

    /// Descriptor terms shown per cluster.
    #[arg(long, env = "HEADLINE_CLUSTER_TOP_N", default_value_t = 10)]
    top_n: usize,

    /// Seed for centroid initialization.
    #[arg(long, env = "HEADLINE_CLUSTER_SEED", default_value_t = 42)]
    seed: u64,

    /// Maximum Lloyd iterations per k-means run.
    #[arg(long, env = "HEADLINE_CLUSTER_MAX_ITER", default_value_t = 300)]
    max_iter: usize,

    /// Number of seeded k-means restarts.
    #[arg(long, env = "HEADLINE_CLUSTER_N_INIT", default_value_t = 10)]
    n_init: usize,

    /// Base URL prepended to relative links.
    #[arg(long, env = "HEADLINE_CLUSTER_BASE_URL", default_value = BBC_NEWS_BASE)]
    base_url: String,

    /// Maximum number of headlines taken from the input.
    #[arg(long, default_value_t = MAX_BATCH)]
    max_items: usize,

    /// Report format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl Cli {
    fn config(&self) -> PipelineConfig {
        PipelineConfig::new()
            .with_n_clusters(self.clusters)
            .with_top_n(self.top_n)
            .with_seed(self.seed)
            .with_max_iter(self.max_iter)
            .with_n_init(self.n_init)
    }
}

fn read_items(cli: &Cli) -> Result<Vec<Item>> {
    let raw = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };
    let items: Vec<Item> = serde_json::from_str(&raw).context("input is not a JSON item array")?;
    Ok(prepare_batch(
        items.into_iter().map(|item| (item.title, item.link)),
        &cli.base_url,
        cli.max_items,
    ))
}

fn render_text(report: &ClusterReport, out: &mut impl Write) -> io::Result<()> {
    for group in &report.grouping {
        writeln!(out, "Cluster {}", group.id + 1)?;
        writeln!(out, "Top terms: {}", group.terms_label())?;
        for member in &group.members {
            writeln!(out, "  {} — {}", member.title, member.link)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let items = read_items(&cli)?;
    info!(items = items.len(), "loaded headlines");

    let report = Pipeline::new(cli.config())
        .run(&items)
        .context("clustering failed")?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match cli.format {
        Format::Text => render_text(&report, &mut out)?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
