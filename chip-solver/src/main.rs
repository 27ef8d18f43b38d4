use anyhow::{Context, Result};
use chip_solver::render::{render_chain, ChainReport};
use chip_solver::search::{ChainSearch, SearchStats};
use chip_solver::supply::{load_chips, random_chips, sample_chips};
use chip_solver::{Color, SearchConfig};
use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "chip-solver")]
#[command(about = "Finds the longest chain of two-colored chips between two boundary colors")]
struct Cli {
    /// JSON chip list: {"chips": [{"left": "Blue", "right": "Yellow"}, ...]}
    #[arg(long, conflicts_with = "random")]
    input: Option<PathBuf>,

    /// Use this many random chips instead of the built-in sample
    #[arg(long)]
    random: Option<usize>,

    /// Seed for --random
    #[arg(long, default_value_t = 0xC0FFEE)]
    seed: u64,

    #[arg(long, value_enum, env = "CHIP_START", default_value_t = Color::Blue)]
    start: Color,

    #[arg(long, value_enum, env = "CHIP_END", default_value_t = Color::Green)]
    end: Color,

    /// Give up after this many search steps and report the best chain so far
    #[arg(long, env = "CHIP_MAX_VISITS")]
    max_visits: Option<u64>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    report: ChainReport,
    stats: &'a SearchStats,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = SearchConfig::new(cli.start, cli.end).with_max_visits(cli.max_visits);
    config.validate()?;

    let chips = match (&cli.input, cli.random) {
        (Some(path), _) => load_chips(path)
            .with_context(|| format!("Failed to load chips from {}", path.display()))?,
        (None, Some(count)) => random_chips(count, cli.seed),
        (None, None) => sample_chips(),
    };
    tracing::info!(chips = chips.len(), start = %config.start, end = %config.end, "searching");

    let outcome = ChainSearch::new(config).run(&chips);

    if cli.json {
        let output = JsonOutput {
            report: ChainReport::new(&outcome.chain, &chips, &config)?,
            stats: &outcome.stats,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", render_chain(&outcome.chain, &chips, &config)?);
    }

    Ok(())
}
