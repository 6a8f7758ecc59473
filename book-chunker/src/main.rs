//! chunk-book - Split a plain-text book into tagged chunks for RAG indexing

mod config;
mod error;
mod output;
mod text;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::ChunkerConfig;
use output::ChunkSummary;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "chunk-book")]
#[command(about = "Split a plain-text book into section-tagged chunks for RAG indexing", long_about = None)]
#[command(version)]
struct Args {
    /// Path to the plain-text book (default: from config)
    input: Option<PathBuf>,

    /// Output JSON path (default: from config)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Source name recorded in chunk metadata (default: from config)
    #[arg(long)]
    source: Option<String>,

    /// Enable debug output
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Summarize a previously written chunk file
    Inspect {
        /// Path to the chunk JSON file
        path: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set default input book path
    SetInput {
        /// Path to the plain-text book
        path: PathBuf,
    },
    /// Set default output path
    SetOutput {
        /// Path for the chunk JSON file
        path: PathBuf,
    },
    /// Set default source name
    SetSource {
        /// Name stored in chunk metadata
        name: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);

    match &args.command {
        Some(Commands::Config { action }) => {
            return handle_config_command(action);
        }
        Some(Commands::Inspect { path }) => {
            return inspect_chunks(path);
        }
        None => {}
    }

    let config = ChunkerConfig::load().context("Failed to load configuration")?;
    let input_path = args.input.unwrap_or(config.input_path);
    let output_path = args.output.unwrap_or(config.output_path);
    let source = args.source.unwrap_or(config.source);

    if args.debug {
        eprintln!("Input: {}", input_path.display());
        eprintln!("Output: {}", output_path.display());
        eprintln!("Source: {}", source);
    }

    eprintln!("Parsing book: {}", input_path.display());
    let summary = chunk_book(&input_path, &output_path, &source)?;

    println!("{}", summary);
    println!("Saved to: {}", output_path.display());

    Ok(())
}

/// Configure `env_logger`. `RUST_LOG` takes precedence over `--debug`.
fn init_logging(debug: bool) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(debug)),
    )
    .format_timestamp(None)
    .init();
}

/// `--debug` raises this binary's own modules only; dependencies stay at `warn`.
fn default_log_filter(debug: bool) -> &'static str {
    if debug { "warn,chunk_book=debug" } else { "warn" }
}

/// Chunk the book at `input_path` and write the result to `output_path`.
fn chunk_book(input_path: &Path, output_path: &Path, source: &str) -> Result<ChunkSummary> {
    let chunks = text::parse_book(input_path, source).context("Failed to chunk book")?;

    if chunks.is_empty() {
        log::warn!(
            "No chunks of at least {} words found in {}",
            text::chunker::MIN_CHUNK_WORDS,
            input_path.display()
        );
    }

    output::save_chunks(&chunks, output_path).context("Failed to save chunks")?;

    Ok(ChunkSummary::from_chunks(&chunks))
}

fn inspect_chunks(path: &Path) -> Result<()> {
    let chunks = output::load_chunks(path).context("Failed to load chunk file")?;

    println!("{}", ChunkSummary::from_chunks(&chunks));
    println!();
    for (section, count) in output::section_counts(&chunks) {
        println!("  {} - {} chunks", section, count);
    }

    Ok(())
}

fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = ChunkerConfig::load()?;
            println!("Configuration file: {:?}", ChunkerConfig::config_path()?);
            println!();
            println!("input_path = \"{}\"", config.input_path.display());
            println!("output_path = \"{}\"", config.output_path.display());
            println!("source = \"{}\"", config.source);
        }
        ConfigAction::SetInput { path } => {
            let mut config = ChunkerConfig::load()?;
            config.input_path = path.clone();
            config.save()?;
            println!("Default input set to: {}", path.display());
        }
        ConfigAction::SetOutput { path } => {
            let mut config = ChunkerConfig::load()?;
            config.output_path = path.clone();
            config.save()?;
            println!("Default output set to: {}", path.display());
        }
        ConfigAction::SetSource { name } => {
            let mut config = ChunkerConfig::load()?;
            config.source = name.clone();
            config.save()?;
            println!("Default source set to: {}", name);
        }
    }
    Ok(())
}
