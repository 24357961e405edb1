use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

use transcript_gate::config::{self, ModelConfig};
use transcript_gate::output::{self, ScoredTranscript};
use transcript_gate::scoring::{self, ScoreOptions};
use transcript_gate::table;

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
enum OutputFormat {
    /// Aligned table with a transcript preview
    #[default]
    Table,
    /// Tab-separated values, no header
    Tsv,
    /// One JSON object per result row
    Jsonl,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score transcripts and print routing decisions (default if no subcommand)
    Score {
        /// JSON Lines or JSON array file with a `transcript` field per row ("-" or omitted for stdin)
        input: Option<PathBuf>,

        /// Output format for stdout
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Write JSON Lines results to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the effective model config as YAML
    Config,
}

#[derive(Parser, Debug)]
#[command(name = "transcript-gate")]
#[command(about = "Score transcript quality and route each row", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/transcript-gate/config.yaml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Model input directory handed to the config loader
    #[arg(long, global = true, default_value = ".")]
    input_dir: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "transcript_gate=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Explicit --config wins, then the default config file, then the built-in config.
fn resolve_config(cli: &Cli) -> Result<ModelConfig> {
    if let Some(path) = &cli.config {
        return config::load_config_file(path);
    }

    if let Ok(default_path) = config::config_path() {
        if default_path.exists() {
            tracing::debug!(path = %default_path.display(), "Loading default config file");
            return config::load_config_file(&default_path);
        }
    }

    Ok(config::load_config(&cli.input_dir))
}

fn open_input(input: Option<&Path>) -> Result<Box<dyn Read>> {
    match input {
        None => Ok(Box::new(std::io::stdin())),
        Some(path) if path == Path::new("-") => Ok(Box::new(std::io::stdin())),
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file at {}", path.display()))?;
            Ok(Box::new(file))
        }
    }
}

fn print_results(rows: &[scoring::TranscriptRow], results: &[scoring::ScoredRow], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let scored: Vec<ScoredTranscript> = rows
                .iter()
                .zip(results)
                .map(|(row, result)| ScoredTranscript {
                    transcript: row.transcript(),
                    result,
                })
                .collect();
            println!("{}", output::format_scored_table(&scored, output::should_use_colors()));
        }
        OutputFormat::Tsv => {
            if !results.is_empty() {
                println!("{}", output::format_tsv(results));
            }
        }
        OutputFormat::Jsonl => table::write_jsonl(std::io::stdout().lock(), results)?,
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let start_time = Instant::now();

    let model_config = match resolve_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = config::validate_config(&model_config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let command = cli.command.unwrap_or(Commands::Score {
        input: None,
        format: OutputFormat::default(),
        output: None,
    });

    match command {
        Commands::Config => match serde_saphyr::to_string(&model_config) {
            Ok(yaml) => print!("{}", yaml),
            Err(e) => {
                eprintln!("Failed to render config: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        },
        Commands::Score {
            input,
            format,
            output: output_path,
        } => {
            let rows = match open_input(input.as_deref()).and_then(table::read_rows) {
                Ok(rows) => rows,
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    std::process::exit(EXIT_INPUT);
                }
            };
            tracing::debug!(rows = rows.len(), "Read input table");

            let results = scoring::score(&rows, &model_config, &ScoreOptions::default());

            let written = match &output_path {
                Some(path) => table::write_jsonl_file(path, &results).map(|()| {
                    println!("{}", output::format_summary(&results));
                }),
                None => print_results(&rows, &results, format),
            };
            if let Err(e) = written {
                eprintln!("Output error: {:#}", e);
                std::process::exit(EXIT_INPUT);
            }

            tracing::debug!(
                rows = results.len(),
                elapsed = ?start_time.elapsed(),
                "Finished scoring run"
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
