//! near-dedup: near-duplicate document detection CLI.
//!
//! Thin argument-parsing shell over the library's command handlers. CLI
//! values override config-file values, which override built-in defaults.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use near_dedup::{
    cli,
    config::{self, BloomParams, LshParams},
    dedup::DeduplicatorConfig,
    pipeline::OutputFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "near-dedup")]
#[command(version)]
#[command(about = "Near-duplicate document detection with Bloom filters, MinHash and banded LSH", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Full deduplication pipeline over a TSV corpus
    near-dedup dedup corpus.tsv

    # LSH clustering with custom geometry and multi-probe recall
    near-dedup lsh corpus.tsv --num-bands 20 --rows-per-band 5 --num-hashes 100 --probes 2

    # Nearest-neighbor search
    near-dedup search corpus.tsv --query \"the quick brown fox\" --threshold 0.7

    # Inspect the S-curve before picking a geometry
    near-dedup tune --num-bands 20 --rows-per-band 5")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Explicit config file path (default: discovered .near-dedup.yaml)
    #[arg(long, global = true, env = "NEAR_DEDUP_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Shared argument groups
// ============================================================================

/// MinHash/LSH geometry flags; unset flags fall back to the config file,
/// then to built-in defaults.
#[derive(Debug, clap::Args)]
struct GeometryArgs {
    /// Number of bands for LSH (default: 10)
    #[arg(long)]
    num_bands: Option<usize>,

    /// Number of rows per band (default: 5)
    #[arg(long)]
    rows_per_band: Option<usize>,

    /// Number of hash functions for minhash; must equal bands * rows (default: 50)
    #[arg(long)]
    num_hashes: Option<usize>,

    /// Character shingle width (default: 5)
    #[arg(long)]
    shingle_size: Option<usize>,

    /// Neighboring bucket probes per band for multi-probe LSH (default: 0)
    #[arg(long)]
    probes: Option<usize>,
}

impl GeometryArgs {
    fn merge_into(&self, base: LshParams) -> LshParams {
        LshParams {
            num_bands: self.num_bands.unwrap_or(base.num_bands),
            rows_per_band: self.rows_per_band.unwrap_or(base.rows_per_band),
            num_hashes: self.num_hashes.unwrap_or(base.num_hashes),
            shingle_size: self.shingle_size.unwrap_or(base.shingle_size),
            probes: self.probes.unwrap_or(base.probes),
        }
    }
}

/// Bloom filter sizing flags for the exact-duplicate pass.
#[derive(Debug, clap::Args)]
struct BloomArgs {
    /// Expected number of distinct documents (default: 1000)
    #[arg(long)]
    bloom_capacity: Option<usize>,

    /// Target false-positive rate in (0, 1) (default: 0.01)
    #[arg(long)]
    bloom_fp_rate: Option<f64>,
}

impl BloomArgs {
    fn merge_into(&self, base: BloomParams) -> BloomParams {
        BloomParams {
            capacity: self.bloom_capacity.unwrap_or(base.capacity),
            fp_rate: self.bloom_fp_rate.unwrap_or(base.fp_rate),
        }
    }
}

/// Output destination flags.
#[derive(Debug, clap::Args)]
struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

// ============================================================================
// Subcommand arguments
// ============================================================================

/// Arguments for the `dedup` subcommand
#[derive(Parser)]
struct DedupArgs {
    /// Input TSV file (document text in column 2 when present, else column 1)
    input: PathBuf,

    #[command(flatten)]
    geometry: GeometryArgs,

    #[command(flatten)]
    bloom: BloomArgs,

    /// Refine clusters by signature Jaccard at this threshold (default when
    /// given without a value: 0.7)
    #[arg(long, num_args = 0..=1, default_missing_value = "0.7")]
    refine: Option<f64>,

    /// Drop single-document clusters from the output
    #[arg(long)]
    no_singletons: bool,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `lsh` subcommand
#[derive(Parser)]
struct LshArgs {
    /// Input TSV file
    input: PathBuf,

    #[command(flatten)]
    geometry: GeometryArgs,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `search` subcommand
#[derive(Parser)]
struct SearchArgs {
    /// Input TSV file to index
    input: PathBuf,

    /// Query document text
    #[arg(long)]
    query: String,

    /// Minimum signature Jaccard for a match (default: 0.7)
    #[arg(long)]
    threshold: Option<f64>,

    #[command(flatten)]
    geometry: GeometryArgs,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `baseline` subcommand
#[derive(Parser)]
struct BaselineArgs {
    /// Input TSV file
    input: PathBuf,

    /// The baseline algorithm to run
    #[arg(long, value_enum)]
    algorithm: cli::BaselineAlgorithm,

    /// N-gram size for the ngram baseline (default: 3)
    #[arg(short, long, default_value_t = config::DEFAULT_NGRAM_SIZE)]
    n: usize,

    /// Similarity threshold for the ngram or jaccard baseline (default: 0.8)
    #[arg(long, default_value_t = config::DEFAULT_BASELINE_THRESHOLD)]
    threshold: f64,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `tune` subcommand
#[derive(Parser)]
struct TuneArgs {
    /// Number of bands (default: 10)
    #[arg(long)]
    num_bands: Option<usize>,

    /// Rows per band (default: 5)
    #[arg(long)]
    rows_per_band: Option<usize>,

    /// Jaccard grid step
    #[arg(long, default_value_t = 0.05)]
    step: f64,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Deduplicate a collection: Bloom exact pass + LSH clustering
    Dedup(DedupArgs),

    /// Cluster a collection with banded LSH only
    Lsh(LshArgs),

    /// Find documents similar to a query
    Search(SearchArgs),

    /// Run a reference baseline algorithm
    Baseline(BaselineArgs),

    /// Print the S-curve for a band/row geometry
    Tune(TuneArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli_args = Cli::parse();

    // Initialize logging
    let log_level = if cli_args.verbose {
        "debug"
    } else if cli_args.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let (file_config, loaded_from) = config::load_or_default(cli_args.config.as_deref())?;
    if let Some(path) = &loaded_from {
        tracing::debug!("loaded config from {}", path.display());
    }

    match cli_args.command {
        Commands::Dedup(args) => {
            let dedup = DeduplicatorConfig {
                lsh: args.geometry.merge_into(file_config.lsh),
                bloom: args.bloom.merge_into(file_config.bloom),
                refine_threshold: args.refine.or_else(|| {
                    file_config
                        .refinement
                        .enabled
                        .then_some(file_config.refinement.threshold)
                }),
                include_singletons: !(args.no_singletons
                    || file_config.behavior.exclude_singletons),
            };
            cli::run_dedup(cli::DedupCommandConfig {
                input: args.input,
                dedup,
                format: args.output.output,
                output_file: args.output.output_file,
                quiet: cli_args.quiet,
            })
        }

        Commands::Lsh(args) => cli::run_lsh(cli::LshCommandConfig {
            input: args.input,
            lsh: args.geometry.merge_into(file_config.lsh),
            format: args.output.output,
            output_file: args.output.output_file,
            quiet: cli_args.quiet,
        }),

        Commands::Search(args) => cli::run_search(cli::SearchCommandConfig {
            input: args.input,
            query: args.query,
            threshold: args.threshold.unwrap_or(config::DEFAULT_SEARCH_THRESHOLD),
            dedup: DeduplicatorConfig {
                lsh: args.geometry.merge_into(file_config.lsh),
                bloom: file_config.bloom,
                ..DeduplicatorConfig::default()
            },
            format: args.output.output,
            output_file: args.output.output_file,
            quiet: cli_args.quiet,
        }),

        Commands::Baseline(args) => cli::run_baseline(cli::BaselineCommandConfig {
            input: args.input,
            algorithm: args.algorithm,
            ngram_size: args.n,
            threshold: args.threshold,
            format: args.output.output,
            output_file: args.output.output_file,
            quiet: cli_args.quiet,
        }),

        Commands::Tune(args) => cli::run_tune(cli::TuneCommandConfig {
            num_bands: args.num_bands.unwrap_or(file_config.lsh.num_bands),
            rows_per_band: args.rows_per_band.unwrap_or(file_config.lsh.rows_per_band),
            step: args.step,
            format: args.output.output,
            output_file: args.output.output_file,
        }),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "near-dedup", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }
    }
}
