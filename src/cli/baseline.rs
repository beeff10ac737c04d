//! Baseline clustering command handler.

use crate::baselines;
use crate::pipeline::{format_clusters, load_documents, write_results, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

/// Which reference algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BaselineAlgorithm {
    /// Exact digest grouping of trimmed, lowercased documents
    Exact,
    /// Token n-gram Jaccard clustering
    Ngram,
    /// Whole-document word-set Jaccard clustering
    Jaccard,
}

/// Configuration for the `baseline` subcommand.
#[derive(Debug, Clone)]
pub struct BaselineCommandConfig {
    /// Input TSV corpus
    pub input: PathBuf,
    /// Reference algorithm
    pub algorithm: BaselineAlgorithm,
    /// Token n-gram size (ngram baseline only)
    pub ngram_size: usize,
    /// Similarity threshold (ngram and jaccard baselines)
    pub threshold: f64,
    /// Output rendering
    pub format: OutputFormat,
    /// Output file (stdout if not set)
    pub output_file: Option<PathBuf>,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Run one of the reference clustering baselines.
pub fn run_baseline(config: BaselineCommandConfig) -> Result<()> {
    if !(0.0..=1.0).contains(&config.threshold) {
        anyhow::bail!(
            "baseline threshold must be in [0, 1], got {}",
            config.threshold
        );
    }
    if config.algorithm == BaselineAlgorithm::Ngram && config.ngram_size == 0 {
        anyhow::bail!("n-gram size must be at least 1");
    }

    let documents = load_documents(&config.input)?;
    let clusters = match config.algorithm {
        BaselineAlgorithm::Exact => baselines::exact_clusters(&documents),
        BaselineAlgorithm::Ngram => {
            baselines::ngram_clusters(&documents, config.ngram_size, config.threshold)
        }
        BaselineAlgorithm::Jaccard => baselines::jaccard_clusters(&documents, config.threshold),
    };

    let rendered = match config.format {
        OutputFormat::Text => format_clusters(&clusters),
        OutputFormat::Json => serde_json::to_string_pretty(&clusters)?,
    };
    write_results(&rendered, config.output_file.as_deref(), config.quiet)?;
    Ok(())
}
