//! Collection deduplication command handler.

use crate::dedup::{Deduplicator, DeduplicatorConfig};
use crate::pipeline::{format_report, load_documents, write_results, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

/// Configuration for the `dedup` subcommand.
#[derive(Debug, Clone)]
pub struct DedupCommandConfig {
    /// Input TSV corpus
    pub input: PathBuf,
    /// Pipeline parameters
    pub dedup: DeduplicatorConfig,
    /// Output rendering
    pub format: OutputFormat,
    /// Output file (stdout if not set)
    pub output_file: Option<PathBuf>,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Run the full Bloom -> MinHash -> LSH -> Union-Find pipeline.
pub fn run_dedup(config: DedupCommandConfig) -> Result<()> {
    // Parameter validation happens here, before the corpus is read.
    let mut deduplicator = Deduplicator::new(config.dedup)?;

    let documents = load_documents(&config.input)?;
    let report = deduplicator.deduplicate(&documents)?;

    if !config.quiet && !report.exact_duplicates.is_empty() {
        tracing::info!(
            count = report.exact_duplicates.len(),
            "documents flagged as exact duplicates"
        );
    }

    let rendered = format_report(&report, config.format);
    write_results(&rendered, config.output_file.as_deref(), config.quiet)?;
    Ok(())
}
