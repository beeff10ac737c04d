//! Nearest-neighbor search command handler.

use crate::dedup::{Deduplicator, DeduplicatorConfig};
use crate::pipeline::{load_documents, write_results, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

/// Configuration for the `search` subcommand.
#[derive(Debug, Clone)]
pub struct SearchCommandConfig {
    /// Input TSV corpus to index
    pub input: PathBuf,
    /// Query document text
    pub query: String,
    /// Minimum signature Jaccard for a match
    pub threshold: f64,
    /// Pipeline parameters (Bloom sizing is unused in this mode)
    pub dedup: DeduplicatorConfig,
    /// Output rendering
    pub format: OutputFormat,
    /// Output file (stdout if not set)
    pub output_file: Option<PathBuf>,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Index a corpus and return the IDs of documents similar to the query.
pub fn run_search(config: SearchCommandConfig) -> Result<()> {
    if !(0.0..=1.0).contains(&config.threshold) {
        anyhow::bail!(
            "search threshold must be in [0, 1], got {}",
            config.threshold
        );
    }
    let mut deduplicator = Deduplicator::new(config.dedup)?;

    let documents = load_documents(&config.input)?;
    deduplicator.build_index(&documents)?;

    let matches = deduplicator.query(&config.query, config.threshold);
    if !config.quiet {
        tracing::info!(matches = matches.len(), "query complete");
    }

    let rendered = match config.format {
        OutputFormat::Text => {
            let mut line = matches
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            line.push('\n');
            line
        }
        OutputFormat::Json => serde_json::to_string_pretty(&matches)?,
    };
    write_results(&rendered, config.output_file.as_deref(), config.quiet)?;
    Ok(())
}
