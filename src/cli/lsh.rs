//! LSH-only clustering command handler (no Bloom pre-pass).

use crate::config::LshParams;
use crate::pipeline::{format_clusters, load_documents, write_results, OutputFormat};
use anyhow::Result;
use std::path::PathBuf;

/// Configuration for the `lsh` subcommand.
#[derive(Debug, Clone)]
pub struct LshCommandConfig {
    /// Input TSV corpus
    pub input: PathBuf,
    /// MinHash/LSH geometry; `probes > 0` selects the multi-probe strategy
    pub lsh: LshParams,
    /// Output rendering
    pub format: OutputFormat,
    /// Output file (stdout if not set)
    pub output_file: Option<PathBuf>,
    /// Suppress non-essential output
    pub quiet: bool,
}

/// Cluster a corpus with banded LSH and Union-Find consolidation.
pub fn run_lsh(config: LshCommandConfig) -> Result<()> {
    // Multi-probe with zero probes degenerates to plain banding, so one
    // index type serves both modes. Construction validates geometry
    // before the corpus is read.
    let mut index = crate::lsh::LshIndex::multi_probe(&config.lsh)?;

    let documents = load_documents(&config.input)?;
    for (doc_id, doc) in documents.iter().enumerate() {
        index.add_document(doc_id, doc);
    }
    if !config.quiet {
        tracing::info!("{}", index.stats());
    }

    let clusters: Vec<Vec<usize>> = index.cluster_candidates().into_values().collect();
    let rendered = match config.format {
        OutputFormat::Text => format_clusters(&clusters),
        OutputFormat::Json => serde_json::to_string_pretty(&clusters)?,
    };
    write_results(&rendered, config.output_file.as_deref(), config.quiet)?;
    Ok(())
}
