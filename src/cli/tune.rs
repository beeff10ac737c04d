//! S-curve inspection command handler.
//!
//! Prints P(J) = 1 - (1 - J^R)^B over a Jaccard grid so band/row geometry
//! can be tuned to a target similarity threshold without plotting.

use crate::lsh::s_curve;
use crate::pipeline::{write_results, OutputFormat};
use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Configuration for the `tune` subcommand.
#[derive(Debug, Clone)]
pub struct TuneCommandConfig {
    /// Number of bands (B)
    pub num_bands: usize,
    /// Rows per band (R)
    pub rows_per_band: usize,
    /// Grid step over [0, 1]
    pub step: f64,
    /// Output rendering
    pub format: OutputFormat,
    /// Output file (stdout if not set)
    pub output_file: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct CurvePoint {
    jaccard: f64,
    probability: f64,
}

/// Print the candidate-probability S-curve for a band/row geometry.
pub fn run_tune(config: TuneCommandConfig) -> Result<()> {
    if config.num_bands == 0 || config.rows_per_band == 0 {
        anyhow::bail!("num_bands and rows_per_band must be at least 1");
    }
    if !(config.step > 0.0 && config.step <= 1.0) {
        anyhow::bail!("step must be in (0, 1], got {}", config.step);
    }

    let steps = (1.0 / config.step).round() as usize;
    let points: Vec<CurvePoint> = (0..=steps)
        .map(|i| {
            let jaccard = (i as f64 * config.step).min(1.0);
            CurvePoint {
                jaccard,
                probability: s_curve(jaccard, config.num_bands, config.rows_per_band),
            }
        })
        .collect();

    let rendered = match config.format {
        OutputFormat::Text => {
            let mut out = format!(
                "S-curve for B = {}, R = {} (threshold ~ {:.3})\n",
                config.num_bands,
                config.rows_per_band,
                (1.0 / config.num_bands as f64).powf(1.0 / config.rows_per_band as f64)
            );
            for point in &points {
                out.push_str(&format!(
                    "J = {:.2}  P = {:.6}\n",
                    point.jaccard, point.probability
                ));
            }
            out
        }
        OutputFormat::Json => serde_json::to_string_pretty(&points)?,
    };
    write_results(&rendered, config.output_file.as_deref(), true)?;
    Ok(())
}
