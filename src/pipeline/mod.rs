//! Corpus IO: loading tab-separated document files and writing cluster
//! reports.
//!
//! Input is one document per row. When a row has two or more tab-separated
//! columns the document text is column 2 (extra columns are tolerated),
//! otherwise column 1. Rows are trimmed; empty rows are logged and
//! skipped.

use crate::dedup::DedupReport;
use crate::error::{DedupError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Load documents from a TSV file, one per row.
pub fn load_documents(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|e| DedupError::io(path, e))?;

    let mut documents = Vec::new();
    for (line_number, line) in content.lines().enumerate() {
        let mut columns = line.split('\t');
        let first = columns.next().unwrap_or_default();
        let text = columns.next().unwrap_or(first).trim();
        if text.is_empty() {
            debug!(line = line_number + 1, "skipping empty row");
            continue;
        }
        documents.push(text.to_string());
    }

    info!(
        count = documents.len(),
        path = %path.display(),
        "loaded documents"
    );
    Ok(documents)
}

// ============================================================================
// Output
// ============================================================================

/// Write rendered results to `destination`, or to stdout when no path is
/// given. Stdout output always ends in a newline; file contents are
/// written as rendered.
pub fn write_results(content: &str, destination: Option<&Path>, quiet: bool) -> Result<()> {
    match destination {
        None => {
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        Some(path) => {
            std::fs::write(path, content).map_err(|e| DedupError::io(path, e))?;
            if !quiet {
                info!(path = %path.display(), "results written");
            }
            Ok(())
        }
    }
}

/// Output format for cluster reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// One cluster per line, IDs space-separated ascending
    Text,
    /// JSON serialization of the full report
    Json,
}

/// Format bare clusters in the text convention: one cluster per line, IDs
/// space-separated, clusters ordered by smallest member.
pub fn format_clusters(clusters: &[Vec<usize>]) -> String {
    let mut ordered: Vec<&Vec<usize>> = clusters.iter().collect();
    ordered.sort_by_key(|members| members.first().copied());

    let mut out = String::new();
    for members in ordered {
        let line = members
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Render a full deduplication report in the requested format.
pub fn format_report(report: &DedupReport, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format_clusters(&report.clusters),
        OutputFormat::Json => serde_json::to_string_pretty(report)
            .expect("report serialization should not fail"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    fn write_corpus(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("docs.tsv");
        let mut file = std::fs::File::create(&path).expect("create");
        write!(file, "{content}").expect("write");
        (dir, path)
    }

    #[test]
    fn test_load_takes_second_column_when_present() {
        let (_dir, path) = write_corpus("id0\tfirst document\nid1\tsecond document\textra\n");
        let documents = load_documents(&path).expect("loads");
        assert_eq!(documents, vec!["first document", "second document"]);
    }

    #[test]
    fn test_load_falls_back_to_first_column() {
        let (_dir, path) = write_corpus("only one column here\n");
        let documents = load_documents(&path).expect("loads");
        assert_eq!(documents, vec!["only one column here"]);
    }

    #[test]
    fn test_load_skips_empty_rows_and_trims() {
        let (_dir, path) = write_corpus("  padded doc  \n\n\t\nlast doc\n");
        let documents = load_documents(&path).expect("loads");
        assert_eq!(documents, vec!["padded doc", "last doc"]);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_documents(Path::new("/nonexistent/docs.tsv"));
        assert!(matches!(
            result,
            Err(crate::error::DedupError::Io { .. })
        ));
    }

    #[test]
    fn test_format_clusters_sorted_by_smallest_member() {
        let clusters = vec![vec![4, 7], vec![0, 2, 9], vec![1]];
        let text = format_clusters(&clusters);
        assert_eq!(text, "0 2 9\n1\n4 7\n");
    }

    #[test]
    fn test_format_clusters_empty() {
        assert_eq!(format_clusters(&[]), "");
    }

    #[test]
    fn test_write_results_to_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("clusters.txt");
        write_results("0 1\n", Some(&path), true).expect("writes");
        assert_eq!(std::fs::read_to_string(path).expect("readable"), "0 1\n");
    }

    #[test]
    fn test_write_results_to_unwritable_path_is_io_error() {
        let result = write_results("0 1\n", Some(Path::new("/nonexistent/dir/clusters.txt")), true);
        assert!(matches!(result, Err(DedupError::Io { .. })));
    }
}
