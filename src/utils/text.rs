//! Document normalization.
//!
//! The pipeline compares documents after folding case and stripping
//! punctuation; exact-duplicate digests use a lighter trim + lowercase
//! form so that whitespace-padded copies still collide.

use regex::Regex;

/// Lowercases documents and strips characters outside the word/whitespace
/// class before shingling.
#[derive(Debug, Clone)]
pub struct Normalizer {
    punctuation: Regex,
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            // \w and \s are Unicode-aware: anything outside the
            // word/whitespace class is stripped.
            punctuation: Regex::new(r"[^\w\s]").expect("static pattern is valid"),
        }
    }

    /// Full normalization: lowercase, then strip punctuation.
    pub fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        self.punctuation.replace_all(&lowered, "").into_owned()
    }
}

/// The form hashed for exact-duplicate detection: trimmed + lowercased.
/// Punctuation survives, so "Hello!" and "Hello" stay distinct documents.
pub fn canonical_exact(text: &str) -> String {
    text.trim().to_lowercase()
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}
