use serde::Serialize;

use crate::config::ModelConfig;

/// Number of checks that make up a quality score
pub const CHECK_COUNT: usize = 5;

/// Matched case-sensitively against the uppercased transcript
const HCP_MARKER: &str = "HCP";
/// Matched against the lowercased transcript
const DOCTOR_MARKER: &str = "doctor";
const PRODUCT_TERMS: [&str; 3] = ["product", "medication", "drug"];
const STRUCTURE_TERMS: [&str; 3] = ["visit", "call", "meeting"];

/// Count whitespace-separated tokens (Unicode whitespace, runs collapse)
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Pass/fail result of each heuristic for one transcript.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QualityChecks {
    /// At least one token present
    pub has_words: bool,
    /// Mentions an HCP or a doctor
    pub has_hcp: bool,
    /// Mentions a product, medication or drug
    pub has_product: bool,
    /// Meets the configured minimum word count
    pub length_ok: bool,
    /// Refers to a visit, call or meeting
    pub has_structure: bool,
}

impl QualityChecks {
    /// Run every check against `transcript`. `words` is its token count.
    pub fn evaluate(transcript: &str, words: usize, config: &ModelConfig) -> Self {
        let lower = transcript.to_lowercase();

        Self {
            has_words: words > 0,
            has_hcp: transcript.to_uppercase().contains(HCP_MARKER) || lower.contains(DOCTOR_MARKER),
            has_product: PRODUCT_TERMS.iter().any(|term| lower.contains(term)),
            length_ok: words >= config.min_words,
            has_structure: STRUCTURE_TERMS.iter().any(|term| lower.contains(term)),
        }
    }

    fn as_array(&self) -> [bool; CHECK_COUNT] {
        [
            self.has_words,
            self.has_hcp,
            self.has_product,
            self.length_ok,
            self.has_structure,
        ]
    }

    pub fn passed(&self) -> usize {
        self.as_array().iter().filter(|&&ok| ok).count()
    }

    /// Fraction of checks passed: one of 0.0, 0.2, 0.4, 0.6, 0.8, 1.0
    pub fn score(&self) -> f64 {
        self.passed() as f64 / CHECK_COUNT as f64
    }

    /// Compact JSON object of check name to result, keys sorted
    pub fn details(&self) -> String {
        serde_json::json!({
            "has_words": self.has_words,
            "has_hcp": self.has_hcp,
            "has_product": self.has_product,
            "length_ok": self.length_ok,
            "has_structure": self.has_structure,
        })
        .to_string()
    }
}
