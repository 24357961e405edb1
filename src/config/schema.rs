use serde::{Deserialize, Serialize};

/// Thresholds and keyword lists shared by every scored row.
///
/// Example YAML:
/// ```yaml
/// min_words: 50
/// required_keywords: ["HCP", "product", "discussion"]
/// max_transcription_confidence: 0.7
/// ```
///
/// Omitted fields fall back to the built-in values.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    /// Minimum number of whitespace-separated tokens for `length_ok`
    pub min_words: usize,

    /// Keywords a complete transcript is expected to mention.
    /// Carried for downstream consumers; the heuristic checks use fixed lists.
    pub required_keywords: Vec<String>,

    /// Upper bound on the transcription engine's confidence, in [0, 1]
    pub max_transcription_confidence: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            min_words: 50,
            required_keywords: vec![
                "HCP".to_string(),
                "product".to_string(),
                "discussion".to_string(),
            ],
            max_transcription_confidence: 0.7,
        }
    }
}
