use serde::Serialize;

use super::route::{Confidence, Route};

/// One input row. Only the transcript is read; a missing transcript scores
/// as the empty string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranscriptRow {
    pub transcript: Option<String>,
}

impl TranscriptRow {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: Some(transcript.into()),
        }
    }

    /// Row with no transcript field at all
    pub fn missing() -> Self {
        Self { transcript: None }
    }

    pub fn transcript(&self) -> &str {
        self.transcript.as_deref().unwrap_or("")
    }
}

/// Scoring outcome for a single transcript, in input order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRow {
    pub quality_score: f64,
    pub route: Route,
    pub confidence: Confidence,
    pub word_count: usize,
    /// JSON object mapping each check name to whether it passed
    pub validation_details: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_transcript_reads_as_empty() {
        assert_eq!(TranscriptRow::missing().transcript(), "");
        assert_eq!(TranscriptRow::default().transcript(), "");
    }

    #[test]
    fn test_present_transcript() {
        let row = TranscriptRow::new("hello there");
        assert_eq!(row.transcript(), "hello there");
    }

    #[test]
    fn test_scored_row_serializes_snake_case() {
        let row = ScoredRow {
            quality_score: 0.6,
            route: Route::ProcessWithReview,
            confidence: Confidence::Medium,
            word_count: 7,
            validation_details: "{}".to_string(),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["route"], "process_with_review");
        assert_eq!(json["confidence"], "medium");
        assert_eq!(json["word_count"], 7);
        assert_eq!(json["quality_score"], 0.6);
    }
}
