use std::collections::BTreeMap;

use tracing::debug;

use super::checks::{word_count, QualityChecks};
use super::route::Route;
use super::types::{ScoredRow, TranscriptRow};
use crate::config::ModelConfig;

/// Extra caller-supplied parameters for a scoring run.
///
/// Accepted so callers can pass run-specific settings without an API break;
/// none of the current checks read them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoreOptions {
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Score a single transcript.
pub fn score_transcript(transcript: &str, config: &ModelConfig) -> ScoredRow {
    let words = word_count(transcript);
    let checks = QualityChecks::evaluate(transcript, words, config);
    let quality_score = checks.score();
    let route = Route::from_score(quality_score);

    ScoredRow {
        quality_score,
        route,
        confidence: route.confidence(),
        word_count: words,
        validation_details: checks.details(),
    }
}

/// Score every row. Output row `i` belongs to input row `i`.
pub fn score(rows: &[TranscriptRow], config: &ModelConfig, options: &ScoreOptions) -> Vec<ScoredRow> {
    if !options.extra.is_empty() {
        debug!(keys = ?options.extra.keys().collect::<Vec<_>>(), "Ignoring unused score options");
    }

    let scored: Vec<ScoredRow> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| {
            if row.transcript.is_none() {
                debug!(row = idx, "Missing transcript, scoring as empty");
            }
            score_transcript(row.transcript(), config)
        })
        .collect();

    debug!(rows = scored.len(), "Scored transcripts");
    scored
}
