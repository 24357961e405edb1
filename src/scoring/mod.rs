pub mod checks;
pub mod engine;
pub mod route;
pub mod types;

pub use checks::{word_count, QualityChecks, CHECK_COUNT};
pub use engine::{score, score_transcript, ScoreOptions};
pub use route::{Confidence, Route};
pub use types::{ScoredRow, TranscriptRow};
