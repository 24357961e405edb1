pub mod formatter;

pub use formatter::{
    format_score, format_scored_table, format_summary, format_tsv, should_use_colors,
    ScoredTranscript,
};
