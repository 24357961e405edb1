//! Row interchange for scoring runs.
//!
//! Input tables are JSON Lines (one object per line) or a single JSON array of
//! objects. Results are written back as JSON Lines.

mod reader;
mod writer;

pub use reader::{parse_row, parse_rows, read_rows};
pub use writer::{write_jsonl, write_jsonl_file};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config;
    use crate::scoring::{score, Route, ScoreOptions};

    #[test]
    fn test_parse_score_write_pipeline() {
        let input = concat!(
            "{\"transcript\": \"short note\"}\n",
            "{\"id\": 2}\n",
            "{\"transcript\": \"The doctor asked about the drug on the call\"}\n",
        );
        let rows = parse_rows(input).unwrap();
        let results = score(&rows, &load_config("models"), &ScoreOptions::default());

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].route, Route::Reject);
        assert_eq!(results[1].word_count, 0);
        assert_eq!(results[2].route, Route::Process);

        let mut buf = Vec::new();
        write_jsonl(&mut buf, &results).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().count(), 3);
    }
}
