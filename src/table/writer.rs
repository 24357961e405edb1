use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::scoring::ScoredRow;

/// Write result rows as JSON Lines, one object per row
pub fn write_jsonl<W: Write>(writer: W, rows: &[ScoredRow]) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    for row in rows {
        serde_json::to_writer(&mut writer, row).context("Failed to serialize result row")?;
        writer.write_all(b"\n").context("Failed to write result row")?;
    }
    writer.flush().context("Failed to flush results")?;
    Ok(())
}

/// Write result rows to `path` atomically
///
/// Uses atomic-write-file so a failed run never leaves a half-written table.
pub fn write_jsonl_file(path: &Path, rows: &[ScoredRow]) -> Result<()> {
    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;

    write_jsonl(&mut file, rows)?;

    file.commit()
        .with_context(|| format!("Failed to save results to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;
    use crate::scoring::score_transcript;

    fn sample_rows() -> Vec<ScoredRow> {
        let config = ModelConfig::default();
        vec![
            score_transcript("short note", &config),
            score_transcript("Doctor asked about the drug", &config),
        ]
    }

    #[test]
    fn test_write_jsonl_one_line_per_row() {
        let mut buf = Vec::new();
        write_jsonl(&mut buf, &sample_rows()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["route"], "reject");
        assert_eq!(first["confidence"], "low");
        assert_eq!(first["word_count"], 2);
        assert!(first["validation_details"].is_string());

        let second: serde_json::Value = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(second["route"], "process_with_review");
        assert_eq!(second["quality_score"], 0.6);
    }

    #[test]
    fn test_write_jsonl_empty() {
        let mut buf = Vec::new();
        write_jsonl(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_write_jsonl_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scored.jsonl");

        write_jsonl_file(&path, &sample_rows()).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 2);
    }
}
