use anyhow::{bail, Context, Result};
use serde_json::Value;
use std::io::Read;

use crate::scoring::TranscriptRow;

const TRANSCRIPT_FIELD: &str = "transcript";

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Convert one decoded row. `index` is the 0-based row position, used in errors.
///
/// A missing or null `transcript` is accepted; any other non-string value is
/// a type mismatch.
pub fn parse_row(index: usize, value: Value) -> Result<TranscriptRow> {
    let mut fields = match value {
        Value::Object(fields) => fields,
        other => bail!("row {}: expected a JSON object, found {}", index, type_name(&other)),
    };

    match fields.remove(TRANSCRIPT_FIELD) {
        None | Some(Value::Null) => Ok(TranscriptRow::missing()),
        Some(Value::String(text)) => Ok(TranscriptRow::new(text)),
        Some(other) => bail!(
            "row {}: type mismatch for '{}': expected string, found {}",
            index,
            TRANSCRIPT_FIELD,
            type_name(&other)
        ),
    }
}

/// Parse a whole input table.
///
/// Blank lines in JSON Lines input are skipped and do not count as rows.
pub fn parse_rows(input: &str) -> Result<Vec<TranscriptRow>> {
    let trimmed = input.trim_start();

    if trimmed.starts_with('[') {
        let values: Vec<Value> =
            serde_json::from_str(trimmed).context("Failed to parse JSON array input")?;
        return values
            .into_iter()
            .enumerate()
            .map(|(idx, value)| parse_row(idx, value))
            .collect();
    }

    let mut rows = Vec::new();
    for (line_idx, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line)
            .with_context(|| format!("Invalid JSON on line {}", line_idx + 1))?;
        rows.push(parse_row(rows.len(), value)?);
    }
    Ok(rows)
}

/// Read everything from `reader` and parse it as an input table
pub fn read_rows<R: Read>(mut reader: R) -> Result<Vec<TranscriptRow>> {
    let mut input = String::new();
    reader
        .read_to_string(&mut input)
        .context("Failed to read input table")?;
    parse_rows(&input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_jsonl() {
        let input = "{\"transcript\": \"short note\"}\n\n{\"transcript\": \"the HCP\", \"id\": 4}\n";
        let rows = parse_rows(input).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].transcript(), "short note");
        assert_eq!(rows[1].transcript(), "the HCP");
    }

    #[test]
    fn test_parse_json_array() {
        let input = r#"  [{"transcript": "a"}, {"id": 2}, {"transcript": null}]"#;
        let rows = parse_rows(input).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].transcript(), "a");
        assert_eq!(rows[1], TranscriptRow::missing());
        assert_eq!(rows[2], TranscriptRow::missing());
    }

    #[test]
    fn test_empty_input_is_empty_table() {
        assert!(parse_rows("").unwrap().is_empty());
        assert!(parse_rows("\n  \n").unwrap().is_empty());
        assert!(parse_rows("[]").unwrap().is_empty());
    }

    #[test]
    fn test_non_string_transcript_is_type_mismatch() {
        let err = parse_row(3, json!({"transcript": 42})).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("type mismatch"));
        assert!(msg.contains("number"));

        let err = parse_row(0, json!({"transcript": ["a", "b"]})).unwrap_err();
        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_non_object_row_rejected() {
        let err = parse_row(1, json!("just text")).unwrap_err();
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn test_jsonl_row_index_skips_blank_lines() {
        let input = "{\"transcript\": \"ok\"}\n\n{\"transcript\": true}\n";
        let err = parse_rows(input).unwrap_err();
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn test_invalid_json_reports_line() {
        let input = "{\"transcript\": \"ok\"}\n{oops\n";
        let err = parse_rows(input).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_read_rows_from_reader() {
        let input = b"{\"transcript\": \"from a reader\"}\n";
        let rows = read_rows(&input[..]).unwrap();
        assert_eq!(rows[0].transcript(), "from a reader");
    }
}
