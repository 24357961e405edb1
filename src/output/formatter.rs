use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::{Route, ScoredRow};

/// A transcript paired with its scoring result, for display
pub struct ScoredTranscript<'a> {
    pub transcript: &'a str,
    pub result: &'a ScoredRow,
}

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a quality score with one decimal ("0.6", "1.0")
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Collapse whitespace so multi-line transcripts fit on one row
fn one_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate text to fit available width, counting chars rather than bytes
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn colored_route(route: Route, padded: &str) -> String {
    match route {
        Route::Process => padded.green().to_string(),
        Route::ProcessWithReview => padded.yellow().to_string(),
        Route::Reject => padded.red().to_string(),
    }
}

/// Format results as a table: index, score, route, word count, transcript preview.
/// No headers; the route column is padded to the longest route name.
pub fn format_scored_table(rows: &[ScoredTranscript], use_colors: bool) -> String {
    if rows.is_empty() {
        return "No transcripts scored.".to_string();
    }

    let term_width = get_terminal_width();

    // Index column: 4 chars ("999.") + 1 space
    // Score: 3 chars, route: 19 chars ("process_with_review"), words: 6 chars
    let index_width = 4;
    let score_width = 3;
    let route_width = Route::ProcessWithReview.as_str().len();
    let words_width = 6;
    let separator = "  ";

    rows.iter()
        .enumerate()
        .map(|(idx, scored)| {
            let index_str = format!("{:>width$}", format!("{}.", idx + 1), width = index_width);
            let score_str = format!("{:>width$}", format_score(scored.result.quality_score), width = score_width);
            let route_str = format!("{:<width$}", scored.result.route.as_str(), width = route_width);
            let words_str = format!("{:>width$}w", scored.result.word_count, width = words_width - 1);

            let fixed_width =
                index_width + 1 + score_width + route_width + words_width + separator.len() * 3;
            let text = one_line(scored.transcript);
            let preview = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_text(&text, width - fixed_width),
                // Very narrow terminal, show truncated
                Some(_) => truncate_text(&text, 20),
                // No terminal (pipe), don't truncate
                None => text,
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    colored_route(scored.result.route, &route_str),
                    separator,
                    words_str.dimmed(),
                    separator,
                    preview
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score_str, separator, route_str, separator, words_str, separator, preview
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format results as tab-separated values for scripting
/// Columns: quality_score, route, confidence, word_count, validation_details (no headers, no colors)
pub fn format_tsv(rows: &[ScoredRow]) -> String {
    rows.iter()
        .map(|row| {
            format!(
                "{}\t{}\t{}\t{}\t{}",
                format_score(row.quality_score),
                row.route,
                row.confidence,
                row.word_count,
                row.validation_details
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per route with its row count, best route first
pub fn format_summary(rows: &[ScoredRow]) -> String {
    Route::ALL
        .iter()
        .map(|&route| {
            let count = rows.iter().filter(|row| row.route == route).count();
            format!("{:<width$} {}", route.as_str(), count, width = Route::ProcessWithReview.as_str().len())
        })
        .collect::<Vec<_>>()
        .join("\n")
}
