use std::sync::LazyLock;

use regex::Regex;

use crate::domain::SummaryStyle;

static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid sentence boundary regex"));

/// Sentences this short are dropped from bullet lists.
const MIN_BULLET_CHARS: usize = 10;

/// Shapes plain model output into the requested style. Hosted models are
/// prompted for the style instead and skip this step.
pub fn apply_style(summary: &str, style: SummaryStyle) -> String {
    let summary = summary.trim();
    match style {
        SummaryStyle::BulletPoints => {
            let bullets: Vec<String> = SENTENCE_BOUNDARY
                .split(summary)
                .map(str::trim)
                .filter(|s| s.chars().count() > MIN_BULLET_CHARS)
                .map(|s| format!("• {}", s))
                .collect();
            if bullets.is_empty() {
                summary.to_string()
            } else {
                bullets.join("\n")
            }
        }
        SummaryStyle::Executive => format!("EXECUTIVE SUMMARY:\n\n{}", summary),
        SummaryStyle::Technical => format!("TECHNICAL SUMMARY:\n\n{}", summary),
        SummaryStyle::Paragraph => summary.to_string(),
    }
}

/// Splits text on word boundaries into chunks of at most `max_chars`
/// characters. A single word longer than the limit becomes its own chunk.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        let needed = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if needed <= max_chars || current.is_empty() {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
        } else {
            chunks.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}
