//! Sentence segmentation for Gujarati and mixed-script text.
//!
//! Sentences end at runs of terminators: the danda `।`, the double danda `॥`,
//! and the Latin `.`, `!`, `?`. Terminators are consumed and never appear in
//! the returned sentence text.
//!
//! Every terminator run ends a sentence, with or without whitespace after it,
//! except a single `.` with an ASCII letter or digit on both sides. The dots
//! in `example.com`, `3.14` or `25.07.2025` therefore stay inside their
//! sentence.
//!
//! # Examples
//!
//! ```
//! use lipi::analysis::sentence::SentenceSplitter;
//!
//! let splitter = SentenceSplitter::new().unwrap();
//! let sentences = splitter.split("આજે હું દુકાને ગયો. મેં ખાણાની વસ્તુઓ ખરીદી।");
//! assert_eq!(sentences, vec!["આજે હું દુકાને ગયો", "મેં ખાણાની વસ્તુઓ ખરીદી"]);
//! ```

use std::sync::Arc;

use regex::Regex;

use crate::error::{LipiError, Result};

/// Terminator runs plus the whitespace that follows them.
const BOUNDARY_PATTERN: &str = r"[\x{0964}\x{0965}.!?]+\s*";

/// Splits text into sentences on terminator runs.
#[derive(Clone, Debug)]
pub struct SentenceSplitter {
    boundary: Arc<Regex>,
}

impl SentenceSplitter {
    /// Create a new sentence splitter.
    pub fn new() -> Result<Self> {
        let boundary = Regex::new(BOUNDARY_PATTERN)
            .map_err(|e| LipiError::analysis(format!("Invalid sentence pattern: {e}")))?;

        Ok(SentenceSplitter {
            boundary: Arc::new(boundary),
        })
    }

    /// Split `text` into trimmed, non-empty sentences in order of appearance.
    pub fn split(&self, text: &str) -> Vec<String> {
        self.spans(text)
            .into_iter()
            .map(|(start, end)| text[start..end].to_string())
            .collect()
    }

    /// Byte spans of the sentences in `text`, trimmed and non-empty.
    pub fn spans(&self, text: &str) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        let mut start = 0;

        for mat in self.boundary.find_iter(text) {
            if is_inline_dot(text, mat.start(), mat.end()) {
                continue;
            }
            push_trimmed(text, start, mat.start(), &mut spans);
            start = mat.end();
        }
        push_trimmed(text, start, text.len(), &mut spans);

        spans
    }

}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new().expect("Sentence boundary pattern should be valid")
    }
}

/// A lone `.` joining two ASCII alphanumerics, as in hosts, decimals and dates.
fn is_inline_dot(text: &str, start: usize, end: usize) -> bool {
    &text[start..end] == "."
        && text[..start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_alphanumeric())
        && text[end..]
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric())
}

fn push_trimmed(text: &str, start: usize, end: usize, spans: &mut Vec<(usize, usize)>) {
    let piece = &text[start..end];
    let trimmed = piece.trim_start();
    let lead = piece.len() - trimmed.len();
    let trimmed = trimmed.trim_end();
    if !trimmed.is_empty() {
        let from = start + lead;
        spans.push((from, from + trimmed.len()));
    }
}
