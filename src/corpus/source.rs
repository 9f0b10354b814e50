//! Record sources feeding the corpus processor.
//!
//! A source is any iterator of `Result<TextRecord>`. Records with a missing
//! or blank text field are not errors; the processor skips them. Failing to
//! open or read the source is a [`LipiError::Source`].
//!
//! JSONL input has one JSON object per line:
//! ```jsonl
//! {"id": 1, "text": "આજે હું દુકાને ગયો."}
//! {"id": 2, "text": "મારું ઇમેઇલ test@example.com છે."}
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ProcessingConfig;
use crate::error::{LipiError, Result};

/// A record pulled from a text source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    /// The text to tokenize, if the record carries one.
    pub text: Option<String>,
}

impl TextRecord {
    /// Create a record holding `text`.
    pub fn new<S: Into<String>>(text: S) -> Self {
        TextRecord {
            text: Some(text.into()),
        }
    }

    /// Create a record without text.
    pub fn empty() -> Self {
        TextRecord { text: None }
    }

    /// The text, if present and not blank.
    pub fn usable_text(&self) -> Option<&str> {
        self.text.as_deref().filter(|text| !text.trim().is_empty())
    }
}

impl From<&str> for TextRecord {
    fn from(text: &str) -> Self {
        TextRecord::new(text)
    }
}

impl From<String> for TextRecord {
    fn from(text: String) -> Self {
        TextRecord { text: Some(text) }
    }
}

/// Wrap in-memory texts as an infallible source.
pub fn records_from_texts<I, S>(texts: I) -> impl Iterator<Item = Result<TextRecord>>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    texts
        .into_iter()
        .map(|text| Ok(TextRecord::from(text.into())))
}

/// Reads records from a JSON Lines file.
pub struct JsonlTextSource {
    reader: BufReader<File>,
    text_field: String,
    line_number: usize,
}

impl std::fmt::Debug for JsonlTextSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonlTextSource")
            .field("text_field", &self.text_field)
            .field("line_number", &self.line_number)
            .finish()
    }
}

impl JsonlTextSource {
    /// Open a JSONL file, reading text from `text_field`.
    pub fn open<P: AsRef<Path>>(path: P, text_field: &str) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            LipiError::source_unavailable(format!("Failed to open {}: {e}", path.display()))
        })?;

        Ok(JsonlTextSource {
            reader: BufReader::new(file),
            text_field: text_field.to_string(),
            line_number: 0,
        })
    }

    /// Open a JSONL file, reading text from the configured `text_field`.
    pub fn from_config<P: AsRef<Path>>(path: P, config: &ProcessingConfig) -> Result<Self> {
        Self::open(path, &config.text_field)
    }

    /// Parse a single JSON line into a record.
    fn parse_line(&self, line: &str) -> Result<TextRecord> {
        let value: Value = serde_json::from_str(line).map_err(|e| {
            LipiError::source_unavailable(format!("Line {}: invalid JSON: {e}", self.line_number))
        })?;

        let Value::Object(map) = value else {
            return Err(LipiError::source_unavailable(format!(
                "Line {}: expected a JSON object",
                self.line_number
            )));
        };

        match map.get(&self.text_field) {
            None | Some(Value::Null) => Ok(TextRecord::empty()),
            Some(Value::String(text)) => Ok(TextRecord::new(text.as_str())),
            Some(other) => Err(LipiError::source_unavailable(format!(
                "Line {}: field '{}' is not a string: {other}",
                self.line_number, self.text_field
            ))),
        }
    }
}

impl Iterator for JsonlTextSource {
    type Item = Result<TextRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = String::new();
        loop {
            line.clear();
            match self.reader.read_line(&mut line) {
                Ok(0) => return None, // EOF
                Ok(_) => {
                    self.line_number += 1;
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    return Some(self.parse_line(line));
                }
                Err(e) => {
                    return Some(Err(LipiError::source_unavailable(format!(
                        "Failed to read line {}: {e}",
                        self.line_number + 1
                    ))));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_usable_text() {
        assert_eq!(TextRecord::new("હા").usable_text(), Some("હા"));
        assert_eq!(TextRecord::new(" \n ").usable_text(), None);
        assert_eq!(TextRecord::empty().usable_text(), None);
    }

    #[test]
    fn test_source_from_config_uses_text_field() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"text": "ignored", "content": "વાંચો"}}"#).unwrap();
        file.flush().unwrap();

        let config = ProcessingConfig::default().with_text_field("content");
        let records: Vec<_> = JsonlTextSource::from_config(file.path(), &config)
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(records, vec![TextRecord::new("વાંચો")]);
    }

    #[test]
    fn test_jsonl_source_reads_text_field() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"id": 1, "text": "આજે હું દુકાને ગયો."}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"id": 2}}"#).unwrap();
        writeln!(file, r#"{{"id": 3, "text": null}}"#).unwrap();
        file.flush().unwrap();

        let records: Vec<TextRecord> = JsonlTextSource::open(file.path(), "text")
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].text.as_deref(), Some("આજે હું દુકાને ગયો."));
        assert_eq!(records[1], TextRecord::empty());
        assert_eq!(records[2], TextRecord::empty());
    }

    #[test]
    fn test_jsonl_source_custom_field() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"body": "hello"}}"#).unwrap();
        file.flush().unwrap();

        let mut source = JsonlTextSource::open(file.path(), "body").unwrap();
        assert_eq!(source.next().unwrap().unwrap(), TextRecord::new("hello"));
        assert!(source.next().is_none());
    }

    #[test]
    fn test_jsonl_source_reports_bad_lines() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not json").unwrap();
        writeln!(file, r#"{{"text": 42}}"#).unwrap();
        writeln!(file, r#"["text"]"#).unwrap();
        file.flush().unwrap();

        let results: Vec<Result<TextRecord>> =
            JsonlTextSource::open(file.path(), "text").unwrap().collect();

        assert_eq!(results.len(), 3);
        for result in results {
            assert!(matches!(result, Err(LipiError::Source(_))));
        }
    }

    #[test]
    fn test_missing_file_is_source_error() {
        let result = JsonlTextSource::open("/nonexistent/corpus.jsonl", "text");
        assert!(matches!(result, Err(LipiError::Source(_))));
    }

    #[test]
    fn test_records_from_texts() {
        let records: Vec<_> = records_from_texts(["a", "b"]).collect::<Result<_>>().unwrap();
        assert_eq!(records, vec![TextRecord::new("a"), TextRecord::new("b")]);
    }
}
