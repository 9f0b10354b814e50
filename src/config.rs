//! Configuration for the tokenizer and the corpus processor.

use serde::{Deserialize, Serialize};

/// Configuration for [`GujaratiTokenizer`](crate::analysis::tokenizer::gujarati::GujaratiTokenizer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizerConfig {
    /// Emit characters no rule covers as single-character `other` tokens
    /// instead of dropping them during segmentation.
    pub keep_unmatched: bool,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            keep_unmatched: true,
        }
    }
}

impl TokenizerConfig {
    /// Set whether uncovered characters are kept.
    pub fn with_keep_unmatched(mut self, keep_unmatched: bool) -> Self {
        self.keep_unmatched = keep_unmatched;
        self
    }
}

/// Configuration for corpus processing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessingConfig {
    /// Maximum number of records pulled from the source.
    /// If None, the whole source is consumed.
    pub max_examples: Option<usize>,

    /// Log progress every this many records.
    pub progress_interval: usize,

    /// Name of the record field holding the text.
    /// Read by [`JsonlTextSource::from_config`](crate::corpus::source::JsonlTextSource::from_config).
    pub text_field: String,

    /// Thread pool size for parallel processing.
    /// If None, uses the number of CPU cores.
    pub thread_pool_size: Option<usize>,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            max_examples: Some(1000),
            progress_interval: 100,
            text_field: "text".to_string(),
            thread_pool_size: None,
        }
    }
}

impl ProcessingConfig {
    /// Set the maximum number of records to pull.
    pub fn with_max_examples(mut self, max_examples: Option<usize>) -> Self {
        self.max_examples = max_examples;
        self
    }

    /// Set the progress logging interval. Zero is treated as one.
    pub fn with_progress_interval(mut self, interval: usize) -> Self {
        self.progress_interval = interval.max(1);
        self
    }

    /// Set the text field name.
    pub fn with_text_field<S: Into<String>>(mut self, field: S) -> Self {
        self.text_field = field.into();
        self
    }

    /// Set the thread pool size.
    pub fn with_thread_pool_size(mut self, size: Option<usize>) -> Self {
        self.thread_pool_size = size;
        self
    }

    /// Effective number of worker threads.
    pub fn threads(&self) -> usize {
        self.thread_pool_size.unwrap_or_else(num_cpus::get).max(1)
    }
}
