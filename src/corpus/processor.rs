//! Drives record sources through the tokenizer.

use log::{debug, info};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::analysis::tokenizer::gujarati::GujaratiTokenizer;
use crate::config::ProcessingConfig;
use crate::corpus::source::TextRecord;
use crate::document::DocumentResult;
use crate::error::Result;

/// Tokenizes the records of a source into [`DocumentResult`]s.
#[derive(Clone, Debug)]
pub struct CorpusProcessor {
    tokenizer: GujaratiTokenizer,
    config: ProcessingConfig,
}

impl CorpusProcessor {
    /// Create a processor around an existing tokenizer.
    pub fn new(tokenizer: GujaratiTokenizer, config: ProcessingConfig) -> Self {
        CorpusProcessor { tokenizer, config }
    }

    /// Get the tokenizer.
    pub fn tokenizer(&self) -> &GujaratiTokenizer {
        &self.tokenizer
    }

    /// Get the processing configuration.
    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    /// Tokenize records in source order.
    ///
    /// At most `max_examples` records are pulled. Blank records count toward
    /// that limit but produce no result. Source errors stop processing.
    pub fn process<I>(&self, source: I) -> Result<Vec<DocumentResult>>
    where
        I: IntoIterator<Item = Result<TextRecord>>,
    {
        info!("Processing up to {} examples...", self.limit_label());

        let mut processed = Vec::new();
        self.for_each_text(source, |text| {
            processed.push(self.tokenizer.tokenize_paragraph(&text));
        })?;

        info!("Completed processing {} examples", processed.len());
        Ok(processed)
    }

    /// Tokenize records on a thread pool, keeping source order.
    ///
    /// Records are pulled sequentially, then tokenized in parallel.
    pub fn process_parallel<I>(&self, source: I) -> Result<Vec<DocumentResult>>
    where
        I: IntoIterator<Item = Result<TextRecord>>,
    {
        info!(
            "Processing up to {} examples on {} threads...",
            self.limit_label(),
            self.config.threads()
        );

        let mut texts = Vec::new();
        self.for_each_text(source, |text| texts.push(text))?;

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.config.threads())
            .thread_name(|i| format!("lipi-worker-{i}"))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create thread pool: {e}"))?;

        let processed: Vec<DocumentResult> = pool.install(|| {
            texts
                .par_iter()
                .map(|text| self.tokenizer.tokenize_paragraph(text))
                .collect()
        });

        info!("Completed processing {} examples", processed.len());
        Ok(processed)
    }

    /// Pull records up to the limit and hand each usable text to `f`.
    fn for_each_text<I, F>(&self, source: I, mut f: F) -> Result<()>
    where
        I: IntoIterator<Item = Result<TextRecord>>,
        F: FnMut(String),
    {
        let limit = self.config.max_examples.unwrap_or(usize::MAX);
        let interval = self.config.progress_interval.max(1);

        for (index, record) in source.into_iter().take(limit).enumerate() {
            if index % interval == 0 {
                info!("Processed {index} examples...");
            }

            match record?.usable_text() {
                Some(text) => f(text.to_owned()),
                _ => debug!("Skipping record {index}: no text"),
            }
        }
        Ok(())
    }

    fn limit_label(&self) -> String {
        self.config
            .max_examples
            .map_or_else(|| "all".to_string(), |max| max.to_string())
    }
}

/// Tokenize up to `max_examples` records from `source` with `tokenizer`.
///
/// `None` consumes the whole source.
pub fn process_dataset<I>(
    tokenizer: &GujaratiTokenizer,
    source: I,
    max_examples: Option<usize>,
) -> Result<Vec<DocumentResult>>
where
    I: IntoIterator<Item = Result<TextRecord>>,
{
    let config = ProcessingConfig::default().with_max_examples(max_examples);
    CorpusProcessor::new(tokenizer.clone(), config).process(source)
}
