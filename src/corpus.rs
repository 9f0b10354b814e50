//! Corpus processing and aggregation.
//!
//! The aggregator pulls records from a [`source`], runs each text through the
//! tokenizer with a [`processor::CorpusProcessor`], and reduces the results to
//! [`stats::CorpusStatistics`]. Results and statistics can be persisted with a
//! [`writer::CorpusWriter`].

pub mod processor;
pub mod source;
pub mod stats;
pub mod writer;

pub use processor::{CorpusProcessor, process_dataset};
pub use source::{JsonlTextSource, TextRecord, records_from_texts};
pub use stats::{
    CorpusStatistics, StatisticsAccumulator, compute_corpus_statistics,
    compute_corpus_statistics_parallel,
};
pub use writer::{CorpusWriter, SavedFiles, load_documents};
