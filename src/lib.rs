//! # Lipi
//!
//! A rule-based tokenizer for Gujarati and mixed-script text, with
//! corpus-level statistics.
//!
//! ## Features
//!
//! - Sentence segmentation on the danda, double danda and Latin terminators
//! - Token segmentation with a single ordered regex alternation
//! - Token classification into Gujarati words, English words, numbers,
//!   dates, emails, URLs and punctuation
//! - Corpus statistics: averages and type-token ratio
//! - Sequential or parallel corpus processing
//!
//! ## Example
//!
//! ```
//! use lipi::prelude::*;
//!
//! let tokenizer = GujaratiTokenizer::new().unwrap();
//! let doc = tokenizer.tokenize_paragraph("આજની તારીખ 25/07/2025 છે.");
//!
//! assert_eq!(doc.sentences.len(), 1);
//! assert_eq!(doc.sentences[0].tokens[2].category, TokenCategory::Date);
//!
//! let stats = compute_corpus_statistics(&[doc]);
//! assert_eq!(stats.total_words, 4);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod document;
pub mod error;

pub mod prelude {
    pub use crate::analysis::token::{Token, TokenCategory};
    pub use crate::analysis::tokenizer::Tokenizer;
    pub use crate::analysis::tokenizer::gujarati::GujaratiTokenizer;
    pub use crate::config::{ProcessingConfig, TokenizerConfig};
    pub use crate::corpus::{
        CorpusProcessor, CorpusStatistics, CorpusWriter, TextRecord, compute_corpus_statistics,
        process_dataset,
    };
    pub use crate::document::{DocumentResult, Sentence};
    pub use crate::error::{LipiError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
