//! Corpus-level statistics over tokenized documents.
//!
//! [`CorpusStatistics`] is recomputed from the full set of documents each
//! time and keeps full precision. Rounding (two decimals for lengths, four
//! for the type-token ratio) is applied only by [`CorpusStatistics::report`]
//! and [`CorpusStatistics::rounded`].
//!
//! # Examples
//!
//! ```
//! use lipi::analysis::tokenizer::gujarati::GujaratiTokenizer;
//! use lipi::corpus::stats::compute_corpus_statistics;
//!
//! let tokenizer = GujaratiTokenizer::new().unwrap();
//! let docs = vec![tokenizer.tokenize_paragraph("હું ઘરે છું. તમે ક્યાં છો?")];
//! let stats = compute_corpus_statistics(&docs);
//!
//! assert_eq!(stats.total_sentences, 2);
//! assert_eq!(stats.total_words, 6);
//! assert_eq!(stats.average_sentence_length, 3.0);
//! ```

use std::fmt;

use ahash::AHashSet;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::document::DocumentResult;

/// Summary statistics for a corpus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusStatistics {
    /// Number of sentences across all documents.
    pub total_sentences: usize,
    /// Number of tokens across all sentences, punctuation included.
    pub total_words: usize,
    /// Sum of the documents' code point counts.
    pub total_characters: usize,
    /// `total_words / total_sentences`, or 0 without sentences.
    pub average_sentence_length: f64,
    /// Mean token length in code points, or 0 without tokens.
    pub average_word_length: f64,
    /// Distinct token texts over total tokens, or 0 without tokens.
    pub type_token_ratio: f64,
    /// Number of distinct token texts.
    pub unique_words: usize,
}

impl CorpusStatistics {
    /// Copy with averages rounded for display.
    pub fn rounded(&self) -> CorpusStatistics {
        CorpusStatistics {
            average_sentence_length: round_to(self.average_sentence_length, 2),
            average_word_length: round_to(self.average_word_length, 2),
            type_token_ratio: round_to(self.type_token_ratio, 4),
            ..self.clone()
        }
    }

    /// Human-readable `(label, value)` pairs, one per metric.
    pub fn report(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Total number of sentences", self.total_sentences.to_string()),
            ("Total number of words", self.total_words.to_string()),
            ("Total number of characters", self.total_characters.to_string()),
            (
                "Average sentence length (words per sentence)",
                format!("{:.2}", self.average_sentence_length),
            ),
            (
                "Average word length (characters per word)",
                format!("{:.2}", self.average_word_length),
            ),
            ("Type-Token Ratio (TTR)", format!("{:.4}", self.type_token_ratio)),
            ("Total unique words", self.unique_words.to_string()),
        ]
    }
}

impl fmt::Display for CorpusStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.report() {
            writeln!(f, "{label}: {value}")?;
        }
        Ok(())
    }
}

/// Mergeable running totals behind [`CorpusStatistics`].
///
/// The vocabulary borrows token texts from the documents, so the accumulator
/// cannot outlive them.
#[derive(Debug, Clone, Default)]
pub struct StatisticsAccumulator<'a> {
    total_sentences: usize,
    total_words: usize,
    total_characters: usize,
    total_word_chars: usize,
    vocabulary: AHashSet<&'a str>,
}

impl<'a> StatisticsAccumulator<'a> {
    /// Create an empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document's sentences and tokens.
    pub fn add_document(&mut self, document: &'a DocumentResult) {
        self.total_characters += document.total_characters;

        for sentence in &document.sentences {
            self.total_sentences += 1;
            self.total_words += sentence.word_count;
            for token in &sentence.tokens {
                self.total_word_chars += token.char_len();
                self.vocabulary.insert(token.text.as_str());
            }
        }
    }

    /// Combine two partial accumulators.
    pub fn merge(mut self, other: StatisticsAccumulator<'a>) -> Self {
        self.total_sentences += other.total_sentences;
        self.total_words += other.total_words;
        self.total_characters += other.total_characters;
        self.total_word_chars += other.total_word_chars;
        if self.vocabulary.len() < other.vocabulary.len() {
            let mut vocabulary = other.vocabulary;
            vocabulary.extend(self.vocabulary);
            self.vocabulary = vocabulary;
        } else {
            self.vocabulary.extend(other.vocabulary);
        }
        self
    }

    /// Derive the statistics from the totals.
    pub fn finish(&self) -> CorpusStatistics {
        let unique_words = self.vocabulary.len();

        CorpusStatistics {
            total_sentences: self.total_sentences,
            total_words: self.total_words,
            total_characters: self.total_characters,
            average_sentence_length: ratio(self.total_words, self.total_sentences),
            average_word_length: ratio(self.total_word_chars, self.total_words),
            type_token_ratio: ratio(unique_words, self.total_words),
            unique_words,
        }
    }
}

/// Compute statistics over `results` in a single sequential pass.
pub fn compute_corpus_statistics(results: &[DocumentResult]) -> CorpusStatistics {
    let mut accumulator = StatisticsAccumulator::new();
    for document in results {
        accumulator.add_document(document);
    }
    accumulator.finish()
}

/// Compute statistics over `results` with a parallel fold and reduce.
///
/// Gives the same result as [`compute_corpus_statistics`].
pub fn compute_corpus_statistics_parallel(results: &[DocumentResult]) -> CorpusStatistics {
    results
        .par_iter()
        .fold(StatisticsAccumulator::new, |mut accumulator, document| {
            accumulator.add_document(document);
            accumulator
        })
        .reduce(StatisticsAccumulator::new, StatisticsAccumulator::merge)
        .finish()
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
