//! Per-document tokenization results.
//!
//! A [`DocumentResult`] owns its [`Sentence`]s, and each sentence owns its
//! [`Token`]s. Both are built once by the tokenizer and never mutated.

use serde::{Deserialize, Serialize};

use crate::analysis::token::{Token, TokenCategory};

/// A sentence and its classified tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    /// Sentence text, trimmed, without its terminator.
    pub text: String,
    /// Classified tokens in order of appearance.
    pub tokens: Vec<Token>,
    /// Number of tokens, punctuation included.
    pub word_count: usize,
}

impl Sentence {
    /// Create a sentence from its text and tokens.
    pub fn new<S: Into<String>>(text: S, tokens: Vec<Token>) -> Self {
        let word_count = tokens.len();
        Sentence {
            text: text.into(),
            tokens,
            word_count,
        }
    }

    /// Token texts in order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|token| token.text.as_str())
    }

    /// `(text, category)` pairs in order.
    pub fn classified_words(&self) -> impl Iterator<Item = (&str, TokenCategory)> {
        self.tokens
            .iter()
            .map(|token| (token.text.as_str(), token.category))
    }
}

/// The tokenization of one input text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentResult {
    /// The input text, unmodified.
    pub original_text: String,
    /// Number of Unicode code points in `original_text`.
    pub total_characters: usize,
    /// Sum of the sentence word counts.
    pub total_words: usize,
    /// Sentences in order of appearance.
    pub sentences: Vec<Sentence>,
}

impl DocumentResult {
    /// Assemble a result from the original text and its sentences.
    pub fn new<S: Into<String>>(original_text: S, sentences: Vec<Sentence>) -> Self {
        let original_text = original_text.into();
        let total_characters = original_text.chars().count();
        let total_words = sentences.iter().map(|sentence| sentence.word_count).sum();
        DocumentResult {
            original_text,
            total_characters,
            total_words,
            sentences,
        }
    }

    /// Iterate over every token of every sentence.
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.sentences.iter().flat_map(|sentence| sentence.tokens.iter())
    }

    /// Number of tokens with the given category.
    pub fn count_category(&self, category: TokenCategory) -> usize {
        self.tokens().filter(|token| token.category == category).count()
    }
}
