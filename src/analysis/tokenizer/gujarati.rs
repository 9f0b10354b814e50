//! Rule-based tokenizer for Gujarati and mixed-script text.
//!
//! The tokenizer compiles the rule table from [`crate::analysis::rule`] twice:
//!
//! - once as a single alternation with one named group per category, used to
//!   segment a sentence into tokens, and
//! - once per rule as an anchored prefix pattern, used to classify a token.
//!
//! Both are built from the same table, so segmentation and classification
//! cannot disagree on precedence.

use std::sync::Arc;

use regex::{Captures, Regex};

use super::Tokenizer;
use crate::analysis::rule::{self, RULES, WHITESPACE_GROUP};
use crate::analysis::sentence::SentenceSplitter;
use crate::analysis::token::{Token, TokenCategory, TokenStream};
use crate::config::TokenizerConfig;
use crate::document::{DocumentResult, Sentence};
use crate::error::{LipiError, Result};

/// Tokenizer engine holding the compiled rule set.
///
/// Build it once and share it; cloning only bumps reference counts.
#[derive(Clone, Debug)]
pub struct GujaratiTokenizer {
    config: TokenizerConfig,
    /// Unified alternation used for segmentation
    segmenter: Arc<Regex>,
    /// Anchored per-rule patterns in precedence order
    classifiers: Arc<Vec<(TokenCategory, Regex)>>,
    sentences: SentenceSplitter,
}

impl GujaratiTokenizer {
    /// Create a tokenizer with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(TokenizerConfig::default())
    }

    /// Create a tokenizer with a custom configuration.
    pub fn with_config(config: TokenizerConfig) -> Result<Self> {
        let segmenter = Regex::new(&rule::segmentation_pattern(config.keep_unmatched))
            .map_err(|e| LipiError::analysis(format!("Invalid segmentation pattern: {e}")))?;

        let classifiers = RULES
            .iter()
            .map(|rule| {
                Regex::new(&rule::prefix_pattern(rule))
                    .map(|regex| (rule.category, regex))
                    .map_err(|e| {
                        LipiError::analysis(format!("Invalid pattern for {}: {e}", rule.group))
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(GujaratiTokenizer {
            config,
            segmenter: Arc::new(segmenter),
            classifiers: Arc::new(classifiers),
            sentences: SentenceSplitter::new()?,
        })
    }

    /// Get the configuration of this tokenizer.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Split text into trimmed, non-empty sentences.
    pub fn sentence_tokenize(&self, text: &str) -> Vec<String> {
        self.sentences.split(text)
    }

    /// Split text into token texts, dropping whitespace.
    pub fn word_tokenize(&self, text: &str) -> Vec<String> {
        self.segment(text)
            .into_iter()
            .map(|(start, end)| text[start..end].to_string())
            .collect()
    }

    /// Classify a token by the first rule matching at its start.
    ///
    /// The match need not cover the whole token, so `123abc` is an integer.
    /// Returns [`TokenCategory::Other`] when no rule matches.
    pub fn classify_token(&self, token: &str) -> TokenCategory {
        self.classifiers
            .iter()
            .find(|(_, regex)| regex.is_match(token))
            .map(|(category, _)| *category)
            .unwrap_or(TokenCategory::Other)
    }

    /// Tokenize and classify a single sentence.
    pub fn tokenize_sentence(&self, sentence: &str) -> Sentence {
        Sentence::new(sentence, self.classified_tokens(sentence))
    }

    /// Tokenize a paragraph into sentences of classified tokens.
    pub fn tokenize_paragraph(&self, text: &str) -> DocumentResult {
        let sentences = self
            .sentence_tokenize(text)
            .into_iter()
            .map(|sentence| {
                let tokens = self.classified_tokens(&sentence);
                Sentence::new(sentence, tokens)
            })
            .collect();

        DocumentResult::new(text, sentences)
    }

    fn classified_tokens(&self, text: &str) -> Vec<Token> {
        self.segment(text)
            .into_iter()
            .enumerate()
            .map(|(position, (start, end))| {
                let word = &text[start..end];
                Token::with_offsets(word, self.classify_token(word), position, start, end)
            })
            .collect()
    }

    /// Byte spans of the non-whitespace tokens in `text`.
    fn segment(&self, text: &str) -> Vec<(usize, usize)> {
        self.segmenter
            .captures_iter(text)
            .filter(|caps| !is_whitespace_capture(caps))
            .filter_map(|caps| caps.get(0))
            .filter(|mat| !mat.is_empty())
            .map(|mat| (mat.start(), mat.end()))
            .collect()
    }
}

impl Default for GujaratiTokenizer {
    fn default() -> Self {
        Self::new().expect("Default rule table should be valid")
    }
}

impl Tokenizer for GujaratiTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        Box::new(self.classified_tokens(text).into_iter())
    }

    fn name(&self) -> &'static str {
        "gujarati"
    }
}

fn is_whitespace_capture(caps: &Captures<'_>) -> bool {
    caps.name(WHITESPACE_GROUP).is_some()
}
