//! Token types for text analysis.
//!
//! # Core Types
//!
//! - [`Token`] - A single classified token with its text and position
//! - [`TokenCategory`] - The lexical category assigned by classification
//! - [`TokenStream`] - Type alias for boxed iterator of tokens
//!
//! # Examples
//!
//! ```
//! use lipi::analysis::token::{Token, TokenCategory};
//!
//! let token = Token::new("ગુજરાત", TokenCategory::GujaratiWord, 0);
//! assert_eq!(token.text, "ગુજરાત");
//! assert_eq!(token.category.as_str(), "gujarati_word");
//! assert_eq!(token.char_len(), 6);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LipiError;

/// Lexical category of a token.
///
/// Variants are declared in classification precedence order; `Other` is the
/// fallback and is never produced by a rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenCategory {
    /// Email addresses
    Email,
    /// URLs, with or without scheme
    Url,
    /// Numbers with a fractional part, e.g. `3.14`
    DecimalNumber,
    /// Dates such as `25/07/2025` or `2025-07-25`
    Date,
    /// Runs of digits
    Integer,
    /// Latin punctuation and the Indic dandas
    Punctuation,
    /// Runs of characters from the Gujarati block
    GujaratiWord,
    /// Runs of ASCII letters
    EnglishWord,
    /// Anything no rule recognizes
    Other,
}

impl TokenCategory {
    /// All categories, in precedence order.
    pub const ALL: [TokenCategory; 9] = [
        TokenCategory::Email,
        TokenCategory::Url,
        TokenCategory::DecimalNumber,
        TokenCategory::Date,
        TokenCategory::Integer,
        TokenCategory::Punctuation,
        TokenCategory::GujaratiWord,
        TokenCategory::EnglishWord,
        TokenCategory::Other,
    ];

    /// The snake_case label used in reports and serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::Email => "email",
            TokenCategory::Url => "url",
            TokenCategory::DecimalNumber => "decimal_number",
            TokenCategory::Date => "date",
            TokenCategory::Integer => "integer",
            TokenCategory::Punctuation => "punctuation",
            TokenCategory::GujaratiWord => "gujarati_word",
            TokenCategory::EnglishWord => "english_word",
            TokenCategory::Other => "other",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenCategory {
    type Err = LipiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenCategory::ALL
            .iter()
            .copied()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| LipiError::invalid_argument(format!("unknown token category: {s}")))
    }
}

/// A token produced by segmenting a sentence.
///
/// Tokens are never mutated after segmentation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The category assigned by classification
    pub category: TokenCategory,

    /// The position of the token within its sentence (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the sentence text
    #[serde(default)]
    pub start_offset: usize,

    /// The byte offset where this token ends in the sentence text
    #[serde(default)]
    pub end_offset: usize,
}

impl Token {
    /// Create a new token with the given text, category and position.
    pub fn new<S: Into<String>>(text: S, category: TokenCategory, position: usize) -> Self {
        Token {
            text: text.into(),
            category,
            position,
            start_offset: 0,
            end_offset: 0,
        }
    }

    /// Create a new token with text, category, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        category: TokenCategory,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            category,
            position,
            start_offset,
            end_offset,
        }
    }

    /// Length of the token text in Unicode scalar values.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A token stream represents a sequence of tokens from the analysis pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Token> + Send>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", TokenCategory::EnglishWord, 0);
        assert_eq!(token.text, "hello");
        assert_eq!(token.category, TokenCategory::EnglishWord);
        assert_eq!(token.position, 0);
        assert_eq!(token.start_offset, 0);
        assert_eq!(token.end_offset, 0);
    }

    #[test]
    fn test_token_with_offsets() {
        let token = Token::with_offsets("world", TokenCategory::EnglishWord, 1, 6, 11);
        assert_eq!(token.position, 1);
        assert_eq!(token.start_offset, 6);
        assert_eq!(token.end_offset, 11);
    }

    #[test]
    fn test_char_len_counts_code_points() {
        // "છે" is two code points but six bytes.
        let token = Token::new("છે", TokenCategory::GujaratiWord, 0);
        assert_eq!(token.char_len(), 2);
        assert_eq!(token.text.len(), 6);
    }

    #[test]
    fn test_category_labels_round_trip() {
        for category in TokenCategory::ALL {
            let parsed: TokenCategory = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
        assert!("noun".parse::<TokenCategory>().is_err());
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&TokenCategory::DecimalNumber).unwrap();
        assert_eq!(json, "\"decimal_number\"");
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", TokenCategory::EnglishWord, 0);
        assert_eq!(format!("{token}"), "hello");
    }
}
