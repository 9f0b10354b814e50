//! Tokenizer implementations for text analysis.
//!
//! # Available Tokenizers
//!
//! - [`gujarati::GujaratiTokenizer`] - Rule-based tokenizer for Gujarati and mixed-script text
//!
//! # Examples
//!
//! ```
//! use lipi::analysis::token::TokenCategory;
//! use lipi::analysis::tokenizer::Tokenizer;
//! use lipi::analysis::tokenizer::gujarati::GujaratiTokenizer;
//!
//! let tokenizer = GujaratiTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("મારું ઇમેઇલ test@example.com છે").collect();
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[2].category, TokenCategory::Email);
//! ```

use crate::analysis::token::TokenStream;

/// Trait for tokenizers that convert text into classified tokens.
///
/// The trait requires `Send + Sync` so a single tokenizer can be shared by
/// parallel corpus processing.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of classified tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod gujarati;

pub use gujarati::GujaratiTokenizer;
