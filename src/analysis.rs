//! Text analysis module for Lipi.
//!
//! This module provides the tokenizer engine: the ordered rule table,
//! sentence segmentation, token segmentation and token classification.

pub mod rule;
pub mod sentence;
pub mod token;
pub mod tokenizer;
