//! Integration tests for corpus processing, statistics and persistence.

use std::io::Write;

use lipi::analysis::token::{Token, TokenCategory};
use lipi::analysis::tokenizer::gujarati::GujaratiTokenizer;
use lipi::config::ProcessingConfig;
use lipi::corpus::*;
use lipi::document::{DocumentResult, Sentence};
use lipi::error::{LipiError, Result};
use tempfile::{NamedTempFile, TempDir};

fn sentence_of(len: usize) -> Sentence {
    let tokens = (0..len)
        .map(|i| Token::new(format!("w{i}"), TokenCategory::Other, i))
        .collect();
    Sentence::new("s", tokens)
}

#[test]
fn test_statistics_over_hand_built_corpus() -> Result<()> {
    let corpus = vec![
        DocumentResult::new("first", vec![sentence_of(3), sentence_of(5)]),
        DocumentResult::new("second", vec![sentence_of(4)]),
    ];

    let stats = compute_corpus_statistics(&corpus);

    assert_eq!(stats.total_sentences, 3);
    assert_eq!(stats.total_words, 12);
    assert_eq!(stats.average_sentence_length, 4.0);
    assert_eq!(stats.total_characters, "first".len() + "second".len());
    // w0..w4 are the only distinct texts
    assert_eq!(stats.unique_words, 5);
    assert_eq!(stats.type_token_ratio, 5.0 / 12.0);
    assert_eq!(stats.average_word_length, 2.0);

    Ok(())
}

#[test]
fn test_empty_corpus_statistics() -> Result<()> {
    let stats = compute_corpus_statistics(&[]);

    assert_eq!(stats.total_sentences, 0);
    assert_eq!(stats.total_words, 0);
    assert_eq!(stats.average_sentence_length, 0.0);
    assert_eq!(stats.average_word_length, 0.0);
    assert_eq!(stats.type_token_ratio, 0.0);
    assert_eq!(stats.unique_words, 0);

    Ok(())
}

#[test]
fn test_jsonl_pipeline() -> Result<()> {
    let mut input = NamedTempFile::new()?;
    writeln!(input, r#"{{"text": "આજે હું દુકાને ગયો. મેં ખાણાની વસ્તુઓ ખરીદી।"}}"#)?;
    writeln!(input, r#"{{"text": "   "}}"#)?;
    writeln!(input, r#"{{"id": 7}}"#)?;
    writeln!(input, r#"{{"text": "મારું ઇમેઇલ test@example.com છે."}}"#)?;
    input.flush()?;

    let tokenizer = GujaratiTokenizer::new()?;
    let source = JsonlTextSource::open(input.path(), "text")?;
    let documents = process_dataset(&tokenizer, source, None)?;

    assert_eq!(documents.len(), 2);
    assert_eq!(documents[1].count_category(TokenCategory::Email), 1);

    let stats = compute_corpus_statistics(&documents);
    assert_eq!(stats.total_sentences, 3);
    assert_eq!(stats.total_words, 12);
    assert_eq!(stats.average_sentence_length, 4.0);

    let dir = TempDir::new()?;
    let saved = CorpusWriter::new(dir.path().join("gujarati_tokenized")).save(&documents)?;
    let reloaded = load_documents(&saved.documents)?;
    assert_eq!(compute_corpus_statistics(&reloaded), stats);

    Ok(())
}

#[test]
fn test_processing_limit_and_parallel() -> Result<()> {
    let texts: Vec<String> = (0..20).map(|i| format!("વાક્ય નંબર {i}.")).collect();
    let config = ProcessingConfig::default()
        .with_max_examples(Some(10))
        .with_thread_pool_size(Some(2));
    let processor = CorpusProcessor::new(GujaratiTokenizer::new()?, config);

    let documents = processor.process_parallel(records_from_texts(texts))?;

    assert_eq!(documents.len(), 10);
    assert_eq!(documents[9].original_text, "વાક્ય નંબર 9.");
    assert_eq!(
        compute_corpus_statistics_parallel(&documents),
        compute_corpus_statistics(&documents)
    );

    Ok(())
}

#[test]
fn test_unavailable_source() {
    let result = JsonlTextSource::open("/nonexistent/corpus.jsonl", "text");
    assert!(matches!(result, Err(LipiError::Source(_))));
}
