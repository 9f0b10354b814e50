//! Integration tests for the tokenizer engine.

use lipi::analysis::token::TokenCategory;
use lipi::analysis::tokenizer::Tokenizer;
use lipi::analysis::tokenizer::gujarati::GujaratiTokenizer;
use lipi::config::TokenizerConfig;
use lipi::error::Result;

const SAMPLE: &str =
    "આજે હું દુકાને ગયો. મેં ખાણાની વસ્તુઓ ખરીદી। મારું ઇમેઇલ test@example.com છે. આજની તારીખ 25/07/2025 છે.";

#[test]
fn test_sample_sentences() -> Result<()> {
    let tokenizer = GujaratiTokenizer::new()?;
    let sentences = tokenizer.sentence_tokenize(SAMPLE);

    assert_eq!(
        sentences,
        vec![
            "આજે હું દુકાને ગયો",
            "મેં ખાણાની વસ્તુઓ ખરીદી",
            "મારું ઇમેઇલ test@example.com છે",
            "આજની તારીખ 25/07/2025 છે",
        ]
    );

    Ok(())
}

#[test]
fn test_whole_sample_word_tokenize() -> Result<()> {
    let tokenizer = GujaratiTokenizer::new()?;
    let classified: Vec<(String, TokenCategory)> = tokenizer
        .word_tokenize(SAMPLE)
        .into_iter()
        .map(|word| {
            let category = tokenizer.classify_token(&word);
            (word, category)
        })
        .collect();

    let find = |text: &str| {
        classified
            .iter()
            .find(|(word, _)| word == text)
            .map(|(_, category)| *category)
    };

    assert_eq!(find("test@example.com"), Some(TokenCategory::Email));
    assert_eq!(find("25/07/2025"), Some(TokenCategory::Date));
    assert_eq!(find("।"), Some(TokenCategory::Punctuation));
    assert_eq!(find("."), Some(TokenCategory::Punctuation));
    assert_eq!(find("દુકાને"), Some(TokenCategory::GujaratiWord));

    Ok(())
}

#[test]
fn test_classification_is_total() -> Result<()> {
    let tokenizer = GujaratiTokenizer::new()?;
    let inputs = [
        "", " ", "\u{0}", "😀", "ñ", "१२३", "૧૨૩", "a@b", "http:", "www.", "-", "–", "..", "12/13",
    ];

    for input in inputs {
        let category = tokenizer.classify_token(input);
        assert!(TokenCategory::ALL.contains(&category));
        assert_eq!(tokenizer.classify_token(input), category);
    }

    Ok(())
}

#[test]
fn test_precedence_examples() -> Result<()> {
    let tokenizer = GujaratiTokenizer::new()?;

    assert_eq!(tokenizer.classify_token("3.14"), TokenCategory::DecimalNumber);
    assert_eq!(tokenizer.classify_token("25/07/2025"), TokenCategory::Date);
    assert_eq!(tokenizer.classify_token("2025"), TokenCategory::Integer);
    assert_eq!(tokenizer.classify_token("123abc"), TokenCategory::Integer);
    assert_eq!(tokenizer.classify_token("user@mail.co.in"), TokenCategory::Email);

    Ok(())
}

#[test]
fn test_word_count_includes_punctuation() -> Result<()> {
    let tokenizer = GujaratiTokenizer::new()?;
    let doc = tokenizer.tokenize_paragraph("હા, ચોક્કસ; ઠીક છે");

    assert_eq!(doc.sentences.len(), 1);
    assert_eq!(doc.sentences[0].word_count, 6);
    assert_eq!(doc.total_words, 6);

    Ok(())
}

#[test]
fn test_total_characters_are_code_points() -> Result<()> {
    let tokenizer = GujaratiTokenizer::new()?;
    let text = "ખરીદી।";
    let doc = tokenizer.tokenize_paragraph(text);

    assert_eq!(doc.total_characters, 6);
    assert_eq!(doc.original_text, text);

    Ok(())
}

#[test]
fn test_blank_paragraph() -> Result<()> {
    let tokenizer = GujaratiTokenizer::new()?;
    let doc = tokenizer.tokenize_paragraph("   ");

    assert!(doc.sentences.is_empty());
    assert_eq!(doc.total_words, 0);
    assert_eq!(doc.total_characters, 3);

    Ok(())
}

#[test]
fn test_strict_config_drops_unknown_script() -> Result<()> {
    let strict = GujaratiTokenizer::with_config(TokenizerConfig::default().with_keep_unmatched(false))?;
    let lenient = GujaratiTokenizer::new()?;

    assert_eq!(strict.word_tokenize("ગુજરાત ਪੰਜਾਬ"), vec!["ગુજરાત"]);
    assert_eq!(lenient.word_tokenize("ગુજરાત ਪੰਜਾਬ").len(), 1 + "ਪੰਜਾਬ".chars().count());

    Ok(())
}

#[test]
fn test_tokenizer_is_shareable() -> Result<()> {
    let tokenizer = GujaratiTokenizer::new()?;

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let tokenizer = tokenizer.clone();
            std::thread::spawn(move || tokenizer.tokenize(&format!("વાક્ય {i}")).count())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }

    Ok(())
}
