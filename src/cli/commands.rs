//! Command implementations for the Lipi CLI.

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::analysis::tokenizer::gujarati::GujaratiTokenizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::{ProcessingConfig, TokenizerConfig};
use crate::corpus::processor::CorpusProcessor;
use crate::corpus::source::JsonlTextSource;
use crate::corpus::stats::compute_corpus_statistics;
use crate::corpus::writer::{CorpusWriter, load_documents};
use crate::error::{LipiError, Result};

/// Execute a CLI command.
pub fn execute_command(args: LipiArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize_text(tokenize_args, &args),
        Command::Classify(classify_args) => classify_tokens(classify_args, &args),
        Command::Process(process_args) => process_corpus(process_args, &args),
        Command::Stats(stats_args) => show_stats(stats_args, &args),
    }
}

fn tokenizer_for(drop_unmatched: bool) -> Result<GujaratiTokenizer> {
    GujaratiTokenizer::with_config(
        TokenizerConfig::default().with_keep_unmatched(!drop_unmatched),
    )
}

/// Tokenize a single text and print its sentences and tokens.
fn tokenize_text(args: &TokenizeArgs, cli_args: &LipiArgs) -> Result<()> {
    let tokenizer = tokenizer_for(args.drop_unmatched)?;
    debug!("Tokenizing {} characters", args.text.chars().count());

    let document = tokenizer.tokenize_paragraph(&args.text);
    output_document(&document, cli_args)
}

/// Classify each token given on the command line.
fn classify_tokens(args: &ClassifyArgs, cli_args: &LipiArgs) -> Result<()> {
    let tokenizer = GujaratiTokenizer::new()?;

    let results: Vec<Classification> = args
        .tokens
        .iter()
        .map(|token| Classification {
            token: token.clone(),
            category: tokenizer.classify_token(token),
        })
        .collect();

    output_classifications(&results, cli_args)
}

/// Process a JSONL corpus, save the results and print statistics.
fn process_corpus(args: &ProcessArgs, cli_args: &LipiArgs) -> Result<()> {
    if !args.all && args.max_examples == 0 {
        return Err(LipiError::invalid_argument(
            "--max-examples must be positive (use --all to read everything)",
        ));
    }

    info!("Reading records from: {}", args.input.display());

    let config = ProcessingConfig::default()
        .with_max_examples(if args.all { None } else { Some(args.max_examples) })
        .with_text_field(args.text_field.as_str())
        .with_thread_pool_size(args.threads)
        .with_progress_interval(args.progress_interval);

    let source = JsonlTextSource::from_config(&args.input, &config)?;
    let processor = CorpusProcessor::new(tokenizer_for(args.drop_unmatched)?, config);

    let start_time = Instant::now();
    let documents = if args.parallel {
        processor.process_parallel(source)?
    } else {
        processor.process(source)?
    };
    let duration = start_time.elapsed();

    let (documents_file, statistics_file) = if args.no_save {
        (None, None)
    } else {
        info!("Saving tokenized data...");
        let saved = CorpusWriter::new(&args.output).save(&documents)?;
        (
            Some(saved.documents.display().to_string()),
            Some(saved.statistics.display().to_string()),
        )
    };

    let summary = ProcessingSummary {
        documents: documents.len(),
        duration_ms: elapsed_millis(duration),
        documents_file,
        statistics_file,
        statistics: compute_corpus_statistics(&documents),
    };

    output_summary(&summary, cli_args)
}

/// Recompute statistics from a saved results file.
fn show_stats(args: &StatsArgs, cli_args: &LipiArgs) -> Result<()> {
    info!("Loading results from: {}", args.results.display());

    let documents = load_documents(&args.results)?;
    let statistics = compute_corpus_statistics(&documents);

    output_statistics(&statistics, cli_args)
}

/// Milliseconds in `duration`, saturating at `u64::MAX`.
fn elapsed_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
