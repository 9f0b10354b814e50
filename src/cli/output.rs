//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::analysis::token::TokenCategory;
use crate::cli::args::{LipiArgs, OutputFormat};
use crate::corpus::stats::CorpusStatistics;
use crate::document::DocumentResult;
use crate::error::Result;

/// Result of classifying a single token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub token: String,
    pub category: TokenCategory,
}

/// Result of processing a corpus.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessingSummary {
    pub documents: usize,
    pub duration_ms: u64,
    pub documents_file: Option<String>,
    pub statistics_file: Option<String>,
    pub statistics: CorpusStatistics,
}

/// Print a tokenized document.
pub fn output_document(document: &DocumentResult, args: &LipiArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(document, args),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!("Sentences:");
                for (i, sentence) in document.sentences.iter().enumerate() {
                    println!("{}. {}", i + 1, sentence.text);
                }
                println!();
                println!("Words:");
            }
            for (word, category) in document.sentences.iter().flat_map(|s| s.classified_words()) {
                println!("'{word}' -> {category}");
            }
            if args.verbosity() > 1 {
                println!();
                println!("Total words: {}", document.total_words);
                println!("Total characters: {}", document.total_characters);
            }
            Ok(())
        }
    }
}

/// Print token classifications.
pub fn output_classifications(results: &[Classification], args: &LipiArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(&results, args),
        OutputFormat::Human => {
            for result in results {
                println!("'{}' -> {}", result.token, result.category);
            }
            Ok(())
        }
    }
}

/// Print corpus statistics.
pub fn output_statistics(statistics: &CorpusStatistics, args: &LipiArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(&statistics.rounded(), args),
        OutputFormat::Human => {
            print_banner("CORPUS STATISTICS");
            print!("{statistics}");
            Ok(())
        }
    }
}

/// Print the outcome of a `process` run.
pub fn output_summary(summary: &ProcessingSummary, args: &LipiArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Json => output_json(summary, args),
        OutputFormat::Human => {
            if args.verbosity() > 0 {
                println!(
                    "Processed {} documents in {} ms",
                    summary.documents, summary.duration_ms
                );
                if let (Some(documents), Some(statistics)) =
                    (&summary.documents_file, &summary.statistics_file)
                {
                    println!("Data saved as:");
                    println!("- {documents} (JSON format)");
                    println!("- {statistics} (Statistics)");
                }
                println!();
            }
            output_statistics(&summary.statistics, args)
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LipiArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

fn print_banner(title: &str) {
    let rule = "=".repeat(50);
    println!("{rule}");
    println!("{title}");
    println!("{rule}");
}
