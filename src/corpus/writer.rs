//! Persistence of processed documents and the statistics report.
//!
//! For a base path `out/gujarati_tokenized` the writer produces:
//!
//! - `out/gujarati_tokenized.json` - every [`DocumentResult`], pretty-printed,
//!   with non-ASCII text written as-is
//! - `out/gujarati_tokenized_stats.txt` - one `label: value` line per metric

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::corpus::stats::{CorpusStatistics, compute_corpus_statistics};
use crate::document::DocumentResult;
use crate::error::{LipiError, Result};

/// Paths written by [`CorpusWriter::save`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFiles {
    pub documents: PathBuf,
    pub statistics: PathBuf,
}

/// Writes tokenization results next to a base path.
#[derive(Debug, Clone)]
pub struct CorpusWriter {
    base: PathBuf,
}

impl CorpusWriter {
    /// Create a writer for the given base path (without extension).
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        CorpusWriter { base: base.into() }
    }

    /// Path of the documents file.
    pub fn documents_path(&self) -> PathBuf {
        self.with_suffix(".json")
    }

    /// Path of the statistics report.
    pub fn statistics_path(&self) -> PathBuf {
        self.with_suffix("_stats.txt")
    }

    /// Write the documents and their statistics.
    pub fn save(&self, documents: &[DocumentResult]) -> Result<SavedFiles> {
        let statistics = compute_corpus_statistics(documents);
        let saved = SavedFiles {
            documents: self.write_documents(documents)?,
            statistics: self.write_statistics(&statistics)?,
        };

        info!("Data saved as:");
        info!("- {} (JSON format)", saved.documents.display());
        info!("- {} (Statistics)", saved.statistics.display());
        Ok(saved)
    }

    /// Write the documents as a pretty-printed JSON array.
    pub fn write_documents(&self, documents: &[DocumentResult]) -> Result<PathBuf> {
        let path = self.documents_path();
        let mut writer = BufWriter::new(self.create(&path)?);

        serde_json::to_writer_pretty(&mut writer, documents).map_err(|e| {
            LipiError::serialization(format!("Failed to write {}: {e}", path.display()))
        })?;
        writer.flush()?;

        Ok(path)
    }

    /// Write the statistics report, one metric per line.
    pub fn write_statistics(&self, statistics: &CorpusStatistics) -> Result<PathBuf> {
        let path = self.statistics_path();
        let mut writer = BufWriter::new(self.create(&path)?);

        write!(writer, "{statistics}")?;
        writer.flush()?;

        Ok(path)
    }

    fn create(&self, path: &Path) -> Result<File> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(File::create(path)?)
    }

    fn with_suffix(&self, suffix: &str) -> PathBuf {
        let mut name = self.base.as_os_str().to_owned();
        name.push(suffix);
        PathBuf::from(name)
    }
}

/// Read documents previously written by [`CorpusWriter::write_documents`].
pub fn load_documents<P: AsRef<Path>>(path: P) -> Result<Vec<DocumentResult>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        LipiError::source_unavailable(format!("Failed to open {}: {e}", path.display()))
    })?;

    serde_json::from_reader(BufReader::new(file)).map_err(|e| {
        LipiError::serialization(format!("Failed to read {}: {e}", path.display()))
    })
}
