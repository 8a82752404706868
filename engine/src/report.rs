//! Build report types: processed records, skipped records, and the export summary.

use std::path::PathBuf;

use crate::serializer::OutputFormat;

/// A record file skipped because it could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// The file path.
    pub path: PathBuf,
    /// The decoder or I/O message.
    pub message: String,
}

/// Outcome of a successful build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Class name of the model that ran.
    pub model: String,
    /// Records that went through `create_subject` and every step.
    pub records_processed: usize,
    /// Records skipped because they failed to decode, in walk order.
    pub skipped: Vec<SkippedRecord>,
    /// Triples added by schema initialization.
    pub schema_triples: usize,
    /// Distinct triples in the exported graph.
    pub total_triples: usize,
    /// Where the graph was written.
    pub output: PathBuf,
    /// Serialization used for the output.
    pub format: OutputFormat,
}

impl BuildReport {
    /// Returns the number of skipped records.
    #[must_use]
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Returns true if every walked file was decoded and processed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}
