//! Conversion reports
//!
//! Every document and every item produces an outcome. Failures are kept in
//! the report next to the successes instead of aborting the batch.

use std::path::{Path, PathBuf};

use crate::error::ConversionError;

/// Kind of exported document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Collection export
    Collection,
    /// Environment export
    Environment,
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Collection => write!(f, "collection"),
            Self::Environment => write!(f, "environment"),
        }
    }
}

/// An item that could not be converted.
#[derive(Debug)]
pub struct ItemFailure {
    /// Display path of the item (e.g., "folder/sub-folder/request")
    pub path: String,
    /// What went wrong
    pub error: ConversionError,
}

impl ItemFailure {
    /// Create a new failure entry
    pub fn new(path: impl Into<String>, error: ConversionError) -> Self {
        Self {
            path: path.into(),
            error,
        }
    }
}

impl std::fmt::Display for ItemFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.error)
    }
}

/// Result of converting one document.
#[derive(Debug, Default)]
pub struct ConversionSummary {
    /// Output directory (collections) or file (environments)
    pub output: PathBuf,
    /// Number of `.http` files written
    pub requests_written: usize,
    /// Number of folder directories created
    pub folders_created: usize,
    /// Number of `.env` lines written
    pub variables_written: usize,
    /// Items that were skipped
    pub failures: Vec<ItemFailure>,
}

impl ConversionSummary {
    /// Creates an empty summary for the given output path.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    /// Returns true if no item was skipped.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Outcome of one input file.
#[derive(Debug)]
pub struct DocumentOutcome {
    /// Kind of document
    pub kind: DocumentKind,
    /// Input file
    pub source: PathBuf,
    /// Summary, or the error that skipped the whole document
    pub result: Result<ConversionSummary, ConversionError>,
}

impl DocumentOutcome {
    /// File name of the input, for messages.
    #[must_use]
    pub fn file_name(&self) -> String {
        file_name(&self.source)
    }
}

pub(crate) fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Outcomes of a batch, in processing order.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// One entry per input file
    pub outcomes: Vec<DocumentOutcome>,
}

impl BatchReport {
    /// Aggregate statistics for the batch.
    #[must_use]
    pub fn stats(&self) -> BatchStats {
        BatchStats::from_outcomes(&self.outcomes)
    }

    /// Outcomes of one document kind.
    pub fn of_kind(&self, kind: DocumentKind) -> impl Iterator<Item = &DocumentOutcome> {
        self.outcomes.iter().filter(move |o| o.kind == kind)
    }
}

/// Aggregate statistics from outcomes
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchStats {
    /// Documents converted without item failures
    pub converted: usize,
    /// Documents converted with at least one skipped item
    pub partial: usize,
    /// Documents skipped entirely
    pub skipped: usize,
    /// Total `.http` files written
    pub requests_written: usize,
    /// Total folder directories created
    pub folders_created: usize,
    /// Total `.env` lines written
    pub variables_written: usize,
}

impl BatchStats {
    /// Calculate stats from a list of outcomes
    #[must_use]
    pub fn from_outcomes(outcomes: &[DocumentOutcome]) -> Self {
        let mut stats = Self::default();
        for outcome in outcomes {
            match &outcome.result {
                Ok(summary) => {
                    if summary.is_complete() {
                        stats.converted += 1;
                    } else {
                        stats.partial += 1;
                    }
                    stats.requests_written += summary.requests_written;
                    stats.folders_created += summary.folders_created;
                    stats.variables_written += summary.variables_written;
                }
                Err(_) => stats.skipped += 1,
            }
        }
        stats
    }

    /// Total number of documents seen
    #[must_use]
    pub const fn total(&self) -> usize {
        self.converted + self.partial + self.skipped
    }

    /// Check if any document or item failed
    #[must_use]
    pub const fn has_failures(&self) -> bool {
        self.partial > 0 || self.skipped > 0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::ports::FileSystemError;

    fn write_error(path: &str) -> ConversionError {
        ConversionError::Write {
            path: PathBuf::from(path),
            source: FileSystemError::PermissionDenied(PathBuf::from(path)),
        }
    }

    #[test]
    fn test_item_failure_display() {
        let failure = ItemFailure::new("Auth/Login", write_error("/out/Auth/Login.http"));
        assert_eq!(
            failure.to_string(),
            "Auth/Login: failed to write /out/Auth/Login.http: Permission denied: /out/Auth/Login.http"
        );
    }

    #[test]
    fn test_batch_stats() {
        let mut partial = ConversionSummary::new("/out/b");
        partial.requests_written = 2;
        partial.failures.push(ItemFailure::new("x", write_error("/out/b/x.http")));

        let complete = ConversionSummary {
            requests_written: 3,
            folders_created: 1,
            ..ConversionSummary::new("/out/a")
        };

        let env = ConversionSummary {
            variables_written: 4,
            ..ConversionSummary::new("/env/dev.env")
        };

        let outcomes = vec![
            DocumentOutcome {
                kind: DocumentKind::Collection,
                source: PathBuf::from("/in/a.json"),
                result: Ok(complete),
            },
            DocumentOutcome {
                kind: DocumentKind::Collection,
                source: PathBuf::from("/in/b.json"),
                result: Ok(partial),
            },
            DocumentOutcome {
                kind: DocumentKind::Collection,
                source: PathBuf::from("/in/c.json"),
                result: Err(ConversionError::Decode {
                    path: PathBuf::from("/in/c.json"),
                    message: "EOF".to_string(),
                }),
            },
            DocumentOutcome {
                kind: DocumentKind::Environment,
                source: PathBuf::from("/env/dev.json"),
                result: Ok(env),
            },
        ];

        let stats = BatchStats::from_outcomes(&outcomes);
        assert_eq!(
            stats,
            BatchStats {
                converted: 2,
                partial: 1,
                skipped: 1,
                requests_written: 5,
                folders_created: 1,
                variables_written: 4,
            }
        );
        assert_eq!(stats.total(), 4);
        assert!(stats.has_failures());

        let report = BatchReport { outcomes };
        assert_eq!(report.of_kind(DocumentKind::Environment).count(), 1);
        assert_eq!(report.outcomes[2].file_name(), "c.json");
    }

    #[test]
    fn test_empty_batch_has_no_failures() {
        let stats = BatchReport::default().stats();
        assert_eq!(stats.total(), 0);
        assert!(!stats.has_failures());
    }
}
