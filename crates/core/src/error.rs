use nftotal_sheet::SheetError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced at the report-loading boundary.
///
/// Shape problems inside a report never reach this type; they degrade to
/// empty canonical tables during normalization. Only an unreadable source
/// aborts the batch, and it names the offending file.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to read report {}: {}", path.display(), source)]
    Read {
        path: PathBuf,
        #[source]
        source: SheetError,
    },
}

impl ReportError {
    /// The file the failure refers to
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        match self {
            ReportError::Read { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
