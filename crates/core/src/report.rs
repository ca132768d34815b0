use crate::canonical::{normalize, CanonicalTable};
use crate::error::{ReportError, Result};
use crate::totals::{compute_totals, Totals};
use nftotal_sheet::Sheet;
use std::path::Path;
use tracing::debug;

/// Worksheet every report file is expected to carry.
pub const REPORT_SHEET: &str = "RelatorioNotas";

/// Load the `RelatorioNotas` worksheet from a report file.
///
/// # Errors
///
/// Fatal tier of the error model: a file that cannot be opened or that has
/// no `RelatorioNotas` worksheet aborts the whole batch with an error
/// naming the offending path. No partial totals are produced.
pub fn load_report<P: AsRef<Path>>(path: P) -> Result<Sheet> {
    let path = path.as_ref();
    Sheet::from_workbook_sheet(path, REPORT_SHEET).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load, normalize, and aggregate one batch of report files.
///
/// Every report is optional here: an absent path contributes an empty
/// table, exactly as if an empty `RelatorioNotas` file had been supplied.
/// The shell enforces the "at least one of issued/received" precondition
/// before calling in.
pub fn calculate_totals<P: AsRef<Path>>(
    issued_path: Option<P>,
    received_path: Option<P>,
    receipts_path: Option<P>,
) -> Result<Totals> {
    let issued = load_optional(issued_path.as_ref())?;
    let received = load_optional(received_path.as_ref())?;
    let receipts = match receipts_path {
        Some(path) => Some(load_normalized(path.as_ref())?),
        None => None,
    };

    let totals = compute_totals(&issued, &received, receipts.as_ref());
    debug!(
        total_issued = totals.total_issued,
        total_received = totals.total_received,
        "batch aggregated"
    );
    Ok(totals)
}

fn load_optional<P: AsRef<Path>>(path: Option<&P>) -> Result<CanonicalTable> {
    match path {
        Some(path) => load_normalized(path.as_ref()),
        None => Ok(CanonicalTable::empty()),
    }
}

fn load_normalized(path: &Path) -> Result<CanonicalTable> {
    let raw = load_report(path)?;
    let table = normalize(&raw);
    debug!(
        path = %path.display(),
        raw_rows = raw.row_count(),
        normalized_rows = table.len(),
        "report normalized"
    );
    Ok(table)
}
