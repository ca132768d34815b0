//! Core logic for nftotal
//!
//! Turns up to three `RelatorioNotas` spreadsheet reports (issued
//! invoices, received invoices, issued consumer receipts) into two
//! aggregate totals, adjusted for returns and cancellations.
//!
//! Two components:
//! - [`normalize`] degrades an untyped report of unknown cleanliness into
//!   a fixed three-column [`CanonicalTable`] — always, without erroring.
//! - [`compute_totals`] combines up to three canonical tables into a
//!   [`Totals`] pair via the fixed cross-category formula.
//!
//! The only fatal errors live at the loading boundary ([`load_report`]):
//! a file that cannot be read or lacks the `RelatorioNotas` worksheet
//! aborts the batch with an error naming the file.
//!
//! # Example
//!
//! ```
//! use nftotal_core::{compute_totals, normalize, CanonicalTable};
//! use nftotal_sheet::Sheet;
//!
//! let issued = normalize(&Sheet::from_data(vec![
//!     vec!["Valor N.F.", "Situacao", "Operacao"],
//!     vec!["100", "Emitida", "Saida"],
//! ]));
//!
//! let totals = compute_totals(&issued, &CanonicalTable::empty(), None);
//! assert_eq!(totals.total_issued, 100.0);
//! ```

mod canonical;
mod currency;
mod error;
mod report;
mod totals;

/// Re-export the normalizer types and column labels.
pub use canonical::{
    normalize, CanonicalTable, InvoiceLine, AMOUNT_COLUMN, OPERATION_COLUMN, STATUS_COLUMN,
};
/// Re-export the currency formatter.
pub use currency::format_brl;
/// Re-export the boundary error types.
pub use error::{ReportError, Result};
/// Re-export the loading boundary.
pub use report::{calculate_totals, load_report, REPORT_SHEET};
/// Re-export the aggregator.
pub use totals::{compute_totals, Totals, CANCELLED_STATUS, INBOUND, OUTBOUND};
