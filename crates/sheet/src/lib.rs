//! Tabular container for nftotal
//!
//! Provides a small sheet API over untyped tabular data, with loading from
//! `.xlsx`/`.xls` workbooks and saving to `.xlsx`. Cells are runtime-typed
//! (`CellValue`), which matches the unreliable bookkeeping exports this
//! workspace consumes: headers may or may not be present, and amount cells
//! may arrive as numbers, text, or garbage.
//!
//! # Examples
//!
//! ```
//! use nftotal_sheet::{CellValue, Sheet};
//!
//! let mut sheet = Sheet::from_data(vec![
//!     vec!["Valor N.F.", "Situacao", "Operacao"],
//!     vec!["150.0", "Emitida", "SAIDA"],
//! ]);
//!
//! sheet.name_columns_by_row(0).unwrap();
//! let status = sheet.column_by_name("Situacao").unwrap();
//! assert_eq!(status[1], CellValue::from("Emitida"));
//! ```

mod cell;
mod error;
mod sheet;
mod xlsx;

/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export sheet type.
pub use sheet::Sheet;
