use nftotal_sheet::{CellValue, Sheet};

/// Label of the monetary amount column in `RelatorioNotas` exports.
pub const AMOUNT_COLUMN: &str = "Valor N.F.";
/// Label of the invoice status column.
pub const STATUS_COLUMN: &str = "Situacao";
/// Label of the operation-direction column.
pub const OPERATION_COLUMN: &str = "Operacao";

const REQUIRED_COLUMNS: [&str; 3] = [AMOUNT_COLUMN, STATUS_COLUMN, OPERATION_COLUMN];

/// One normalized invoice/receipt line.
///
/// `amount` is `None` when the source cell could not be coerced to a
/// number; such lines are excluded from sums rather than counted as zero.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceLine {
    pub amount: Option<f64>,
    /// Trimmed and lower-cased (e.g. "cancelamento").
    pub status: String,
    /// Trimmed and upper-cased, expected "SAIDA" or "ENTRADA".
    pub operation: String,
}

/// The normalized form of one report: exactly the three canonical columns,
/// stored row-wise. Zero rows when derived from empty or malformed input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CanonicalTable {
    lines: Vec<InvoiceLine>,
}

impl CanonicalTable {
    /// Create an empty table (three columns, zero rows)
    #[must_use]
    pub fn empty() -> Self {
        CanonicalTable::default()
    }

    /// Create a table from already-normalized lines
    #[must_use]
    pub fn from_lines(lines: Vec<InvoiceLine>) -> Self {
        CanonicalTable { lines }
    }

    /// Get the number of lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the table has no lines
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the normalized lines
    #[must_use]
    pub fn lines(&self) -> &[InvoiceLine] {
        &self.lines
    }
}

/// Normalize a raw report table into the canonical three-column form.
///
/// Total function: malformed shapes, wrong columns, and non-numeric cells
/// all degrade to an empty table or `None` amounts, never to an error.
/// The aggregator depends on this always producing a computable value.
#[must_use]
pub fn normalize(raw: &Sheet) -> CanonicalTable {
    if raw.is_empty() || raw.col_count() == 0 {
        return CanonicalTable::empty();
    }

    // Promote the first row to column labels, as the bookkeeping exports
    // ship headers as a data row. If promotion fails, fall back to labels
    // the caller may have assigned already.
    let mut sheet = raw.clone();
    match sheet.name_columns_by_row(0) {
        Ok(()) => {
            // Header consumed; remaining rows re-index from zero.
            let _ = sheet.drop_row(0);
        }
        Err(_) => {
            if !sheet.has_columns(&REQUIRED_COLUMNS) {
                return CanonicalTable::empty();
            }
        }
    }

    convert_columns(&sheet).unwrap_or_else(|| {
        tracing::debug!(
            sheet = sheet.name(),
            "required columns missing after header promotion, dropping report"
        );
        CanonicalTable::empty()
    })
}

/// Pull the three canonical columns out of a labeled sheet.
///
/// Returns `None` when any of the expected columns does not exist.
fn convert_columns(sheet: &Sheet) -> Option<CanonicalTable> {
    let amounts = sheet.column_by_name(AMOUNT_COLUMN).ok()?;
    let statuses = sheet.column_by_name(STATUS_COLUMN).ok()?;
    let operations = sheet.column_by_name(OPERATION_COLUMN).ok()?;

    let lines = amounts
        .iter()
        .zip(statuses.iter())
        .zip(operations.iter())
        .map(|((amount, status), operation)| InvoiceLine {
            amount: coerce_amount(amount),
            status: status.as_str().trim().to_lowercase(),
            operation: operation.as_str().trim().to_uppercase(),
        })
        .collect();

    Some(CanonicalTable::from_lines(lines))
}

/// Coerce an amount cell to a number; unparseable cells become "no value".
fn coerce_amount(cell: &CellValue) -> Option<f64> {
    cell.as_float()
}
