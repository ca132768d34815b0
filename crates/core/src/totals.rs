use crate::canonical::CanonicalTable;
use serde::Serialize;

/// Status marking a voided invoice, compared after normalization
/// lower-cases the status column. Cancelled lines never reach any sum.
pub const CANCELLED_STATUS: &str = "cancelamento";

/// Outbound operation direction.
pub const OUTBOUND: &str = "SAIDA";
/// Inbound operation direction (also covers returns/devolutions).
pub const INBOUND: &str = "ENTRADA";

/// The two aggregate figures produced from one report batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Totals {
    pub total_issued: f64,
    pub total_received: f64,
}

/// Compute the issued/received totals from up to three canonical tables.
///
/// An absent `issued_receipts` table is treated as empty. The caller is
/// responsible for ensuring at least one of `issued`/`received` was
/// actually supplied at the boundary; two empty tables simply yield
/// `(0.0, 0.0)`.
///
/// Returns are folded across categories: ENTRADA lines on the issued
/// report feed `total_received`, and ENTRADA lines on the received report
/// feed `total_issued`.
#[must_use]
pub fn compute_totals(
    issued: &CanonicalTable,
    received: &CanonicalTable,
    issued_receipts: Option<&CanonicalTable>,
) -> Totals {
    let empty = CanonicalTable::empty();
    let receipts = issued_receipts.unwrap_or(&empty);

    let emitidas_saida = sum_operation(issued, OUTBOUND);
    let emitidas_entrada_devolucao = sum_operation(issued, INBOUND);

    let nfc_saida = sum_operation(receipts, OUTBOUND);
    let nfc_entrada_devolucao = sum_operation(receipts, INBOUND);

    // Domain language calls this bucket "entrada", but it is computed
    // from the SAIDA lines of the received report.
    let recebidas_saida = sum_operation(received, OUTBOUND);
    let recebidas_entrada_devolucao = sum_operation(received, INBOUND);

    Totals {
        total_issued: emitidas_saida
            + recebidas_entrada_devolucao
            + nfc_saida
            + nfc_entrada_devolucao,
        total_received: recebidas_saida + emitidas_entrada_devolucao,
    }
}

/// Sum the amounts of non-cancelled lines with the given operation.
///
/// Lines without a coercible amount contribute nothing.
fn sum_operation(table: &CanonicalTable, operation: &str) -> f64 {
    table
        .lines()
        .iter()
        .filter(|line| line.status != CANCELLED_STATUS)
        .filter(|line| line.operation == operation)
        .filter_map(|line| line.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::InvoiceLine;

    fn line(amount: Option<f64>, status: &str, operation: &str) -> InvoiceLine {
        InvoiceLine {
            amount,
            status: status.to_string(),
            operation: operation.to_string(),
        }
    }

    #[test]
    fn test_all_empty_yields_zero() {
        let empty = CanonicalTable::empty();
        let totals = compute_totals(&empty, &empty, None);
        assert_eq!(totals.total_issued, 0.0);
        assert_eq!(totals.total_received, 0.0);
    }

    #[test]
    fn test_single_issued_outbound() {
        let issued =
            CanonicalTable::from_lines(vec![line(Some(100.0), "emitida", OUTBOUND)]);
        let totals = compute_totals(&issued, &CanonicalTable::empty(), None);
        assert_eq!(totals.total_issued, 100.0);
        assert_eq!(totals.total_received, 0.0);
    }

    #[test]
    fn test_cross_category_returns() {
        // Issued ENTRADA and received SAIDA both land on the received
        // total; neither touches the issued total.
        let issued = CanonicalTable::from_lines(vec![line(Some(50.0), "ativa", INBOUND)]);
        let received = CanonicalTable::from_lines(vec![line(Some(30.0), "ativa", OUTBOUND)]);

        let totals = compute_totals(&issued, &received, None);
        assert_eq!(totals.total_issued, 0.0);
        assert_eq!(totals.total_received, 80.0);
    }

    #[test]
    fn test_received_inbound_feeds_issued_total() {
        let received = CanonicalTable::from_lines(vec![line(Some(25.0), "ativa", INBOUND)]);
        let totals = compute_totals(&CanonicalTable::empty(), &received, None);
        assert_eq!(totals.total_issued, 25.0);
        assert_eq!(totals.total_received, 0.0);
    }

    #[test]
    fn test_receipts_contribute_to_issued() {
        let receipts = CanonicalTable::from_lines(vec![
            line(Some(10.0), "emitida", OUTBOUND),
            line(Some(5.0), "emitida", INBOUND),
        ]);
        let totals =
            compute_totals(&CanonicalTable::empty(), &CanonicalTable::empty(), Some(&receipts));
        // Both NFC buckets land on the issued side.
        assert_eq!(totals.total_issued, 15.0);
        assert_eq!(totals.total_received, 0.0);
    }

    #[test]
    fn test_cancelled_lines_excluded() {
        let issued = CanonicalTable::from_lines(vec![
            line(Some(100.0), CANCELLED_STATUS, OUTBOUND),
            line(Some(40.0), "emitida", OUTBOUND),
        ]);
        let totals = compute_totals(&issued, &CanonicalTable::empty(), None);
        assert_eq!(totals.total_issued, 40.0);
    }

    #[test]
    fn test_missing_amounts_sum_to_zero() {
        let issued = CanonicalTable::from_lines(vec![
            line(None, "emitida", OUTBOUND),
            line(None, "emitida", OUTBOUND),
        ]);
        let totals = compute_totals(&issued, &CanonicalTable::empty(), None);
        assert_eq!(totals.total_issued, 0.0);
    }

    #[test]
    fn test_unknown_operation_ignored() {
        let issued =
            CanonicalTable::from_lines(vec![line(Some(70.0), "emitida", "TRANSFERENCIA")]);
        let totals = compute_totals(&issued, &CanonicalTable::empty(), None);
        assert_eq!(totals.total_issued, 0.0);
        assert_eq!(totals.total_received, 0.0);
    }
}
