//! GST amounts from a subtotal and a transaction classification.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::{EngineError, TaxBreakdown, TransactionType};

/// Statutory GST rate: 18% of the taxable value.
pub const GST_RATE: Decimal = dec!(0.18);

/// Intrastate split: 9% CGST + 9% SGST.
pub const GST_SPLIT_RATE: Decimal = dec!(0.09);

/// Compute the GST breakdown for a subtotal, in the invoice currency.
///
/// - `Intrastate` → CGST = SGST = subtotal × 9%, IGST = 0.
/// - `Interstate` / `Export` → IGST = subtotal × 18%, CGST = SGST = 0.
/// - `Export (LUT)` → zero-rated.
///
/// All arithmetic is decimal at full precision; rounding belongs to the
/// presentation layer. A negative subtotal is a caller contract
/// violation, never clamped.
pub fn compute_tax(subtotal: Decimal, kind: TransactionType) -> Result<TaxBreakdown, EngineError> {
    if subtotal < Decimal::ZERO {
        return Err(EngineError::InvalidInput(format!(
            "subtotal must be non-negative, got {subtotal}"
        )));
    }

    let breakdown = match kind {
        TransactionType::Intrastate => {
            let half = subtotal * GST_SPLIT_RATE;
            TaxBreakdown {
                cgst: half,
                sgst: half,
                igst: Decimal::ZERO,
            }
        }
        TransactionType::Interstate | TransactionType::Export => TaxBreakdown {
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
            igst: subtotal * GST_RATE,
        },
        TransactionType::ExportLut => TaxBreakdown::ZERO,
    };

    Ok(breakdown)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intrastate_splits_evenly() {
        let tax = compute_tax(dec!(10000), TransactionType::Intrastate).unwrap();
        assert_eq!(tax.cgst, dec!(900));
        assert_eq!(tax.sgst, dec!(900));
        assert_eq!(tax.igst, dec!(0));
        assert_eq!(tax.total(), dec!(1800));
    }

    #[test]
    fn interstate_is_single_igst() {
        let tax = compute_tax(dec!(10000), TransactionType::Interstate).unwrap();
        assert_eq!(tax.cgst, dec!(0));
        assert_eq!(tax.sgst, dec!(0));
        assert_eq!(tax.igst, dec!(1800));
    }

    #[test]
    fn export_without_lut_carries_igst() {
        let tax = compute_tax(dec!(5000), TransactionType::Export).unwrap();
        assert_eq!(tax.igst, dec!(900));
        assert_eq!(tax.total(), dec!(900));
    }

    #[test]
    fn export_lut_is_zero_rated() {
        let tax = compute_tax(dec!(5000), TransactionType::ExportLut).unwrap();
        assert_eq!(tax, TaxBreakdown::ZERO);
    }

    #[test]
    fn zero_subtotal_is_valid() {
        let tax = compute_tax(dec!(0), TransactionType::Intrastate).unwrap();
        assert_eq!(tax.total(), dec!(0));
    }

    #[test]
    fn negative_subtotal_rejected() {
        for kind in [
            TransactionType::Intrastate,
            TransactionType::Interstate,
            TransactionType::Export,
            TransactionType::ExportLut,
        ] {
            assert!(matches!(
                compute_tax(dec!(-1), kind),
                Err(EngineError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn full_precision_no_mid_calculation_rounding() {
        // 33.335 * 0.09 = 3.00015 — the trailing digit must survive
        let tax = compute_tax(dec!(33.335), TransactionType::Intrastate).unwrap();
        assert_eq!(tax.cgst, dec!(3.000150));
        assert_eq!(tax.sgst, dec!(3.000150));
    }
}
