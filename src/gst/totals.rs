//! Invoice totals: subtotal, tax, grand total, INR equivalent.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::classify::classify;
use super::tax::compute_tax;
use crate::core::{
    Currency, EngineError, InvoiceInput, LineItem, TaxBreakdown, TaxContext, TransactionType,
};
use crate::fx::{LiveRates, RateSource, resolve_rate};

/// Computed monetary fields for one invoice.
///
/// Always rederived in full from the current line set and context —
/// never mutated incrementally, so there are no partial sums to drift.
/// Amounts are full precision; call [`InvoiceTotals::rounded`] for the
/// presentation view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Σ(quantity × unit price), in the invoice currency.
    pub subtotal: Decimal,
    /// GST components, in the invoice currency.
    pub tax: TaxBreakdown,
    /// cgst + sgst + igst.
    pub tax_total: Decimal,
    /// subtotal + tax_total.
    pub grand_total: Decimal,
    /// Effective INR per unit of invoice currency.
    pub rate: Decimal,
    /// grand_total × rate, for report aggregation.
    pub inr_equivalent: Decimal,
}

impl InvoiceTotals {
    /// Presentation view, rounded half-up to `dp` decimal places.
    ///
    /// Components are rounded individually and the sums rebuilt from the
    /// rounded parts, so `subtotal + tax_total == grand_total` holds
    /// exactly after rounding.
    pub fn rounded(&self, dp: u32) -> InvoiceTotals {
        let subtotal = round_half_up(self.subtotal, dp);
        let tax = TaxBreakdown {
            cgst: round_half_up(self.tax.cgst, dp),
            sgst: round_half_up(self.tax.sgst, dp),
            igst: round_half_up(self.tax.igst, dp),
        };
        let tax_total = tax.total();
        let grand_total = subtotal + tax_total;
        InvoiceTotals {
            subtotal,
            tax,
            tax_total,
            grand_total,
            rate: self.rate,
            inr_equivalent: round_half_up(grand_total * self.rate, dp),
        }
    }
}

/// One fully computed invoice — the record persistence stores, the
/// PDF/Excel renderers print, and the report aggregator sums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputedInvoice {
    pub number: String,
    pub issue_date: NaiveDate,
    pub currency: Currency,
    pub transaction_type: TransactionType,
    /// Which resolution tier produced the effective rate.
    pub rate_source: RateSource,
    pub totals: InvoiceTotals,
}

/// Compute totals for a line set under a given classification and rate.
///
/// Validates every line (quantity > 0, unit price ≥ 0) and the rate
/// (> 0); a violation fails the whole computation rather than skewing a
/// financial report.
pub fn compute_totals(
    lines: &[LineItem],
    kind: TransactionType,
    rate: Decimal,
) -> Result<InvoiceTotals, EngineError> {
    if rate <= Decimal::ZERO {
        return Err(EngineError::InvalidInput(format!(
            "exchange rate must be positive, got {rate}"
        )));
    }

    let mut subtotal = Decimal::ZERO;
    for (i, line) in lines.iter().enumerate() {
        if line.quantity <= Decimal::ZERO {
            return Err(EngineError::InvalidInput(format!(
                "line {}: quantity must be positive, got {}",
                i + 1,
                line.quantity
            )));
        }
        if line.unit_price < Decimal::ZERO {
            return Err(EngineError::InvalidInput(format!(
                "line {}: unit price must be non-negative, got {}",
                i + 1,
                line.unit_price
            )));
        }
        subtotal += line.quantity * line.unit_price;
    }

    let tax = compute_tax(subtotal, kind)?;
    let tax_total = tax.total();
    let grand_total = subtotal + tax_total;

    Ok(InvoiceTotals {
        subtotal,
        tax,
        tax_total,
        grand_total,
        rate,
        inr_equivalent: grand_total * rate,
    })
}

/// Compute one invoice end to end: classify, resolve the rate, total.
///
/// The single entry point shared by the invoice form, the CSV bulk
/// import, and the report aggregator. Rate resolution is strict — a
/// non-INR invoice with no stored rate and no usable live quote fails
/// with [`EngineError::MissingRate`] so the caller can decide how to
/// proceed.
pub fn compute_invoice(
    ctx: &TaxContext,
    input: &InvoiceInput,
    live: Option<&LiveRates>,
) -> Result<ComputedInvoice, EngineError> {
    let transaction_type = classify(ctx.seller_state, input.client_location, input.lut_elected);
    let resolved = resolve_rate(input.currency, input.stored_rate, live)?;
    let totals = compute_totals(&input.lines, transaction_type, resolved.rate)?;

    Ok(ComputedInvoice {
        number: input.number.clone(),
        issue_date: input.issue_date,
        currency: input.currency,
        transaction_type,
        rate_source: resolved.source,
        totals,
    })
}

/// Round half-up (commercial rounding) to `dp` decimal places.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{IndianState, PartyLocation, StoredRate};
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ctx() -> TaxContext {
        TaxContext::new(IndianState::Maharashtra, Currency::Inr)
    }

    #[test]
    fn totals_sum_lines_at_full_precision() {
        let lines = vec![
            LineItem::new("Design", dec!(12.5), dec!(400)),
            LineItem::new("Hosting", dec!(1), dec!(49.90)),
        ];
        let totals = compute_totals(&lines, TransactionType::Intrastate, dec!(1)).unwrap();
        assert_eq!(totals.subtotal, dec!(5049.90));
        assert_eq!(totals.tax.cgst, dec!(454.491));
        assert_eq!(totals.tax.sgst, dec!(454.491));
        assert_eq!(totals.grand_total, dec!(5958.882));
        assert_eq!(totals.inr_equivalent, totals.grand_total);
    }

    #[test]
    fn rounded_view_keeps_sums_consistent() {
        let lines = vec![LineItem::new("Odd amount", dec!(3), dec!(33.335))];
        let totals = compute_totals(&lines, TransactionType::Intrastate, dec!(1)).unwrap();
        let display = totals.rounded(2);
        assert_eq!(
            display.subtotal + display.tax_total,
            display.grand_total
        );
        // 100.005 rounds half-up to 100.01
        assert_eq!(display.subtotal, dec!(100.01));
    }

    #[test]
    fn invalid_lines_rejected() {
        let zero_qty = vec![LineItem::new("Bad", dec!(0), dec!(100))];
        assert!(compute_totals(&zero_qty, TransactionType::Export, dec!(1)).is_err());

        let negative_price = vec![LineItem::new("Bad", dec!(1), dec!(-5))];
        assert!(compute_totals(&negative_price, TransactionType::Export, dec!(1)).is_err());

        let lines = vec![LineItem::new("Fine", dec!(1), dec!(5))];
        assert!(compute_totals(&lines, TransactionType::Export, dec!(0)).is_err());
    }

    #[test]
    fn compute_invoice_wires_classification_and_rate() {
        let input = ctx()
            .invoice("INV-9", date(2025, 4, 10))
            .client(PartyLocation::Other)
            .currency(Currency::Usd)
            .stored_rate(StoredRate::Explicit(dec!(83)))
            .lut_elected(true)
            .add_line(LineItem::new("Export services", dec!(1), dec!(5000)))
            .build()
            .unwrap();

        let computed = compute_invoice(&ctx(), &input, None).unwrap();
        assert_eq!(computed.transaction_type, TransactionType::ExportLut);
        assert_eq!(computed.rate_source, RateSource::Stored);
        assert_eq!(computed.totals.grand_total, dec!(5000));
        assert_eq!(computed.totals.inr_equivalent, dec!(415000));
    }

    #[test]
    fn compute_invoice_surfaces_missing_rate() {
        let input = ctx()
            .invoice("INV-10", date(2025, 4, 10))
            .client(PartyLocation::Other)
            .currency(Currency::Eur)
            .add_line(LineItem::new("Export services", dec!(1), dec!(900)))
            .build()
            .unwrap();

        let err = compute_invoice(&ctx(), &input, None).unwrap_err();
        assert_eq!(err, EngineError::MissingRate(Currency::Eur));
    }
}
