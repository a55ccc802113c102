use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::gst::ComputedInvoice;
use crate::period::{PeriodKey, period_key};

/// INR sums for one fiscal-period bucket — the shape the filing-bundle
/// and dashboard collaborators consume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodSummary {
    pub period: PeriodKey,
    pub invoice_count: usize,
    /// Σ subtotal × rate.
    pub taxable_inr: Decimal,
    pub cgst_inr: Decimal,
    pub sgst_inr: Decimal,
    pub igst_inr: Decimal,
    /// Σ grand total × rate.
    pub total_inr: Decimal,
}

impl PeriodSummary {
    fn empty(period: PeriodKey) -> Self {
        Self {
            period,
            invoice_count: 0,
            taxable_inr: Decimal::ZERO,
            cgst_inr: Decimal::ZERO,
            sgst_inr: Decimal::ZERO,
            igst_inr: Decimal::ZERO,
            total_inr: Decimal::ZERO,
        }
    }
}

/// Bucket computed invoices by fiscal quarter and sum their INR
/// equivalents. Output is sorted chronologically. Full precision — the
/// export layer rounds when it renders.
pub fn aggregate_by_period(invoices: &[ComputedInvoice]) -> Vec<PeriodSummary> {
    let mut buckets: BTreeMap<PeriodKey, PeriodSummary> = BTreeMap::new();

    for invoice in invoices {
        let key = period_key(invoice.issue_date);
        let summary = buckets
            .entry(key.clone())
            .or_insert_with(|| PeriodSummary::empty(key));

        let totals = &invoice.totals;
        summary.invoice_count += 1;
        summary.taxable_inr += totals.subtotal * totals.rate;
        summary.cgst_inr += totals.tax.cgst * totals.rate;
        summary.sgst_inr += totals.tax.sgst * totals.rate;
        summary.igst_inr += totals.tax.igst * totals.rate;
        summary.total_inr += totals.inr_equivalent;
    }

    buckets.into_values().collect()
}
