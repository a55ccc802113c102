use serde::{Deserialize, Serialize};

use crate::core::{EngineError, InvoiceInput, TaxContext};
use crate::fx::LiveRates;
use crate::gst::{ComputedInvoice, compute_invoice};

/// A per-item failure inside a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchError {
    /// Index into the input slice.
    pub index: usize,
    /// Invoice number, for surfacing in import/report UIs.
    pub number: String,
    pub error: EngineError,
}

/// Outcome of a batch computation: everything that computed, plus an
/// indexed error list for everything that didn't.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub computed: Vec<ComputedInvoice>,
    pub errors: Vec<BatchError>,
}

impl BatchOutcome {
    /// True when every input computed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Compute a batch of invoices, catching per item and continuing.
///
/// Used by the CSV bulk import and the period report aggregator — both
/// need the good rows even when some rows are bad.
pub fn compute_batch(
    ctx: &TaxContext,
    inputs: &[InvoiceInput],
    live: Option<&LiveRates>,
) -> BatchOutcome {
    let mut computed = Vec::with_capacity(inputs.len());
    let mut errors = Vec::new();

    for (index, input) in inputs.iter().enumerate() {
        match compute_invoice(ctx, input, live) {
            Ok(invoice) => computed.push(invoice),
            Err(error) => errors.push(BatchError {
                index,
                number: input.number.clone(),
                error,
            }),
        }
    }

    BatchOutcome { computed, errors }
}
