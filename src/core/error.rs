use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::currencies::Currency;

/// Errors raised by the engine.
///
/// Every error is local to a single invoice computation. Batch callers
/// (CSV import, period reports) are expected to catch per item and
/// continue — see [`crate::report::compute_batch`].
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EngineError {
    /// A caller contract violation: negative subtotal or price,
    /// non-positive quantity or exchange rate. Never silently coerced —
    /// this output feeds financial reporting.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Currency is non-INR, the stored rate is unset, and no usable live
    /// quote was supplied. Reported explicitly so the caller can decide
    /// whether to block submission or proceed with a flagged estimate.
    #[error("no exchange rate available for {0}: stored rate unset and no live quote")]
    MissingRate(Currency),

    /// A state name or GST state code did not match the registry.
    #[error("unknown state: {0}")]
    UnknownState(String),

    /// A currency code outside the configured set.
    #[error("unknown currency code: {0}")]
    UnknownCurrency(String),
}
