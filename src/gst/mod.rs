//! GST classification, tax computation, and invoice totals.
//!
//! This module is the single authority the invoice form, the CSV bulk
//! import, and the report aggregator all call — the same rules, once.
//!
//! # Example
//!
//! ```
//! use bijak::core::*;
//! use bijak::gst;
//!
//! let t = gst::classify(
//!     IndianState::Maharashtra,
//!     PartyLocation::State(IndianState::Maharashtra),
//!     false,
//! );
//! assert_eq!(t, TransactionType::Intrastate);
//! ```

mod classify;
mod tax;
mod totals;

pub use classify::classify;
pub use tax::{GST_RATE, GST_SPLIT_RATE, compute_tax};
pub use totals::{ComputedInvoice, InvoiceTotals, compute_invoice, compute_totals, round_half_up};
