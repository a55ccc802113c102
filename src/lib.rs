//! # bijak
//!
//! Indian GST invoicing engine: transaction classification (Intrastate /
//! Interstate / Export / Export-LUT), CGST/SGST/IGST computation,
//! multi-currency → INR conversion, and fiscal-period bucketing.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating point.
//! Rounding is half-up and happens only at presentation time, via
//! [`gst::InvoiceTotals::rounded`].
//!
//! The engine is pure and stateless: every function is synchronous and
//! referentially transparent given its explicit inputs. Live exchange-rate
//! snapshots are passed in by the caller — the engine never performs I/O
//! (the optional `live-rates` feature ships an async fetcher for callers
//! that want one, kept outside the pure core).
//!
//! ## Quick Start
//!
//! ```rust
//! use bijak::core::*;
//! use bijak::gst;
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//!
//! let ctx = TaxContext::new(IndianState::Maharashtra, Currency::Inr);
//!
//! let input = ctx
//!     .invoice("INV-2025-001", NaiveDate::from_ymd_opt(2025, 6, 15).unwrap())
//!     .client(PartyLocation::State(IndianState::Karnataka))
//!     .add_line(LineItem::new("Consulting", dec!(10), dec!(1000)))
//!     .build()
//!     .unwrap();
//!
//! let computed = gst::compute_invoice(&ctx, &input, None).unwrap();
//! assert_eq!(computed.transaction_type, TransactionType::Interstate);
//! assert_eq!(computed.totals.tax.igst, dec!(1800.00));
//! assert_eq!(computed.totals.grand_total, dec!(11800.00));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` | Data model: money, states, currencies, invoice inputs |
//! | `fx` | Exchange-rate resolution and INR conversion |
//! | `gst` | Classifier, tax calculator, invoice totals |
//! | `period` | Fiscal year / quarter bucketing |
//! | `report` (default) | Batch computation and period aggregation |
//! | `live-rates` | Async USD-base quote-sheet fetcher (reqwest) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "fx")]
pub mod fx;

#[cfg(feature = "gst")]
pub mod gst;

#[cfg(feature = "period")]
pub mod period;

#[cfg(feature = "report")]
pub mod report;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
