//! Batch computation and period aggregation for filing reports.
//!
//! Batch semantics: one invoice's bad data never aborts a report
//! covering many invoices. Errors are collected per item, alongside the
//! invoices that did compute.

mod aggregate;
mod batch;

pub use aggregate::{PeriodSummary, aggregate_by_period};
pub use batch::{BatchError, BatchOutcome, compute_batch};
