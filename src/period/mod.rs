//! Fiscal-period bucketing for Indian tax filing.
//!
//! The Indian fiscal year runs April 1 – March 31; quarters are fixed
//! calendar buckets (Q1 = Apr-Jun … Q4 = Jan-Mar), not configurable per
//! tenant. This module only supplies the pure date → label mapping; the
//! reporting collaborator does the filtering and grouping.

mod fiscal;

pub use fiscal::{FiscalQuarter, PeriodKey, fiscal_year, month_label, period_key, quarter};
