use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Quarter of the Indian fiscal year. Q4 (Jan-Mar) closes the year.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum FiscalQuarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

impl FiscalQuarter {
    /// Label as used on filing exports, month range included.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Q1 => "Q1 (Apr-Jun)",
            Self::Q2 => "Q2 (Jul-Sep)",
            Self::Q3 => "Q3 (Oct-Dec)",
            Self::Q4 => "Q4 (Jan-Mar)",
        }
    }
}

impl fmt::Display for FiscalQuarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fiscal year label for a date, e.g. "FY 2025-26". The year turns over
/// on April 1.
pub fn fiscal_year(date: NaiveDate) -> String {
    let year = date.year();
    let (start, end) = if date.month() < 4 {
        (year - 1, year)
    } else {
        (year, year + 1)
    };
    format!("FY {start}-{:02}", end % 100)
}

/// Fiscal quarter for a date.
pub fn quarter(date: NaiveDate) -> FiscalQuarter {
    match date.month() {
        4..=6 => FiscalQuarter::Q1,
        7..=9 => FiscalQuarter::Q2,
        10..=12 => FiscalQuarter::Q3,
        _ => FiscalQuarter::Q4,
    }
}

/// Month label for monthly filing exports, e.g. "Jun 2025".
pub fn month_label(date: NaiveDate) -> String {
    date.format("%b %Y").to_string()
}

/// A (fiscal year, quarter) bucket. Derives `Ord` so buckets sort
/// chronologically — Q4 is Jan-Mar and correctly lands last within its
/// fiscal year.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct PeriodKey {
    pub fiscal_year: String,
    pub quarter: FiscalQuarter,
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.fiscal_year, self.quarter)
    }
}

/// The bucket a date falls into.
pub fn period_key(date: NaiveDate) -> PeriodKey {
    PeriodKey {
        fiscal_year: fiscal_year(date),
        quarter: quarter(date),
    }
}
