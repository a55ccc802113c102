use chrono::NaiveDate;

use super::currencies::Currency;
use super::error::EngineError;
use super::types::{InvoiceInput, LineItem, PartyLocation, StoredRate, TaxContext};

/// Builder for [`InvoiceInput`].
///
/// ```
/// use bijak::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let input = InvoiceInputBuilder::new("INV-2025-014", NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
///     .client(PartyLocation::Other)
///     .currency(Currency::Usd)
///     .stored_rate(StoredRate::Explicit(dec!(83.20)))
///     .lut_elected(true)
///     .add_line(LineItem::new("API integration", dec!(1), dec!(5000)).hsn_sac("998314"))
///     .build()
///     .unwrap();
///
/// assert_eq!(input.currency, Currency::Usd);
/// ```
pub struct InvoiceInputBuilder {
    number: String,
    issue_date: NaiveDate,
    client_location: PartyLocation,
    currency: Currency,
    stored_rate: StoredRate,
    lut_elected: bool,
    lines: Vec<LineItem>,
}

impl InvoiceInputBuilder {
    pub fn new(number: impl Into<String>, issue_date: NaiveDate) -> Self {
        Self {
            number: number.into(),
            issue_date,
            client_location: PartyLocation::Other,
            currency: Currency::Inr,
            stored_rate: StoredRate::Unset,
            lut_elected: false,
            lines: Vec::new(),
        }
    }

    pub fn client(mut self, location: PartyLocation) -> Self {
        self.client_location = location;
        self
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn stored_rate(mut self, rate: StoredRate) -> Self {
        self.stored_rate = rate;
        self
    }

    pub fn lut_elected(mut self, elected: bool) -> Self {
        self.lut_elected = elected;
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.lines.push(line);
        self
    }

    /// Build the input. Requires at least one line item.
    pub fn build(self) -> Result<InvoiceInput, EngineError> {
        if self.number.trim().is_empty() {
            return Err(EngineError::InvalidInput(
                "invoice number must not be empty".into(),
            ));
        }
        if self.lines.is_empty() {
            return Err(EngineError::InvalidInput(
                "at least one line item is required".into(),
            ));
        }
        Ok(InvoiceInput {
            number: self.number,
            issue_date: self.issue_date,
            client_location: self.client_location,
            currency: self.currency,
            stored_rate: self.stored_rate,
            lut_elected: self.lut_elected,
            lines: self.lines,
        })
    }
}

impl TaxContext {
    /// Start an invoice builder pre-seeded with this context's default
    /// currency.
    pub fn invoice(&self, number: impl Into<String>, issue_date: NaiveDate) -> InvoiceInputBuilder {
        InvoiceInputBuilder::new(number, issue_date).currency(self.default_currency)
    }
}
