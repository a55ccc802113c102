use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currencies::Currency;
use super::error::EngineError;
use super::states::IndianState;

/// An amount in a specific currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    pub amount: Decimal,
    pub currency: Currency,
}

impl Money {
    /// Construct, rejecting negative amounts.
    pub fn new(amount: Decimal, currency: Currency) -> Result<Self, EngineError> {
        if amount < Decimal::ZERO {
            return Err(EngineError::InvalidInput(format!(
                "money amount must be non-negative, got {amount}"
            )));
        }
        Ok(Self { amount, currency })
    }

    /// Zero in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    /// An INR amount.
    pub fn inr(amount: Decimal) -> Result<Self, EngineError> {
        Self::new(amount, Currency::Inr)
    }
}

/// Where a transacting party sits for classification purposes: a
/// registered Indian state, or `Other` meaning foreign / outside India
/// (which triggers export treatment).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartyLocation {
    State(IndianState),
    Other,
}

impl PartyLocation {
    /// True when the party is outside India.
    pub fn is_foreign(&self) -> bool {
        matches!(self, Self::Other)
    }
}

/// One invoice line. Currency is inherited from the invoice; the HSN/SAC
/// code is opaque to the engine (printed, never validated). Immutable
/// once passed into a computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    /// HSN (goods) or SAC (services) classification code.
    pub hsn_sac: Option<String>,
    pub quantity: Decimal,
    pub unit_price: Decimal,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            hsn_sac: None,
            quantity,
            unit_price,
        }
    }

    pub fn hsn_sac(mut self, code: impl Into<String>) -> Self {
        self.hsn_sac = Some(code.into());
        self
    }
}

/// A stored per-invoice exchange rate (INR per unit of invoice currency).
///
/// `Unset` and `Explicit(1)` are distinct values: a user who locks a
/// foreign-currency invoice at parity stores `Explicit(1)`, while an
/// untouched record stays `Unset`. Legacy records that used the bare
/// value 1 as an "unknown" sentinel go through [`StoredRate::from_legacy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoredRate {
    #[default]
    Unset,
    Explicit(Decimal),
}

impl StoredRate {
    /// Interpret a raw stored value from a legacy record, where 1 was the
    /// default for untouched invoices and therefore indistinguishable
    /// from "not yet known". Only the import boundary should use this.
    pub fn from_legacy(rate: Decimal) -> Self {
        if rate == Decimal::ONE {
            Self::Unset
        } else {
            Self::Explicit(rate)
        }
    }

    pub fn is_set(&self) -> bool {
        matches!(self, Self::Explicit(_))
    }
}

/// GST transaction classification. Derived by [`crate::gst::classify`] —
/// recomputed whenever seller state, client location, or the LUT flag
/// changes, never stored independently of its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Seller and client in the same state: CGST + SGST.
    Intrastate,
    /// Different Indian states: IGST.
    Interstate,
    /// Foreign client, no LUT election: IGST.
    Export,
    /// Foreign client under a Letter of Undertaking: zero-rated.
    ExportLut,
}

impl TransactionType {
    /// Label as printed on invoices and filing exports.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Intrastate => "Intrastate",
            Self::Interstate => "Interstate",
            Self::Export => "Export",
            Self::ExportLut => "Export (LUT)",
        }
    }

    /// Parse from a stored label.
    pub fn from_label(label: &str) -> Result<Self, EngineError> {
        match label.trim() {
            "Intrastate" => Ok(Self::Intrastate),
            "Interstate" => Ok(Self::Interstate),
            "Export" => Ok(Self::Export),
            "Export (LUT)" => Ok(Self::ExportLut),
            other => Err(EngineError::InvalidInput(format!(
                "unknown transaction type label: {other:?}"
            ))),
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// GST components for one invoice, in the invoice currency.
///
/// Exactly one shape per classification: Intrastate splits the levy into
/// equal CGST and SGST halves with zero IGST; Interstate and Export carry
/// the full levy as IGST; Export (LUT) is all zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub cgst: Decimal,
    pub sgst: Decimal,
    pub igst: Decimal,
}

impl TaxBreakdown {
    pub const ZERO: TaxBreakdown = TaxBreakdown {
        cgst: Decimal::ZERO,
        sgst: Decimal::ZERO,
        igst: Decimal::ZERO,
    };

    /// Sum of all components.
    pub fn total(&self) -> Decimal {
        self.cgst + self.sgst + self.igst
    }
}

/// Explicit seller-side context, passed into every engine call.
///
/// Replaces the ambient settings object the call sites used to read: the
/// seller's registered state and the default currency for new invoices
/// travel with the call, never through global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxContext {
    pub seller_state: IndianState,
    pub default_currency: Currency,
}

impl TaxContext {
    pub fn new(seller_state: IndianState, default_currency: Currency) -> Self {
        Self {
            seller_state,
            default_currency,
        }
    }
}

/// Everything the engine needs to compute one invoice. Built by
/// [`crate::core::InvoiceInputBuilder`]; shared by the form-submit,
/// CSV-import, and reporting callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceInput {
    pub number: String,
    pub issue_date: NaiveDate,
    pub client_location: PartyLocation,
    pub currency: Currency,
    pub stored_rate: StoredRate,
    /// Letter of Undertaking election. Stored per invoice regardless of
    /// export status; [`crate::gst::classify`] is the single authority
    /// for whether it is active.
    pub lut_elected: bool,
    pub lines: Vec<LineItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_rejects_negative() {
        assert!(Money::new(dec!(-0.01), Currency::Inr).is_err());
        assert!(Money::new(dec!(0), Currency::Inr).is_ok());
        assert!(Money::inr(dec!(42.50)).is_ok());
    }

    #[test]
    fn stored_rate_legacy_sentinel() {
        assert_eq!(StoredRate::from_legacy(dec!(1)), StoredRate::Unset);
        assert_eq!(StoredRate::from_legacy(dec!(1.00)), StoredRate::Unset);
        assert_eq!(
            StoredRate::from_legacy(dec!(83.20)),
            StoredRate::Explicit(dec!(83.20))
        );
        assert!(!StoredRate::default().is_set());
    }

    #[test]
    fn transaction_type_labels() {
        assert_eq!(TransactionType::ExportLut.label(), "Export (LUT)");
        assert_eq!(
            TransactionType::from_label("Export (LUT)").unwrap(),
            TransactionType::ExportLut
        );
        for t in [
            TransactionType::Intrastate,
            TransactionType::Interstate,
            TransactionType::Export,
            TransactionType::ExportLut,
        ] {
            assert_eq!(TransactionType::from_label(t.label()).unwrap(), t);
        }
        assert!(TransactionType::from_label("Domestic").is_err());
    }

    #[test]
    fn tax_breakdown_total() {
        let b = TaxBreakdown {
            cgst: dec!(900),
            sgst: dec!(900),
            igst: dec!(0),
        };
        assert_eq!(b.total(), dec!(1800));
        assert_eq!(TaxBreakdown::ZERO.total(), dec!(0));
    }

    #[test]
    fn party_location_foreign() {
        assert!(PartyLocation::Other.is_foreign());
        assert!(!PartyLocation::State(IndianState::Goa).is_foreign());
    }
}
