//! The configured invoice currency set (ISO 4217 codes).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// Invoice currency. INR is the home/reporting currency; everything else
/// is converted via [`crate::fx::resolve_rate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian Rupee — home currency, always rate 1.
    Inr,
    /// US Dollar.
    Usd,
    /// Euro.
    Eur,
    /// Pound Sterling.
    Gbp,
    /// Singapore Dollar.
    Sgd,
    /// Australian Dollar.
    Aud,
    /// Canadian Dollar.
    Cad,
}

impl Currency {
    /// All configured currencies.
    pub const ALL: [Currency; 7] = [
        Self::Inr,
        Self::Usd,
        Self::Eur,
        Self::Gbp,
        Self::Sgd,
        Self::Aud,
        Self::Cad,
    ];

    /// ISO 4217 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Inr => "INR",
            Self::Usd => "USD",
            Self::Eur => "EUR",
            Self::Gbp => "GBP",
            Self::Sgd => "SGD",
            Self::Aud => "AUD",
            Self::Cad => "CAD",
        }
    }

    /// Parse from an ISO 4217 code (case-insensitive).
    pub fn from_code(code: &str) -> Result<Self, EngineError> {
        match code.to_uppercase().as_str() {
            "INR" => Ok(Self::Inr),
            "USD" => Ok(Self::Usd),
            "EUR" => Ok(Self::Eur),
            "GBP" => Ok(Self::Gbp),
            "SGD" => Ok(Self::Sgd),
            "AUD" => Ok(Self::Aud),
            "CAD" => Ok(Self::Cad),
            _ => Err(EngineError::UnknownCurrency(code.to_string())),
        }
    }

    /// True for the home/reporting currency.
    pub fn is_inr(&self) -> bool {
        matches!(self, Self::Inr)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
