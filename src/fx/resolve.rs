use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{Currency, EngineError, Money, StoredRate};

/// Which tier of the resolution policy produced the effective rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RateSource {
    /// INR itself — rate is 1 by definition.
    Fixed,
    /// An explicitly stored per-invoice rate.
    Stored,
    /// Cross-derived from a live USD-base quote sheet.
    Live,
    /// Parity assumed after [`resolve_rate_or_parity`] — a flagged
    /// estimate, never produced by the strict resolver.
    Fallback,
}

/// An effective rate plus its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedRate {
    /// INR per one unit of the invoice currency.
    pub rate: Decimal,
    pub source: RateSource,
}

/// An immutable live-rates snapshot: units of each currency per 1 USD
/// (the base-currency USD quote-sheet convention). Fetched once per
/// session by a collaborator and handed to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LiveRates {
    quotes: HashMap<Currency, Decimal>,
}

impl LiveRates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a quote. Rejects non-positive values.
    pub fn insert(&mut self, currency: Currency, per_usd: Decimal) -> Result<(), EngineError> {
        if per_usd <= Decimal::ZERO {
            return Err(EngineError::InvalidInput(format!(
                "live quote for {currency} must be positive, got {per_usd}"
            )));
        }
        self.quotes.insert(currency, per_usd);
        Ok(())
    }

    /// Units of `currency` per 1 USD, if quoted.
    pub fn quote(&self, currency: Currency) -> Option<Decimal> {
        self.quotes.get(&currency).copied()
    }

    /// Cross rate: INR per one unit of `currency`. Requires the sheet to
    /// quote both the currency and INR.
    pub fn cross_to_inr(&self, currency: Currency) -> Option<Decimal> {
        let inr_per_usd = self.quote(Currency::Inr)?;
        let cur_per_usd = self.quote(currency)?;
        Some(inr_per_usd / cur_per_usd)
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Resolve the effective INR rate for an invoice currency.
///
/// # Policy
///
/// 1. INR → rate 1, [`RateSource::Fixed`], regardless of stored or live
///    values.
/// 2. An explicitly stored rate wins → [`RateSource::Stored`].
///    Non-positive stored rates are an [`EngineError::InvalidInput`].
/// 3. Otherwise, a live sheet quoting both the currency and INR gives
///    the cross rate → [`RateSource::Live`].
/// 4. Otherwise [`EngineError::MissingRate`] — the caller decides whether
///    to block or to proceed via [`resolve_rate_or_parity`].
pub fn resolve_rate(
    currency: Currency,
    stored: StoredRate,
    live: Option<&LiveRates>,
) -> Result<ResolvedRate, EngineError> {
    if currency.is_inr() {
        return Ok(ResolvedRate {
            rate: Decimal::ONE,
            source: RateSource::Fixed,
        });
    }

    match stored {
        StoredRate::Explicit(rate) => {
            if rate <= Decimal::ZERO {
                return Err(EngineError::InvalidInput(format!(
                    "stored exchange rate must be positive, got {rate}"
                )));
            }
            Ok(ResolvedRate {
                rate,
                source: RateSource::Stored,
            })
        }
        StoredRate::Unset => {
            if let Some(rate) = live.and_then(|table| table.cross_to_inr(currency)) {
                return Ok(ResolvedRate {
                    rate,
                    source: RateSource::Live,
                });
            }
            Err(EngineError::MissingRate(currency))
        }
    }
}

/// Like [`resolve_rate`], but maps [`EngineError::MissingRate`] to a
/// parity rate tagged [`RateSource::Fallback`]. Invalid stored rates
/// still error.
pub fn resolve_rate_or_parity(
    currency: Currency,
    stored: StoredRate,
    live: Option<&LiveRates>,
) -> Result<ResolvedRate, EngineError> {
    match resolve_rate(currency, stored, live) {
        Err(EngineError::MissingRate(_)) => Ok(ResolvedRate {
            rate: Decimal::ONE,
            source: RateSource::Fallback,
        }),
        other => other,
    }
}

/// Convert to INR at the given effective rate. Pure multiplication at
/// full precision — rounding happens only at presentation time.
pub fn to_inr(money: Money, rate: Decimal) -> Result<Money, EngineError> {
    if rate <= Decimal::ZERO {
        return Err(EngineError::InvalidInput(format!(
            "exchange rate must be positive, got {rate}"
        )));
    }
    Money::new(money.amount * rate, Currency::Inr)
}
