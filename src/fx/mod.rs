//! Exchange-rate resolution and INR conversion.
//!
//! Rates are "INR per one unit of invoice currency". Resolution is a
//! strict three-tier policy (fixed / stored / live) — when none of the
//! tiers produce a rate the resolver reports
//! [`crate::core::EngineError::MissingRate`] instead of silently assuming
//! parity; callers that knowingly proceed with an estimate opt in via
//! [`resolve_rate_or_parity`].
//!
//! The engine never fetches rates itself. A caller obtains a
//! [`LiveRates`] snapshot once per session and passes it in. With the
//! `live-rates` feature an async fetcher is available for that caller.

mod resolve;

#[cfg(feature = "live-rates")]
mod live;

pub use resolve::{LiveRates, RateSource, ResolvedRate, resolve_rate, resolve_rate_or_parity, to_inr};

#[cfg(feature = "live-rates")]
pub use live::{RatesFeedError, fetch_live_rates, fetch_live_rates_from};
