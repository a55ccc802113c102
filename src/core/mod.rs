//! Core data model: money, currencies, state registry, invoice inputs.
//!
//! These types are the shared vocabulary of the engine. They carry no
//! behavior beyond construction and validation — classification and
//! arithmetic live in [`crate::gst`] and [`crate::fx`].

mod builder;
mod currencies;
mod error;
mod states;
mod types;

pub use builder::*;
pub use currencies::*;
pub use error::*;
pub use states::*;
pub use types::*;
