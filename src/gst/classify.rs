//! Transaction classification from seller and client locations.

use crate::core::{IndianState, PartyLocation, TransactionType};

/// Classify a transaction from the seller's state, the client's
/// location, and the LUT election. Deterministic; recompute whenever any
/// input changes.
///
/// # Rules (first match wins)
///
/// 1. Foreign client with LUT elected → `Export (LUT)`.
/// 2. Foreign client without LUT → `Export`.
/// 3. Client in a different Indian state → `Interstate`.
/// 4. Same state → `Intrastate`.
///
/// `lut_elected` is only meaningful for foreign clients. For domestic
/// clients the stored flag is silently inert — this function is the one
/// place that decides whether it is active; nothing else may branch on
/// the raw flag.
pub fn classify(
    seller_state: IndianState,
    client: PartyLocation,
    lut_elected: bool,
) -> TransactionType {
    match client {
        PartyLocation::Other if lut_elected => TransactionType::ExportLut,
        PartyLocation::Other => TransactionType::Export,
        PartyLocation::State(client_state) if client_state != seller_state => {
            TransactionType::Interstate
        }
        PartyLocation::State(_) => TransactionType::Intrastate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SELLER: IndianState = IndianState::Maharashtra;

    #[test]
    fn same_state_is_intrastate() {
        assert_eq!(
            classify(SELLER, PartyLocation::State(IndianState::Maharashtra), false),
            TransactionType::Intrastate
        );
    }

    #[test]
    fn different_state_is_interstate() {
        assert_eq!(
            classify(SELLER, PartyLocation::State(IndianState::Karnataka), false),
            TransactionType::Interstate
        );
    }

    #[test]
    fn foreign_client_is_export() {
        assert_eq!(
            classify(SELLER, PartyLocation::Other, false),
            TransactionType::Export
        );
    }

    #[test]
    fn foreign_client_with_lut_is_export_lut() {
        assert_eq!(
            classify(SELLER, PartyLocation::Other, true),
            TransactionType::ExportLut
        );
    }

    #[test]
    fn lut_flag_is_inert_for_domestic_clients() {
        assert_eq!(
            classify(SELLER, PartyLocation::State(IndianState::Maharashtra), true),
            TransactionType::Intrastate
        );
        assert_eq!(
            classify(SELLER, PartyLocation::State(IndianState::Karnataka), true),
            TransactionType::Interstate
        );
    }
}
