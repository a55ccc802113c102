//! Indian state/UT registry with official GST state codes.
//!
//! The numeric codes are the ones that prefix a GSTIN (e.g. 27 for
//! Maharashtra, 29 for Karnataka). Foreign parties are not in this
//! registry — they are represented by [`crate::core::PartyLocation::Other`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::EngineError;

/// An Indian state or union territory, per the GST jurisdiction registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndianState {
    JammuAndKashmir,
    HimachalPradesh,
    Punjab,
    Chandigarh,
    Uttarakhand,
    Haryana,
    Delhi,
    Rajasthan,
    UttarPradesh,
    Bihar,
    Sikkim,
    ArunachalPradesh,
    Nagaland,
    Manipur,
    Mizoram,
    Tripura,
    Meghalaya,
    Assam,
    WestBengal,
    Jharkhand,
    Odisha,
    Chhattisgarh,
    MadhyaPradesh,
    Gujarat,
    DadraNagarHaveliDamanDiu,
    Maharashtra,
    Karnataka,
    Goa,
    Lakshadweep,
    Kerala,
    TamilNadu,
    Puducherry,
    AndamanAndNicobar,
    Telangana,
    AndhraPradesh,
    Ladakh,
}

impl IndianState {
    /// All registered states and union territories, in GST code order.
    pub const ALL: [IndianState; 36] = [
        Self::JammuAndKashmir,
        Self::HimachalPradesh,
        Self::Punjab,
        Self::Chandigarh,
        Self::Uttarakhand,
        Self::Haryana,
        Self::Delhi,
        Self::Rajasthan,
        Self::UttarPradesh,
        Self::Bihar,
        Self::Sikkim,
        Self::ArunachalPradesh,
        Self::Nagaland,
        Self::Manipur,
        Self::Mizoram,
        Self::Tripura,
        Self::Meghalaya,
        Self::Assam,
        Self::WestBengal,
        Self::Jharkhand,
        Self::Odisha,
        Self::Chhattisgarh,
        Self::MadhyaPradesh,
        Self::Gujarat,
        Self::DadraNagarHaveliDamanDiu,
        Self::Maharashtra,
        Self::Karnataka,
        Self::Goa,
        Self::Lakshadweep,
        Self::Kerala,
        Self::TamilNadu,
        Self::Puducherry,
        Self::AndamanAndNicobar,
        Self::Telangana,
        Self::AndhraPradesh,
        Self::Ladakh,
    ];

    /// Official GST state code (the GSTIN prefix).
    pub fn gst_code(&self) -> u8 {
        match self {
            Self::JammuAndKashmir => 1,
            Self::HimachalPradesh => 2,
            Self::Punjab => 3,
            Self::Chandigarh => 4,
            Self::Uttarakhand => 5,
            Self::Haryana => 6,
            Self::Delhi => 7,
            Self::Rajasthan => 8,
            Self::UttarPradesh => 9,
            Self::Bihar => 10,
            Self::Sikkim => 11,
            Self::ArunachalPradesh => 12,
            Self::Nagaland => 13,
            Self::Manipur => 14,
            Self::Mizoram => 15,
            Self::Tripura => 16,
            Self::Meghalaya => 17,
            Self::Assam => 18,
            Self::WestBengal => 19,
            Self::Jharkhand => 20,
            Self::Odisha => 21,
            Self::Chhattisgarh => 22,
            Self::MadhyaPradesh => 23,
            Self::Gujarat => 24,
            Self::DadraNagarHaveliDamanDiu => 26,
            Self::Maharashtra => 27,
            Self::Karnataka => 29,
            Self::Goa => 30,
            Self::Lakshadweep => 31,
            Self::Kerala => 32,
            Self::TamilNadu => 33,
            Self::Puducherry => 34,
            Self::AndamanAndNicobar => 35,
            Self::Telangana => 36,
            Self::AndhraPradesh => 37,
            Self::Ladakh => 38,
        }
    }

    /// Parse from a GST state code.
    pub fn from_gst_code(code: u8) -> Result<Self, EngineError> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.gst_code() == code)
            .ok_or_else(|| EngineError::UnknownState(format!("GST state code {code}")))
    }

    /// Display name, as stored on client records and printed on invoices.
    pub fn name(&self) -> &'static str {
        match self {
            Self::JammuAndKashmir => "Jammu and Kashmir",
            Self::HimachalPradesh => "Himachal Pradesh",
            Self::Punjab => "Punjab",
            Self::Chandigarh => "Chandigarh",
            Self::Uttarakhand => "Uttarakhand",
            Self::Haryana => "Haryana",
            Self::Delhi => "Delhi",
            Self::Rajasthan => "Rajasthan",
            Self::UttarPradesh => "Uttar Pradesh",
            Self::Bihar => "Bihar",
            Self::Sikkim => "Sikkim",
            Self::ArunachalPradesh => "Arunachal Pradesh",
            Self::Nagaland => "Nagaland",
            Self::Manipur => "Manipur",
            Self::Mizoram => "Mizoram",
            Self::Tripura => "Tripura",
            Self::Meghalaya => "Meghalaya",
            Self::Assam => "Assam",
            Self::WestBengal => "West Bengal",
            Self::Jharkhand => "Jharkhand",
            Self::Odisha => "Odisha",
            Self::Chhattisgarh => "Chhattisgarh",
            Self::MadhyaPradesh => "Madhya Pradesh",
            Self::Gujarat => "Gujarat",
            Self::DadraNagarHaveliDamanDiu => "Dadra and Nagar Haveli and Daman and Diu",
            Self::Maharashtra => "Maharashtra",
            Self::Karnataka => "Karnataka",
            Self::Goa => "Goa",
            Self::Lakshadweep => "Lakshadweep",
            Self::Kerala => "Kerala",
            Self::TamilNadu => "Tamil Nadu",
            Self::Puducherry => "Puducherry",
            Self::AndamanAndNicobar => "Andaman and Nicobar Islands",
            Self::Telangana => "Telangana",
            Self::AndhraPradesh => "Andhra Pradesh",
            Self::Ladakh => "Ladakh",
        }
    }

    /// Parse from a display name (case-insensitive). Used by the CSV
    /// import path, where state arrives as free text.
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        let wanted = name.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.name().to_lowercase() == wanted)
            .ok_or_else(|| EngineError::UnknownState(name.to_string()))
    }
}

impl fmt::Display for IndianState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gst_code_roundtrip() {
        for state in IndianState::ALL {
            assert_eq!(IndianState::from_gst_code(state.gst_code()).unwrap(), state);
        }
    }

    #[test]
    fn name_roundtrip() {
        for state in IndianState::ALL {
            assert_eq!(IndianState::from_name(state.name()).unwrap(), state);
        }
    }

    #[test]
    fn known_codes() {
        assert_eq!(
            IndianState::from_gst_code(27).unwrap(),
            IndianState::Maharashtra
        );
        assert_eq!(
            IndianState::from_gst_code(29).unwrap(),
            IndianState::Karnataka
        );
        assert_eq!(IndianState::from_gst_code(7).unwrap(), IndianState::Delhi);
    }

    #[test]
    fn unassigned_codes_rejected() {
        // 25 and 28 are retired/unassigned in the GST registry
        assert!(IndianState::from_gst_code(0).is_err());
        assert!(IndianState::from_gst_code(25).is_err());
        assert!(IndianState::from_gst_code(28).is_err());
        assert!(IndianState::from_gst_code(99).is_err());
    }

    #[test]
    fn name_parse_tolerates_case_and_whitespace() {
        assert_eq!(
            IndianState::from_name("  maharashtra ").unwrap(),
            IndianState::Maharashtra
        );
        assert_eq!(
            IndianState::from_name("TAMIL NADU").unwrap(),
            IndianState::TamilNadu
        );
    }

    #[test]
    fn unknown_names_rejected() {
        assert!(matches!(
            IndianState::from_name("Atlantis"),
            Err(EngineError::UnknownState(_))
        ));
        assert!(IndianState::from_name("").is_err());
    }

    #[test]
    fn codes_are_strictly_increasing() {
        for window in IndianState::ALL.windows(2) {
            assert!(
                window[0].gst_code() < window[1].gst_code(),
                "state codes not in order: {} >= {}",
                window[0].gst_code(),
                window[1].gst_code()
            );
        }
    }
}
