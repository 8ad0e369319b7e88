//! Countries offered by the address form and their province lists

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Countries selectable in the address section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Country {
    #[default]
    Pakistan,
    India,
    #[serde(rename = "United States")]
    UnitedStates,
    #[serde(rename = "United Kingdom")]
    UnitedKingdom,
    Canada,
}

/// Returned when a country name is not one of [`Country::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown country: {0}")]
pub struct UnknownCountry(pub String);

impl Country {
    /// Every country, in display order
    pub const ALL: [Country; 5] = [
        Country::Pakistan,
        Country::India,
        Country::UnitedStates,
        Country::UnitedKingdom,
        Country::Canada,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Country::Pakistan => "Pakistan",
            Country::India => "India",
            Country::UnitedStates => "United States",
            Country::UnitedKingdom => "United Kingdom",
            Country::Canada => "Canada",
        }
    }

    /// The fixed province/state list for this country
    pub fn provinces(self) -> &'static [&'static str] {
        match self {
            Country::Pakistan => &[
                "Punjab",
                "Sindh",
                "Khyber Pakhtunkhwa",
                "Balochistan",
                "Gilgit-Baltistan",
            ],
            Country::India => &[
                "Delhi",
                "Maharashtra",
                "Karnataka",
                "Tamil Nadu",
                "Uttar Pradesh",
            ],
            Country::UnitedStates => &["California", "Texas", "New York", "Florida", "Illinois"],
            Country::UnitedKingdom => &["England", "Scotland", "Wales", "Northern Ireland"],
            Country::Canada => &[
                "Ontario",
                "Quebec",
                "British Columbia",
                "Alberta",
                "Manitoba",
            ],
        }
    }

    pub fn has_province(self, province: &str) -> bool {
        self.provinces().contains(&province)
    }

    /// Next country in display order, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous country in display order, wrapping around
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Country {
    type Err = UnknownCountry;

    /// Case-insensitive match on the display label
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCountry(s.to_string()))
    }
}
