use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::BrevetError;

/// Nominal length of an ACP-sanctioned brevet.
///
/// Serialized as the plain number of kilometres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum BrevetDistance {
    Km200,
    Km300,
    Km400,
    Km600,
    Km1000,
}

impl BrevetDistance {
    pub const ALL: [BrevetDistance; 5] = [
        BrevetDistance::Km200,
        BrevetDistance::Km300,
        BrevetDistance::Km400,
        BrevetDistance::Km600,
        BrevetDistance::Km1000,
    ];

    pub const fn km(self) -> u32 {
        match self {
            BrevetDistance::Km200 => 200,
            BrevetDistance::Km300 => 300,
            BrevetDistance::Km400 => 400,
            BrevetDistance::Km600 => 600,
            BrevetDistance::Km1000 => 1000,
        }
    }

    pub fn km_f64(self) -> f64 {
        f64::from(self.km())
    }

    /// Looks up the brevet class for a nominal distance given in kilometres.
    pub fn from_km(km: f64) -> Result<Self, BrevetError> {
        Self::ALL
            .into_iter()
            .find(|brevet| brevet.km_f64() == km)
            .ok_or(BrevetError::InvalidBrevetClass(km))
    }
}

impl TryFrom<u32> for BrevetDistance {
    type Error = BrevetError;

    fn try_from(km: u32) -> Result<Self, Self::Error> {
        Self::from_km(f64::from(km))
    }
}

impl From<BrevetDistance> for u32 {
    fn from(brevet: BrevetDistance) -> Self {
        brevet.km()
    }
}

impl fmt::Display for BrevetDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} km", self.km())
    }
}
