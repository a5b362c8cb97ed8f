use linkplanner_core::LatLng;
use serde::{Deserialize, Serialize};

/// Frequency given to a tower when nothing else is configured, GHz.
pub const DEFAULT_FREQUENCY_GHZ: f64 = 5.0;

/// A radio tower placed on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tower {
    pub id: String,
    pub position: LatLng,
    pub frequency_ghz: f64,
}

impl Tower {
    /// Creates a tower with a fresh id.
    pub fn new(position: LatLng, frequency_ghz: f64) -> Self {
        Self {
            id: super::generate_id(),
            position,
            frequency_ghz,
        }
    }

    /// Whether a link to `other` is allowed by frequency.
    ///
    /// Exact comparison: 5.0 and 5.0000001 do not match.
    pub fn shares_frequency_with(&self, other: &Tower) -> bool {
        self.frequency_ghz == other.frequency_ghz
    }
}
