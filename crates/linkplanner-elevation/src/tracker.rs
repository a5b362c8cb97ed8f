//! Request bookkeeping for fire-and-forget elevation lookups.
//!
//! Every lookup gets a token. Only the response carrying the most recent
//! token for the link that is still selected is accepted; anything else is
//! stale and dropped.

use linkplanner_core::LatLng;

/// A pending elevation lookup for one link's sample points.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationRequest {
    pub token: u64,
    pub link_id: String,
    pub points: Vec<LatLng>,
}

impl ElevationRequest {
    /// Pairs the looked-up elevations with this request's token.
    pub fn into_response(self, elevations: Vec<f64>) -> ElevationResponse {
        ElevationResponse {
            token: self.token,
            link_id: self.link_id,
            elevations,
        }
    }
}

/// A completed lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct ElevationResponse {
    pub token: u64,
    pub link_id: String,
    pub elevations: Vec<f64>,
}

/// Issues request tokens and recognises stale responses.
#[derive(Debug, Clone, Default)]
pub struct ElevationTracker {
    next_token: u64,
    current: Option<(String, u64)>,
}

impl ElevationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new lookup for `link_id`, superseding any earlier one.
    pub fn issue(&mut self, link_id: &str, points: Vec<LatLng>) -> ElevationRequest {
        self.next_token += 1;
        let token = self.next_token;
        self.current = Some((link_id.to_string(), token));
        ElevationRequest {
            token,
            link_id: link_id.to_string(),
            points,
        }
    }

    /// Forgets the outstanding lookup; later responses will be stale.
    pub fn invalidate(&mut self) {
        self.current = None;
    }

    /// Whether `response` answers the outstanding lookup.
    pub fn is_current(&self, response: &ElevationResponse) -> bool {
        matches!(
            &self.current,
            Some((link_id, token)) if *link_id == response.link_id && *token == response.token
        )
    }
}
