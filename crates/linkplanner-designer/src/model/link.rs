use serde::{Deserialize, Serialize};

/// A point-to-point link between two distinct towers.
///
/// The pair is unordered for identity purposes; `a` is the tower that was
/// selected first and is the authoritative end for the Fresnel frequency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: String,
    pub a: String,
    pub b: String,
}

impl Link {
    /// Creates a link with a fresh id.
    pub fn new(a: impl Into<String>, b: impl Into<String>) -> Self {
        Self {
            id: super::generate_id(),
            a: a.into(),
            b: b.into(),
        }
    }

    /// Whether `tower_id` is one of the endpoints.
    pub fn touches(&self, tower_id: &str) -> bool {
        self.a == tower_id || self.b == tower_id
    }

    /// Whether this link joins `x` and `y`, in either order.
    pub fn connects(&self, x: &str, y: &str) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }
}
