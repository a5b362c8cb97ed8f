//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable for logging/replay.

use serde::{Deserialize, Serialize};

use crate::geo::LatLng;

/// Root event enum for all application events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    /// Tower lifecycle
    Tower(TowerEvent),
    /// Link lifecycle
    Link(LinkEvent),
    /// Tower/link selection transitions
    Selection(SelectionEvent),
    /// Elevation lookups
    Elevation(ElevationEvent),
    /// Messages meant for the user
    Notice(NoticeEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Tower(_) => EventCategory::Tower,
            AppEvent::Link(_) => EventCategory::Link,
            AppEvent::Selection(_) => EventCategory::Selection,
            AppEvent::Elevation(_) => EventCategory::Elevation,
            AppEvent::Notice(_) => EventCategory::Notice,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Tower(e) => e.description(),
            AppEvent::Link(e) => e.description(),
            AppEvent::Selection(e) => e.description(),
            AppEvent::Elevation(e) => e.description(),
            AppEvent::Notice(e) => e.message().to_string(),
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Tower lifecycle events.
    Tower,
    /// Link lifecycle events.
    Link,
    /// Selection transitions.
    Selection,
    /// Elevation lookup events.
    Elevation,
    /// User-facing notices.
    Notice,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Tower => write!(f, "Tower"),
            EventCategory::Link => write!(f, "Link"),
            EventCategory::Selection => write!(f, "Selection"),
            EventCategory::Elevation => write!(f, "Elevation"),
            EventCategory::Notice => write!(f, "Notice"),
        }
    }
}

/// Tower lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TowerEvent {
    /// A tower was placed on the map.
    Added {
        /// New tower id.
        id: String,
        /// Where it was placed.
        position: LatLng,
        /// Initial frequency in GHz.
        frequency_ghz: f64,
    },
    /// A tower frequency was edited.
    FrequencyChanged {
        /// Tower id.
        id: String,
        /// Previous frequency in GHz.
        old: f64,
        /// New frequency in GHz.
        new: f64,
    },
    /// A tower was deleted.
    Removed {
        /// Tower id.
        id: String,
        /// Links removed along with it.
        cascaded_links: Vec<String>,
    },
}

impl TowerEvent {
    fn description(&self) -> String {
        match self {
            TowerEvent::Added {
                id,
                position,
                frequency_ghz,
            } => format!(
                "Tower {} added at ({:.5}, {:.5}) @ {} GHz",
                id, position.lat, position.lng, frequency_ghz
            ),
            TowerEvent::FrequencyChanged { id, old, new } => {
                format!("Tower {} frequency {} -> {} GHz", id, old, new)
            }
            TowerEvent::Removed { id, cascaded_links } => format!(
                "Tower {} removed ({} links cascaded)",
                id,
                cascaded_links.len()
            ),
        }
    }
}

/// Why a link request did not produce a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkRejectReason {
    /// One of the endpoints does not exist.
    MissingTower,
    /// Both endpoints are the same tower.
    SelfLink,
    /// Endpoint frequencies differ.
    FrequencyMismatch,
}

impl std::fmt::Display for LinkRejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkRejectReason::MissingTower => write!(f, "missing tower"),
            LinkRejectReason::SelfLink => write!(f, "self link"),
            LinkRejectReason::FrequencyMismatch => write!(f, "frequency mismatch"),
        }
    }
}

/// Link lifecycle events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LinkEvent {
    /// A link was created.
    Created {
        /// New link id.
        id: String,
        /// First endpoint.
        a: String,
        /// Second endpoint.
        b: String,
    },
    /// A link request was rejected.
    Rejected {
        /// First endpoint requested.
        a: String,
        /// Second endpoint requested.
        b: String,
        /// Rejection reason.
        reason: LinkRejectReason,
    },
    /// A link was deleted.
    Removed {
        /// Link id.
        id: String,
    },
}

impl LinkEvent {
    fn description(&self) -> String {
        match self {
            LinkEvent::Created { id, a, b } => format!("Link {} created ({} <-> {})", id, a, b),
            LinkEvent::Rejected { a, b, reason } => {
                format!("Link {} <-> {} rejected: {}", a, b, reason)
            }
            LinkEvent::Removed { id } => format!("Link {} removed", id),
        }
    }
}

/// Selection transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SelectionEvent {
    /// A tower is pending as the first end of a link.
    TowerSelected {
        /// Tower id.
        id: String,
    },
    /// The pending tower was released.
    TowerCleared,
    /// A link was selected and its Fresnel envelope shown.
    LinkSelected {
        /// Link id.
        id: String,
    },
    /// The link selection was released and the envelope hidden.
    LinkCleared,
}

impl SelectionEvent {
    fn description(&self) -> String {
        match self {
            SelectionEvent::TowerSelected { id } => format!("Tower {} selected", id),
            SelectionEvent::TowerCleared => "Tower selection cleared".to_string(),
            SelectionEvent::LinkSelected { id } => format!("Link {} selected", id),
            SelectionEvent::LinkCleared => "Link selection cleared".to_string(),
        }
    }
}

/// Elevation lookup events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ElevationEvent {
    /// A profile was requested for a link.
    Requested {
        /// Link id.
        link_id: String,
        /// Request token.
        token: u64,
        /// Number of sample points.
        points: usize,
    },
    /// A profile arrived and was accepted.
    ProfileReady {
        /// Link id.
        link_id: String,
        /// Request token.
        token: u64,
    },
    /// A profile arrived after the selection had moved on.
    Discarded {
        /// Link id the response was for.
        link_id: String,
        /// Request token.
        token: u64,
    },
}

impl ElevationEvent {
    fn description(&self) -> String {
        match self {
            ElevationEvent::Requested {
                link_id,
                token,
                points,
            } => format!(
                "Elevation #{} requested for link {} ({} points)",
                token, link_id, points
            ),
            ElevationEvent::ProfileReady { link_id, token } => {
                format!("Elevation #{} ready for link {}", token, link_id)
            }
            ElevationEvent::Discarded { link_id, token } => {
                format!("Elevation #{} for link {} discarded as stale", token, link_id)
            }
        }
    }
}

/// User-facing notices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NoticeEvent {
    /// Warning shown to the user.
    Warning {
        /// Message text.
        message: String,
    },
}

impl NoticeEvent {
    /// The message text.
    pub fn message(&self) -> &str {
        match self {
            NoticeEvent::Warning { message } => message,
        }
    }
}
