//! # LinkPlanner Core
//!
//! Core types, traits, and utilities for LinkPlanner.
//! Provides the geographic primitives shared by every crate, the error
//! hierarchy, and the event bus used to report domain changes.

pub mod error;
pub mod event_bus;
pub mod geo;

pub use error::{Error, GeoError, ModelError, Result};

pub use geo::{haversine_distance, interpolate, Interpolation, LatLng, EARTH_RADIUS_M};

// Re-export event bus for convenience
pub use event_bus::{
    AppEvent, ElevationEvent, EventBus, EventBusError, EventCategory, EventFilter,
    LinkEvent, LinkRejectReason, NoticeEvent, SelectionEvent, SubscriptionId, TowerEvent,
    DEFAULT_CHANNEL_CAPACITY,
};
