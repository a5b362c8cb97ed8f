//! # LinkPlanner Elevation
//!
//! Elevation lookups for sampled link paths.
//!
//! The lookup itself is an external collaborator reached through the
//! [`ElevationService`] trait so callers can swap the HTTP client for a
//! deterministic stub. Lookups are best-effort: [`fetch_elevations`] turns
//! any failure into a zero profile of the same length, and
//! [`ElevationTracker`] lets the caller drop responses that arrive after
//! the selection that asked for them has changed.

pub mod error;
pub mod open_elevation;
pub mod service;
pub mod tracker;

pub use error::{ElevationError, ElevationResult};
pub use open_elevation::{OpenElevationClient, OpenElevationConfig, DEFAULT_OPEN_ELEVATION_URL};
pub use service::{fetch_elevations, ElevationService, StaticElevation, UnavailableElevation};
pub use tracker::{ElevationRequest, ElevationResponse, ElevationTracker};
