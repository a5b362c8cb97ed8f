//! Error handling for LinkPlanner
//!
//! Provides error types for the layers that can actually fail:
//! - Geo errors (invalid sampling requests, out-of-range coordinates)
//! - Model errors (lookups and invariants of the tower/link graph)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Geographic computation error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeoError {
    /// Interpolation needs at least one interval
    #[error("Invalid sample count {count}: at least one interval is required")]
    InvalidSampleCount {
        /// The rejected interval count.
        count: usize,
    },

    /// Coordinate outside the valid latitude/longitude range
    #[error("Coordinate out of range: lat {lat}, lng {lng}")]
    CoordinateOutOfRange {
        /// Latitude in degrees.
        lat: f64,
        /// Longitude in degrees.
        lng: f64,
    },
}

/// Tower/link model error type
///
/// Represents lookups against ids that no longer exist and attempts to
/// break the relational invariants of the model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Tower id is unknown
    #[error("Tower not found: {id}")]
    TowerNotFound {
        /// The missing tower id.
        id: String,
    },

    /// Link id is unknown
    #[error("Link not found: {id}")]
    LinkNotFound {
        /// The missing link id.
        id: String,
    },

    /// Frequency is not a positive finite number
    #[error("Invalid frequency {value} GHz")]
    InvalidFrequency {
        /// The rejected value.
        value: f64,
    },
}

/// Main error type for LinkPlanner
///
/// A unified error type that can represent any error from the core layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Geo error
    #[error(transparent)]
    Geo(#[from] GeoError),

    /// Model error
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a geo error
    pub fn is_geo_error(&self) -> bool {
        matches!(self, Error::Geo(_))
    }

    /// Check if this is a model error
    pub fn is_model_error(&self) -> bool {
        matches!(self, Error::Model(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
