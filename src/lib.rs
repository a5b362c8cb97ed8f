//! # LinkPlanner
//!
//! Map-based planning of point-to-point radio links:
//! - Place towers, each with an operating frequency
//! - Link towers that share a frequency
//! - Show the first Fresnel zone envelope of the selected link
//! - Fetch the ground elevation profile along the link in the background
//!
//! ## Architecture
//!
//! LinkPlanner is organized as a workspace with multiple crates:
//!
//! 1. **linkplanner-core** - Geo math, error types, event bus
//! 2. **linkplanner-elevation** - Elevation lookup service and request tracking
//! 3. **linkplanner-settings** - Configuration files
//! 4. **linkplanner-designer** - Tower/link model, selection, Fresnel envelopes, scene projection
//! 5. **linkplanner** - Headless JSON-lines session binary that integrates all crates

pub mod session;

pub use linkplanner_designer as designer;
pub use linkplanner_elevation as elevation;
pub use linkplanner_settings as settings;

pub use linkplanner_core::{
    haversine_distance, interpolate, AppEvent, Error, EventBus, GeoError, LatLng, ModelError,
    Result,
};

pub use linkplanner_designer::{
    fresnel_radius, FresnelEnvelope, InputEvent, MapScene, MapSurface, PlannerCommand,
    PlannerState,
};

pub use linkplanner_settings::Config;

pub use session::{JsonLinesSurface, Session, SessionSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Pretty console output on stderr (stdout carries scenes)
/// - RUST_LOG environment variable support, INFO by default
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(tracing::Level::INFO.as_str()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .pretty();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
