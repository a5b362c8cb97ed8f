//! LinkPlanner Settings Crate
//!
//! Handles application configuration: map defaults, tower defaults, Fresnel
//! sampling, the elevation endpoint and overlay styling.

pub mod config;
pub mod error;

pub use config::{
    default_config_path, Config, ElevationSettings, FresnelSettings, MapSettings, StyleSettings,
    TowerSettings,
};
pub use error::{ConfigError, SettingsError, SettingsResult};
