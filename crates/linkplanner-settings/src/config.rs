//! Configuration for LinkPlanner
//!
//! Configuration is organized into logical sections:
//! - Map view defaults (center, zoom, tiles)
//! - Tower defaults (frequency)
//! - Fresnel envelope sampling
//! - Elevation lookup endpoint
//! - Overlay styles
//!
//! Files may be JSON or TOML; the extension decides.

use linkplanner_core::LatLng;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, SettingsError, SettingsResult};

/// Initial map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapSettings {
    /// Latitude of the initial map center
    pub center_lat: f64,
    /// Longitude of the initial map center
    pub center_lng: f64,
    /// Initial zoom level
    pub zoom: u8,
    /// Tile URL template handed to the map surface
    pub tile_url: String,
    /// Attribution shown next to the tiles
    pub attribution: String,
}

impl MapSettings {
    /// The configured center as a coordinate.
    pub fn center(&self) -> LatLng {
        LatLng::new(self.center_lat, self.center_lng)
    }
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            center_lat: 20.5937,
            center_lng: 78.9629,
            zoom: 5,
            tile_url: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            attribution: "OpenStreetMap contributors".to_string(),
        }
    }
}

/// Defaults for newly placed towers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TowerSettings {
    /// Frequency assigned to a new tower, in GHz
    pub default_frequency_ghz: f64,
}

impl Default for TowerSettings {
    fn default() -> Self {
        Self {
            default_frequency_ghz: 5.0,
        }
    }
}

/// Fresnel envelope sampling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FresnelSettings {
    /// Number of intervals the link path is split into
    pub samples: usize,
}

impl Default for FresnelSettings {
    fn default() -> Self {
        Self { samples: 50 }
    }
}

/// Elevation lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevationSettings {
    /// Whether elevation profiles are requested at all
    pub enabled: bool,
    /// Open-Elevation compatible lookup endpoint
    pub url: String,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ElevationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            url: "https://api.open-elevation.com/api/v1/lookup".to_string(),
            timeout_ms: 10_000,
        }
    }
}

/// Overlay colors and stroke widths
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleSettings {
    pub tower_fill: String,
    pub tower_selected_fill: String,
    pub tower_stroke: String,
    pub tower_radius_px: u32,
    pub link_color: String,
    pub link_selected_color: String,
    pub fresnel_stroke: String,
    pub fresnel_fill: String,
    pub fresnel_weight: u32,
}

impl Default for StyleSettings {
    fn default() -> Self {
        Self {
            tower_fill: "#2b8cff".to_string(),
            tower_selected_fill: "#ffa500".to_string(),
            tower_stroke: "#fff".to_string(),
            tower_radius_px: 10,
            link_color: "blue".to_string(),
            link_selected_color: "red".to_string(),
            fresnel_stroke: "red".to_string(),
            fresnel_fill: "rgba(255,0,0,0.2)".to_string(),
            fresnel_weight: 1,
        }
    }
}

/// Complete application configuration
///
/// Every section has defaults, so a file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub map: MapSettings,
    pub towers: TowerSettings,
    pub fresnel: FresnelSettings,
    pub elevation: ElevationSettings,
    pub styles: StyleSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat {
            extension: other.unwrap_or("").to_string(),
        }
        .into()),
    }
}

/// Platform config location: `<config dir>/linkplanner/config.toml`.
pub fn default_config_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("linkplanner").join("config.toml"))
        .ok_or_else(|| ConfigError::NoConfigDir(std::env::consts::OS.to_string()).into())
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::read(path, e))?;

        let config: Self = match format {
            Format::Json => {
                serde_json::from_str(&content).map_err(|source| SettingsError::ParseJson {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            Format::Toml => toml::from_str(&content).map_err(|source| SettingsError::ParseToml {
                path: path.to_path_buf(),
                source,
            })?,
        };

        config.validate()?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if it exists, otherwise fall back to defaults.
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match format_of(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| SettingsError::write(path, e))?;
            }
        }
        std::fs::write(path, content).map_err(|e| SettingsError::write(path, e))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if !self.map.center().is_valid() {
            return Err(SettingsError::invalid(
                "map.center",
                "latitude must be within -90..90 and longitude within -180..180",
            ));
        }

        if self.map.zoom > 22 {
            return Err(SettingsError::invalid("map.zoom", "must be between 0 and 22"));
        }

        let freq = self.towers.default_frequency_ghz;
        if !(freq.is_finite() && freq > 0.0) {
            return Err(SettingsError::invalid(
                "towers.default_frequency_ghz",
                "must be > 0",
            ));
        }

        if self.fresnel.samples == 0 {
            return Err(SettingsError::invalid(
                "fresnel.samples",
                "must be at least 1",
            ));
        }

        if self.elevation.enabled {
            if self.elevation.url.trim().is_empty() {
                return Err(SettingsError::invalid(
                    "elevation.url",
                    "must not be empty when elevation is enabled",
                ));
            }
            if self.elevation.timeout_ms == 0 {
                return Err(SettingsError::invalid("elevation.timeout_ms", "must be > 0"));
            }
        }

        Ok(())
    }
}
