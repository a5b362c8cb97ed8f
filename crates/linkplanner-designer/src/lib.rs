//! # LinkPlanner Designer
//!
//! The editing core of LinkPlanner: towers placed on a map, links between
//! towers that share a frequency, and the first Fresnel zone envelope of
//! the selected link.
//!
//! ## Architecture
//!
//! ```text
//! InputEvent (from the map surface)
//!   └── PlannerCommand
//!         └── PlannerState::dispatch
//!               ├── NetworkModel (towers, links)
//!               ├── SelectionManager (tower pending / link selected)
//!               └── FresnelPolygonBuilder (on link selection)
//!
//! MapScene::project(&PlannerState)  →  MapSurface::render
//! ```
//!
//! Rendering never mutates anything: after each command the caller projects
//! the state into a [`MapScene`] and hands it to its [`MapSurface`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use linkplanner_designer::{InputEvent, PlannerState, MapScene};
//!
//! let mut state = PlannerState::new();
//! let a = state.add_tower(0.0, 0.0).unwrap().id;
//! let b = state.add_tower(0.0, 1.0).unwrap().id;
//! state.dispatch(InputEvent::TowerClick { id: a }.into_command().unwrap());
//! state.dispatch(InputEvent::TowerClick { id: b }.into_command().unwrap());
//! ```

pub mod commands;
pub mod fresnel;
pub mod fresnel_polygon;
pub mod model;
pub mod planner_state;
pub mod renderer;
pub mod selection_manager;

pub use commands::{InputEvent, PlannerCommand};
pub use fresnel::{fresnel_radius, FresnelCalculator, SPEED_OF_LIGHT_M_S};
pub use fresnel_polygon::{FresnelEnvelope, FresnelPolygonBuilder, DEFAULT_SAMPLES};
pub use model::{Link, NetworkModel, Tower, DEFAULT_FREQUENCY_GHZ};
pub use planner_state::{DispatchOutcome, LinkOutcome, LinkRejection, PlannerState};
pub use renderer::{
    FresnelOverlay, LinkLine, MapScene, MapSurface, StatusPanel, TowerMarker, TowerPopup,
};
pub use selection_manager::{LinkClick, LinkSelection, SelectionManager, TowerClick, TowerSelection};
