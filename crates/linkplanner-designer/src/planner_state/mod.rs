//! Planner state: the single owner of towers, links and selection.
//!
//! This module is split into submodules:
//! - `towers`: tower placement, frequency edits and deletion
//! - `links`: link creation rules and deletion
//! - `selection`: click handling, Fresnel envelope and elevation profile
//!
//! Everything is mutated synchronously through `&mut self`. The only async
//! work, the elevation lookup, is handed back to the caller as an
//! [`ElevationRequest`] and its result re-enters through
//! [`PlannerState::apply_elevation_profile`].

mod links;
mod selection;
mod towers;

pub use links::{LinkOutcome, LinkRejection};

use std::sync::Arc;

use linkplanner_core::{AppEvent, EventBus, NoticeEvent, Result};
use linkplanner_elevation::{ElevationRequest, ElevationResponse, ElevationTracker};
use linkplanner_settings::Config;

use crate::commands::PlannerCommand;
use crate::fresnel_polygon::{FresnelEnvelope, FresnelPolygonBuilder};
use crate::model::{Link, NetworkModel, Tower, DEFAULT_FREQUENCY_GHZ};
use crate::selection_manager::SelectionManager;

/// Side effects of one dispatched command that the caller must act on.
#[derive(Debug, Clone, Default)]
pub struct DispatchOutcome {
    /// Messages for the user, e.g. the frequency mismatch warning.
    pub notices: Vec<NoticeEvent>,
    /// Elevation lookup to run in the background.
    pub elevation_request: Option<ElevationRequest>,
    /// Result of a link attempt, if the command made one.
    pub link_attempt: Option<std::result::Result<LinkOutcome, LinkRejection>>,
}

impl DispatchOutcome {
    fn record_link_attempt(&mut self, attempt: std::result::Result<LinkOutcome, LinkRejection>) {
        if let Err(rejection) = &attempt {
            if rejection.is_user_visible() {
                self.notices.push(NoticeEvent::Warning {
                    message: rejection.to_string(),
                });
            }
        }
        self.link_attempt = Some(attempt);
    }

    /// Texts of the warnings to show.
    pub fn warnings(&self) -> impl Iterator<Item = &str> {
        self.notices.iter().map(|n| n.message())
    }
}

/// Towers, links, selection and the envelope of the selected link.
#[derive(Debug)]
pub struct PlannerState {
    model: NetworkModel,
    selection: SelectionManager,
    builder: FresnelPolygonBuilder,
    envelope: Option<FresnelEnvelope>,
    elevation: ElevationTracker,
    elevation_enabled: bool,
    elevation_profile: Option<ElevationResponse>,
    default_frequency_ghz: f64,
    events: Arc<EventBus>,
}

impl Default for PlannerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlannerState {
    /// Empty planner with built-in defaults.
    pub fn new() -> Self {
        Self {
            model: NetworkModel::new(),
            selection: SelectionManager::new(),
            builder: FresnelPolygonBuilder::default(),
            envelope: None,
            elevation: ElevationTracker::new(),
            elevation_enabled: true,
            elevation_profile: None,
            default_frequency_ghz: DEFAULT_FREQUENCY_GHZ,
            events: Arc::new(EventBus::new()),
        }
    }

    /// Empty planner using the tower, Fresnel and elevation settings.
    pub fn from_config(config: &Config) -> Result<Self> {
        let builder = FresnelPolygonBuilder::new(config.fresnel.samples)?;
        Ok(Self {
            builder,
            elevation_enabled: config.elevation.enabled,
            default_frequency_ghz: config.towers.default_frequency_ghz,
            ..Self::new()
        })
    }

    /// Publishes state changes on `events` instead of a private bus.
    pub fn with_event_bus(mut self, events: Arc<EventBus>) -> Self {
        self.events = events;
        self
    }

    /// Applies one command.
    pub fn dispatch(&mut self, command: PlannerCommand) -> DispatchOutcome {
        tracing::debug!("Dispatch: {}", command.name());
        let mut outcome = DispatchOutcome::default();

        match command {
            PlannerCommand::AddTower { at } => {
                if let Err(e) = self.add_tower(at.lat, at.lng) {
                    tracing::debug!("Add tower ignored: {}", e);
                }
            }
            PlannerCommand::SelectTower { id } => {
                if let Some(attempt) = self.click_tower(&id) {
                    outcome.record_link_attempt(attempt);
                }
            }
            PlannerCommand::CreateLink { a, b } => {
                outcome.record_link_attempt(self.try_create_link(&a, &b));
            }
            PlannerCommand::SelectLink { id } => {
                outcome.elevation_request = self.click_link(&id);
            }
            PlannerCommand::DeleteTower { id } => {
                if let Err(e) = self.delete_tower(&id) {
                    tracing::debug!("Delete tower ignored: {}", e);
                }
            }
            PlannerCommand::DeleteLink { id } => {
                if let Err(e) = self.delete_link(&id) {
                    tracing::debug!("Delete link ignored: {}", e);
                }
            }
            PlannerCommand::UpdateFrequency { id, frequency_ghz } => {
                if let Err(e) = self.update_tower_frequency(&id, frequency_ghz) {
                    tracing::debug!("Frequency update ignored: {}", e);
                }
            }
            PlannerCommand::ClearSelection => self.clear_selection(),
        }

        outcome
    }

    fn emit(&self, event: AppEvent) {
        // Nobody listening is fine.
        let _ = self.events.publish(event);
    }

    pub fn towers(&self) -> impl Iterator<Item = &Tower> {
        self.model.towers()
    }

    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.model.links()
    }

    pub fn tower(&self, id: &str) -> Option<&Tower> {
        self.model.tower(id)
    }

    pub fn link(&self, id: &str) -> Option<&Link> {
        self.model.link(id)
    }

    pub fn link_between(&self, a: &str, b: &str) -> Option<&Link> {
        self.model.link_between(a, b)
    }

    pub fn tower_count(&self) -> usize {
        self.model.tower_count()
    }

    pub fn link_count(&self) -> usize {
        self.model.link_count()
    }

    pub fn model(&self) -> &NetworkModel {
        &self.model
    }

    pub fn selection(&self) -> &SelectionManager {
        &self.selection
    }

    pub fn selected_tower(&self) -> Option<&str> {
        self.selection.selected_tower()
    }

    pub fn selected_link(&self) -> Option<&str> {
        self.selection.selected_link()
    }

    /// Envelope of the selected link, if one is selected.
    pub fn envelope(&self) -> Option<&FresnelEnvelope> {
        self.envelope.as_ref()
    }

    /// Ground elevations along the selected link, once they have arrived.
    pub fn elevation_profile(&self) -> Option<&[f64]> {
        self.elevation_profile
            .as_ref()
            .map(|profile| profile.elevations.as_slice())
    }

    pub fn default_frequency_ghz(&self) -> f64 {
        self.default_frequency_ghz
    }

    pub fn event_bus(&self) -> &Arc<EventBus> {
        &self.events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkplanner_core::LatLng;

    #[test]
    fn test_from_config_uses_settings() {
        let mut config = Config::default();
        config.towers.default_frequency_ghz = 2.4;
        config.fresnel.samples = 10;
        config.elevation.enabled = false;

        let mut state = PlannerState::from_config(&config).unwrap();
        assert_eq!(state.default_frequency_ghz(), 2.4);
        assert_eq!(state.add_tower(0.0, 0.0).unwrap().frequency_ghz, 2.4);
        assert_eq!(state.builder.samples(), 10);
        assert!(!state.elevation_enabled);
    }

    #[test]
    fn test_from_config_rejects_zero_samples() {
        let mut config = Config::default();
        config.fresnel.samples = 0;
        assert!(PlannerState::from_config(&config).is_err());
    }

    #[test]
    fn test_dispatch_add_tower() {
        let mut state = PlannerState::new();
        let outcome = state.dispatch(PlannerCommand::AddTower {
            at: LatLng::new(12.0, 77.0),
        });
        assert!(outcome.notices.is_empty());
        assert_eq!(state.tower_count(), 1);
        let tower = state.towers().next().unwrap();
        assert_eq!(tower.position, LatLng::new(12.0, 77.0));
        assert_eq!(tower.frequency_ghz, DEFAULT_FREQUENCY_GHZ);
    }

    #[test]
    fn test_dispatch_add_tower_out_of_range() {
        let mut state = PlannerState::new();
        let outcome = state.dispatch(PlannerCommand::AddTower {
            at: LatLng::new(95.0, 400.0),
        });
        assert!(outcome.notices.is_empty());
        assert_eq!(state.tower_count(), 0);
    }

    #[test]
    fn test_dispatch_unknown_ids_are_noops() {
        let mut state = PlannerState::new();
        state.add_tower(0.0, 0.0).unwrap();
        for command in [
            PlannerCommand::SelectTower { id: "x".into() },
            PlannerCommand::SelectLink { id: "x".into() },
            PlannerCommand::DeleteTower { id: "x".into() },
            PlannerCommand::DeleteLink { id: "x".into() },
            PlannerCommand::UpdateFrequency {
                id: "x".into(),
                frequency_ghz: 2.4,
            },
        ] {
            let outcome = state.dispatch(command);
            assert!(outcome.notices.is_empty());
            assert!(outcome.elevation_request.is_none());
        }
        assert_eq!(state.tower_count(), 1);
        assert_eq!(state.selected_tower(), None);
    }

    #[test]
    fn test_dispatch_mismatch_produces_warning() {
        let mut state = PlannerState::new();
        let a = state.add_tower(0.0, 0.0).unwrap().id;
        let b = state.add_tower(0.0, 1.0).unwrap().id;
        state.update_tower_frequency(&b, 2.4).unwrap();

        state.dispatch(PlannerCommand::SelectTower { id: a });
        let outcome = state.dispatch(PlannerCommand::SelectTower { id: b });

        let warnings: Vec<&str> = outcome.warnings().collect();
        assert_eq!(warnings, vec!["Cannot connect towers with different frequencies."]);
        assert!(matches!(
            outcome.link_attempt,
            Some(Err(LinkRejection::FrequencyMismatch { .. }))
        ));
        assert_eq!(state.link_count(), 0);
        assert_eq!(state.selected_tower(), None);
    }

    #[test]
    fn test_events_reach_injected_bus() {
        use linkplanner_core::{EventCategory, EventFilter};
        use std::sync::atomic::{AtomicUsize, Ordering};

        let bus = Arc::new(EventBus::new());
        let towers = Arc::new(AtomicUsize::new(0));
        let counter = towers.clone();
        bus.subscribe(EventFilter::Categories(vec![EventCategory::Tower]), move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut state = PlannerState::new().with_event_bus(bus.clone());
        let id = state.add_tower(0.0, 0.0).unwrap().id;
        state.delete_tower(&id).unwrap();

        assert_eq!(towers.load(Ordering::SeqCst), 2);
        assert!(Arc::ptr_eq(state.event_bus(), &bus));
    }
}
