//! Commands accepted by [`PlannerState::dispatch`](crate::PlannerState::dispatch)
//! and the raw input events a map surface produces.

use linkplanner_core::LatLng;
use serde::{Deserialize, Serialize};

/// A normalized planner operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlannerCommand {
    /// Place a tower with the default frequency.
    AddTower { at: LatLng },
    /// Feed a tower click into the tower selection machine.
    SelectTower { id: String },
    /// Try to link two towers directly.
    CreateLink { a: String, b: String },
    /// Feed a link click into the link selection machine.
    SelectLink { id: String },
    DeleteTower { id: String },
    DeleteLink { id: String },
    UpdateFrequency { id: String, frequency_ghz: f64 },
    /// Drop the pending tower.
    ClearSelection,
}

impl PlannerCommand {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            PlannerCommand::AddTower { .. } => "Add Tower",
            PlannerCommand::SelectTower { .. } => "Select Tower",
            PlannerCommand::CreateLink { .. } => "Create Link",
            PlannerCommand::SelectLink { .. } => "Select Link",
            PlannerCommand::DeleteTower { .. } => "Delete Tower",
            PlannerCommand::DeleteLink { .. } => "Delete Link",
            PlannerCommand::UpdateFrequency { .. } => "Update Frequency",
            PlannerCommand::ClearSelection => "Clear Selection",
        }
    }
}

/// What the map surface reports.
///
/// A click on a marker or a line is reported only as that click; the
/// surface never also reports a map click for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    MapClick { lat: f64, lng: f64 },
    TowerClick { id: String },
    LinkClick { id: String },
    /// Raw text from the frequency field of a tower popup.
    FrequencyInput { id: String, value: String },
    DeleteTowerAction { id: String },
    CancelSelection,
}

impl InputEvent {
    /// Normalizes the event. Returns `None` for input that should be ignored.
    pub fn into_command(self) -> Option<PlannerCommand> {
        match self {
            InputEvent::MapClick { lat, lng } => match LatLng::try_new(lat, lng) {
                Ok(at) => Some(PlannerCommand::AddTower { at }),
                Err(e) => {
                    tracing::warn!("Ignoring map click: {}", e);
                    None
                }
            },
            InputEvent::TowerClick { id } => Some(PlannerCommand::SelectTower { id }),
            InputEvent::LinkClick { id } => Some(PlannerCommand::SelectLink { id }),
            InputEvent::FrequencyInput { id, value } => match parse_frequency(&value) {
                Some(frequency_ghz) => Some(PlannerCommand::UpdateFrequency { id, frequency_ghz }),
                None => {
                    tracing::warn!("Ignoring frequency {:?} for tower {}", value, id);
                    None
                }
            },
            InputEvent::DeleteTowerAction { id } => Some(PlannerCommand::DeleteTower { id }),
            InputEvent::CancelSelection => Some(PlannerCommand::ClearSelection),
        }
    }
}

/// Positive finite GHz value, or `None`.
pub fn parse_frequency(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite() && *f > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_click_adds_tower() {
        let cmd = InputEvent::MapClick { lat: 1.5, lng: 2.5 }.into_command();
        assert_eq!(
            cmd,
            Some(PlannerCommand::AddTower {
                at: LatLng::new(1.5, 2.5)
            })
        );
    }

    #[test]
    fn test_out_of_range_map_click_is_ignored() {
        for (lat, lng) in [(95.0, 400.0), (-90.5, 0.0), (0.0, 180.5), (f64::NAN, 0.0)] {
            assert_eq!(
                InputEvent::MapClick { lat, lng }.into_command(),
                None,
                "({}, {}) should be ignored",
                lat,
                lng
            );
        }
        assert!(InputEvent::MapClick { lat: 90.0, lng: -180.0 }
            .into_command()
            .is_some());
    }

    #[test]
    fn test_frequency_input_parsing() {
        let ok = InputEvent::FrequencyInput {
            id: "t".to_string(),
            value: " 5.8 ".to_string(),
        };
        assert_eq!(
            ok.into_command(),
            Some(PlannerCommand::UpdateFrequency {
                id: "t".to_string(),
                frequency_ghz: 5.8
            })
        );

        for bad in ["", "abc", "0", "-2.4", "NaN", "inf"] {
            let event = InputEvent::FrequencyInput {
                id: "t".to_string(),
                value: bad.to_string(),
            };
            assert_eq!(event.into_command(), None, "{:?} should be ignored", bad);
        }
    }

    #[test]
    fn test_cancel_maps_to_clear() {
        assert_eq!(
            InputEvent::CancelSelection.into_command(),
            Some(PlannerCommand::ClearSelection)
        );
    }

    #[test]
    fn test_input_event_json() {
        let event: InputEvent =
            serde_json::from_str(r#"{"type":"tower_click","id":"abc"}"#).unwrap();
        assert_eq!(event, InputEvent::TowerClick { id: "abc".to_string() });

        let event: InputEvent = serde_json::from_str(r#"{"type":"cancel_selection"}"#).unwrap();
        assert_eq!(event, InputEvent::CancelSelection);

        let event: InputEvent =
            serde_json::from_str(r#"{"type":"map_click","lat":10.0,"lng":20.0}"#).unwrap();
        assert_eq!(event, InputEvent::MapClick { lat: 10.0, lng: 20.0 });
    }

    #[test]
    fn test_command_names() {
        assert_eq!(PlannerCommand::ClearSelection.name(), "Clear Selection");
        assert_eq!(
            PlannerCommand::DeleteLink { id: String::new() }.name(),
            "Delete Link"
        );
    }
}
