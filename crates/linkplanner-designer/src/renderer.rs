//! Projection of the planner state into drawable map layers.
//!
//! [`MapScene::project`] is a pure function of the state and the styles;
//! whatever draws the map implements [`MapSurface`] and redraws from the
//! scene after every command.

use linkplanner_core::{haversine_distance, LatLng};
use linkplanner_settings::StyleSettings;
use serde::{Deserialize, Serialize};

use crate::model::Tower;
use crate::planner_state::PlannerState;

/// Marker outline width in pixels.
const TOWER_STROKE_WEIGHT: u32 = 2;

/// Step of the frequency field in the tower popup, GHz.
const FREQUENCY_STEP_GHZ: f64 = 0.1;

/// Something that can show a [`MapScene`] and tell the user things.
pub trait MapSurface {
    /// Redraws everything from `scene`.
    fn render(&mut self, scene: &MapScene);

    /// Shows a warning to the user.
    fn warn(&mut self, message: &str);
}

/// Contents of the popup opened from a tower marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerPopup {
    pub title: String,
    /// `Lat: x.xxxxx, Lng: y.yyyyy`
    pub coordinates: String,
    pub frequency_ghz: f64,
    pub frequency_step: f64,
    pub delete_label: String,
}

impl TowerPopup {
    fn for_tower(tower: &Tower) -> Self {
        Self {
            title: "Tower".to_string(),
            coordinates: format!(
                "Lat: {:.5}, Lng: {:.5}",
                tower.position.lat, tower.position.lng
            ),
            frequency_ghz: tower.frequency_ghz,
            frequency_step: FREQUENCY_STEP_GHZ,
            delete_label: "Delete".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TowerMarker {
    pub id: String,
    pub position: LatLng,
    pub radius_px: u32,
    pub fill_color: String,
    pub stroke_color: String,
    pub stroke_weight: u32,
    pub selected: bool,
    pub popup: TowerPopup,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkLine {
    pub id: String,
    pub from: LatLng,
    pub to: LatLng,
    pub color: String,
    pub selected: bool,
    /// `Dist: {km} km, Freq: {f} GHz`, from the current endpoints.
    pub tooltip: String,
}

/// Envelope polygon of the selected link. Never receives clicks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FresnelOverlay {
    pub link_id: String,
    pub ring: Vec<LatLng>,
    pub stroke_color: String,
    pub fill_color: String,
    pub weight: u32,
    pub interactive: bool,
}

/// The selection status line and its cancel button.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusPanel {
    pub selected_tower: Option<String>,
    pub text: String,
    pub cancel_enabled: bool,
}

impl StatusPanel {
    fn new(selected_tower: Option<&str>) -> Self {
        Self {
            text: format!("Selected Tower: {}", selected_tower.unwrap_or("none")),
            selected_tower: selected_tower.map(str::to_string),
            cancel_enabled: selected_tower.is_some(),
        }
    }
}

/// Everything a surface needs to draw.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapScene {
    pub towers: Vec<TowerMarker>,
    pub links: Vec<LinkLine>,
    pub fresnel: Option<FresnelOverlay>,
    pub status: StatusPanel,
}

impl MapScene {
    pub fn project(state: &PlannerState, styles: &StyleSettings) -> Self {
        let selected_tower = state.selected_tower();
        let selected_link = state.selected_link();

        let towers = state
            .towers()
            .map(|tower| {
                let selected = selected_tower == Some(tower.id.as_str());
                TowerMarker {
                    id: tower.id.clone(),
                    position: tower.position,
                    radius_px: styles.tower_radius_px,
                    fill_color: if selected {
                        styles.tower_selected_fill.clone()
                    } else {
                        styles.tower_fill.clone()
                    },
                    stroke_color: styles.tower_stroke.clone(),
                    stroke_weight: TOWER_STROKE_WEIGHT,
                    selected,
                    popup: TowerPopup::for_tower(tower),
                }
            })
            .collect();

        let links = state
            .links()
            .filter_map(|link| {
                let (a, b) = state.model().endpoints(link)?;
                let selected = selected_link == Some(link.id.as_str());
                Some(LinkLine {
                    id: link.id.clone(),
                    from: a.position,
                    to: b.position,
                    color: if selected {
                        styles.link_selected_color.clone()
                    } else {
                        styles.link_color.clone()
                    },
                    selected,
                    tooltip: link_tooltip(a, b),
                })
            })
            .collect();

        let fresnel = state.envelope().map(|envelope| FresnelOverlay {
            link_id: envelope.link_id.clone(),
            ring: envelope.ring.clone(),
            stroke_color: styles.fresnel_stroke.clone(),
            fill_color: styles.fresnel_fill.clone(),
            weight: styles.fresnel_weight,
            interactive: false,
        });

        Self {
            towers,
            links,
            fresnel,
            status: StatusPanel::new(selected_tower),
        }
    }

    pub fn tower(&self, id: &str) -> Option<&TowerMarker> {
        self.towers.iter().find(|t| t.id == id)
    }

    pub fn link(&self, id: &str) -> Option<&LinkLine> {
        self.links.iter().find(|l| l.id == id)
    }
}

/// Tooltip for a link; the frequency shown is the first tower's.
pub fn link_tooltip(a: &Tower, b: &Tower) -> String {
    let km = haversine_distance(a.position, b.position) / 1000.0;
    format!("Dist: {:.2} km, Freq: {} GHz", km, a.frequency_ghz)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles() -> StyleSettings {
        StyleSettings::default()
    }

    #[test]
    fn test_empty_scene() {
        let scene = MapScene::project(&PlannerState::new(), &styles());
        assert!(scene.towers.is_empty());
        assert!(scene.links.is_empty());
        assert!(scene.fresnel.is_none());
        assert_eq!(scene.status.text, "Selected Tower: none");
        assert!(!scene.status.cancel_enabled);
    }

    #[test]
    fn test_selected_tower_is_highlighted() {
        let mut state = PlannerState::new();
        let a = state.add_tower(12.345678, 77.0).unwrap().id;
        let b = state.add_tower(0.0, 0.0).unwrap().id;
        state.click_tower(&a);

        let scene = MapScene::project(&state, &styles());
        assert_eq!(scene.tower(&a).unwrap().fill_color, "#ffa500");
        assert_eq!(scene.tower(&b).unwrap().fill_color, "#2b8cff");
        assert_eq!(scene.status.text, format!("Selected Tower: {}", a));
        assert!(scene.status.cancel_enabled);
        assert_eq!(
            scene.tower(&a).unwrap().popup.coordinates,
            "Lat: 12.34568, Lng: 77.00000"
        );
    }

    #[test]
    fn test_selected_link_and_overlay() {
        let mut state = PlannerState::new();
        let a = state.add_tower(0.0, 0.0).unwrap().id;
        let b = state.add_tower(0.0, 1.0).unwrap().id;
        state.try_create_link(&a, &b).unwrap();
        let link = state.links().next().unwrap().id.clone();

        let scene = MapScene::project(&state, &styles());
        assert_eq!(scene.link(&link).unwrap().color, "blue");
        assert!(scene.fresnel.is_none());

        state.click_link(&link);
        let scene = MapScene::project(&state, &styles());
        assert_eq!(scene.link(&link).unwrap().color, "red");
        let overlay = scene.fresnel.unwrap();
        assert_eq!(overlay.ring.len(), 102);
        assert_eq!(overlay.stroke_color, "red");
        assert_eq!(overlay.fill_color, "rgba(255,0,0,0.2)");
        assert!(!overlay.interactive);
    }

    #[test]
    fn test_tooltip_tracks_frequency() {
        let mut state = PlannerState::new();
        let a = state.add_tower(0.0, 0.0).unwrap().id;
        let b = state.add_tower(0.0, 1.0).unwrap().id;
        state.try_create_link(&a, &b).unwrap();
        let link = state.links().next().unwrap().id.clone();

        let scene = MapScene::project(&state, &styles());
        assert_eq!(scene.link(&link).unwrap().tooltip, "Dist: 111.19 km, Freq: 5 GHz");
        state.update_tower_frequency(&a, 5.8).unwrap();
        let scene = MapScene::project(&state, &styles());
        assert_eq!(scene.link(&link).unwrap().tooltip, "Dist: 111.19 km, Freq: 5.8 GHz");
    }
}
