//! Tower placement, frequency edits and deletion.

use linkplanner_core::{AppEvent, GeoError, LatLng, ModelError, SelectionEvent, TowerEvent};

use super::PlannerState;
use crate::model::Tower;

impl PlannerState {
    /// Places a tower with the default frequency and returns it.
    ///
    /// Coordinates outside -90..=90 / -180..=180 are rejected and nothing is
    /// placed.
    pub fn add_tower(&mut self, lat: f64, lng: f64) -> Result<Tower, GeoError> {
        let position = LatLng::try_new(lat, lng)?;
        let tower = self.model.add_tower(position, self.default_frequency_ghz);
        tracing::info!(
            "Tower {} added at ({:.5}, {:.5})",
            tower.id,
            lat,
            lng
        );
        self.emit(AppEvent::Tower(TowerEvent::Added {
            id: tower.id.clone(),
            position: tower.position,
            frequency_ghz: tower.frequency_ghz,
        }));
        Ok(tower)
    }

    /// Overwrites a tower's frequency.
    ///
    /// Existing links are not re-checked, so a link can end up joining towers
    /// whose frequencies no longer match.
    pub fn update_tower_frequency(&mut self, id: &str, frequency_ghz: f64) -> Result<(), ModelError> {
        if !(frequency_ghz.is_finite() && frequency_ghz > 0.0) {
            return Err(ModelError::InvalidFrequency {
                value: frequency_ghz,
            });
        }
        let tower = self
            .model
            .tower_mut(id)
            .ok_or_else(|| ModelError::TowerNotFound { id: id.to_string() })?;

        let old = std::mem::replace(&mut tower.frequency_ghz, frequency_ghz);
        tracing::debug!("Tower {} frequency {} -> {} GHz", id, old, frequency_ghz);
        self.emit(AppEvent::Tower(TowerEvent::FrequencyChanged {
            id: id.to_string(),
            old,
            new: frequency_ghz,
        }));
        Ok(())
    }

    /// Deletes a tower and every link touching it.
    ///
    /// Returns the ids of the links removed along with the tower.
    pub fn delete_tower(&mut self, id: &str) -> Result<Vec<String>, ModelError> {
        let (tower, removed) = self
            .model
            .remove_tower(id)
            .ok_or_else(|| ModelError::TowerNotFound { id: id.to_string() })?;
        let cascaded: Vec<String> = removed.into_iter().map(|l| l.id).collect();

        if self.selection.selected_tower() == Some(id) {
            self.selection.clear_tower();
            self.emit(AppEvent::Selection(SelectionEvent::TowerCleared));
        }

        let selected_link_gone = self
            .selection
            .selected_link()
            .is_some_and(|link| cascaded.iter().any(|c| c == link));
        if selected_link_gone {
            self.hide_envelope();
        }

        tracing::info!(
            "Tower {} deleted with {} link(s)",
            tower.id,
            cascaded.len()
        );
        self.emit(AppEvent::Tower(TowerEvent::Removed {
            id: tower.id,
            cascaded_links: cascaded.clone(),
        }));
        Ok(cascaded)
    }
}
