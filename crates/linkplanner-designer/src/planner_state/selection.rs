//! Click handling, the Fresnel envelope and the elevation profile.

use linkplanner_core::{AppEvent, ElevationEvent, SelectionEvent};
use linkplanner_elevation::{ElevationRequest, ElevationResponse};

use super::{LinkOutcome, LinkRejection, PlannerState};
use crate::selection_manager::{LinkClick, TowerClick};

impl PlannerState {
    /// Handles a click on a tower marker.
    ///
    /// Returns the link attempt when the click completed a tower pair.
    /// Clicks on unknown towers are ignored.
    pub fn click_tower(&mut self, id: &str) -> Option<Result<LinkOutcome, LinkRejection>> {
        if self.model.tower(id).is_none() {
            tracing::debug!("Click on unknown tower {} ignored", id);
            return None;
        }

        match self.selection.click_tower(id) {
            TowerClick::Selected(id) => {
                self.emit(AppEvent::Selection(SelectionEvent::TowerSelected { id }));
                None
            }
            TowerClick::Cancelled(_) => {
                self.emit(AppEvent::Selection(SelectionEvent::TowerCleared));
                None
            }
            TowerClick::Connect { from, to } => {
                self.emit(AppEvent::Selection(SelectionEvent::TowerCleared));
                Some(self.try_create_link(&from, &to))
            }
        }
    }

    /// The cancel action: drops the pending tower, if any.
    pub fn clear_selection(&mut self) {
        if self.selection.clear_tower().is_some() {
            self.emit(AppEvent::Selection(SelectionEvent::TowerCleared));
        }
    }

    /// Handles a click on a link line.
    ///
    /// Selecting a link computes its envelope and, when elevation lookups
    /// are enabled, returns the lookup to run. Clicks on unknown links are
    /// ignored.
    pub fn click_link(&mut self, id: &str) -> Option<ElevationRequest> {
        if self.model.link(id).is_none() {
            tracing::debug!("Click on unknown link {} ignored", id);
            return None;
        }

        match self.selection.click_link(id) {
            LinkClick::Selected(id) | LinkClick::Switched { to: id, .. } => self.show_envelope(&id),
            LinkClick::Deselected(_) => {
                self.clear_envelope();
                None
            }
        }
    }

    /// Replaces the envelope with the one for `link_id`.
    fn show_envelope(&mut self, link_id: &str) -> Option<ElevationRequest> {
        self.envelope = None;
        self.elevation_profile = None;
        self.elevation.invalidate();

        let link = self.model.link(link_id)?;
        let (a, b) = self.model.endpoints(link)?;
        match self.builder.build(link_id, a, b) {
            Ok(envelope) => self.envelope = Some(envelope),
            Err(e) => {
                tracing::warn!("No Fresnel envelope for link {}: {}", link_id, e);
                return None;
            }
        }
        self.emit(AppEvent::Selection(SelectionEvent::LinkSelected {
            id: link_id.to_string(),
        }));

        if !self.elevation_enabled {
            return None;
        }
        let points = self
            .envelope
            .as_ref()
            .map(|e| e.centerline.clone())
            .unwrap_or_default();
        let request = self.elevation.issue(link_id, points);
        self.emit(AppEvent::Elevation(ElevationEvent::Requested {
            link_id: request.link_id.clone(),
            token: request.token,
            points: request.points.len(),
        }));
        Some(request)
    }

    /// Drops the envelope and anything in flight for it.
    fn clear_envelope(&mut self) {
        self.envelope = None;
        self.elevation_profile = None;
        self.elevation.invalidate();
        self.emit(AppEvent::Selection(SelectionEvent::LinkCleared));
    }

    /// Deselects the selected link and drops its envelope.
    pub(super) fn hide_envelope(&mut self) {
        self.selection.clear_link();
        self.clear_envelope();
    }

    /// Stores an elevation profile if it answers the outstanding lookup.
    ///
    /// Returns false for stale responses, which are dropped.
    pub fn apply_elevation_profile(&mut self, response: ElevationResponse) -> bool {
        if !self.elevation.is_current(&response) {
            tracing::debug!(
                "Stale elevation #{} for link {} dropped",
                response.token,
                response.link_id
            );
            self.emit(AppEvent::Elevation(ElevationEvent::Discarded {
                link_id: response.link_id,
                token: response.token,
            }));
            return false;
        }

        self.emit(AppEvent::Elevation(ElevationEvent::ProfileReady {
            link_id: response.link_id.clone(),
            token: response.token,
        }));
        self.elevation_profile = Some(response);
        true
    }
}
