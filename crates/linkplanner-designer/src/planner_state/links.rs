//! Link creation rules and deletion.

use linkplanner_core::{AppEvent, LinkEvent, LinkRejectReason, ModelError, NoticeEvent, SelectionEvent};
use thiserror::Error;

use super::PlannerState;
use crate::model::Link;

/// A link request that went through.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkOutcome {
    /// A new link was stored.
    Created(Link),
    /// The pair was already linked; nothing changed.
    AlreadyLinked,
}

/// A link request that was refused.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinkRejection {
    #[error("Tower not found: {id}")]
    MissingTower { id: String },

    #[error("Cannot link a tower to itself")]
    SelfLink,

    #[error("Cannot connect towers with different frequencies.")]
    FrequencyMismatch { a_ghz: f64, b_ghz: f64 },
}

impl LinkRejection {
    pub fn reason(&self) -> LinkRejectReason {
        match self {
            LinkRejection::MissingTower { .. } => LinkRejectReason::MissingTower,
            LinkRejection::SelfLink => LinkRejectReason::SelfLink,
            LinkRejection::FrequencyMismatch { .. } => LinkRejectReason::FrequencyMismatch,
        }
    }

    /// Whether the user should be told about it.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, LinkRejection::FrequencyMismatch { .. })
    }
}

impl PlannerState {
    /// Links towers `a` and `b` if they exist, differ and share a frequency.
    ///
    /// The tower selection is cleared whatever the result.
    pub fn try_create_link(&mut self, a: &str, b: &str) -> Result<LinkOutcome, LinkRejection> {
        if self.selection.clear_tower().is_some() {
            self.emit(AppEvent::Selection(SelectionEvent::TowerCleared));
        }

        let result = self.check_link(a, b);
        match &result {
            Ok(LinkOutcome::Created(link)) => {
                tracing::info!("Link {} created ({} <-> {})", link.id, a, b);
                self.model.insert_link(link.clone());
                self.emit(AppEvent::Link(LinkEvent::Created {
                    id: link.id.clone(),
                    a: a.to_string(),
                    b: b.to_string(),
                }));
            }
            Ok(LinkOutcome::AlreadyLinked) => {
                tracing::debug!("Towers {} and {} are already linked", a, b);
            }
            Err(rejection) => {
                tracing::warn!("Link {} <-> {} rejected: {}", a, b, rejection);
                self.emit(AppEvent::Link(LinkEvent::Rejected {
                    a: a.to_string(),
                    b: b.to_string(),
                    reason: rejection.reason(),
                }));
                if rejection.is_user_visible() {
                    self.emit(AppEvent::Notice(NoticeEvent::Warning {
                        message: rejection.to_string(),
                    }));
                }
            }
        }
        result
    }

    fn check_link(&self, a: &str, b: &str) -> Result<LinkOutcome, LinkRejection> {
        let missing = |id: &str| LinkRejection::MissingTower { id: id.to_string() };
        let tower_a = self.model.tower(a).ok_or_else(|| missing(a))?;
        let tower_b = self.model.tower(b).ok_or_else(|| missing(b))?;

        if tower_a.id == tower_b.id {
            return Err(LinkRejection::SelfLink);
        }
        if !tower_a.shares_frequency_with(tower_b) {
            return Err(LinkRejection::FrequencyMismatch {
                a_ghz: tower_a.frequency_ghz,
                b_ghz: tower_b.frequency_ghz,
            });
        }
        if self.model.link_between(a, b).is_some() {
            return Ok(LinkOutcome::AlreadyLinked);
        }
        Ok(LinkOutcome::Created(Link::new(a, b)))
    }

    /// Deletes a link, hiding its envelope if it was selected.
    pub fn delete_link(&mut self, id: &str) -> Result<(), ModelError> {
        let link = self
            .model
            .remove_link(id)
            .ok_or_else(|| ModelError::LinkNotFound { id: id.to_string() })?;

        if self.selection.selected_link() == Some(id) {
            self.hide_envelope();
        }

        tracing::info!("Link {} deleted", link.id);
        self.emit(AppEvent::Link(LinkEvent::Removed { id: link.id }));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_towers() -> (PlannerState, String, String) {
        let mut state = PlannerState::new();
        let a = state.add_tower(0.0, 0.0).unwrap().id;
        let b = state.add_tower(0.0, 1.0).unwrap().id;
        (state, a, b)
    }

    #[test]
    fn test_create_link() {
        let (mut state, a, b) = two_towers();
        let outcome = state.try_create_link(&a, &b).unwrap();
        let LinkOutcome::Created(link) = outcome else {
            panic!("expected a new link");
        };
        assert_eq!((link.a.as_str(), link.b.as_str()), (a.as_str(), b.as_str()));
        assert_eq!(state.link_count(), 1);
    }

    #[test]
    fn test_duplicate_in_either_order_is_absorbed() {
        let (mut state, a, b) = two_towers();
        state.try_create_link(&a, &b).unwrap();
        assert_eq!(state.try_create_link(&a, &b), Ok(LinkOutcome::AlreadyLinked));
        assert_eq!(state.try_create_link(&b, &a), Ok(LinkOutcome::AlreadyLinked));
        assert_eq!(state.link_count(), 1);
    }

    #[test]
    fn test_self_link_rejected() {
        let (mut state, a, _) = two_towers();
        assert_eq!(state.try_create_link(&a, &a), Err(LinkRejection::SelfLink));
        assert_eq!(state.link_count(), 0);
    }

    #[test]
    fn test_missing_tower_rejected() {
        let (mut state, a, _) = two_towers();
        assert_eq!(
            state.try_create_link(&a, "ghost"),
            Err(LinkRejection::MissingTower {
                id: "ghost".to_string()
            })
        );
        assert_eq!(state.link_count(), 0);
    }

    #[test]
    fn test_frequency_mismatch_rejected() {
        let (mut state, a, b) = two_towers();
        state.update_tower_frequency(&b, 5.8).unwrap();
        let err = state.try_create_link(&a, &b).unwrap_err();
        assert_eq!(err.reason(), LinkRejectReason::FrequencyMismatch);
        assert_eq!(err.to_string(), "Cannot connect towers with different frequencies.");
        assert!(err.is_user_visible());
        assert_eq!(state.link_count(), 0);
    }

    #[test]
    fn test_attempt_clears_pending_tower() {
        let (mut state, a, b) = two_towers();
        state.click_tower(&a);
        state.try_create_link(&a, &a).unwrap_err();
        assert_eq!(state.selected_tower(), None);

        state.click_tower(&b);
        state.try_create_link(&a, &b).unwrap();
        assert_eq!(state.selected_tower(), None);
    }

    #[test]
    fn test_delete_link() {
        let (mut state, a, b) = two_towers();
        state.try_create_link(&a, &b).unwrap();
        let id = state.links().next().unwrap().id.clone();

        state.delete_link(&id).unwrap();
        assert_eq!(state.link_count(), 0);
        assert_eq!(state.tower_count(), 2);
        assert_eq!(
            state.delete_link(&id),
            Err(ModelError::LinkNotFound { id: id.clone() })
        );
    }
}
