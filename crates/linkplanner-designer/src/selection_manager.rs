use serde::{Deserialize, Serialize};

/// Tower half of the selection: nothing, or one tower waiting for a partner.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TowerSelection {
    #[default]
    Idle,
    TowerPending(String),
}

/// Link half of the selection. The Fresnel overlay belongs to the selected link.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LinkSelection {
    #[default]
    NoLinkSelected,
    LinkSelected(String),
}

/// What a tower click did to the tower selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TowerClick {
    /// Idle → TowerPending.
    Selected(String),
    /// The pending tower was clicked again; back to Idle.
    Cancelled(String),
    /// A second tower was clicked; back to Idle and a link should be tried.
    Connect { from: String, to: String },
}

/// What a link click did to the link selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkClick {
    /// NoLinkSelected → LinkSelected.
    Selected(String),
    /// The selected link was clicked again.
    Deselected(String),
    /// Another link was clicked while one was selected.
    Switched { from: String, to: String },
}

/// Manages the two independent selection machines.
///
/// # Tower selection
///
/// ```text
/// Idle ──click t──▶ TowerPending(t)
/// TowerPending(t) ──click t──▶ Idle            (cancel)
/// TowerPending(t) ──click u──▶ Idle            (link t-u attempted)
/// TowerPending(t) ──clear───▶ Idle
/// ```
///
/// # Link selection
///
/// ```text
/// NoLinkSelected ──click l──▶ LinkSelected(l)
/// LinkSelected(l) ──click l──▶ NoLinkSelected
/// LinkSelected(l) ──click m──▶ LinkSelected(m)   (no intermediate state)
/// ```
///
/// The manager does not know whether ids exist; callers check before
/// feeding clicks in.
#[derive(Debug, Clone, Default)]
pub struct SelectionManager {
    tower: TowerSelection,
    link: LinkSelection,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tower_selection(&self) -> &TowerSelection {
        &self.tower
    }

    pub fn link_selection(&self) -> &LinkSelection {
        &self.link
    }

    /// Id of the pending tower, if any.
    pub fn selected_tower(&self) -> Option<&str> {
        match &self.tower {
            TowerSelection::TowerPending(id) => Some(id),
            TowerSelection::Idle => None,
        }
    }

    /// Id of the selected link, if any.
    pub fn selected_link(&self) -> Option<&str> {
        match &self.link {
            LinkSelection::LinkSelected(id) => Some(id),
            LinkSelection::NoLinkSelected => None,
        }
    }

    /// Feeds a click on tower `id` into the tower machine.
    pub fn click_tower(&mut self, id: &str) -> TowerClick {
        let previous = std::mem::take(&mut self.tower);
        let click = match previous {
            TowerSelection::Idle => {
                self.tower = TowerSelection::TowerPending(id.to_string());
                TowerClick::Selected(id.to_string())
            }
            TowerSelection::TowerPending(pending) if pending == id => TowerClick::Cancelled(pending),
            TowerSelection::TowerPending(pending) => TowerClick::Connect {
                from: pending,
                to: id.to_string(),
            },
        };
        tracing::debug!("tower click {} -> {:?}", id, self.tower);
        click
    }

    /// Back to Idle. Returns the tower that was pending.
    pub fn clear_tower(&mut self) -> Option<String> {
        match std::mem::take(&mut self.tower) {
            TowerSelection::TowerPending(id) => Some(id),
            TowerSelection::Idle => None,
        }
    }

    /// Feeds a click on link `id` into the link machine.
    pub fn click_link(&mut self, id: &str) -> LinkClick {
        let previous = std::mem::take(&mut self.link);
        let click = match previous {
            LinkSelection::NoLinkSelected => {
                self.link = LinkSelection::LinkSelected(id.to_string());
                LinkClick::Selected(id.to_string())
            }
            LinkSelection::LinkSelected(current) if current == id => LinkClick::Deselected(current),
            LinkSelection::LinkSelected(current) => {
                self.link = LinkSelection::LinkSelected(id.to_string());
                LinkClick::Switched {
                    from: current,
                    to: id.to_string(),
                }
            }
        };
        tracing::debug!("link click {} -> {:?}", id, self.link);
        click
    }

    /// Back to NoLinkSelected. Returns the link that was selected.
    pub fn clear_link(&mut self) -> Option<String> {
        match std::mem::take(&mut self.link) {
            LinkSelection::LinkSelected(id) => Some(id),
            LinkSelection::NoLinkSelected => None,
        }
    }
}
