//! In-memory tower/link graph.
//!
//! Invariants kept here:
//! - every link references two existing, distinct towers
//! - at most one link per unordered tower pair
//!
//! Insertion order is preserved so overlays draw in creation order.

mod link;
mod tower;

pub use link::Link;
pub use tower::{Tower, DEFAULT_FREQUENCY_GHZ};

use linkplanner_core::LatLng;

pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Towers and the links between them.
#[derive(Debug, Clone, Default)]
pub struct NetworkModel {
    towers: Vec<Tower>,
    links: Vec<Link>,
}

impl NetworkModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new tower and returns a copy of it.
    pub fn add_tower(&mut self, position: LatLng, frequency_ghz: f64) -> Tower {
        let tower = Tower::new(position, frequency_ghz);
        self.towers.push(tower.clone());
        tower
    }

    pub fn tower(&self, id: &str) -> Option<&Tower> {
        self.towers.iter().find(|t| t.id == id)
    }

    pub fn tower_mut(&mut self, id: &str) -> Option<&mut Tower> {
        self.towers.iter_mut().find(|t| t.id == id)
    }

    pub fn towers(&self) -> impl Iterator<Item = &Tower> {
        self.towers.iter()
    }

    pub fn tower_count(&self) -> usize {
        self.towers.len()
    }

    /// Removes a tower together with every link that references it.
    ///
    /// Returns the removed tower and the removed links, or `None` if the id
    /// is unknown.
    pub fn remove_tower(&mut self, id: &str) -> Option<(Tower, Vec<Link>)> {
        let index = self.towers.iter().position(|t| t.id == id)?;
        let tower = self.towers.remove(index);

        let (removed, kept): (Vec<Link>, Vec<Link>) = std::mem::take(&mut self.links)
            .into_iter()
            .partition(|l| l.touches(id));
        self.links = kept;

        Some((tower, removed))
    }

    pub fn link(&self, id: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }

    /// The link joining `x` and `y` in either direction.
    pub fn link_between(&self, x: &str, y: &str) -> Option<&Link> {
        self.links.iter().find(|l| l.connects(x, y))
    }

    /// Both endpoint towers of a link, `a` first.
    pub fn endpoints(&self, link: &Link) -> Option<(&Tower, &Tower)> {
        Some((self.tower(&link.a)?, self.tower(&link.b)?))
    }

    /// Stores a link. Callers check the pair invariants first.
    pub(crate) fn insert_link(&mut self, link: Link) {
        debug_assert!(link.a != link.b, "self link {}", link.a);
        debug_assert!(self.link_between(&link.a, &link.b).is_none());
        self.links.push(link);
    }

    pub fn remove_link(&mut self, id: &str) -> Option<Link> {
        let index = self.links.iter().position(|l| l.id == id)?;
        Some(self.links.remove(index))
    }
}
