use roam_core::{WorldMut, WorldView};

use crate::Vec2;

/// Read side of the navigation-agent surface.
///
/// Contract notes:
/// - `path_pending` is `true` from a destination command until the backend has
///   a usable path.
/// - `remaining_distance` is the distance left along the current path, and
///   `+inf` while no path is available (pending or no destination). Arrival
///   checks therefore stay false during planning without extra guards.
pub trait NavAgentWorldView: WorldView {
    fn position(&self, agent: Self::Agent) -> Option<Vec2>;
    fn path_pending(&self, agent: Self::Agent) -> bool;
    fn remaining_distance(&self, agent: Self::Agent) -> f32;
    fn is_stopped(&self, agent: Self::Agent) -> bool;
}

/// Command side of the navigation-agent surface.
///
/// How a path is computed and followed is entirely the backend's business;
/// callers only issue destinations and toggle the stopped flag.
pub trait NavAgentWorldMut: WorldMut + NavAgentWorldView {
    fn set_destination(&mut self, agent: Self::Agent, target: Vec2);
    fn set_stopped(&mut self, agent: Self::Agent, stopped: bool);
}
