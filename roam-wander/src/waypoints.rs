use roam_core::DeterministicRng;
use roam_nav::Vec2;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Fixed, ordered list of positions a character can be sent to.
///
/// Bound once at configuration time; immutable afterwards. Targets are
/// addressed by index so "same waypoint" is an identity check rather than a
/// float comparison.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoints {
    points: Vec<Vec2>,
}

impl Waypoints {
    pub fn new(points: Vec<Vec2>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Vec2> {
        self.points.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.points.iter().copied()
    }

    /// Uniform random pick over the list.
    ///
    /// With more than one waypoint the pick re-rolls until it differs from
    /// `current`, so a walk never ends where the next one starts. A single
    /// waypoint is trivially reselected. Empty lists yield `None`.
    pub fn pick_next(
        &self,
        rng: &mut impl DeterministicRng,
        current: Option<usize>,
    ) -> Option<usize> {
        if self.points.is_empty() {
            return None;
        }
        let bound = self.points.len() as u32;
        loop {
            let pick = rng.next_range_u32(bound) as usize;
            if self.points.len() == 1 || Some(pick) != current {
                return Some(pick);
            }
        }
    }
}
