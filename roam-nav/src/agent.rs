use crate::Vec2;

/// Deterministic reference navigation agent.
///
/// Models the host-engine agent surface without a nav mesh: a destination
/// command "plans" for `path_latency_ticks` calls to [`step`](Self::step)
/// (during which `path_pending` is true and the agent holds position), then
/// the agent steers straight at its destination at `speed`, clamping on the
/// final step. The stopped flag freezes movement but keeps the path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicAgent {
    position: Vec2,
    destination: Option<Vec2>,
    speed: f32,
    stopped: bool,
    pending_ticks: u32,
    path_latency_ticks: u32,
}

impl KinematicAgent {
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            position,
            destination: None,
            speed: speed.max(0.0),
            stopped: false,
            pending_ticks: 0,
            path_latency_ticks: 1,
        }
    }

    /// Number of `step` calls a destination command spends planning.
    /// Zero makes paths available immediately.
    pub fn with_path_latency(mut self, ticks: u32) -> Self {
        self.path_latency_ticks = ticks;
        self
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn destination(&self) -> Option<Vec2> {
        self.destination
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn set_destination(&mut self, target: Vec2) {
        self.destination = Some(target);
        self.pending_ticks = self.path_latency_ticks;
    }

    pub fn set_stopped(&mut self, stopped: bool) {
        self.stopped = stopped;
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn path_pending(&self) -> bool {
        self.destination.is_some() && self.pending_ticks > 0
    }

    /// Distance left to the destination; `+inf` until a path is available.
    pub fn remaining_distance(&self) -> f32 {
        match self.destination {
            Some(dest) if self.pending_ticks == 0 => self.position.distance(dest),
            _ => f32::INFINITY,
        }
    }

    /// Advance the agent by one scheduling tick.
    pub fn step(&mut self, dt_seconds: f32) {
        if self.path_pending() {
            // Planning finishes even while stopped.
            self.pending_ticks -= 1;
            return;
        }
        if self.stopped {
            return;
        }
        let Some(dest) = self.destination else {
            return;
        };

        let budget = self.speed * dt_seconds.max(0.0);
        let to_dest = dest - self.position;
        let dist = to_dest.length();

        if dist <= budget || dist <= f32::EPSILON {
            self.position = dest;
        } else {
            self.position = self.position + to_dest * (budget / dist);
        }
    }
}
