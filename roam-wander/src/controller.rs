use roam_anim::AnimWorldMut;
use roam_core::{AgentId, Countdown, SplitMix64, TickContext};
use roam_nav::NavAgentWorldMut;

use crate::{WanderConfig, Waypoints};

/// RNG stream for waypoint picks (see `TickContext::rng_for_agent`).
pub const WAYPOINT_STREAM: u64 = 0x5741_5950_0000_0001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WanderState {
    /// Constructed but not yet activated.
    Idle,
    /// Walking toward the waypoint at `target`.
    Walking { target: usize },
    /// Holding the pose at `target` until the countdown elapses.
    Paused { target: usize, timer: Countdown },
    /// No waypoints configured; permanently out of service.
    Inactive,
}

/// Drives one character's idle wandering.
///
/// The controller owns no engine resources: it reads arrival status from the
/// navigation seam, issues destination/stop commands and clip triggers, and
/// keeps the pause countdown as plain state. Ceasing to tick it (or dropping
/// it) cancels everything; nothing fires later.
pub struct WanderController<A: AgentId> {
    agent: A,
    waypoints: Waypoints,
    config: WanderConfig,
    state: WanderState,
    rng: SplitMix64,
}

impl<A: AgentId> WanderController<A> {
    pub fn new(agent: A, waypoints: Waypoints, config: WanderConfig) -> Self {
        Self {
            agent,
            waypoints,
            config,
            state: WanderState::Idle,
            rng: SplitMix64::new(0),
        }
    }

    pub fn agent(&self) -> A {
        self.agent
    }

    pub fn state(&self) -> WanderState {
        self.state
    }

    pub fn config(&self) -> &WanderConfig {
        &self.config
    }

    pub fn waypoints(&self) -> &Waypoints {
        &self.waypoints
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.state, WanderState::Paused { .. })
    }

    /// Index of the waypoint currently walked toward or paused at.
    pub fn current_target(&self) -> Option<usize> {
        match self.state {
            WanderState::Walking { target } | WanderState::Paused { target, .. } => Some(target),
            WanderState::Idle | WanderState::Inactive => None,
        }
    }

    /// One-time initialization when the character becomes active: seed the
    /// pick stream, choose a starting waypoint, and send the agent there.
    ///
    /// An empty waypoint list logs one warning and leaves the controller
    /// permanently inactive. Activating twice is a no-op.
    pub fn activate<W>(&mut self, ctx: &TickContext, world: &mut W)
    where
        W: NavAgentWorldMut<Agent = A> + AnimWorldMut<Agent = A>,
    {
        if !matches!(self.state, WanderState::Idle) {
            return;
        }

        if self.waypoints.is_empty() {
            tracing::warn!(
                agent = self.agent.stable_id(),
                "no waypoints configured; wander controller inactive"
            );
            self.state = WanderState::Inactive;
            return;
        }

        self.rng = ctx.rng_for_agent(self.agent, WAYPOINT_STREAM);

        let Some(target) = self.waypoints.pick_next(&mut self.rng, None) else {
            return;
        };
        let Some(position) = self.waypoints.get(target) else {
            return;
        };

        world.set_destination(self.agent, position);
        self.state = WanderState::Walking { target };
    }

    /// Per-tick step: arrival check while walking, countdown while paused.
    ///
    /// Arrival fires iff the agent reports no pending path and its remaining
    /// distance is within `stopping_distance`. While paused, no arrival
    /// checks run.
    pub fn tick<W>(&mut self, ctx: &TickContext, world: &mut W)
    where
        W: NavAgentWorldMut<Agent = A> + AnimWorldMut<Agent = A>,
    {
        match self.state {
            WanderState::Idle | WanderState::Inactive => {}

            WanderState::Walking { target } => {
                if world.path_pending(self.agent) {
                    return;
                }
                if world.remaining_distance(self.agent) <= self.config.stopping_distance {
                    self.begin_pause(target, world);
                }
            }

            WanderState::Paused { target, mut timer } => {
                if timer.tick(ctx.dt_seconds) {
                    self.resume_from(target, world);
                } else {
                    self.state = WanderState::Paused { target, timer };
                }
            }
        }
    }

    fn begin_pause<W>(&mut self, target: usize, world: &mut W)
    where
        W: NavAgentWorldMut<Agent = A> + AnimWorldMut<Agent = A>,
    {
        tracing::debug!(agent = self.agent.stable_id(), target, "arrived, pausing");

        world.set_stopped(self.agent, true);
        world.play(self.agent, &self.config.pose_clip);
        self.state = WanderState::Paused {
            target,
            timer: Countdown::new(self.config.pause_seconds),
        };
    }

    fn resume_from<W>(&mut self, current: usize, world: &mut W)
    where
        W: NavAgentWorldMut<Agent = A> + AnimWorldMut<Agent = A>,
    {
        let Some(next) = self.waypoints.pick_next(&mut self.rng, Some(current)) else {
            return;
        };
        let Some(position) = self.waypoints.get(next) else {
            return;
        };

        tracing::debug!(agent = self.agent.stable_id(), from = current, to = next, "resuming walk");

        world.set_destination(self.agent, position);
        world.play(self.agent, &self.config.walk_clip);
        world.set_stopped(self.agent, false);
        self.state = WanderState::Walking { target: next };
    }
}

/// Tick a batch of controllers in stable agent order.
pub fn tick_wanderers<A, W>(
    ctx: &TickContext,
    world: &mut W,
    controllers: &mut [WanderController<A>],
) where
    A: AgentId,
    W: NavAgentWorldMut<Agent = A> + AnimWorldMut<Agent = A>,
{
    controllers.sort_by_key(|c| c.agent.stable_id());
    for controller in controllers.iter_mut() {
        controller.tick(ctx, world);
    }
}
