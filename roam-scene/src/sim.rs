//! Headless simulation world backed by the reference backends.

use std::collections::BTreeMap;

use roam_anim::{AnimWorldMut, AnimationPlayer, Clip, RecordingAnimator};
use roam_core::{WorldMut, WorldView};
use roam_nav::{KinematicAgent, NavAgentWorldMut, NavAgentWorldView, Vec2};

use crate::config::SceneConfig;

/// In-memory world: one kinematic agent and one recording animator per NPC.
///
/// Iteration order is the `BTreeMap` key order, so runs replay identically
/// for the same scene and seed.
#[derive(Default)]
pub struct SimWorld {
    agents: BTreeMap<u64, KinematicAgent>,
    animators: BTreeMap<u64, RecordingAnimator>,
}

impl SimWorld {
    pub fn from_scene(scene: &SceneConfig) -> Self {
        let mut world = Self::default();
        for npc in &scene.npcs {
            world.insert_agent(
                npc.id,
                KinematicAgent::new(Vec2::new(npc.spawn[0], npc.spawn[1]), npc.speed)
                    .with_path_latency(npc.path_latency_ticks),
            );
        }
        world
    }

    pub fn insert_agent(&mut self, id: u64, agent: KinematicAgent) {
        self.agents.insert(id, agent);
        self.animators.insert(id, RecordingAnimator::default());
    }

    pub fn agent(&self, id: u64) -> Option<&KinematicAgent> {
        self.agents.get(&id)
    }

    pub fn agent_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.agents.keys().copied()
    }

    /// Clips triggered so far for one NPC, in order.
    pub fn plays(&self, id: u64) -> &[Clip] {
        self.animators
            .get(&id)
            .map(|a| a.plays.as_slice())
            .unwrap_or(&[])
    }

    /// Advance every agent by one scheduling tick.
    pub fn step_agents(&mut self, dt_seconds: f32) {
        for agent in self.agents.values_mut() {
            agent.step(dt_seconds);
        }
    }
}

impl WorldView for SimWorld {
    type Agent = u64;
}

impl WorldMut for SimWorld {}

impl NavAgentWorldView for SimWorld {
    fn position(&self, agent: u64) -> Option<Vec2> {
        self.agents.get(&agent).map(|a| a.position())
    }

    fn path_pending(&self, agent: u64) -> bool {
        self.agents.get(&agent).map(|a| a.path_pending()).unwrap_or(false)
    }

    fn remaining_distance(&self, agent: u64) -> f32 {
        self.agents
            .get(&agent)
            .map(|a| a.remaining_distance())
            .unwrap_or(f32::INFINITY)
    }

    fn is_stopped(&self, agent: u64) -> bool {
        self.agents.get(&agent).map(|a| a.is_stopped()).unwrap_or(false)
    }
}

impl NavAgentWorldMut for SimWorld {
    fn set_destination(&mut self, agent: u64, target: Vec2) {
        if let Some(a) = self.agents.get_mut(&agent) {
            a.set_destination(target);
        }
    }

    fn set_stopped(&mut self, agent: u64, stopped: bool) {
        if let Some(a) = self.agents.get_mut(&agent) {
            a.set_stopped(stopped);
        }
    }
}

impl AnimWorldMut for SimWorld {
    fn play(&mut self, agent: u64, clip: &Clip) {
        tracing::trace!(agent, clip = clip.name(), "clip trigger");
        if let Some(player) = self.animators.get_mut(&agent) {
            player.play(clip);
        }
    }
}
