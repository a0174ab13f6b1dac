//! Scene configuration loading and validation.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use roam_anim::Clip;
use roam_nav::Vec2;
use roam_wander::{WanderConfig, Waypoints};

/// A wandering scene, loaded from YAML.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Global simulation seed.
    pub seed: u64,

    /// Scheduling ticks per simulated second.
    #[serde(default = "default_tick_hz")]
    pub tick_hz: u32,

    /// Arrival threshold, in distance units.
    #[serde(default = "default_stopping_distance")]
    pub stopping_distance: f32,

    /// Pause duration after each arrival, in seconds.
    #[serde(default = "default_pause_seconds")]
    pub pause_seconds: f32,

    /// Clip triggered while pausing.
    #[serde(default = "default_pose_clip")]
    pub pose_clip: String,

    /// Clip triggered when walking resumes.
    #[serde(default = "default_walk_clip")]
    pub walk_clip: String,

    /// Positions the characters wander between. May be empty: controllers
    /// then go inactive with a warning instead of failing validation.
    #[serde(default)]
    pub waypoints: Vec<[f32; 2]>,

    /// Characters to spawn.
    #[serde(default)]
    pub npcs: Vec<NpcConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NpcConfig {
    pub id: u64,
    pub spawn: [f32; 2],

    /// Walk speed, in distance units per second.
    #[serde(default = "default_speed")]
    pub speed: f32,

    /// Ticks a destination command spends planning before the path resolves.
    #[serde(default = "default_path_latency")]
    pub path_latency_ticks: u32,
}

fn default_tick_hz() -> u32 {
    30
}
fn default_stopping_distance() -> f32 {
    0.5
}
fn default_pause_seconds() -> f32 {
    4.0
}
fn default_pose_clip() -> String {
    "Pose".to_string()
}
fn default_walk_clip() -> String {
    "Walk".to_string()
}
fn default_speed() -> f32 {
    3.5
}
fn default_path_latency() -> u32 {
    1
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            tick_hz: default_tick_hz(),
            stopping_distance: default_stopping_distance(),
            pause_seconds: default_pause_seconds(),
            pose_clip: default_pose_clip(),
            walk_clip: default_walk_clip(),
            waypoints: Vec::new(),
            npcs: Vec::new(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("tick_hz must be positive")]
    InvalidTickRate,

    #[error("stopping_distance must be finite and non-negative (got {0})")]
    InvalidStoppingDistance(f32),

    #[error("pause_seconds must be finite and non-negative (got {0})")]
    InvalidPauseSeconds(f32),

    #[error("waypoint {index} has non-finite coordinates")]
    NonFiniteWaypoint { index: usize },

    #[error("npc {id} has non-finite spawn coordinates")]
    NonFiniteSpawn { id: u64 },

    #[error("npc {id} speed must be finite and non-negative (got {speed})")]
    InvalidSpeed { id: u64, speed: f32 },

    #[error("duplicate npc id {0}")]
    DuplicateNpcId(u64),
}

impl SceneConfig {
    /// Load a scene from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene from {}", path.display()))?;
        let scene: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse scene from {}", path.display()))?;
        Ok(scene)
    }

    /// Structural validation. An empty waypoint list is deliberately legal.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.tick_hz == 0 {
            return Err(SceneError::InvalidTickRate);
        }
        if !self.stopping_distance.is_finite() || self.stopping_distance < 0.0 {
            return Err(SceneError::InvalidStoppingDistance(self.stopping_distance));
        }
        if !self.pause_seconds.is_finite() || self.pause_seconds < 0.0 {
            return Err(SceneError::InvalidPauseSeconds(self.pause_seconds));
        }

        for (index, point) in self.waypoints.iter().enumerate() {
            if !point[0].is_finite() || !point[1].is_finite() {
                return Err(SceneError::NonFiniteWaypoint { index });
            }
        }

        let mut seen = std::collections::BTreeSet::new();
        for npc in &self.npcs {
            if !seen.insert(npc.id) {
                return Err(SceneError::DuplicateNpcId(npc.id));
            }
            if !npc.spawn[0].is_finite() || !npc.spawn[1].is_finite() {
                return Err(SceneError::NonFiniteSpawn { id: npc.id });
            }
            if !npc.speed.is_finite() || npc.speed < 0.0 {
                return Err(SceneError::InvalidSpeed {
                    id: npc.id,
                    speed: npc.speed,
                });
            }
        }

        Ok(())
    }

    pub fn dt_seconds(&self) -> f32 {
        1.0 / self.tick_hz as f32
    }

    pub fn waypoint_list(&self) -> Waypoints {
        Waypoints::new(
            self.waypoints
                .iter()
                .map(|p| Vec2::new(p[0], p[1]))
                .collect(),
        )
    }

    pub fn wander_config(&self) -> WanderConfig {
        WanderConfig {
            stopping_distance: self.stopping_distance,
            pause_seconds: self.pause_seconds,
            pose_clip: Clip::new(self.pose_clip.clone()),
            walk_clip: Clip::new(self.walk_clip.clone()),
        }
    }
}
