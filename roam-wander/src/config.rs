use roam_anim::Clip;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct WanderConfig {
    /// Arrival threshold against the agent's remaining path distance.
    pub stopping_distance: f32,
    /// How long the character holds its pose after arriving.
    pub pause_seconds: f32,
    /// Clip triggered when a pause begins.
    pub pose_clip: Clip,
    /// Clip triggered when walking resumes.
    pub walk_clip: Clip,
}

impl Default for WanderConfig {
    fn default() -> Self {
        Self {
            stopping_distance: 0.5,
            pause_seconds: 4.0,
            pose_clip: Clip::from_static("Pose"),
            walk_clip: Clip::from_static("Walk"),
        }
    }
}
