//! Animation playback contract: fire-and-forget clip triggers.
//!
//! Playback itself belongs to the host; these types only name clips and carry
//! the trigger to a backend. No completion signal is consumed anywhere, so a
//! backend that drops triggers on the floor is a valid one.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

use std::borrow::Cow;

use roam_core::WorldMut;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Name of an animation clip as the host knows it.
///
/// Whether an unknown name is an error is backend-defined; the reference
/// players here accept anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Clip(pub Cow<'static, str>);

impl Clip {
    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for Clip {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

/// Single-character playback backend.
pub trait AnimationPlayer {
    fn play(&mut self, clip: &Clip);
}

#[derive(Debug, Default)]
pub struct NullAnimator;

impl AnimationPlayer for NullAnimator {
    fn play(&mut self, _clip: &Clip) {}
}

/// Records every trigger in order; the assertion backend for tests.
#[derive(Debug, Default)]
pub struct RecordingAnimator {
    pub plays: Vec<Clip>,
}

impl AnimationPlayer for RecordingAnimator {
    fn play(&mut self, clip: &Clip) {
        self.plays.push(clip.clone());
    }
}

/// World seam for triggering a clip on a specific character.
pub trait AnimWorldMut: WorldMut {
    fn play(&mut self, agent: Self::Agent, clip: &Clip);
}
