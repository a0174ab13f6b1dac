//! Deterministic, engine-agnostic kernel primitives for wander behaviors.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod rng;
pub mod tick;
pub mod timer;
pub mod world;

pub use agent::AgentId;
pub use rng::{DeterministicRng, SplitMix64};
pub use tick::TickContext;
pub use timer::Countdown;
pub use world::{WorldMut, WorldView};
