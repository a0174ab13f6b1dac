//! Navigation-agent primitives: contract seams and a reference backend.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod agent;
pub mod math;
pub mod world;

pub use agent::KinematicAgent;
pub use math::Vec2;
pub use world::{NavAgentWorldMut, NavAgentWorldView};
