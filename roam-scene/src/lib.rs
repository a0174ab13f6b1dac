//! Scene configuration loading and the headless simulation world.
//!
//! This crate is the glue between the engine-agnostic wander primitives and a
//! concrete (file-configured) run: it loads a YAML scene, validates it, and
//! provides `SimWorld`, an in-memory world backed by the reference navigation
//! agents and recording animators.

#![forbid(unsafe_code)]

pub mod config;
pub mod sim;

pub use config::{NpcConfig, SceneConfig, SceneError};
pub use sim::SimWorld;
