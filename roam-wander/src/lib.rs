//! Waypoint wander controller: pick a random waypoint, walk there, hold a
//! pose for a fixed delay, repeat.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod config;
pub mod controller;
pub mod waypoints;

pub use config::WanderConfig;
pub use controller::{tick_wanderers, WanderController, WanderState, WAYPOINT_STREAM};
pub use waypoints::Waypoints;
