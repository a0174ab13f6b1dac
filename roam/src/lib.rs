//! Umbrella crate that re-exports the `roam-*` building blocks.
//!
//! This crate is intended as a convenient entrypoint for users and as a home for docs.rs guides.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "core")]
#[cfg_attr(docsrs, doc(cfg(feature = "core")))]
pub use roam_core as core;

#[cfg(feature = "nav")]
#[cfg_attr(docsrs, doc(cfg(feature = "nav")))]
pub use roam_nav as nav;

#[cfg(feature = "anim")]
#[cfg_attr(docsrs, doc(cfg(feature = "anim")))]
pub use roam_anim as anim;

#[cfg(feature = "wander")]
#[cfg_attr(docsrs, doc(cfg(feature = "wander")))]
pub use roam_wander as wander;
