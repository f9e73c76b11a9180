//! Headless skirmish driver.
//!
//! Wires content loaded by `skirmish-content` into `skirmish-core` entities
//! and replays scripted scenarios against them.
pub mod config;
pub mod skirmish;

pub use config::SandboxConfig;
pub use skirmish::Skirmish;
