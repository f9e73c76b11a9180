//! Entity state.
//!
//! This module owns the [`Entity`] aggregate and the small value types it is
//! built from. Entities are mutated in place by the simulation loop; the core
//! never shares them across threads.
mod entity;
mod error;
pub mod types;

pub use entity::{DamageOutcome, Entity, Lifecycle};
pub use error::EntityError;
pub use types::{EntityId, PlayerId, ResourceMeter};
