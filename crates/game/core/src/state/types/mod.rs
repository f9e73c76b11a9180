pub mod common;

pub use common::{EntityId, PlayerId, ResourceMeter};
