//! Engine-side body of an entity.
//!
//! The rendering/spatial engine keeps its own flags per unit (can it be
//! selected, does it update, is it tracked for collisions). The core only
//! toggles them through [`EngineLink`]; it never reads them back to make
//! decisions.

use std::fmt;

use bitflags::bitflags;

use crate::state::PlayerId;

/// Setters the engine exposes for one entity.
pub trait EngineLink: fmt::Debug {
    fn set_selectable(&mut self, selectable: bool);

    fn set_active(&mut self, active: bool);

    fn set_alive(&mut self, alive: bool);

    /// Marks the entity as executing an order. Engines that schedule orders
    /// themselves can ignore this.
    fn begin_order(&mut self) {}

    /// Aborts whatever the entity is currently doing.
    fn stop(&mut self);

    /// Removes the entity from spatial and collision tracking.
    fn remove_ref(&mut self);

    /// Propagates the owning player's id to the engine.
    fn set_player_id(&mut self, player: PlayerId);

    /// Current engine flags, if the engine tracks them in a readable form.
    fn flags(&self) -> Option<EntityFlags> {
        None
    }
}

bitflags! {
    /// Engine-visible entity flags.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct EntityFlags: u8 {
        const SELECTABLE = 1 << 0;
        const ACTIVE = 1 << 1;
        const ALIVE = 1 << 2;
        /// Registered in spatial/collision tracking.
        const REGISTERED = 1 << 3;
        /// Executing an order.
        const BUSY = 1 << 4;

        const SPAWNED = Self::SELECTABLE.bits()
            | Self::ACTIVE.bits()
            | Self::ALIVE.bits()
            | Self::REGISTERED.bits();
    }
}

impl Default for EntityFlags {
    fn default() -> Self {
        Self::SPAWNED
    }
}

/// [`EngineLink`] for headless simulation: stores the flags in memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HeadlessLink {
    flags: EntityFlags,
    player: Option<PlayerId>,
}

impl HeadlessLink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn player(&self) -> Option<PlayerId> {
        self.player
    }
}

impl EngineLink for HeadlessLink {
    fn set_selectable(&mut self, selectable: bool) {
        self.flags.set(EntityFlags::SELECTABLE, selectable);
    }

    fn set_active(&mut self, active: bool) {
        self.flags.set(EntityFlags::ACTIVE, active);
    }

    fn set_alive(&mut self, alive: bool) {
        self.flags.set(EntityFlags::ALIVE, alive);
    }

    fn begin_order(&mut self) {
        self.flags.insert(EntityFlags::BUSY);
    }

    fn stop(&mut self) {
        self.flags.remove(EntityFlags::BUSY);
    }

    fn remove_ref(&mut self) {
        self.flags.remove(EntityFlags::REGISTERED);
    }

    fn set_player_id(&mut self, player: PlayerId) {
        self.player = Some(player);
    }

    fn flags(&self) -> Option<EntityFlags> {
        Some(self.flags)
    }
}
