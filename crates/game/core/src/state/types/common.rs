use std::fmt;

/// Unique identifier for any entity tracked by the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a player stored in an external [`Players`](crate::player::Players) registry.
///
/// Entities keep this id rather than the player itself, so an entity never
/// extends its owner's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(pub u8);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Bounded integer meter (e.g., life) with `current` in `[0, maximum]`.
///
/// All mutation saturates, so the bounds hold for any input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    /// Creates a meter, clamping `current` to `maximum`.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// Creates a meter filled to `maximum`.
    pub fn full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Decreases the meter, floored at zero. Returns the amount actually removed.
    pub fn decrease(&mut self, amount: u32) -> u32 {
        let before = self.current;
        self.current = self.current.saturating_sub(amount);
        before - self.current
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.current == 0
    }

    /// Fill ratio in percent, rounded half up.
    ///
    /// Returns 0 for an empty meter and 100 for a full one. A zero-capacity
    /// meter reports 0.
    pub fn percent(&self) -> u32 {
        if self.maximum == 0 {
            return 0;
        }
        let current = u64::from(self.current);
        let maximum = u64::from(self.maximum);
        ((200 * current + maximum) / (2 * maximum)) as u32
    }
}
