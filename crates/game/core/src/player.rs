//! Players and population bookkeeping.
//!
//! Players are owned by the match, never by entities. Entities refer to their
//! owner through a [`PlayerId`] and report deaths through [`PopulationTracker`].

use crate::race::Race;
use crate::state::PlayerId;

/// Receives population changes caused by entity lifecycle events.
pub trait PopulationTracker {
    fn change_population(&mut self, player: PlayerId, delta: i32);
}

/// A participant in the match.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub race: Race,
    /// Living entities owned by this player.
    #[cfg_attr(feature = "serde", serde(default))]
    pub population: u32,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>, race: Race) -> Self {
        Self {
            id,
            name: name.into(),
            race,
            population: 0,
        }
    }

    /// Applies a population delta, saturating at zero.
    pub fn change_population(&mut self, delta: i32) {
        self.population = self.population.saturating_add_signed(delta);
    }
}

/// Registry of every player in the match.
#[derive(Clone, Debug, Default)]
pub struct Players {
    players: Vec<Player>,
}

impl Players {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a player, replacing any existing player with the same id.
    pub fn add(&mut self, player: Player) {
        match self.get_mut(player.id) {
            Some(existing) => *existing = player,
            None => self.players.push(player),
        }
    }

    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl FromIterator<Player> for Players {
    fn from_iter<T: IntoIterator<Item = Player>>(iter: T) -> Self {
        let mut players = Self::new();
        for player in iter {
            players.add(player);
        }
        players
    }
}

impl PopulationTracker for Players {
    fn change_population(&mut self, player: PlayerId, delta: i32) {
        match self.get_mut(player) {
            Some(p) => {
                p.change_population(delta);
                tracing::debug!(%player, delta, population = p.population, "population changed");
            }
            None => tracing::warn!(%player, delta, "population change for unknown player ignored"),
        }
    }
}
