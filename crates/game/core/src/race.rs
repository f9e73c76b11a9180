//! Playable races.
//!
//! A race selects the asset sub-directory an entity's icon is resolved from and
//! which worker/soldier skills its buildings can produce.

/// Race (faction identity) of a player or entity.
///
/// Race is immutable for an entity and decides:
/// - Asset lookup path (`entities/<race>/<icon>`)
/// - Which production skills are offered by its buildings
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Race {
    /// Human alliance
    #[default]
    Human,
    /// Orc horde
    Orc,
    /// Neutral entities (gold mines, critters)
    Neutral,
}

impl Race {
    /// Asset directory name for this race.
    pub fn path(&self) -> &'static str {
        match self {
            Race::Human => "human",
            Race::Orc => "orc",
            Race::Neutral => "neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!(Race::from_str("ORC").unwrap(), Race::Orc);
        assert_eq!(Race::from_str("human").unwrap(), Race::Human);
        assert!(Race::from_str("elf").is_err());
    }

    #[test]
    fn path_matches_display_name() {
        for race in Race::iter() {
            assert_eq!(race.path(), race.to_string());
        }
    }
}
