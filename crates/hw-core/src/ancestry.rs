use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Character ancestry. Declaration order is the enumeration order used
/// wherever "first available" matters.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Race {
    /// Baseline ancestry with no creation restrictions.
    Human,
    /// Elves are bound to chaotic natures.
    Elf,
    /// Dwarves are bound to lawful natures.
    Dwarf,
    /// Small folk, unrestricted.
    Halfling,
    /// Small folk, unrestricted.
    Gnome,
    /// Orcs are bound to evil alignments.
    Orc,
}

impl Race {
    /// Every race in enumeration order.
    pub const ALL: [Race; 6] = [
        Race::Human,
        Race::Elf,
        Race::Dwarf,
        Race::Halfling,
        Race::Gnome,
        Race::Orc,
    ];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "Human",
            Self::Elf => "Elf",
            Self::Dwarf => "Dwarf",
            Self::Halfling => "Halfling",
            Self::Gnome => "Gnome",
            Self::Orc => "Orc",
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Race {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "human" => Ok(Self::Human),
            "elf" => Ok(Self::Elf),
            "dwarf" => Ok(Self::Dwarf),
            "halfling" => Ok(Self::Halfling),
            "gnome" => Ok(Self::Gnome),
            "orc" => Ok(Self::Orc),
            _ => Err(ParseError::Race(s.trim().to_string())),
        }
    }
}

/// Character sex.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    /// Female.
    Female,
    /// Male.
    Male,
}

impl Sex {
    /// Both sexes in enumeration order.
    pub const ALL: [Sex; 2] = [Sex::Female, Sex::Male];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Sex {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "female" => Ok(Self::Female),
            "male" => Ok(Self::Male),
            _ => Err(ParseError::Sex(s.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn race_parses_case_insensitively() {
        assert_eq!("Orc".parse::<Race>().unwrap(), Race::Orc);
        assert_eq!("  dwarf ".parse::<Race>().unwrap(), Race::Dwarf);
    }

    #[test]
    fn race_parse_rejects_unknown() {
        let err = "tiefling".parse::<Race>().unwrap_err();
        assert_eq!(err, ParseError::Race("tiefling".to_string()));
    }

    #[test]
    fn race_display_round_trips_through_parse() {
        for race in Race::ALL {
            assert_eq!(race.to_string().parse::<Race>().unwrap(), race);
        }
    }

    #[test]
    fn sex_parses() {
        assert_eq!("Male".parse::<Sex>().unwrap(), Sex::Male);
        assert!("other".parse::<Sex>().is_err());
    }
}
