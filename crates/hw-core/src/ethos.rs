use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// The good/neutral/evil ethical axis. Declaration order is the
/// enumeration order pickers fall back to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Good.
    Good,
    /// Neutral on the ethical axis.
    Neutral,
    /// Evil.
    Evil,
}

impl Alignment {
    /// All three alignments in enumeration order.
    pub const ALL: [Alignment; 3] = [Alignment::Good, Alignment::Neutral, Alignment::Evil];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Neutral => "Neutral",
            Self::Evil => "Evil",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Alignment {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "good" => Ok(Self::Good),
            "neutral" => Ok(Self::Neutral),
            "evil" => Ok(Self::Evil),
            _ => Err(ParseError::Alignment(s.trim().to_string())),
        }
    }
}

/// The lawful/neutral/chaotic behavioral axis. Declaration order is the
/// enumeration order pickers fall back to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Nature {
    /// Lawful.
    Lawful,
    /// Neutral on the behavioral axis.
    Neutral,
    /// Chaotic.
    Chaotic,
}

impl Nature {
    /// All three natures in enumeration order.
    pub const ALL: [Nature; 3] = [Nature::Lawful, Nature::Neutral, Nature::Chaotic];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Lawful => "Lawful",
            Self::Neutral => "Neutral",
            Self::Chaotic => "Chaotic",
        }
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Nature {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lawful" => Ok(Self::Lawful),
            "neutral" => Ok(Self::Neutral),
            "chaotic" => Ok(Self::Chaotic),
            _ => Err(ParseError::Nature(s.trim().to_string())),
        }
    }
}
