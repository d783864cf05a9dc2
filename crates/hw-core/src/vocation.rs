use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Base vocational archetype. Declaration order is the enumeration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum StandardClass {
    /// Barbarians are bound to chaotic natures.
    Barbarian,
    /// Unrestricted.
    Bard,
    /// Unrestricted.
    Cleric,
    /// Druids are bound to neutral alignments.
    Druid,
    /// Unrestricted.
    Fighter,
    /// Unrestricted.
    Monk,
    /// Paladins are bound to good alignments and lawful natures.
    Paladin,
    /// Unrestricted.
    Ranger,
    /// Unrestricted.
    Rogue,
    /// Unrestricted.
    Sorcerer,
    /// Unrestricted.
    Warlock,
    /// Unrestricted.
    Wizard,
}

impl StandardClass {
    /// Every standard class in enumeration order.
    pub const ALL: [StandardClass; 12] = [
        StandardClass::Barbarian,
        StandardClass::Bard,
        StandardClass::Cleric,
        StandardClass::Druid,
        StandardClass::Fighter,
        StandardClass::Monk,
        StandardClass::Paladin,
        StandardClass::Ranger,
        StandardClass::Rogue,
        StandardClass::Sorcerer,
        StandardClass::Warlock,
        StandardClass::Wizard,
    ];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Barbarian => "Barbarian",
            Self::Bard => "Bard",
            Self::Cleric => "Cleric",
            Self::Druid => "Druid",
            Self::Fighter => "Fighter",
            Self::Monk => "Monk",
            Self::Paladin => "Paladin",
            Self::Ranger => "Ranger",
            Self::Rogue => "Rogue",
            Self::Sorcerer => "Sorcerer",
            Self::Warlock => "Warlock",
            Self::Wizard => "Wizard",
        }
    }
}

impl fmt::Display for StandardClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for StandardClass {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "barbarian" => Ok(Self::Barbarian),
            "bard" => Ok(Self::Bard),
            "cleric" => Ok(Self::Cleric),
            "druid" => Ok(Self::Druid),
            "fighter" => Ok(Self::Fighter),
            "monk" => Ok(Self::Monk),
            "paladin" => Ok(Self::Paladin),
            "ranger" => Ok(Self::Ranger),
            "rogue" => Ok(Self::Rogue),
            "sorcerer" => Ok(Self::Sorcerer),
            "warlock" => Ok(Self::Warlock),
            "wizard" => Ok(Self::Wizard),
            _ => Err(ParseError::Class(s.trim().to_string())),
        }
    }
}

/// Prestige archetype layered on top of a standard class. No advanced
/// class carries creation restrictions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum AdvancedClass {
    /// Arcane Archer.
    ArcaneArcher,
    /// Assassin.
    Assassin,
    /// Blackguard.
    Blackguard,
    /// Dragon Disciple.
    DragonDisciple,
    /// Duelist.
    Duelist,
    /// Loremaster.
    Loremaster,
    /// Mystic Theurge.
    MysticTheurge,
    /// Shadowdancer.
    Shadowdancer,
}

impl AdvancedClass {
    /// Every advanced class in enumeration order.
    pub const ALL: [AdvancedClass; 8] = [
        AdvancedClass::ArcaneArcher,
        AdvancedClass::Assassin,
        AdvancedClass::Blackguard,
        AdvancedClass::DragonDisciple,
        AdvancedClass::Duelist,
        AdvancedClass::Loremaster,
        AdvancedClass::MysticTheurge,
        AdvancedClass::Shadowdancer,
    ];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::ArcaneArcher => "Arcane Archer",
            Self::Assassin => "Assassin",
            Self::Blackguard => "Blackguard",
            Self::DragonDisciple => "Dragon Disciple",
            Self::Duelist => "Duelist",
            Self::Loremaster => "Loremaster",
            Self::MysticTheurge => "Mystic Theurge",
            Self::Shadowdancer => "Shadowdancer",
        }
    }
}

impl fmt::Display for AdvancedClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for AdvancedClass {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept "mystic theurge", "mystic_theurge", and "mystic-theurge".
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "arcane archer" => Ok(Self::ArcaneArcher),
            "assassin" => Ok(Self::Assassin),
            "blackguard" => Ok(Self::Blackguard),
            "dragon disciple" => Ok(Self::DragonDisciple),
            "duelist" => Ok(Self::Duelist),
            "loremaster" => Ok(Self::Loremaster),
            "mystic theurge" => Ok(Self::MysticTheurge),
            "shadowdancer" => Ok(Self::Shadowdancer),
            _ => Err(ParseError::AdvancedClass(s.trim().to_string())),
        }
    }
}
