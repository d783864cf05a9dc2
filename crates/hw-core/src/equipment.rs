use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// A body slot that can hold one equipped item.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentSlot {
    /// Primary weapon hand.
    MainHand,
    /// Shield or secondary weapon hand.
    OffHand,
    /// Head.
    Head,
    /// Left ear.
    LeftEar,
    /// Right ear.
    RightEar,
    /// Neck.
    Neck,
    /// Torso.
    Body,
    /// Hands.
    Hands,
    /// Waist.
    Waist,
    /// Legs.
    Legs,
    /// Feet.
    Feet,
    /// Back.
    Back,
}

impl EquipmentSlot {
    /// All twelve slots in enumeration order.
    pub const ALL: [EquipmentSlot; 12] = [
        EquipmentSlot::MainHand,
        EquipmentSlot::OffHand,
        EquipmentSlot::Head,
        EquipmentSlot::LeftEar,
        EquipmentSlot::RightEar,
        EquipmentSlot::Neck,
        EquipmentSlot::Body,
        EquipmentSlot::Hands,
        EquipmentSlot::Waist,
        EquipmentSlot::Legs,
        EquipmentSlot::Feet,
        EquipmentSlot::Back,
    ];

    /// Canonical display label.
    pub fn label(self) -> &'static str {
        match self {
            Self::MainHand => "Main Hand",
            Self::OffHand => "Off Hand",
            Self::Head => "Head",
            Self::LeftEar => "Left Ear",
            Self::RightEar => "Right Ear",
            Self::Neck => "Neck",
            Self::Body => "Body",
            Self::Hands => "Hands",
            Self::Waist => "Waist",
            Self::Legs => "Legs",
            Self::Feet => "Feet",
            Self::Back => "Back",
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for EquipmentSlot {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept "main hand", "main_hand", and "main-hand".
        match s.trim().to_lowercase().replace(['_', '-'], " ").as_str() {
            "main hand" => Ok(Self::MainHand),
            "off hand" => Ok(Self::OffHand),
            "head" => Ok(Self::Head),
            "left ear" => Ok(Self::LeftEar),
            "right ear" => Ok(Self::RightEar),
            "neck" => Ok(Self::Neck),
            "body" => Ok(Self::Body),
            "hands" => Ok(Self::Hands),
            "waist" => Ok(Self::Waist),
            "legs" => Ok(Self::Legs),
            "feet" => Ok(Self::Feet),
            "back" => Ok(Self::Back),
            _ => Err(ParseError::Slot(s.trim().to_string())),
        }
    }
}

/// A character's equipment: one entry per slot, unoccupied slots hold
/// `None`.
///
/// [`Loadout::new`] initializes every slot empty, and [`Loadout::slots`]
/// always yields all twelve slots in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loadout {
    slots: BTreeMap<EquipmentSlot, Option<String>>,
}

impl Default for Loadout {
    fn default() -> Self {
        Self::new()
    }
}

impl Loadout {
    /// A loadout with every slot present and unoccupied.
    pub fn new() -> Self {
        Self {
            slots: EquipmentSlot::ALL.into_iter().map(|slot| (slot, None)).collect(),
        }
    }

    /// Put an item in a slot, returning whatever it displaced.
    pub fn equip(&mut self, slot: EquipmentSlot, item: impl Into<String>) -> Option<String> {
        self.slots.insert(slot, Some(item.into())).flatten()
    }

    /// Empty a slot, returning the removed item.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<String> {
        self.slots.insert(slot, None).flatten()
    }

    /// The item in a slot, if any.
    pub fn item(&self, slot: EquipmentSlot) -> Option<&str> {
        self.slots.get(&slot).and_then(|item| item.as_deref())
    }

    /// True if the slot holds an item.
    pub fn is_occupied(&self, slot: EquipmentSlot) -> bool {
        self.item(slot).is_some()
    }

    /// Number of slots currently holding an item.
    pub fn occupied_count(&self) -> usize {
        EquipmentSlot::ALL
            .into_iter()
            .filter(|&slot| self.is_occupied(slot))
            .count()
    }

    /// Every slot with its current item, in enumeration order.
    pub fn slots(&self) -> impl Iterator<Item = (EquipmentSlot, Option<&str>)> {
        EquipmentSlot::ALL.into_iter().map(|slot| (slot, self.item(slot)))
    }
}
