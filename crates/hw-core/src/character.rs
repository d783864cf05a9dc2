use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ancestry::{Race, Sex};
use crate::attributes::Attributes;
use crate::equipment::Loadout;
use crate::ethos::{Alignment, Nature};
use crate::vocation::{AdvancedClass, StandardClass};

/// Unique identifier for every character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A character template: identity, classification tags, stats, and
/// equipment.
///
/// This is a plain record. Whether a race/class/alignment/nature
/// combination is legal is the rules crate's business; callers are
/// expected to get a verdict there before constructing one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier for this character.
    pub id: CharacterId,
    /// Display name.
    pub name: String,
    /// Character sex.
    pub sex: Sex,
    /// Character ancestry.
    pub race: Race,
    /// Base vocational class.
    pub base_class: StandardClass,
    /// Optional prestige class on top of the base class.
    pub advanced_class: Option<AdvancedClass>,
    /// Ethical-axis tag.
    pub alignment: Alignment,
    /// Behavioral-axis tag.
    pub nature: Nature,
    /// Numeric stat block.
    pub attributes: Attributes,
    /// Equipment, one entry per slot.
    pub loadout: Loadout,
    /// Timestamp when the character was created.
    pub created_at: DateTime<Utc>,
}

impl Character {
    /// Create a character with default attributes and an empty loadout.
    pub fn new(
        name: impl Into<String>,
        sex: Sex,
        race: Race,
        base_class: StandardClass,
        alignment: Alignment,
        nature: Nature,
    ) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            sex,
            race,
            base_class,
            advanced_class: None,
            alignment,
            nature,
            attributes: Attributes::default(),
            loadout: Loadout::new(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Character {
        Character::new(
            "Kara",
            Sex::Female,
            Race::Human,
            StandardClass::Fighter,
            Alignment::Neutral,
            Nature::Neutral,
        )
    }

    #[test]
    fn character_id_display_shows_short_form() {
        let id = CharacterId(Uuid::parse_str("a3f2b1c8-1234-5678-9abc-def012345678").unwrap());
        assert_eq!(id.to_string(), "a3f2b1c8");
    }

    #[test]
    fn new_character_starts_empty_handed() {
        let character = sample();
        assert_eq!(character.name, "Kara");
        assert_eq!(character.attributes.level, 1);
        assert_eq!(character.loadout.occupied_count(), 0);
        assert!(character.advanced_class.is_none());
    }

    #[test]
    fn character_serializes_to_json_and_back() {
        let mut character = sample();
        character.advanced_class = Some(AdvancedClass::Duelist);
        character
            .loadout
            .equip(crate::equipment::EquipmentSlot::Back, "wool cloak");

        let json = serde_json::to_string(&character).unwrap();
        let parsed: Character = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.id, character.id);
        assert_eq!(parsed.race, Race::Human);
        assert_eq!(parsed.advanced_class, Some(AdvancedClass::Duelist));
        assert_eq!(
            parsed.loadout.item(crate::equipment::EquipmentSlot::Back),
            Some("wool cloak")
        );
    }
}
