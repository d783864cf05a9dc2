//! Validated character creation.
//!
//! A [`CharacterDraft`] gathers the classification fields plus the
//! optional extras, runs the compatibility check, and only on acceptance
//! constructs a [`Character`]. Attribute scores can be rolled
//! 3d6-per-score from a seeded RNG.

use hw_core::{
    AdvancedClass, Alignment, Attributes, Character, Nature, Race, Sex, StandardClass,
};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::RulesResult;
use crate::rulebook::Rulebook;

/// Collected inputs for one character-to-be.
#[derive(Debug, Clone)]
pub struct CharacterDraft {
    name: String,
    sex: Sex,
    race: Race,
    class: StandardClass,
    alignment: Alignment,
    nature: Nature,
    advanced_class: Option<AdvancedClass>,
    attributes: Attributes,
}

impl CharacterDraft {
    /// Start a draft from the required fields.
    pub fn new(
        name: impl Into<String>,
        sex: Sex,
        race: Race,
        class: StandardClass,
        alignment: Alignment,
        nature: Nature,
    ) -> Self {
        Self {
            name: name.into(),
            sex,
            race,
            class,
            alignment,
            nature,
            advanced_class: None,
            attributes: Attributes::default(),
        }
    }

    /// Take an advanced class.
    pub fn with_advanced_class(mut self, advanced: AdvancedClass) -> Self {
        self.advanced_class = Some(advanced);
        self
    }

    /// Use the given attribute block instead of the defaults.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Validate against `book` and construct the character.
    ///
    /// The compatibility verdict is the only gate: on rejection the draft
    /// is consumed and the reason returned; nothing is constructed.
    pub fn build(self, book: &Rulebook) -> RulesResult<Character> {
        book.validate(self.race, self.class, self.alignment, self.nature)?;
        let mut character = Character::new(
            self.name,
            self.sex,
            self.race,
            self.class,
            self.alignment,
            self.nature,
        );
        character.advanced_class = self.advanced_class;
        character.attributes = self.attributes;
        Ok(character)
    }
}

/// Roll 3d6 for each primary score, leaving pools and regeneration at
/// their defaults. Same seed, same scores.
pub fn roll_attributes(seed: u64) -> Attributes {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut score = || (0..3).map(|_| rng.random_range(1..=6)).sum::<u32>();
    Attributes {
        strength: score(),
        dexterity: score(),
        agility: score(),
        constitution: score(),
        intellect: score(),
        wisdom: score(),
        charisma: score(),
        luck: score(),
        ..Attributes::default()
    }
}
