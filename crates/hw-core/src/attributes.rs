use serde::{Deserialize, Serialize};

/// The numeric stats every character template carries.
///
/// Resource pools and regeneration rates start at zero; nothing here is
/// derived from anything else, and progression is out of scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Character level.
    pub level: u32,
    /// Hit points.
    pub hp: u32,
    /// Magic points.
    pub mp: u32,
    /// Stamina pool.
    pub stamina: u32,
    /// Hit-point regeneration rate.
    pub hp_regen: u32,
    /// Magic-point regeneration rate.
    pub mp_regen: u32,
    /// Stamina regeneration rate.
    pub stamina_regen: u32,
    /// Physical power.
    pub strength: u32,
    /// Precision and reflexes.
    pub dexterity: u32,
    /// Movement speed and evasion.
    pub agility: u32,
    /// Toughness and endurance.
    pub constitution: u32,
    /// Reasoning and memory.
    pub intellect: u32,
    /// Perception and judgment.
    pub wisdom: u32,
    /// Presence and persuasion.
    pub charisma: u32,
    /// Fortune.
    pub luck: u32,
}

impl Default for Attributes {
    fn default() -> Self {
        Self {
            level: 1,
            hp: 0,
            mp: 0,
            stamina: 0,
            hp_regen: 0,
            mp_regen: 0,
            stamina_regen: 0,
            strength: 0,
            dexterity: 0,
            agility: 0,
            constitution: 0,
            intellect: 0,
            wisdom: 0,
            charisma: 0,
            luck: 0,
        }
    }
}

impl Attributes {
    /// The eight primary scores as (label, value) pairs in sheet order.
    pub fn primary_scores(&self) -> [(&'static str, u32); 8] {
        [
            ("Strength", self.strength),
            ("Dexterity", self.dexterity),
            ("Agility", self.agility),
            ("Constitution", self.constitution),
            ("Intellect", self.intellect),
            ("Wisdom", self.wisdom),
            ("Charisma", self.charisma),
            ("Luck", self.luck),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_starts_at_level_one() {
        let attrs = Attributes::default();
        assert_eq!(attrs.level, 1);
        assert_eq!(attrs.hp, 0);
        assert_eq!(attrs.strength, 0);
    }

    #[test]
    fn primary_scores_reflect_fields() {
        let attrs = Attributes {
            strength: 14,
            luck: 3,
            ..Attributes::default()
        };
        let scores = attrs.primary_scores();
        assert_eq!(scores[0], ("Strength", 14));
        assert_eq!(scores[7], ("Luck", 3));
    }
}
