//! The rulebook: which alignments and natures each race and class allows.
//!
//! A [`Rulebook`] is built once and never mutated afterwards; every
//! operation on it is a pure function, so concurrent callers need no
//! coordination. [`Rulebook::standard`] carries the stock tables; custom
//! books can be assembled with the `with_*` builders.

use std::collections::{BTreeMap, BTreeSet};

use hw_core::{Alignment, Nature, Race, StandardClass};
use serde::{Deserialize, Serialize};

use crate::error::{Incompatibility, RulesResult};
use crate::restriction::Restriction;

/// Compatibility rules consulted during character creation.
///
/// Races or classes without an entry are unrestricted on both axes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rulebook {
    race_rules: BTreeMap<Race, Restriction>,
    class_rules: BTreeMap<StandardClass, Restriction>,
}

impl Rulebook {
    /// The stock rulebook.
    ///
    /// Orcs are bound to evil, dwarves to lawful natures, elves to chaotic
    /// natures. Paladins demand good and lawful, barbarians chaos, druids
    /// neutrality.
    pub fn standard() -> Self {
        Self::default()
            .with_race_rule(
                Race::Orc,
                Restriction::unrestricted().with_alignments([Alignment::Evil]),
            )
            .with_race_rule(
                Race::Dwarf,
                Restriction::unrestricted().with_natures([Nature::Lawful]),
            )
            .with_race_rule(
                Race::Elf,
                Restriction::unrestricted().with_natures([Nature::Chaotic]),
            )
            .with_class_rule(
                StandardClass::Paladin,
                Restriction::unrestricted()
                    .with_alignments([Alignment::Good])
                    .with_natures([Nature::Lawful]),
            )
            .with_class_rule(
                StandardClass::Barbarian,
                Restriction::unrestricted().with_natures([Nature::Chaotic]),
            )
            .with_class_rule(
                StandardClass::Druid,
                Restriction::unrestricted().with_alignments([Alignment::Neutral]),
            )
    }

    /// Add or replace the rule for a race.
    pub fn with_race_rule(mut self, race: Race, rule: Restriction) -> Self {
        self.race_rules.insert(race, rule);
        self
    }

    /// Add or replace the rule for a class.
    pub fn with_class_rule(mut self, class: StandardClass, rule: Restriction) -> Self {
        self.class_rules.insert(class, rule);
        self
    }

    /// The restriction registered for a race, if any.
    pub fn race_rule(&self, race: Race) -> Option<&Restriction> {
        self.race_rules.get(&race)
    }

    /// The restriction registered for a class, if any.
    pub fn class_rule(&self, class: StandardClass) -> Option<&Restriction> {
        self.class_rules.get(&class)
    }

    /// Alignments still legal given a partial race/class selection.
    ///
    /// Starts from the full enumeration and intersects whichever
    /// restrictions apply. The result can be empty when race and class
    /// demand disjoint alignments.
    pub fn allowed_alignments(
        &self,
        race: Option<Race>,
        class: Option<StandardClass>,
    ) -> BTreeSet<Alignment> {
        let mut allowed: BTreeSet<Alignment> = Alignment::ALL.into_iter().collect();
        if let Some(set) = race
            .and_then(|r| self.race_rules.get(&r))
            .and_then(|rule| rule.alignments.as_ref())
        {
            allowed.retain(|a| set.contains(a));
        }
        if let Some(set) = class
            .and_then(|c| self.class_rules.get(&c))
            .and_then(|rule| rule.alignments.as_ref())
        {
            allowed.retain(|a| set.contains(a));
        }
        allowed
    }

    /// Natures still legal given a partial race/class selection.
    pub fn allowed_natures(
        &self,
        race: Option<Race>,
        class: Option<StandardClass>,
    ) -> BTreeSet<Nature> {
        let mut allowed: BTreeSet<Nature> = Nature::ALL.into_iter().collect();
        if let Some(set) = race
            .and_then(|r| self.race_rules.get(&r))
            .and_then(|rule| rule.natures.as_ref())
        {
            allowed.retain(|n| set.contains(n));
        }
        if let Some(set) = class
            .and_then(|c| self.class_rules.get(&c))
            .and_then(|rule| rule.natures.as_ref())
        {
            allowed.retain(|n| set.contains(n));
        }
        allowed
    }

    /// Both axes at once, the shape pickers consume.
    pub fn allowed_choices(
        &self,
        race: Option<Race>,
        class: Option<StandardClass>,
    ) -> (BTreeSet<Alignment>, BTreeSet<Nature>) {
        (
            self.allowed_alignments(race, class),
            self.allowed_natures(race, class),
        )
    }

    /// Definitive verdict on a full selection.
    ///
    /// Checks race-alignment, class-alignment, race-nature, class-nature
    /// in that order; the first violated rule is reported. Accepts exactly
    /// when the alignment and nature are both in their allowed sets.
    pub fn validate(
        &self,
        race: Race,
        class: StandardClass,
        alignment: Alignment,
        nature: Nature,
    ) -> RulesResult<()> {
        let race_rule = self.race_rules.get(&race);
        let class_rule = self.class_rules.get(&class);

        if race_rule.is_some_and(|rule| !rule.permits_alignment(alignment)) {
            return Err(Incompatibility::AlignmentVsRace);
        }
        if class_rule.is_some_and(|rule| !rule.permits_alignment(alignment)) {
            return Err(Incompatibility::AlignmentVsClass);
        }
        if race_rule.is_some_and(|rule| !rule.permits_nature(nature)) {
            return Err(Incompatibility::NatureVsRace);
        }
        if class_rule.is_some_and(|rule| !rule.permits_nature(nature)) {
            return Err(Incompatibility::NatureVsClass);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrestricted_pair_allows_everything() {
        let book = Rulebook::standard();
        let (alignments, natures) =
            book.allowed_choices(Some(Race::Human), Some(StandardClass::Fighter));
        assert_eq!(alignments, Alignment::ALL.into_iter().collect());
        assert_eq!(natures, Nature::ALL.into_iter().collect());
    }

    #[test]
    fn no_selection_allows_everything() {
        let book = Rulebook::standard();
        let (alignments, natures) = book.allowed_choices(None, None);
        assert_eq!(alignments.len(), 3);
        assert_eq!(natures.len(), 3);
    }

    #[test]
    fn orc_narrows_alignment_to_evil() {
        let book = Rulebook::standard();
        let alignments = book.allowed_alignments(Some(Race::Orc), None);
        assert_eq!(alignments, BTreeSet::from([Alignment::Evil]));
        // Natures stay open.
        assert_eq!(book.allowed_natures(Some(Race::Orc), None).len(), 3);
    }

    #[test]
    fn disjoint_rules_leave_nothing() {
        // Orc demands evil, paladin demands good.
        let book = Rulebook::standard();
        let alignments = book.allowed_alignments(Some(Race::Orc), Some(StandardClass::Paladin));
        assert!(alignments.is_empty());
    }

    #[test]
    fn orc_fighter_evil_neutral_is_accepted() {
        let book = Rulebook::standard();
        assert!(
            book.validate(
                Race::Orc,
                StandardClass::Fighter,
                Alignment::Evil,
                Nature::Neutral,
            )
            .is_ok()
        );
    }

    #[test]
    fn orc_fighter_good_is_rejected_against_race() {
        let book = Rulebook::standard();
        assert_eq!(
            book.validate(
                Race::Orc,
                StandardClass::Fighter,
                Alignment::Good,
                Nature::Neutral,
            ),
            Err(Incompatibility::AlignmentVsRace)
        );
    }

    #[test]
    fn dwarf_paladin_good_lawful_is_accepted() {
        let book = Rulebook::standard();
        assert!(
            book.validate(
                Race::Dwarf,
                StandardClass::Paladin,
                Alignment::Good,
                Nature::Lawful,
            )
            .is_ok()
        );
    }

    #[test]
    fn dwarf_barbarian_reports_race_nature_first() {
        // Dwarf demands lawful, barbarian demands chaotic; the race check
        // runs before the class check, so the race reason wins.
        let book = Rulebook::standard();
        assert_eq!(
            book.validate(
                Race::Dwarf,
                StandardClass::Barbarian,
                Alignment::Neutral,
                Nature::Chaotic,
            ),
            Err(Incompatibility::NatureVsRace)
        );
    }

    #[test]
    fn simultaneous_alignment_violations_report_race_first() {
        // Neutral violates both the orc rule (evil) and the paladin rule
        // (good); the race reason must win.
        let book = Rulebook::standard();
        assert_eq!(
            book.validate(
                Race::Orc,
                StandardClass::Paladin,
                Alignment::Neutral,
                Nature::Lawful,
            ),
            Err(Incompatibility::AlignmentVsRace)
        );
    }

    #[test]
    fn alignment_violations_outrank_nature_violations() {
        // Orc/barbarian with good+lawful violates race-alignment and
        // class-nature; the alignment check runs first.
        let book = Rulebook::standard();
        assert_eq!(
            book.validate(
                Race::Orc,
                StandardClass::Barbarian,
                Alignment::Good,
                Nature::Lawful,
            ),
            Err(Incompatibility::AlignmentVsRace)
        );
    }

    #[test]
    fn class_only_rules_fire_when_race_is_open() {
        let book = Rulebook::standard();
        assert_eq!(
            book.validate(
                Race::Human,
                StandardClass::Druid,
                Alignment::Good,
                Nature::Neutral,
            ),
            Err(Incompatibility::AlignmentVsClass)
        );
        assert_eq!(
            book.validate(
                Race::Human,
                StandardClass::Barbarian,
                Alignment::Neutral,
                Nature::Lawful,
            ),
            Err(Incompatibility::NatureVsClass)
        );
    }

    #[test]
    fn rule_accessors_expose_the_tables() {
        let book = Rulebook::standard();
        let orc = book.race_rule(Race::Orc).unwrap();
        assert_eq!(
            orc.alignments,
            Some(BTreeSet::from([Alignment::Evil]))
        );
        assert!(orc.natures.is_none());
        assert!(book.race_rule(Race::Human).is_none());
        assert!(book.class_rule(StandardClass::Paladin).is_some());
        assert!(book.class_rule(StandardClass::Wizard).is_none());
    }

    #[test]
    fn allowed_choices_is_stable_across_calls() {
        let book = Rulebook::standard();
        let first = book.allowed_choices(Some(Race::Elf), Some(StandardClass::Paladin));
        let second = book.allowed_choices(Some(Race::Elf), Some(StandardClass::Paladin));
        assert_eq!(first, second);
    }
}
