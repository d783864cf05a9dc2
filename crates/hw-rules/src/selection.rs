//! Live narrowing of alignment and nature pickers.
//!
//! Pickers call [`Selection::reconciled`] after every race or class
//! change: a choice that is no longer legal snaps to the first legal
//! value in enumeration order, or clears entirely when nothing remains.

use std::collections::BTreeSet;

use hw_core::{Alignment, Nature, Race, StandardClass};
use serde::{Deserialize, Serialize};

use crate::rulebook::Rulebook;

/// A partially completed character-creation form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Chosen race, if any.
    pub race: Option<Race>,
    /// Chosen class, if any.
    pub class: Option<StandardClass>,
    /// Chosen alignment, if any.
    pub alignment: Option<Alignment>,
    /// Chosen nature, if any.
    pub nature: Option<Nature>,
}

impl Selection {
    /// Set the race.
    pub fn with_race(mut self, race: Race) -> Self {
        self.race = Some(race);
        self
    }

    /// Set the class.
    pub fn with_class(mut self, class: StandardClass) -> Self {
        self.class = Some(class);
        self
    }

    /// Set the alignment.
    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = Some(alignment);
        self
    }

    /// Set the nature.
    pub fn with_nature(mut self, nature: Nature) -> Self {
        self.nature = Some(nature);
        self
    }

    /// True once all four fields are chosen.
    pub fn is_complete(&self) -> bool {
        self.race.is_some()
            && self.class.is_some()
            && self.alignment.is_some()
            && self.nature.is_some()
    }

    /// A copy whose alignment and nature are legal under `book`.
    ///
    /// A choice inside the allowed set is kept. One outside it becomes
    /// the first allowed value, or `None` when the allowed set is empty.
    /// An unchosen field stays unchosen; race and class are never
    /// touched.
    pub fn reconciled(self, book: &Rulebook) -> Self {
        let (alignments, natures) = book.allowed_choices(self.race, self.class);
        Self {
            alignment: reconcile(self.alignment, &alignments),
            nature: reconcile(self.nature, &natures),
            ..self
        }
    }
}

fn reconcile<T: Copy + Ord>(current: Option<T>, allowed: &BTreeSet<T>) -> Option<T> {
    match current {
        None => None,
        Some(value) if allowed.contains(&value) => Some(value),
        Some(_) => allowed.iter().next().copied(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legal_choices_are_kept() {
        let book = Rulebook::standard();
        let selection = Selection::default()
            .with_race(Race::Human)
            .with_class(StandardClass::Fighter)
            .with_alignment(Alignment::Evil)
            .with_nature(Nature::Chaotic)
            .reconciled(&book);
        assert_eq!(selection.alignment, Some(Alignment::Evil));
        assert_eq!(selection.nature, Some(Nature::Chaotic));
    }

    #[test]
    fn illegal_alignment_snaps_to_first_allowed() {
        let book = Rulebook::standard();
        // Picking orc with a good alignment already selected: only evil
        // remains, so the picker lands there.
        let selection = Selection::default()
            .with_race(Race::Orc)
            .with_alignment(Alignment::Good)
            .reconciled(&book);
        assert_eq!(selection.alignment, Some(Alignment::Evil));
    }

    #[test]
    fn illegal_nature_snaps_in_enumeration_order() {
        let book = Rulebook::standard();
        // Paladin allows only lawful; lawful is also first in enumeration
        // order, so a chaotic pick snaps to it.
        let selection = Selection::default()
            .with_class(StandardClass::Paladin)
            .with_nature(Nature::Chaotic)
            .reconciled(&book);
        assert_eq!(selection.nature, Some(Nature::Lawful));
    }

    #[test]
    fn empty_allowed_set_clears_the_choice() {
        let book = Rulebook::standard();
        // Orc + paladin leave no legal alignment at all.
        let selection = Selection::default()
            .with_race(Race::Orc)
            .with_class(StandardClass::Paladin)
            .with_alignment(Alignment::Evil)
            .reconciled(&book);
        assert_eq!(selection.alignment, None);
    }

    #[test]
    fn unchosen_fields_stay_unchosen() {
        let book = Rulebook::standard();
        let selection = Selection::default().with_race(Race::Orc).reconciled(&book);
        assert_eq!(selection.alignment, None);
        assert_eq!(selection.nature, None);
    }

    #[test]
    fn race_and_class_are_never_touched() {
        let book = Rulebook::standard();
        let selection = Selection::default()
            .with_race(Race::Dwarf)
            .with_class(StandardClass::Barbarian)
            .with_nature(Nature::Neutral)
            .reconciled(&book);
        assert_eq!(selection.race, Some(Race::Dwarf));
        assert_eq!(selection.class, Some(StandardClass::Barbarian));
        // Dwarf (lawful) and barbarian (chaotic) leave no legal nature.
        assert_eq!(selection.nature, None);
    }

    #[test]
    fn is_complete_requires_all_four() {
        let selection = Selection::default()
            .with_race(Race::Human)
            .with_class(StandardClass::Bard)
            .with_alignment(Alignment::Good);
        assert!(!selection.is_complete());
        assert!(selection.with_nature(Nature::Neutral).is_complete());
    }

    #[test]
    fn reconciled_is_idempotent() {
        let book = Rulebook::standard();
        let once = Selection::default()
            .with_race(Race::Elf)
            .with_nature(Nature::Lawful)
            .reconciled(&book);
        assert_eq!(once.reconciled(&book), once);
    }
}
