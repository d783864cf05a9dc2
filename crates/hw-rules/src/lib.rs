//! Creation-compatibility rules engine for Heldenwerk.
//!
//! Races and classes may restrict which alignments and natures a new
//! character can take. This crate provides the restriction tables, the
//! validator both presentation layers call before constructing a
//! character, the live narrowing of picker choices, and the validated
//! creation path itself.

pub mod creation;
pub mod error;
pub mod restriction;
pub mod rulebook;
pub mod selection;

pub use creation::{CharacterDraft, roll_attributes};
pub use error::{Incompatibility, RulesResult};
pub use restriction::Restriction;
pub use rulebook::Rulebook;
pub use selection::Selection;
