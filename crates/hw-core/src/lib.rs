//! Core types for Heldenwerk: character templates, tags, and equipment.
//!
//! This crate defines the data model the rules engine validates against.
//! It carries no creation logic of its own; construct a [`Character`]
//! programmatically or deserialize one from JSON.

/// Race and sex tags.
pub mod ancestry;
/// Numeric attribute block for characters.
pub mod attributes;
/// The character record and its identifier.
pub mod character;
/// Equipment slots and the per-character loadout.
pub mod equipment;
/// Error types used throughout the crate.
pub mod error;
/// Alignment and nature tags.
pub mod ethos;
/// Standard and advanced class tags.
pub mod vocation;

/// Re-export ancestry tags.
pub use ancestry::{Race, Sex};
/// Re-export the attribute block.
pub use attributes::Attributes;
/// Re-export the character record.
pub use character::{Character, CharacterId};
/// Re-export equipment types.
pub use equipment::{EquipmentSlot, Loadout};
/// Re-export error types.
pub use error::{ParseError, ParseResult};
/// Re-export ethos tags.
pub use ethos::{Alignment, Nature};
/// Re-export vocation tags.
pub use vocation::{AdvancedClass, StandardClass};
