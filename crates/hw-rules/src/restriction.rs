//! Per-race and per-class limits on alignment and nature.

use std::collections::BTreeSet;

use hw_core::{Alignment, Nature};
use serde::{Deserialize, Serialize};

/// The limits a race or class places on character creation.
///
/// `None` on an axis means unrestricted. A present set is non-empty and a
/// strict narrowing; a rule that permitted nothing would make its owner
/// unplayable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    /// Permitted alignments, if limited.
    pub alignments: Option<BTreeSet<Alignment>>,
    /// Permitted natures, if limited.
    pub natures: Option<BTreeSet<Nature>>,
}

impl Restriction {
    /// A restriction that permits everything on both axes.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    /// Limit the alignment axis to the given values.
    pub fn with_alignments<I>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = Alignment>,
    {
        let set: BTreeSet<Alignment> = allowed.into_iter().collect();
        debug_assert!(!set.is_empty(), "alignment restriction must permit something");
        self.alignments = Some(set);
        self
    }

    /// Limit the nature axis to the given values.
    pub fn with_natures<I>(mut self, allowed: I) -> Self
    where
        I: IntoIterator<Item = Nature>,
    {
        let set: BTreeSet<Nature> = allowed.into_iter().collect();
        debug_assert!(!set.is_empty(), "nature restriction must permit something");
        self.natures = Some(set);
        self
    }

    /// True if the alignment passes this restriction.
    pub fn permits_alignment(&self, alignment: Alignment) -> bool {
        self.alignments
            .as_ref()
            .is_none_or(|set| set.contains(&alignment))
    }

    /// True if the nature passes this restriction.
    pub fn permits_nature(&self, nature: Nature) -> bool {
        self.natures.as_ref().is_none_or(|set| set.contains(&nature))
    }
}
