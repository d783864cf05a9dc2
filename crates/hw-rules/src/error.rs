//! Error types for the rules engine.

/// Alias for `Result<T, Incompatibility>`.
pub type RulesResult<T> = Result<T, Incompatibility>;

/// Why a race/class/alignment/nature combination was refused.
///
/// Checks run in a fixed order (race-alignment, class-alignment,
/// race-nature, class-nature) and the first violated rule is the one
/// reported, even when several are violated at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Incompatibility {
    /// The chosen alignment is outside the race's permitted set.
    #[error("alignment incompatible with race")]
    AlignmentVsRace,

    /// The chosen alignment is outside the class's permitted set.
    #[error("alignment incompatible with class")]
    AlignmentVsClass,

    /// The chosen nature is outside the race's permitted set.
    #[error("nature incompatible with race")]
    NatureVsRace,

    /// The chosen nature is outside the class's permitted set.
    #[error("nature incompatible with class")]
    NatureVsClass,
}
