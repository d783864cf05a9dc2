/// Alias for `Result<T, ParseError>`.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors raised when a caller-supplied string matches no tag in a closed
/// enumeration.
///
/// Parsing happens at the presentation boundary; the rules engine only
/// ever sees already-parsed tags.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The string does not name a race.
    #[error("unknown race: \"{0}\"")]
    Race(String),

    /// The string does not name a standard class.
    #[error("unknown class: \"{0}\"")]
    Class(String),

    /// The string does not name an advanced class.
    #[error("unknown advanced class: \"{0}\"")]
    AdvancedClass(String),

    /// The string does not name an alignment.
    #[error("unknown alignment: \"{0}\"")]
    Alignment(String),

    /// The string does not name a nature.
    #[error("unknown nature: \"{0}\"")]
    Nature(String),

    /// The string does not name a sex.
    #[error("unknown sex: \"{0}\"")]
    Sex(String),

    /// The string does not name an equipment slot.
    #[error("unknown equipment slot: \"{0}\"")]
    Slot(String),
}
