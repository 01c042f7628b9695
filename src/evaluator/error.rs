use thiserror::Error;

/// Why parsing stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FailureKind {
    #[error("expected an element or '(', found '{0}'")]
    UnexpectedCharacter(char),

    #[error("expected an element or '(', found end of formula")]
    UnexpectedEnd,

    #[error("missing ')' for group")]
    UnclosedGroup,

    #[error("')' without matching '('")]
    UnmatchedClose,

    #[error("unknown element symbol")]
    UnknownElement,

    #[error("expected a count")]
    ExpectedCount,

    #[error("count too large")]
    CountOverflow,

    #[error("formula nested too deeply")]
    NestingTooDeep,

    #[error("formula too long")]
    InputTooLarge,

    #[error("formula weighs nothing")]
    ZeroWeight,
}

/// Parse failure at a character offset into the formula
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} at offset {offset}")]
pub struct ParseFailure {
    pub kind: FailureKind,
    pub offset: usize,
}

impl ParseFailure {
    pub(super) fn new(kind: FailureKind, offset: usize) -> Self {
        Self { kind, offset }
    }
}
