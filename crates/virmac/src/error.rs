use thiserror::Error;

/// Crate-level result type
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by this crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("invalid buffer length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },
}

/// A textual address could not be parsed.
///
/// Callers should treat any `ParseError` as unusable input. The `kind` is
/// diagnostic detail only and is not part of the compatibility contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid MAC address {input:?}: {kind}")]
pub struct ParseError {
    input: String,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_string(),
            kind,
        }
    }

    /// The rejected input
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Why the input was rejected
    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }
}

/// Reason a grouped-hex string was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    #[error("group {group} does not start with a hex digit")]
    InvalidDigit { group: usize },

    #[error("group {group} has {len} hex digits, expected 1 or 2")]
    GroupLength { group: usize, len: usize },

    #[error("group {group} is not followed by ':'")]
    MissingSeparator { group: usize },

    #[error("input ends after {found} groups")]
    TooFewGroups { found: usize },

    #[error("unexpected data after the last group")]
    TrailingData,
}
