use std::io;

use thiserror::Error;

/// Failure while loading or merging a charset definition.
///
/// The rendered text is the plain message of the innermost failure, so an
/// error raised inside a `Parent` definition reads the same at every level of
/// the chain.
#[derive(Error, Debug)]
pub enum CharsetError {
    /// See [`SyntaxError`].
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// See [`SemanticError`].
    #[error(transparent)]
    Semantic(#[from] SemanticError),
    /// The table could not be allocated.
    #[error("cannot allocate memory")]
    OutOfMemory,
    /// A definition could not be opened or read.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// A `Parent` chain ran out of inheritance budget.
    #[error("inheritance depth exceeded")]
    DepthExceeded,
}

/// Malformed definition text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxError {
    /// A lowercase hex digit was required.
    #[error("hexadecimal digit expected")]
    HexDigitExpected,
    /// Code and value must be separated by blanks.
    #[error("space or tab character expected")]
    SpaceExpected,
    /// Trailing text after a mapping.
    #[error("end of line expected")]
    EndOfLineExpected,
    /// Input ended inside a line.
    #[error("unexpected end of file")]
    UnexpectedEndOfFile,
    /// A header line exceeds 76 bytes.
    #[error("header line too long")]
    HeaderLineTooLong,
}

/// Well-formed text describing an impossible charset.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SemanticError {
    /// A second `Size` in the chain.
    #[error("size already defined")]
    SizeAlreadyDefined,
    /// A second `Order` in the chain.
    #[error("order already defined")]
    OrderAlreadyDefined,
    /// A second `Shift`, or one after the table exists.
    #[error("shift already defined")]
    ShiftAlreadyDefined,
    /// Missing or impossible `Size`, `Order` or `Shift`.
    #[error("no valid character parameters defined")]
    InvalidParameters,
    /// A code byte outside `[shift, shift + size)`.
    #[error("octet value out of range")]
    OctetOutOfRange,
}

/// Coarse classification of a [`CharsetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The definition text does not follow the grammar.
    Syntax,
    /// Duplicate or out-of-range parameters and codes.
    Semantic,
    /// Allocation or I/O failure.
    Resource,
    /// The inheritance budget ran out.
    Depth,
}

impl CharsetError {
    /// Returns the class this failure belongs to.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(_) => ErrorKind::Syntax,
            Self::Semantic(_) => ErrorKind::Semantic,
            Self::OutOfMemory | Self::Io(_) => ErrorKind::Resource,
            Self::DepthExceeded => ErrorKind::Depth,
        }
    }
}
