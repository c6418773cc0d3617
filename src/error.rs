use thiserror::Error;

/// Why a string was rejected by [`BigInt`](crate::BigInt) parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidFormatReason {
    /// Nothing left once the optional leading `-` is removed.
    Empty,
    /// First character that is not an ASCII decimal digit, with its byte index in the input.
    InvalidDigit { ch: char, index: usize },
}

impl std::fmt::Display for InvalidFormatReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidFormatReason::Empty => f.write_str("no digits"),
            InvalidFormatReason::InvalidDigit { ch, index } => {
                write!(f, "invalid digit {:?} at index {}", ch, index)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    #[error("invalid big integer literal {input:?}: {reason}")]
    InvalidFormat {
        input: String,
        reason: InvalidFormatReason,
    },
}

impl ParseBigIntError {
    pub(crate) fn invalid_format(input: &str, reason: InvalidFormatReason) -> Self {
        ParseBigIntError::InvalidFormat { input: input.to_owned(), reason }
    }

    pub fn reason(&self) -> InvalidFormatReason {
        match self {
            ParseBigIntError::InvalidFormat { reason, .. } => *reason,
        }
    }
}
