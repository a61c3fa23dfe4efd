//! Error type shared by the codec, the generators and the command layer.

use std::fmt;

/// Errors reported to the caller of a truth table operation.
///
/// None of these leave a partially modified store behind: every check runs
/// before the store is touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TtError {
    /// Malformed textual truth table.
    Parse(String),
    /// The operation needs a current truth table, but the store is empty.
    NoCurrentTable,
    /// Out-of-range generator argument, e.g. an even number of bits for `maj`.
    InvalidArgument(String),
    /// Violated precondition of a transformation, e.g. shrinking to more variables.
    Precondition(String),
}

impl fmt::Display for TtError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TtError::Parse(msg) => write!(f, "Parse error: {}", msg),
            TtError::NoCurrentTable => write!(f, "no current truth table available"),
            TtError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            TtError::Precondition(msg) => write!(f, "Precondition violated: {}", msg),
        }
    }
}

impl std::error::Error for TtError {}
