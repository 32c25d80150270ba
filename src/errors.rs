//! The two recoverable failure kinds surfaced to the turn loop.
//!
//! Both are retry signals: the caller reprompts and the game state is
//! guaranteed untouched. Checkmate is a terminal game state, not an error,
//! and internal inconsistencies such as a missing king are handled by the
//! analysis layer rather than reported here.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move string failed the `<square>,<square>` grammar. Payload: the
    /// offending input, for the diagnostic message.
    MalformedInput(String),
    /// Well-formed coordinates, but the per-piece legality predicate
    /// rejected the move or the destination holds a same-color piece.
    IllegalMove,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::MalformedInput(input) => write!(f, "invalid move format: {input:?}"),
            MoveError::IllegalMove => write!(f, "illegal move"),
        }
    }
}

impl Error for MoveError {}
