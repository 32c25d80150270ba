//! Coordinate-pair move parser.
//!
//! Accepts two squares separated by a comma, each a lowercase file letter
//! `a`..`h` followed by a rank digit `1`..`8`, for example `e2,e4`. Any
//! deviation in length, delimiter, or character range is a parse failure,
//! reported distinctly from a legality failure.

use crate::errors::MoveError;
use crate::game_state::chess_types::BoardLocation;

/// Parse a move string into `(from, to)` board locations.
pub fn parse_move(input: &str) -> Result<(BoardLocation, BoardLocation), MoveError> {
    let Some((from_str, to_str)) = input.split_once(',') else {
        return Err(MoveError::MalformedInput(input.to_owned()));
    };
    Ok((parse_square(from_str)?, parse_square(to_str)?))
}

/// Parse one square: file letter maps to the column index, rank digit to
/// the row index (rank `'1'` is row 0).
fn parse_square(square: &str) -> Result<BoardLocation, MoveError> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(MoveError::MalformedInput(square.to_owned()));
    }

    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(MoveError::MalformedInput(square.to_owned()));
    }

    Ok(((rank - b'1') as i8, (file - b'a') as i8))
}
