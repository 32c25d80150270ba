//! Bishop legality predicate.

use crate::game_state::board::Board;
use crate::game_state::chess_types::BoardLocation;

/// Read-only bishop legality check: equal absolute rank/file delta, with
/// every square strictly between source and destination empty.
pub fn is_valid_bishop_move(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    if (from.0 - to.0).abs() != (from.1 - to.1).abs() {
        return false;
    }

    let rank_step = (to.0 - from.0).signum();
    let file_step = (to.1 - from.1).signum();
    let mut rank = from.0 + rank_step;
    let mut file = from.1 + file_step;
    while rank != to.0 {
        if board.piece_at((rank, file)).is_some() {
            return false;
        }
        rank += rank_step;
        file += file_step;
    }

    true
}
