//! Rook legality predicate.

use crate::game_state::board::Board;
use crate::game_state::chess_types::BoardLocation;

/// Read-only rook legality check: same rank or same file, with every square
/// strictly between source and destination empty.
///
/// The landing square's occupant is not inspected here; same-color-capture
/// rejection happens once, upstream, in `apply_move`.
pub fn is_valid_rook_move(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    if from.0 != to.0 && from.1 != to.1 {
        return false;
    }

    if from.0 == to.0 {
        let low = from.1.min(to.1);
        let high = from.1.max(to.1);
        for file in low + 1..high {
            if board.piece_at((from.0, file)).is_some() {
                return false;
            }
        }
    } else {
        let low = from.0.min(to.0);
        let high = from.0.max(to.0);
        for rank in low + 1..high {
            if board.piece_at((rank, from.1)).is_some() {
                return false;
            }
        }
    }

    true
}
