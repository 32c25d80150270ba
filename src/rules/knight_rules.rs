//! Knight legality predicate.

use crate::game_state::chess_types::BoardLocation;

/// Read-only knight legality check: offset of (±2,±1) or (±1,±2). Knights
/// are never blocked by intervening pieces, so no board access is needed.
#[inline]
pub fn is_valid_knight_move(from: BoardLocation, to: BoardLocation) -> bool {
    let rank_delta = (from.0 - to.0).abs();
    let file_delta = (from.1 - to.1).abs();
    (rank_delta == 2 && file_delta == 1) || (rank_delta == 1 && file_delta == 2)
}
