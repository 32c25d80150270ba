//! King legality predicate, including the castling shape.

use crate::game_state::chess_types::{BoardLocation, Color};
use crate::game_state::game_state::GameState;

/// Read-only king legality check: any destination within one square in any
/// direction, or a castling move per [`is_valid_castle`].
pub fn is_valid_king_move(game_state: &GameState, from: BoardLocation, to: BoardLocation) -> bool {
    if (from.0 - to.0).abs() <= 1 && (from.1 - to.1).abs() <= 1 {
        return true;
    }
    is_valid_castle(game_state, from, to)
}

/// Castling shape: same rank, file delta of exactly 2, the matching
/// castling-rights flag still set, and every square between the king and
/// the target rook empty (two kingside, three queenside).
///
/// Attacked-square checks along the path are deliberately not performed at
/// this layer; the checkmate analyzer owns king safety. Executing the rook
/// relocation is `apply_move`'s job, so this predicate stays side-effect
/// free even on the castling branch.
pub fn is_valid_castle(game_state: &GameState, from: BoardLocation, to: BoardLocation) -> bool {
    if from.0 != to.0 || (from.1 - to.1).abs() != 2 {
        return false;
    }
    let Some(piece) = game_state.board.piece_at(from) else {
        return false;
    };

    let kingside = to.1 > from.1;
    let rights = game_state.castling_rights;
    let allowed = match (piece.color, kingside) {
        (Color::Light, true) => rights.light_kingside,
        (Color::Light, false) => rights.light_queenside,
        (Color::Dark, true) => rights.dark_kingside,
        (Color::Dark, false) => rights.dark_queenside,
    };
    if !allowed {
        return false;
    }

    let rank = from.0;
    if kingside {
        game_state.board.piece_at((rank, from.1 + 1)).is_none()
            && game_state.board.piece_at((rank, from.1 + 2)).is_none()
    } else {
        game_state.board.piece_at((rank, from.1 - 1)).is_none()
            && game_state.board.piece_at((rank, from.1 - 2)).is_none()
            && game_state.board.piece_at((rank, from.1 - 3)).is_none()
    }
}
