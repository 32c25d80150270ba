//! Piece-type dispatch for the read-only legality predicate.
//!
//! `is_valid_move` answers whether the shape of a move is permitted by the
//! piece-movement rules, independent of whose turn it is and of whether the
//! move would leave the mover's own king in check. Self-check exposure is
//! the checkmate analyzer's concern, keeping this layer pure path/offset
//! arithmetic plus "is anything in the way" scans.

use crate::game_state::chess_types::{on_board, BoardLocation, PieceKind};
use crate::game_state::game_state::GameState;
use crate::rules::bishop_rules::is_valid_bishop_move;
use crate::rules::king_rules::is_valid_king_move;
use crate::rules::knight_rules::is_valid_knight_move;
use crate::rules::pawn_rules::is_valid_pawn_move;
use crate::rules::queen_rules::is_valid_queen_move;
use crate::rules::rook_rules::is_valid_rook_move;

/// Read-only legality probe for the piece standing on `from`.
///
/// Out-of-range coordinates and empty source squares are rejected before
/// any piece-specific logic runs.
pub fn is_valid_move(game_state: &GameState, from: BoardLocation, to: BoardLocation) -> bool {
    if !on_board(from) || !on_board(to) {
        return false;
    }
    let Some(piece) = game_state.board.piece_at(from) else {
        return false;
    };

    match piece.kind {
        PieceKind::Pawn => is_valid_pawn_move(game_state, from, to),
        PieceKind::Knight => is_valid_knight_move(from, to),
        PieceKind::Bishop => is_valid_bishop_move(&game_state.board, from, to),
        PieceKind::Rook => is_valid_rook_move(&game_state.board, from, to),
        PieceKind::Queen => is_valid_queen_move(&game_state.board, from, to),
        PieceKind::King => is_valid_king_move(game_state, from, to),
    }
}
