//! The single mutating move operation.
//!
//! `move_piece` validates a candidate move and, on success, performs exactly
//! one of: simple relocation (with capture-by-replacement), promotion
//! replacement, en-passant double removal, or castling double relocation,
//! together with the castling-rights and en-passant bookkeeping. On
//! rejection it returns `false` with the state untouched; no branch mutates
//! before validation has fully passed.

use crate::game_state::chess_types::{on_board, BoardLocation, Color, Piece, PieceKind};
use crate::game_state::game_state::GameState;
use crate::rules::legality::is_valid_move;

/// Validate and apply one move. Returns `false` (leaving the state
/// unchanged) when the source square is empty, the destination holds a
/// same-color piece, or the piece's legality predicate rejects the move.
pub fn move_piece(game_state: &mut GameState, from: BoardLocation, to: BoardLocation) -> bool {
    if !on_board(from) || !on_board(to) {
        return false;
    }
    let Some(piece) = game_state.board.piece_at(from) else {
        return false;
    };
    if let Some(target) = game_state.board.piece_at(to) {
        if target.color == piece.color {
            return false;
        }
    }
    if !is_valid_move(game_state, from, to) {
        return false;
    }

    // En-passant execution: the captured pawn sits beside the mover, on the
    // destination file, not on the destination square itself.
    if piece.kind == PieceKind::Pawn
        && from.1 != to.1
        && game_state.board.piece_at(to).is_none()
        && game_state.en_passant_target == Some(to)
    {
        game_state.board.set_piece((from.0, to.1), None);
    }

    // Castling execution: the rook jumps to the square the king crossed.
    if piece.kind == PieceKind::King && (from.1 - to.1).abs() == 2 {
        let rank = from.0;
        if to.1 > from.1 {
            let rook = game_state.board.piece_at((rank, 7));
            game_state.board.set_piece((rank, from.1 + 1), rook);
            game_state.board.set_piece((rank, 7), None);
        } else {
            let rook = game_state.board.piece_at((rank, 0));
            game_state.board.set_piece((rank, from.1 - 1), rook);
            game_state.board.set_piece((rank, 0), None);
        }
    }

    // Relocate, promoting a pawn on the farthest rank to a fresh queen.
    let farthest_rank = match piece.color {
        Color::Light => 7,
        Color::Dark => 0,
    };
    let placed = if piece.kind == PieceKind::Pawn && to.0 == farthest_rank {
        Piece {
            kind: PieceKind::Queen,
            color: piece.color,
        }
    } else {
        piece
    };
    game_state.board.set_piece(to, Some(placed));
    game_state.board.set_piece(from, None);

    revoke_castling_rights(game_state, piece, from);

    game_state.en_passant_target = if piece.kind == PieceKind::Pawn && (from.0 - to.0).abs() == 2 {
        Some(((from.0 + to.0) / 2, from.1))
    } else {
        None
    };

    true
}

/// A king move clears both of its side's flags; a rook moving off one of
/// the four original corner squares clears exactly that corner's flag.
fn revoke_castling_rights(game_state: &mut GameState, piece: Piece, from: BoardLocation) {
    let rights = &mut game_state.castling_rights;
    if piece.kind == PieceKind::King {
        match piece.color {
            Color::Light => {
                rights.light_kingside = false;
                rights.light_queenside = false;
            }
            Color::Dark => {
                rights.dark_kingside = false;
                rights.dark_queenside = false;
            }
        }
    }
    if piece.kind == PieceKind::Rook {
        match from {
            (0, 0) => rights.light_queenside = false,
            (0, 7) => rights.light_kingside = false,
            (7, 0) => rights.dark_queenside = false,
            (7, 7) => rights.dark_kingside = false,
            _ => {}
        }
    }
}
