//! Checkmate search by exhaustive copy-on-probe trials.

use crate::analysis::check::is_in_check;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::rules::apply_move::move_piece;

/// True when `color` is currently in check and no move by `color` resolves
/// it.
///
/// Every candidate (from, to) pair for every piece of `color` is tried on a
/// clone of the full game state with the real mutating `move_piece`, then
/// re-checked and discarded. Cloning the whole state means special-move
/// side effects (promotion replacement, en-passant removal, castling rook
/// relocation) are probed exactly as they would play out, and the live
/// state is never touched. This is also where self-check exposure is
/// filtered: a trial that leaves the mover's king attacked does not count
/// as an escape.
pub fn is_checkmate(game_state: &GameState, color: Color) -> bool {
    if !is_in_check(game_state, color) {
        return false;
    }

    for from_rank in 0i8..8 {
        for from_file in 0i8..8 {
            let from = (from_rank, from_file);
            let Some(piece) = game_state.board.piece_at(from) else {
                continue;
            };
            if piece.color != color {
                continue;
            }

            for to_rank in 0i8..8 {
                for to_file in 0i8..8 {
                    let to = (to_rank, to_file);
                    let mut probe = game_state.clone();
                    if move_piece(&mut probe, from, to) && !is_in_check(&probe, color) {
                        return false;
                    }
                }
            }
        }
    }

    true
}
