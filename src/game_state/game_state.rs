//! Central mutable game state.
//!
//! `GameState` is the model every other subsystem reads: the board plus the
//! auxiliary flags that plain piece placement cannot express (castling
//! rights and the en-passant target). It is created once per game, mutated
//! in place by every accepted move, and cloned only by the checkmate
//! analyzer's copy-on-probe trials.

use crate::analysis::check::is_in_check;
use crate::analysis::checkmate::is_checkmate;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{BoardLocation, CastlingRights, Color};
use crate::rules::apply_move::move_piece;
use crate::rules::legality::is_valid_move;

/// Board plus game-state flags for one game in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub castling_rights: CastlingRights,
    /// Square a pawn passed over on the immediately preceding move, when
    /// that move was a two-square advance. Recomputed after every accepted
    /// move; `None` replaces the out-of-range sentinel some engines use.
    pub en_passant_target: Option<BoardLocation>,
}

impl GameState {
    /// Fresh game: canonical starting position, full castling rights, no
    /// en-passant target.
    #[inline]
    pub fn new_game() -> Self {
        Self {
            board: Board::starting_position(),
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
        }
    }

    /// Empty board with full rights, for assembling test positions.
    #[inline]
    pub fn empty() -> Self {
        Self {
            board: Board::empty(),
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
        }
    }

    /// Read-only legality probe; see [`crate::rules::legality`].
    #[inline]
    pub fn is_valid_move(&self, from: BoardLocation, to: BoardLocation) -> bool {
        is_valid_move(self, from, to)
    }

    /// Validate and apply one move; see [`crate::rules::apply_move`].
    #[inline]
    pub fn move_piece(&mut self, from: BoardLocation, to: BoardLocation) -> bool {
        move_piece(self, from, to)
    }

    /// True when any enemy piece has a legal move onto the king of `color`.
    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(self, color)
    }

    /// True when `color` is in check and no move resolves it.
    #[inline]
    pub fn is_checkmate(&self, color: Color) -> bool {
        is_checkmate(self, color)
    }
}
