//! Explicit turn finite-state machine.
//!
//! `TurnState` owns the side to move and the game phase so the terminal
//! loop carries no global mutable turn state. One entry point consumes a
//! raw input line and advances the machine: parse, validate/apply, check
//! evaluation, then either game over on checkmate or the opposite color to
//! move. Failures leave both the machine and the game state unchanged.

use crate::errors::MoveError;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::utils::coordinate::parse_move;

/// Phase of the turn machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting for the side to move to supply a move.
    AwaitingMove,
    /// Terminal: `winner` delivered checkmate.
    GameOver { winner: Color },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnState {
    pub side_to_move: Color,
    pub phase: TurnPhase,
}

impl TurnState {
    /// Light moves first from `AwaitingMove`.
    #[inline]
    pub fn new() -> Self {
        Self {
            side_to_move: Color::Light,
            phase: TurnPhase::AwaitingMove,
        }
    }

    /// Parse and play one raw input line for the side to move.
    ///
    /// The moved piece must belong to the side to move; the engine core
    /// does not know about turns, so ownership is enforced here. On success
    /// the machine advances and the new phase is returned; on failure the
    /// caller reprompts.
    pub fn play_input(
        &mut self,
        game_state: &mut GameState,
        input: &str,
    ) -> Result<TurnPhase, MoveError> {
        if matches!(self.phase, TurnPhase::GameOver { .. }) {
            return Err(MoveError::IllegalMove);
        }

        let (from, to) = parse_move(input)?;
        match game_state.board.piece_at(from) {
            Some(piece) if piece.color == self.side_to_move => {}
            _ => return Err(MoveError::IllegalMove),
        }
        if !game_state.move_piece(from, to) {
            return Err(MoveError::IllegalMove);
        }

        let opponent = self.side_to_move.opposite();
        if game_state.is_checkmate(opponent) {
            self.phase = TurnPhase::GameOver {
                winner: self.side_to_move,
            };
        } else {
            self.side_to_move = opponent;
        }
        Ok(self.phase)
    }
}

impl Default for TurnState {
    fn default() -> Self {
        Self::new()
    }
}
