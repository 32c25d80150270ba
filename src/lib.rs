//! Crate root module declarations for the Quince Chess rules engine.
//!
//! This file exposes the board/game-state model, the per-piece move-legality
//! rules, the check/checkmate analysis, the turn state machine, and the
//! terminal-facing utilities so binaries and tests can import stable module
//! paths.

pub mod game_state {
    pub mod board;
    pub mod chess_types;
    pub mod game_state;
}

pub mod rules {
    pub mod apply_move;
    pub mod bishop_rules;
    pub mod king_rules;
    pub mod knight_rules;
    pub mod legality;
    pub mod pawn_rules;
    pub mod queen_rules;
    pub mod rook_rules;
}

pub mod analysis {
    pub mod check;
    pub mod checkmate;
}

pub mod turn {
    pub mod turn_state;
}

pub mod utils {
    pub mod coordinate;
    pub mod render_game_state;
}

pub mod errors;
