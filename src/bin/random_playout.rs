//! Random self-play smoke harness.
//!
//! Run with:
//! `cargo run --release --bin random_playout`
//! `cargo run --release --bin random_playout -- --verbose`
//!
//! Plays uniformly random accepted moves for a bounded number of plies,
//! exercising the full parse-free path (legality, special moves, check and
//! checkmate evaluation) and printing the final position. Diagnostics
//! tooling, not an engine.

use rand::prelude::IndexedRandom;

use quince_chess::game_state::chess_types::Color;
use quince_chess::game_state::game_state::GameState;
use quince_chess::turn::turn_state::{TurnPhase, TurnState};
use quince_chess::utils::render_game_state::render_game_state;

const MAX_PLIES: usize = 200;

fn main() {
    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");
    let mut rng = rand::rng();

    let mut game_state = GameState::new_game();
    let mut turn = TurnState::new();
    let mut plies = 0usize;

    while plies < MAX_PLIES {
        let candidates = accepted_moves(&game_state, turn.side_to_move);
        if candidates.is_empty() {
            println!("no accepted moves for {:?} after {plies} plies", turn.side_to_move);
            break;
        }

        let (from, to) = *candidates
            .choose(&mut rng)
            .expect("candidate list is non-empty");
        let moved = game_state.move_piece(from, to);
        assert!(moved, "probed move must be accepted when replayed");
        plies += 1;

        if verbose {
            println!("ply {plies}: {:?} {from:?} -> {to:?}", turn.side_to_move);
        }

        let opponent = turn.side_to_move.opposite();
        if game_state.is_checkmate(opponent) {
            turn.phase = TurnPhase::GameOver {
                winner: turn.side_to_move,
            };
            break;
        }
        turn.side_to_move = opponent;
    }

    println!("{}", render_game_state(&game_state));
    match turn.phase {
        TurnPhase::GameOver { winner } => println!("checkmate after {plies} plies: {winner:?} wins"),
        TurnPhase::AwaitingMove => println!("stopped after {plies} plies, no checkmate"),
    }
}

/// All (from, to) pairs the engine accepts for `color`, found the same way
/// the checkmate analyzer finds escapes: probe on a clone, keep the hits.
fn accepted_moves(game_state: &GameState, color: Color) -> Vec<((i8, i8), (i8, i8))> {
    let mut out = Vec::new();
    for from_rank in 0i8..8 {
        for from_file in 0i8..8 {
            let from = (from_rank, from_file);
            match game_state.board.piece_at(from) {
                Some(piece) if piece.color == color => {}
                _ => continue,
            }
            for to_rank in 0i8..8 {
                for to_file in 0i8..8 {
                    let to = (to_rank, to_file);
                    let mut probe = game_state.clone();
                    if probe.move_piece(from, to) && !probe.is_in_check(color) {
                        out.push((from, to));
                    }
                }
            }
        }
    }
    out
}
