//! Interactive terminal game loop.
//!
//! Thin glue around the engine: prints the board, prompts the side to move,
//! feeds each line through the turn state machine, and reports parse or
//! legality failures before reprompting. Announces the winner on checkmate
//! and exits.

use std::io::{self, BufRead, Write};

use quince_chess::errors::MoveError;
use quince_chess::game_state::chess_types::Color;
use quince_chess::game_state::game_state::GameState;
use quince_chess::turn::turn_state::{TurnPhase, TurnState};
use quince_chess::utils::render_game_state::render_game_state;

fn main() {
    let mut game_state = GameState::new_game();
    let mut turn = TurnState::new();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", render_game_state(&game_state));

        let mover = turn.side_to_move;
        if game_state.is_in_check(mover) {
            println!("{} is in check.", color_name(mover));
        }

        print!("{}'s turn. Enter your move (e.g., e2,e4): ", color_name(mover));
        io::stdout().flush().ok();

        let Some(Ok(line)) = lines.next() else {
            break;
        };

        match turn.play_input(&mut game_state, line.trim()) {
            Ok(TurnPhase::GameOver { winner }) => {
                print!("{}", render_game_state(&game_state));
                println!(
                    "{} is in checkmate. {} wins!",
                    color_name(winner.opposite()),
                    color_name(winner)
                );
                break;
            }
            Ok(TurnPhase::AwaitingMove) => {}
            Err(MoveError::MalformedInput(_)) => println!("Invalid move format. Try again."),
            Err(MoveError::IllegalMove) => println!("Invalid move. Try again."),
        }
    }
}

fn color_name(color: Color) -> &'static str {
    match color {
        Color::Light => "White",
        Color::Dark => "Black",
    }
}
