//! Terminal-oriented board renderer.
//!
//! Creates a human-readable debug view of the board, not a persisted
//! format: ranks 8 down to 1, one rank per line, each occupied cell as
//! piece letter plus color letter (for example `NW`), empty cells as `.`,
//! cells space-separated.

use crate::game_state::game_state::GameState;

/// Render the board to a string for terminal output.
pub fn render_game_state(game_state: &GameState) -> String {
    let mut out = String::new();

    for rank in (0i8..8).rev() {
        for file in 0i8..8 {
            match game_state.board.piece_at((rank, file)) {
                Some(piece) => {
                    out.push(piece.kind.letter());
                    out.push(piece.color.letter());
                }
                None => out.push('.'),
            }
            if file < 7 {
                out.push(' ');
            }
        }
        out.push('\n');
    }

    out
}
