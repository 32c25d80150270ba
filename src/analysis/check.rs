//! Check detection built on the read-only legality predicate.

use crate::game_state::chess_types::{BoardLocation, Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::rules::legality::is_valid_move;

/// Locate the unique king of `color`.
///
/// Returns `None` when no such king is on the board (a position still under
/// construction); callers must not substitute a default square. Normal play
/// maintains exactly one king per color from `new_game` onward.
pub fn king_location(game_state: &GameState, color: Color) -> Option<BoardLocation> {
    for rank in 0i8..8 {
        for file in 0i8..8 {
            if let Some(piece) = game_state.board.piece_at((rank, file)) {
                if piece.kind == PieceKind::King && piece.color == color {
                    return Some((rank, file));
                }
            }
        }
    }
    None
}

/// True when any enemy piece has a legal attacking move onto the king of
/// `color`. A kingless color is reported as not in check.
pub fn is_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king) = king_location(game_state, color) else {
        return false;
    };

    for rank in 0i8..8 {
        for file in 0i8..8 {
            if let Some(piece) = game_state.board.piece_at((rank, file)) {
                if piece.color != color && is_valid_move(game_state, (rank, file), king) {
                    return true;
                }
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::{is_in_check, king_location};
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::game_state::GameState;

    fn piece(kind: PieceKind, color: Color) -> Piece {
        Piece { kind, color }
    }

    #[test]
    fn king_location_finds_each_king_in_the_starting_position() {
        let game = GameState::new_game();
        assert_eq!(king_location(&game, Color::Light), Some((0, 4)));
        assert_eq!(king_location(&game, Color::Dark), Some((7, 4)));
    }

    #[test]
    fn missing_king_is_reported_not_defaulted() {
        let game = GameState::empty();
        assert_eq!(king_location(&game, Color::Light), None);
        assert!(!is_in_check(&game, Color::Light));
    }

    #[test]
    fn starting_position_has_no_check() {
        let game = GameState::new_game();
        assert!(!is_in_check(&game, Color::Light));
        assert!(!is_in_check(&game, Color::Dark));
    }

    #[test]
    fn rook_with_a_clear_path_gives_check() {
        let mut game = GameState::empty();
        game.board
            .set_piece((0, 4), Some(piece(PieceKind::King, Color::Light)));
        game.board
            .set_piece((7, 4), Some(piece(PieceKind::Rook, Color::Dark)));
        assert!(is_in_check(&game, Color::Light));
        assert!(!is_in_check(&game, Color::Dark));
    }

    #[test]
    fn blocking_piece_ends_the_check() {
        let mut game = GameState::empty();
        game.board
            .set_piece((0, 4), Some(piece(PieceKind::King, Color::Light)));
        game.board
            .set_piece((7, 4), Some(piece(PieceKind::Rook, Color::Dark)));
        game.board
            .set_piece((4, 4), Some(piece(PieceKind::Bishop, Color::Light)));
        assert!(!is_in_check(&game, Color::Light));
    }

    #[test]
    fn pawn_checks_diagonally_only() {
        let mut game = GameState::empty();
        game.board
            .set_piece((4, 4), Some(piece(PieceKind::King, Color::Light)));
        game.board
            .set_piece((5, 5), Some(piece(PieceKind::Pawn, Color::Dark)));
        assert!(is_in_check(&game, Color::Light));

        game.board.set_piece((5, 5), None);
        game.board
            .set_piece((5, 4), Some(piece(PieceKind::Pawn, Color::Dark)));
        assert!(!is_in_check(&game, Color::Light));
    }

    #[test]
    fn opponent_knight_check_appears_after_the_attacking_move() {
        let mut game = GameState::new_game();
        game.board
            .set_piece((3, 4), Some(piece(PieceKind::Knight, Color::Light)));
        assert!(!is_in_check(&game, Color::Dark));

        // Ne4-d6 attacks the dark king on e8.
        assert!(game.move_piece((3, 4), (5, 3)));
        assert!(is_in_check(&game, Color::Dark));
    }
}
