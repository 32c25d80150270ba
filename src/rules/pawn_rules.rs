//! Pawn legality predicate.

use crate::game_state::chess_types::{BoardLocation, Color};
use crate::game_state::game_state::GameState;

/// Read-only pawn legality check.
///
/// Covers the single advance onto an empty square, the double advance from
/// the starting rank with both squares empty, the one-forward diagonal
/// capture of an enemy piece, and the diagonal onto the current en-passant
/// target square. Never mutates anything; the passed-over pawn's removal is
/// performed by `apply_move` when the move is actually executed.
pub fn is_valid_pawn_move(game_state: &GameState, from: BoardLocation, to: BoardLocation) -> bool {
    let Some(piece) = game_state.board.piece_at(from) else {
        return false;
    };
    let (direction, start_rank) = match piece.color {
        Color::Light => (1i8, 1i8),
        Color::Dark => (-1i8, 6i8),
    };
    let (from_rank, from_file) = from;
    let (to_rank, to_file) = to;

    // Double advance from the starting rank, both squares empty.
    if from_rank == start_rank
        && to_rank == from_rank + 2 * direction
        && to_file == from_file
        && game_state
            .board
            .piece_at((from_rank + direction, from_file))
            .is_none()
        && game_state.board.piece_at(to).is_none()
    {
        return true;
    }

    // Single advance onto an empty square.
    if to_rank == from_rank + direction
        && to_file == from_file
        && game_state.board.piece_at(to).is_none()
    {
        return true;
    }

    // One-forward diagonal: capture, or the en-passant target square.
    if to_rank == from_rank + direction && (to_file - from_file).abs() == 1 {
        if let Some(target) = game_state.board.piece_at(to) {
            return target.color != piece.color;
        }
        return game_state.en_passant_target == Some(to);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::is_valid_pawn_move;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};
    use crate::game_state::game_state::GameState;

    fn pawn(color: Color) -> Piece {
        Piece {
            kind: PieceKind::Pawn,
            color,
        }
    }

    #[test]
    fn single_and_double_advance_from_start_rank() {
        let game = GameState::new_game();
        assert!(is_valid_pawn_move(&game, (1, 4), (2, 4)));
        assert!(is_valid_pawn_move(&game, (1, 4), (3, 4)));
        assert!(is_valid_pawn_move(&game, (6, 3), (5, 3)));
        assert!(is_valid_pawn_move(&game, (6, 3), (4, 3)));
    }

    #[test]
    fn double_advance_requires_both_squares_empty() {
        let mut game = GameState::new_game();
        game.board.set_piece((2, 4), Some(pawn(Color::Dark)));
        assert!(!is_valid_pawn_move(&game, (1, 4), (3, 4)));

        let mut game = GameState::new_game();
        game.board.set_piece((3, 4), Some(pawn(Color::Dark)));
        assert!(!is_valid_pawn_move(&game, (1, 4), (3, 4)));
    }

    #[test]
    fn double_advance_only_from_start_rank() {
        let mut game = GameState::empty();
        game.board.set_piece((2, 4), Some(pawn(Color::Light)));
        assert!(!is_valid_pawn_move(&game, (2, 4), (4, 4)));
    }

    #[test]
    fn no_backward_or_sideways_moves() {
        let mut game = GameState::empty();
        game.board.set_piece((3, 4), Some(pawn(Color::Light)));
        assert!(!is_valid_pawn_move(&game, (3, 4), (2, 4)));
        assert!(!is_valid_pawn_move(&game, (3, 4), (3, 5)));
    }

    #[test]
    fn diagonal_requires_an_enemy_piece() {
        let mut game = GameState::empty();
        game.board.set_piece((3, 4), Some(pawn(Color::Light)));
        assert!(!is_valid_pawn_move(&game, (3, 4), (4, 5)));

        game.board.set_piece((4, 5), Some(pawn(Color::Dark)));
        assert!(is_valid_pawn_move(&game, (3, 4), (4, 5)));

        game.board.set_piece((4, 3), Some(pawn(Color::Light)));
        assert!(!is_valid_pawn_move(&game, (3, 4), (4, 3)));
    }

    #[test]
    fn forward_advance_cannot_capture() {
        let mut game = GameState::empty();
        game.board.set_piece((3, 4), Some(pawn(Color::Light)));
        game.board.set_piece((4, 4), Some(pawn(Color::Dark)));
        assert!(!is_valid_pawn_move(&game, (3, 4), (4, 4)));
    }

    #[test]
    fn en_passant_target_enables_both_diagonals() {
        let mut game = GameState::empty();
        game.board.set_piece((4, 3), Some(pawn(Color::Light)));
        game.board.set_piece((4, 4), Some(pawn(Color::Dark)));
        game.en_passant_target = Some((5, 4));
        assert!(is_valid_pawn_move(&game, (4, 3), (5, 4)));

        game.en_passant_target = Some((5, 2));
        assert!(is_valid_pawn_move(&game, (4, 3), (5, 2)));
        assert!(!is_valid_pawn_move(&game, (4, 3), (5, 4)));
    }

    #[test]
    fn dark_en_passant_diagonal() {
        let mut game = GameState::empty();
        game.board.set_piece((3, 3), Some(pawn(Color::Dark)));
        game.board.set_piece((3, 4), Some(pawn(Color::Light)));
        game.en_passant_target = Some((2, 4));
        assert!(is_valid_pawn_move(&game, (3, 3), (2, 4)));
    }
}
