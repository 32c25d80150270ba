//! Queen legality predicate.

use crate::game_state::board::Board;
use crate::game_state::chess_types::BoardLocation;
use crate::rules::bishop_rules::is_valid_bishop_move;
use crate::rules::rook_rules::is_valid_rook_move;

/// Read-only queen legality check: legal iff the same squares form a legal
/// rook move or a legal bishop move.
#[inline]
pub fn is_valid_queen_move(board: &Board, from: BoardLocation, to: BoardLocation) -> bool {
    is_valid_rook_move(board, from, to) || is_valid_bishop_move(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::is_valid_queen_move;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn queen_combines_rook_and_bishop_lines() {
        let mut board = Board::empty();
        board.set_piece(
            (3, 3),
            Some(Piece {
                kind: PieceKind::Queen,
                color: Color::Light,
            }),
        );

        assert!(is_valid_queen_move(&board, (3, 3), (3, 7)));
        assert!(is_valid_queen_move(&board, (3, 3), (7, 3)));
        assert!(is_valid_queen_move(&board, (3, 3), (6, 6)));
        assert!(is_valid_queen_move(&board, (3, 3), (0, 6)));
        assert!(!is_valid_queen_move(&board, (3, 3), (5, 4)));
    }

    #[test]
    fn blocked_line_is_rejected_for_both_shapes() {
        let mut board = Board::empty();
        let pawn = Piece {
            kind: PieceKind::Pawn,
            color: Color::Dark,
        };
        board.set_piece(
            (3, 3),
            Some(Piece {
                kind: PieceKind::Queen,
                color: Color::Light,
            }),
        );
        board.set_piece((3, 5), Some(pawn));
        board.set_piece((5, 5), Some(pawn));

        assert!(!is_valid_queen_move(&board, (3, 3), (3, 7)));
        assert!(!is_valid_queen_move(&board, (3, 3), (6, 6)));
    }
}
