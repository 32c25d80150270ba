//! 8x8 mailbox board storage.
//!
//! The board exclusively owns every piece it contains; cells hold at most
//! one piece and pieces are never shared between cells.

use crate::game_state::chess_types::{on_board, BoardLocation, Color, Piece, PieceKind};

/// Back-rank piece order, file 0 (`a`) through file 7 (`h`).
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// 8x8 grid of optional pieces, indexed `[rank][file]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    /// A board with no pieces on it, for building test positions.
    #[inline]
    pub fn empty() -> Self {
        Self {
            cells: [[None; 8]; 8],
        }
    }

    /// The canonical starting position: back ranks per [`BACK_RANK`], pawns
    /// on each second rank. Total, and yields the same value on every call.
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for file in 0i8..8 {
            board.set_piece(
                (0, file),
                Some(Piece {
                    kind: BACK_RANK[file as usize],
                    color: Color::Light,
                }),
            );
            board.set_piece(
                (1, file),
                Some(Piece {
                    kind: PieceKind::Pawn,
                    color: Color::Light,
                }),
            );
            board.set_piece(
                (6, file),
                Some(Piece {
                    kind: PieceKind::Pawn,
                    color: Color::Dark,
                }),
            );
            board.set_piece(
                (7, file),
                Some(Piece {
                    kind: BACK_RANK[file as usize],
                    color: Color::Dark,
                }),
            );
        }
        board
    }

    /// Piece on `location`, or `None` for an empty or off-board square.
    #[inline]
    pub fn piece_at(&self, location: BoardLocation) -> Option<Piece> {
        if !on_board(location) {
            return None;
        }
        self.cells[location.0 as usize][location.1 as usize]
    }

    /// Overwrite the contents of an on-board square. Off-board locations are
    /// ignored; callers bounds-check before reaching piece logic.
    #[inline]
    pub fn set_piece(&mut self, location: BoardLocation, piece: Option<Piece>) {
        if on_board(location) {
            self.cells[location.0 as usize][location.1 as usize] = piece;
        }
    }
}
