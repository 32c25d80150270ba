//! Core piece, color, and coordinate types shared across the engine.

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side a piece belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// One-letter render code used by the terminal board view.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            Color::Light => 'W',
            Color::Dark => 'B',
        }
    }
}

/// Piece kind (color is stored separately on [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// One-letter render code used by the terminal board view.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// A piece as stored on the board. Replaced, never mutated, on promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

/// `(rank, file)` pair. On-board values are each in `0..=7`; rank 0 is the
/// light back rank, rank 7 the dark back rank.
pub type BoardLocation = (i8, i8);

/// Returns true when both coordinates lie on the board.
#[inline]
pub const fn on_board(location: BoardLocation) -> bool {
    location.0 >= 0 && location.0 <= 7 && location.1 >= 0 && location.1 <= 7
}

/// Castling availability flags, one per side and direction.
///
/// A flag that has been cleared is never set again for the life of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastlingRights {
    pub light_kingside: bool,
    pub light_queenside: bool,
    pub dark_kingside: bool,
    pub dark_queenside: bool,
}

impl CastlingRights {
    /// All four rights available, as at the start of a game.
    #[inline]
    pub const fn all() -> Self {
        Self {
            light_kingside: true,
            light_queenside: true,
            dark_kingside: true,
            dark_queenside: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{on_board, Color};

    #[test]
    fn opposite_color_round_trips() {
        assert_eq!(Color::Light.opposite(), Color::Dark);
        assert_eq!(Color::Dark.opposite().opposite(), Color::Dark);
    }

    #[test]
    fn on_board_rejects_out_of_range_coordinates() {
        assert!(on_board((0, 0)));
        assert!(on_board((7, 7)));
        assert!(!on_board((-1, 4)));
        assert!(!on_board((4, 8)));
        assert!(!on_board((8, 8)));
    }
}
