//! Sides, piece kinds, and the 0..=12 cell code mapping.

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Side::White => 0,
            Side::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// Piece kind; the side is carried separately or folded into the cell code.
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
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

pub const EMPTY_CELL: i32 = 0;

/// Cell code for a piece: 1..=6 white pawn..king, 7..=12 the same for black.
#[inline]
pub const fn piece_code(side: Side, kind: PieceKind) -> i32 {
    1 + kind.index() as i32 + 6 * side.index() as i32
}

#[inline]
pub const fn side_of_code(code: i32) -> Option<Side> {
    match code {
        1..=6 => Some(Side::White),
        7..=12 => Some(Side::Black),
        _ => None,
    }
}

#[inline]
pub const fn kind_of_code(code: i32) -> Option<PieceKind> {
    match code {
        1 | 7 => Some(PieceKind::Pawn),
        2 | 8 => Some(PieceKind::Knight),
        3 | 9 => Some(PieceKind::Bishop),
        4 | 10 => Some(PieceKind::Rook),
        5 | 11 => Some(PieceKind::Queen),
        6 | 12 => Some(PieceKind::King),
        _ => None,
    }
}

/// True for the empty cell and every encodable piece.
#[inline]
pub const fn is_valid_code(code: i32) -> bool {
    code >= 0 && code <= 12
}
