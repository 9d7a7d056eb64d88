//! Internal cell geometry of the 100-wide state vector.
//!
//! Square cells 0..64 hold the board in printed-diagram order: rank 8 first,
//! files a through h, so a8 = 0, h8 = 7, e1 = 60 and h1 = 63. Cells 64..70
//! hold the inverted castling-rights flags (0 = right held, 1 = forfeited).
//! Cells 70..100 are reserved extension state the kernel passes through
//! untouched, except for the single en-passant slot.

pub const VECTOR_WIDTH: usize = 100;
pub const SQUARE_CELLS: usize = 64;

/// Aggregate rights cells: "this side has lost all castling rights".
pub const WHITE_RIGHTS_GONE: usize = 64;
pub const BLACK_RIGHTS_GONE: usize = 65;

/// Per-wing rights cells.
pub const WHITE_KINGSIDE_GONE: usize = 66;
pub const BLACK_KINGSIDE_GONE: usize = 67;
pub const WHITE_QUEENSIDE_GONE: usize = 68;
pub const BLACK_QUEENSIDE_GONE: usize = 69;

/// Reserved slot recording the en-passant target as `cell + 1`, 0 = none.
pub const EN_PASSANT_CELL: usize = 95;

/// Cell index for a standard square, `file` and `rank` both 0..8
/// (file 0 = a, rank 0 = rank 1).
#[inline]
pub const fn cell_at(file: usize, rank: usize) -> usize {
    (7 - rank) * 8 + file
}

/// Row within the internal ordering: row 0 holds rank 8.
#[inline]
pub const fn row_of(cell: usize) -> usize {
    cell / 8
}

#[inline]
pub const fn col_of(cell: usize) -> usize {
    cell % 8
}

/// Occupancy bit for an internal (col, row) pair, 0 when off the board.
/// Shared by the leaper table generators.
#[inline]
pub(crate) const fn bit_at(col: i32, row: i32) -> u64 {
    if col < 0 || col > 7 || row < 0 || row > 7 {
        return 0;
    }
    1u64 << ((row as usize) * 8 + (col as usize))
}

/// Fixed cell geometry of one castling wing for one side.
#[derive(Debug, Clone, Copy)]
pub struct CastleGeometry {
    pub king_from: usize,
    pub king_to: usize,
    pub rook_from: usize,
    pub rook_to: usize,
    /// Cells strictly between king and rook; must all be empty.
    pub between: &'static [usize],
    /// King start, transit, and destination cells; none may be attacked.
    pub king_path: &'static [usize],
}

pub const WHITE_KINGSIDE_CASTLE: CastleGeometry = CastleGeometry {
    king_from: 60,
    king_to: 62,
    rook_from: 63,
    rook_to: 61,
    between: &[61, 62],
    king_path: &[60, 61, 62],
};

pub const BLACK_KINGSIDE_CASTLE: CastleGeometry = CastleGeometry {
    king_from: 4,
    king_to: 6,
    rook_from: 7,
    rook_to: 5,
    between: &[5, 6],
    king_path: &[4, 5, 6],
};

pub const WHITE_QUEENSIDE_CASTLE: CastleGeometry = CastleGeometry {
    king_from: 60,
    king_to: 58,
    rook_from: 56,
    rook_to: 59,
    between: &[57, 58, 59],
    king_path: &[60, 59, 58],
};

pub const BLACK_QUEENSIDE_CASTLE: CastleGeometry = CastleGeometry {
    king_from: 4,
    king_to: 2,
    rook_from: 0,
    rook_to: 3,
    between: &[1, 2, 3],
    king_path: &[4, 3, 2],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_at_matches_documented_landmarks() {
        assert_eq!(cell_at(0, 7), 0); // a8
        assert_eq!(cell_at(7, 7), 7); // h8
        assert_eq!(cell_at(4, 7), 4); // e8
        assert_eq!(cell_at(0, 0), 56); // a1
        assert_eq!(cell_at(4, 0), 60); // e1
        assert_eq!(cell_at(7, 0), 63); // h1
    }

    #[test]
    fn rows_and_columns_invert_cell_at() {
        for file in 0..8 {
            for rank in 0..8 {
                let cell = cell_at(file, rank);
                assert_eq!(col_of(cell), file);
                assert_eq!(row_of(cell), 7 - rank);
            }
        }
    }

    #[test]
    fn castle_geometry_destinations_lie_between_king_and_rook() {
        for geometry in [
            WHITE_KINGSIDE_CASTLE,
            BLACK_KINGSIDE_CASTLE,
            WHITE_QUEENSIDE_CASTLE,
            BLACK_QUEENSIDE_CASTLE,
        ] {
            assert!(geometry.between.contains(&geometry.king_to));
            assert!(geometry.between.contains(&geometry.rook_to));
            assert_eq!(geometry.king_path[0], geometry.king_from);
            assert_eq!(*geometry.king_path.last().unwrap(), geometry.king_to);
        }
    }
}
