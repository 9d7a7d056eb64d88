//! The fixed-width position vector and its occupancy views.

use crate::board::layout::{
    EN_PASSANT_CELL, SQUARE_CELLS, VECTOR_WIDTH, WHITE_RIGHTS_GONE,
};
use crate::board::piece::{kind_of_code, piece_code, side_of_code, PieceKind, Side};

/// One position: 64 square cells, 6 inverted rights cells, and reserved
/// extension cells. Side-to-move is carried beside the vector, never inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardVector {
    cells: [i32; VECTOR_WIDTH],
}

/// Per-kind occupancy bitboards for one side; bit `i` = cell `i`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SideBitboards {
    pub pawns: u64,
    pub knights: u64,
    pub bishops: u64,
    pub rooks: u64,
    pub queens: u64,
    pub kings: u64,
}

impl SideBitboards {
    #[inline]
    pub const fn all(&self) -> u64 {
        self.pawns | self.knights | self.bishops | self.rooks | self.queens | self.kings
    }
}

impl BoardVector {
    #[inline]
    pub const fn empty() -> Self {
        Self {
            cells: [0; VECTOR_WIDTH],
        }
    }

    #[inline]
    pub const fn from_cells(cells: [i32; VECTOR_WIDTH]) -> Self {
        Self { cells }
    }

    #[inline]
    pub const fn cells(&self) -> &[i32; VECTOR_WIDTH] {
        &self.cells
    }

    #[inline]
    pub const fn cell(&self, index: usize) -> i32 {
        self.cells[index]
    }

    #[inline]
    pub fn set_cell(&mut self, index: usize, value: i32) {
        self.cells[index] = value;
    }

    /// The standard starting position with all four rights held.
    pub fn start_position() -> Self {
        let mut board = Self::empty();
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
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.cells[col] = piece_code(Side::Black, kind);
            board.cells[8 + col] = piece_code(Side::Black, PieceKind::Pawn);
            board.cells[48 + col] = piece_code(Side::White, PieceKind::Pawn);
            board.cells[56 + col] = piece_code(Side::White, kind);
        }
        // Rights cells stay 0: every right held.
        board
    }

    /// Cell of `side`'s king, scanning the square cells.
    pub fn king_cell(&self, side: Side) -> Option<usize> {
        let king = piece_code(side, PieceKind::King);
        self.cells[..SQUARE_CELLS].iter().position(|&code| code == king)
    }

    /// Collect `side`'s occupancy in one pass over the square cells.
    pub fn side_bitboards(&self, side: Side) -> SideBitboards {
        let mut bitboards = SideBitboards::default();
        for (cell, &code) in self.cells[..SQUARE_CELLS].iter().enumerate() {
            if side_of_code(code) != Some(side) {
                continue;
            }
            let bit = 1u64 << cell;
            match kind_of_code(code) {
                Some(PieceKind::Pawn) => bitboards.pawns |= bit,
                Some(PieceKind::Knight) => bitboards.knights |= bit,
                Some(PieceKind::Bishop) => bitboards.bishops |= bit,
                Some(PieceKind::Rook) => bitboards.rooks |= bit,
                Some(PieceKind::Queen) => bitboards.queens |= bit,
                Some(PieceKind::King) => bitboards.kings |= bit,
                None => {}
            }
        }
        bitboards
    }

    /// Occupancy of both sides over the square cells.
    pub fn occupancy(&self) -> u64 {
        let mut occupancy = 0u64;
        for (cell, &code) in self.cells[..SQUARE_CELLS].iter().enumerate() {
            if code != 0 {
                occupancy |= 1u64 << cell;
            }
        }
        occupancy
    }

    /// En-passant target recorded by the last accepted double push, if any.
    /// Out-of-range slot values read as none.
    pub fn en_passant_target(&self) -> Option<usize> {
        let raw = self.cells[EN_PASSANT_CELL];
        if (1..=SQUARE_CELLS as i32).contains(&raw) {
            Some((raw - 1) as usize)
        } else {
            None
        }
    }

    pub fn set_en_passant_target(&mut self, target: Option<usize>) {
        self.cells[EN_PASSANT_CELL] = match target {
            Some(cell) => cell as i32 + 1,
            None => 0,
        };
    }

    /// The six rights cells as a fixed window, for diagnostics and tests.
    #[inline]
    pub fn rights_cells(&self) -> &[i32] {
        &self.cells[WHITE_RIGHTS_GONE..WHITE_RIGHTS_GONE + 6]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::cell_at;

    #[test]
    fn start_position_landmarks() {
        let board = BoardVector::start_position();
        assert_eq!(board.cell(0), 10); // a8 black rook
        assert_eq!(board.cell(4), 12); // e8 black king
        assert_eq!(board.cell(12), 7); // e7 black pawn
        assert_eq!(board.cell(52), 1); // e2 white pawn
        assert_eq!(board.cell(60), 6); // e1 white king
        assert_eq!(board.cell(63), 4); // h1 white rook
        assert_eq!(board.rights_cells(), &[0, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn king_lookup_finds_both_kings() {
        let board = BoardVector::start_position();
        assert_eq!(board.king_cell(Side::White), Some(60));
        assert_eq!(board.king_cell(Side::Black), Some(4));
        assert_eq!(BoardVector::empty().king_cell(Side::White), None);
    }

    #[test]
    fn start_position_bitboards_have_full_armies() {
        let board = BoardVector::start_position();
        let white = board.side_bitboards(Side::White);
        let black = board.side_bitboards(Side::Black);
        assert_eq!(white.pawns.count_ones(), 8);
        assert_eq!(white.all().count_ones(), 16);
        assert_eq!(black.all().count_ones(), 16);
        assert_eq!(board.occupancy().count_ones(), 32);
        assert_eq!(white.kings, 1u64 << 60);
    }

    #[test]
    fn en_passant_slot_round_trips_and_rejects_garbage() {
        let mut board = BoardVector::empty();
        assert_eq!(board.en_passant_target(), None);
        let e3 = cell_at(4, 2);
        board.set_en_passant_target(Some(e3));
        assert_eq!(board.en_passant_target(), Some(e3));
        board.set_en_passant_target(None);
        assert_eq!(board.en_passant_target(), None);
        board.set_cell(crate::board::layout::EN_PASSANT_CELL, 200);
        assert_eq!(board.en_passant_target(), None);
    }
}
