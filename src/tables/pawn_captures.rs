//! Precomputed side-relative pawn capture fans.
//!
//! In the internal ordering row 0 holds rank 8, so white pawns advance
//! toward lower cell indices and black pawns toward higher ones.

use crate::board::piece::Side;

pub const WHITE_PAWN_CAPTURES: [u64; 64] = generate_white_pawn_captures();
pub const BLACK_PAWN_CAPTURES: [u64; 64] = generate_black_pawn_captures();

#[inline]
pub const fn pawn_captures(side: Side, cell: usize) -> u64 {
    match side {
        Side::White => WHITE_PAWN_CAPTURES[cell],
        Side::Black => BLACK_PAWN_CAPTURES[cell],
    }
}

const fn generate_white_pawn_captures() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut cell = 0usize;

    while cell < 64 {
        let col = cell % 8;
        let row = cell / 8;
        let mut captures = 0u64;

        if row > 0 {
            if col > 0 {
                captures |= 1u64 << (cell - 9);
            }
            if col < 7 {
                captures |= 1u64 << (cell - 7);
            }
        }

        table[cell] = captures;
        cell += 1;
    }

    table
}

const fn generate_black_pawn_captures() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut cell = 0usize;

    while cell < 64 {
        let col = cell % 8;
        let row = cell / 8;
        let mut captures = 0u64;

        if row < 7 {
            if col > 0 {
                captures |= 1u64 << (cell + 7);
            }
            if col < 7 {
                captures |= 1u64 << (cell + 9);
            }
        }

        table[cell] = captures;
        cell += 1;
    }

    table
}
