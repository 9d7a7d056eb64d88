//! Precomputed knight jump targets over the internal cell ordering.

use crate::board::layout::bit_at;

pub const KNIGHT_JUMPS: [u64; 64] = generate_knight_jumps();

#[inline]
pub const fn knight_jumps(cell: usize) -> u64 {
    KNIGHT_JUMPS[cell]
}

const fn generate_knight_jumps() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut cell = 0usize;

    while cell < 64 {
        let col = (cell % 8) as i32;
        let row = (cell / 8) as i32;
        let mut jumps = 0u64;

        jumps |= bit_at(col + 1, row + 2);
        jumps |= bit_at(col + 2, row + 1);
        jumps |= bit_at(col + 2, row - 1);
        jumps |= bit_at(col + 1, row - 2);
        jumps |= bit_at(col - 1, row - 2);
        jumps |= bit_at(col - 2, row - 1);
        jumps |= bit_at(col - 2, row + 1);
        jumps |= bit_at(col - 1, row + 2);

        table[cell] = jumps;
        cell += 1;
    }

    table
}
