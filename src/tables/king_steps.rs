//! Precomputed single-step king targets over the internal cell ordering.

use crate::board::layout::bit_at;

pub const KING_STEPS: [u64; 64] = generate_king_steps();

#[inline]
pub const fn king_steps(cell: usize) -> u64 {
    KING_STEPS[cell]
}

const fn generate_king_steps() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut cell = 0usize;

    while cell < 64 {
        let col = (cell % 8) as i32;
        let row = (cell / 8) as i32;
        let mut steps = 0u64;

        steps |= bit_at(col - 1, row - 1);
        steps |= bit_at(col, row - 1);
        steps |= bit_at(col + 1, row - 1);
        steps |= bit_at(col - 1, row);
        steps |= bit_at(col + 1, row);
        steps |= bit_at(col - 1, row + 1);
        steps |= bit_at(col, row + 1);
        steps |= bit_at(col + 1, row + 1);

        table[cell] = steps;
        cell += 1;
    }

    table
}

#[cfg(test)]
mod tests {
    use super::{king_steps, KING_STEPS};
    use crate::board::layout::cell_at;

    #[test]
    fn king_steps_from_a1_has_three_targets() {
        let a1 = cell_at(0, 0);
        assert_eq!(KING_STEPS[a1].count_ones(), 3);
        assert_eq!(king_steps(a1).count_ones(), 3);
    }

    #[test]
    fn king_steps_from_e4_has_eight_targets() {
        assert_eq!(king_steps(cell_at(4, 3)).count_ones(), 8);
    }
}
