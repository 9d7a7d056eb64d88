//! The attack oracle: is a cell attacked by a given side under the current
//! occupancy.
//!
//! Always evaluated against the position as it stands. Callers that need
//! "would this cell be attacked after move X" must build the hypothetical
//! vector first and query that.

use crate::board::piece::Side;
use crate::board::vector::BoardVector;
use crate::tables::king_steps::king_steps;
use crate::tables::knight_jumps::knight_jumps;
use crate::tables::pawn_captures::pawn_captures;
use crate::tables::sliding::{bishop_attacks, rook_attacks};

/// True when `cell` is attacked by `by`. Pure and allocation-free.
pub fn is_attacked(board: &BoardVector, cell: usize, by: Side) -> bool {
    let attacker = board.side_bitboards(by);

    // A pawn of `by` attacks `cell` exactly when a pawn of the other color
    // standing on `cell` would capture onto the attacker's square.
    if pawn_captures(by.opposite(), cell) & attacker.pawns != 0 {
        return true;
    }
    if knight_jumps(cell) & attacker.knights != 0 {
        return true;
    }
    if king_steps(cell) & attacker.kings != 0 {
        return true;
    }

    let occupancy = board.occupancy();
    if bishop_attacks(cell, occupancy) & (attacker.bishops | attacker.queens) != 0 {
        return true;
    }
    if rook_attacks(cell, occupancy) & (attacker.rooks | attacker.queens) != 0 {
        return true;
    }

    false
}

/// True when `side`'s king stands attacked. A side without a king is never
/// in check; king presence is a caller precondition, not a kernel concern.
pub fn is_in_check(board: &BoardVector, side: Side) -> bool {
    match board.king_cell(side) {
        Some(king) => is_attacked(board, king, side.opposite()),
        None => false,
    }
}
