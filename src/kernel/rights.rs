//! Castling-rights bookkeeping over the inverted rights cells.
//!
//! Forfeiture is monotonic: cells only ever move 0 -> 1, and each side's
//! aggregate cell is kept equal to the AND-of-forfeiture of its two wings.

use crate::board::layout::{
    BLACK_KINGSIDE_GONE, BLACK_QUEENSIDE_GONE, BLACK_RIGHTS_GONE, WHITE_KINGSIDE_GONE,
    WHITE_QUEENSIDE_GONE, WHITE_RIGHTS_GONE,
};
use crate::board::piece::Side;
use crate::board::vector::BoardVector;

#[inline]
pub(crate) const fn cells_for(side: Side) -> (usize, usize, usize) {
    match side {
        Side::White => (WHITE_RIGHTS_GONE, WHITE_KINGSIDE_GONE, WHITE_QUEENSIDE_GONE),
        Side::Black => (BLACK_RIGHTS_GONE, BLACK_KINGSIDE_GONE, BLACK_QUEENSIDE_GONE),
    }
}

/// Forfeit both of `side`'s rights. Any king move, castling included.
pub fn forfeit_all(board: &mut BoardVector, side: Side) {
    let (aggregate, kingside, queenside) = cells_for(side);
    board.set_cell(kingside, 1);
    board.set_cell(queenside, 1);
    board.set_cell(aggregate, 1);
}

/// Forfeit the wing whose rook home corner is `cell`, if it is one. Fired
/// both when a rook leaves its corner and when any piece lands on one.
pub fn forfeit_rook_corner(board: &mut BoardVector, cell: usize) {
    let (side, wing_cell) = match cell {
        63 => (Side::White, WHITE_KINGSIDE_GONE),
        56 => (Side::White, WHITE_QUEENSIDE_GONE),
        7 => (Side::Black, BLACK_KINGSIDE_GONE),
        0 => (Side::Black, BLACK_QUEENSIDE_GONE),
        _ => return,
    };
    board.set_cell(wing_cell, 1);
    sync_aggregate(board, side);
}

fn sync_aggregate(board: &mut BoardVector, side: Side) {
    let (aggregate, kingside, queenside) = cells_for(side);
    if board.cell(kingside) != 0 && board.cell(queenside) != 0 {
        board.set_cell(aggregate, 1);
    }
}
