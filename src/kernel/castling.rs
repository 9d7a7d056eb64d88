//! Kingside and queenside castling kernels.
//!
//! Each kernel validates its move class for the current mover and either
//! applies the full transition in place or returns a nonzero reject code
//! with the vector left byte-for-byte untouched.

use crate::board::layout::{
    CastleGeometry, BLACK_KINGSIDE_CASTLE, BLACK_QUEENSIDE_CASTLE, EN_PASSANT_CELL,
    WHITE_KINGSIDE_CASTLE, WHITE_QUEENSIDE_CASTLE,
};
use crate::board::piece::{piece_code, PieceKind, Side};
use crate::board::vector::BoardVector;
use crate::kernel::action::{Action, CASTLE_KINGSIDE, CASTLE_QUEENSIDE};
use crate::kernel::attack::is_attacked;
use crate::kernel::outcome::{KernelError, KernelResult, RejectReason};
use crate::kernel::rights;

/// Apply a kingside castle for the side to move. Returns 0 when applied,
/// otherwise a stable reject code.
pub fn kingside_castle(board: &mut BoardVector, action: Action, side: &mut Side) -> i32 {
    match castle_move(board, action, side, CASTLE_KINGSIDE) {
        Ok(()) => 0,
        Err(reason) => reason.code(),
    }
}

/// Queenside twin of [`kingside_castle`].
pub fn queenside_castle(board: &mut BoardVector, action: Action, side: &mut Side) -> i32 {
    match castle_move(board, action, side, CASTLE_QUEENSIDE) {
        Ok(()) => 0,
        Err(reason) => reason.code(),
    }
}

/// Batched kingside kernel over parallel slices, one code per instance.
pub fn kingside_castle_batch(
    boards: &mut [BoardVector],
    actions: &[Action],
    sides: &mut [Side],
) -> KernelResult<Vec<i32>> {
    KernelError::check_shape(boards.len(), actions.len(), sides.len())?;
    Ok(boards
        .iter_mut()
        .zip(actions)
        .zip(sides.iter_mut())
        .map(|((board, &action), side)| kingside_castle(board, action, side))
        .collect())
}

/// Batched queenside kernel over parallel slices, one code per instance.
pub fn queenside_castle_batch(
    boards: &mut [BoardVector],
    actions: &[Action],
    sides: &mut [Side],
) -> KernelResult<Vec<i32>> {
    KernelError::check_shape(boards.len(), actions.len(), sides.len())?;
    Ok(boards
        .iter_mut()
        .zip(actions)
        .zip(sides.iter_mut())
        .map(|((board, &action), side)| queenside_castle(board, action, side))
        .collect())
}

pub(crate) fn castle_move(
    board: &mut BoardVector,
    action: Action,
    side: &mut Side,
    wing: i32,
) -> Result<(), RejectReason> {
    if action.castle != wing {
        return Err(RejectReason::WrongMoveClass);
    }

    let mover = *side;
    let geometry: &CastleGeometry = match (mover, wing) {
        (Side::White, CASTLE_KINGSIDE) => &WHITE_KINGSIDE_CASTLE,
        (Side::Black, CASTLE_KINGSIDE) => &BLACK_KINGSIDE_CASTLE,
        (Side::White, _) => &WHITE_QUEENSIDE_CASTLE,
        (Side::Black, _) => &BLACK_QUEENSIDE_CASTLE,
    };

    let (aggregate, wing_kingside, wing_queenside) = rights::cells_for(mover);
    let wing_cell = if wing == CASTLE_KINGSIDE {
        wing_kingside
    } else {
        wing_queenside
    };
    // Aggregate cell is the fast path: when set, the per-wing cell is not
    // consulted at all.
    if board.cell(aggregate) != 0 {
        return Err(RejectReason::RightsForfeited);
    }
    if board.cell(wing_cell) != 0 {
        return Err(RejectReason::RightsForfeited);
    }

    let king = piece_code(mover, PieceKind::King);
    let rook = piece_code(mover, PieceKind::Rook);
    // King and rook must stand on their home cells: a rights cell alone must
    // not be able to conjure pieces out of a forged vector.
    if board.cell(geometry.king_from) != king || board.cell(geometry.rook_from) != rook {
        return Err(RejectReason::CastleBlocked);
    }
    for &cell in geometry.between {
        if board.cell(cell) != 0 {
            return Err(RejectReason::CastleBlocked);
        }
    }

    let enemy = mover.opposite();
    for &cell in geometry.king_path {
        if is_attacked(board, cell, enemy) {
            return Err(RejectReason::CastleThroughCheck);
        }
    }

    board.set_cell(geometry.king_from, 0);
    board.set_cell(geometry.rook_from, 0);
    board.set_cell(geometry.king_to, king);
    board.set_cell(geometry.rook_to, rook);
    rights::forfeit_all(board, mover);
    board.set_cell(EN_PASSANT_CELL, 0);
    *side = enemy;
    Ok(())
}
