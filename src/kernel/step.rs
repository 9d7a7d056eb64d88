//! The step kernel: dispatch, the ordinary / en-passant / promotion
//! handlers, and the batch drivers.
//!
//! Every handler validates first and then applies the full transition
//! atomically; a rejected instance leaves board and side-to-move untouched
//! and surfaces as a penalty reward instead of an error.

use std::thread;

use crate::board::layout::{col_of, row_of, SQUARE_CELLS};
use crate::board::piece::{kind_of_code, piece_code, side_of_code, PieceKind, Side};
use crate::board::vector::BoardVector;
use crate::kernel::action::{Action, CASTLE_KINGSIDE, CASTLE_NONE, CASTLE_QUEENSIDE};
use crate::kernel::attack::is_in_check;
use crate::kernel::castling::castle_move;
use crate::kernel::outcome::{KernelError, KernelResult, RejectReason, Reward, Verdict};
use crate::kernel::rights;
use crate::tables::king_steps::king_steps;
use crate::tables::knight_jumps::knight_jumps;
use crate::tables::sliding::{bishop_attacks, bishop_rays, rook_attacks, rook_rays};

/// Advance one instance by one action.
///
/// Hard errors are reserved for structurally malformed input (square fields
/// outside the board on a non-castle action); every game-legality failure
/// comes back as `Ok(Verdict::Rejected(..))`.
pub fn step_one(
    board: &mut BoardVector,
    action: Action,
    side: &mut Side,
) -> KernelResult<Verdict> {
    check_cell_fields(action)?;
    Ok(match dispatch(board, action, side) {
        Ok(()) => Verdict::Applied,
        Err(reason) => Verdict::Rejected(reason),
    })
}

/// Advance a whole batch, one reward and verdict per instance.
///
/// The structural sweep runs over the full batch before any instance
/// mutates, so a malformed action cannot leave the batch half-applied.
pub fn step_batch(
    boards: &mut [BoardVector],
    actions: &[Action],
    sides: &mut [Side],
) -> KernelResult<(Vec<Reward>, Vec<Verdict>)> {
    KernelError::check_shape(boards.len(), actions.len(), sides.len())?;
    for &action in actions {
        check_cell_fields(action)?;
    }

    let mut rewards = Vec::with_capacity(boards.len());
    let mut verdicts = Vec::with_capacity(boards.len());
    for ((board, &action), side) in boards.iter_mut().zip(actions).zip(sides.iter_mut()) {
        let mover = *side;
        let verdict = step_one(board, action, side)?;
        rewards.push(verdict.reward(mover));
        verdicts.push(verdict);
    }
    Ok((rewards, verdicts))
}

/// [`step_batch`] split across scoped OS threads in contiguous chunks.
/// Observationally identical to the sequential form, results in order.
pub fn step_batch_threaded(
    boards: &mut [BoardVector],
    actions: &[Action],
    sides: &mut [Side],
    threads: usize,
) -> KernelResult<(Vec<Reward>, Vec<Verdict>)> {
    KernelError::check_shape(boards.len(), actions.len(), sides.len())?;
    for &action in actions {
        check_cell_fields(action)?;
    }

    let count = boards.len();
    if threads <= 1 || count <= 1 {
        return step_batch(boards, actions, sides);
    }

    let chunk = count.div_ceil(threads.min(count));
    let mut results: Vec<KernelResult<(Vec<Reward>, Vec<Verdict>)>> = Vec::new();
    thread::scope(|scope| {
        let mut handles = Vec::new();
        for ((board_chunk, action_chunk), side_chunk) in boards
            .chunks_mut(chunk)
            .zip(actions.chunks(chunk))
            .zip(sides.chunks_mut(chunk))
        {
            handles.push(scope.spawn(move || step_batch(board_chunk, action_chunk, side_chunk)));
        }
        for handle in handles {
            results.push(
                handle
                    .join()
                    .unwrap_or(Err(KernelError::WorkerPanicked)),
            );
        }
    });

    let mut rewards = Vec::with_capacity(count);
    let mut verdicts = Vec::with_capacity(count);
    for result in results {
        let (chunk_rewards, chunk_verdicts) = result?;
        rewards.extend(chunk_rewards);
        verdicts.extend(chunk_verdicts);
    }
    Ok((rewards, verdicts))
}

fn check_cell_fields(action: Action) -> KernelResult<()> {
    if action.castle != CASTLE_NONE {
        return Ok(());
    }
    for (field, value) in [("from", action.from), ("to", action.to)] {
        if value < 0 || value >= SQUARE_CELLS as i32 {
            return Err(KernelError::CellRange { field, value });
        }
    }
    Ok(())
}

fn dispatch(
    board: &mut BoardVector,
    action: Action,
    side: &mut Side,
) -> Result<(), RejectReason> {
    match action.castle {
        CASTLE_NONE => {}
        CASTLE_KINGSIDE | CASTLE_QUEENSIDE => {
            return castle_move(board, action, side, action.castle)
        }
        _ => return Err(RejectReason::WrongMoveClass),
    }

    let from = action.from as usize;
    let to = action.to as usize;
    if action.en_passant != 0 {
        en_passant_move(board, action, from, to, side)
    } else if action.promotion != 0 {
        promotion_move(board, action, from, to, side)
    } else {
        ordinary_move(board, from, to, side)
    }
}

#[inline]
const fn forward_step(side: Side) -> i32 {
    // Row 0 holds rank 8, so white advances toward lower cells.
    match side {
        Side::White => -8,
        Side::Black => 8,
    }
}

fn ordinary_move(
    board: &mut BoardVector,
    from: usize,
    to: usize,
    side: &mut Side,
) -> Result<(), RejectReason> {
    let mover = *side;
    let source = board.cell(from);
    if source == 0 {
        return Err(RejectReason::EmptySource);
    }
    if side_of_code(source) != Some(mover) {
        return Err(RejectReason::NotYourPiece);
    }
    let Some(kind) = kind_of_code(source) else {
        return Err(RejectReason::NotYourPiece);
    };

    let destination = board.cell(to);
    if destination != 0 {
        if side_of_code(destination) == Some(mover) {
            return Err(RejectReason::OwnPieceCapture);
        }
        if kind_of_code(destination) == Some(PieceKind::King) {
            return Err(RejectReason::KingCapture);
        }
    }

    check_pattern(board, from, to, mover, kind, destination != 0)?;

    let mut next = *board;
    next.set_cell(from, 0);
    next.set_cell(to, source);
    if is_in_check(&next, mover) {
        return Err(RejectReason::IntoCheck);
    }

    if kind == PieceKind::King {
        rights::forfeit_all(&mut next, mover);
    }
    if kind == PieceKind::Rook {
        rights::forfeit_rook_corner(&mut next, from);
    }
    rights::forfeit_rook_corner(&mut next, to);

    let double_push = kind == PieceKind::Pawn && from.abs_diff(to) == 16;
    next.set_en_passant_target(if double_push { Some((from + to) / 2) } else { None });

    *board = next;
    *side = mover.opposite();
    Ok(())
}

fn check_pattern(
    board: &BoardVector,
    from: usize,
    to: usize,
    mover: Side,
    kind: PieceKind,
    capturing: bool,
) -> Result<(), RejectReason> {
    let target = 1u64 << to;
    match kind {
        PieceKind::Knight => {
            if knight_jumps(from) & target == 0 {
                return Err(RejectReason::BadPattern);
            }
        }
        PieceKind::King => {
            if king_steps(from) & target == 0 {
                return Err(RejectReason::BadPattern);
            }
        }
        PieceKind::Bishop => {
            return check_slider(bishop_rays(from), bishop_attacks(from, board.occupancy()), target)
        }
        PieceKind::Rook => {
            return check_slider(rook_rays(from), rook_attacks(from, board.occupancy()), target)
        }
        PieceKind::Queen => {
            let occupancy = board.occupancy();
            return check_slider(
                bishop_rays(from) | rook_rays(from),
                bishop_attacks(from, occupancy) | rook_attacks(from, occupancy),
                target,
            );
        }
        PieceKind::Pawn => return check_pawn_pattern(board, from, to, mover, capturing),
    }
    Ok(())
}

fn check_slider(empty_board_rays: u64, reachable: u64, target: u64) -> Result<(), RejectReason> {
    if empty_board_rays & target == 0 {
        Err(RejectReason::BadPattern)
    } else if reachable & target == 0 {
        Err(RejectReason::PathBlocked)
    } else {
        Ok(())
    }
}

fn check_pawn_pattern(
    board: &BoardVector,
    from: usize,
    to: usize,
    mover: Side,
    capturing: bool,
) -> Result<(), RejectReason> {
    let forward = forward_step(mover);
    let (last_row, start_row) = match mover {
        Side::White => (0usize, 6usize),
        Side::Black => (7, 1),
    };
    // A stop on the last row must go through the promotion handler.
    if row_of(to) == last_row {
        return Err(RejectReason::BadPattern);
    }

    let step = to as i32 - from as i32;
    let col_gap = col_of(from).abs_diff(col_of(to));

    if step == forward && col_gap == 0 {
        if capturing {
            return Err(RejectReason::BadPattern);
        }
        Ok(())
    } else if step == 2 * forward && col_gap == 0 {
        if row_of(from) != start_row {
            return Err(RejectReason::BadPattern);
        }
        if capturing {
            return Err(RejectReason::BadPattern);
        }
        if board.cell((from as i32 + forward) as usize) != 0 {
            return Err(RejectReason::PathBlocked);
        }
        Ok(())
    } else if (step == forward - 1 || step == forward + 1) && col_gap == 1 {
        // A diagonal onto an empty cell is the en-passant handler's move
        // class, not an ordinary move.
        if !capturing {
            return Err(RejectReason::BadPattern);
        }
        Ok(())
    } else {
        Err(RejectReason::BadPattern)
    }
}

fn en_passant_move(
    board: &mut BoardVector,
    action: Action,
    from: usize,
    to: usize,
    side: &mut Side,
) -> Result<(), RejectReason> {
    if action.en_passant != 1 || action.promotion != 0 {
        return Err(RejectReason::BadEnPassant);
    }
    let mover = *side;
    let source = board.cell(from);
    if source == 0 {
        return Err(RejectReason::EmptySource);
    }
    if side_of_code(source) != Some(mover) {
        return Err(RejectReason::NotYourPiece);
    }
    if kind_of_code(source) != Some(PieceKind::Pawn) {
        return Err(RejectReason::BadEnPassant);
    }
    if board.en_passant_target() != Some(to) {
        return Err(RejectReason::BadEnPassant);
    }
    if board.cell(to) != 0 {
        return Err(RejectReason::BadEnPassant);
    }

    let forward = forward_step(mover);
    let step = to as i32 - from as i32;
    if (step != forward - 1 && step != forward + 1) || col_of(from).abs_diff(col_of(to)) != 1 {
        return Err(RejectReason::BadPattern);
    }

    // The bypassed pawn stands one row behind the target.
    let bypassed = to as i32 - forward;
    if !(0..SQUARE_CELLS as i32).contains(&bypassed) {
        return Err(RejectReason::BadEnPassant);
    }
    let bypassed = bypassed as usize;
    if board.cell(bypassed) != piece_code(mover.opposite(), PieceKind::Pawn) {
        return Err(RejectReason::BadEnPassant);
    }

    let mut next = *board;
    next.set_cell(from, 0);
    next.set_cell(to, source);
    next.set_cell(bypassed, 0);
    if is_in_check(&next, mover) {
        return Err(RejectReason::IntoCheck);
    }
    next.set_en_passant_target(None);

    *board = next;
    *side = mover.opposite();
    Ok(())
}

fn promotion_move(
    board: &mut BoardVector,
    action: Action,
    from: usize,
    to: usize,
    side: &mut Side,
) -> Result<(), RejectReason> {
    if !(2..=5).contains(&action.promotion) {
        return Err(RejectReason::BadPromotion);
    }
    let mover = *side;
    let source = board.cell(from);
    if source == 0 {
        return Err(RejectReason::EmptySource);
    }
    if side_of_code(source) != Some(mover) {
        return Err(RejectReason::NotYourPiece);
    }
    if kind_of_code(source) != Some(PieceKind::Pawn) {
        return Err(RejectReason::BadPromotion);
    }

    let forward = forward_step(mover);
    let (last_row, seventh_row) = match mover {
        Side::White => (0usize, 1usize),
        Side::Black => (7, 6),
    };
    if row_of(from) != seventh_row || row_of(to) != last_row {
        return Err(RejectReason::BadPattern);
    }

    let step = to as i32 - from as i32;
    let col_gap = col_of(from).abs_diff(col_of(to));
    let destination = board.cell(to);
    if step == forward && col_gap == 0 {
        if destination != 0 {
            return Err(RejectReason::BadPattern);
        }
    } else if (step == forward - 1 || step == forward + 1) && col_gap == 1 {
        if destination == 0 {
            return Err(RejectReason::BadPattern);
        }
        if side_of_code(destination) == Some(mover) {
            return Err(RejectReason::OwnPieceCapture);
        }
        if kind_of_code(destination) == Some(PieceKind::King) {
            return Err(RejectReason::KingCapture);
        }
    } else {
        return Err(RejectReason::BadPattern);
    }

    let promoted = if mover == Side::Black {
        action.promotion + 6
    } else {
        action.promotion
    };
    let mut next = *board;
    next.set_cell(from, 0);
    next.set_cell(to, promoted);
    if is_in_check(&next, mover) {
        return Err(RejectReason::IntoCheck);
    }
    rights::forfeit_rook_corner(&mut next, to);
    next.set_en_passant_target(None);

    *board = next;
    *side = mover.opposite();
    Ok(())
}
