//! Action enumeration: the full proposal universe and the legal subset.
//!
//! The universe is position-independent; legality comes from probing each
//! proposal against a copy of the position through the step kernel. Slow by
//! construction and intended for drivers and tests, not for hot paths.

use crate::board::layout::{col_of, row_of, SQUARE_CELLS};
use crate::board::piece::Side;
use crate::board::vector::BoardVector;
use crate::kernel::action::Action;
use crate::kernel::outcome::KernelResult;
use crate::kernel::step::step_one;

/// Every distinct action tuple a caller could plausibly propose: all
/// from/to ordinary pairs, every promotion variant onto a last row, every
/// diagonal-step en-passant variant, and the two canonical castles.
pub fn action_universe() -> Vec<Action> {
    let mut universe = Vec::new();

    for from in 0..SQUARE_CELLS {
        for to in 0..SQUARE_CELLS {
            if from != to {
                universe.push(Action::ordinary(from, to));
            }
        }
    }

    // Promotions: one row from the far edge, at most one file sideways.
    for (from_row, to_row) in [(1usize, 0usize), (6, 7)] {
        for from_col in 0..8 {
            let from = from_row * 8 + from_col;
            for to_col in 0..8 {
                if from_col.abs_diff(to_col) > 1 {
                    continue;
                }
                let to = to_row * 8 + to_col;
                for promotion in 2..=5 {
                    universe.push(Action::promote(from, to, promotion));
                }
            }
        }
    }

    // En-passant proposals: every single diagonal step, both directions.
    for from in 0..SQUARE_CELLS {
        for to in 0..SQUARE_CELLS {
            if row_of(from).abs_diff(row_of(to)) == 1 && col_of(from).abs_diff(col_of(to)) == 1 {
                universe.push(Action::capture_en_passant(from, to));
            }
        }
    }

    universe.push(Action::KINGSIDE);
    universe.push(Action::QUEENSIDE);
    universe
}

/// The subset of the universe the position accepts for `side`, found by
/// probing each proposal against a scratch copy.
pub fn legal_actions(board: &BoardVector, side: Side) -> KernelResult<Vec<Action>> {
    let mut legal = Vec::new();
    for action in action_universe() {
        let mut probe = *board;
        let mut mover = side;
        if step_one(&mut probe, action, &mut mover)?.is_applied() {
            legal.push(action);
        }
    }
    Ok(legal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen::{parse_fen, STARTING_POSITION_FEN};

    #[test]
    fn universe_holds_only_distinct_well_formed_tuples() {
        let universe = action_universe();
        for (i, a) in universe.iter().enumerate() {
            for b in &universe[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(universe.contains(&Action::KINGSIDE));
        assert!(universe.contains(&Action::QUEENSIDE));
    }

    #[test]
    fn start_position_has_twenty_legal_actions() {
        let (board, side) = parse_fen(STARTING_POSITION_FEN).expect("parses");
        let legal = legal_actions(&board, side).expect("no hard error");
        assert_eq!(legal.len(), 20);
        // All sixteen pawn pushes and four knight moves, nothing else.
        assert!(legal.iter().all(|a| a.castle == 0 && a.promotion == 0 && a.en_passant == 0));
    }

    #[test]
    fn castle_ready_position_includes_the_canonical_castle() {
        let (board, side) =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").expect("parses");
        let legal = legal_actions(&board, side).expect("no hard error");
        assert!(legal.contains(&Action::KINGSIDE));
        assert!(legal.contains(&Action::QUEENSIDE));
    }
}
