//! Board codec: external piece layouts into the native state vector.

use crate::board::layout::{
    BLACK_KINGSIDE_GONE, BLACK_QUEENSIDE_GONE, BLACK_RIGHTS_GONE, SQUARE_CELLS,
    WHITE_KINGSIDE_GONE, WHITE_QUEENSIDE_GONE, WHITE_RIGHTS_GONE,
};
use crate::board::piece::{is_valid_code, piece_code, PieceKind, Side};
use crate::board::vector::BoardVector;
use crate::kernel::outcome::{KernelError, KernelResult};

/// Castling rights still held by each side, as seen at the codec boundary.
/// The vector's inverted cells are derived from this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RightsHeld {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl RightsHeld {
    pub const fn all() -> Self {
        Self {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub const fn none() -> Self {
        Self {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }
}

/// Encode raw piece codes, already in internal a8-first cell order, into a
/// state vector. Fails with `InvalidPiece` on any code outside 0..=12.
///
/// Rights cells start forfeited and are then cleared per held right: each
/// per-wing cell is cleared only by its own right, while an aggregate cell is
/// cleared whenever either of its side's rights is held. Reserved extension
/// cells are left zeroed.
pub fn encode_codes(
    codes: &[i32; SQUARE_CELLS],
    rights: RightsHeld,
    side: Side,
) -> KernelResult<(BoardVector, Side)> {
    let mut board = BoardVector::empty();
    for (cell, &code) in codes.iter().enumerate() {
        if !is_valid_code(code) {
            return Err(KernelError::InvalidPiece { code, cell });
        }
        board.set_cell(cell, code);
    }

    for flag in WHITE_RIGHTS_GONE..=BLACK_QUEENSIDE_GONE {
        board.set_cell(flag, 1);
    }
    if rights.white_kingside {
        board.set_cell(WHITE_RIGHTS_GONE, 0);
        board.set_cell(WHITE_KINGSIDE_GONE, 0);
    }
    if rights.white_queenside {
        board.set_cell(WHITE_RIGHTS_GONE, 0);
        board.set_cell(WHITE_QUEENSIDE_GONE, 0);
    }
    if rights.black_kingside {
        board.set_cell(BLACK_RIGHTS_GONE, 0);
        board.set_cell(BLACK_KINGSIDE_GONE, 0);
    }
    if rights.black_queenside {
        board.set_cell(BLACK_RIGHTS_GONE, 0);
        board.set_cell(BLACK_QUEENSIDE_GONE, 0);
    }

    Ok((board, side))
}

/// Typed convenience over [`encode_codes`] for callers that never deal in
/// raw codes.
pub fn encode(
    pieces: &[Option<(Side, PieceKind)>; SQUARE_CELLS],
    rights: RightsHeld,
    side: Side,
) -> KernelResult<(BoardVector, Side)> {
    let mut codes = [0i32; SQUARE_CELLS];
    for (cell, piece) in pieces.iter().enumerate() {
        if let Some((owner, kind)) = piece {
            codes[cell] = piece_code(*owner, *kind);
        }
    }
    encode_codes(&codes, rights, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::{
        BLACK_KINGSIDE_GONE, BLACK_QUEENSIDE_GONE, BLACK_RIGHTS_GONE, WHITE_KINGSIDE_GONE,
        WHITE_QUEENSIDE_GONE, WHITE_RIGHTS_GONE,
    };

    #[test]
    fn encode_rejects_out_of_range_codes() {
        let mut codes = [0i32; SQUARE_CELLS];
        codes[17] = 13;
        let err = encode_codes(&codes, RightsHeld::all(), Side::White)
            .expect_err("code 13 must be rejected");
        assert_eq!(err, KernelError::InvalidPiece { code: 13, cell: 17 });
    }

    #[test]
    fn empty_cells_are_always_encodable() {
        let codes = [0i32; SQUARE_CELLS];
        let (board, side) =
            encode_codes(&codes, RightsHeld::none(), Side::Black).expect("empty board encodes");
        assert_eq!(side, Side::Black);
        assert_eq!(board.rights_cells(), &[1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn each_held_right_clears_its_own_cell_and_the_aggregate() {
        let codes = [0i32; SQUARE_CELLS];
        let rights = RightsHeld {
            white_kingside: true,
            white_queenside: true,
            black_kingside: false,
            black_queenside: false,
        };
        let (board, _) = encode_codes(&codes, rights, Side::White).expect("board encodes");
        assert_eq!(board.cell(WHITE_RIGHTS_GONE), 0);
        assert_eq!(board.cell(WHITE_KINGSIDE_GONE), 0);
        assert_eq!(board.cell(WHITE_QUEENSIDE_GONE), 0);
        assert_eq!(board.cell(BLACK_RIGHTS_GONE), 1);
        assert_eq!(board.cell(BLACK_KINGSIDE_GONE), 1);
        assert_eq!(board.cell(BLACK_QUEENSIDE_GONE), 1);
    }

    #[test]
    fn single_wing_right_still_clears_the_aggregate() {
        let codes = [0i32; SQUARE_CELLS];
        let rights = RightsHeld {
            white_kingside: false,
            white_queenside: false,
            black_kingside: true,
            black_queenside: false,
        };
        let (board, _) = encode_codes(&codes, rights, Side::Black).expect("board encodes");
        assert_eq!(board.cell(BLACK_RIGHTS_GONE), 0);
        assert_eq!(board.cell(BLACK_KINGSIDE_GONE), 0);
        assert_eq!(board.cell(BLACK_QUEENSIDE_GONE), 1);
        assert_eq!(board.cell(WHITE_RIGHTS_GONE), 1);
    }

    #[test]
    fn typed_encode_matches_start_position_vector() {
        use crate::board::vector::BoardVector;
        let reference = BoardVector::start_position();
        let mut pieces: [Option<(Side, PieceKind)>; SQUARE_CELLS] = [None; SQUARE_CELLS];
        for cell in 0..SQUARE_CELLS {
            let code = reference.cell(cell);
            if let (Some(side), Some(kind)) = (
                crate::board::piece::side_of_code(code),
                crate::board::piece::kind_of_code(code),
            ) {
                pieces[cell] = Some((side, kind));
            }
        }
        let (board, _) = encode(&pieces, RightsHeld::all(), Side::White).expect("encodes");
        assert_eq!(board, reference);
    }
}
