//! FEN-to-vector parser.
//!
//! Builds a board vector and side-to-move from a Forsyth-Edwards Notation
//! string. FEN lists rank 8 first, which is exactly the vector's cell order,
//! so the board field maps straight onto cells 0..64. The clock fields are
//! validated but not stored; the vector does not carry them.

use crate::board::codec::{encode_codes, RightsHeld};
use crate::board::piece::{piece_code, PieceKind, Side};
use crate::board::vector::BoardVector;
use crate::utils::notation::cell_from_name;

pub const STARTING_POSITION_FEN: &str =
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub fn parse_fen(fen: &str) -> Result<(BoardVector, Side), String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let castling_part = parts.next().ok_or("Missing castling rights in FEN")?;
    let en_passant_part = parts.next().ok_or("Missing en-passant square in FEN")?;
    let halfmove_part = parts.next().ok_or("Missing halfmove clock in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let codes = parse_board(board_part)?;
    let side = parse_side_to_move(side_part)?;
    let rights = parse_castling_rights(castling_part)?;

    halfmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid halfmove clock: {halfmove_part}"))?;
    fullmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;

    let (mut board, side) =
        encode_codes(&codes, rights, side).map_err(|err| err.to_string())?;
    board.set_en_passant_target(parse_en_passant_square(en_passant_part)?);

    Ok((board, side))
}

fn parse_board(board_part: &str) -> Result<[i32; 64], String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    let mut codes = [0i32; 64];
    for (row, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = empty_count as usize;
                if !(1..=8).contains(&step) {
                    return Err(format!("Invalid empty-square count '{ch}'"));
                }
                file += step;
                continue;
            }

            let code = piece_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid piece character '{ch}' in board layout"))?;

            if file >= 8 {
                return Err("Board rank has too many files".to_owned());
            }

            codes[row * 8 + file] = code;
            file += 1;
        }

        if file != 8 {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(codes)
}

fn piece_from_fen_char(ch: char) -> Option<i32> {
    let side = if ch.is_ascii_uppercase() {
        Side::White
    } else {
        Side::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(piece_code(side, kind))
}

fn parse_side_to_move(side_part: &str) -> Result<Side, String> {
    match side_part {
        "w" => Ok(Side::White),
        "b" => Ok(Side::Black),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn parse_castling_rights(castling_part: &str) -> Result<RightsHeld, String> {
    if castling_part == "-" {
        return Ok(RightsHeld::none());
    }

    let mut rights = RightsHeld::none();
    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_kingside = true,
            'Q' => rights.white_queenside = true,
            'k' => rights.black_kingside = true,
            'q' => rights.black_queenside = true,
            _ => return Err(format!("Invalid castling rights character: {ch}")),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> Result<Option<usize>, String> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    Ok(Some(cell_from_name(en_passant_part)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::layout::{cell_at, BLACK_RIGHTS_GONE, WHITE_RIGHTS_GONE};

    #[test]
    fn starting_fen_matches_the_built_in_start_position() {
        let (board, side) = parse_fen(STARTING_POSITION_FEN).expect("should parse");
        assert_eq!(board, BoardVector::start_position());
        assert_eq!(side, Side::White);
    }

    #[test]
    fn side_and_rights_fields_are_honored() {
        let (board, side) =
            parse_fen("r3k2r/8/8/8/8/8/8/R3K2R b Kq - 4 20").expect("should parse");
        assert_eq!(side, Side::Black);
        // White keeps kingside only, black keeps queenside only.
        assert_eq!(board.rights_cells(), &[0, 0, 0, 1, 1, 0]);
        assert_eq!(board.cell(WHITE_RIGHTS_GONE), 0);
        assert_eq!(board.cell(BLACK_RIGHTS_GONE), 0);
    }

    #[test]
    fn no_rights_at_all_forfeits_both_aggregates() {
        let (board, _) = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").expect("should parse");
        assert_eq!(board.rights_cells(), &[1, 1, 1, 1, 1, 1]);
    }

    #[test]
    fn en_passant_square_lands_in_the_target_slot() {
        let (board, _) =
            parse_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .expect("should parse");
        assert_eq!(board.en_passant_target(), Some(cell_at(4, 2)));
    }

    #[test]
    fn malformed_inputs_are_reported() {
        assert!(parse_fen("rnbqkbnr/pppppppp w KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KXkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1").is_err());
        assert!(parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1").is_err());
        assert!(
            parse_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra").is_err()
        );
    }
}
