//! Long-algebraic move text to and from action tuples.
//!
//! Classification needs the position: a king sliding two files is a castle,
//! and a pawn stepping diagonally onto an empty cell is an en-passant
//! capture. Plain coordinate text cannot say so on its own.

use crate::board::layout::{cell_at, col_of, row_of};
use crate::board::piece::{kind_of_code, side_of_code, PieceKind, Side};
use crate::board::vector::BoardVector;
use crate::kernel::action::Action;

/// `"e4"` into its internal cell index.
pub fn cell_from_name(name: &str) -> Result<usize, String> {
    let bytes = name.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid square name: {name}"));
    }
    let file = bytes[0].wrapping_sub(b'a') as usize;
    let rank = bytes[1].wrapping_sub(b'1') as usize;
    if file >= 8 || rank >= 8 {
        return Err(format!("Invalid square name: {name}"));
    }
    Ok(cell_at(file, rank))
}

/// Internal cell index into `"e4"` form.
pub fn cell_name(cell: usize) -> String {
    let file = (b'a' + col_of(cell) as u8) as char;
    let rank = (b'1' + (7 - row_of(cell)) as u8) as char;
    format!("{file}{rank}")
}

fn promotion_from_char(ch: char) -> Result<i32, String> {
    match ch {
        'n' => Ok(2),
        'b' => Ok(3),
        'r' => Ok(4),
        'q' => Ok(5),
        _ => Err(format!("Invalid promotion character: {ch}")),
    }
}

fn promotion_to_char(promotion: i32) -> Result<char, String> {
    match promotion {
        2 => Ok('n'),
        3 => Ok('b'),
        4 => Ok('r'),
        5 => Ok('q'),
        _ => Err(format!("Invalid promotion code: {promotion}")),
    }
}

/// Parse a long-algebraic move like `e2e4`, `e1g1`, or `b7a8q` against the
/// position it is to be played in.
pub fn parse_move(text: &str, board: &BoardVector, mover: Side) -> Result<Action, String> {
    let bytes = text.as_bytes();
    if bytes.len() != 4 && bytes.len() != 5 {
        return Err(format!("Invalid long algebraic move: {text}"));
    }

    let from = cell_from_name(&text[0..2])?;
    let to = cell_from_name(&text[2..4])?;

    let source = board.cell(from);
    if source == 0 {
        return Err(format!("No piece on from-square: {}", &text[0..2]));
    }
    if side_of_code(source) != Some(mover) {
        return Err("From-square piece does not belong to side to move".to_owned());
    }
    let kind = kind_of_code(source).ok_or_else(|| format!("Unreadable piece code {source}"))?;

    if kind == PieceKind::King && col_of(from).abs_diff(col_of(to)) == 2 {
        return Ok(if col_of(to) > col_of(from) {
            Action::KINGSIDE
        } else {
            Action::QUEENSIDE
        });
    }

    if bytes.len() == 5 {
        if kind != PieceKind::Pawn {
            return Err("Only pawns may promote".to_owned());
        }
        let promotion = promotion_from_char(bytes[4] as char)?;
        return Ok(Action::promote(from, to, promotion));
    }

    if kind == PieceKind::Pawn {
        let last_row = match mover {
            Side::White => 0,
            Side::Black => 7,
        };
        if row_of(to) == last_row {
            return Err(format!("Missing promotion piece in move: {text}"));
        }
        if col_of(from) != col_of(to) && board.cell(to) == 0 {
            return Ok(Action::capture_en_passant(from, to));
        }
    }

    Ok(Action::ordinary(from, to))
}

/// Render an action back into long-algebraic text. Castles render as the
/// mover's king displacement.
pub fn move_text(action: Action, mover: Side) -> Result<String, String> {
    if action == Action::KINGSIDE {
        return Ok(match mover {
            Side::White => "e1g1".to_owned(),
            Side::Black => "e8g8".to_owned(),
        });
    }
    if action == Action::QUEENSIDE {
        return Ok(match mover {
            Side::White => "e1c1".to_owned(),
            Side::Black => "e8c8".to_owned(),
        });
    }
    if action.castle != 0 {
        return Err(format!("Unknown castle discriminant: {}", action.castle));
    }
    for cell in [action.from, action.to] {
        if !(0..64).contains(&cell) {
            return Err(format!("Square field out of range: {cell}"));
        }
    }

    let mut out = String::new();
    out.push_str(&cell_name(action.from as usize));
    out.push_str(&cell_name(action.to as usize));
    if action.promotion != 0 {
        out.push(promotion_to_char(action.promotion)?);
    }
    Ok(out)
}
