//! Terminal-oriented Unicode board renderer.
//!
//! Creates a human-readable view of the 64 square cells for debugging,
//! tests, and the demo driver. Rights and reserved cells are not shown.

use crate::board::layout::cell_at;
use crate::board::piece::{kind_of_code, side_of_code, PieceKind, Side};
use crate::board::vector::BoardVector;

/// Render the square cells to a Unicode string for terminal output.
pub fn render_board(board: &BoardVector) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..8 {
            match piece_glyph(board.cell(cell_at(file, rank))) {
                Some(ch) => out.push(ch),
                None => out.push('·'),
            }

            if file < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}

fn piece_glyph(code: i32) -> Option<char> {
    let side = side_of_code(code)?;
    let kind = kind_of_code(code)?;
    Some(match (side, kind) {
        (Side::White, PieceKind::Pawn) => '♙',
        (Side::White, PieceKind::Knight) => '♘',
        (Side::White, PieceKind::Bishop) => '♗',
        (Side::White, PieceKind::Rook) => '♖',
        (Side::White, PieceKind::Queen) => '♕',
        (Side::White, PieceKind::King) => '♔',
        (Side::Black, PieceKind::Pawn) => '♟',
        (Side::Black, PieceKind::Knight) => '♞',
        (Side::Black, PieceKind::Bishop) => '♝',
        (Side::Black, PieceKind::Rook) => '♜',
        (Side::Black, PieceKind::Queen) => '♛',
        (Side::Black, PieceKind::King) => '♚',
    })
}
