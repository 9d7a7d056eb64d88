//! The five-field action tuple consumed by the step kernel.

/// `castle` discriminant values.
pub const CASTLE_NONE: i32 = 0;
pub const CASTLE_KINGSIDE: i32 = 1;
pub const CASTLE_QUEENSIDE: i32 = 2;

/// One proposed move: `[from, to, promotion, en_passant, castle]`.
///
/// `from` and `to` are internal cell indices, meaningful only when
/// `castle == 0`. `promotion` carries a white piece code (2 knight, 3 bishop,
/// 4 rook, 5 queen) or 0; `en_passant` is 1 for an en-passant capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Action {
    pub from: i32,
    pub to: i32,
    pub promotion: i32,
    pub en_passant: i32,
    pub castle: i32,
}

impl Action {
    /// The canonical kingside castling action, `[0, 0, 0, 0, 1]`.
    pub const KINGSIDE: Action = Action {
        from: 0,
        to: 0,
        promotion: 0,
        en_passant: 0,
        castle: CASTLE_KINGSIDE,
    };

    /// The canonical queenside castling action, `[0, 0, 0, 0, 2]`.
    pub const QUEENSIDE: Action = Action {
        from: 0,
        to: 0,
        promotion: 0,
        en_passant: 0,
        castle: CASTLE_QUEENSIDE,
    };

    #[inline]
    pub const fn ordinary(from: usize, to: usize) -> Self {
        Self {
            from: from as i32,
            to: to as i32,
            promotion: 0,
            en_passant: 0,
            castle: CASTLE_NONE,
        }
    }

    #[inline]
    pub const fn promote(from: usize, to: usize, promotion: i32) -> Self {
        Self {
            from: from as i32,
            to: to as i32,
            promotion,
            en_passant: 0,
            castle: CASTLE_NONE,
        }
    }

    #[inline]
    pub const fn capture_en_passant(from: usize, to: usize) -> Self {
        Self {
            from: from as i32,
            to: to as i32,
            promotion: 0,
            en_passant: 1,
            castle: CASTLE_NONE,
        }
    }

    #[inline]
    pub const fn from_fields(fields: [i32; 5]) -> Self {
        Self {
            from: fields[0],
            to: fields[1],
            promotion: fields[2],
            en_passant: fields[3],
            castle: fields[4],
        }
    }

    #[inline]
    pub const fn fields(self) -> [i32; 5] {
        [self.from, self.to, self.promotion, self.en_passant, self.castle]
    }
}
