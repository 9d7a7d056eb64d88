//! Kernel outcome types: hard boundary errors, per-instance verdicts, and
//! the reward signal.
//!
//! Game-legality failures are data, never errors: they surface as a
//! [`Verdict::Rejected`] with a stable reason code and a penalty in the
//! mover's reward slot. [`KernelError`] is reserved for malformed inputs.

use std::error::Error;
use std::fmt;

use crate::board::piece::Side;

pub type KernelResult<T> = Result<T, KernelError>;

/// Hard failures at the kernel boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KernelError {
    /// The codec was given a cell code outside the 13 valid values.
    InvalidPiece { code: i32, cell: usize },
    /// Batch slices disagree in length.
    BatchShape {
        boards: usize,
        actions: usize,
        sides: usize,
    },
    /// A non-castle action names a square outside 0..=63.
    CellRange { field: &'static str, value: i32 },
    /// A batch worker thread panicked.
    WorkerPanicked,
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidPiece { code, cell } => {
                write!(f, "invalid piece code {code} at cell {cell}")
            }
            KernelError::BatchShape {
                boards,
                actions,
                sides,
            } => write!(
                f,
                "mismatched batch shapes: {boards} boards, {actions} actions, {sides} sides"
            ),
            KernelError::CellRange { field, value } => {
                write!(f, "action field '{field}' out of cell range: {value}")
            }
            KernelError::WorkerPanicked => write!(f, "batch worker thread panicked"),
        }
    }
}

impl Error for KernelError {}

impl KernelError {
    pub(crate) fn check_shape(boards: usize, actions: usize, sides: usize) -> KernelResult<()> {
        if boards != actions || boards != sides {
            return Err(KernelError::BatchShape {
                boards,
                actions,
                sides,
            });
        }
        Ok(())
    }
}

/// Penalty written into the mover's reward slot on a rejected action.
pub const ILLEGAL_MOVE_PENALTY: i32 = -1;

/// Two-wide reward for one instance, one slot per side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reward {
    pub white: i32,
    pub black: i32,
}

impl Reward {
    #[inline]
    pub const fn accepted() -> Self {
        Self { white: 0, black: 0 }
    }

    #[inline]
    pub const fn rejected(mover: Side) -> Self {
        match mover {
            Side::White => Self {
                white: ILLEGAL_MOVE_PENALTY,
                black: 0,
            },
            Side::Black => Self {
                white: 0,
                black: ILLEGAL_MOVE_PENALTY,
            },
        }
    }

    #[inline]
    pub const fn slot(self, side: Side) -> i32 {
        match side {
            Side::White => self.white,
            Side::Black => self.black,
        }
    }
}

/// Why an action was rejected. Codes are stable so callers may log or
/// aggregate them numerically; 0 is reserved for "applied".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    WrongMoveClass,
    EmptySource,
    NotYourPiece,
    OwnPieceCapture,
    KingCapture,
    BadPattern,
    PathBlocked,
    BadPromotion,
    IntoCheck,
    RightsForfeited,
    CastleBlocked,
    CastleThroughCheck,
    BadEnPassant,
}

impl RejectReason {
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            RejectReason::WrongMoveClass => 1,
            RejectReason::EmptySource => 2,
            RejectReason::NotYourPiece => 3,
            RejectReason::OwnPieceCapture => 4,
            RejectReason::KingCapture => 5,
            RejectReason::BadPattern => 6,
            RejectReason::PathBlocked => 7,
            RejectReason::BadPromotion => 8,
            RejectReason::IntoCheck => 9,
            RejectReason::RightsForfeited => 10,
            RejectReason::CastleBlocked => 11,
            RejectReason::CastleThroughCheck => 12,
            RejectReason::BadEnPassant => 13,
        }
    }

    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(RejectReason::WrongMoveClass),
            2 => Some(RejectReason::EmptySource),
            3 => Some(RejectReason::NotYourPiece),
            4 => Some(RejectReason::OwnPieceCapture),
            5 => Some(RejectReason::KingCapture),
            6 => Some(RejectReason::BadPattern),
            7 => Some(RejectReason::PathBlocked),
            8 => Some(RejectReason::BadPromotion),
            9 => Some(RejectReason::IntoCheck),
            10 => Some(RejectReason::RightsForfeited),
            11 => Some(RejectReason::CastleBlocked),
            12 => Some(RejectReason::CastleThroughCheck),
            13 => Some(RejectReason::BadEnPassant),
            _ => None,
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            RejectReason::WrongMoveClass => "wrong move class",
            RejectReason::EmptySource => "empty source square",
            RejectReason::NotYourPiece => "piece belongs to the opponent",
            RejectReason::OwnPieceCapture => "destination holds own piece",
            RejectReason::KingCapture => "kings are not capturable",
            RejectReason::BadPattern => "destination unreachable by pattern",
            RejectReason::PathBlocked => "sliding path blocked",
            RejectReason::BadPromotion => "invalid promotion piece",
            RejectReason::IntoCheck => "move leaves own king in check",
            RejectReason::RightsForfeited => "castling rights forfeited",
            RejectReason::CastleBlocked => "castling squares not clear",
            RejectReason::CastleThroughCheck => "castling through or into check",
            RejectReason::BadEnPassant => "no matching en-passant target",
        };
        f.write_str(text)
    }
}

/// Per-instance tagged outcome folded into data alongside the reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Applied,
    Rejected(RejectReason),
}

impl Verdict {
    /// The same integer the castling kernels return: 0 applied, else the
    /// reject code.
    #[inline]
    pub const fn code(self) -> i32 {
        match self {
            Verdict::Applied => 0,
            Verdict::Rejected(reason) => reason.code(),
        }
    }

    #[inline]
    pub const fn is_applied(self) -> bool {
        matches!(self, Verdict::Applied)
    }

    /// Reward for the instance, given who was to move before the step.
    #[inline]
    pub const fn reward(self, mover: Side) -> Reward {
        match self {
            Verdict::Applied => Reward::accepted(),
            Verdict::Rejected(_) => Reward::rejected(mover),
        }
    }
}
