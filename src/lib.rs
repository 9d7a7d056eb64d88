//! Crate root module declarations for the Flock Chess batched rules kernel.
//!
//! Positions are fixed-width integer vectors advanced in bulk: each proposed
//! action is validated against full chess legality and either applied
//! atomically or rejected with a per-instance penalty reward, so one illegal
//! action can never abort the rest of the batch.

pub mod board {
    pub mod codec;
    pub mod layout;
    pub mod piece;
    pub mod vector;
}

pub mod tables {
    pub mod king_steps;
    pub mod knight_jumps;
    pub mod pawn_captures;
    pub mod sliding;
}

pub mod kernel {
    pub mod action;
    pub mod attack;
    pub mod castling;
    pub mod outcome;
    pub mod rights;
    pub mod step;
}

pub mod utils {
    pub mod actions;
    pub mod fen;
    pub mod notation;
    pub mod render;
}
