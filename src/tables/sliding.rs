//! Sliding-piece rays: empty-board ray tables plus blocker-aware tracing.
//!
//! The empty-board tables let callers distinguish "this square is never on a
//! ray from here" from "the ray exists but is blocked".

pub const ROOK_RAYS: [u64; 64] = generate_rook_rays();
pub const BISHOP_RAYS: [u64; 64] = generate_bishop_rays();

#[inline]
pub const fn rook_rays(cell: usize) -> u64 {
    ROOK_RAYS[cell]
}

#[inline]
pub const fn bishop_rays(cell: usize) -> u64 {
    BISHOP_RAYS[cell]
}

/// Rook targets from `cell` stopping at (and including) the first blocker.
pub fn rook_attacks(cell: usize, occupancy: u64) -> u64 {
    let origin = cell as i32;
    let mut attacks = 0u64;

    attacks |= trace_ray(origin, 0, 1, occupancy);
    attacks |= trace_ray(origin, 0, -1, occupancy);
    attacks |= trace_ray(origin, 1, 0, occupancy);
    attacks |= trace_ray(origin, -1, 0, occupancy);

    attacks
}

/// Bishop targets from `cell` stopping at (and including) the first blocker.
pub fn bishop_attacks(cell: usize, occupancy: u64) -> u64 {
    let origin = cell as i32;
    let mut attacks = 0u64;

    attacks |= trace_ray(origin, 1, 1, occupancy);
    attacks |= trace_ray(origin, 1, -1, occupancy);
    attacks |= trace_ray(origin, -1, 1, occupancy);
    attacks |= trace_ray(origin, -1, -1, occupancy);

    attacks
}

fn trace_ray(cell: i32, col_step: i32, row_step: i32, occupancy: u64) -> u64 {
    let mut col = (cell % 8) + col_step;
    let mut row = (cell / 8) + row_step;
    let mut attacks = 0u64;

    while (0..8).contains(&col) && (0..8).contains(&row) {
        let target = (row * 8 + col) as usize;
        let bit = 1u64 << target;
        attacks |= bit;

        if (occupancy & bit) != 0 {
            break;
        }

        col += col_step;
        row += row_step;
    }

    attacks
}

const fn generate_rook_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut cell = 0usize;

    while cell < 64 {
        let origin = cell as i32;
        let mut rays = 0u64;

        rays |= trace_ray_const(origin, 0, 1);
        rays |= trace_ray_const(origin, 0, -1);
        rays |= trace_ray_const(origin, 1, 0);
        rays |= trace_ray_const(origin, -1, 0);

        table[cell] = rays;
        cell += 1;
    }

    table
}

const fn generate_bishop_rays() -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut cell = 0usize;

    while cell < 64 {
        let origin = cell as i32;
        let mut rays = 0u64;

        rays |= trace_ray_const(origin, 1, 1);
        rays |= trace_ray_const(origin, 1, -1);
        rays |= trace_ray_const(origin, -1, 1);
        rays |= trace_ray_const(origin, -1, -1);

        table[cell] = rays;
        cell += 1;
    }

    table
}

const fn trace_ray_const(cell: i32, col_step: i32, row_step: i32) -> u64 {
    let mut col = (cell % 8) + col_step;
    let mut row = (cell / 8) + row_step;
    let mut attacks = 0u64;

    while col >= 0 && col < 8 && row >= 0 && row < 8 {
        let target = (row * 8 + col) as usize;
        attacks |= 1u64 << target;
        col += col_step;
        row += row_step;
    }

    attacks
}
