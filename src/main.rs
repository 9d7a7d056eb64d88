//! Batched random self-play demo.
//!
//! Drives a batch of independent games through the step kernel, picking a
//! uniformly random legal action per live instance each ply. One instance
//! deliberately proposes junk every ply to show the penalty path, and
//! instances with no legal action left are frozen in place.

use rand::prelude::IndexedRandom;

use flock_chess::board::piece::Side;
use flock_chess::board::vector::BoardVector;
use flock_chess::kernel::action::Action;
use flock_chess::kernel::step::step_batch;
use flock_chess::utils::actions::legal_actions;
use flock_chess::utils::render::render_board;

const BATCH: usize = 8;
const MAX_PLIES: usize = 60;
/// Instance 0 proposes this every ply: a rook slide from an empty square.
const JUNK_ACTION: Action = Action::ordinary(30, 33);

fn report(line: &str) {
    let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
    println!("[{stamp}] {line}");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut boards = vec![BoardVector::start_position(); BATCH];
    let mut sides = vec![Side::White; BATCH];
    let mut frozen = vec![false; BATCH];
    let mut rng = rand::rng();

    let mut accepted = 0usize;
    let mut rejected = 0usize;

    report(&format!("starting {BATCH} games, up to {MAX_PLIES} plies each"));

    for ply in 0..MAX_PLIES {
        let mut actions = Vec::with_capacity(BATCH);
        for instance in 0..BATCH {
            // Instance 0 demonstrates the penalty path; frozen instances
            // keep proposing junk the kernel keeps rejecting in place.
            if instance == 0 || frozen[instance] {
                actions.push(JUNK_ACTION);
                continue;
            }
            let legal = legal_actions(&boards[instance], sides[instance])?;
            match legal.as_slice().choose(&mut rng) {
                Some(&action) => actions.push(action),
                None => {
                    report(&format!(
                        "instance {instance} has no legal action at ply {ply}, freezing"
                    ));
                    frozen[instance] = true;
                    actions.push(JUNK_ACTION);
                }
            }
        }

        let (rewards, verdicts) = step_batch(&mut boards, &actions, &mut sides)?;
        for (instance, verdict) in verdicts.iter().enumerate() {
            if verdict.is_applied() {
                accepted += 1;
            } else {
                rejected += 1;
                if instance == 0 && ply == 0 {
                    report(&format!(
                        "instance 0 junk probe rejected: code {} reward {:?}",
                        verdict.code(),
                        rewards[0],
                    ));
                }
            }
        }
    }

    report(&format!("done: {accepted} accepted, {rejected} rejected"));
    report("final position of instance 1:");
    println!("{}", render_board(&boards[1]));
    Ok(())
}
