use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use flock_chess::board::layout::{cell_at, SQUARE_CELLS};
use flock_chess::board::piece::Side;
use flock_chess::board::vector::BoardVector;
use flock_chess::kernel::attack::is_attacked;
use flock_chess::utils::fen::parse_fen;

struct BenchCase {
    name: &'static str,
    fen: &'static str,
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "start_position",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    },
    BenchCase {
        name: "open_midgame",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    },
    BenchCase {
        name: "sparse_endgame",
        fen: "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    },
];

/// Full board sweep: both sides against all 64 cells.
fn attack_sweep(board: &BoardVector) -> u32 {
    let mut attacked = 0u32;
    for cell in 0..SQUARE_CELLS {
        for side in [Side::White, Side::Black] {
            if is_attacked(board, cell, side) {
                attacked += 1;
            }
        }
    }
    attacked
}

fn bench_attack_oracle(c: &mut Criterion) {
    let mut group = c.benchmark_group("attack_oracle");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(50);

    for case in CASES {
        let (board, _) = parse_fen(case.fen).expect("benchmark FEN should parse");

        // Spot guards before benchmarking.
        if case.name == "start_position" {
            assert!(is_attacked(&board, cell_at(5, 2), Side::White)); // f3
            assert!(is_attacked(&board, cell_at(5, 5), Side::Black)); // f6
            assert!(!is_attacked(&board, cell_at(4, 3), Side::White)); // e4
        }
        let warmup = attack_sweep(&board);
        assert!(warmup > 0, "sweep for {} found no attacked cells", case.name);

        group.throughput(Throughput::Elements((SQUARE_CELLS * 2) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, bench_board| {
            b.iter(|| black_box(attack_sweep(black_box(bench_board))));
        });
    }

    group.finish();
}

criterion_group!(oracle_benches, bench_attack_oracle);
criterion_main!(oracle_benches);
