use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use diddy_chess::{is_valid_move, Board, GameState, Square};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    placement: &'static str,
    expected_legal: Option<u64>,
}

const STARTING: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "starting_position",
        placement: STARTING,
        // 20 per side, no captures available.
        expected_legal: Some(40),
    },
    BenchCase {
        name: "open_middlegame",
        placement: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        expected_legal: None,
    },
];

/// Count (start, end) pairs that `is_valid_move` accepts for every piece on
/// the board, regardless of whose turn it is.
fn count_legal_pairs(board: &Board) -> u64 {
    let mut legal = 0u64;
    for (start, piece) in board.occupied_squares() {
        for row in 0..8 {
            for col in 0..8 {
                let end = Square::unchecked(row, col);
                if is_valid_move(piece, start, end, board).expect("squares on board") {
                    legal += 1;
                }
            }
        }
    }
    legal
}

fn bench_is_valid_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_valid_move_all_pairs");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));
    group.sample_size(30);

    for case in CASES {
        let board = Board::from_placement(case.placement).expect("benchmark placement should parse");
        let expected = count_legal_pairs(&board);

        // Correctness guard before benchmarking.
        if let Some(known) = case.expected_legal {
            assert_eq!(expected, known, "legal pair mismatch for {}", case.name);
        }

        let pairs = board.occupied_squares().count() as u64 * 64;
        group.throughput(Throughput::Elements(pairs));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| {
                let count = count_legal_pairs(black_box(board));
                assert_eq!(count, expected);
                black_box(count)
            });
        });
    }

    group.finish();
}

fn bench_try_move(c: &mut Criterion) {
    let opening = [
        ((6, 4), (4, 4)),
        ((1, 4), (3, 4)),
        ((7, 6), (5, 5)),
        ((0, 1), (2, 2)),
        ((7, 5), (4, 2)),
        ((0, 6), (2, 5)),
    ];

    c.bench_function("try_move_opening_sequence", |b| {
        b.iter(|| {
            let mut game = GameState::new_game();
            for ((r1, c1), (r2, c2)) in opening {
                let applied = game
                    .try_move(Square::unchecked(r1, c1), Square::unchecked(r2, c2))
                    .expect("squares on board");
                assert!(applied);
            }
            black_box(game)
        });
    });
}

criterion_group!(move_benches, bench_is_valid_move, bench_try_move);
criterion_main!(move_benches);
