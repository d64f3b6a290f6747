use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use wastedris::core::shapes::generate;
use wastedris::core::{can_move, can_rotate, Board, GameState};
use wastedris::types::{CellColor, BOARD_COLS, BOARD_ROWS};

fn bench_base_tick(c: &mut Criterion) {
    c.bench_function("base_tick_period_1", |b| {
        b.iter_batched(
            || GameState::new(12345).with_gravity_period(1),
            |mut state| {
                for _ in 0..64 {
                    black_box(state.base_tick());
                }
                state
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_row_clear(c: &mut Criterion) {
    let color = CellColor::new(1).unwrap();
    c.bench_function("clear_4_rows", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in BOARD_ROWS as i8 - 4..BOARD_ROWS as i8 {
                for x in 0..BOARD_COLS as i8 {
                    board.set(x, y, color);
                }
            }
            black_box(board.clear_full_rows())
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);
    c.bench_function("generate_piece", |b| b.iter(|| black_box(generate(&mut rng))));
}

fn bench_rules(c: &mut Criterion) {
    let state = GameState::new(12345);
    let board = state.board();
    let piece = state.active();

    c.bench_function("can_move", |b| {
        b.iter(|| can_move(black_box(board), black_box(piece), 1, 0))
    });
    c.bench_function("can_rotate", |b| {
        b.iter(|| can_rotate(black_box(board), black_box(piece), true))
    });
}

fn bench_frame_diff(c: &mut Criterion) {
    let mut state = GameState::new(12345).with_gravity_period(1);
    c.bench_function("tick_and_frame", |b| {
        b.iter(|| {
            if state.base_tick().is_none() {
                state = GameState::new(12345).with_gravity_period(1);
            }
            black_box(state.frame())
        })
    });
}

criterion_group!(
    benches,
    bench_base_tick,
    bench_row_clear,
    bench_generate,
    bench_rules,
    bench_frame_diff
);
criterion_main!(benches);
