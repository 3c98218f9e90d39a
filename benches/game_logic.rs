use criterion::{black_box, criterion_group, criterion_main, Criterion};
use term_arcade::core::{Board, DodgeGame, GameState, Piece};
use term_arcade::term::GameView;
use term_arcade::types::{Direction, GameAction, PieceKind, RotationDirection};

fn bench_gravity_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);

    c.bench_function("gravity_tick", |b| {
        b.iter(|| {
            if state.is_over() {
                state = GameState::new(12345);
            }
            black_box(state.gravity_tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            // Fill bottom 4 rows
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, true);
                }
            }
            black_box(board.clear_completed_rows());
        })
    });
}

fn bench_piece_movement(c: &mut Criterion) {
    let mut state = GameState::with_active(Board::new(), Piece::spawn(PieceKind::T, 10), 1);

    c.bench_function("piece_move_and_rotate", |b| {
        b.iter(|| {
            state.try_move(black_box(-1), 0);
            state.try_move(black_box(1), 0);
            state.try_rotate(RotationDirection::Clockwise);
            state.try_rotate(RotationDirection::CounterClockwise);
        })
    });
}

fn bench_hard_drop_and_lock(c: &mut Criterion) {
    c.bench_function("hard_drop_and_lock", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(7));
            state.apply_action(GameAction::HardDrop);
            black_box(state.gravity_tick());
        })
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut state = GameState::new(42);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| black_box(state.spawn_piece()))
    });
}

fn bench_render(c: &mut Criterion) {
    let state = GameState::new(3);
    let view = GameView::default();

    c.bench_function("render_frame", |b| b.iter(|| black_box(view.render(&state))));
}

fn bench_dodge_step(c: &mut Criterion) {
    let mut game = DodgeGame::new(9);
    let moves = [Direction::Right, Direction::Down, Direction::Left, Direction::Up];
    let mut i = 0;

    c.bench_function("dodge_step", |b| {
        b.iter(|| {
            if game.is_over() {
                game = DodgeGame::new(9);
            }
            i = (i + 1) % moves.len();
            black_box(game.step(Some(moves[i])));
        })
    });
}

criterion_group!(
    benches,
    bench_gravity_tick,
    bench_line_clear,
    bench_piece_movement,
    bench_hard_drop_and_lock,
    bench_spawn,
    bench_render,
    bench_dodge_step
);
criterion_main!(benches);
