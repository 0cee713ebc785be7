use criterion::{black_box, criterion_group, criterion_main, Criterion};

use snakes_ladders::core::{GameRng, GameState};
use snakes_ladders::rules::{apply_move, resolve_move};
use snakes_ladders::{BoardTopology, PlayerId, Square};

fn bench_resolve(c: &mut Criterion) {
    let board = BoardTopology::classic();
    let from = Square::new(96);

    c.bench_function("resolve_move overshoot + snake", |b| {
        b.iter(|| resolve_move(black_box(&board), black_box(from), black_box(6)))
    });
}

fn bench_full_game(c: &mut Criterion) {
    c.bench_function("play classic game to finish", |b| {
        b.iter(|| {
            let mut rng = GameRng::new(black_box(7));
            let mut state = GameState::new(BoardTopology::classic());
            while !state.is_finished() {
                let player = state.current_player();
                let roll = u64::from(rng.roll_die());
                if apply_move(&mut state, player, roll, false).is_err() {
                    break;
                }
            }
            state.winner().map(PlayerId::index)
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    c.bench_function("generate random board 12+12", |b| {
        let mut rng = GameRng::new(11);
        b.iter(|| BoardTopology::generate(&mut rng, 12, 12))
    });
}

criterion_group!(benches, bench_resolve, bench_full_game, bench_generate);
criterion_main!(benches);
