use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ecosystem_life::{life::input::DEFAULT_BOARD, BoardParser, FixedSex, Game, Legend, Sex};

fn benchmark_next_turn(c: &mut Criterion) {
    let legend = Legend::default();
    let board = BoardParser::new(&legend)
        .parse(&DEFAULT_BOARD)
        .expect("reference board parses");

    c.bench_function("ten_turns_reference_board", |b| {
        b.iter(|| {
            let mut game =
                Game::new(black_box(board.clone()), Box::new(FixedSex(Sex::Male)));
            game.run(10)
        });
    });
}

criterion_group!(benches, benchmark_next_turn);
criterion_main!(benches);
