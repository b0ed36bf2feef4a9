use tictactoe::game_state::GameState;
use tictactoe::search::{evaluate, Pruning, SearchContext};

use criterion::{criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate empty board");
    for pruning in Pruning::ALL.iter() {
        group.bench_function(pruning.to_string(), |b| {
            b.iter(|| evaluate_empty_board(*pruning))
        });
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn evaluate_empty_board(pruning: Pruning) {
    let mut state = GameState::empty();
    let mut context = SearchContext::new(pruning);
    let value = evaluate(&mut context, &mut state).unwrap();
    assert_eq!(value, 0);
}
