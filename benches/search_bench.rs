use criterion::{black_box, criterion_group, criterion_main, Criterion};
use word_ladder::{load_dictionary, LadderSolver};

fn bench_shortest_ladder(c: &mut Criterion) {
    let solver = LadderSolver::new(load_dictionary());

    let mut group = c.benchmark_group("shortest_ladder");
    for (source, destination) in [("cat", "dog"), ("cold", "warm"), ("head", "tail")] {
        group.bench_function(format!("{}-{}", source, destination), |b| {
            b.iter(|| black_box(solver.shortest_ladder(black_box(source), black_box(destination))))
        });
    }
    group.finish();
}

fn bench_reachable_from(c: &mut Criterion) {
    let solver = LadderSolver::new(load_dictionary());

    let mut group = c.benchmark_group("reachable_from");
    for word in ["cat", "cold", "stone"] {
        group.bench_function(word, |b| {
            b.iter(|| black_box(solver.reachable_from(black_box(word))))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shortest_ladder, bench_reachable_from);
criterion_main!(benches);
