use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use mazebench::{
    generators::generate_maze,
    maze::MazeKind,
    solvers::{Solver, solve_maze},
};

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for size in [50u16, 200] {
        for kind in MazeKind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.to_string(), size), &size, |b, &size| {
                b.iter(|| generate_maze(size, kind, Some(1)).unwrap());
            });
        }
    }
    group.finish();
}

fn bench_solvers(c: &mut Criterion) {
    let maze = generate_maze(200, MazeKind::Imperfect, Some(1)).unwrap();
    let mut group = c.benchmark_group("solve_200");
    for solver in Solver::ALL {
        group.bench_function(solver.to_string(), |b| {
            b.iter(|| solve_maze(&maze, solver).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generation, bench_solvers);
criterion_main!(benches);
