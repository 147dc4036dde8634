use criterion::{criterion_group, criterion_main, Criterion};
use life::Grid;

fn bench_step(c: &mut Criterion) {
    const N: usize = 1 << 12;
    let mut grid = Grid::random(N, N, 0.3, Some(42)).unwrap();
    c.bench_function("grid_step", |b| b.iter(|| grid.step()));
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
