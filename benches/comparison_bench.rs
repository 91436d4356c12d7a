use criterion::{criterion_group, criterion_main, Criterion};
use grid_planning::{Algorithm, Cell, Grid, NoMeasure};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

/// Square grid with a 25% obstacle density, start in the top-left and goal in the bottom-right
/// corner.
fn random_grid(n: usize, rng: &mut StdRng) -> Grid {
    let mut rows: Vec<Vec<i32>> = (0..n)
        .map(|_| (0..n).map(|_| i32::from(rng.gen_bool(0.25))).collect())
        .collect();
    rows[0][0] = Cell::Start.code();
    rows[n - 1][n - 1] = Cell::Goal.code();
    Grid::from_rows(&rows).unwrap()
}

fn solver_comparison(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [32, 128] {
        let grids: Vec<Grid> = (0..16).map(|_| random_grid(n, &mut rng)).collect();
        for algorithm in Algorithm::ALL {
            c.bench_function(format!("{n}x{n}, {}", algorithm.name()).as_str(), |b| {
                b.iter(|| {
                    for grid in &grids {
                        black_box(algorithm.run(Ok(grid), &mut NoMeasure));
                    }
                })
            });
        }
    }
}

criterion_group!(benches, solver_comparison);
criterion_main!(benches);
