//! Criterion comparison of the twelve kernels.
//!
//! This is a quick relative read at a dimension small enough for a coffee
//! break; the binary plus an external profiler remains the real instrument
//! for full-size runs.

use criterion::{Criterion, criterion_group, criterion_main};
use matmul_loops::{SquareMatrix, registry};
use rand::SeedableRng;
use rand::rngs::StdRng;

const DIM: usize = 256;
const BLOCK: usize = 32;

fn bench_kernels(cr: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let a = SquareMatrix::random(DIM, &mut rng);
    let b = SquareMatrix::random(DIM, &mut rng);

    let mut group = cr.benchmark_group(format!("matmul_{DIM}"));
    for kernel in registry::kernels() {
        group.bench_function(kernel.name(), |bench| {
            let mut c = SquareMatrix::zeros(DIM);
            bench.iter(|| kernel.run(&a, &b, &mut c, BLOCK).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_kernels);
criterion_main!(benches);
