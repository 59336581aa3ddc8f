use approx::relative_eq;
use matmul_loops::error::Error;
use matmul_loops::{SquareMatrix, registry};
use rand::SeedableRng;
use rand::rngs::StdRng;

const NAIVE_NAMES: [&str; 6] = [
    "matmul_ijk",
    "matmul_jik",
    "matmul_kij",
    "matmul_ikj",
    "matmul_jki",
    "matmul_kji",
];

const TILED_NAMES: [&str; 6] = [
    "matmul_tiled_ijk",
    "matmul_tiled_ikj",
    "matmul_tiled_jik",
    "matmul_tiled_jki",
    "matmul_tiled_kij",
    "matmul_tiled_kji",
];

fn random_inputs(dim: usize, seed: u64) -> (SquareMatrix, SquareMatrix) {
    let mut rng = StdRng::seed_from_u64(seed);
    let a = SquareMatrix::random(dim, &mut rng);
    let b = SquareMatrix::random(dim, &mut rng);
    (a, b)
}

/// Reference product computed independently of every kernel under test.
fn reference_product(a: &SquareMatrix, b: &SquareMatrix) -> Vec<f64> {
    let n = a.dim();
    let mut out = vec![0.0; n * n];
    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += a.get(i, k) * b.get(k, j);
            }
            out[i * n + j] = sum;
        }
    }
    out
}

fn assert_matrices_match(expected: &[f64], actual: &[f64], name: &str) {
    assert_eq!(expected.len(), actual.len(), "{}: length mismatch", name);
    for i in 0..expected.len() {
        assert!(
            relative_eq!(expected[i], actual[i], max_relative = 1e-9, epsilon = 1e-12),
            "{}: mismatch at index {}: expected {}, got {}",
            name,
            i,
            expected[i],
            actual[i]
        );
    }
}

/// Resolve `name` and run it on `a`, `b`, returning the output buffer.
///
/// C starts out holding a sentinel so these tests also prove every kernel
/// overwrites stale contents instead of accumulating into them.
fn run_kernel(name: &str, a: &SquareMatrix, b: &SquareMatrix, block: usize) -> Vec<f64> {
    let mut c = SquareMatrix::from_vec(a.dim(), vec![123.456; a.dim() * a.dim()]);
    let kernel = registry::resolve(name).unwrap();
    kernel.run(a, b, &mut c, block).unwrap();
    c.as_slice().to_vec()
}

// ============================================================
// All twelve kernels against an independent reference
// ============================================================

#[test]
fn all_kernels_match_the_reference_product() {
    let (a, b) = random_inputs(64, 2024);
    let expected = reference_product(&a, &b);

    for name in NAIVE_NAMES.iter().chain(&TILED_NAMES) {
        let c = run_kernel(name, &a, &b, 16);
        assert_matrices_match(&expected, &c, name);
    }
}

#[test]
fn all_naive_orders_agree_with_each_other() {
    let (a, b) = random_inputs(48, 7);
    let baseline = run_kernel("matmul_ijk", &a, &b, 1);

    for name in &NAIVE_NAMES[1..] {
        let c = run_kernel(name, &a, &b, 1);
        assert_matrices_match(&baseline, &c, name);
    }
}

// ============================================================
// Tiled kernels against their naive counterparts
// ============================================================

#[test]
fn tiled_matches_naive_for_every_dividing_block() {
    let dim = 48;
    let (a, b) = random_inputs(dim, 11);
    let blocks = [1, 2, 3, 4, 6, 8, 12, 16, 24, 48];

    for order in ["ijk", "ikj", "jik", "jki", "kij", "kji"] {
        let naive = run_kernel(&format!("matmul_{order}"), &a, &b, 1);

        for block in blocks {
            assert_eq!(dim % block, 0);
            let tiled = run_kernel(&format!("matmul_tiled_{order}"), &a, &b, block);
            assert_matrices_match(&naive, &tiled, &format!("tiled_{order}_block_{block}"));
        }
    }
}

#[test]
fn single_tile_spans_the_whole_matrix() {
    let dim = 32;
    let (a, b) = random_inputs(dim, 13);

    // block == dim: one tile covers the entire iteration space, so the
    // tiled kernel degenerates to its naive counterpart.
    for order in ["ijk", "ikj", "jik", "jki", "kij", "kji"] {
        let naive = run_kernel(&format!("matmul_{order}"), &a, &b, 1);
        let tiled = run_kernel(&format!("matmul_tiled_{order}"), &a, &b, dim);
        assert_matrices_match(&naive, &tiled, &format!("full_tile_{order}"));
    }
}

// ============================================================
// Identity: exact equality, no rounding involved
// ============================================================

#[test]
fn identity_times_b_is_exactly_b() {
    let dim = 4;
    let a = SquareMatrix::identity(dim);
    let (_, b) = random_inputs(dim, 17);

    // Each output cell is a single term 1.0 * B[k][j], so every kernel and
    // every valid block size must reproduce B bit for bit.
    for name in NAIVE_NAMES {
        let c = run_kernel(name, &a, &b, 1);
        assert_eq!(c, b.as_slice(), "{name}");
    }
    for name in TILED_NAMES {
        for block in [1, 2, 4] {
            let c = run_kernel(name, &a, &b, block);
            assert_eq!(c, b.as_slice(), "{name} block {block}");
        }
    }
}

// ============================================================
// Dispatch and precondition failures
// ============================================================

#[test]
fn all_twelve_names_resolve() {
    for name in NAIVE_NAMES.iter().chain(&TILED_NAMES) {
        let kernel = registry::resolve(name).unwrap();
        assert_eq!(kernel.name(), *name);
    }
}

#[test]
fn bogus_name_is_an_unknown_kernel() {
    let err = registry::resolve("matmul_bogus").unwrap_err();
    assert!(matches!(err, Error::UnknownKernel(_)));
}

#[test]
fn non_dividing_block_fails_without_writing_the_output() {
    let (a, b) = random_inputs(16, 19);
    let mut c = SquareMatrix::from_vec(16, vec![5.0; 256]);

    for name in TILED_NAMES {
        let kernel = registry::resolve(name).unwrap();
        let err = kernel.run(&a, &b, &mut c, 7).unwrap_err();
        assert!(matches!(err, Error::InvalidBlockSize { .. }), "{name}");
    }

    assert!(c.as_slice().iter().all(|&x| x == 5.0));
}
