//! The six naive loop-order permutations.
//!
//! Every function here computes the same product, `C = A × B`, with the same
//! triple loop over `i`, `j`, `k`; only the nesting order differs. That is
//! the whole point: on large matrices the orders differ by an order of
//! magnitude in wall time purely through memory access patterns, which is
//! what the harness exists to measure.
//!
//! Zero-initialization follows the nesting. When `k` is the innermost loop
//! (`ijk`, `jik`) each output cell is zeroed right before its own dot
//! product. When `k` sits further out, a cell's partial sums are spread
//! across distant iterations, so the whole output is zeroed in one pass up
//! front. Both policies compute the same sums; only the rounding order can
//! differ in the low bits.

#[inline]
fn check_dims(a: &[f64], b: &[f64], c: &[f64], n: usize) {
    let len = n * n;
    debug_assert_eq!(a.len(), len);
    debug_assert_eq!(b.len(), len);
    debug_assert_eq!(c.len(), len);
}

/// Textbook i-j-k order.
///
/// The innermost loop walks a column of B with stride `n`, missing cache on
/// nearly every access once B outgrows it. This is the slow baseline the
/// other orders are measured against.
pub fn matmul_ijk(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    check_dims(a, b, c, n);
    for i in 0..n {
        for j in 0..n {
            c[i * n + j] = 0.0;
            for k in 0..n {
                c[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }
}

/// j-i-k order: the same per-cell dot product as `ijk`, but the output is
/// visited column by column, so writes to C stride by `n` as well.
pub fn matmul_jik(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    check_dims(a, b, c, n);
    for j in 0..n {
        for i in 0..n {
            c[i * n + j] = 0.0;
            for k in 0..n {
                c[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }
}

/// k-i-j order: the innermost loop streams row `k` of B and row `i` of C at
/// stride 1, at the cost of sweeping all of C once per value of `k`.
pub fn matmul_kij(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0.0);
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                c[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }
}

/// i-k-j order.
///
/// The cache-friendly ordering: the innermost loop touches B and C
/// sequentially while `a[i][k]` stays fixed, so every stream moves at
/// stride 1 and row `i` of C stays hot across the whole `k` loop.
pub fn matmul_ikj(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0.0);
    for i in 0..n {
        for k in 0..n {
            for j in 0..n {
                c[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }
}

/// j-k-i order: the innermost loop descends a column of A and a column of C,
/// both at stride `n`. Two strided streams make this one of the worst
/// orderings on large matrices.
pub fn matmul_jki(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0.0);
    for j in 0..n {
        for k in 0..n {
            for i in 0..n {
                c[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }
}

/// k-j-i order: column walks of A and C like `jki`, with the `k` sweep
/// hoisted outermost.
pub fn matmul_kji(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    check_dims(a, b, c, n);
    c.fill(0.0);
    for k in 0..n {
        for j in 0..n {
            for i in 0..n {
                c[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }
}
