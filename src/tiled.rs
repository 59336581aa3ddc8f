//! The six tiled (cache-blocked) permutations.
//!
//! Each function partitions the `n × n × n` iteration space into cubic tiles
//! of edge length `block` and runs the naive triple loop inside one
//! `block³` sub-block at a time. The working set per tile is three
//! `block × block` panels; pick `block` so that `3 · block² · 8` bytes fit
//! in the cache level under study and every panel gets reused `block` times
//! before being evicted.
//!
//! The tile loops and the element loops inside a tile both follow the
//! permutation the function is named after. The output is zeroed in one
//! pass up front and accumulated into as tiles complete, so the result
//! equals the naive counterpart's up to summation order.
//!
//! Callers must ensure `block` evenly divides `n`; the registry rejects any
//! other combination before these functions run.

#[inline]
fn check_tiling(a: &[f64], b: &[f64], c: &[f64], n: usize, block: usize) {
    let len = n * n;
    debug_assert_eq!(a.len(), len);
    debug_assert_eq!(b.len(), len);
    debug_assert_eq!(c.len(), len);
    debug_assert!(block > 0 && n % block == 0);
}

/// Tiled i-j-k order.
///
/// The per-tile loop still walks B column-wise, but within a tile those
/// columns are only `block` elements tall, so they stay resident instead of
/// thrashing like the unblocked `ijk`.
pub fn matmul_tiled_ijk(a: &[f64], b: &[f64], c: &mut [f64], n: usize, block: usize) {
    check_tiling(a, b, c, n, block);
    c.fill(0.0);
    for i in (0..n).step_by(block) {
        for j in (0..n).step_by(block) {
            for k in (0..n).step_by(block) {
                for ii in i..i + block {
                    for jj in j..j + block {
                        for kk in k..k + block {
                            c[ii * n + jj] += a[ii * n + kk] * b[kk * n + jj];
                        }
                    }
                }
            }
        }
    }
}

/// Tiled i-k-j order: stride-1 inner streams plus blocking, the best of
/// both effects.
pub fn matmul_tiled_ikj(a: &[f64], b: &[f64], c: &mut [f64], n: usize, block: usize) {
    check_tiling(a, b, c, n, block);
    c.fill(0.0);
    for i in (0..n).step_by(block) {
        for k in (0..n).step_by(block) {
            for j in (0..n).step_by(block) {
                for ii in i..i + block {
                    for kk in k..k + block {
                        for jj in j..j + block {
                            c[ii * n + jj] += a[ii * n + kk] * b[kk * n + jj];
                        }
                    }
                }
            }
        }
    }
}

/// Tiled j-i-k order.
pub fn matmul_tiled_jik(a: &[f64], b: &[f64], c: &mut [f64], n: usize, block: usize) {
    check_tiling(a, b, c, n, block);
    c.fill(0.0);
    for j in (0..n).step_by(block) {
        for i in (0..n).step_by(block) {
            for k in (0..n).step_by(block) {
                for jj in j..j + block {
                    for ii in i..i + block {
                        for kk in k..k + block {
                            c[ii * n + jj] += a[ii * n + kk] * b[kk * n + jj];
                        }
                    }
                }
            }
        }
    }
}

/// Tiled j-k-i order: the column-walking worst case, tamed to `block`-tall
/// columns.
pub fn matmul_tiled_jki(a: &[f64], b: &[f64], c: &mut [f64], n: usize, block: usize) {
    check_tiling(a, b, c, n, block);
    c.fill(0.0);
    for j in (0..n).step_by(block) {
        for k in (0..n).step_by(block) {
            for i in (0..n).step_by(block) {
                for jj in j..j + block {
                    for kk in k..k + block {
                        for ii in i..i + block {
                            c[ii * n + jj] += a[ii * n + kk] * b[kk * n + jj];
                        }
                    }
                }
            }
        }
    }
}

/// Tiled k-i-j order.
pub fn matmul_tiled_kij(a: &[f64], b: &[f64], c: &mut [f64], n: usize, block: usize) {
    check_tiling(a, b, c, n, block);
    c.fill(0.0);
    for k in (0..n).step_by(block) {
        for i in (0..n).step_by(block) {
            for j in (0..n).step_by(block) {
                for kk in k..k + block {
                    for ii in i..i + block {
                        for jj in j..j + block {
                            c[ii * n + jj] += a[ii * n + kk] * b[kk * n + jj];
                        }
                    }
                }
            }
        }
    }
}

/// Tiled k-j-i order.
pub fn matmul_tiled_kji(a: &[f64], b: &[f64], c: &mut [f64], n: usize, block: usize) {
    check_tiling(a, b, c, n, block);
    c.fill(0.0);
    for k in (0..n).step_by(block) {
        for j in (0..n).step_by(block) {
            for i in (0..n).step_by(block) {
                for kk in k..k + block {
                    for jj in j..j + block {
                        for ii in i..i + block {
                            c[ii * n + jj] += a[ii * n + kk] * b[kk * n + jj];
                        }
                    }
                }
            }
        }
    }
}
