//! Command-line driver logic.
//!
//! Kept separate from `main.rs` so the whole argument-to-invocation path is
//! testable as a plain function returning `Result`. `main` only supplies the
//! fixed dimension, a wall-clock-seeded RNG, and the exit-status mapping.

use rand::Rng;

use crate::error::{Error, Result};
use crate::matrix::SquareMatrix;
use crate::registry::{self, DEFAULT_BLOCK_SIZE};

/// Parse `args` (the arguments after the program name), then allocate, fill,
/// and run the selected kernel exactly once.
///
/// Everything that can fail is checked before any matrix is allocated: a
/// missing kernel name, an unknown name, and (for tiled kernels) a block
/// size that is malformed, zero, or does not divide `dim`. A block-size
/// argument supplied alongside a naive kernel name is ignored.
pub fn run_with<R: Rng>(dim: usize, rng: &mut R, args: &[String]) -> Result<()> {
    let name = args.first().ok_or(Error::MissingKernelName)?;
    let kernel = registry::resolve(name)?;

    let block = if kernel.takes_block_size() {
        match args.get(1) {
            Some(raw) => parse_block_size(raw, dim)?,
            None => DEFAULT_BLOCK_SIZE,
        }
    } else {
        DEFAULT_BLOCK_SIZE
    };

    let a = SquareMatrix::random(dim, rng);
    let b = SquareMatrix::random(dim, rng);
    let mut c = SquareMatrix::zeros(dim);

    // The result is deliberately never inspected; the run's only observable
    // outputs are its wall time and exit status.
    kernel.run(&a, &b, &mut c, block)
}

fn parse_block_size(raw: &str, dim: usize) -> Result<usize> {
    let invalid = || Error::InvalidBlockSize {
        block: raw.to_string(),
        dim,
    };
    let block: usize = raw.parse().map_err(|_| invalid())?;
    if block == 0 || dim % block != 0 {
        return Err(invalid());
    }
    Ok(block)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn args(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn missing_kernel_name_fails_before_anything_else() {
        let err = run_with(8, &mut rng(), &[]).unwrap_err();
        assert!(matches!(err, Error::MissingKernelName));
    }

    #[test]
    fn unknown_kernel_name_is_rejected() {
        let err = run_with(8, &mut rng(), &args(&["matmul_bogus"])).unwrap_err();
        assert!(matches!(err, Error::UnknownKernel(_)));
    }

    #[test]
    fn naive_kernel_runs_without_a_block_size() {
        run_with(8, &mut rng(), &args(&["matmul_ikj"])).unwrap();
    }

    #[test]
    fn naive_kernel_ignores_any_block_size_argument() {
        // Neither value would survive tiled validation at dim 8.
        run_with(8, &mut rng(), &args(&["matmul_kji", "3"])).unwrap();
        run_with(8, &mut rng(), &args(&["matmul_kji", "not-a-number"])).unwrap();
    }

    #[test]
    fn tiled_kernel_defaults_to_block_64() {
        run_with(128, &mut rng(), &args(&["matmul_tiled_ijk"])).unwrap();
    }

    #[test]
    fn tiled_kernel_accepts_an_explicit_dividing_block() {
        run_with(32, &mut rng(), &args(&["matmul_tiled_jki", "8"])).unwrap();
    }

    #[test]
    fn tiled_kernel_rejects_a_non_dividing_block() {
        let err = run_with(32, &mut rng(), &args(&["matmul_tiled_kij", "10"])).unwrap_err();
        assert!(matches!(err, Error::InvalidBlockSize { .. }));
    }

    #[test]
    fn tiled_kernel_rejects_zero_and_malformed_blocks() {
        for bad in ["0", "-8", "abc", "8.5", ""] {
            let err = run_with(32, &mut rng(), &args(&["matmul_tiled_ijk", bad])).unwrap_err();
            assert!(matches!(err, Error::InvalidBlockSize { .. }), "block '{bad}'");
        }
    }
}
