//! Loop-order and cache-blocking study for dense matrix multiplication.
//!
//! Twelve kernels compute the same product `C = A × B` on square, row-major
//! `f64` matrices: the six permutations of the naive triple loop (`ijk`,
//! `jik`, `kij`, `ikj`, `jki`, `kji`) and six tiled variants that run the
//! same orderings over cubic cache blocks. None of them is clever on
//! purpose. The interesting signal is how far apart identical arithmetic
//! lands in wall time once only the memory access pattern changes.
//!
//! The binary runs exactly one kernel, selected by name, and exits. It
//! prints nothing on success; measure it from outside with `time`, `perf`,
//! or whatever profiler you are studying the cache with.
//!
//! ## Usage
//!
//! ```
//! use matmul_loops::{SquareMatrix, registry};
//! use rand::{SeedableRng, rngs::StdRng};
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let a = SquareMatrix::random(128, &mut rng);
//! let b = SquareMatrix::random(128, &mut rng);
//! let mut c = SquareMatrix::zeros(128);
//!
//! let kernel = registry::resolve("matmul_tiled_ikj").unwrap();
//! kernel.run(&a, &b, &mut c, 32).unwrap();
//! ```

pub mod cli;
pub mod error;
pub mod matrix;
pub mod naive;
pub mod registry;
pub mod tiled;

pub use error::Error;
pub use matrix::SquareMatrix;
pub use registry::{DEFAULT_BLOCK_SIZE, KernelDescriptor, resolve};
