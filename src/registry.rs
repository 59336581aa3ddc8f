//! Name-keyed registry of the twelve multiplication kernels.
//!
//! Every kernel, naive or tiled, is invoked through one canonical shape:
//! read-only A, read-only B, mutable output C, plus a block size that only
//! the tiled family consumes. The registry owns the mapping from a
//! command-line name to an implementation and performs the precondition
//! checks that must happen before any kernel body runs.

use crate::error::{Error, Result};
use crate::matrix::SquareMatrix;
use crate::{naive, tiled};

/// Block size used when the command line does not supply one.
pub const DEFAULT_BLOCK_SIZE: usize = 64;

type NaiveFn = fn(&[f64], &[f64], &mut [f64], usize);
type TiledFn = fn(&[f64], &[f64], &mut [f64], usize, usize);

#[derive(Debug)]
enum KernelFn {
    Naive(NaiveFn),
    Tiled(TiledFn),
}

/// One registry entry: a canonical name plus the kernel it selects.
#[derive(Debug)]
pub struct KernelDescriptor {
    name: &'static str,
    kernel: KernelFn,
}

static KERNELS: [KernelDescriptor; 12] = [
    KernelDescriptor {
        name: "matmul_ijk",
        kernel: KernelFn::Naive(naive::matmul_ijk),
    },
    KernelDescriptor {
        name: "matmul_jik",
        kernel: KernelFn::Naive(naive::matmul_jik),
    },
    KernelDescriptor {
        name: "matmul_kij",
        kernel: KernelFn::Naive(naive::matmul_kij),
    },
    KernelDescriptor {
        name: "matmul_ikj",
        kernel: KernelFn::Naive(naive::matmul_ikj),
    },
    KernelDescriptor {
        name: "matmul_jki",
        kernel: KernelFn::Naive(naive::matmul_jki),
    },
    KernelDescriptor {
        name: "matmul_kji",
        kernel: KernelFn::Naive(naive::matmul_kji),
    },
    KernelDescriptor {
        name: "matmul_tiled_ijk",
        kernel: KernelFn::Tiled(tiled::matmul_tiled_ijk),
    },
    KernelDescriptor {
        name: "matmul_tiled_ikj",
        kernel: KernelFn::Tiled(tiled::matmul_tiled_ikj),
    },
    KernelDescriptor {
        name: "matmul_tiled_jik",
        kernel: KernelFn::Tiled(tiled::matmul_tiled_jik),
    },
    KernelDescriptor {
        name: "matmul_tiled_jki",
        kernel: KernelFn::Tiled(tiled::matmul_tiled_jki),
    },
    KernelDescriptor {
        name: "matmul_tiled_kij",
        kernel: KernelFn::Tiled(tiled::matmul_tiled_kij),
    },
    KernelDescriptor {
        name: "matmul_tiled_kji",
        kernel: KernelFn::Tiled(tiled::matmul_tiled_kji),
    },
];

impl KernelDescriptor {
    /// The canonical command-line name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether this kernel consumes the block-size parameter.
    pub fn takes_block_size(&self) -> bool {
        matches!(self.kernel, KernelFn::Tiled(_))
    }

    /// Invoke the kernel once, computing `C = A × B`.
    ///
    /// For tiled kernels the block size is validated first: it must be
    /// positive and evenly divide the matrix dimension, otherwise the last
    /// tile along an axis would overrun the matrix and this returns
    /// [`Error::InvalidBlockSize`] without touching C. Naive kernels ignore
    /// `block` entirely.
    ///
    /// # Panics
    ///
    /// Panics if the three matrices do not share one dimension.
    pub fn run(
        &self,
        a: &SquareMatrix,
        b: &SquareMatrix,
        c: &mut SquareMatrix,
        block: usize,
    ) -> Result<()> {
        let n = a.dim();
        assert_eq!(b.dim(), n, "B: expected dimension {}, got {}", n, b.dim());
        assert_eq!(c.dim(), n, "C: expected dimension {}, got {}", n, c.dim());

        match self.kernel {
            KernelFn::Naive(f) => f(a.as_slice(), b.as_slice(), c.as_mut_slice(), n),
            KernelFn::Tiled(f) => {
                if block == 0 || n % block != 0 {
                    return Err(Error::InvalidBlockSize {
                        block: block.to_string(),
                        dim: n,
                    });
                }
                f(a.as_slice(), b.as_slice(), c.as_mut_slice(), n, block)
            }
        }
        Ok(())
    }
}

/// Look up a kernel by its exact name.
///
/// No prefix matching, no case folding: anything other than one of the
/// twelve literal names is [`Error::UnknownKernel`].
pub fn resolve(name: &str) -> Result<&'static KernelDescriptor> {
    KERNELS
        .iter()
        .find(|d| d.name == name)
        .ok_or_else(|| Error::UnknownKernel(name.to_string()))
}

/// All twelve registered kernels, naive family first.
pub fn kernels() -> impl Iterator<Item = &'static KernelDescriptor> {
    KERNELS.iter()
}
