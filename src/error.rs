//! Error taxonomy for kernel selection and invocation.
//!
//! All three variants are detected before any kernel body runs and are
//! terminal for the process: the binary maps any of them to a diagnostic
//! line and exit status 1.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// No kernel name was supplied on the command line.
    #[error("usage: matmul-loops <kernel_name> [block_size]")]
    MissingKernelName,

    /// The requested name is not one of the twelve registered kernels.
    #[error("unknown kernel: {0}")]
    UnknownKernel(String),

    /// A tiled kernel was asked to run with a block size that is not a
    /// positive integer evenly dividing the matrix dimension.
    #[error("invalid block size '{block}': must be a positive integer that evenly divides the matrix dimension {dim}")]
    InvalidBlockSize { block: String, dim: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
