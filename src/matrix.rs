//! Square matrix storage and initialization.

use rand::Rng;

/// Dense, square, row-major matrix of `f64` values.
///
/// Element `(i, j)` lives at index `i * dim + j`. The backing buffer is
/// allocated once at construction and never resized; every kernel in this
/// crate works directly on the flat slice.
#[derive(Debug, Clone)]
pub struct SquareMatrix {
    dim: usize,
    data: Vec<f64>,
}

impl SquareMatrix {
    /// Allocate a `dim × dim` matrix of zeros.
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            data: vec![0.0; dim * dim],
        }
    }

    /// Allocate a `dim × dim` matrix filled with values uniform in `[0, 1)`.
    ///
    /// The RNG is caller-supplied so that tests can seed it deterministically.
    /// Deriving a seed (e.g. from the wall clock) is the entry point's job,
    /// never this function's.
    pub fn random<R: Rng>(dim: usize, rng: &mut R) -> Self {
        Self {
            dim,
            data: (0..dim * dim).map(|_| rng.random::<f64>()).collect(),
        }
    }

    /// The `dim × dim` identity matrix.
    pub fn identity(dim: usize) -> Self {
        let mut m = Self::zeros(dim);
        for i in 0..dim {
            m.data[i * dim + i] = 1.0;
        }
        m
    }

    /// Wrap an existing row-major buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != dim * dim`.
    pub fn from_vec(dim: usize, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            dim * dim,
            "expected {}x{}={} elements, got {}",
            dim,
            dim,
            dim * dim,
            data.len()
        );
        Self { dim, data }
    }

    /// Edge length shared by both axes.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.dim + j]
    }

    /// The flat row-major buffer.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// The flat row-major buffer, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }
}
