//! Single affine transformation layer.
//!
//! A layer owns a square weight matrix and a bias vector over one fixed
//! dimension. The weights start as a scaled random draw and only ever change
//! through [`Layer::mutate`]; the bias is fixed for the layer's lifetime.

use ndarray::{Array1, Array2};
use rand::Rng;
use rand_distr::StandardNormal;

use crate::error::{Result, StrataError};

/// Default scaling applied to the initial weight draw.
pub const DEFAULT_DYNAMIC_FACTOR: f32 = 1.0;

/// A single affine transformation (`weights · input + bias`) over a
/// fixed-dimension vector.
#[derive(Debug, Clone)]
pub struct Layer {
    dimension: usize,
    weights: Array2<f32>,
    bias: Array1<f32>,
    dynamic_factor: f32,
}

impl Layer {
    /// Create a layer with randomly initialized weights and bias.
    ///
    /// Weights and bias are drawn elementwise from a standard normal
    /// distribution; `dynamic_factor` scales the weight draw only and is
    /// fixed at construction.
    pub fn new<R: Rng>(dimension: usize, dynamic_factor: f32, rng: &mut R) -> Self {
        let weights = Array2::from_shape_fn((dimension, dimension), |_| {
            let z: f32 = rng.sample(StandardNormal);
            z * dynamic_factor
        });
        let bias = Array1::from_shape_fn(dimension, |_| rng.sample(StandardNormal));

        Self {
            dimension,
            weights,
            bias,
            dynamic_factor,
        }
    }

    /// Get the layer dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Get the scaling factor applied to the initial weight draw.
    pub fn dynamic_factor(&self) -> f32 {
        self.dynamic_factor
    }

    /// Transform `input` into `weights · input + bias`.
    ///
    /// Pure in `(weights, bias, input)`: calling it twice without an
    /// intervening [`Layer::mutate`] yields identical output.
    ///
    /// # Errors
    /// Returns [`StrataError::ShapeMismatch`] if the input length differs
    /// from the layer dimension.
    pub fn forward(&self, input: &Array1<f32>) -> Result<Array1<f32>> {
        if input.len() != self.dimension {
            return Err(StrataError::ShapeMismatch {
                what: "input vector",
                got: input.len(),
                expected: self.dimension,
            });
        }

        Ok(self.weights.dot(input) + &self.bias)
    }

    /// Add a fresh random perturbation, scaled by `feedback`, to the weights.
    ///
    /// The draw happens on every call regardless of the feedback value; only
    /// its scale depends on `feedback`. The bias is never mutated.
    pub fn mutate<R: Rng>(&mut self, feedback: f32, rng: &mut R) {
        let adjustment = Array2::from_shape_fn((self.dimension, self.dimension), |_| {
            let z: f32 = rng.sample(StandardNormal);
            z * feedback
        });
        self.weights += &adjustment;
    }
}
