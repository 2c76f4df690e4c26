//! Top-level model: a flat layer arena grouped into ordered spans.
//!
//! The model owns every layer in one contiguous `Vec`, its own seedable
//! random source, and the structural-state persistence entry points. It is
//! strictly single-threaded: `process` and `adjust` run to completion with
//! no interior locking, so concurrent callers must serialize access
//! externally.

use std::path::Path;

use log::{debug, info};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{Layer, LayerGroup, DEFAULT_DYNAMIC_FACTOR};
use crate::config::EngineConfig;
use crate::error::{Result, StrataError};
use crate::state::{self, ModelShape};

/// The layered vector-transformation engine.
///
/// Built once with a fixed shape (`layer_count` groups of `sub_layer_count`
/// layers, all sharing one dimension); only the numeric weight contents
/// change afterwards, through [`Model::adjust`].
#[derive(Debug)]
pub struct Model {
    layer_count: usize,
    sub_layer_count: usize,
    dimension: usize,
    max_total_layers: usize,
    layers: Vec<Layer>,
    groups: Vec<LayerGroup>,
    rng: StdRng,
}

impl Model {
    /// Create a model with the engine-wide default configuration.
    pub fn new(layer_count: usize, sub_layer_count: usize) -> Result<Self> {
        Self::with_config(layer_count, sub_layer_count, &EngineConfig::default())
    }

    /// Create a model with an explicit configuration.
    ///
    /// # Errors
    /// - [`StrataError::InvalidDimension`] if the configured dimension is zero
    /// - [`StrataError::InvalidShape`] if either count is zero
    /// - [`StrataError::ModelTooLarge`] if the total layer count exceeds the
    ///   configured ceiling (nothing is allocated in that case)
    pub fn with_config(
        layer_count: usize,
        sub_layer_count: usize,
        config: &EngineConfig,
    ) -> Result<Self> {
        if config.dimension == 0 {
            return Err(StrataError::InvalidDimension {
                dimension: config.dimension,
            });
        }
        if layer_count == 0 || sub_layer_count == 0 {
            return Err(StrataError::InvalidShape {
                layer_count,
                sub_layer_count,
            });
        }
        Self::checked_total(layer_count, sub_layer_count, config.max_total_layers)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let (layers, groups) =
            Self::build_arena(layer_count, sub_layer_count, config.dimension, &mut rng);

        info!(
            "Built model: {} groups x {} layers, dimension {}",
            layer_count, sub_layer_count, config.dimension
        );

        Ok(Self {
            layer_count,
            sub_layer_count,
            dimension: config.dimension,
            max_total_layers: config.max_total_layers,
            layers,
            groups,
            rng,
        })
    }

    /// Validate the total layer count against the ceiling before any
    /// allocation happens. Multiplication overflow counts as too large.
    fn checked_total(
        layer_count: usize,
        sub_layer_count: usize,
        ceiling: usize,
    ) -> Result<usize> {
        match layer_count.checked_mul(sub_layer_count) {
            Some(total) if total <= ceiling => Ok(total),
            _ => Err(StrataError::ModelTooLarge {
                requested: layer_count.saturating_mul(sub_layer_count),
                ceiling,
            }),
        }
    }

    fn build_arena<R: rand::Rng>(
        layer_count: usize,
        sub_layer_count: usize,
        dimension: usize,
        rng: &mut R,
    ) -> (Vec<Layer>, Vec<LayerGroup>) {
        let total = layer_count * sub_layer_count;
        let mut layers = Vec::with_capacity(total);
        let mut groups = Vec::with_capacity(layer_count);

        for group_index in 0..layer_count {
            for _ in 0..sub_layer_count {
                layers.push(Layer::new(dimension, DEFAULT_DYNAMIC_FACTOR, rng));
            }
            groups.push(LayerGroup::new(group_index * sub_layer_count, sub_layer_count));
        }

        (layers, groups)
    }

    /// Number of layer groups.
    pub fn layer_count(&self) -> usize {
        self.layer_count
    }

    /// Number of layers in each group.
    pub fn sub_layer_count(&self) -> usize {
        self.sub_layer_count
    }

    /// Vector dimension shared by every layer.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Total number of layers in the arena.
    pub fn total_layers(&self) -> usize {
        self.layers.len()
    }

    /// Forward `input` through every group in declared order, threading the
    /// output of one group as the input to the next.
    ///
    /// Deterministic between [`Model::adjust`] calls: no hidden randomness
    /// or state mutation happens on this path.
    ///
    /// # Errors
    /// Returns [`StrataError::ShapeMismatch`] if the input length differs
    /// from the engine dimension.
    pub fn process(&self, input: &Array1<f32>) -> Result<Array1<f32>> {
        let mut current = input.clone();
        for group in &self.groups {
            current = group.forward(&self.layers, current)?;
        }
        Ok(current)
    }

    /// Broadcast a feedback-scaled random perturbation to every layer.
    ///
    /// Every layer receives an independent draw scaled by the same feedback
    /// value. This is undirected noise injection, not a gradient step; the
    /// draw happens even when `feedback` is zero.
    pub fn adjust(&mut self, feedback: f32) {
        debug!("Adjusting weights, feedback {feedback}");
        for group in &self.groups {
            group.mutate_all(&mut self.layers, feedback, &mut self.rng);
        }
    }

    /// Persist the structural parameters to `path`, overwriting any existing
    /// file. Weights and biases are not persisted.
    pub fn save_state(&self, path: &Path) -> Result<()> {
        let shape = ModelShape {
            layer_count: self.layer_count as isize,
            sub_layer_count: self.sub_layer_count as isize,
        };
        state::save_shape(path, &shape)?;
        info!("Saved model state: {}", path.display());
        Ok(())
    }

    /// Restore the structural parameters from `path` and rebuild the layer
    /// arena to match.
    ///
    /// Only the two structural counts are persisted, so the rebuilt layers
    /// start from fresh random weights. On any error (missing file, short
    /// read, invalid counts) the model is left exactly as it was; a
    /// partially applied shape is impossible.
    pub fn load_state(&mut self, path: &Path) -> Result<()> {
        let shape = state::load_shape(path)?;
        let layer_count = shape.layer_count as usize;
        let sub_layer_count = shape.sub_layer_count as usize;
        Self::checked_total(layer_count, sub_layer_count, self.max_total_layers)?;

        let (layers, groups) =
            Self::build_arena(layer_count, sub_layer_count, self.dimension, &mut self.rng);
        self.layer_count = layer_count;
        self.sub_layer_count = sub_layer_count;
        self.layers = layers;
        self.groups = groups;

        info!(
            "Loaded model state: {} ({} groups x {} layers)",
            path.display(),
            layer_count,
            sub_layer_count
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn small_config(seed: u64) -> EngineConfig {
        EngineConfig::default().with_dimension(4).with_seed(seed)
    }

    fn sample_input() -> Array1<f32> {
        Array1::from_vec(vec![1.0, 0.0, 0.0, 0.0])
    }

    #[test]
    fn test_construction_shape() {
        let model = Model::with_config(2, 3, &small_config(1)).unwrap();
        assert_eq!(model.layer_count(), 2);
        assert_eq!(model.sub_layer_count(), 3);
        assert_eq!(model.dimension(), 4);
        assert_eq!(model.total_layers(), 6);
    }

    #[test]
    fn test_construction_rejects_zero_counts() {
        let config = small_config(1);
        assert!(matches!(
            Model::with_config(0, 3, &config).unwrap_err(),
            StrataError::InvalidShape { .. }
        ));
        assert!(matches!(
            Model::with_config(2, 0, &config).unwrap_err(),
            StrataError::InvalidShape { .. }
        ));
    }

    #[test]
    fn test_construction_rejects_zero_dimension() {
        let config = EngineConfig::default().with_dimension(0);
        assert!(matches!(
            Model::with_config(1, 1, &config).unwrap_err(),
            StrataError::InvalidDimension { dimension: 0 }
        ));
    }

    #[test]
    fn test_construction_enforces_ceiling() {
        let mut config = small_config(1);
        config.max_total_layers = 5;
        let err = Model::with_config(2, 3, &config).unwrap_err();
        assert!(matches!(
            err,
            StrataError::ModelTooLarge {
                requested: 6,
                ceiling: 5
            }
        ));
    }

    #[test]
    fn test_construction_ceiling_survives_overflow() {
        let config = small_config(1);
        let err = Model::with_config(usize::MAX, 2, &config).unwrap_err();
        assert!(matches!(err, StrataError::ModelTooLarge { .. }));
    }

    #[test]
    fn test_process_returns_engine_dimension() {
        let model = Model::with_config(2, 3, &small_config(1)).unwrap();
        let output = model.process(&sample_input()).unwrap();
        assert_eq!(output.len(), 4);
    }

    #[test]
    fn test_process_rejects_wrong_dimension() {
        let model = Model::with_config(2, 3, &small_config(1)).unwrap();
        let err = model.process(&Array1::zeros(5)).unwrap_err();
        assert!(matches!(err, StrataError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_process_is_deterministic_between_adjust_calls() {
        let model = Model::with_config(2, 3, &small_config(1)).unwrap();
        let input = sample_input();
        let first = model.process(&input).unwrap();
        let second = model.process(&input).unwrap();
        assert_abs_diff_eq!(first.as_slice().unwrap(), second.as_slice().unwrap());
    }

    #[test]
    fn test_same_seed_builds_identical_models() {
        let model_a = Model::with_config(2, 3, &small_config(17)).unwrap();
        let model_b = Model::with_config(2, 3, &small_config(17)).unwrap();
        let input = sample_input();
        assert_abs_diff_eq!(
            model_a.process(&input).unwrap().as_slice().unwrap(),
            model_b.process(&input).unwrap().as_slice().unwrap()
        );
    }

    #[test]
    fn test_adjust_perturbs_output() {
        let mut model = Model::with_config(2, 3, &small_config(1)).unwrap();
        let input = sample_input();
        let before = model.process(&input).unwrap();
        model.adjust(1.0);
        let after = model.process(&input).unwrap();
        assert_ne!(before, after);
    }

    #[test]
    fn test_adjust_zero_feedback_consumes_randomness() {
        // Two identically seeded models diverge if only one of them runs a
        // zero-feedback adjust before a real one: the zero call must draw.
        let mut model_a = Model::with_config(1, 2, &small_config(23)).unwrap();
        let mut model_b = Model::with_config(1, 2, &small_config(23)).unwrap();
        let input = sample_input();

        model_a.adjust(0.0);
        model_a.adjust(1.0);
        model_b.adjust(1.0);

        assert_ne!(
            model_a.process(&input).unwrap(),
            model_b.process(&input).unwrap()
        );
    }
}
