//! Ordered composition of layers within the model arena.
//!
//! Groups do not own layers. The model keeps every layer in one flat arena
//! and each group is an index span into it, so forwarding walks contiguous
//! memory and no nested ownership chains exist.

use ndarray::Array1;
use rand::Rng;

use super::Layer;
use crate::error::Result;

/// An ordered, non-empty span of layers in the model arena.
///
/// All members share the model dimension, so shapes are preserved
/// end-to-end through [`LayerGroup::forward`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerGroup {
    start: usize,
    len: usize,
}

impl LayerGroup {
    pub(crate) fn new(start: usize, len: usize) -> Self {
        debug_assert!(len > 0, "layer group must be non-empty");
        Self { start, len }
    }

    /// Number of member layers.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Feed `input` through every member layer in span order, each layer's
    /// output becoming the next layer's input.
    pub(crate) fn forward(&self, arena: &[Layer], input: Array1<f32>) -> Result<Array1<f32>> {
        let mut current = input;
        for layer in &arena[self.start..self.start + self.len] {
            current = layer.forward(&current)?;
        }
        Ok(current)
    }

    /// Mutate every member layer with the same feedback scale.
    pub(crate) fn mutate_all<R: Rng>(&self, arena: &mut [Layer], feedback: f32, rng: &mut R) {
        for layer in &mut arena[self.start..self.start + self.len] {
            layer.mutate(feedback, rng);
        }
    }
}
