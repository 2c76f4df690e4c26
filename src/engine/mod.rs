//! Core Engine Module
//!
//! The layered vector-transformation engine:
//! - Layer: single affine transformation over one fixed dimension
//! - LayerGroup: ordered span of layers in the model arena
//! - Model: the full stack, plus feedback broadcast and persistence

mod group;
mod layer;
mod model;

pub use group::LayerGroup;
pub use layer::{Layer, DEFAULT_DYNAMIC_FACTOR};
pub use model::Model;
