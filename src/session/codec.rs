//! Text/vector codec.
//!
//! The engine consumes vectors of exactly the engine dimension, so user text
//! is mapped onto that dimension here: one Unicode scalar value per element,
//! zero-padded or truncated. Decoding is best-effort — engine outputs are
//! unbounded reals and most elements will not land on a printable character.

use ndarray::Array1;

/// Encode `text` into exactly `dimension` elements.
///
/// Characters beyond `dimension` are dropped; missing positions are zero.
pub fn encode(text: &str, dimension: usize) -> Array1<f32> {
    let mut values = vec![0.0f32; dimension];
    for (slot, ch) in values.iter_mut().zip(text.chars()) {
        *slot = ch as u32 as f32;
    }
    Array1::from_vec(values)
}

/// Decode up to `max_chars` leading elements back into text.
///
/// Elements that do not round to a printable Unicode scalar value are
/// skipped. Float-to-int casts saturate, so arbitrarily large engine outputs
/// simply fail the scalar-value check instead of wrapping.
pub fn decode(vector: &Array1<f32>, max_chars: usize) -> String {
    vector
        .iter()
        .take(max_chars)
        .filter_map(|&value| {
            if !value.is_finite() || value < 0.0 {
                return None;
            }
            char::from_u32(value.round() as u32).filter(|c| !c.is_control())
        })
        .collect()
}
