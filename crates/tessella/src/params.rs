//! Deterministic shape-parameter presets and morphing.
//!
//! Tiling types can expose continuous shape "knobs". The values are never
//! picked from wall-clock time or call order: each preset is a pure function
//! of the tiling type's index and a fixed salt, so every wall in a scene and
//! every run of the program agrees on what a given type looks like.
//!
//! Fractional type values morph: the fraction blends preset A toward
//! preset B component-wise, snapping to the endpoints near 0 and 1 so the
//! boundary never renders almost-but-not-quite-identical geometry.

use crate::rng::Rng;

/// Fractions closer than this to 0 or 1 snap to the endpoint preset.
pub const MORPH_SNAP: f64 = 0.001;

/// Parameter value range presets are drawn from.
const PARAM_MIN: f64 = 0.15;
const PARAM_MAX: f64 = 0.85;

const PRESET_SALT_A: u64 = 0x7E55_E11A_0000_00A5;
const PRESET_SALT_B: u64 = 0x7E55_E11A_0000_00B7;

/// Preset A for a tiling type: the shape at fraction 0.
pub fn preset_a(type_index: usize, param_count: usize) -> Vec<f64> {
    preset(type_index, param_count, PRESET_SALT_A)
}

/// Preset B for a tiling type: the shape at fraction 1.
pub fn preset_b(type_index: usize, param_count: usize) -> Vec<f64> {
    preset(type_index, param_count, PRESET_SALT_B)
}

fn preset(type_index: usize, param_count: usize, salt: u64) -> Vec<f64> {
    let seed = salt ^ (type_index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    let mut rng = Rng::new(seed);
    (0..param_count)
        .map(|_| rng.next_range(PARAM_MIN, PARAM_MAX))
        .collect()
}

/// Parameters for a type at a morph fraction in [0, 1].
///
/// Fractions below [`MORPH_SNAP`] return preset A exactly; above
/// `1 - MORPH_SNAP`, preset B exactly. In between, a component-wise blend.
pub fn morphed_params(type_index: usize, fraction: f64, param_count: usize) -> Vec<f64> {
    if param_count == 0 {
        return Vec::new();
    }

    let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
    if fraction < MORPH_SNAP {
        return preset_a(type_index, param_count);
    }
    if fraction > 1.0 - MORPH_SNAP {
        return preset_b(type_index, param_count);
    }

    preset_a(type_index, param_count)
        .iter()
        .zip(preset_b(type_index, param_count).iter())
        .map(|(a, b)| a + (b - a) * fraction)
        .collect()
}
