//! Per-particle update rules, one per field kind.
//!
//! Each rule mutates one particle in place, once per frame. All inputs are
//! framework-generated floats; there are no failure paths.

use super::{FieldParams, Particle, SPAWN_HALF};
use glam::Vec3;

/// Fixed coherent sources for the interference pattern.
const SOURCE_A: Vec3 = Vec3::new(-10.0, 0.0, 0.0);
const SOURCE_B: Vec3 = Vec3::new(10.0, 0.0, 0.0);

/// Sinusoidal drift: the particle relaxes toward a moving target computed
/// from its own prior-frame position components, rather than being placed
/// on it directly.
pub fn advance_wave(p: &mut Particle, t: f32, index: usize, params: &FieldParams) {
    let amp = params.wave_amplitude;
    let target = Vec3::new(
        (t * 0.5 + p.position.z * 0.1).sin() * amp,
        (t * 0.7 + p.position.x * 0.1).cos() * amp,
        (t * 0.3 + p.position.y * 0.1).sin() * amp,
    );

    p.position += (target - p.position) * 0.01;
    p.energy = ((t + index as f32 * 0.1).sin() + 1.0) * 0.5;
}

/// Tunneling, discrete state transitions, and position uncertainty.
pub fn advance_quantum(
    p: &mut Particle,
    t: f32,
    index: usize,
    params: &FieldParams,
    rng: &mut fastrand::Rng,
) {
    // Rare teleport anywhere in the spawn cube.
    if rng.f32() < 0.001 {
        p.position = Vec3::new(
            (rng.f32() - 0.5) * 2.0 * SPAWN_HALF,
            (rng.f32() - 0.5) * 2.0 * SPAWN_HALF,
            (rng.f32() - 0.5) * 2.0 * SPAWN_HALF,
        );
    }

    if (t * 2.0 + index as f32 * 0.1).sin() > 0.95 {
        p.quantum_state = (p.quantum_state + 1) % 4;
    }

    p.energy = (t * 0.5 + p.quantum_state as f32).sin().abs();

    // Uncertainty jitter, applied unconditionally every frame.
    let s = params.interaction_strength;
    p.position.x += (rng.f32() - 0.5) * 0.1 * s;
    p.position.y += (rng.f32() - 0.5) * 0.1 * s;
    p.position.z += (rng.f32() - 0.5) * 0.1 * s;
}

/// Two-source interference: the summed wave drives energy and a cumulative
/// vertical drift while x and z decay back toward the source axis.
pub fn advance_interference(p: &mut Particle, t: f32, _index: usize, params: &FieldParams) {
    let amp = params.wave_amplitude;
    let dist_a = p.position.distance(SOURCE_A);
    let dist_b = p.position.distance(SOURCE_B);

    let wave_a = (t * 2.0 - dist_a * 0.2).sin() * amp;
    let wave_b = (t * 2.0 - dist_b * 0.2).sin() * amp;
    let combined = wave_a + wave_b;

    // Normalized by the two-wave envelope; the quotient is not clamped.
    p.energy = combined.abs() / (2.0 * amp);

    p.position.y += combined * 0.01;
    p.position.x += p.position.x * -0.001;
    p.position.z += p.position.z * -0.001;
}
