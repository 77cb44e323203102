//! Particle-field simulation: population state and per-frame advancement.
//!
//! The simulator owns the particle population and a seeded random source,
//! advances every particle once per frame under the rule selected by the
//! field kind, and derives the flat position/color/size buffers handed to
//! the rendering layer. Buffers are fully overwritten each step; there is
//! no partial-update contract.

mod rules;

pub use rules::{advance_interference, advance_quantum, advance_wave};

use crate::config::FieldKind;
use glam::Vec3;

/// Half-side of the spawn cube in world units. Quantum tunneling re-draws
/// positions from the same cube.
pub(crate) const SPAWN_HALF: f32 = 20.0;

/// One simulated particle.
///
/// Velocity is carried state; none of the current rules integrate it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec3,
    pub velocity: Vec3,
    /// Intended range [0, 1]; not strictly enforced by the rules.
    pub energy: f32,
    /// Discrete level in 0..4.
    pub quantum_state: u8,
}

/// Live field parameters, snapshotted by the host once per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub kind: FieldKind,
    pub particle_count: usize,
    pub wave_amplitude: f32,
    pub interaction_strength: f32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            kind: FieldKind::Wave,
            particle_count: 5000,
            wave_amplitude: 2.0,
            interaction_strength: 1.0,
        }
    }
}

/// Drives the particle population and owns the renderer-facing buffers.
pub struct FieldSimulator {
    particles: Vec<Particle>,
    positions: Vec<f32>,
    colors: Vec<f32>,
    sizes: Vec<f32>,
    rng: fastrand::Rng,
}

impl FieldSimulator {
    /// Build a simulator with a seeded random source. The same seed yields
    /// the same initial population and the same tunneling stream.
    pub fn new(count: usize, seed: u64) -> Self {
        let mut sim = Self {
            particles: Vec::new(),
            positions: Vec::new(),
            colors: Vec::new(),
            sizes: Vec::new(),
            rng: fastrand::Rng::with_seed(seed),
        };
        sim.reset(count);
        sim
    }

    /// Discard the whole population and respawn `count` particles with
    /// randomized state. Prior simulation history is lost; the host's
    /// Reset control is this same operation with an unchanged count.
    pub fn reset(&mut self, count: usize) {
        self.particles.clear();
        self.particles.reserve(count);
        self.positions.clear();
        self.positions.resize(count * 3, 0.0);
        self.colors.clear();
        self.colors.resize(count * 3, 0.0);
        self.sizes.clear();
        self.sizes.resize(count, 0.5);

        for i in 0..count {
            let position = Vec3::new(
                (self.rng.f32() - 0.5) * 2.0 * SPAWN_HALF,
                (self.rng.f32() - 0.5) * 2.0 * SPAWN_HALF,
                (self.rng.f32() - 0.5) * 2.0 * SPAWN_HALF,
            );

            let i3 = i * 3;
            self.positions[i3] = position.x;
            self.positions[i3 + 1] = position.y;
            self.positions[i3 + 2] = position.z;

            // Spawn coloring: the blue-to-purple spectrum shown before the
            // first step overwrites it with energy-derived colors.
            self.colors[i3] = 0.3 + self.rng.f32() * 0.4;
            self.colors[i3 + 1] = 0.1 + self.rng.f32() * 0.3;
            self.colors[i3 + 2] = 0.8 + self.rng.f32() * 0.2;

            self.particles.push(Particle {
                position,
                velocity: Vec3::new(
                    (self.rng.f32() - 0.5) * 0.02,
                    (self.rng.f32() - 0.5) * 0.02,
                    (self.rng.f32() - 0.5) * 0.02,
                ),
                energy: self.rng.f32(),
                quantum_state: self.rng.u8(0..4),
            });
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Flat xyz positions, three components per particle.
    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    /// Flat RGB colors, three components per particle.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Point size per particle, for hosts that support the attribute.
    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// Advance every particle one frame and refresh the output buffers.
    ///
    /// A `particle_count` differing from the live population reinitializes
    /// it wholesale before stepping.
    pub fn step(&mut self, params: &FieldParams, elapsed_secs: f32) {
        if params.particle_count != self.particles.len() {
            self.reset(params.particle_count);
        }

        let t = elapsed_secs;
        for i in 0..self.particles.len() {
            let p = &mut self.particles[i];
            match params.kind {
                FieldKind::Wave => advance_wave(p, t, i, params),
                FieldKind::Quantum => advance_quantum(p, t, i, params, &mut self.rng),
                FieldKind::Interference => advance_interference(p, t, i, params),
            }

            let i3 = i * 3;
            self.positions[i3] = p.position.x;
            self.positions[i3 + 1] = p.position.y;
            self.positions[i3 + 2] = p.position.z;

            let e = p.energy;
            self.colors[i3] = 0.2 + e * 0.6;
            self.colors[i3 + 1] = 0.1 + e * 0.4;
            self.colors[i3 + 2] = 0.9 - e * 0.3;
            self.sizes[i] = 0.5 + e * 2.0;
        }
    }
}
