use glam::Vec3;
use math_visualizer::config::FieldKind;
use math_visualizer::field::{
    FieldParams, FieldSimulator, Particle, advance_interference, advance_wave,
};

const SEED: u64 = 0xC0FFEE;

fn field_params(kind: FieldKind) -> FieldParams {
    FieldParams {
        kind,
        particle_count: 200,
        wave_amplitude: 2.0,
        interaction_strength: 1.0,
    }
}

fn particle_at(position: Vec3) -> Particle {
    Particle {
        position,
        velocity: Vec3::ZERO,
        energy: 0.0,
        quantum_state: 0,
    }
}

// ── Initialization ──────────────────────────────────────────────────────────

#[test]
fn initialize_spawns_exact_randomized_population() {
    let sim = FieldSimulator::new(1234, SEED);
    assert_eq!(sim.len(), 1234);

    for (i, p) in sim.particles().iter().enumerate() {
        for c in [p.position.x, p.position.y, p.position.z] {
            assert!((-20.0..=20.0).contains(&c), "particle {i}: position {c} outside cube");
        }
        for c in [p.velocity.x, p.velocity.y, p.velocity.z] {
            assert!((-0.01..=0.01).contains(&c), "particle {i}: velocity {c} out of range");
        }
        assert!((0.0..1.0).contains(&p.energy), "particle {i}: energy {}", p.energy);
        assert!(p.quantum_state < 4, "particle {i}: state {}", p.quantum_state);
    }
}

#[test]
fn same_seed_reproduces_population_and_stream() {
    let mut a = FieldSimulator::new(500, 42);
    let mut b = FieldSimulator::new(500, 42);
    assert_eq!(a.particles(), b.particles(), "initial populations differ");

    // The quantum rule draws from the injected source every frame; equal
    // seeds must keep the simulations in lockstep.
    let params = field_params(FieldKind::Quantum);
    for f in 0..50 {
        let t = f as f32 / 60.0;
        a.step(&params, t);
        b.step(&params, t);
    }
    assert_eq!(a.particles(), b.particles(), "populations diverged");
}

#[test]
fn spawn_buffers_use_blue_purple_spectrum() {
    let sim = FieldSimulator::new(300, SEED);
    assert_eq!(sim.positions().len(), 900);
    assert_eq!(sim.colors().len(), 900);
    assert_eq!(sim.sizes().len(), 300);

    for rgb in sim.colors().chunks_exact(3) {
        assert!((0.3..0.7).contains(&rgb[0]), "spawn red {} out of range", rgb[0]);
        assert!((0.1..0.4).contains(&rgb[1]), "spawn green {} out of range", rgb[1]);
        assert!((0.8..1.0).contains(&rgb[2]), "spawn blue {} out of range", rgb[2]);
    }
    assert!(sim.sizes().iter().all(|&s| s == 0.5), "spawn sizes must be 0.5");
}

// ── Wave rule ───────────────────────────────────────────────────────────────

#[test]
fn wave_rule_relaxes_toward_target() {
    let start = Vec3::new(1.0, -2.0, 3.0);
    let mut p = particle_at(start);
    let params = field_params(FieldKind::Wave);
    let t = 1.25f32;
    advance_wave(&mut p, t, 4, &params);

    let amp = params.wave_amplitude;
    let target = Vec3::new(
        (t * 0.5 + start.z * 0.1).sin() * amp,
        (t * 0.7 + start.x * 0.1).cos() * amp,
        (t * 0.3 + start.y * 0.1).sin() * amp,
    );
    let want = start + (target - start) * 0.01;
    assert!(
        (p.position - want).length() < 1e-6,
        "position got {:?} want {want:?}",
        p.position,
    );
    assert_eq!(p.energy, ((t + 4.0 * 0.1).sin() + 1.0) * 0.5);
}

#[test]
fn wave_rule_energy_is_time_and_index_driven() {
    let mut sim = FieldSimulator::new(64, SEED);
    let params = FieldParams {
        particle_count: 64,
        ..field_params(FieldKind::Wave)
    };
    let t = 2.5f32;
    sim.step(&params, t);

    for (i, p) in sim.particles().iter().enumerate() {
        let want = ((t + i as f32 * 0.1).sin() + 1.0) * 0.5;
        assert_eq!(p.energy, want, "particle {i} energy");
    }
}

// ── Quantum rule ────────────────────────────────────────────────────────────

#[test]
fn quantum_state_transitions_follow_the_gate() {
    let mut sim = FieldSimulator::new(100, SEED);
    let params = FieldParams {
        particle_count: 100,
        interaction_strength: 0.0,
        ..field_params(FieldKind::Quantum)
    };

    let before: Vec<u8> = sim.particles().iter().map(|p| p.quantum_state).collect();
    let t = 0.0f32;
    sim.step(&params, t);

    let mut transitions = 0usize;
    for (i, p) in sim.particles().iter().enumerate() {
        let gated = (t * 2.0 + i as f32 * 0.1).sin() > 0.95;
        let want = if gated { (before[i] + 1) % 4 } else { before[i] };
        assert_eq!(p.quantum_state, want, "particle {i} state");
        if gated {
            transitions += 1;
        }
        assert_eq!(p.energy, (t * 0.5 + p.quantum_state as f32).sin().abs(), "particle {i} energy");
    }
    // sin(i·0.1) clears 0.95 around i=13..=18 and i=76..=81.
    assert!(transitions > 0, "gate never opened across 100 indices");
    assert!(transitions < 100, "gate opened for every index");
}

#[test]
fn quantum_tunneling_rate_converges_to_expected_probability() {
    let count = 2000usize;
    let steps = 500usize;
    let mut sim = FieldSimulator::new(count, SEED);
    // Zero interaction turns off jitter, so teleports are the only source
    // of position change.
    let params = FieldParams {
        particle_count: count,
        interaction_strength: 0.0,
        ..field_params(FieldKind::Quantum)
    };

    let mut teleports = 0usize;
    for f in 0..steps {
        let before: Vec<Vec3> = sim.particles().iter().map(|p| p.position).collect();
        sim.step(&params, f as f32 / 60.0);
        teleports += sim
            .particles()
            .iter()
            .zip(&before)
            .filter(|(p, b)| p.position != **b)
            .count();
    }

    let rate = teleports as f64 / (count * steps) as f64;
    assert!(
        (0.0005..0.002).contains(&rate),
        "teleport rate {rate} not near 0.001 ({teleports} teleports)",
    );
}

// ── Interference rule ───────────────────────────────────────────────────────

#[test]
fn interference_is_constructive_on_the_bisector_plane() {
    // Equidistant from both sources: the waves coincide, so energy reduces
    // to |w| / amplitude.
    let start = Vec3::new(0.0, 3.0, 0.0);
    let mut p = particle_at(start);
    let params = field_params(FieldKind::Interference);
    let t = 0.8f32;
    advance_interference(&mut p, t, 0, &params);

    let amp = params.wave_amplitude;
    let dist = start.distance(Vec3::new(-10.0, 0.0, 0.0));
    let wave = (t * 2.0 - dist * 0.2).sin() * amp;
    assert!(
        (p.energy - wave.abs() / amp).abs() < 1e-6,
        "energy got {} want {}",
        p.energy,
        wave.abs() / amp,
    );
    assert!(
        (p.position.y - (start.y + 2.0 * wave * 0.01)).abs() < 1e-6,
        "y drift got {}",
        p.position.y,
    );
}

#[test]
fn interference_drifts_y_and_decays_x_z() {
    let start = Vec3::new(4.0, 1.0, -2.0);
    let mut p = particle_at(start);
    let params = field_params(FieldKind::Interference);
    let t = 1.1f32;
    advance_interference(&mut p, t, 7, &params);

    let amp = params.wave_amplitude;
    let wave_a = (t * 2.0 - start.distance(Vec3::new(-10.0, 0.0, 0.0)) * 0.2).sin() * amp;
    let wave_b = (t * 2.0 - start.distance(Vec3::new(10.0, 0.0, 0.0)) * 0.2).sin() * amp;
    let combined = wave_a + wave_b;

    assert!((p.position.y - (start.y + combined * 0.01)).abs() < 1e-6, "y drift");
    assert_eq!(p.position.x, start.x + start.x * -0.001, "x decay");
    assert_eq!(p.position.z, start.z + start.z * -0.001, "z decay");
    assert_eq!(p.energy, combined.abs() / (2.0 * amp), "energy");
}

#[test]
fn interference_energy_reaches_constructive_peaks() {
    // Hold a bisector particle through enough phases to catch a
    // constructive peak where both waves align near full amplitude.
    let params = field_params(FieldKind::Interference);
    let mut peak = 0.0f32;
    for i in 0..200 {
        let mut p = particle_at(Vec3::new(0.0, 0.5, 0.0));
        advance_interference(&mut p, i as f32 * 0.05, 0, &params);
        peak = peak.max(p.energy);
    }
    assert!(peak > 0.95, "expected near-unit energy at a constructive peak, got {peak}");
}

// ── Simulator dispatch and buffers ──────────────────────────────────────────

#[test]
fn step_reinitializes_when_count_changes() {
    let mut sim = FieldSimulator::new(1000, SEED);
    let params = FieldParams {
        particle_count: 2000,
        ..field_params(FieldKind::Wave)
    };
    sim.step(&params, 0.1);

    assert_eq!(sim.len(), 2000);
    assert_eq!(sim.positions().len(), 6000);
    assert_eq!(sim.colors().len(), 6000);
    assert_eq!(sim.sizes().len(), 2000);
}

#[test]
fn output_buffers_derive_from_energy() {
    let mut sim = FieldSimulator::new(128, SEED);
    let params = FieldParams {
        particle_count: 128,
        ..field_params(FieldKind::Wave)
    };
    sim.step(&params, 3.0);

    for (i, p) in sim.particles().iter().enumerate() {
        let i3 = i * 3;
        let e = p.energy;
        assert_eq!(sim.positions()[i3], p.position.x, "particle {i} x");
        assert_eq!(sim.positions()[i3 + 1], p.position.y, "particle {i} y");
        assert_eq!(sim.positions()[i3 + 2], p.position.z, "particle {i} z");
        assert_eq!(sim.colors()[i3], 0.2 + e * 0.6, "particle {i} red");
        assert_eq!(sim.colors()[i3 + 1], 0.1 + e * 0.4, "particle {i} green");
        assert_eq!(sim.colors()[i3 + 2], 0.9 - e * 0.3, "particle {i} blue");
        assert_eq!(sim.sizes()[i], 0.5 + e * 2.0, "particle {i} size");
    }
}

#[test]
fn reset_discards_history_and_respawns() {
    let mut sim = FieldSimulator::new(256, SEED);
    let params = FieldParams {
        particle_count: 256,
        ..field_params(FieldKind::Wave)
    };
    for f in 0..20 {
        sim.step(&params, f as f32 / 60.0);
    }

    sim.reset(256);
    assert_eq!(sim.len(), 256);
    // Buffers are back to the spawn spectrum and default size.
    for rgb in sim.colors().chunks_exact(3) {
        assert!((0.8..1.0).contains(&rgb[2]), "post-reset blue {} out of range", rgb[2]);
    }
    assert!(sim.sizes().iter().all(|&s| s == 0.5), "post-reset sizes must be 0.5");
}
