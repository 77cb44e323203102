//! Headless frame driver.
//!
//! Stands in for the host's frame callback: paces frames at the configured
//! rate, supplies monotonic elapsed time, invokes the evaluator or
//! simulator, and reports periodic stats lines on stdout. Everything a real
//! host would do beyond that (scene, camera, widgets) stays on the host
//! side of the contract.

use crate::config::{Config, VizMode};
use crate::field::{FieldParams, FieldSimulator};
use crate::grid::SampleGrid;
use crate::surface::{SurfaceEvaluator, SurfaceParams};
use anyhow::Result;
use std::time::{Duration, Instant};

pub fn run(cfg: Config) -> Result<()> {
    anyhow::ensure!(cfg.fps >= 1, "--fps must be at least 1");
    anyhow::ensure!(cfg.particles >= 1, "--particles must be at least 1");

    match cfg.mode {
        VizMode::Surface => run_surface(&cfg),
        VizMode::Field => run_field(&cfg),
    }
}

fn run_surface(cfg: &Config) -> Result<()> {
    let grid = SampleGrid::new(cfg.size, cfg.resolution);
    let params = SurfaceParams {
        kind: cfg.surface,
        frequency_x: cfg.frequency_x,
        frequency_y: cfg.frequency_y,
        amplitude: cfg.amplitude,
        animate: cfg.animate,
    };
    let mut evaluator = SurfaceEvaluator::new(grid);

    println!(
        "surface: {}  grid={}x{} ({} vertices)  fx={} fy={} amp={} animate={}",
        cfg.surface.label(),
        cfg.resolution + 1,
        cfg.resolution + 1,
        evaluator.grid().len(),
        cfg.frequency_x,
        cfg.frequency_y,
        cfg.amplitude,
        cfg.animate,
    );

    let budget = Duration::from_secs_f64(1.0 / cfg.fps as f64);
    let start = Instant::now();
    let mut recomputed = 0u64;

    for frame in 0..cfg.frames {
        let frame_start = Instant::now();
        // The animated surface runs on doubled wall-clock seconds; the
        // evaluator itself is a pure function of the supplied value.
        let t = start.elapsed().as_secs_f32() * 2.0;
        if evaluator.evaluate(&params, t) {
            recomputed += 1;
        }

        if cfg.stats_every > 0 && frame % cfg.stats_every == 0 {
            let (lo, hi) = min_max(evaluator.heights());
            println!(
                "frame {:>6}  z=[{:+.3}, {:+.3}]  eval {:>7.3} ms",
                frame,
                lo,
                hi,
                frame_start.elapsed().as_secs_f64() * 1000.0,
            );
        }

        pace(frame_start, budget);
    }

    println!("done: {}/{} frames recomputed", recomputed, cfg.frames);
    Ok(())
}

fn run_field(cfg: &Config) -> Result<()> {
    let seed = cfg.seed.unwrap_or_else(|| fastrand::u64(..));
    let params = FieldParams {
        kind: cfg.field,
        particle_count: cfg.particles,
        wave_amplitude: cfg.wave_amplitude,
        interaction_strength: cfg.interaction_strength,
    };
    let mut sim = FieldSimulator::new(cfg.particles, seed);

    println!(
        "field: {}  particles={}  wave_amplitude={} interaction={} seed={}",
        cfg.field.label(),
        cfg.particles,
        cfg.wave_amplitude,
        cfg.interaction_strength,
        seed,
    );

    let budget = Duration::from_secs_f64(1.0 / cfg.fps as f64);
    let start = Instant::now();

    for frame in 0..cfg.frames {
        let frame_start = Instant::now();
        sim.step(&params, start.elapsed().as_secs_f32());

        if cfg.stats_every > 0 && frame % cfg.stats_every == 0 {
            println!(
                "frame {:>6}  mean_energy={:.3}  step {:>7.3} ms",
                frame,
                mean_energy(&sim),
                frame_start.elapsed().as_secs_f64() * 1000.0,
            );
        }

        pace(frame_start, budget);
    }

    println!("done: {} frames stepped", cfg.frames);
    Ok(())
}

fn pace(frame_start: Instant, budget: Duration) {
    let spent = frame_start.elapsed();
    if spent < budget {
        std::thread::sleep(budget - spent);
    }
}

fn min_max(values: &[f32]) -> (f32, f32) {
    let mut lo = f32::INFINITY;
    let mut hi = f32::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    (lo, hi)
}

fn mean_energy(sim: &FieldSimulator) -> f32 {
    if sim.is_empty() {
        return 0.0;
    }
    let sum: f32 = sim.particles().iter().map(|p| p.energy).sum();
    sum / sim.len() as f32
}
