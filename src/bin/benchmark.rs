use std::time::{Duration, Instant};

use anyhow::Result;
use math_visualizer::config::{FieldKind, SurfaceKind};
use math_visualizer::field::{FieldParams, FieldSimulator};
use math_visualizer::grid::SampleGrid;
use math_visualizer::surface::{SurfaceEvaluator, SurfaceParams};

struct Args {
    frames: usize,
    size: f32,
    resolution: usize,
    counts: Vec<usize>,
    quick: bool,
    ci_smoke: bool,
    max_ms: f64,
}

fn parse_args() -> Args {
    let mut args = Args {
        frames: 240,
        size: 12.0,
        resolution: 150,
        counts: vec![1000, 5000, 10000],
        quick: false,
        ci_smoke: false,
        max_ms: 16.0,
    };

    let argv = std::env::args().skip(1).collect::<Vec<_>>();
    let mut i = 0usize;
    while i < argv.len() {
        let k = argv[i].as_str();
        let v = argv.get(i + 1).map(|s| s.as_str());
        match (k, v) {
            ("--frames", Some(x)) => {
                if let Ok(n) = x.parse::<usize>() {
                    args.frames = n.max(1);
                }
                i += 2;
            }
            ("--size", Some(x)) => {
                if let Ok(s) = x.parse::<f32>() {
                    args.size = s;
                }
                i += 2;
            }
            ("--resolution", Some(x)) => {
                if let Ok(n) = x.parse::<usize>() {
                    args.resolution = n.max(1);
                }
                i += 2;
            }
            ("--ci-smoke", _) => {
                args.ci_smoke = true;
                i += 1;
            }
            ("--quick", _) => {
                args.quick = true;
                i += 1;
            }
            ("--max-ms", Some(x)) => {
                if let Ok(v) = x.parse::<f64>() {
                    args.max_ms = v.max(0.1);
                }
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    if args.quick {
        args.frames = args.frames.min(60);
        args.counts = vec![1000, 5000];
    }

    args
}

fn bench_surfaces(args: &Args, slow: &mut Vec<(String, f64)>) {
    println!(
        "surface benchmark: kinds={} frames/kind={} grid={}x{}",
        SurfaceKind::all().len(),
        args.frames,
        args.resolution + 1,
        args.resolution + 1,
    );

    for (idx, kind) in SurfaceKind::all().into_iter().enumerate() {
        let mut evaluator = SurfaceEvaluator::new(SampleGrid::new(args.size, args.resolution));
        let params = SurfaceParams {
            kind,
            frequency_x: 1.0,
            frequency_y: 1.0,
            amplitude: 1.0,
            animate: true,
        };

        let start = Instant::now();
        let mut spread = 0usize;
        for f in 0..args.frames {
            let t = f as f32 / 60.0;
            evaluator.evaluate(&params, t);
            let heights = evaluator.heights();
            let first = heights.first().copied().unwrap_or(0.0);
            if heights.iter().any(|&h| h != first) {
                spread += 1;
            }
        }

        let ms = start.elapsed().as_secs_f64() * 1000.0 / args.frames as f64;
        println!(
            "{:>2}. {:<20} {:>8.3} ms/frame  spread={:>3}/{}",
            idx,
            kind.label(),
            ms,
            spread,
            args.frames,
        );
        if args.ci_smoke && ms > args.max_ms {
            slow.push((kind.label().to_string(), ms));
        }
    }
}

fn bench_fields(args: &Args, slow: &mut Vec<(String, f64)>) {
    println!(
        "field benchmark: kinds={} frames/kind={} counts={:?}",
        FieldKind::all().len(),
        args.frames,
        args.counts,
    );

    for kind in FieldKind::all() {
        for &count in &args.counts {
            let mut sim = FieldSimulator::new(count, 0x9E37_79B9);
            let params = FieldParams {
                kind,
                particle_count: count,
                wave_amplitude: 2.0,
                interaction_strength: 1.0,
            };

            let start = Instant::now();
            for f in 0..args.frames {
                sim.step(&params, f as f32 / 60.0);
            }

            let elapsed = start.elapsed();
            let ms = elapsed.as_secs_f64() * 1000.0 / args.frames as f64;
            let mean: f32 =
                sim.particles().iter().map(|p| p.energy).sum::<f32>() / count as f32;
            println!(
                "    {:<18} n={:<6} {:>8.3} ms/frame  mean_energy={:.3}",
                kind.label(),
                count,
                ms,
                mean,
            );
            if args.ci_smoke && ms > args.max_ms {
                slow.push((format!("{} n={}", kind.label(), count), ms));
            }
        }
    }
}

fn main() -> Result<()> {
    let args = parse_args();
    let mut slow = Vec::<(String, f64)>::new();

    let start = Instant::now();
    bench_surfaces(&args, &mut slow);
    bench_fields(&args, &mut slow);
    let total: Duration = start.elapsed();
    println!("total: {:.2} s", total.as_secs_f64());

    if args.ci_smoke {
        if !slow.is_empty() {
            eprintln!("CI smoke: FAIL");
            for (name, ms) in slow {
                eprintln!("  slow case: {} ({:.3} ms/frame > {:.3})", name, ms, args.max_ms);
            }
            anyhow::bail!("ci smoke failed");
        }
        println!("CI smoke: PASS (max_ms={:.3})", args.max_ms);
    }

    Ok(())
}
