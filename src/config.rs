use clap::{Parser, ValueEnum};

#[derive(Parser, Debug, Clone)]
#[command(name = "math-visualizer", version, about = "Per-frame evaluation core for math surface and particle field visualizations (headless driver)")]
pub struct Config {
    /// Visualization screen to drive.
    #[arg(long, value_enum, default_value_t = VizMode::Surface)]
    pub mode: VizMode,

    #[arg(long, value_enum, default_value_t = SurfaceKind::Sinc)]
    pub surface: SurfaceKind,

    /// Surface frequency along x (host controls offer 0.1..=2.0, step 0.05).
    #[arg(long, default_value_t = 1.0)]
    pub frequency_x: f32,

    /// Surface frequency along y (host controls offer 0.1..=2.0, step 0.05).
    #[arg(long, default_value_t = 1.0)]
    pub frequency_y: f32,

    /// Surface amplitude (host controls offer 0.5..=3.0, step 0.1).
    #[arg(long, default_value_t = 1.0)]
    pub amplitude: f32,

    #[arg(long, default_value_t = true, action = clap::ArgAction::Set)]
    pub animate: bool,

    /// Side length of the square sample domain.
    #[arg(long, default_value_t = 12.0)]
    pub size: f32,

    /// Grid resolution in segments per side; vertices are (n + 1)^2.
    #[arg(long, default_value_t = 150)]
    pub resolution: usize,

    #[arg(long, value_enum, default_value_t = FieldKind::Wave)]
    pub field: FieldKind,

    /// Particle population (host controls offer 1000..=10000, step 500).
    #[arg(long, default_value_t = 5000)]
    pub particles: usize,

    /// Field wave amplitude (host controls offer 0.5..=5.0).
    #[arg(long, default_value_t = 2.0)]
    pub wave_amplitude: f32,

    /// Quantum jitter scale (host controls offer 0.0..=3.0).
    #[arg(long, default_value_t = 1.0)]
    pub interaction_strength: f32,

    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Number of frames to drive before exiting.
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Print a stats line every N frames (0 disables).
    #[arg(long, default_value_t = 30)]
    pub stats_every: u64,

    /// Seed for particle initialization; drawn from entropy when omitted.
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VizMode {
    Surface,
    Field,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SurfaceKind {
    Sinc,
    Wave,
    Ripple,
    #[value(alias = "sinh")]
    Saddle,
    #[value(name = "exp-wave", alias = "exponential")]
    ExpWave,
}

impl SurfaceKind {
    pub const fn all() -> [Self; 5] {
        [
            Self::Sinc,
            Self::Wave,
            Self::Ripple,
            Self::Saddle,
            Self::ExpWave,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Sinc => "Sinc Function",
            Self::Wave => "2D Wave",
            Self::Ripple => "Ripple",
            Self::Saddle => "Hyperbolic Saddle",
            Self::ExpWave => "Exponential Waves",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldKind {
    Wave,
    Quantum,
    Interference,
}

impl FieldKind {
    pub const fn all() -> [Self; 3] {
        [Self::Wave, Self::Quantum, Self::Interference]
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Wave => "Wave Function",
            Self::Quantum => "Quantum Field",
            Self::Interference => "Wave Interference",
        }
    }
}
