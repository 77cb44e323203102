//! Gradient color ramps for scalar-to-color mapping.
//!
//! A ramp is an ordered set of RGB stops with linear interpolation between
//! them, indexed by a normalized scalar. Inputs outside [0, 1] extrapolate
//! past the end stops; callers that need clamped output clamp the scalar
//! before lookup.

/// Named gradient applied to normalized surface heights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Palette {
    /// Diverging blue -> white -> red ramp.
    CoolWarm,
    /// Black -> dark red -> orange -> yellow -> white ramp.
    Hot,
}

impl Palette {
    pub fn label(self) -> &'static str {
        match self {
            Self::CoolWarm => "cool-to-warm",
            Self::Hot => "hot",
        }
    }
}

const BLUE: [f32; 3] = [0x3b as f32 / 255.0, 0x4c as f32 / 255.0, 0xc0 as f32 / 255.0];
const RED: [f32; 3] = [0xd4 as f32 / 255.0, 0x38 as f32 / 255.0, 0x2c as f32 / 255.0];
const DARK_RED: [f32; 3] = [0x99 as f32 / 255.0, 0.0, 0.0];
const ORANGE: [f32; 3] = [1.0, 0x66 as f32 / 255.0, 0.0];
const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];
const WHITE: [f32; 3] = [1.0, 1.0, 1.0];
const BLACK: [f32; 3] = [0.0, 0.0, 0.0];

/// Map a normalized scalar to an RGB color on the given ramp.
///
/// Piecewise linear between stops. `t` is expected in [0, 1] but is not
/// clamped; values outside extrapolate along the first or last segment.
pub fn color_at(t: f32, palette: Palette) -> [f32; 3] {
    match palette {
        Palette::CoolWarm => {
            if t < 0.5 {
                lerp_rgb(BLUE, WHITE, t * 2.0)
            } else {
                lerp_rgb(WHITE, RED, (t - 0.5) * 2.0)
            }
        }
        Palette::Hot => {
            if t < 0.25 {
                lerp_rgb(BLACK, DARK_RED, t * 4.0)
            } else if t < 0.5 {
                lerp_rgb(DARK_RED, ORANGE, (t - 0.25) * 4.0)
            } else if t < 0.75 {
                lerp_rgb(ORANGE, YELLOW, (t - 0.5) * 4.0)
            } else {
                lerp_rgb(YELLOW, WHITE, (t - 0.75) * 4.0)
            }
        }
    }
}

fn lerp_rgb(a: [f32; 3], b: [f32; 3], s: f32) -> [f32; 3] {
    [
        a[0] + (b[0] - a[0]) * s,
        a[1] + (b[1] - a[1]) * s,
        a[2] + (b[2] - a[2]) * s,
    ]
}
