//! Height-field evaluation over a fixed sample grid.
//!
//! One invocation recomputes the whole grid: per-vertex heights for the
//! selected function, running min/max, then min/max-normalized colors from
//! the paired ramp. There is no incremental update path.

use crate::config::SurfaceKind;
use crate::grid::SampleGrid;
use crate::palette::{Palette, color_at};

/// Live surface parameters, snapshotted by the host once per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceParams {
    pub kind: SurfaceKind,
    pub frequency_x: f32,
    pub frequency_y: f32,
    pub amplitude: f32,
    pub animate: bool,
}

impl Default for SurfaceParams {
    fn default() -> Self {
        Self {
            kind: SurfaceKind::Sinc,
            frequency_x: 1.0,
            frequency_y: 1.0,
            amplitude: 1.0,
            animate: true,
        }
    }
}

/// Owns the sample grid and the per-frame height/color output buffers.
pub struct SurfaceEvaluator {
    grid: SampleGrid,
    heights: Vec<f32>,
    colors: Vec<f32>,
    last: Option<SurfaceParams>,
}

impl SurfaceEvaluator {
    pub fn new(grid: SampleGrid) -> Self {
        let n = grid.len();
        Self {
            grid,
            heights: vec![0.0; n],
            colors: vec![0.0; n * 3],
            last: None,
        }
    }

    pub fn grid(&self) -> &SampleGrid {
        &self.grid
    }

    /// One height per grid vertex, overwritten by each evaluation.
    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    /// Flat RGB colors, three components per grid vertex.
    pub fn colors(&self) -> &[f32] {
        &self.colors
    }

    /// Recompute heights and colors for this frame. Returns whether the
    /// buffers were actually rewritten.
    ///
    /// A static surface (`animate` off) only changes when its parameters
    /// do, so a repeat invocation with unchanged parameters skips the
    /// full-grid pass. Animated invocations always recompute.
    pub fn evaluate(&mut self, params: &SurfaceParams, elapsed_secs: f32) -> bool {
        if !params.animate && self.last.as_ref() == Some(params) {
            return false;
        }

        let mut z_min = f32::INFINITY;
        let mut z_max = f32::NEG_INFINITY;
        for (h, p) in self
            .heights
            .iter_mut()
            .zip(self.grid.xy().chunks_exact(2))
        {
            let z = sample_height(params, p[0], p[1], elapsed_secs);
            *h = z;
            z_min = z_min.min(z);
            z_max = z_max.max(z);
        }

        let palette = palette_for(params.kind);
        for (&h, rgb) in self.heights.iter().zip(self.colors.chunks_exact_mut(3)) {
            // A flat field has no range to normalize; map it to the ramp
            // midpoint instead of dividing by zero.
            let tn = if z_max > z_min {
                (h - z_min) / (z_max - z_min)
            } else {
                0.5
            };
            rgb.copy_from_slice(&color_at(tn, palette));
        }

        self.last = Some(params.clone());
        true
    }
}

/// The exponential wave reads best on the hot ramp; every other kind uses
/// the diverging cool-to-warm ramp.
pub fn palette_for(kind: SurfaceKind) -> Palette {
    match kind {
        SurfaceKind::ExpWave => Palette::Hot,
        _ => Palette::CoolWarm,
    }
}

/// Height of one sample under the selected function. All trig arguments
/// are in radians; time is zeroed while animation is off.
pub fn sample_height(params: &SurfaceParams, x: f32, y: f32, elapsed_secs: f32) -> f32 {
    let t = if params.animate { elapsed_secs } else { 0.0 };
    let fx = params.frequency_x;
    let fy = params.frequency_y;
    let amp = params.amplitude;

    match params.kind {
        SurfaceKind::Sinc => {
            let r = (x * x + y * y).sqrt();
            // Exact center sample; sin(r)/r -> 1 as r -> 0.
            if r == 0.0 {
                amp
            } else {
                amp * (r * fx - t).sin() / r
            }
        }
        SurfaceKind::Wave => amp * (x * fx - t).sin() * (y * fy).cos(),
        SurfaceKind::Ripple => {
            let r = (x * x + y * y).sqrt();
            amp * (r * fx - t).sin() * (-r * 0.1).exp()
        }
        SurfaceKind::Saddle => {
            // Pulses with frequency_x only; frequency_y is not wired into
            // this function.
            let pulse = (t * fx).cos();
            amp * (x * x - y * y) * pulse
        }
        SurfaceKind::ExpWave => {
            // The amplitude parameter is not applied here; the radial
            // falloff alone sets the scale.
            let r2 = x * x + y * y;
            let at = 1.5 * t;
            (-r2 * 0.2).exp() * (fx * x + at).sin() * (fy * y + at).cos()
        }
    }
}
