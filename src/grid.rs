//! Fixed sample grid backing the height-field surface.

/// Interleaved (x, y) sample coordinates over a square domain.
///
/// Vertices follow plane-geometry order: x runs left to right, y runs top
/// to bottom, row-major, `(segments + 1)^2` vertices in total. Coordinates
/// are generated once at construction and never change; only the derived
/// heights and colors vary per frame.
#[derive(Clone, Debug)]
pub struct SampleGrid {
    xy: Vec<f32>,
    side: f32,
    segments: usize,
}

impl SampleGrid {
    pub fn new(side: f32, segments: usize) -> Self {
        let segments = segments.max(1);
        let verts = segments + 1;
        let half = side * 0.5;
        let step = side / segments as f32;

        let mut xy = Vec::with_capacity(verts * verts * 2);
        for iy in 0..verts {
            let y = half - iy as f32 * step;
            for ix in 0..verts {
                xy.push(ix as f32 * step - half);
                xy.push(y);
            }
        }

        Self { xy, side, segments }
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.xy.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.xy.is_empty()
    }

    /// Interleaved (x, y) pairs, stride 2.
    pub fn xy(&self) -> &[f32] {
        &self.xy
    }

    pub fn side(&self) -> f32 {
        self.side
    }

    pub fn segments(&self) -> usize {
        self.segments
    }
}
