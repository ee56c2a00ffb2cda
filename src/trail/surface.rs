use crate::foundation::core::SurfaceSize;
use crate::foundation::error::SmudgeResult;
use crate::trail::stamp::GradientStamp;

/// Intensities below this flush to zero during fades.
///
/// Keeps long-decayed texels from lingering as denormals instead of reaching black.
const MIN_INTENSITY: f32 = 1.0 / 4096.0;

/// The off-screen single-channel raster surface the trail paints into.
///
/// Texels are `f32` intensity in `[0, 1]`, row-major. The buffer is allocated once at
/// construction; fading and stamping rewrite it in place.
#[derive(Clone, Debug)]
pub struct IntensitySurface {
    size: SurfaceSize,
    texels: Vec<f32>,
}

impl IntensitySurface {
    /// Allocate a zeroed surface.
    pub fn new(size: SurfaceSize) -> SmudgeResult<Self> {
        Ok(Self {
            size,
            texels: vec![0.0; size.texel_count()],
        })
    }

    /// Surface dimensions.
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    /// Row-major texel intensities, for GPU upload.
    pub fn texels(&self) -> &[f32] {
        &self.texels
    }

    /// Intensity at `(x, y)`; zero outside the surface.
    pub fn texel(&self, x: u32, y: u32) -> f32 {
        if x >= self.size.width || y >= self.size.height {
            return 0.0;
        }
        self.texels[(y * self.size.width + x) as usize]
    }

    /// Nearest-texel sample at unit-square UV coordinates.
    pub fn sample(&self, u: f32, v: f32) -> f32 {
        let x = (u.clamp(0.0, 1.0) * (self.size.width - 1) as f32).round() as u32;
        let y = (v.clamp(0.0, 1.0) * (self.size.height - 1) as f32).round() as u32;
        self.texel(x, y)
    }

    /// Maximum intensity over the whole surface.
    pub fn peak(&self) -> f32 {
        self.texels.iter().copied().fold(0.0, f32::max)
    }

    /// Reset every texel to black.
    pub fn clear(&mut self) {
        self.texels.fill(0.0);
    }

    /// Blend the whole surface toward black, keeping `keep` of each texel.
    pub fn fade(&mut self, keep: f32) {
        let keep = keep.clamp(0.0, 1.0);
        if keep >= 1.0 {
            return;
        }
        for t in &mut self.texels {
            *t *= keep;
            if *t < MIN_INTENSITY {
                *t = 0.0;
            }
        }
    }

    /// Additively composite a decal centered at `(cx, cy)` with pixel `diameter` and `opacity`.
    ///
    /// `lighter` semantics: overlapping deposits brighten, saturating at full intensity, never
    /// replacing what is already there.
    pub fn stamp(&mut self, stamp: &GradientStamp, cx: f32, cy: f32, diameter: f32, opacity: f32) {
        if diameter <= 0.0 || opacity <= 0.0 {
            return;
        }
        let half = diameter * 0.5;
        let x0 = ((cx - half).floor().max(0.0)) as u32;
        let y0 = ((cy - half).floor().max(0.0)) as u32;
        let x1 = ((cx + half).ceil() as i64).clamp(0, self.size.width as i64) as u32;
        let y1 = ((cy + half).ceil() as i64).clamp(0, self.size.height as i64) as u32;
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let opacity = opacity.min(1.0);
        let res = stamp.resolution() as f32;
        let scale = res / diameter;
        for y in y0..y1 {
            let sy = ((y as f32 - (cy - half)) * scale) as i64;
            if sy < 0 || sy >= res as i64 {
                continue;
            }
            let row = (y * self.size.width) as usize;
            for x in x0..x1 {
                let sx = ((x as f32 - (cx - half)) * scale) as i64;
                if sx < 0 || sx >= res as i64 {
                    continue;
                }
                let s = stamp.texel(sx as u32, sy as u32);
                if s <= 0.0 {
                    continue;
                }
                let t = &mut self.texels[row + x as usize];
                *t = (*t + s * opacity).min(1.0);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trail/surface.rs"]
mod tests;
