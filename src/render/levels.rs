use smallvec::SmallVec;

use crate::foundation::core::SurfaceSize;
use crate::foundation::error::{SmudgeError, SmudgeResult};
use crate::foundation::math::lerp;
use crate::quality::settings::QualitySettings;

/// Which two baked image levels the shader blends, and by how much.
///
/// Trail intensity `t` in `[0, 1]` maps linearly across the level stack: `t = 0` shows the
/// first level, `t = 1` the last, anything between crossfades the two neighbors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelBlend {
    /// Index of the lower level.
    pub lower: usize,
    /// Index of the upper level (equal to `lower` at the stack ends).
    pub upper: usize,
    /// Crossfade fraction from lower to upper, in `[0, 1]`.
    pub mix: f32,
}

impl LevelBlend {
    /// Select the blend for a sampled trail intensity over a stack of `level_count` levels.
    pub fn from_intensity(intensity: f32, level_count: usize) -> SmudgeResult<Self> {
        if level_count == 0 {
            return Err(SmudgeError::validation("level stack must be non-empty"));
        }
        if level_count == 1 {
            return Ok(Self {
                lower: 0,
                upper: 0,
                mix: 0.0,
            });
        }
        let t = intensity.clamp(0.0, 1.0) * (level_count - 1) as f32;
        let lower = (t.floor() as usize).min(level_count - 2);
        Ok(Self {
            lower,
            upper: lower + 1,
            mix: t - lower as f32,
        })
    }

    /// CPU reference for the shader blend: crossfade `levels` values by sampled intensity.
    pub fn blend(levels: &[f32], intensity: f32) -> SmudgeResult<f32> {
        let sel = Self::from_intensity(intensity, levels.len())?;
        Ok(lerp(levels[sel.lower], levels[sel.upper], sel.mix))
    }
}

/// Uniform payload the reveal shader binds every dirty frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealUniforms {
    /// Size of one trail-surface texel in UV units.
    pub texel_size: [f32; 2],
    /// Number of baked image levels in the stack.
    pub level_count: u32,
    /// Blur tap offsets in texel units; length is the preset's blur sample count.
    pub blur_taps: SmallVec<[[f32; 2]; 8]>,
}

impl RevealUniforms {
    /// Build uniforms for a quality preset, surface size, and level stack.
    pub fn new(
        settings: &QualitySettings,
        size: SurfaceSize,
        level_count: u32,
    ) -> SmudgeResult<Self> {
        if level_count == 0 {
            return Err(SmudgeError::validation("level stack must be non-empty"));
        }
        Ok(Self {
            texel_size: [1.0 / size.width as f32, 1.0 / size.height as f32],
            level_count,
            blur_taps: blur_taps(settings.blur_sample_count),
        })
    }
}

/// Tap offsets for an `n`-sample blur: a center tap plus a unit ring.
///
/// One tap degenerates to a plain sample, which is exactly how the low tier sheds blur cost.
fn blur_taps(count: u32) -> SmallVec<[[f32; 2]; 8]> {
    let mut taps = SmallVec::new();
    taps.push([0.0, 0.0]);
    for i in 1..count {
        let angle = std::f32::consts::TAU * (i - 1) as f32 / (count - 1) as f32;
        taps.push([angle.cos(), angle.sin()]);
    }
    taps
}

#[cfg(test)]
#[path = "../../tests/unit/render/levels.rs"]
mod tests;
