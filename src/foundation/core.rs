use crate::foundation::error::{SmudgeError, SmudgeResult};

pub use kurbo::{Point, Rect, Vec2};

/// Largest raster-surface edge the engine will allocate.
///
/// The trail surface is an intensity buffer a GPU stage re-uploads every dirty frame; anything
/// past this is a host-layer configuration mistake, not a real quality preset.
pub const MAX_SURFACE_DIM: u32 = 2048;

/// Off-screen raster surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SurfaceSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl SurfaceSize {
    /// Create a validated surface size.
    pub fn new(width: u32, height: u32) -> SmudgeResult<Self> {
        if width == 0 || height == 0 {
            return Err(SmudgeError::surface("surface dimensions must be non-zero"));
        }
        if width > MAX_SURFACE_DIM || height > MAX_SURFACE_DIM {
            return Err(SmudgeError::surface(format!(
                "surface dimensions must be <= {MAX_SURFACE_DIM} (got {width}x{height})"
            )));
        }
        Ok(Self { width, height })
    }

    /// Square surface of the given edge length.
    pub fn square(edge: u32) -> SmudgeResult<Self> {
        Self::new(edge, edge)
    }

    /// Number of texels in the surface.
    pub fn texel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Texture wrap configuration applied once a source image is decoded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TilingMode {
    /// Clamp sampling to the texture edge.
    #[default]
    Clamp,
    /// Repeat the texture in both axes.
    Repeat,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
