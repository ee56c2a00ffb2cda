use crate::foundation::core::{Point, Rect};

/// Unit-square motion below this distance is treated as no motion at all.
const MOTION_EPSILON: f64 = 1e-4;

/// One pointer motion segment in unit-square UV coordinates, ready for the trail engine.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSegment {
    /// Segment start.
    pub from: (f32, f32),
    /// Segment end.
    pub to: (f32, f32),
}

/// Maps raw `(client_x, client_y)` pointer samples to unit-square UV motion segments.
///
/// The surface rectangle is cached and only updated through [`PointerMapper::set_bounds`]
/// (the host calls it on resize/scroll), never recomputed per sample. Samples outside the
/// rectangle clamp to its edge. `responsiveness` scales how much of each raw motion reaches
/// the engine: `1.0` passes motion through unchanged, lower values shorten every segment.
#[derive(Clone, Debug)]
pub struct PointerMapper {
    bounds: Option<Rect>,
    last_uv: Option<Point>,
    responsiveness: f64,
}

impl PointerMapper {
    /// Create a mapper; bounds arrive later via [`PointerMapper::set_bounds`].
    pub fn new(responsiveness: f64) -> Self {
        Self {
            bounds: None,
            last_uv: None,
            responsiveness: responsiveness.clamp(0.0, 1.0),
        }
    }

    /// Cache the surface bounding rectangle in client coordinates.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = (bounds.width() > 0.0 && bounds.height() > 0.0).then_some(bounds);
    }

    /// Forget the previous sample, e.g. when the pointer leaves the surface.
    pub fn reset(&mut self) {
        self.last_uv = None;
    }

    /// Adjust how much of each raw motion reaches the engine.
    pub fn set_responsiveness(&mut self, value: f64) {
        self.responsiveness = value.clamp(0.0, 1.0);
    }

    /// Ingest one pointer sample; returns the motion segment since the previous sample.
    ///
    /// `None` when no bounds are cached yet, on the anchoring first sample, when
    /// responsiveness is zero, or when the motion is below the epsilon threshold.
    pub fn sample(&mut self, client_x: f64, client_y: f64) -> Option<PointerSegment> {
        let bounds = self.bounds?;
        let uv = Point::new(
            ((client_x - bounds.x0) / bounds.width()).clamp(0.0, 1.0),
            ((client_y - bounds.y0) / bounds.height()).clamp(0.0, 1.0),
        );

        let Some(last) = self.last_uv.replace(uv) else {
            return None;
        };

        let motion = uv - last;
        if motion.hypot() <= MOTION_EPSILON || self.responsiveness <= 0.0 {
            return None;
        }

        let scaled = last + motion * self.responsiveness;
        Some(PointerSegment {
            from: (last.x as f32, last.y as f32),
            to: (scaled.x as f32, scaled.y as f32),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/pointer.rs"]
mod tests;
