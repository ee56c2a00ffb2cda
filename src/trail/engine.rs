use std::f32::consts::PI;

use tracing::debug;

use crate::foundation::core::SurfaceSize;
use crate::foundation::error::{SmudgeError, SmudgeResult};
use crate::foundation::math::decay_factor;
use crate::quality::settings::QualitySettings;
use crate::trail::ambient::AmbientField;
use crate::trail::point::{PointRing, TrailPoint};
use crate::trail::stamp::GradientStamp;
use crate::trail::surface::IntensitySurface;

/// Pointer motion shorter than this (unit-square distance) synthesizes no deposits.
const MOTION_EPSILON: f32 = 1e-4;
/// Unit-square spacing between interpolated deposits along a motion segment.
const SEGMENT_STEP_UV: f32 = 0.01;
/// Upper bound on deposits synthesized for one motion segment.
const MAX_SEGMENT_STEPS: u32 = 64;

/// Host-supplied tuning for one trail instance.
///
/// Every field maps to one engine setter or constructor option; hosts typically deserialize
/// this from their effect configuration.
#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TrailConfig {
    /// Deposit radius as a fraction of the surface width.
    pub base_size: f32,
    /// Per-frame intensity keep rate in `(0, 1]`; lower fades faster.
    pub fade_speed: f32,
    /// Deposit lifetime in simulation frames.
    pub max_age: f32,
    /// Peak deposit opacity scale in `[0, 1]`.
    pub intensity: f32,
    /// Per-frame emission probability of each ambient particle, in `[0, 1]`.
    pub ambient_intensity: f32,
    /// Override the preset raster resolution (square edge, pixels).
    pub resolution: Option<u32>,
    /// Seed for ambient wander; `None` seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            base_size: 0.08,
            fade_speed: 0.96,
            max_age: 120.0,
            intensity: 0.15,
            ambient_intensity: 0.02,
            resolution: None,
            rng_seed: None,
        }
    }
}

impl TrailConfig {
    fn validate(&self) -> SmudgeResult<()> {
        if !(self.fade_speed > 0.0 && self.fade_speed <= 1.0) {
            return Err(SmudgeError::validation("fade_speed must be in (0, 1]"));
        }
        if !(self.max_age > 0.0 && self.max_age.is_finite()) {
            return Err(SmudgeError::validation("max_age must be finite and > 0"));
        }
        if !(0.0..=1.0).contains(&self.intensity) {
            return Err(SmudgeError::validation("intensity must be in [0, 1]"));
        }
        if !(0.0..=1.0).contains(&self.ambient_intensity) {
            return Err(SmudgeError::validation("ambient_intensity must be in [0, 1]"));
        }
        if !(self.base_size > 0.0 && self.base_size <= 1.0) {
            return Err(SmudgeError::validation("base_size must be in (0, 1]"));
        }
        Ok(())
    }
}

/// The core trail engine.
///
/// Owns a fixed-capacity deposit ring, an ambient wander field, a baked gradient stamp, and
/// the intensity surface they paint onto. All per-frame work is synchronous, bounded, and
/// allocation-free; the host drives it from its frame callback:
///
/// 1. feed pointer motion through [`Trail::add_point`] / [`Trail::add_segment`];
/// 2. call [`Trail::update_ambient`], then [`Trail::update`];
/// 3. re-upload [`Trail::surface`] to the GPU only when `update` returned `true`.
///
/// Timestamps are host-supplied monotonic seconds; after the host surface was hidden or
/// suspended, call [`Trail::reset_time`] before the next update.
pub struct Trail {
    settings: QualitySettings,
    base_size: f32,
    fade_speed: f32,
    max_age: f32,
    intensity: f32,
    ambient_intensity: f32,

    surface: IntensitySurface,
    stamp: GradientStamp,
    points: PointRing,
    ambient: AmbientField,

    /// Timestamp of the last *executed* update; `None` re-anchors the delta clock.
    last_update_secs: Option<f64>,
}

impl Trail {
    /// Construct an engine for the given quality preset and tuning.
    pub fn new(settings: QualitySettings, config: TrailConfig) -> SmudgeResult<Self> {
        config.validate()?;
        let edge = config.resolution.unwrap_or(settings.raster_resolution);
        let size = SurfaceSize::square(edge)?;
        let surface = IntensitySurface::new(size)?;
        let stamp = GradientStamp::for_quality(&settings)?;
        let points = PointRing::new(settings.max_points as usize)?;
        let ambient = AmbientField::new(settings.ambient_particle_count, config.rng_seed);
        debug!(tier = ?settings.tier, edge, "trail engine initialized");

        Ok(Self {
            settings,
            base_size: config.base_size,
            fade_speed: config.fade_speed,
            max_age: config.max_age,
            intensity: config.intensity,
            ambient_intensity: config.ambient_intensity,
            surface,
            stamp,
            points,
            ambient,
            last_update_secs: None,
        })
    }

    /// Deposit one point at unit-square coordinates.
    ///
    /// Coordinates clamp to the unit square; the new deposit starts at `age = 0` with radius
    /// `base_size * surface_width`, evicting the oldest deposit if the ring is full. No
    /// allocation occurs.
    pub fn add_point(&mut self, x_norm: f32, y_norm: f32) {
        let size = self.surface.size();
        let x = x_norm.clamp(0.0, 1.0) * (size.width - 1) as f32;
        let y = y_norm.clamp(0.0, 1.0) * (size.height - 1) as f32;
        self.points.push(x, y, self.base_size * size.width as f32);
    }

    /// Deposit points along a pointer motion segment in unit-square coordinates.
    ///
    /// Zero-distance motion synthesizes nothing. Longer segments synthesize intermediate
    /// deposits at a fixed spacing (step count proportional to distance), so fast pointer
    /// jumps leave a continuous trail instead of isolated endpoints.
    pub fn add_segment(&mut self, from: (f32, f32), to: (f32, f32)) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let dist = (dx * dx + dy * dy).sqrt();
        if dist <= MOTION_EPSILON {
            return;
        }
        let steps = ((dist / SEGMENT_STEP_UV).ceil() as u32).clamp(1, MAX_SEGMENT_STEPS);
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.add_point(from.0 + dx * t, from.1 + dy * t);
        }
    }

    /// Advance the ambient wander particles and let them emit deposits.
    ///
    /// Must run before [`Trail::update`] within the same frame so ambient-emitted deposits age
    /// consistently with pointer-emitted ones.
    pub fn update_ambient(&mut self, sim_time: f64) {
        let size = self.surface.size();
        let w = (size.width - 1) as f32;
        let h = (size.height - 1) as f32;
        let deposit_size = self.base_size * size.width as f32;
        let ring = &mut self.points;
        self.ambient
            .update(sim_time, self.ambient_intensity, |u, v| {
                ring.push(u * w, v * h, deposit_size);
            });
    }

    /// Execute one simulation step; returns whether the surface changed.
    ///
    /// Calls arriving within the preset update interval of the last executed step are cheap
    /// no-ops returning `false`, decoupling simulation cadence from the host's paint cadence.
    /// All per-frame quantities scale by elapsed time against the nominal frame rate, so decay
    /// and aging are independent of the actual tick rate.
    pub fn update(&mut self, now_secs: f64) -> bool {
        if let Some(last) = self.last_update_secs
            && now_secs - last < self.settings.update_interval_secs()
        {
            return false;
        }

        let delta_secs = match self.last_update_secs {
            Some(last) => (now_secs - last).max(0.0),
            // Re-anchored clock: bill exactly one nominal frame.
            None => 1.0 / f64::from(self.settings.target_fps),
        };
        self.last_update_secs = Some(now_secs);
        let frame_multiplier = (delta_secs * f64::from(self.settings.target_fps)) as f32;

        self.surface
            .fade(decay_factor(self.fade_speed, frame_multiplier));

        self.points.age_all(frame_multiplier);
        self.points.evict_expired(self.max_age);

        for p in self.points.iter() {
            let life = (1.0 - p.age / self.max_age).clamp(0.0, 1.0);
            let opacity = life * life * self.intensity;
            // Deposits swell then shrink over their lifetime; a stylistic curve, not physics.
            let pulse = 0.5 + 0.5 * (life * PI).sin();
            self.surface
                .stamp(&self.stamp, p.x, p.y, p.size * pulse, opacity);
        }

        true
    }

    /// Re-anchor the delta clock.
    ///
    /// Call after the host surface was hidden or suspended; the next update then bills one
    /// nominal frame instead of the entire suspension as a single giant step.
    pub fn reset_time(&mut self) {
        self.last_update_secs = None;
    }

    /// Drop all deposits and reset the surface to black. Idempotent.
    pub fn clear(&mut self) {
        self.points.clear();
        self.surface.clear();
        self.last_update_secs = None;
    }

    /// Set the ambient emission probability; effective on the next update.
    pub fn set_ambient_intensity(&mut self, value: f32) {
        self.ambient_intensity = value.clamp(0.0, 1.0);
    }

    /// Set the deposit radius fraction; affects deposits added afterwards.
    pub fn set_base_size(&mut self, value: f32) {
        self.base_size = value.clamp(f32::EPSILON, 1.0);
    }

    /// Set the per-frame intensity keep rate; effective on the next update.
    pub fn set_fade_speed(&mut self, value: f32) {
        self.fade_speed = value.clamp(f32::EPSILON, 1.0);
    }

    /// Set the deposit lifetime in frames; effective on the next update.
    pub fn set_max_age(&mut self, value: f32) {
        self.max_age = value.max(1.0);
    }

    /// Set the peak deposit opacity scale; effective on the next update.
    pub fn set_intensity(&mut self, value: f32) {
        self.intensity = value.clamp(0.0, 1.0);
    }

    /// The intensity surface the GPU stage samples.
    pub fn surface(&self) -> &IntensitySurface {
        &self.surface
    }

    /// The quality preset this engine was built with.
    pub fn settings(&self) -> &QualitySettings {
        &self.settings
    }

    /// Number of live deposits.
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Number of ambient wander particles.
    pub fn ambient_count(&self) -> usize {
        self.ambient.len()
    }

    /// Iterate live deposits oldest to newest.
    pub fn iter_points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trail/engine.rs"]
mod tests;
