/// Soft boundary of the wander region inside the unit square.
const BOUND_MIN: f32 = 0.1;
const BOUND_MAX: f32 = 0.9;

/// Base drift velocity magnitude, unit-square units per frame.
const DRIFT: f32 = 0.0012;
/// Amplitude of the per-frame sinusoidal wobble.
const WOBBLE: f32 = 0.0008;

/// One wandering emitter inside the unit square.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AmbientParticle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    phase: f32,
    speed: f32,
}

/// Fixed-size set of ambient particles giving the surface idle motion without pointer input.
///
/// Particles advance by velocity plus a smooth per-particle wobble, reflect at a soft boundary,
/// and probabilistically emit trail deposits. The set size is a quality-tier quantity (1-3) and
/// never changes after construction.
#[derive(Debug)]
pub(crate) struct AmbientField {
    particles: Vec<AmbientParticle>,
    rng: fastrand::Rng,
}

impl AmbientField {
    pub(crate) fn new(count: u32, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => fastrand::Rng::with_seed(s),
            None => fastrand::Rng::new(),
        };
        let particles = (0..count)
            .map(|_| AmbientParticle {
                x: rng.f32() * 0.5 + 0.25,
                y: rng.f32() * 0.5 + 0.25,
                vx: (rng.f32() * 2.0 - 1.0) * DRIFT,
                vy: (rng.f32() * 2.0 - 1.0) * DRIFT,
                phase: rng.f32() * std::f32::consts::TAU,
                speed: 0.5 + rng.f32(),
            })
            .collect();
        Self { particles, rng }
    }

    pub(crate) fn len(&self) -> usize {
        self.particles.len()
    }

    /// Advance every particle by one frame of wander and emit deposits.
    ///
    /// `emit` receives unit-square coordinates; each particle emits with probability
    /// `emit_probability` per call.
    pub(crate) fn update(
        &mut self,
        sim_time: f64,
        emit_probability: f32,
        mut emit: impl FnMut(f32, f32),
    ) {
        let t = sim_time as f32;
        for p in &mut self.particles {
            p.x += p.vx + (t * p.speed + p.phase).sin() * WOBBLE;
            p.y += p.vy + (t * p.speed + p.phase).cos() * WOBBLE;

            // Soft boundary: reflect and clamp rather than wrap, so emissions never pop
            // across the surface.
            if p.x < BOUND_MIN || p.x > BOUND_MAX {
                p.vx = -p.vx;
                p.x = p.x.clamp(BOUND_MIN, BOUND_MAX);
            }
            if p.y < BOUND_MIN || p.y > BOUND_MAX {
                p.vy = -p.vy;
                p.y = p.y.clamp(BOUND_MIN, BOUND_MAX);
            }

            if self.rng.f32() < emit_probability {
                emit(p.x, p.y);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trail/ambient.rs"]
mod tests;
