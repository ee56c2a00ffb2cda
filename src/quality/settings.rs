use std::str::FromStr;
use std::sync::OnceLock;

use tracing::debug;

use crate::quality::detect::{DeviceSignals, classify};

/// Named quality preset bundling all cost-related constants together.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Low-end devices: smallest surface, fewest points, single blur tap.
    Low,
    /// Mid-range devices.
    Medium,
    /// Desktop-class devices.
    High,
}

impl FromStr for Tier {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(()),
        }
    }
}

/// Immutable per-tier quantities; selected once and shared for the process lifetime.
///
/// The three presets differ only in quantities. The engine algorithm is identical across tiers,
/// so shedding load never changes visual semantics, only density.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QualitySettings {
    /// The tier this preset belongs to.
    pub tier: Tier,
    /// Device-pixel-ratio clamp range applied by the host when sizing its drawing buffer.
    pub pixel_ratio_range: [f32; 2],
    /// Edge length of the square trail raster surface, in pixels.
    pub raster_resolution: u32,
    /// Number of concentric opacity stops baked into the gradient stamp.
    pub gradient_stops: u32,
    /// Deposit ring-buffer capacity.
    pub max_points: u32,
    /// Minimum milliseconds between executed trail updates.
    pub update_interval_ms: u32,
    /// Number of ambient wander particles.
    pub ambient_particle_count: u32,
    /// Blur taps per pixel in the reveal shader.
    pub blur_sample_count: u32,
    /// Nominal simulation frame rate all per-frame quantities are scaled against.
    pub target_fps: u32,
}

const HIGH: QualitySettings = QualitySettings {
    tier: Tier::High,
    pixel_ratio_range: [1.0, 2.0],
    raster_resolution: 256,
    gradient_stops: 6,
    max_points: 400,
    update_interval_ms: 16,
    ambient_particle_count: 3,
    blur_sample_count: 5,
    target_fps: 60,
};

const MEDIUM: QualitySettings = QualitySettings {
    tier: Tier::Medium,
    pixel_ratio_range: [1.0, 1.5],
    raster_resolution: 192,
    gradient_stops: 4,
    max_points: 250,
    update_interval_ms: 33,
    ambient_particle_count: 2,
    blur_sample_count: 3,
    target_fps: 60,
};

const LOW: QualitySettings = QualitySettings {
    tier: Tier::Low,
    pixel_ratio_range: [0.75, 1.0],
    raster_resolution: 128,
    gradient_stops: 3,
    max_points: 150,
    update_interval_ms: 50,
    ambient_particle_count: 1,
    blur_sample_count: 1,
    target_fps: 60,
};

impl QualitySettings {
    /// The immutable preset for a tier.
    pub fn preset(tier: Tier) -> Self {
        match tier {
            Tier::High => HIGH,
            Tier::Medium => MEDIUM,
            Tier::Low => LOW,
        }
    }

    /// Executed-update cadence in seconds.
    pub fn update_interval_secs(&self) -> f64 {
        f64::from(self.update_interval_ms) / 1000.0
    }
}

/// Resolve the process-wide quality settings.
///
/// With `force = None`, signals are probed and classified at most once per process; subsequent
/// calls return the memoized result. A forced tier (primarily for tests) returns its preset
/// directly without touching the cache, so forcing never poisons later detection. The
/// `SMUDGE_FORCE_TIER` environment variable (`low`/`medium`/`high`) overrides detection the
/// same way, for field debugging.
pub fn resolve_settings(force: Option<Tier>) -> QualitySettings {
    if let Some(tier) = force {
        return QualitySettings::preset(tier);
    }

    static DETECTED: OnceLock<QualitySettings> = OnceLock::new();
    *DETECTED.get_or_init(|| {
        if let Some(tier) = std::env::var("SMUDGE_FORCE_TIER")
            .ok()
            .and_then(|v| Tier::from_str(&v).ok())
        {
            debug!(?tier, "quality tier forced via SMUDGE_FORCE_TIER");
            return QualitySettings::preset(tier);
        }
        let signals = DeviceSignals::probe();
        let tier = classify(&signals);
        debug!(?tier, cores = signals.logical_cores, "quality tier detected");
        QualitySettings::preset(tier)
    })
}

/// Classify host-supplied signals and return the matching preset, bypassing the cache.
pub fn settings_for_signals(signals: &DeviceSignals) -> QualitySettings {
    QualitySettings::preset(classify(signals))
}

#[cfg(test)]
#[path = "../../tests/unit/quality/settings.rs"]
mod tests;
