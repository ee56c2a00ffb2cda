use crate::quality::settings::Tier;

/// Coarse GPU class recovered from a renderer string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GpuClass {
    /// Discrete desktop-class GPU.
    Discrete,
    /// Integrated or mobile GPU.
    Integrated,
    /// Software rasterizer.
    Software,
    /// Nothing recognizable reported.
    Unknown,
}

/// Runtime signals feeding tier classification.
///
/// Every field is optional in spirit: unknown signals contribute nothing to the score, so a
/// host that only knows its core count still gets a sane tier. Hosts embedding a GPU context
/// should pass the renderer string through; it is the strongest single signal.
#[derive(Clone, Debug, Default)]
pub struct DeviceSignals {
    /// Estimated device memory in GiB, when the platform exposes it.
    pub memory_gb: Option<f32>,
    /// Logical CPU core count; zero when unknown.
    pub logical_cores: usize,
    /// Mobile/touch-first device heuristic.
    pub is_mobile: bool,
    /// Total screen pixels (width x height x pixel ratio); zero when unknown.
    pub screen_pixels: u64,
    /// Raw GPU renderer string, when a graphics context is available.
    pub gpu_renderer: Option<String>,
}

impl DeviceSignals {
    /// Collect the signals the standard library can provide on its own.
    ///
    /// Memory, screen, and GPU fields stay unknown; hosts fill them from their platform layer.
    pub fn probe() -> Self {
        Self {
            logical_cores: std::thread::available_parallelism().map_or(0, |n| n.get()),
            ..Self::default()
        }
    }
}

/// Pattern-match a renderer string into a coarse GPU class.
pub fn classify_gpu(renderer: &str) -> GpuClass {
    let r = renderer.to_ascii_lowercase();
    if ["swiftshader", "llvmpipe", "softpipe", "software"]
        .iter()
        .any(|p| r.contains(p))
    {
        return GpuClass::Software;
    }
    if ["nvidia", "geforce", "rtx", "gtx", "quadro", "radeon rx", "radeon pro", "arc a"]
        .iter()
        .any(|p| r.contains(p))
    {
        return GpuClass::Discrete;
    }
    if ["intel", "iris", "uhd", "mali", "adreno", "powervr", "apple", "videocore", "radeon"]
        .iter()
        .any(|p| r.contains(p))
    {
        return GpuClass::Integrated;
    }
    GpuClass::Unknown
}

// Additive score weights. Heuristic constants, not load-bearing: adjust against real devices,
// keep the ordering low <= medium <= high intact.
const SCORE_HIGH: i32 = 7;
const SCORE_MEDIUM: i32 = 3;

fn score(signals: &DeviceSignals) -> i32 {
    let mut score = 0;

    match signals.memory_gb {
        Some(m) if m >= 8.0 => score += 2,
        Some(m) if m >= 4.0 => score += 1,
        _ => {}
    }

    if signals.logical_cores >= 8 {
        score += 2;
    } else if signals.logical_cores >= 4 {
        score += 1;
    }

    if signals.is_mobile {
        score -= 2;
    } else {
        score += 1;
    }

    if signals.screen_pixels >= 1920 * 1080 {
        score += 1;
    }

    match signals.gpu_renderer.as_deref().map(classify_gpu) {
        Some(GpuClass::Discrete) => score += 3,
        Some(GpuClass::Integrated) => score += 1,
        Some(GpuClass::Software) => score -= 3,
        _ => {}
    }

    score
}

/// Classify device signals into a quality tier.
pub fn classify(signals: &DeviceSignals) -> Tier {
    let score = score(signals);
    if score >= SCORE_HIGH {
        Tier::High
    } else if score >= SCORE_MEDIUM {
        Tier::Medium
    } else {
        Tier::Low
    }
}

#[cfg(test)]
#[path = "../../tests/unit/quality/detect.rs"]
mod tests;
