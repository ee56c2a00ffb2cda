//! Device quality tiering.
//!
//! Detection is a pure additive score over runtime signals, thresholded into a tier; each tier
//! is an immutable preset of quantities (resolution, point budget, blur taps, cadence). The
//! algorithm is identical across tiers — cheaper tiers simply process fewer points and fewer
//! blur taps, which is the whole load-shedding mechanism.

/// Device signal collection and tier classification.
pub mod detect;
/// Tier presets and process-wide resolution.
pub mod settings;
