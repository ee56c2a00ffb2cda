//! Smudge is a pointer-reactive trail and reveal texture engine.
//!
//! It powers interactive "ink" effects: pointer and touch motion deposits aging, fading
//! intensity onto an off-screen raster surface, and a GPU stage reveals pre-baked image
//! levels wherever the trail has accumulated. The engine is the systems half only — the host
//! supplies pointer samples, image URLs, and a frame callback, and consumes a dirty-flagged
//! intensity buffer plus shader uniforms:
//!
//! - Resolve a [`QualitySettings`] preset once per process
//! - Build a [`Trail`] (usually behind a [`Deferred`] idle task)
//! - Share source art across instances through a [`TextureCache`]
//! - Each frame: map pointer samples with [`PointerMapper`], feed the trail, call
//!   [`Trail::update_ambient`] then [`Trail::update`], and re-upload the surface when dirty
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Reference-counted source-texture sharing.
pub mod cache;
/// Pointer sample mapping.
pub mod input;
/// Device quality tiering.
pub mod quality;
/// Shader-parameterization glue.
pub mod render;
/// Host-lifecycle plumbing.
pub mod session;
/// The trail engine.
pub mod trail;

pub use crate::foundation::core::{MAX_SURFACE_DIM, Point, Rect, SurfaceSize, TilingMode, Vec2};
pub use crate::foundation::error::{SmudgeError, SmudgeResult};

pub use crate::cache::loader::{FsSource, TextureImage, TextureSource};
pub use crate::cache::texture::{CacheStats, LoadPolicy, SharedTexture, TextureCache};
pub use crate::input::pointer::{PointerMapper, PointerSegment};
pub use crate::quality::detect::{DeviceSignals, GpuClass, classify, classify_gpu};
pub use crate::quality::settings::{QualitySettings, Tier, resolve_settings, settings_for_signals};
pub use crate::render::levels::{LevelBlend, RevealUniforms};
pub use crate::session::deferred::{CancelHandle, Deferred};
pub use crate::trail::engine::{Trail, TrailConfig};
pub use crate::trail::point::TrailPoint;
pub use crate::trail::stamp::GradientStamp;
pub use crate::trail::surface::IntensitySurface;
