//! The trail engine: aging ink deposits composited onto an off-screen intensity surface.
//!
//! [`engine::Trail`] owns everything here — the deposit ring, the ambient wander particles,
//! the baked gradient stamp, and the surface they paint onto. Hosts feed it normalized pointer
//! motion and call [`engine::Trail::update`] once per frame; the returned dirty flag gates the
//! GPU re-upload.

/// Ambient wander particles emitting idle motion.
pub(crate) mod ambient;
/// The `Trail` engine itself.
pub mod engine;
/// Trail deposits and their fixed-capacity ring buffer.
pub mod point;
/// Pre-rendered radial falloff decal.
pub mod stamp;
/// The single-channel raster surface deposits are painted onto.
pub mod surface;
