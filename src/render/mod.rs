//! Shader-parameterization glue.
//!
//! The GPU program that samples the trail surface and blends the baked image levels is an
//! external consumer; this area only prepares what it binds — level-blend selection and the
//! uniform payload sized by the active quality preset.

/// Level blending and reveal uniforms.
pub mod levels;
