//! Cross-cutting foundation types shared by every engine area.

/// Core value types (surface sizing, tiling, geometry re-exports).
pub mod core;
/// Crate-wide error taxonomy.
pub mod error;
/// Small pure math helpers used by the hot path.
pub(crate) mod math;
