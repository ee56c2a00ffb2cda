//! Reference-counted sharing of static source textures.
//!
//! A [`texture::TextureCache`] is an explicit registry owned by the composition root (never a
//! module global): every component instance referencing the same `(url, tiling)` key shares
//! one decode and one upload, and the underlying resource is disposed exactly when the last
//! acquirer releases it.

/// Byte fetching and image decoding.
pub mod loader;
/// The reference-counted texture registry.
pub mod texture;
