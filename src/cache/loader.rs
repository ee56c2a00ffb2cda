use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{SmudgeError, SmudgeResult};

/// Decoded source texture in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub struct TextureImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Supplies raw encoded bytes for a texture URL.
///
/// The cache owns a boxed source; hosts plug in whatever transport they have (filesystem,
/// embedded assets, an HTTP layer). Implementations may block — the cache only invokes them
/// at load points the host chose, never from the per-frame path.
pub trait TextureSource {
    /// Fetch the encoded bytes behind `url`.
    fn fetch(&self, url: &str) -> SmudgeResult<Vec<u8>>;
}

/// Filesystem-backed texture source resolving URLs relative to a root directory.
#[derive(Clone, Debug)]
pub struct FsSource {
    root: PathBuf,
}

impl FsSource {
    /// Create a source rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl TextureSource for FsSource {
    fn fetch(&self, url: &str) -> SmudgeResult<Vec<u8>> {
        let path = self.root.join(url);
        std::fs::read(&path)
            .with_context(|| format!("read texture '{}'", path.display()))
            .map_err(|e| SmudgeError::resource(e.to_string()))
    }
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
pub fn decode_texture(bytes: &[u8]) -> SmudgeResult<TextureImage> {
    let dyn_img = image::load_from_memory(bytes)
        .context("decode image from memory")
        .map_err(|e| SmudgeError::resource(e.to_string()))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(TextureImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cache/loader.rs"]
mod tests;
