use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, OnceLock};

use tracing::warn;

use crate::cache::loader::{TextureImage, TextureSource, decode_texture};
use crate::foundation::core::TilingMode;

/// When queued texture loads are actually performed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Queue loads on `acquire` and perform them in [`TextureCache::pump`], which the host
    /// calls at an idle point.
    #[default]
    Deferred,
    /// Perform the load inside `acquire`.
    Immediate,
}

/// Counters for cache behavior, primarily for tests and diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Successful decodes performed.
    pub decodes: u64,
    /// Loads that failed and resolved with the neutral fallback instead.
    pub fallbacks: u64,
    /// Entries disposed after their last release.
    pub disposals: u64,
    /// `release` calls without a matching live entry.
    pub over_releases: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct TextureKey {
    url: String,
    tiling: TilingMode,
}

#[derive(Debug)]
struct TextureSlot {
    tiling: TilingMode,
    placeholder: TextureImage,
    resolved: OnceLock<TextureImage>,
}

/// Shared handle to one cached texture.
///
/// All acquirers of the same `(url, tiling)` key hold the same underlying slot: a still-loading
/// texture reads as the placeholder, and every holder observes the same resolved image the
/// moment the load completes. Lifetime accounting goes through
/// [`TextureCache::acquire`]/[`TextureCache::release`], not through handle clones.
#[derive(Clone, Debug)]
pub struct SharedTexture {
    slot: Arc<TextureSlot>,
}

impl SharedTexture {
    /// The current texture: the resolved image, or the placeholder while loading.
    ///
    /// Never blocks — the render loop always has something to sample.
    pub fn get(&self) -> &TextureImage {
        self.slot.resolved.get().unwrap_or(&self.slot.placeholder)
    }

    /// Return `true` once the load resolved (including fallback resolution).
    pub fn is_resolved(&self) -> bool {
        self.slot.resolved.get().is_some()
    }

    /// The wrap mode this texture was acquired with.
    pub fn tiling(&self) -> TilingMode {
        self.slot.tiling
    }

    /// Return `true` when both handles share one underlying cache slot.
    pub fn shares_slot(&self, other: &SharedTexture) -> bool {
        Arc::ptr_eq(&self.slot, &other.slot)
    }
}

struct CacheEntry {
    slot: Arc<TextureSlot>,
    ref_count: u32,
}

/// Reference-counted registry of decoded source textures, keyed by `(url, tiling)`.
///
/// An explicit object owned by the composition root; all mutation goes through
/// `acquire`/`release`/`pump`. Concurrent acquirers of one key share a single in-flight load
/// and a single decoded image. An entry is disposed exactly when its reference count reaches
/// zero. Load failures resolve with a fixed neutral-gray fallback so callers never branch on
/// missing images.
pub struct TextureCache {
    source: Box<dyn TextureSource>,
    policy: LoadPolicy,
    entries: HashMap<TextureKey, CacheEntry>,
    pending: VecDeque<TextureKey>,
    stats: CacheStats,
}

impl TextureCache {
    /// Create a cache over a byte source.
    pub fn new(source: impl TextureSource + 'static, policy: LoadPolicy) -> Self {
        Self {
            source: Box::new(source),
            policy,
            entries: HashMap::new(),
            pending: VecDeque::new(),
            stats: CacheStats::default(),
        }
    }

    /// Acquire a shared handle for `(url, tiling)`, incrementing its reference count.
    ///
    /// An existing entry is returned as-is, possibly still loading; otherwise a new entry is
    /// created with a placeholder texture and its load is queued (or performed immediately,
    /// per [`LoadPolicy`]).
    pub fn acquire(&mut self, url: &str, tiling: TilingMode) -> SharedTexture {
        let key = TextureKey {
            url: url.to_owned(),
            tiling,
        };
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.ref_count += 1;
            return SharedTexture {
                slot: entry.slot.clone(),
            };
        }

        let slot = Arc::new(TextureSlot {
            tiling,
            placeholder: neutral_texture(),
            resolved: OnceLock::new(),
        });
        self.entries.insert(
            key.clone(),
            CacheEntry {
                slot: slot.clone(),
                ref_count: 1,
            },
        );
        match self.policy {
            LoadPolicy::Immediate => self.load_now(&key),
            LoadPolicy::Deferred => self.pending.push_back(key),
        }
        SharedTexture { slot }
    }

    /// Release one reference to `(url, tiling)`.
    ///
    /// On the last release the entry is removed and its resource disposed, exactly once.
    /// Releasing more times than acquired is a programmer error: it is counted and logged but
    /// never corrupts unrelated entries.
    pub fn release(&mut self, url: &str, tiling: TilingMode) {
        let key = TextureKey {
            url: url.to_owned(),
            tiling,
        };
        match self.entries.get_mut(&key) {
            None => {
                self.stats.over_releases += 1;
                warn!(url, "texture release without matching acquire");
            }
            Some(entry) => {
                entry.ref_count -= 1;
                if entry.ref_count == 0 {
                    self.entries.remove(&key);
                    self.stats.disposals += 1;
                }
            }
        }
    }

    /// The current texture for `(url, tiling)` — the placeholder while loading.
    ///
    /// Synchronous and non-blocking; `None` only for keys never acquired (or fully released).
    pub fn peek(&self, url: &str, tiling: TilingMode) -> Option<&TextureImage> {
        let key = TextureKey {
            url: url.to_owned(),
            tiling,
        };
        self.entries
            .get(&key)
            .map(|e| e.slot.resolved.get().unwrap_or(&e.slot.placeholder))
    }

    /// Perform up to `max_loads` queued loads; returns how many were attempted.
    ///
    /// Hosts call this at an idle point. Keys released before their load ran are skipped
    /// entirely — an unmount cancels the work it queued.
    pub fn pump(&mut self, max_loads: usize) -> usize {
        let mut done = 0;
        while done < max_loads {
            let Some(key) = self.pending.pop_front() else {
                break;
            };
            if !self.entries.contains_key(&key) {
                continue;
            }
            self.load_now(&key);
            done += 1;
        }
        done
    }

    /// Current reference count for `(url, tiling)`; zero when absent.
    pub fn ref_count(&self, url: &str, tiling: TilingMode) -> u32 {
        let key = TextureKey {
            url: url.to_owned(),
            tiling,
        };
        self.entries.get(&key).map_or(0, |e| e.ref_count)
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when no entries are live.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of queued loads not yet performed.
    pub fn pending_loads(&self) -> usize {
        self.pending.len()
    }

    /// Behavior counters.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    fn load_now(&mut self, key: &TextureKey) {
        let Some(slot) = self.entries.get(key).map(|e| e.slot.clone()) else {
            return;
        };
        if slot.resolved.get().is_some() {
            return;
        }

        let image = match self
            .source
            .fetch(&key.url)
            .and_then(|bytes| decode_texture(&bytes))
        {
            Ok(image) => {
                self.stats.decodes += 1;
                image
            }
            Err(err) => {
                warn!(url = %key.url, %err, "texture load failed; substituting neutral fallback");
                self.stats.fallbacks += 1;
                neutral_texture()
            }
        };
        // Set-once: a duplicate queue entry for the same key keeps the first resolution.
        let _ = slot.resolved.set(image);
    }
}

/// The fixed small neutral-gray texture used as placeholder and load-failure fallback.
fn neutral_texture() -> TextureImage {
    static BYTES: OnceLock<Arc<Vec<u8>>> = OnceLock::new();
    let bytes = BYTES.get_or_init(|| {
        Arc::new(
            std::iter::repeat_n([128u8, 128, 128, 255], 4)
                .flatten()
                .collect(),
        )
    });
    TextureImage {
        width: 2,
        height: 2,
        rgba8_premul: bytes.clone(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/cache/texture.rs"]
mod tests;
