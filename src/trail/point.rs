use crate::foundation::error::{SmudgeError, SmudgeResult};

/// One aging ink deposit in raster-surface pixel space.
///
/// Deposits are pooled: every slot is allocated once at ring construction and only rewritten
/// afterwards. Identity is the slot index, never an object reference.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TrailPoint {
    /// X position in surface pixels.
    pub x: f32,
    /// Y position in surface pixels.
    pub y: f32,
    /// Elapsed simulation frames since deposit.
    pub age: f32,
    /// Base pixel radius before the lifetime pulse is applied.
    pub size: f32,
}

/// Fixed-capacity ring buffer of [`TrailPoint`] slots.
///
/// The live region `[head, head+count)` (mod capacity) holds deposits ordered oldest to newest:
/// ages are monotonically non-increasing from head to tail. Insertion appends at the logical
/// tail; eviction only ever removes from the head, either the single oldest under capacity
/// pressure or an expired run during aging. Push and evict are O(1) index moves — the slot
/// vector never grows or shrinks after construction.
#[derive(Debug)]
pub struct PointRing {
    slots: Vec<TrailPoint>,
    head: usize,
    count: usize,
}

impl PointRing {
    /// Allocate a ring with `capacity` pooled slots.
    pub fn new(capacity: usize) -> SmudgeResult<Self> {
        if capacity == 0 {
            return Err(SmudgeError::validation("point ring capacity must be > 0"));
        }
        Ok(Self {
            slots: vec![TrailPoint::default(); capacity],
            head: 0,
            count: 0,
        })
    }

    /// Slot capacity `C`.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of live deposits.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Return `true` when no deposits are live.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Drop all live deposits without touching slot storage.
    pub fn clear(&mut self) {
        self.head = 0;
        self.count = 0;
    }

    /// Append a fresh deposit (`age = 0`) at the logical tail.
    ///
    /// When the ring is full the single oldest deposit is evicted first.
    pub fn push(&mut self, x: f32, y: f32, size: f32) {
        let cap = self.slots.len();
        if self.count == cap {
            // Capacity pressure: drop the head, keeping the C most recent.
            self.head = (self.head + 1) % cap;
            self.count -= 1;
        }
        let tail = (self.head + self.count) % cap;
        self.slots[tail] = TrailPoint {
            x,
            y,
            age: 0.0,
            size,
        };
        self.count += 1;
    }

    /// Age every live deposit by `delta_frames`.
    pub fn age_all(&mut self, delta_frames: f32) {
        let cap = self.slots.len();
        for i in 0..self.count {
            self.slots[(self.head + i) % cap].age += delta_frames;
        }
    }

    /// Evict the expired run from the head; returns how many deposits were dropped.
    ///
    /// Ages are non-increasing from the head, so the expired deposits always form a prefix and
    /// eviction is monotonic: a deposit is never un-evicted.
    pub fn evict_expired(&mut self, max_age: f32) -> usize {
        let cap = self.slots.len();
        let mut dropped = 0;
        while self.count > 0 && self.slots[self.head].age > max_age {
            self.head = (self.head + 1) % cap;
            self.count -= 1;
            dropped += 1;
        }
        dropped
    }

    /// Iterate live deposits oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        let cap = self.slots.len();
        (0..self.count).map(move |i| &self.slots[(self.head + i) % cap])
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trail/point.rs"]
mod tests;
