use std::collections::VecDeque;

use airshape_base::{Hsl, Vec2};

use crate::Shape;

/// One stable shape instance kept for the fading trail.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailEntry {
    pub shape: Shape,
    /// Pixels
    pub position: Vec2<f32>,
    pub size: f32,
    pub color: Hsl,
    /// Pushes since this entry was added; the newest entry has age 0.
    pub age: u32,
}

/// Bounded FIFO of recent stable shapes, oldest first.
///
/// Independent of the smoothing windows: losing the hand does not clear it.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailBuffer {
    entries: VecDeque<TrailEntry>,
    capacity: usize,
    max_opacity: f32,
}

impl TrailBuffer {
    pub fn new(capacity: usize, max_opacity: f32) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity + 1),
            capacity,
            max_opacity,
        }
    }

    /// Add the newest entry and return the evicted oldest one, if any.
    pub fn push(&mut self, shape: Shape, position: Vec2<f32>, size: f32, color: Hsl) -> Option<TrailEntry> {
        for entry in &mut self.entries {
            entry.age = entry.age.saturating_add(1);
        }
        self.entries.push_back(TrailEntry {
            shape,
            position,
            size,
            color,
            age: 0,
        });
        if self.entries.len() > self.capacity {
            self.entries.pop_front()
        } else {
            None
        }
    }

    /// Opacity of the entry at `index` counted from the oldest:
    /// `(index + 1) / len * max_opacity`.
    pub fn opacity_at(&self, index: usize) -> f32 {
        if self.entries.is_empty() {
            return 0.0;
        }
        (index + 1) as f32 / self.entries.len() as f32 * self.max_opacity
    }

    /// Entries oldest first, each paired with its render opacity.
    pub fn iter_with_opacity(&self) -> impl Iterator<Item = (&TrailEntry, f32)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| (entry, self.opacity_at(index)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailEntry> {
        self.entries.iter()
    }

    pub fn newest(&self) -> Option<&TrailEntry> {
        self.entries.back()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
