use std::collections::VecDeque;

/// Fill level of a smoothing window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowState {
    Empty,
    Filling,
    Full,
}

/// Bounded FIFO of the most recent samples of one channel.
///
/// Holds at most `capacity` values; pushing onto a full window evicts the
/// oldest value.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothingWindow<T> {
    values: VecDeque<T>,
    capacity: usize,
}

impl<T> SmoothingWindow<T> {
    /// A capacity of zero is raised to one.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            values: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a value, returning the evicted oldest value if the window
    /// was already full.
    pub fn push(&mut self, value: T) -> Option<T> {
        self.values.push_back(value);
        if self.values.len() > self.capacity {
            self.values.pop_front()
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_full(&self) -> bool {
        self.values.len() >= self.capacity
    }

    pub fn state(&self) -> WindowState {
        if self.is_empty() {
            WindowState::Empty
        } else if self.is_full() {
            WindowState::Full
        } else {
            WindowState::Filling
        }
    }
}

impl<T: PartialEq + Copy> SmoothingWindow<T> {
    /// Most frequent value. On a tie the value that first appears in the
    /// window wins.
    pub fn mode(&self) -> Option<T> {
        let mut tallies: Vec<(T, usize)> = Vec::with_capacity(self.values.len());
        for &value in &self.values {
            match tallies.iter_mut().find(|(seen, _)| *seen == value) {
                Some((_, count)) => *count += 1,
                None => tallies.push((value, 1)),
            }
        }

        let mut best: Option<(T, usize)> = None;
        for (value, count) in tallies {
            if best.is_none_or(|(_, best_count)| count > best_count) {
                best = Some((value, count));
            }
        }
        best.map(|(value, _)| value)
    }
}

impl SmoothingWindow<f32> {
    /// Arithmetic mean over the samples currently held.
    pub fn mean(&self) -> Option<f32> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().sum::<f32>() / self.values.len() as f32)
    }
}

/// Push `value` and return the window with its mode.
pub fn smooth_mode<T: PartialEq + Copy>(
    mut window: SmoothingWindow<T>,
    value: T,
) -> (SmoothingWindow<T>, T) {
    window.push(value);
    let mode = window.mode().unwrap_or(value);
    (window, mode)
}

/// Push `value` and return the window with its moving average.
pub fn smooth_mean(mut window: SmoothingWindow<f32>, value: f32) -> (SmoothingWindow<f32>, f32) {
    window.push(value);
    let mean = window.mean().unwrap_or(value);
    (window, mean)
}
