use std::fmt;

use airshape_gesture::{FrameStatus, Shape};

/// Per-status frame counts for the end-of-replay summary.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ReplayStats {
    pub frames: usize,
    pub no_hand: usize,
    pub unrecognized: usize,
    /// Indexed like `Shape::ALL`.
    pub shapes: [usize; 3],
}

impl ReplayStats {
    pub fn record(&mut self, status: &FrameStatus) {
        self.frames += 1;
        match status {
            FrameStatus::NoHand => self.no_hand += 1,
            FrameStatus::Unrecognized => self.unrecognized += 1,
            FrameStatus::Tracking { shape, .. } => {
                if let Some(i) = Shape::ALL.iter().position(|s| s == shape) {
                    self.shapes[i] += 1;
                }
            }
        }
    }

    pub fn count(&self, shape: Shape) -> usize {
        Shape::ALL
            .iter()
            .position(|s| *s == shape)
            .map_or(0, |i| self.shapes[i])
    }
}

impl fmt::Display for ReplayStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} frames", self.frames)?;
        for shape in Shape::ALL {
            write!(f, ", {} {}", self.count(shape), shape)?;
        }
        write!(f, ", {} unrecognized, {} without hand", self.unrecognized, self.no_hand)
    }
}
