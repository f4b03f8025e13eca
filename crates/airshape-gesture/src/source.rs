use crate::{GestureError, Hand};

/// Output of the hand tracker for one video frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedFrame {
    /// `None` when no hand was detected.
    pub hand: Option<Hand>,
}

impl TrackedFrame {
    pub fn empty() -> Self {
        Self { hand: None }
    }

    pub fn with_hand(hand: Hand) -> Self {
        Self { hand: Some(hand) }
    }
}

/// Async producer of tracked frames.
///
/// Frames are handed over one at a time; the consumer finishes a frame
/// before asking for the next.
#[allow(async_fn_in_trait)]
pub trait FrameSource {
    /// Receive the next frame, or `None` once the source is exhausted.
    async fn recv(&mut self) -> Result<Option<TrackedFrame>, GestureError>;
}
