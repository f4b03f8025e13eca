use crate::{Hand, ShapeDraw};

/// Where a processed frame is drawn.
///
/// Positions and sizes in `ShapeDraw` are already in pixels; hand landmarks
/// are still normalized and the sink maps them onto its own surface.
pub trait RenderSink {
    /// Start a new frame.
    fn clear(&mut self);

    /// Draw the landmark overlay of the tracked hand.
    fn draw_hand(&mut self, hand: &Hand);

    /// Draw one shape with `opacity` in `[0, 1]`.
    fn draw_shape(&mut self, draw: &ShapeDraw, opacity: f32);
}
