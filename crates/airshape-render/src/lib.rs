//! Software rendering sink for the gesture pipeline.
//!
//! Draws into an RGB `Canvas` in HWC layout: the hand overlay, the current
//! shape and the fading trail. The canvas can be shown in a window via
//! `to_argb` or written out as PNG.

pub mod canvas;
pub mod error;
pub mod raster;
pub mod shapes;

pub use canvas::Canvas;
pub use error::RenderError;
pub use shapes::{draw_hand, draw_shape, OUTLINE_WIDTH};
