//! Hand-gesture shape classification and temporal stabilization.
//!
//! A hand tracker hands over one frame of 21 landmarks at a time. The
//! `GeometryClassifier` turns a frame into a shape plus continuous size,
//! color and position channels, the `Stabilizer` smooths those against
//! per-frame jitter, and the `TrailBuffer` keeps the last few stable shapes
//! for a fading trail. `GesturePipeline` composes the three, one frame at a
//! time, with all state passed in and returned explicitly.

pub mod config;
pub mod error;
pub mod geometry;
pub mod landmark;
pub mod pipeline;
pub mod replay;
pub mod shape;
pub mod sink;
pub mod source;
pub mod stabilizer;
pub mod trail;
pub mod window;

pub use config::{ClassifierConfig, GestureConfig};
pub use error::GestureError;
pub use geometry::{ClassifiedFrame, GeometryClassifier, PinchMeasure};
pub use landmark::{Finger, Hand, HandLandmark, Landmark, HAND_LANDMARK_COUNT, HAND_SKELETON};
pub use pipeline::{render, FrameOutput, FrameState, FrameStatus, GesturePipeline, ShapeDraw, TrailDraw};
pub use replay::ReplaySource;
pub use shape::Shape;
pub use sink::RenderSink;
pub use source::{FrameSource, TrackedFrame};
pub use stabilizer::{RawSample, StableSample, Stabilizer};
pub use trail::{TrailBuffer, TrailEntry};
pub use window::{smooth_mean, smooth_mode, SmoothingWindow, WindowState};
