use airshape_base::Hsl;

use crate::window::{smooth_mean, smooth_mode};
use crate::{GestureConfig, Shape, SmoothingWindow};

/// One frame's raw channel values, as produced by the classifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawSample {
    pub shape: Shape,
    /// Pixels
    pub size: f32,
    /// Degrees, unfloored
    pub hue: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StableSample {
    pub shape: Shape,
    pub size: f32,
    pub hue: f32,
    /// Smoothed hue floored to whole degrees.
    pub color: Hsl,
}

/// Sliding-window smoothing for the shape, size and hue channels.
///
/// Shape goes through a mode filter, size and hue through a moving average.
/// The three windows are independent but always filled and cleared
/// together.
#[derive(Debug, Clone, PartialEq)]
pub struct Stabilizer {
    shapes: SmoothingWindow<Shape>,
    sizes: SmoothingWindow<f32>,
    hues: SmoothingWindow<f32>,
    saturation: u8,
    lightness: u8,
}

impl Stabilizer {
    pub fn new(history_size: usize, saturation: u8, lightness: u8) -> Self {
        Self {
            shapes: SmoothingWindow::new(history_size),
            sizes: SmoothingWindow::new(history_size),
            hues: SmoothingWindow::new(history_size),
            saturation,
            lightness,
        }
    }

    pub fn from_config(config: &GestureConfig) -> Self {
        Self::new(
            config.history_size(),
            config.classifier().saturation(),
            config.classifier().lightness(),
        )
    }

    pub fn stabilize(self, sample: RawSample) -> (Self, StableSample) {
        let Self {
            shapes,
            sizes,
            hues,
            saturation,
            lightness,
        } = self;

        let (shapes, shape) = smooth_mode(shapes, sample.shape);
        let (sizes, size) = smooth_mean(sizes, sample.size);
        let (hues, hue) = smooth_mean(hues, sample.hue);

        let stable = StableSample {
            shape,
            size,
            hue,
            color: Hsl::from_degrees(hue, saturation, lightness),
        };
        let stabilizer = Self {
            shapes,
            sizes,
            hues,
            saturation,
            lightness,
        };
        (stabilizer, stable)
    }

    /// Forget all history. The next sample is smoothed on its own.
    pub fn reset(mut self) -> Self {
        self.shapes.clear();
        self.sizes.clear();
        self.hues.clear();
        self
    }

    /// Number of samples currently held (the same for every channel).
    pub fn history_len(&self) -> usize {
        self.shapes.len()
    }

    pub fn shape_window(&self) -> &SmoothingWindow<Shape> {
        &self.shapes
    }

    pub fn size_window(&self) -> &SmoothingWindow<f32> {
        &self.sizes
    }

    pub fn hue_window(&self) -> &SmoothingWindow<f32> {
        &self.hues
    }
}
