use std::fmt;

use airshape_base::{Hsl, Vec2};

use crate::{
    ClassifiedFrame, GeometryClassifier, GestureConfig, Hand, RawSample, RenderSink, Shape,
    Stabilizer, TrailBuffer,
};

/// A request to draw one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDraw {
    pub shape: Shape,
    /// Center in pixels
    pub position: Vec2<f32>,
    /// Pixels
    pub size: f32,
    pub color: Hsl,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrailDraw {
    pub draw: ShapeDraw,
    pub opacity: f32,
}

/// What the frame amounted to, for status display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameStatus {
    NoHand,
    Unrecognized,
    Tracking { shape: Shape, size: u32 },
}

impl FrameStatus {
    pub fn hand_present(&self) -> bool {
        !matches!(self, FrameStatus::NoHand)
    }
}

impl fmt::Display for FrameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameStatus::NoHand => f.write_str("None"),
            FrameStatus::Unrecognized => f.write_str("Gesture not recognized"),
            FrameStatus::Tracking { shape, .. } => f.write_str(shape.label()),
        }
    }
}

/// Result of processing one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameOutput {
    pub status: FrameStatus,
    /// Raw classifier output, present whenever a hand was.
    pub classified: Option<ClassifiedFrame>,
    /// Stable shape to draw this frame.
    pub current: Option<ShapeDraw>,
    /// Trail, oldest first. Drawn every frame, hand or not.
    pub trail: Vec<TrailDraw>,
}

/// Everything carried from one frame to the next.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    stabilizer: Stabilizer,
    trail: TrailBuffer,
}

impl FrameState {
    pub fn new(config: &GestureConfig) -> Self {
        Self {
            stabilizer: Stabilizer::from_config(config),
            trail: TrailBuffer::new(config.trail_capacity(), config.trail_max_opacity()),
        }
    }

    pub fn stabilizer(&self) -> &Stabilizer {
        &self.stabilizer
    }

    pub fn trail(&self) -> &TrailBuffer {
        &self.trail
    }

    /// Drop the trail, e.g. on an explicit "clear canvas" request. The
    /// smoothing history is kept.
    pub fn clear_trail(mut self) -> Self {
        self.trail.clear();
        self
    }
}

/// Classification, stabilization and trail bookkeeping for one frame at a
/// time. Holds only configuration; frame-to-frame state lives in
/// `FrameState`.
#[derive(Debug, Clone, Default)]
pub struct GesturePipeline {
    config: GestureConfig,
    classifier: GeometryClassifier,
}

impl GesturePipeline {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            classifier: GeometryClassifier::new(config.classifier().clone()),
            config,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn classifier(&self) -> &GeometryClassifier {
        &self.classifier
    }

    pub fn initial_state(&self) -> FrameState {
        FrameState::new(&self.config)
    }

    fn canvas_size(&self) -> Vec2<f32> {
        Vec2::new(
            self.config.canvas_width() as f32,
            self.config.canvas_height() as f32,
        )
    }

    /// Process one tracked frame.
    ///
    /// No hand resets the smoothing history. A hand without a recognised
    /// shape leaves the history untouched. A recognised shape is smoothed,
    /// becomes the current draw and is appended to the trail.
    pub fn step(&self, state: FrameState, hand: Option<&Hand>) -> (FrameState, FrameOutput) {
        let FrameState { stabilizer, mut trail } = state;

        let Some(hand) = hand else {
            if stabilizer.history_len() > 0 {
                log::debug!("Hand lost, clearing {} samples of history", stabilizer.history_len());
            }
            let state = FrameState {
                stabilizer: stabilizer.reset(),
                trail,
            };
            let output = FrameOutput {
                status: FrameStatus::NoHand,
                classified: None,
                current: None,
                trail: trail_draws(&state.trail),
            };
            return (state, output);
        };

        let classified = self.classifier.classify(hand);
        let (stabilizer, status, current) = match classified.shape {
            Some(shape) => {
                let sample = RawSample {
                    shape,
                    size: classified.raw_size,
                    hue: classified.raw_hue,
                };
                let (stabilizer, stable) = stabilizer.stabilize(sample);
                let draw = ShapeDraw {
                    shape: stable.shape,
                    position: classified.center * self.canvas_size(),
                    size: stable.size,
                    color: stable.color,
                };
                trail.push(draw.shape, draw.position, draw.size, draw.color);
                log::debug!(
                    "raw {} -> stable {}, size {:.1}px, {}",
                    shape,
                    stable.shape,
                    stable.size,
                    stable.color
                );
                let status = FrameStatus::Tracking {
                    shape: stable.shape,
                    size: stable.size.round() as u32,
                };
                (stabilizer, status, Some(draw))
            }
            None => {
                log::debug!(
                    "Unrecognized gesture with {} extended fingers",
                    classified.extended_finger_count
                );
                (stabilizer, FrameStatus::Unrecognized, None)
            }
        };

        let state = FrameState { stabilizer, trail };
        let output = FrameOutput {
            status,
            classified: Some(classified),
            current,
            trail: trail_draws(&state.trail),
        };
        (state, output)
    }
}

fn trail_draws(trail: &TrailBuffer) -> Vec<TrailDraw> {
    trail
        .iter_with_opacity()
        .map(|(entry, opacity)| TrailDraw {
            draw: ShapeDraw {
                shape: entry.shape,
                position: entry.position,
                size: entry.size,
                color: entry.color,
            },
            opacity,
        })
        .collect()
}

/// Draw a processed frame: hand overlay, current shape, then the trail.
pub fn render<S: RenderSink + ?Sized>(sink: &mut S, hand: Option<&Hand>, output: &FrameOutput) {
    sink.clear();
    if let Some(hand) = hand {
        sink.draw_hand(hand);
    }
    if let Some(current) = &output.current {
        sink.draw_shape(current, 1.0);
    }
    for entry in &output.trail {
        sink.draw_shape(&entry.draw, entry.opacity);
    }
}
