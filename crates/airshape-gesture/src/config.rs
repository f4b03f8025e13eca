/// Number of recent samples each smoothing window keeps.
pub const HISTORY_SIZE: usize = 5;

/// Number of stable shapes kept for the fading trail.
pub const TRAIL_CAPACITY: usize = 10;

/// Thresholds and output ranges used by the geometry classifier.
///
/// Distances are in normalized landmark units unless noted otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassifierConfig {
    extended_threshold: f32,
    thumb_extended_threshold: f32,
    thumb_vertical_limit: f32,
    pinch_threshold: f32,
    min_pinch_distance: f32,
    max_pinch_distance: f32,
    min_size: f32,
    max_size: f32,
    saturation: u8,
    lightness: u8,
    visibility_threshold: f32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            extended_threshold: 0.05,
            thumb_extended_threshold: 0.08,
            thumb_vertical_limit: 0.3,
            pinch_threshold: 0.3,
            min_pinch_distance: 0.02,
            max_pinch_distance: 0.4,
            min_size: 30.0,
            max_size: 350.0,
            saturation: 70,
            lightness: 50,
            visibility_threshold: 0.5,
        }
    }
}

impl ClassifierConfig {
    /// Margin by which a fingertip must sit above its knuckle.
    pub fn with_extended_threshold(mut self, threshold: f32) -> Self {
        self.extended_threshold = threshold;
        self
    }

    /// Horizontal tip-to-base distance a thumb must exceed.
    pub fn with_thumb_extended_threshold(mut self, threshold: f32) -> Self {
        self.thumb_extended_threshold = threshold;
        self
    }

    /// Maximum vertical tip-to-wrist distance for an extended thumb.
    pub fn with_thumb_vertical_limit(mut self, limit: f32) -> Self {
        self.thumb_vertical_limit = limit;
        self
    }

    /// Normalized pinch distance below which the hand counts as pinching.
    pub fn with_pinch_threshold(mut self, threshold: f32) -> Self {
        self.pinch_threshold = threshold;
        self
    }

    /// Raw pinch distance range mapped onto the size range.
    pub fn with_pinch_range(mut self, min: f32, max: f32) -> Self {
        self.min_pinch_distance = min;
        self.max_pinch_distance = max;
        self
    }

    /// Output size range in pixels.
    pub fn with_size_range(mut self, min: f32, max: f32) -> Self {
        self.min_size = min;
        self.max_size = max;
        self
    }

    /// Fixed saturation and lightness of the derived color, in percent.
    pub fn with_color(mut self, saturation: u8, lightness: u8) -> Self {
        self.saturation = saturation;
        self.lightness = lightness;
        self
    }

    pub fn with_visibility_threshold(mut self, threshold: f32) -> Self {
        self.visibility_threshold = threshold;
        self
    }

    // Getters
    pub fn extended_threshold(&self) -> f32 {
        self.extended_threshold
    }

    pub fn thumb_extended_threshold(&self) -> f32 {
        self.thumb_extended_threshold
    }

    pub fn thumb_vertical_limit(&self) -> f32 {
        self.thumb_vertical_limit
    }

    pub fn pinch_threshold(&self) -> f32 {
        self.pinch_threshold
    }

    pub fn pinch_range(&self) -> (f32, f32) {
        (self.min_pinch_distance, self.max_pinch_distance)
    }

    pub fn size_range(&self) -> (f32, f32) {
        (self.min_size, self.max_size)
    }

    pub fn saturation(&self) -> u8 {
        self.saturation
    }

    pub fn lightness(&self) -> u8 {
        self.lightness
    }

    pub fn visibility_threshold(&self) -> f32 {
        self.visibility_threshold
    }
}

/// Configuration of the whole frame pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureConfig {
    classifier: ClassifierConfig,
    history_size: usize,
    trail_capacity: usize,
    trail_max_opacity: f32,
    canvas_width: u32,
    canvas_height: u32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            classifier: ClassifierConfig::default(),
            history_size: HISTORY_SIZE,
            trail_capacity: TRAIL_CAPACITY,
            trail_max_opacity: 0.5,
            canvas_width: 640,
            canvas_height: 480,
        }
    }
}

impl GestureConfig {
    pub fn with_classifier(mut self, classifier: ClassifierConfig) -> Self {
        self.classifier = classifier;
        self
    }

    /// Set the smoothing window length. Zero is raised to one.
    pub fn with_history_size(mut self, history_size: usize) -> Self {
        self.history_size = history_size.max(1);
        self
    }

    /// Set the trail length. Zero is raised to one.
    pub fn with_trail_capacity(mut self, capacity: usize) -> Self {
        self.trail_capacity = capacity.max(1);
        self
    }

    /// Opacity of the newest trail entry.
    pub fn with_trail_max_opacity(mut self, opacity: f32) -> Self {
        self.trail_max_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Canvas size in pixels that normalized positions are mapped onto.
    pub fn with_canvas_size(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    // Getters
    pub fn classifier(&self) -> &ClassifierConfig {
        &self.classifier
    }

    pub fn history_size(&self) -> usize {
        self.history_size
    }

    pub fn trail_capacity(&self) -> usize {
        self.trail_capacity
    }

    pub fn trail_max_opacity(&self) -> f32 {
        self.trail_max_opacity
    }

    pub fn canvas_width(&self) -> u32 {
        self.canvas_width
    }

    pub fn canvas_height(&self) -> u32 {
        self.canvas_height
    }
}
