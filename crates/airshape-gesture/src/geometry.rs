//! Per-frame geometric heuristics over a single hand.
//!
//! Everything here is stateless: the same landmarks always give the same
//! answer. Coordinates are normalized with `y` growing downwards, so "above"
//! means a smaller `y`.

use airshape_base::{Hsl, Vec2};

use crate::{ClassifierConfig, Finger, Hand, HandLandmark, Landmark, Shape};

/// Thumb-to-index distance, raw and normalized by hand size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchMeasure {
    /// 3D distance between thumb tip and index tip.
    pub distance: f32,
    /// `distance` divided by the planar thumb-base to index-base distance.
    pub normalized_distance: f32,
    pub is_pinching: bool,
}

/// Everything the classifier derives from one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedFrame {
    pub shape: Option<Shape>,
    pub pinch: PinchMeasure,
    /// `1 - wrist.y`: near 1 for a raised hand, near 0 for a lowered one.
    pub hand_height: f32,
    /// Normalized palm center.
    pub center: Vec2<f32>,
    pub extended_finger_count: u8,
    pub thumb_extended: bool,
    /// Size in pixels derived from the raw pinch distance.
    pub raw_size: f32,
    /// Unfloored hue in degrees derived from the hand height.
    pub raw_hue: f32,
    pub confidence: f32,
}

#[derive(Debug, Clone, Default)]
pub struct GeometryClassifier {
    config: ClassifierConfig,
}

impl GeometryClassifier {
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Straight-finger test on explicit tip, MCP and PIP landmarks.
    ///
    /// The tip must sit above the base by more than the extension margin,
    /// and the tip must be farther from the base than the mid joint is. A
    /// curled finger fails the second part because its tip folds back
    /// towards the knuckle.
    pub fn is_extended(&self, tip: &Landmark, base: &Landmark, mid: &Landmark) -> bool {
        let tip_to_base = tip.planar().distance(base.planar());
        let mid_to_base = mid.planar().distance(base.planar());
        tip.y < base.y - self.config.extended_threshold() && tip_to_base > mid_to_base
    }

    pub fn is_finger_extended(&self, hand: &Hand, finger: Finger) -> bool {
        self.is_extended(
            hand.landmark(finger.tip()),
            hand.landmark(finger.base()),
            hand.landmark(finger.mid()),
        )
    }

    /// The thumb moves sideways, so it is judged horizontally against its
    /// base, with a vertical guard against the wrist.
    pub fn is_thumb_extended(&self, hand: &Hand) -> bool {
        let tip = hand.landmark(HandLandmark::ThumbTip);
        let base = hand.landmark(HandLandmark::ThumbMcp);
        let wrist = hand.landmark(HandLandmark::Wrist);

        (tip.x - base.x).abs() > self.config.thumb_extended_threshold()
            && (tip.y - wrist.y).abs() < self.config.thumb_vertical_limit()
    }

    /// Thumb plus the four fingers, 0 to 5.
    pub fn extended_finger_count(&self, hand: &Hand) -> u8 {
        let fingers = Finger::ALL
            .into_iter()
            .filter(|&finger| self.is_finger_extended(hand, finger))
            .count() as u8;
        fingers + u8::from(self.is_thumb_extended(hand))
    }

    pub fn pinch(&self, hand: &Hand) -> PinchMeasure {
        let thumb_tip = hand.landmark(HandLandmark::ThumbTip).position();
        let index_tip = hand.landmark(HandLandmark::IndexTip).position();
        let distance = thumb_tip.distance(index_tip);

        let base_distance = hand
            .landmark(HandLandmark::ThumbMcp)
            .planar()
            .distance(hand.landmark(HandLandmark::IndexMcp).planar());
        let normalizer = if base_distance == 0.0 { 1.0 } else { base_distance };
        let normalized_distance = distance / normalizer;

        PinchMeasure {
            distance,
            normalized_distance,
            is_pinching: normalized_distance < self.config.pinch_threshold(),
        }
    }

    pub fn classify_shape(&self, hand: &Hand) -> Option<Shape> {
        let count = self.extended_finger_count(hand);
        let thumb = self.is_thumb_extended(hand);
        let pinching = self.pinch(hand).is_pinching;
        self.shape_for(hand, count, thumb, pinching)
    }

    // First match wins.
    fn shape_for(&self, hand: &Hand, count: u8, thumb: bool, pinching: bool) -> Option<Shape> {
        match count {
            5 if !pinching => Some(Shape::Circle),
            0 => Some(Shape::Square),
            1 if thumb => Some(Shape::Square),
            2 => {
                let peace = self.is_finger_extended(hand, Finger::Index)
                    && self.is_finger_extended(hand, Finger::Middle);
                peace.then_some(Shape::Triangle)
            }
            // Any three fingers, no identity check.
            3 => Some(Shape::Triangle),
            _ => None,
        }
    }

    /// Clamp, normalize, ease quadratically, then scale into the size range.
    pub fn size_for_pinch(&self, pinch_distance: f32) -> f32 {
        let (min_distance, max_distance) = self.config.pinch_range();
        let (min_size, max_size) = self.config.size_range();

        let clamped = pinch_distance.clamp(min_distance, max_distance);
        let normalized = (clamped - min_distance) / (max_distance - min_distance);
        let eased = normalized * normalized;
        min_size + eased * (max_size - min_size)
    }

    pub fn hand_height(&self, hand: &Hand) -> f32 {
        1.0 - hand.landmark(HandLandmark::Wrist).y
    }

    /// Hue in degrees, not yet floored.
    pub fn hue_for_height(&self, height: f32) -> f32 {
        height * 360.0
    }

    pub fn color_for_height(&self, height: f32) -> Hsl {
        Hsl::from_degrees(
            self.hue_for_height(height),
            self.config.saturation(),
            self.config.lightness(),
        )
    }

    /// Mean of the wrist and the index, middle and ring knuckles.
    pub fn hand_center(&self, hand: &Hand) -> Vec2<f32> {
        let points = [
            HandLandmark::Wrist,
            HandLandmark::IndexMcp,
            HandLandmark::MiddleMcp,
            HandLandmark::RingMcp,
        ]
        .map(|index| hand.landmark(index).planar());
        Vec2::centroid(&points).unwrap_or_default()
    }

    /// Fraction of landmarks whose visibility exceeds the threshold.
    /// Landmarks without a visibility score count as not visible.
    pub fn confidence(&self, hand: &Hand) -> f32 {
        let threshold = self.config.visibility_threshold();
        let visible = hand
            .landmarks()
            .iter()
            .filter(|l| l.visibility.is_some_and(|v| v > threshold))
            .count();
        visible as f32 / hand.landmarks().len() as f32
    }

    pub fn classify(&self, hand: &Hand) -> ClassifiedFrame {
        let thumb_extended = self.is_thumb_extended(hand);
        let extended_finger_count = self.extended_finger_count(hand);
        let pinch = self.pinch(hand);
        let hand_height = self.hand_height(hand);

        ClassifiedFrame {
            shape: self.shape_for(hand, extended_finger_count, thumb_extended, pinch.is_pinching),
            raw_size: self.size_for_pinch(pinch.distance),
            raw_hue: self.hue_for_height(hand_height),
            pinch,
            hand_height,
            center: self.hand_center(hand),
            extended_finger_count,
            thumb_extended,
            confidence: self.confidence(hand),
        }
    }
}
