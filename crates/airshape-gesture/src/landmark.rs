use airshape_base::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::GestureError;

/// Number of landmarks the hand tracker reports per hand.
pub const HAND_LANDMARK_COUNT: usize = 21;

/// One tracked point in normalized image coordinates.
///
/// `x` and `y` lie in `[0, 1]` with `y` growing downwards. Trackers that do
/// not report depth leave `z` at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<f32>,
}

impl Landmark {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            z: 0.0,
            visibility: None,
        }
    }

    pub fn with_z(mut self, z: f32) -> Self {
        self.z = z;
        self
    }

    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    pub fn planar(&self) -> Vec2<f32> {
        Vec2::new(self.x, self.y)
    }

    pub fn position(&self) -> Vec3<f32> {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// Anatomical landmark indices of a tracked hand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandLandmark {
    Wrist = 0,
    ThumbCmc = 1,
    ThumbMcp = 2,
    ThumbIp = 3,
    ThumbTip = 4,
    IndexMcp = 5,
    IndexPip = 6,
    IndexDip = 7,
    IndexTip = 8,
    MiddleMcp = 9,
    MiddlePip = 10,
    MiddleDip = 11,
    MiddleTip = 12,
    RingMcp = 13,
    RingPip = 14,
    RingDip = 15,
    RingTip = 16,
    PinkyMcp = 17,
    PinkyPip = 18,
    PinkyDip = 19,
    PinkyTip = 20,
}

impl HandLandmark {
    pub const ALL: [HandLandmark; HAND_LANDMARK_COUNT] = [
        HandLandmark::Wrist,
        HandLandmark::ThumbCmc,
        HandLandmark::ThumbMcp,
        HandLandmark::ThumbIp,
        HandLandmark::ThumbTip,
        HandLandmark::IndexMcp,
        HandLandmark::IndexPip,
        HandLandmark::IndexDip,
        HandLandmark::IndexTip,
        HandLandmark::MiddleMcp,
        HandLandmark::MiddlePip,
        HandLandmark::MiddleDip,
        HandLandmark::MiddleTip,
        HandLandmark::RingMcp,
        HandLandmark::RingPip,
        HandLandmark::RingDip,
        HandLandmark::RingTip,
        HandLandmark::PinkyMcp,
        HandLandmark::PinkyPip,
        HandLandmark::PinkyDip,
        HandLandmark::PinkyTip,
    ];
}

impl From<HandLandmark> for usize {
    fn from(index: HandLandmark) -> usize {
        index as usize
    }
}

impl TryFrom<usize> for HandLandmark {
    type Error = GestureError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        HandLandmark::ALL
            .get(value)
            .copied()
            .ok_or(GestureError::LandmarkIndex(value))
    }
}

/// The four non-thumb fingers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Finger {
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 4] = [Finger::Index, Finger::Middle, Finger::Ring, Finger::Pinky];

    pub fn tip(self) -> HandLandmark {
        match self {
            Finger::Index => HandLandmark::IndexTip,
            Finger::Middle => HandLandmark::MiddleTip,
            Finger::Ring => HandLandmark::RingTip,
            Finger::Pinky => HandLandmark::PinkyTip,
        }
    }

    /// PIP joint
    pub fn mid(self) -> HandLandmark {
        match self {
            Finger::Index => HandLandmark::IndexPip,
            Finger::Middle => HandLandmark::MiddlePip,
            Finger::Ring => HandLandmark::RingPip,
            Finger::Pinky => HandLandmark::PinkyPip,
        }
    }

    /// MCP joint
    pub fn base(self) -> HandLandmark {
        match self {
            Finger::Index => HandLandmark::IndexMcp,
            Finger::Middle => HandLandmark::MiddleMcp,
            Finger::Ring => HandLandmark::RingMcp,
            Finger::Pinky => HandLandmark::PinkyMcp,
        }
    }
}

/// One tracked hand: exactly 21 landmarks in anatomical order.
#[derive(Debug, Clone, PartialEq)]
pub struct Hand {
    landmarks: [Landmark; HAND_LANDMARK_COUNT],
}

impl Hand {
    pub fn new(landmarks: [Landmark; HAND_LANDMARK_COUNT]) -> Self {
        Self { landmarks }
    }

    /// Build a hand from tracker output, rejecting any other landmark count.
    pub fn from_slice(landmarks: &[Landmark]) -> Result<Self, GestureError> {
        let landmarks: [Landmark; HAND_LANDMARK_COUNT] =
            landmarks.try_into().map_err(|_| GestureError::LandmarkCount {
                expected: HAND_LANDMARK_COUNT,
                got: landmarks.len(),
            })?;
        Ok(Self { landmarks })
    }

    pub fn landmark(&self, index: HandLandmark) -> &Landmark {
        &self.landmarks[usize::from(index)]
    }

    pub fn landmarks(&self) -> &[Landmark; HAND_LANDMARK_COUNT] {
        &self.landmarks
    }

    /// Copy with every coordinate (depth included) multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            landmarks: self.landmarks.map(|l| Landmark {
                x: l.x * factor,
                y: l.y * factor,
                z: l.z * factor,
                visibility: l.visibility,
            }),
        }
    }
}

/// Landmark pairs joined by lines in the hand overlay
pub const HAND_SKELETON: [(HandLandmark, HandLandmark); 23] = {
    use HandLandmark::*;
    [
        // Thumb
        (Wrist, ThumbCmc),
        (ThumbCmc, ThumbMcp),
        (ThumbMcp, ThumbIp),
        (ThumbIp, ThumbTip),
        // Index
        (Wrist, IndexMcp),
        (IndexMcp, IndexPip),
        (IndexPip, IndexDip),
        (IndexDip, IndexTip),
        // Middle
        (Wrist, MiddleMcp),
        (MiddleMcp, MiddlePip),
        (MiddlePip, MiddleDip),
        (MiddleDip, MiddleTip),
        // Ring
        (Wrist, RingMcp),
        (RingMcp, RingPip),
        (RingPip, RingDip),
        (RingDip, RingTip),
        // Pinky
        (Wrist, PinkyMcp),
        (PinkyMcp, PinkyPip),
        (PinkyPip, PinkyDip),
        (PinkyDip, PinkyTip),
        // Palm
        (IndexMcp, MiddleMcp),
        (MiddleMcp, RingMcp),
        (RingMcp, PinkyMcp),
    ]
};
