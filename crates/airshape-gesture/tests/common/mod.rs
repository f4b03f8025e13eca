#![allow(dead_code)]

use airshape_gesture::{Finger, Hand, HandLandmark, Landmark, HAND_LANDMARK_COUNT};

/// Builds synthetic right-hand poses in normalized coordinates.
///
/// Knuckles sit on y = 0.7 with the wrist at (0.5, 0.9). An extended finger
/// points straight up (tip at y = 0.45); a curled finger folds below its
/// knuckle (tip at y = 0.72).
pub struct HandBuilder {
    landmarks: [Landmark; HAND_LANDMARK_COUNT],
}

fn finger_x(finger: Finger) -> f32 {
    match finger {
        Finger::Index => 0.45,
        Finger::Middle => 0.5,
        Finger::Ring => 0.55,
        Finger::Pinky => 0.6,
    }
}

fn dip(finger: Finger) -> HandLandmark {
    match finger {
        Finger::Index => HandLandmark::IndexDip,
        Finger::Middle => HandLandmark::MiddleDip,
        Finger::Ring => HandLandmark::RingDip,
        Finger::Pinky => HandLandmark::PinkyDip,
    }
}

impl HandBuilder {
    /// Fist: every finger curled, thumb tucked against the palm.
    pub fn fist() -> Self {
        let mut builder = Self {
            landmarks: [Landmark::default(); HAND_LANDMARK_COUNT],
        };
        builder.set(HandLandmark::Wrist, 0.5, 0.9);
        builder.set(HandLandmark::ThumbCmc, 0.42, 0.85);
        builder.set(HandLandmark::ThumbMcp, 0.38, 0.8);
        builder = builder.thumb(false);
        for finger in Finger::ALL {
            builder.set(finger.base(), finger_x(finger), 0.7);
            builder.finger(finger, false);
        }
        builder
    }

    pub fn open_palm() -> Self {
        Self::fist().thumb(true).fingers(&Finger::ALL)
    }

    pub fn set(&mut self, index: HandLandmark, x: f32, y: f32) -> &mut Self {
        self.landmarks[usize::from(index)] = Landmark::new(x, y);
        self
    }

    pub fn thumb(mut self, extended: bool) -> Self {
        if extended {
            self.set(HandLandmark::ThumbIp, 0.33, 0.76);
            self.set(HandLandmark::ThumbTip, 0.28, 0.72);
        } else {
            self.set(HandLandmark::ThumbIp, 0.39, 0.77);
            self.set(HandLandmark::ThumbTip, 0.40, 0.75);
        }
        self
    }

    pub fn finger(&mut self, finger: Finger, extended: bool) -> &mut Self {
        let x = finger_x(finger);
        if extended {
            self.set(finger.mid(), x, 0.6);
            self.set(dip(finger), x, 0.52);
            self.set(finger.tip(), x, 0.45);
        } else {
            self.set(finger.mid(), x, 0.62);
            self.set(dip(finger), x, 0.66);
            self.set(finger.tip(), x, 0.72);
        }
        self
    }

    pub fn fingers(mut self, fingers: &[Finger]) -> Self {
        for &finger in fingers {
            self.finger(finger, true);
        }
        self
    }

    /// Move the whole hand so the wrist lands on `wrist_y`.
    pub fn wrist_at(mut self, wrist_y: f32) -> Self {
        let dy = wrist_y - self.landmarks[0].y;
        for landmark in &mut self.landmarks {
            landmark.y += dy;
        }
        self
    }

    pub fn visibility(mut self, visible: usize, score: f32) -> Self {
        for (i, landmark) in self.landmarks.iter_mut().enumerate() {
            landmark.visibility = Some(if i < visible { score } else { 0.1 });
        }
        self
    }

    pub fn build(self) -> Hand {
        Hand::new(self.landmarks)
    }
}

/// All five digits pass their extension tests while the thumb tip touches a
/// lowered index tip.
pub fn pinching_open_palm() -> Hand {
    let mut builder = HandBuilder::open_palm();
    builder.set(HandLandmark::IndexTip, 0.30, 0.64);
    builder.set(HandLandmark::ThumbTip, 0.29, 0.66);
    builder.build()
}

pub fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}
