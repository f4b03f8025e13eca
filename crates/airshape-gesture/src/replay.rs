//! Recorded tracker output, one JSON object per line:
//!
//! ```text
//! {"multi_hand_landmarks": [[{"x": 0.5, "y": 0.9, "z": 0.0, "visibility": 0.99}, ...]]}
//! {"multi_hand_landmarks": []}
//! ```
//!
//! An empty or missing `multi_hand_landmarks` list is a frame without a
//! hand. Only the first hand of a frame is used.

use std::collections::VecDeque;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{FrameSource, GestureError, Hand, Landmark, TrackedFrame};

#[derive(Debug, Default, Serialize, Deserialize)]
struct RecordedFrame {
    #[serde(default)]
    multi_hand_landmarks: Vec<Vec<Landmark>>,
}

/// Decode one recorded line. `line` is 1-based and only used for errors.
pub fn parse_frame(line: usize, text: &str) -> Result<TrackedFrame, GestureError> {
    let recorded: RecordedFrame = serde_json::from_str(text).map_err(|e| GestureError::Parse {
        line,
        message: e.to_string(),
    })?;

    let mut hands = recorded.multi_hand_landmarks.into_iter();
    let Some(first) = hands.next() else {
        return Ok(TrackedFrame::empty());
    };
    if hands.len() > 0 {
        log::debug!("line {}: ignoring {} extra hand(s)", line, hands.len());
    }

    let hand = Hand::from_slice(&first).map_err(|e| GestureError::Parse {
        line,
        message: e.to_string(),
    })?;
    Ok(TrackedFrame::with_hand(hand))
}

/// Encode a frame in the recording format.
pub fn encode_frame(frame: &TrackedFrame) -> Result<String, GestureError> {
    let recorded = RecordedFrame {
        multi_hand_landmarks: frame
            .hand
            .iter()
            .map(|hand| hand.landmarks().to_vec())
            .collect(),
    };
    Ok(serde_json::to_string(&recorded)?)
}

/// Replays a JSON-lines recording as a `FrameSource`.
pub struct ReplaySource {
    lines: VecDeque<(usize, String)>,
    skipped: usize,
}

impl ReplaySource {
    /// Blank lines are skipped.
    pub fn from_text(text: &str) -> Self {
        let lines = text
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| (index + 1, line.to_string()))
            .collect();
        Self { lines, skipped: 0 }
    }

    pub async fn open(path: impl AsRef<Path>) -> Result<Self, GestureError> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path).await?;
        let source = Self::from_text(&text);
        log::info!("Loaded {} recorded frames from {}", source.remaining(), path.display());
        Ok(source)
    }

    /// Frames not yet received.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }

    /// Malformed lines dropped by `recv_valid` so far.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Like `recv`, but logs and drops lines that fail to decode instead of
    /// returning the error.
    pub async fn recv_valid(&mut self) -> Result<Option<TrackedFrame>, GestureError> {
        loop {
            match self.recv().await {
                Err(GestureError::Parse { line, message }) => {
                    log::warn!("Skipping recorded line {}: {}", line, message);
                    self.skipped += 1;
                }
                other => return other,
            }
        }
    }
}

impl FrameSource for ReplaySource {
    async fn recv(&mut self) -> Result<Option<TrackedFrame>, GestureError> {
        match self.lines.pop_front() {
            Some((line, text)) => parse_frame(line, &text).map(Some),
            None => Ok(None),
        }
    }
}
