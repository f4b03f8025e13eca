use std::fmt;

#[derive(Debug, PartialEq)]
pub enum GestureError {
    /// A hand did not carry exactly the expected number of landmarks.
    LandmarkCount { expected: usize, got: usize },
    /// A landmark index outside 0..21.
    LandmarkIndex(usize),
    /// A recorded frame could not be decoded.
    Parse { line: usize, message: String },
    /// A frame could not be written in the recording format.
    Encode(String),
    Io(String),
}

impl fmt::Display for GestureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GestureError::LandmarkCount { expected, got } => {
                write!(f, "landmark count mismatch: expected {expected}, got {got}")
            }
            GestureError::LandmarkIndex(index) => {
                write!(f, "invalid landmark index {index}, must be in range 0-20")
            }
            GestureError::Parse { line, message } => write!(f, "parse error on line {line}: {message}"),
            GestureError::Encode(msg) => write!(f, "encode error: {msg}"),
            GestureError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for GestureError {}

impl From<std::io::Error> for GestureError {
    fn from(err: std::io::Error) -> Self {
        GestureError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for GestureError {
    fn from(err: serde_json::Error) -> Self {
        GestureError::Encode(err.to_string())
    }
}
