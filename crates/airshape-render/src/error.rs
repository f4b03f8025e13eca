use std::fmt;

#[derive(Debug)]
pub enum RenderError {
    /// Pixel buffer does not match the canvas dimensions.
    Buffer(String),
    Encode(String),
    Io(String),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Buffer(msg) => write!(f, "buffer error: {msg}"),
            RenderError::Encode(msg) => write!(f, "encode error: {msg}"),
            RenderError::Io(msg) => write!(f, "io error: {msg}"),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => RenderError::Io(e.to_string()),
            other => RenderError::Encode(other.to_string()),
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> Self {
        RenderError::Io(err.to_string())
    }
}
