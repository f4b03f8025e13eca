//! Shared building blocks for the airshape crates: logging, small vector
//! types and the HSL color used by the renderer.

pub mod color;
pub mod logging;
pub mod vec2;
pub mod vec3;

pub use color::Hsl;
pub use logging::{init_file_logger, init_stdout_logger, FileLogger, StdoutLogger};
pub use vec2::Vec2;
pub use vec3::Vec3;

// Re-export log crate so downstream crates can use airshape_base::log::*
pub use log;
