use std::path::Path;

use airshape_gesture::{Hand, RenderSink, ShapeDraw};

use crate::{shapes, RenderError};

/// RGB pixel buffer, row-major, 3 bytes per pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: usize,
    height: usize,
    background: [u8; 3],
    data: Vec<u8>,
}

impl Canvas {
    /// Black canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_background(width, height, [0, 0, 0])
    }

    pub fn with_background(width: usize, height: usize, background: [u8; 3]) -> Self {
        let mut canvas = Self {
            width,
            height,
            background,
            data: vec![0; width * height * 3],
        };
        canvas.fill(background);
        canvas
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn fill(&mut self, color: [u8; 3]) {
        for pixel in self.data.chunks_exact_mut(3) {
            pixel.copy_from_slice(&color);
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y * self.width + x) * 3;
        Some([self.data[idx], self.data[idx + 1], self.data[idx + 2]])
    }

    /// Blend `color` over the pixel at `(x, y)` with `alpha` in `[0, 1]`.
    /// Coordinates outside the canvas are ignored.
    pub fn blend(&mut self, x: i32, y: i32, color: [u8; 3], alpha: f32) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        let idx = (y as usize * self.width + x as usize) * 3;
        for (dst, src) in self.data[idx..idx + 3].iter_mut().zip(color) {
            let mixed = src as f32 * alpha + *dst as f32 * (1.0 - alpha);
            *dst = mixed.round().clamp(0.0, 255.0) as u8;
        }
    }

    /// Packed `0x00RRGGBB` pixels for minifb.
    pub fn to_argb(&self) -> Vec<u32> {
        self.data
            .chunks_exact(3)
            .map(|p| ((p[0] as u32) << 16) | ((p[1] as u32) << 8) | p[2] as u32)
            .collect()
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), RenderError> {
        let image = image::RgbImage::from_raw(self.width as u32, self.height as u32, self.data.clone())
            .ok_or_else(|| {
                RenderError::Buffer(format!(
                    "{} bytes do not fill a {}x{} RGB image",
                    self.data.len(),
                    self.width,
                    self.height
                ))
            })?;
        let path = path.as_ref();
        image.save_with_format(path, image::ImageFormat::Png)?;
        log::debug!("Wrote {}x{} frame to {}", self.width, self.height, path.display());
        Ok(())
    }
}

impl RenderSink for Canvas {
    fn clear(&mut self) {
        self.fill(self.background);
    }

    fn draw_hand(&mut self, hand: &Hand) {
        shapes::draw_hand(self, hand);
    }

    fn draw_shape(&mut self, draw: &ShapeDraw, opacity: f32) {
        shapes::draw_shape(self, draw, opacity);
    }
}
