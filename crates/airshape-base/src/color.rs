use std::fmt;

/// HSL color as used by the shape renderer. Hue is in whole degrees,
/// saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Floors a fractional hue in degrees, then wraps it into `0..360`
    /// the way CSS does, so `-10` becomes `350`.
    pub fn from_degrees(degrees: f32, saturation: u8, lightness: u8) -> Self {
        let hue = degrees.floor().rem_euclid(360.0) as u16;
        Self::new(hue.min(359), saturation, lightness)
    }

    /// Converts to 8-bit RGB. A hue of 360 or more wraps around.
    pub fn to_rgb(self) -> [u8; 3] {
        let h = (self.hue % 360) as f32 / 60.0;
        let s = self.saturation.min(100) as f32 / 100.0;
        let l = self.lightness.min(100) as f32 / 100.0;

        let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
        let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = l - chroma / 2.0;
        let to_u8 = |c: f32| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        [to_u8(r), to_u8(g), to_u8(b)]
    }
}

// CSS notation, e.g. `hsl(180, 70%, 50%)`
impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}
