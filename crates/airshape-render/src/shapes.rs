use airshape_base::Vec2;
use airshape_gesture::{Hand, HandLandmark, HAND_SKELETON, Shape, ShapeDraw};

use crate::{
    raster::{draw_wide_line, fill_disc, segment_distance, shade_region},
    Canvas,
};

/// Width of the white border drawn around every shape, in pixels.
pub const OUTLINE_WIDTH: f32 = 3.0;

pub const OUTLINE_COLOR: [u8; 3] = [255, 255, 255];
pub const SKELETON_COLOR: [u8; 3] = [0, 255, 0];
pub const SKELETON_ALPHA: f32 = 0.5;
pub const SKELETON_WIDTH: u32 = 2;
pub const LANDMARK_RADIUS: i32 = 5;
pub const TIP_COLOR: [u8; 3] = [255, 0, 0];
pub const LANDMARK_COLOR: [u8; 3] = [0, 255, 0];

/// Draw a filled, outlined shape centred on `draw.position`.
///
/// The shape's extent is `draw.size` pixels: the circle diameter, the square
/// side or the triangle side. Every pixel is blended once at `opacity`, so
/// the outline does not double up over the fill.
pub fn draw_shape(canvas: &mut Canvas, draw: &ShapeDraw, opacity: f32) {
    if opacity <= 0.0 || draw.size <= 0.0 {
        return;
    }
    let fill = draw.color.to_rgb();
    let center = (draw.position.x, draw.position.y);
    let band = OUTLINE_WIDTH / 2.0;
    let half = draw.size / 2.0;
    let reach = half + band + 1.0;
    let min = (center.0 - reach, center.1 - reach);
    let max = (center.0 + reach, center.1 + reach);

    match draw.shape {
        Shape::Circle => shade_region(canvas, min, max, opacity, |x, y| {
            let d = ((x - center.0).powi(2) + (y - center.1).powi(2)).sqrt();
            pick(d <= half, (d - half).abs() <= band, fill)
        }),
        Shape::Square => shade_region(canvas, min, max, opacity, |x, y| {
            let d = (x - center.0).abs().max((y - center.1).abs());
            pick(d <= half, (d - half).abs() <= band, fill)
        }),
        Shape::Triangle => {
            let [apex, left, right] = triangle_vertices(draw.position, draw.size);
            shade_region(canvas, min, max, opacity, |x, y| {
                let p = (x, y);
                let edge = segment_distance(p, apex, left)
                    .min(segment_distance(p, left, right))
                    .min(segment_distance(p, right, apex));
                pick(inside_triangle(p, apex, left, right), edge <= band, fill)
            })
        }
    }
}

/// Apex-up equilateral triangle with side `size`, vertically centred on
/// `center`. Returns `[apex, bottom-left, bottom-right]`.
pub fn triangle_vertices(center: Vec2<f32>, size: f32) -> [(f32, f32); 3] {
    let height = size * 3.0_f32.sqrt() / 2.0;
    let top = center.y - height / 2.0;
    let bottom = center.y + height / 2.0;
    [
        (center.x, top),
        (center.x - size / 2.0, bottom),
        (center.x + size / 2.0, bottom),
    ]
}

/// Draw the hand overlay: translucent skeleton first, then one dot per
/// landmark with the thumb and index tips in red.
pub fn draw_hand(canvas: &mut Canvas, hand: &Hand) {
    let (width, height) = (canvas.width() as f32, canvas.height() as f32);
    let to_pixel = |index: HandLandmark| {
        let lm = hand.landmark(index);
        ((lm.x * width).round() as i32, (lm.y * height).round() as i32)
    };

    for (from, to) in HAND_SKELETON {
        draw_wide_line(
            canvas,
            to_pixel(from),
            to_pixel(to),
            SKELETON_WIDTH,
            SKELETON_COLOR,
            SKELETON_ALPHA,
        );
    }

    for index in HandLandmark::ALL {
        let color = match index {
            HandLandmark::ThumbTip | HandLandmark::IndexTip => TIP_COLOR,
            _ => LANDMARK_COLOR,
        };
        fill_disc(canvas, to_pixel(index), LANDMARK_RADIUS, color, 1.0);
    }
}

fn pick(inside: bool, on_outline: bool, fill: [u8; 3]) -> Option<[u8; 3]> {
    if on_outline {
        Some(OUTLINE_COLOR)
    } else if inside {
        Some(fill)
    } else {
        None
    }
}

fn inside_triangle(p: (f32, f32), a: (f32, f32), b: (f32, f32), c: (f32, f32)) -> bool {
    let cross = |u: (f32, f32), v: (f32, f32)| (v.0 - u.0) * (p.1 - u.1) - (v.1 - u.1) * (p.0 - u.0);
    let (d1, d2, d3) = (cross(a, b), cross(b, c), cross(c, a));
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}
