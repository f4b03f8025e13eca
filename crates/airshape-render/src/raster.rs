//! Pixel-level primitives on a `Canvas`.

use crate::Canvas;

/// Draw a 1px line using Bresenham's algorithm, clipped to the canvas.
pub fn draw_line(canvas: &mut Canvas, from: (i32, i32), to: (i32, i32), color: [u8; 3], alpha: f32) {
    let Some(((mut x0, mut y0), (x1, y1))) = clip_line(from, to, canvas.width() as i32, canvas.height() as i32)
    else {
        return;
    };

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx - dy;

    loop {
        canvas.blend(x0, y0, color, alpha);
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x0 += sx;
        }
        if e2 < dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Draw a line `width` pixels wide by repeating it offset across its
/// minor axis. Offsets never overlap, so each pixel is blended once.
pub fn draw_wide_line(
    canvas: &mut Canvas,
    from: (i32, i32),
    to: (i32, i32),
    width: u32,
    color: [u8; 3],
    alpha: f32,
) {
    let mostly_vertical = (to.1 - from.1).abs() > (to.0 - from.0).abs();
    let first = -((width.max(1) as i32 - 1) / 2);
    for offset in first..first + width.max(1) as i32 {
        let (a, b) = if mostly_vertical {
            ((from.0 + offset, from.1), (to.0 + offset, to.1))
        } else {
            ((from.0, from.1 + offset), (to.0, to.1 + offset))
        };
        draw_line(canvas, a, b, color, alpha);
    }
}

/// Filled disc; pixels with `dx² + dy² <= r²` are painted.
pub fn fill_disc(canvas: &mut Canvas, center: (i32, i32), radius: i32, color: [u8; 3], alpha: f32) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                canvas.blend(center.0 + dx, center.1 + dy, color, alpha);
            }
        }
    }
}

/// Visit every pixel of the box `[min, max]` (clipped to the canvas) and
/// blend whatever color `shade` returns for it.
pub fn shade_region(
    canvas: &mut Canvas,
    min: (f32, f32),
    max: (f32, f32),
    alpha: f32,
    shade: impl Fn(f32, f32) -> Option<[u8; 3]>,
) {
    let x_start = min.0.floor().max(0.0) as i32;
    let y_start = min.1.floor().max(0.0) as i32;
    let x_end = max.0.ceil().min(canvas.width() as f32 - 1.0) as i32;
    let y_end = max.1.ceil().min(canvas.height() as f32 - 1.0) as i32;

    for y in y_start..=y_end {
        for x in x_start..=x_end {
            if let Some(color) = shade(x as f32, y as f32) {
                canvas.blend(x, y, color, alpha);
            }
        }
    }
}

/// Distance from `p` to the segment `a`-`b`.
pub fn segment_distance(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let (abx, aby) = (b.0 - a.0, b.1 - a.1);
    let len2 = abx * abx + aby * aby;
    let t = if len2 == 0.0 {
        0.0
    } else {
        (((p.0 - a.0) * abx + (p.1 - a.1) * aby) / len2).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.0 + abx * t, a.1 + aby * t);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}

// Cohen-Sutherland clipping
const INSIDE: u8 = 0; // 0000
const LEFT: u8 = 1; // 0001
const RIGHT: u8 = 2; // 0010
const BOTTOM: u8 = 4; // 0100
const TOP: u8 = 8; // 1000

fn outcode(x: i32, y: i32, width: i32, height: i32) -> u8 {
    let mut code = INSIDE;
    if x < 0 {
        code |= LEFT;
    } else if x >= width {
        code |= RIGHT;
    }
    if y < 0 {
        code |= TOP;
    } else if y >= height {
        code |= BOTTOM;
    }
    code
}

/// Clip a segment to `[0, width) x [0, height)`; `None` when nothing of it
/// is visible.
fn clip_line(
    (mut x0, mut y0): (i32, i32),
    (mut x1, mut y1): (i32, i32),
    width: i32,
    height: i32,
) -> Option<((i32, i32), (i32, i32))> {
    if width <= 0 || height <= 0 {
        return None;
    }
    loop {
        let code0 = outcode(x0, y0, width, height);
        let code1 = outcode(x1, y1, width, height);

        if code0 | code1 == INSIDE {
            return Some(((x0, y0), (x1, y1)));
        }
        if code0 & code1 != INSIDE {
            return None;
        }

        let code = if code0 != INSIDE { code0 } else { code1 };
        let (dx, dy) = ((x1 - x0) as i64, (y1 - y0) as i64);
        let (x, y) = if code & TOP != 0 {
            (x0 + (dx * (0 - y0) as i64 / dy) as i32, 0)
        } else if code & BOTTOM != 0 {
            (x0 + (dx * (height - 1 - y0) as i64 / dy) as i32, height - 1)
        } else if code & LEFT != 0 {
            (0, y0 + (dy * (0 - x0) as i64 / dx) as i32)
        } else {
            (width - 1, y0 + (dy * (width - 1 - x0) as i64 / dx) as i32)
        };

        if code == code0 {
            (x0, y0) = (x, y);
        } else {
            (x1, y1) = (x, y);
        }
    }
}
