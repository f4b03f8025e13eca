use airshape_base::{Hsl, Vec2};
use airshape_gesture::{
    render, FrameOutput, FrameStatus, Hand, HandLandmark, Landmark, RenderSink, Shape, ShapeDraw, TrailDraw,
    HAND_LANDMARK_COUNT,
};
use airshape_render::{Canvas, RenderError};

const WHITE: [u8; 3] = [255, 255, 255];
const BLACK: [u8; 3] = [0, 0, 0];
const RED: [u8; 3] = [255, 0, 0];
const LIME: [u8; 3] = [0, 255, 0];

fn red_shape(shape: Shape, x: f32, y: f32, size: f32) -> ShapeDraw {
    ShapeDraw {
        shape,
        position: Vec2::new(x, y),
        size,
        color: Hsl::new(0, 100, 50),
    }
}

/// Landmarks spread along a horizontal line, 18px apart on a 400x100 canvas.
fn spread_hand() -> Hand {
    let landmarks: [Landmark; HAND_LANDMARK_COUNT] =
        std::array::from_fn(|i| Landmark::new((20.0 + 18.0 * i as f32) / 400.0, 0.5));
    Hand::new(landmarks)
}

fn landmark_pixel(index: HandLandmark) -> (usize, usize) {
    (20 + 18 * usize::from(index), 50)
}

// --- Canvas ---

#[test]
fn test_new_canvas_is_background() {
    let canvas = Canvas::with_background(3, 2, [10, 20, 30]);
    assert_eq!(canvas.data().len(), 3 * 2 * 3);
    assert_eq!(canvas.pixel(2, 1), Some([10, 20, 30]));
    assert_eq!(canvas.pixel(3, 0), None);
}

#[test]
fn test_blend_out_of_bounds_is_ignored() {
    let mut canvas = Canvas::new(2, 2);
    canvas.blend(-1, 0, WHITE, 1.0);
    canvas.blend(0, 2, WHITE, 1.0);
    assert!(canvas.data().iter().all(|&b| b == 0));
}

#[test]
fn test_to_argb_packs_rgb() {
    let mut canvas = Canvas::new(2, 1);
    canvas.blend(0, 0, [1, 2, 3], 1.0);
    canvas.blend(1, 0, WHITE, 1.0);
    assert_eq!(canvas.to_argb(), vec![0x0001_0203, 0x00FF_FFFF]);
}

#[test]
fn test_clear_restores_background() {
    let mut canvas = Canvas::with_background(20, 20, [5, 5, 5]);
    canvas.draw_shape(&red_shape(Shape::Square, 10.0, 10.0, 10.0), 1.0);
    assert_eq!(canvas.pixel(10, 10), Some(RED));

    canvas.clear();
    assert_eq!(canvas.pixel(10, 10), Some([5, 5, 5]));
}

#[test]
fn test_save_png_round_trip() {
    let path = std::env::temp_dir().join("airshape_render_test_frame.png");
    let mut canvas = Canvas::new(32, 24);
    canvas.draw_shape(&red_shape(Shape::Circle, 16.0, 12.0, 12.0), 1.0);

    canvas.save_png(&path).expect("png written");

    let decoded = image::open(&path).expect("png readable").to_rgb8();
    assert_eq!(decoded.dimensions(), (32, 24));
    assert_eq!(decoded.get_pixel(16, 12).0, RED);
    assert_eq!(decoded.get_pixel(0, 0).0, BLACK);

    std::fs::remove_file(&path).ok();
}

#[test]
fn test_save_png_into_missing_directory_fails() {
    let path = std::env::temp_dir()
        .join("airshape_render_missing_dir")
        .join("nested")
        .join("frame.png");
    let result = Canvas::new(4, 4).save_png(&path);
    assert!(matches!(result, Err(RenderError::Io(_))));
}

#[test]
fn test_render_error_display() {
    assert_eq!(RenderError::Buffer("short".into()).to_string(), "buffer error: short");
    assert_eq!(RenderError::Encode("bad".into()).to_string(), "encode error: bad");
    assert_eq!(RenderError::Io("gone".into()).to_string(), "io error: gone");
}

// --- Shapes ---

#[test]
fn test_circle_fill_and_outline() {
    let mut canvas = Canvas::new(100, 100);
    canvas.draw_shape(&red_shape(Shape::Circle, 50.0, 50.0, 40.0), 1.0);

    assert_eq!(canvas.pixel(50, 50), Some(RED));
    assert_eq!(canvas.pixel(50, 40), Some(RED));
    // Radius 20 lands on the outline
    assert_eq!(canvas.pixel(50, 30), Some(WHITE));
    assert_eq!(canvas.pixel(70, 50), Some(WHITE));
    assert_eq!(canvas.pixel(50, 27), Some(BLACK));
    // Square corner is outside the circle
    assert_eq!(canvas.pixel(34, 34), Some(BLACK));
}

#[test]
fn test_square_fill_and_outline() {
    let mut canvas = Canvas::new(100, 100);
    canvas.draw_shape(&red_shape(Shape::Square, 50.0, 50.0, 40.0), 1.0);

    assert_eq!(canvas.pixel(35, 35), Some(RED));
    assert_eq!(canvas.pixel(31, 50), Some(WHITE));
    assert_eq!(canvas.pixel(30, 30), Some(WHITE));
    assert_eq!(canvas.pixel(27, 50), Some(BLACK));
}

#[test]
fn test_triangle_points_up() {
    let mut canvas = Canvas::new(100, 100);
    canvas.draw_shape(&red_shape(Shape::Triangle, 50.0, 50.0, 40.0), 1.0);

    // Height 40 * sqrt(3) / 2, centred: apex near y = 32.7, base near y = 67.3
    assert_eq!(canvas.pixel(50, 50), Some(RED));
    assert_eq!(canvas.pixel(50, 60), Some(RED));
    assert_eq!(canvas.pixel(50, 67), Some(WHITE));
    assert_eq!(canvas.pixel(50, 20), Some(BLACK));
    // Left of the slanted edge at mid height
    assert_eq!(canvas.pixel(30, 50), Some(BLACK));
    // Wider near the base than near the apex
    assert_eq!(canvas.pixel(35, 64), Some(RED));
    assert_eq!(canvas.pixel(44, 38), Some(BLACK));
}

#[test]
fn test_shape_opacity_blends_over_background() {
    let mut canvas = Canvas::new(100, 100);
    canvas.draw_shape(&red_shape(Shape::Circle, 50.0, 50.0, 40.0), 0.5);

    assert_eq!(canvas.pixel(50, 50), Some([128, 0, 0]));
    assert_eq!(canvas.pixel(50, 30), Some([128, 128, 128]));
}

#[test]
fn test_zero_opacity_draws_nothing() {
    let mut canvas = Canvas::new(50, 50);
    canvas.draw_shape(&red_shape(Shape::Square, 25.0, 25.0, 20.0), 0.0);
    assert!(canvas.data().iter().all(|&b| b == 0));
}

#[test]
fn test_shape_partly_off_canvas() {
    let mut canvas = Canvas::new(30, 30);
    canvas.draw_shape(&red_shape(Shape::Circle, 0.0, 0.0, 40.0), 1.0);
    assert_eq!(canvas.pixel(0, 0), Some(RED));
    assert_eq!(canvas.pixel(29, 29), Some(BLACK));
}

#[test]
fn test_hsl_fill_color() {
    let mut canvas = Canvas::new(40, 40);
    let draw = ShapeDraw {
        color: Hsl::new(180, 70, 50),
        ..red_shape(Shape::Square, 20.0, 20.0, 30.0)
    };
    canvas.draw_shape(&draw, 1.0);
    assert_eq!(canvas.pixel(20, 20), Some(Hsl::new(180, 70, 50).to_rgb()));
}

// --- Hand overlay ---

#[test]
fn test_hand_tips_are_red() {
    let mut canvas = Canvas::new(400, 100);
    canvas.draw_hand(&spread_hand());

    let (x, y) = landmark_pixel(HandLandmark::ThumbTip);
    assert_eq!(canvas.pixel(x, y), Some(RED));
    let (x, y) = landmark_pixel(HandLandmark::IndexTip);
    assert_eq!(canvas.pixel(x, y), Some(RED));
    let (x, y) = landmark_pixel(HandLandmark::Wrist);
    assert_eq!(canvas.pixel(x, y), Some(LIME));
    let (x, y) = landmark_pixel(HandLandmark::MiddleTip);
    assert_eq!(canvas.pixel(x, y + 5), Some(LIME));
}

#[test]
fn test_hand_skeleton_is_green() {
    let mut canvas = Canvas::new(400, 100);
    canvas.draw_hand(&spread_hand());

    // Between the wrist and thumb CMC dots
    let pixel = canvas.pixel(29, 50).expect("in bounds");
    assert_eq!(pixel[0], 0);
    assert!(pixel[1] > 0);
    assert_eq!(pixel[2], 0);
    assert_eq!(canvas.pixel(29, 90), Some(BLACK));
}

#[test]
fn test_render_draws_current_and_trail() {
    let current = red_shape(Shape::Square, 50.0, 50.0, 20.0);
    let ghost = ShapeDraw {
        color: Hsl::new(240, 100, 50),
        ..red_shape(Shape::Square, 20.0, 20.0, 20.0)
    };
    let output = FrameOutput {
        status: FrameStatus::Tracking {
            shape: Shape::Square,
            size: 20,
        },
        classified: None,
        current: Some(current),
        trail: vec![TrailDraw {
            draw: ghost,
            opacity: 0.5,
        }],
    };

    let mut canvas = Canvas::new(100, 100);
    render(&mut canvas, None, &output);

    assert_eq!(canvas.pixel(50, 50), Some(RED));
    assert_eq!(canvas.pixel(20, 20), Some([0, 0, 128]));
}
