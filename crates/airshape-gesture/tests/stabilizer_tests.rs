use airshape_gesture::{smooth_mean, smooth_mode, RawSample, Shape, SmoothingWindow, Stabilizer, WindowState};

use Shape::{Circle, Square, Triangle};

fn push_shapes(capacity: usize, shapes: &[Shape]) -> Shape {
    let mut window = SmoothingWindow::new(capacity);
    let mut last = None;
    for &shape in shapes {
        let (next, mode) = smooth_mode(window, shape);
        window = next;
        last = Some(mode);
    }
    last.expect("at least one shape")
}

fn sample(shape: Shape, size: f32, hue: f32) -> RawSample {
    RawSample { shape, size, hue }
}

// --- Window ---

#[test]
fn test_window_evicts_oldest_first() {
    let mut window = SmoothingWindow::new(3);
    assert_eq!(window.push(1), None);
    assert_eq!(window.push(2), None);
    assert_eq!(window.push(3), None);
    assert_eq!(window.push(4), Some(1));
    assert_eq!(window.iter().copied().collect::<Vec<_>>(), vec![2, 3, 4]);
    assert_eq!(window.len(), 3);
}

#[test]
fn test_window_never_exceeds_capacity() {
    let mut window = SmoothingWindow::new(5);
    for i in 0..50 {
        window.push(i as f32);
        assert!(window.len() <= 5);
    }
    assert_eq!(window.state(), WindowState::Full);
}

// --- Mode filter ---

#[test]
fn test_mode_majority_wins() {
    assert_eq!(push_shapes(5, &[Circle, Circle, Square, Circle, Square]), Circle);
}

#[test]
fn test_mode_tie_goes_to_first_seen() {
    assert_eq!(push_shapes(5, &[Circle, Square]), Circle);
    assert_eq!(push_shapes(5, &[Square, Circle]), Square);
    // Square reaches two first while scanning, but Circle appears first
    assert_eq!(push_shapes(5, &[Circle, Square, Square, Circle]), Circle);
}

#[test]
fn test_mode_only_sees_current_window() {
    // The three leading triangles are evicted by the time the last square lands
    let shapes = [Triangle, Triangle, Triangle, Square, Square, Circle, Square, Circle];
    assert_eq!(push_shapes(5, &shapes), Square);
}

#[test]
fn test_mode_of_empty_window_is_none() {
    assert_eq!(SmoothingWindow::<Shape>::new(5).mode(), None);
}

// --- Moving average ---

#[test]
fn test_mean_over_partial_window() {
    let window = SmoothingWindow::new(5);
    let (window, mean) = smooth_mean(window, 100.0);
    assert_eq!(mean, 100.0);
    let (_, mean) = smooth_mean(window, 200.0);
    assert_eq!(mean, 150.0);
}

#[test]
fn test_mean_converges_to_constant() {
    let mut window = SmoothingWindow::new(5);
    for v in [30.0, 350.0, 90.0, 12.0, 7.0] {
        window.push(v);
    }
    let mut mean = 0.0;
    for _ in 0..5 {
        let (next, m) = smooth_mean(window, 120.0);
        window = next;
        mean = m;
    }
    assert_eq!(mean, 120.0);
}

#[test]
fn test_mean_of_empty_window_is_none() {
    assert_eq!(SmoothingWindow::<f32>::new(5).mean(), None);
}

// --- Stabilizer ---

#[test]
fn test_stabilizer_first_sample_passes_through() {
    let (stabilizer, stable) = Stabilizer::new(5, 70, 50).stabilize(sample(Triangle, 42.0, 180.0));
    assert_eq!(stable.shape, Triangle);
    assert_eq!(stable.size, 42.0);
    assert_eq!(stable.hue, 180.0);
    assert_eq!(stable.color.to_string(), "hsl(180, 70%, 50%)");
    assert_eq!(stabilizer.history_len(), 1);
}

#[test]
fn test_stabilizer_smooths_every_channel() {
    let mut stabilizer = Stabilizer::new(5, 70, 50);
    let samples = [
        sample(Circle, 100.0, 10.0),
        sample(Circle, 200.0, 20.0),
        sample(Square, 300.0, 31.0),
    ];
    let mut last = None;
    for s in samples {
        let (next, stable) = stabilizer.stabilize(s);
        stabilizer = next;
        last = Some(stable);
    }
    let stable = last.unwrap();
    assert_eq!(stable.shape, Circle);
    assert_eq!(stable.size, 200.0);
    // (10 + 20 + 31) / 3 = 20.33, floored for the color only
    assert!((stable.hue - 61.0 / 3.0).abs() < 1e-4);
    assert_eq!(stable.color.hue, 20);
}

#[test]
fn test_stabilizer_windows_stay_bounded() {
    let mut stabilizer = Stabilizer::new(5, 70, 50);
    for i in 0..20 {
        stabilizer = stabilizer.stabilize(sample(Square, i as f32, i as f32)).0;
    }
    assert_eq!(stabilizer.history_len(), 5);
    assert_eq!(stabilizer.size_window().len(), 5);
    assert_eq!(stabilizer.hue_window().len(), 5);
    assert_eq!(stabilizer.shape_window().len(), 5);
}

#[test]
fn test_reset_starts_from_single_sample() {
    let mut stabilizer = Stabilizer::new(5, 70, 50);
    for _ in 0..4 {
        stabilizer = stabilizer.stabilize(sample(Circle, 350.0, 300.0)).0;
    }

    let stabilizer = stabilizer.reset();
    assert_eq!(stabilizer.history_len(), 0);
    assert_eq!(stabilizer.shape_window().state(), WindowState::Empty);

    let (_, stable) = stabilizer.stabilize(sample(Square, 64.0, 45.0));
    assert_eq!(stable.shape, Square);
    assert_eq!(stable.size, 64.0);
    assert_eq!(stable.hue, 45.0);
}
