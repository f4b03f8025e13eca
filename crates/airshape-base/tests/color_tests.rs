use airshape_base::Hsl;

#[test]
fn test_display_is_css() {
    assert_eq!(Hsl::new(180, 70, 50).to_string(), "hsl(180, 70%, 50%)");
}

#[test]
fn test_from_degrees_floors() {
    assert_eq!(Hsl::from_degrees(179.9, 70, 50).hue, 179);
}

#[test]
fn test_from_degrees_wraps_like_css() {
    assert_eq!(Hsl::from_degrees(-3.0, 70, 50).hue, 357);
    assert_eq!(Hsl::from_degrees(-10.5, 70, 50).hue, 349);
    assert_eq!(Hsl::from_degrees(360.0, 70, 50).hue, 0);
    assert_eq!(Hsl::from_degrees(370.2, 70, 50).to_string(), "hsl(10, 70%, 50%)");
}

#[test]
fn test_primary_hues() {
    assert_eq!(Hsl::new(0, 100, 50).to_rgb(), [255, 0, 0]);
    assert_eq!(Hsl::new(120, 100, 50).to_rgb(), [0, 255, 0]);
    assert_eq!(Hsl::new(240, 100, 50).to_rgb(), [0, 0, 255]);
}

#[test]
fn test_default_palette_color() {
    assert_eq!(Hsl::new(180, 70, 50).to_rgb(), [38, 217, 217]);
}

#[test]
fn test_hue_wraps_at_360() {
    assert_eq!(Hsl::new(360, 70, 50).to_rgb(), Hsl::new(0, 70, 50).to_rgb());
}

#[test]
fn test_lightness_extremes() {
    assert_eq!(Hsl::new(90, 70, 0).to_rgb(), [0, 0, 0]);
    assert_eq!(Hsl::new(90, 70, 100).to_rgb(), [255, 255, 255]);
}
