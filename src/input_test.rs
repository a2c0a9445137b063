use super::*;

#[test]
fn new_stores_fields() {
    let input = PointerInput::new(
        "mousedown",
        Point::new(50.0, 80.0),
        Some(TargetRect::new(10.0, 20.0, 300.0, 200.0)),
    );
    assert_eq!(input.raw_type, "mousedown");
    assert_eq!(input.client, Point::new(50.0, 80.0));
    assert_eq!(input.target_rect, Some(TargetRect::new(10.0, 20.0, 300.0, 200.0)));
}

#[test]
fn target_geometry_is_optional() {
    let input = PointerInput::new("touchmove", Point::new(1.0, 2.0), None);
    assert!(input.target_rect.is_none());
}
