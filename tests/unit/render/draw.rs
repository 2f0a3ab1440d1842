use super::*;
use kurbo::Shape;

#[test]
fn triangle_path_spans_apex_to_base() {
    let path = triangle_path(60.0);
    let bbox = path.bounding_box();
    assert_eq!(bbox.x0, -30.0);
    assert_eq!(bbox.x1, 30.0);
    assert_eq!(bbox.y0, -30.0);
    assert_eq!(bbox.y1, 0.0);
}

#[test]
fn fill_rect_grows_upward_with_progress() {
    let size = 60.0;

    let empty = fill_progress_rect(size, 0.0);
    assert_eq!(empty.height(), 0.0);

    let half = fill_progress_rect(size, 0.5);
    assert_eq!(half.y1, 0.0);
    assert_eq!(half.y0, -15.0);
    assert_eq!(half.width(), size);

    let full = fill_progress_rect(size, 1.0);
    assert_eq!(full.y0, -size / 2.0);
    assert_eq!(full.y1, 0.0);
}

#[test]
fn fill_rect_never_leaves_the_triangle_base() {
    let size = 60.0;
    let tri = triangle_path(size).bounding_box();
    for step in 0..=10 {
        let sc = f64::from(step) / 10.0;
        let rect = fill_progress_rect(size, sc);
        assert!(rect.y0 >= tri.y0);
        assert!(rect.y1 <= tri.y1);
    }
}
