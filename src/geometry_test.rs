use super::*;

#[test]
fn shape_box_edges_and_centers() {
    let b = ShapeBox::new("a", 10.0, 20.0, 30.0, 40.0);
    assert!((b.right() - 40.0).abs() < f64::EPSILON);
    assert!((b.bottom() - 60.0).abs() < f64::EPSILON);
    assert!((b.center_x() - 25.0).abs() < f64::EPSILON);
    assert!((b.center_y() - 40.0).abs() < f64::EPSILON);
    assert!((b.end(Axis::Vertical) - 60.0).abs() < f64::EPSILON);
    assert!((b.center(Axis::Horizontal) - 25.0).abs() < f64::EPSILON);
}

#[test]
fn apply_only_touches_present_fields() {
    let mut b = ShapeBox::new("a", 1.0, 2.0, 3.0, 4.0);
    b.apply(&BoxPatch { top: Some(9.0), ..BoxPatch::default() });
    assert_eq!(b, ShapeBox::new("a", 1.0, 9.0, 3.0, 4.0));
}

#[test]
fn box_patch_fields_lists_present_values_in_order() {
    let patch = BoxPatch { left: Some(1.0), height: Some(2.0), ..BoxPatch::default() };
    let fields: Vec<_> = patch.fields().collect();
    assert_eq!(fields, vec![(Field::Left, 1.0), (Field::Height, 2.0)]);
    assert!(!patch.is_empty());
    assert!(BoxPatch::default().is_empty());
}

#[test]
fn position_patch_insert_merges_same_id() {
    let mut patch = PositionPatch::new();
    patch.insert("a", BoxPatch::start(Axis::Horizontal, 5.0));
    patch.insert("a", BoxPatch::start(Axis::Vertical, 7.0));
    patch.insert("b", BoxPatch::size(1.0, 2.0));

    assert_eq!(patch.len(), 2);
    assert_eq!(patch.get("a"), Some(&BoxPatch::position(5.0, 7.0)));
    let ids: Vec<_> = patch.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn box_patch_serializes_sparse() {
    let json = serde_json::to_value(BoxPatch::start(Axis::Vertical, 3.5)).unwrap();
    assert_eq!(json, serde_json::json!({"top": 3.5}));
}
