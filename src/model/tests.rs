use super::{
    CoreError, DrawingConfiguration, FrameRange, Label, LabelKind, ObjectKind, SelectedFrameSet,
    ShapeKind, find_label,
};

#[test]
fn frame_range_rejects_inverted_bounds() {
    let error = FrameRange::new(10, 2).expect_err("inverted range");
    assert!(matches!(
        error,
        CoreError::InvalidFrameRange { start: 10, stop: 2 }
    ));
    assert!(FrameRange::new(3, 3).is_ok());
}

#[test]
fn frame_range_clamps_into_bounds() {
    let range = FrameRange { start: 5, stop: 20 };
    assert_eq!(range.clamp(-3), 5);
    assert_eq!(range.clamp(12), 12);
    assert_eq!(range.clamp(i64::MAX), 20);
    assert_eq!(range.len(), 16);
}

#[test]
fn frame_range_clamp_tolerates_inverted_bounds() {
    let range = FrameRange { start: 9, stop: 4 };
    assert_eq!(range.clamp(0), 4);
    assert_eq!(range.clamp(100), 4);
    assert!(range.is_empty());
}

#[test]
fn selected_frames_keep_insertion_order_without_duplicates() {
    let mut set = SelectedFrameSet::from(vec![7, 3, 7]);
    assert_eq!(set.frames(), &[7, 3]);
    let added = set.extend_unique(&[3, 1, 1, 9]);
    assert_eq!(added, 2);
    assert_eq!(set.frames(), &[7, 3, 1, 9]);
    assert!(set.remove(3));
    assert!(!set.remove(3));
    assert_eq!(set.frames(), &[7, 1, 9]);
    set.clear();
    assert!(set.is_empty());
}

#[test]
fn selected_frames_validate_against_range() {
    let range = FrameRange { start: 0, stop: 10 };
    assert!(SelectedFrameSet::from(vec![0, 10]).validate_within(&range).is_ok());
    let error = SelectedFrameSet::from(vec![4, 11])
        .validate_within(&range)
        .expect_err("out of range");
    assert!(error.to_string().contains("11"));
}

#[test]
fn every_label_kind_maps_to_a_shape_except_tag() {
    assert_eq!(LabelKind::Tag.shape_kind(), None);
    assert_eq!(LabelKind::Any.shape_kind(), Some(ShapeKind::Any));
    assert_eq!(LabelKind::Mask.shape_kind(), Some(ShapeKind::Mask));
    assert_eq!(LabelKind::Skeleton.shape_kind(), Some(ShapeKind::Skeleton));
    assert_eq!(LabelKind::Cuboid.shape_kind(), Some(ShapeKind::Cuboid));
}

#[test]
fn label_uses_type_field_on_the_wire() {
    let label: Label = serde_json::from_value(serde_json::json!({
        "id": 4,
        "name": "car",
        "type": "rectangle"
    }))
    .expect("deserialize label");
    assert_eq!(label, Label::new(4, "car", LabelKind::Rectangle));
}

#[test]
fn drawing_configuration_wire_names() {
    let config = DrawingConfiguration::new(Some(2), ObjectKind::Shape, Some(ShapeKind::Polygon));
    let value = serde_json::to_value(config).expect("serialize config");
    assert_eq!(
        value,
        serde_json::json!({
            "activeLabelID": 2,
            "activeObjectType": "shape",
            "activeShapeType": "polygon"
        })
    );
    let empty: DrawingConfiguration =
        serde_json::from_value(serde_json::json!({})).expect("defaults");
    assert_eq!(empty, DrawingConfiguration::default());
}

#[test]
fn tag_configuration_has_no_effective_shape() {
    let config = DrawingConfiguration::new(Some(1), ObjectKind::Tag, Some(ShapeKind::Rectangle));
    assert_eq!(config.effective_shape(), None);
}

#[test]
fn find_label_by_id() {
    let labels = vec![
        Label::new(1, "person", LabelKind::Polygon),
        Label::new(2, "weather", LabelKind::Tag),
    ];
    assert_eq!(find_label(&labels, 2).map(|label| label.kind), Some(LabelKind::Tag));
    assert!(find_label(&labels, 3).is_none());
}
