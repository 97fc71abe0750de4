use crate::model::{DrawingConfiguration, Label, LabelKind, ObjectKind, ShapeKind};

/// Drawing configuration that results from choosing `label` as the trace label.
pub fn resolve_drawing(label: &Label, current: &DrawingConfiguration) -> DrawingConfiguration {
    let resolved = match label.kind.shape_kind() {
        None => DrawingConfiguration {
            active_label_id: Some(label.id),
            active_object_type: ObjectKind::Tag,
            active_shape_type: current.active_shape_type,
        },
        Some(ShapeKind::Mask) => DrawingConfiguration {
            active_label_id: Some(label.id),
            active_object_type: ObjectKind::Shape,
            active_shape_type: Some(ShapeKind::Mask),
        },
        Some(shape) => DrawingConfiguration {
            active_label_id: Some(label.id),
            active_object_type: match current.active_object_type {
                ObjectKind::Tag => ObjectKind::Shape,
                other => other,
            },
            active_shape_type: if inherits_shape(label.kind, current.active_shape_type) {
                current.active_shape_type
            } else {
                Some(shape)
            },
        },
    };
    log::debug!(
        "label {} ({:?}) resolved drawing {:?} -> {:?}",
        label.id,
        label.kind,
        current,
        resolved
    );
    resolved
}

// Wildcard labels keep the current shape tool, but never an implicit skeleton.
fn inherits_shape(kind: LabelKind, current: Option<ShapeKind>) -> bool {
    kind == LabelKind::Any && current != Some(ShapeKind::Skeleton)
}
