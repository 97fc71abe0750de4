use serde_json::json;

use crate::model::{
    CoreError, DrawingConfiguration, FrameRange, Label, LabelKind, ObjectKind, SelectedFrameSet,
    ShapeKind,
};

use super::{Intent, MemoryStore, SessionState, Store};

fn state() -> SessionState {
    SessionState {
        job: Some(FrameRange { start: 0, stop: 50 }),
        labels: vec![
            Label::new(1, "car", LabelKind::Rectangle),
            Label::new(2, "sunny", LabelKind::Tag),
        ],
        drawing: DrawingConfiguration::default(),
        selected_frames: SelectedFrameSet::from(vec![4]),
    }
}

#[test]
fn missing_job_falls_back_to_zero_range() {
    let empty = SessionState::default();
    assert_eq!(empty.frame_range(), FrameRange { start: 0, stop: 0 });
    assert!(empty.validate().is_ok());
}

#[test]
fn validate_rejects_duplicate_labels() {
    let mut session = state();
    session.labels.push(Label::new(1, "truck", LabelKind::Polygon));
    assert!(matches!(
        session.validate(),
        Err(CoreError::DuplicateLabel(1))
    ));
}

#[test]
fn validate_rejects_selected_frames_outside_job() {
    let mut session = state();
    session.selected_frames = SelectedFrameSet::from(vec![51]);
    assert!(matches!(
        session.validate(),
        Err(CoreError::FrameOutOfRange { frame: 51, .. })
    ));
}

#[test]
fn memory_store_reduces_frame_intents() {
    let mut store = MemoryStore::new(state());
    store.dispatch(Intent::AddSelectedFrames {
        frames: vec![10, 4, 20, 10],
    });
    assert_eq!(store.state().selected_frames.frames(), &[4, 10, 20]);
    store.dispatch(Intent::RemoveSelectedFrame { frame: 10 });
    store.dispatch(Intent::RemoveSelectedFrame { frame: 33 });
    assert_eq!(store.state().selected_frames.frames(), &[4, 20]);
    store.dispatch(Intent::ClearSelectedFrames);
    assert!(store.state().selected_frames.is_empty());
    assert_eq!(store.journal().len(), 4);
}

#[test]
fn memory_store_replaces_drawing_configuration() {
    let mut store = MemoryStore::new(state());
    let config = DrawingConfiguration::new(Some(1), ObjectKind::Shape, Some(ShapeKind::Rectangle));
    store.dispatch(Intent::UpdateDrawingConfiguration {
        config,
        remember: false,
    });
    assert_eq!(store.state().drawing, config);
    assert_eq!(store.into_state().drawing.active_label_id, Some(1));
}

#[test]
fn intents_serialize_with_type_tag() {
    let value = serde_json::to_value(Intent::RemoveSelectedFrame { frame: 3 })
        .expect("serialize intent");
    assert_eq!(value, json!({"type": "remove_selected_frame", "frame": 3}));
    let value = serde_json::to_value(Intent::ClearSelectedFrames).expect("serialize intent");
    assert_eq!(value, json!({"type": "clear_selected_frames"}));
}
