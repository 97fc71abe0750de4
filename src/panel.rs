mod view;


pub use view::PanelView;

use crate::dispatch::{resolve_drawing, trace_label_id, trace_label_options};
use crate::model::{Frame, LabelId, find_label};
use crate::selection::{ParsedFrames, parse_frames_with_report};
use crate::store::{Intent, Store};

/// Headless selected-frames panel: owns the transient frame input and turns
/// user events into store intents.
#[derive(Debug, Clone, Default)]
pub struct SelectedFramesPanel<S> {
    store: S,
    input: String,
}

impl<S: Store> SelectedFramesPanel<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            input: String::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    /// "Add" button and Enter key. Returns `None` when the input is blank.
    ///
    /// Frames are dispatched and the input cleared only when at least one
    /// token parsed; otherwise the input is left for the user to fix.
    pub fn submit(&mut self) -> Option<ParsedFrames> {
        if self.input.trim().is_empty() {
            return None;
        }
        let range = self.store.state().frame_range();
        let parsed = parse_frames_with_report(&self.input, range);
        if !parsed.frames.is_empty() {
            self.store.dispatch(Intent::AddSelectedFrames {
                frames: parsed.frames.clone(),
            });
            self.input.clear();
        }
        Some(parsed)
    }

    /// Trace-label picker change. Unknown ids are ignored.
    pub fn choose_trace_label(&mut self, label_id: LabelId) -> bool {
        let state = self.store.state();
        let Some(label) = find_label(&state.labels, label_id) else {
            log::warn!("trace label {label_id} is not in the label catalogue");
            return false;
        };
        let config = resolve_drawing(label, &state.drawing);
        self.store.dispatch(Intent::UpdateDrawingConfiguration {
            config,
            remember: false,
        });
        true
    }

    pub fn remove_frame(&mut self, frame: Frame) {
        self.store.dispatch(Intent::RemoveSelectedFrame { frame });
    }

    /// "Clear" action; only available while frames are selected.
    pub fn clear(&mut self) -> bool {
        if self.store.state().selected_frames.is_empty() {
            return false;
        }
        self.store.dispatch(Intent::ClearSelectedFrames);
        true
    }

    pub fn view(&self) -> PanelView {
        let state = self.store.state();
        PanelView {
            trace_label: trace_label_id(&state.labels, state.drawing.active_label_id),
            options: trace_label_options(&state.labels),
            input: self.input.clone(),
            tags: state
                .selected_frames
                .frames()
                .iter()
                .map(|frame| format!("#{frame}"))
                .collect(),
            show_clear: !state.selected_frames.is_empty(),
        }
    }
}
