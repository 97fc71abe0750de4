use super::{Intent, SessionState, Store};

/// In-process store that reduces intents into a [`SessionState`] and keeps a
/// journal of everything dispatched.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: SessionState,
    journal: Vec<Intent>,
}

impl MemoryStore {
    pub fn new(state: SessionState) -> Self {
        Self {
            state,
            journal: Vec::new(),
        }
    }

    pub fn journal(&self) -> &[Intent] {
        &self.journal
    }

    pub fn into_state(self) -> SessionState {
        self.state
    }
}

impl Store for MemoryStore {
    fn state(&self) -> &SessionState {
        &self.state
    }

    fn dispatch(&mut self, intent: Intent) {
        log::debug!("dispatch {intent:?}");
        self.state.apply(&intent);
        self.journal.push(intent);
    }
}
