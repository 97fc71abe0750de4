use super::{FrameService, LabelService, SessionService};

#[derive(Debug, Clone, Default)]
pub struct AppContext {
    frame_service: FrameService,
    label_service: LabelService,
    session_service: SessionService,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frame_service(&self) -> &FrameService {
        &self.frame_service
    }

    pub fn label_service(&self) -> &LabelService {
        &self.label_service
    }

    pub fn session_service(&self) -> &SessionService {
        &self.session_service
    }
}
