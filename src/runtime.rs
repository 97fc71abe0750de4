mod context;
mod error;
mod frame_service;
mod label_service;
mod session_service;


pub use context::AppContext;
pub use error::{AppError, Result};
pub use frame_service::FrameService;
pub use label_service::{LabelService, TraceSelection};
pub use session_service::{PanelActions, SessionService};
