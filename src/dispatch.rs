mod resolver;
mod visibility;


pub use resolver::resolve_drawing;
pub use visibility::{LabelOption, trace_label_id, trace_label_options};
