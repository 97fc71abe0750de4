mod error;
mod io;


pub use error::{SessionError, Result};
pub use io::{load_session, parse_session, save_session};
