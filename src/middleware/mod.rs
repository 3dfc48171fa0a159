mod error_handler;
mod session;

pub use error_handler::log_errors;
pub use session::{SESSION_COOKIE, session_id, session_middleware};
