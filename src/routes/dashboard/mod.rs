mod handler;

pub use handler::shell;
