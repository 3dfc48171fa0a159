mod handler;
mod model;

pub use handler::{login, login_page, logout};
