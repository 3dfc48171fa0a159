mod handler;

pub use handler::{inventory_view, render};
