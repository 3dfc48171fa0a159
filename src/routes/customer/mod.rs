mod handler;

pub use handler::{customer_view, render_default};
