mod handler;
mod model;

pub use handler::{analyze_uploaded, export_sales, render_sample, sales_view, upload_sales};
