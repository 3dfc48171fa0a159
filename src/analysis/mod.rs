pub mod customer;
pub mod inventory;
pub mod sales;

pub use customer::{CustomerReport, Histogram, analyze_customers};
pub use inventory::{InventoryReport, LOW_STOCK_THRESHOLD, analyze_inventory};
pub use sales::{SalesMetrics, SalesReport, analyze_sales};
