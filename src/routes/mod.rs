pub mod auth;
pub mod customer;
pub mod dashboard;
pub mod inventory;
pub mod sales;
