//! Query modules for the SAIR REIT SDK.
//!
//! Each module provides a query struct that borrows a [`Storage`](crate::storage::Storage)
//! and exposes methods returning `Result<T>` with typed model payloads.
//! Creation and update methods validate their input before the store is
//! touched.

pub mod dashboard;
pub mod investments;
pub mod projects;
pub mod testimonials;
pub mod transactions;
pub mod users;

pub use dashboard::DashboardQuery;
pub use investments::InvestmentQuery;
pub use projects::ProjectQuery;
pub use testimonials::TestimonialQuery;
pub use transactions::TransactionQuery;
pub use users::UserQuery;
