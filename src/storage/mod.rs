//! Record stores behind the SDK.
//!
//! [`Storage`] is the seam between the query layer and persistence. Two
//! implementations ship with the crate: [`MemStorage`] keeps everything in
//! process memory, [`DuckDbStorage`] persists to a DuckDB file (or an
//! in-memory DuckDB database). The SDK builder picks one at construction;
//! callers may also inject their own.
//!
//! Implementations do not validate input. Validation happens in the query
//! layer before a store is called.

pub mod database;
pub mod memory;
pub mod seed;

pub use database::DuckDbStorage;
pub use memory::MemStorage;

use crate::error::Result;
use crate::models::{
    Investment, NewInvestment, NewProject, NewTestimonial, NewTransaction, NewUser, Project,
    ProjectUpdate, Testimonial, Transaction, User,
};

pub trait Storage: Send {
    /// Short backend name for logs and `Display` output.
    fn backend(&self) -> &'static str;

    // -- Users -------------------------------------------------------------

    fn user(&self, id: i64) -> Result<Option<User>>;
    fn user_by_username(&self, username: &str) -> Result<Option<User>>;
    fn user_by_email(&self, email: &str) -> Result<Option<User>>;
    fn create_user(&self, user: NewUser) -> Result<User>;

    // -- Projects ----------------------------------------------------------

    /// Every project, in id order. This is the snapshot the dashboard and
    /// the listings filter work from.
    fn all_projects(&self) -> Result<Vec<Project>>;
    fn project(&self, id: i64) -> Result<Option<Project>>;
    fn create_project(&self, project: NewProject) -> Result<Project>;
    /// Returns `None` when no project has the given id.
    fn update_project(&self, id: i64, update: ProjectUpdate) -> Result<Option<Project>>;

    // -- Investments -------------------------------------------------------

    fn investments_by_user(&self, user_id: i64) -> Result<Vec<Investment>>;
    fn investments_by_project(&self, project_id: i64) -> Result<Vec<Investment>>;
    fn create_investment(&self, investment: NewInvestment) -> Result<Investment>;

    // -- Transactions ------------------------------------------------------

    fn transactions_by_user(&self, user_id: i64) -> Result<Vec<Transaction>>;
    fn create_transaction(&self, transaction: NewTransaction) -> Result<Transaction>;

    // -- Testimonials ------------------------------------------------------

    fn all_testimonials(&self) -> Result<Vec<Testimonial>>;
    fn create_testimonial(&self, testimonial: NewTestimonial) -> Result<Testimonial>;
}
