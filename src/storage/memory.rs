//! In-process storage backed by ordered maps.

use std::cell::RefCell;
use std::collections::BTreeMap;

use chrono::Utc;
use tracing::debug;

use super::{seed, Storage};
use crate::error::Result;
use crate::models::{
    Investment, NewInvestment, NewProject, NewTestimonial, NewTransaction, NewUser, Project,
    ProjectUpdate, Testimonial, Transaction, User,
};

struct Tables {
    users: BTreeMap<i64, User>,
    projects: BTreeMap<i64, Project>,
    investments: BTreeMap<i64, Investment>,
    transactions: BTreeMap<i64, Transaction>,
    testimonials: BTreeMap<i64, Testimonial>,
    next_user_id: i64,
    next_project_id: i64,
    next_investment_id: i64,
    next_transaction_id: i64,
    next_testimonial_id: i64,
}

impl Tables {
    fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            projects: BTreeMap::new(),
            investments: BTreeMap::new(),
            transactions: BTreeMap::new(),
            testimonials: BTreeMap::new(),
            next_user_id: 1,
            next_project_id: 1,
            next_investment_id: 1,
            next_transaction_id: 1,
            next_testimonial_id: 1,
        }
    }
}

fn take_id(counter: &mut i64) -> i64 {
    let id = *counter;
    *counter += 1;
    id
}

/// Keeps every record in memory for the lifetime of the value.
///
/// Ids start at 1 per entity and are never reused. Nothing survives a
/// restart.
pub struct MemStorage {
    tables: RefCell<Tables>,
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemStorage {
    /// An empty store.
    pub fn new() -> Self {
        Self {
            tables: RefCell::new(Tables::new()),
        }
    }

    /// A store pre-loaded with the sample projects and testimonials.
    pub fn seeded() -> Result<Self> {
        let storage = Self::new();
        seed::seed_if_empty(&storage)?;
        Ok(storage)
    }
}

impl Storage for MemStorage {
    fn backend(&self) -> &'static str {
        "memory"
    }

    fn user(&self, id: i64) -> Result<Option<User>> {
        Ok(self.tables.borrow().users.get(&id).cloned())
    }

    fn user_by_username(&self, username: &str) -> Result<Option<User>> {
        Ok(self
            .tables
            .borrow()
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }

    fn user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .tables
            .borrow()
            .users
            .values()
            .find(|u| u.email == email)
            .cloned())
    }

    fn create_user(&self, user: NewUser) -> Result<User> {
        let mut tables = self.tables.borrow_mut();
        let id = take_id(&mut tables.next_user_id);
        let user = User::from_new(id, user, Utc::now());
        tables.users.insert(id, user.clone());
        debug!(id, "created user");
        Ok(user)
    }

    fn all_projects(&self) -> Result<Vec<Project>> {
        Ok(self.tables.borrow().projects.values().cloned().collect())
    }

    fn project(&self, id: i64) -> Result<Option<Project>> {
        Ok(self.tables.borrow().projects.get(&id).cloned())
    }

    fn create_project(&self, project: NewProject) -> Result<Project> {
        let mut tables = self.tables.borrow_mut();
        let id = take_id(&mut tables.next_project_id);
        let project = Project::from_new(id, project, Utc::now());
        tables.projects.insert(id, project.clone());
        debug!(id, title = %project.title, "created project");
        Ok(project)
    }

    fn update_project(&self, id: i64, update: ProjectUpdate) -> Result<Option<Project>> {
        let mut tables = self.tables.borrow_mut();
        let Some(project) = tables.projects.get_mut(&id) else {
            return Ok(None);
        };
        update.apply_to(project, Utc::now());
        debug!(id, "updated project");
        Ok(Some(project.clone()))
    }

    fn investments_by_user(&self, user_id: i64) -> Result<Vec<Investment>> {
        Ok(self
            .tables
            .borrow()
            .investments
            .values()
            .filter(|inv| inv.user_id == Some(user_id))
            .cloned()
            .collect())
    }

    fn investments_by_project(&self, project_id: i64) -> Result<Vec<Investment>> {
        Ok(self
            .tables
            .borrow()
            .investments
            .values()
            .filter(|inv| inv.project_id == Some(project_id))
            .cloned()
            .collect())
    }

    fn create_investment(&self, investment: NewInvestment) -> Result<Investment> {
        let mut tables = self.tables.borrow_mut();
        let id = take_id(&mut tables.next_investment_id);
        let investment = Investment::from_new(id, investment, Utc::now());
        tables.investments.insert(id, investment.clone());
        debug!(id, amount = investment.amount, "created investment");
        Ok(investment)
    }

    fn transactions_by_user(&self, user_id: i64) -> Result<Vec<Transaction>> {
        Ok(self
            .tables
            .borrow()
            .transactions
            .values()
            .filter(|tx| tx.user_id == Some(user_id))
            .cloned()
            .collect())
    }

    fn create_transaction(&self, transaction: NewTransaction) -> Result<Transaction> {
        let mut tables = self.tables.borrow_mut();
        let id = take_id(&mut tables.next_transaction_id);
        let transaction = Transaction::from_new(id, transaction, Utc::now());
        tables.transactions.insert(id, transaction.clone());
        debug!(id, kind = %transaction.kind, "created transaction");
        Ok(transaction)
    }

    fn all_testimonials(&self) -> Result<Vec<Testimonial>> {
        Ok(self.tables.borrow().testimonials.values().cloned().collect())
    }

    fn create_testimonial(&self, testimonial: NewTestimonial) -> Result<Testimonial> {
        let mut tables = self.tables.borrow_mut();
        let id = take_id(&mut tables.next_testimonial_id);
        let testimonial = Testimonial::from_new(id, testimonial, Utc::now());
        tables.testimonials.insert(id, testimonial.clone());
        debug!(id, "created testimonial");
        Ok(testimonial)
    }
}
