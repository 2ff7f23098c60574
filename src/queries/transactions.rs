//! Payment ledger entries.

use crate::error::Result;
use crate::models::{NewTransaction, Transaction};
use crate::storage::Storage;

pub struct TransactionQuery<'a> {
    storage: &'a dyn Storage,
}

impl<'a> TransactionQuery<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }

    pub fn by_user(&self, user_id: i64) -> Result<Vec<Transaction>> {
        self.storage.transactions_by_user(user_id)
    }

    pub fn create(&self, transaction: NewTransaction) -> Result<Transaction> {
        transaction.validate()?;
        self.storage.create_transaction(transaction)
    }
}
