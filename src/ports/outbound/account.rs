//! Account creation port.

use async_trait::async_trait;

use crate::domain::{AccountModel, AddAccountModel};
use crate::error::Result;

/// Port for account persistence.
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Create a new account and return it with its assigned ID.
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel>;
}
