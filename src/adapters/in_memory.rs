//! Account store kept in process memory.
//!
//! Nothing survives a restart. Emails are unique, compared case-insensitively.

use std::collections::HashMap;

use async_trait::async_trait;
use rand::RngCore;
use rand::rngs::OsRng;
use tokio::sync::RwLock;

use crate::config::Accounts;
use crate::domain::{AccountModel, AddAccountModel};
use crate::error::{Error, Result, ToInternal};
use crate::ports::outbound::AddAccount;

/// In-memory [`AddAccount`] implementation.
pub struct InMemoryAccounts {
    id_length: usize,
    accounts: RwLock<HashMap<String, AccountModel>>,
}

impl InMemoryAccounts {
    /// Create an empty store.
    pub fn new(config: &Accounts) -> Self {
        Self {
            id_length: config.id_length,
            accounts: RwLock::default(),
        }
    }

    /// Find an account by email.
    pub async fn find_by_email(&self, email: &str) -> Option<AccountModel> {
        self.accounts.read().await.get(&email.to_lowercase()).cloned()
    }

    /// Number of stored accounts.
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    fn generate_id(&self) -> Result<String> {
        let mut bytes = vec![0u8; self.id_length];
        OsRng.try_fill_bytes(&mut bytes).catch()?;
        Ok(hex::encode(bytes))
    }
}

impl Default for InMemoryAccounts {
    fn default() -> Self {
        Self::new(&Accounts::default())
    }
}

#[async_trait]
impl AddAccount for InMemoryAccounts {
    async fn add(&self, account: AddAccountModel) -> Result<AccountModel> {
        let key = account.email.to_lowercase();
        let mut accounts = self.accounts.write().await;

        if accounts.contains_key(&key) {
            return Err(Error::EmailAlreadyUsed);
        }

        let account = account.into_account(self.generate_id()?);
        accounts.insert(key, account.clone());

        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_account(email: &str) -> AddAccountModel {
        AddAccountModel {
            name: "Teste".into(),
            email: email.into(),
            password: "teste@123".into(),
        }
    }

    #[tokio::test]
    async fn test_add_assigns_id() {
        let store = InMemoryAccounts::default();

        let first = store.add(new_account("teste@gmail.com")).await.unwrap();
        let second = store.add(new_account("other@gmail.com")).await.unwrap();

        assert_eq!(first.id.len(), Accounts::default().id_length * 2);
        assert!(first.id.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(first.id, second.id);
        assert_eq!(first.name, "Teste");
        assert_eq!(first.password, "teste@123");
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_email_is_unique() {
        let store = InMemoryAccounts::default();
        store.add(new_account("teste@gmail.com")).await.unwrap();

        let res = store.add(new_account("TESTE@gmail.com")).await;
        assert!(matches!(res, Err(Error::EmailAlreadyUsed)));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let store = InMemoryAccounts::new(&Accounts { id_length: 8 });
        assert!(store.is_empty().await);

        let account = store.add(new_account("teste@gmail.com")).await.unwrap();
        assert_eq!(account.id.len(), 16);
        assert_eq!(
            store.find_by_email("Teste@Gmail.com").await,
            Some(account)
        );
        assert_eq!(store.find_by_email("nobody@gmail.com").await, None);
    }
}
