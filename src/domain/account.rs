//! Account models.

use serde::{Deserialize, Serialize};

/// Account as returned by an [`AddAccount`](crate::ports::outbound::AddAccount)
/// implementation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountModel {
    /// Opaque identifier assigned on creation.
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
}

/// Data required to create an account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AddAccountModel {
    /// Turn creation data into an [`AccountModel`] with the given `id`.
    pub fn into_account(self, id: impl Into<String>) -> AccountModel {
        AccountModel {
            id: id.into(),
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}
